//! `config`: 병합된 설정과 탐색 경로를 JSON으로 출력한다.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::routing::{Command, CommandSpec, ServiceProvider};
use crate::application::usecases::settings::SettingsService;

pub struct ConfigCommand {
    settings: SettingsService,
}

#[async_trait]
impl Command for ConfigCommand {
    async fn execute(&self) -> Result<()> {
        println!("{}", self.settings.inspect()?);
        Ok(())
    }
}

pub fn spec() -> CommandSpec<ConfigCommand> {
    CommandSpec::new(
        "config",
        "Show effective merged config.",
        |services: &ServiceProvider| {
            Ok(ConfigCommand {
                settings: services.resolve()?,
            })
        },
    )
}
