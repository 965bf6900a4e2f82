//! `logging`: 프로세스 출력 상세도 조회/변경.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::routing::{Command, CommandSpec, ServiceProvider, subcommand};
use crate::application::usecases::settings::SettingsService;
use crate::domain::command::ChoiceValue;
use crate::domain::logging::LogVerbosity;

pub struct LoggingCommand {
    settings: SettingsService,
}

#[async_trait]
impl Command for LoggingCommand {
    async fn execute(&self) -> Result<()> {
        println!("{}", self.settings.verbosity().name());
        Ok(())
    }
}

pub fn spec() -> CommandSpec<LoggingCommand> {
    CommandSpec::new(
        "logging",
        "Commandset for handling logging.",
        |services: &ServiceProvider| {
            Ok(LoggingCommand {
                settings: services.resolve()?,
            })
        },
    )
    .subcommand(
        subcommand("configure", "Configure logging.")
            .option("verbosity", "Set the verbosity.", LogVerbosity::Minimal)
            .handler(|cmd: &LoggingCommand, args| {
                cmd.settings.set_verbosity(args.get("verbosity")?);
                Ok(())
            }),
    )
}
