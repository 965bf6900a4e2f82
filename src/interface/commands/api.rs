//! `api`: 예제 API 메시지 출력과 심각도별 로그 테스트.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::application::ports::{Logger, LoggerExt, MessageApi};
use crate::application::routing::{Command, CommandSpec, ServiceProvider, subcommand};
use crate::domain::logging::Severity;

pub struct ApiCommand {
    api: Arc<dyn MessageApi>,
    logger: Arc<dyn Logger>,
}

impl ApiCommand {
    fn from_services(services: &ServiceProvider) -> Result<Self> {
        Ok(Self {
            api: services.resolve::<Arc<dyn MessageApi>>()?,
            logger: services.resolve::<Arc<dyn Logger>>()?,
        })
    }

    /// 정보/경고/오류 외의 심각도는 아무것도 남기지 않는다.
    fn log(&self, level: Severity) -> Result<()> {
        match level {
            Severity::Information => self.logger.info("Information."),
            Severity::Warning => self.logger.warn("Warning"),
            Severity::Error => self.logger.error("Error"),
            _ => {}
        }
        Ok(())
    }
}

#[async_trait]
impl Command for ApiCommand {
    async fn execute(&self) -> Result<()> {
        println!("{}", self.api.message());
        Ok(())
    }
}

pub fn spec() -> CommandSpec<ApiCommand> {
    CommandSpec::new("api", "Get message from the API.", ApiCommand::from_services).subcommand(
        subcommand("log", "Testing subcommand logging.")
            .option("logLevel", "Type.", Severity::Information)
            .handler(|cmd: &ApiCommand, args| cmd.log(args.get("logLevel")?)),
    )
}
