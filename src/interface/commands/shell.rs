//! REPL 전용 명령.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::application::context::CancellationSignal;
use crate::application::ports::{ProcessControl, Screen};
use crate::application::routing::{Command, CommandSpec, ServiceProvider};

/// 취소 신호를 설정한 뒤 프로세스를 즉시 종료한다.
pub struct ExitCommand {
    cancellation: CancellationSignal,
    process: Arc<dyn ProcessControl>,
}

#[async_trait]
impl Command for ExitCommand {
    async fn execute(&self) -> Result<()> {
        self.cancellation.cancel();
        self.process.exit(0);
        Ok(())
    }
}

pub struct ClearCommand {
    screen: Arc<dyn Screen>,
}

#[async_trait]
impl Command for ClearCommand {
    async fn execute(&self) -> Result<()> {
        self.screen.clear()
    }
}

pub fn exit_spec() -> CommandSpec<ExitCommand> {
    CommandSpec::new("exit", "Exit the repl.", |services: &ServiceProvider| {
        Ok(ExitCommand {
            cancellation: services.resolve()?,
            process: services.resolve()?,
        })
    })
}

pub fn clear_spec() -> CommandSpec<ClearCommand> {
    CommandSpec::new("clear", "Clear the terminal.", |services: &ServiceProvider| {
        Ok(ClearCommand {
            screen: services.resolve()?,
        })
    })
}
