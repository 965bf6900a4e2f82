//! CLI 인터페이스 모듈 묶음.
//! 인자 파싱, 단발 실행, REPL 루프를 한 네임스페이스로 관리한다.

pub mod command;
pub mod oneshot;
pub mod repl;

use crate::application::ports::LoggerExt;
use crate::application::routing::error::EXIT_HANDLER;
use crate::infrastructure::adapters::ConsoleLineReader;
use crate::interface::composition::{AppComposition, HostMode};

pub use command::{Cli, CliAction};
pub use oneshot::run_cli;
pub use repl::run_repl;

/// 선택된 동작을 실행하고 프로세스 종료 코드를 돌려준다.
pub async fn run(composition: &AppComposition, action: CliAction) -> i32 {
    let logger = composition.logger();
    let mode = match action {
        CliAction::Interactive => HostMode::Repl,
        CliAction::Dispatch(_) => HostMode::Cli,
    };

    let host = match composition.commands_host(mode) {
        Ok(host) => host,
        Err(err) => {
            logger.error(err.to_string());
            return err.exit_code();
        }
    };

    match action {
        CliAction::Dispatch(tokens) => run_cli(&host, logger.as_ref(), &tokens).await,
        CliAction::Interactive => {
            let cancellation = composition.context().cancellation.clone();
            let on_interrupt = cancellation.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    on_interrupt.cancel();
                }
            });

            match run_repl(
                &host,
                logger.as_ref(),
                &cancellation,
                Box::new(ConsoleLineReader::new()),
            )
            .await
            {
                Ok(()) => 0,
                Err(err) => {
                    logger.error(format!("{err:#}"));
                    EXIT_HANDLER
                }
            }
        }
    }
}
