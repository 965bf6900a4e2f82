//! 단발성 CLI 실행.

use crate::application::ports::{Logger, LoggerExt};
use crate::application::routing::CommandsHost;

/// 토큰 한 벌을 디스패치하고 종료 코드를 돌려준다.
pub async fn run_cli(host: &CommandsHost, logger: &dyn Logger, tokens: &[String]) -> i32 {
    logger.info("App 1.0");
    let report = host.parse(tokens).await;
    if let Some(help) = &report.help {
        print!("{help}");
    }

    let code = report.code;
    if code > 0 {
        logger.error(format!("Error! Code ='{code}'"));
    } else {
        logger.info("OK!");
    }
    code
}
