//! 앱에 포함된 명령 묶음(코드 단위).
//! 각 명령은 서비스 컨테이너에서 협력 객체를 꺼내 매 디스패치마다 새로 만들어진다.

pub mod api;
pub mod config;
pub mod logging;
pub mod position;
pub mod shell;

use crate::application::routing::CommandUnit;

/// 앱 기능 명령(`api`, `position`, `config`).
pub fn app_unit() -> CommandUnit {
    CommandUnit::new("app")
        .command(api::spec())
        .command(position::spec())
        .command(config::spec())
}

/// 로그 상세도 명령(`logging`).
pub fn logging_unit() -> CommandUnit {
    CommandUnit::new("logging").command(logging::spec())
}

/// REPL 전용 명령(`exit`, `clear`).
pub fn shell_unit() -> CommandUnit {
    CommandUnit::new("shell")
        .command(shell::exit_spec())
        .command(shell::clear_spec())
}
