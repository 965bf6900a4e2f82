//! Interface layer
//! CLI/REPL 진입점, 명령 정의, 의존성 조립을 담당한다.

pub mod cli;
pub mod commands;
pub mod composition;
