//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod config_repository;
mod console;
mod message_api;
mod process;

pub use config_repository::JsonConfigRepository;
pub use console::{ConsoleLineReader, ConsoleScreen};
pub use message_api::StaticMessageApi;
pub use process::ProcessExit;
