//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::io;

use anyhow::Result;

use crate::application::config::Config;
use crate::domain::logging::LogEntry;

/// 로그 출력 포트. 상세도 게이트는 구현체가 적용한다.
pub trait Logger: Send + Sync {
    fn log(&self, entry: LogEntry);
}

/// 기본 시스템 태그/최소 상세도로 심각도별 로그를 남기는 편의 메서드.
pub trait LoggerExt {
    fn info(&self, message: impl Into<String>);
    fn warn(&self, message: impl Into<String>);
    fn error(&self, message: impl Into<String>);
}

impl<L: Logger + ?Sized> LoggerExt for L {
    #[track_caller]
    fn info(&self, message: impl Into<String>) {
        self.log(LogEntry::info(message));
    }

    #[track_caller]
    fn warn(&self, message: impl Into<String>) {
        self.log(LogEntry::warning(message));
    }

    #[track_caller]
    fn error(&self, message: impl Into<String>) {
        self.log(LogEntry::error(message));
    }
}

/// 식별자 단위 CRUD 저장소 포트.
/// 실패는 예외 대신 `false`/`None`으로 표현한다.
pub trait Repository<T>: Send + Sync {
    /// 역직렬화에 실패한 레코드는 조용히 건너뛴다.
    fn get_all(&self) -> Vec<T>;
    fn get_by_id(&self, id: &str) -> Option<T>;
    fn add(&self, entity: &T) -> bool;
    /// 기존 레코드가 있을 때만 덮어쓴다.
    fn update(&self, entity: &T) -> bool;
    fn delete(&self, id: &str) -> bool;
}

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 예제 API 메시지 제공 포트.
pub trait MessageApi: Send + Sync {
    fn message(&self) -> String;
}

/// REPL 한 줄 입력 포트. 블로킹 호출이며 EOF면 `None`.
pub trait LineReader: Send {
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// 프로세스 강제 종료 포트.
pub trait ProcessControl: Send + Sync {
    fn exit(&self, code: i32);
}

/// 터미널 화면 제어 포트.
pub trait Screen: Send + Sync {
    fn clear(&self) -> Result<()>;
}
