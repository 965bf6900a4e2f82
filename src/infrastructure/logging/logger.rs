use tracing::Level;

use crate::application::context::VerbosityHandle;
use crate::application::ports::Logger;
use crate::domain::command::ChoiceValue;
use crate::domain::logging::{LogEntry, Severity};

/// 상세도 게이트를 적용하고 `tracing` 이벤트로 내보내는 로거.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    verbosity: VerbosityHandle,
}

impl TracingLogger {
    pub fn new(verbosity: VerbosityHandle) -> Self {
        Self { verbosity }
    }
}

impl Logger for TracingLogger {
    fn log(&self, entry: LogEntry) {
        let configured = self.verbosity.get();
        if !entry.is_visible_at(configured) {
            return;
        }

        // 템플릿은 호출 시점의 설정 상세도로 정한다.
        // 필드는 `routekit.` 접두사로 다른 이벤트의 같은 이름 필드와 구분한다.
        macro_rules! emit {
            ($level:expr) => {
                tracing::event!(
                    $level,
                    routekit.system = %entry.system,
                    routekit.severity = entry.severity.name(),
                    routekit.verbosity = configured.name(),
                    routekit.file = entry.file_name(),
                    routekit.line = entry.location.line(),
                    "{}",
                    entry.message
                )
            };
        }

        match entry.severity {
            Severity::Trace => emit!(Level::TRACE),
            Severity::Debug => emit!(Level::DEBUG),
            Severity::Information => emit!(Level::INFO),
            Severity::Warning => emit!(Level::WARN),
            Severity::Error | Severity::Critical => emit!(Level::ERROR),
        }
    }
}
