//! 로그 상세도/심각도와 로그 항목 값 객체.

use std::panic::Location;

use serde::{Deserialize, Serialize};

use crate::domain::command::ChoiceValue;
use crate::impl_choice_arg;

/// 출력 상세도. 숫자가 작을수록 더 자세하다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum LogVerbosity {
    Verbose = 0,
    Normal = 1,
    Minimal = 2,
}

impl LogVerbosity {
    pub fn from_ordinal(value: u8) -> Self {
        match value {
            0 => Self::Verbose,
            1 => Self::Normal,
            _ => Self::Minimal,
        }
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

impl ChoiceValue for LogVerbosity {
    const NAMES: &'static [&'static str] = &["Verbose", "Normal", "Minimal"];

    fn name(self) -> &'static str {
        match self {
            Self::Verbose => "Verbose",
            Self::Normal => "Normal",
            Self::Minimal => "Minimal",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "Verbose" => Some(Self::Verbose),
            "Normal" => Some(Self::Normal),
            "Minimal" => Some(Self::Minimal),
            _ => None,
        }
    }
}

impl_choice_arg!(LogVerbosity);

/// 로그 심각도.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Trace,
    Debug,
    Information,
    Warning,
    Error,
    Critical,
}

impl ChoiceValue for Severity {
    const NAMES: &'static [&'static str] = &[
        "Trace",
        "Debug",
        "Information",
        "Warning",
        "Error",
        "Critical",
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Trace => "Trace",
            Self::Debug => "Debug",
            Self::Information => "Information",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Critical => "Critical",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "Trace" => Some(Self::Trace),
            "Debug" => Some(Self::Debug),
            "Information" => Some(Self::Information),
            "Warning" => Some(Self::Warning),
            "Error" => Some(Self::Error),
            "Critical" => Some(Self::Critical),
            _ => None,
        }
    }
}

impl_choice_arg!(Severity);

pub const DEFAULT_LOG_SYSTEM: &str = "main";

/// 로거에 전달되는 한 건의 메시지.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub message: String,
    pub system: String,
    pub severity: Severity,
    /// 이 항목이 출력되기 위한 최소 상세도.
    pub minimal_verbosity: LogVerbosity,
    pub location: &'static Location<'static>,
}

impl LogEntry {
    #[track_caller]
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            system: DEFAULT_LOG_SYSTEM.to_string(),
            severity,
            minimal_verbosity: LogVerbosity::Minimal,
            location: Location::caller(),
        }
    }

    #[track_caller]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Information, message)
    }

    #[track_caller]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    #[track_caller]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = system.into();
        self
    }

    pub fn min_verbosity(mut self, verbosity: LogVerbosity) -> Self {
        self.minimal_verbosity = verbosity;
        self
    }

    /// 현재 설정된 상세도에서 출력 대상인지 판단한다.
    /// 최소 상세도가 설정값 이상일 때만 출력한다.
    pub fn is_visible_at(&self, configured: LogVerbosity) -> bool {
        self.minimal_verbosity >= configured
    }

    /// 호출 위치의 파일 이름(경로 제외).
    pub fn file_name(&self) -> &'static str {
        let file = self.location.file();
        file.rsplit(['/', '\\']).next().unwrap_or(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_ordering_matches_ordinals() {
        assert!(LogVerbosity::Verbose < LogVerbosity::Normal);
        assert!(LogVerbosity::Normal < LogVerbosity::Minimal);
        assert_eq!(LogVerbosity::from_ordinal(LogVerbosity::Normal.ordinal()), LogVerbosity::Normal);
    }

    #[test]
    fn visibility_gate() {
        let detailed = LogEntry::info("detail").min_verbosity(LogVerbosity::Verbose);
        assert!(detailed.is_visible_at(LogVerbosity::Verbose));
        assert!(!detailed.is_visible_at(LogVerbosity::Normal));
        assert!(!detailed.is_visible_at(LogVerbosity::Minimal));

        let always = LogEntry::warning("always");
        assert!(always.is_visible_at(LogVerbosity::Verbose));
        assert!(always.is_visible_at(LogVerbosity::Minimal));
    }

    #[test]
    fn captures_caller_file() {
        let entry = LogEntry::error("boom");
        assert_eq!(entry.file_name(), "logging.rs");
        assert_eq!(entry.system, DEFAULT_LOG_SYSTEM);
    }

    #[test]
    fn severity_names_round_trip() {
        for name in Severity::NAMES {
            let severity = Severity::from_name(name).expect("known name");
            assert_eq!(severity.name(), *name);
        }
        assert_eq!(Severity::from_name("warning"), None);
    }
}
