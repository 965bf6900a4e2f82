//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::logging::LogVerbosity;

pub const DEFAULT_VERBOSITY: LogVerbosity = LogVerbosity::Normal;

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct Config {
    /// 로그 출력 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 레코드 저장소 설정
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct LoggingConfig {
    /// 시작 시 상세도(Verbose/Normal/Minimal)
    pub verbosity: Option<LogVerbosity>,
    /// 콘솔과 같은 내용을 색 없이 추가 기록할 파일
    pub log_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct StorageConfig {
    /// 레코드 파일 디렉터리
    pub data_dir: Option<String>,
}

impl Config {
    pub fn verbosity(&self) -> LogVerbosity {
        self.logging.verbosity.unwrap_or(DEFAULT_VERBOSITY)
    }

    pub fn log_file(&self) -> Option<PathBuf> {
        self.logging
            .log_file
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    /// 명시된 데이터 디렉터리. 없으면 호출자가 플랫폼 기본값을 쓴다.
    pub fn data_dir(&self) -> Option<PathBuf> {
        self.storage
            .data_dir
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Config) {
        self.logging.merge_from(other.logging);
        self.storage.merge_from(other.storage);
    }
}

impl LoggingConfig {
    fn merge_from(&mut self, other: LoggingConfig) {
        if other.verbosity.is_some() {
            self.verbosity = other.verbosity;
        }
        if other.log_file.is_some() {
            self.log_file = other.log_file;
        }
    }
}

impl StorageConfig {
    fn merge_from(&mut self, other: StorageConfig) {
        if other.data_dir.is_some() {
            self.data_dir = other.data_dir;
        }
    }
}
