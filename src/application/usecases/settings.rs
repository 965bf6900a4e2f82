//! 실행 중 설정 조회/변경 유스케이스.

use std::sync::Arc;

use anyhow::Result;

use crate::application::context::VerbosityHandle;
use crate::application::ports::ConfigRepository;
use crate::domain::logging::LogVerbosity;

/// 설정 파일 점검과 프로세스 상세도 변경을 묶는다.
#[derive(Clone)]
pub struct SettingsService {
    config_repo: Arc<dyn ConfigRepository>,
    verbosity: VerbosityHandle,
}

impl SettingsService {
    pub fn new(config_repo: Arc<dyn ConfigRepository>, verbosity: VerbosityHandle) -> Self {
        Self {
            config_repo,
            verbosity,
        }
    }

    /// 병합된 설정과 탐색 경로를 사람이 읽기 쉬운 JSON으로 돌려준다.
    pub fn inspect(&self) -> Result<String> {
        self.config_repo.inspect_pretty_json()
    }

    pub fn verbosity(&self) -> LogVerbosity {
        self.verbosity.get()
    }

    /// 이후 모든 로그 호출에 즉시 반영된다.
    pub fn set_verbosity(&self, verbosity: LogVerbosity) {
        tracing::debug!(?verbosity, "verbosity changed");
        self.verbosity.set(verbosity);
    }
}
