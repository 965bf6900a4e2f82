//! 설정 저장소 포트 구현 어댑터.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::config::Config;
use crate::application::ports::ConfigRepository;
use crate::infrastructure::config;

/// JSON 기반 설정 저장소 어댑터.
/// `--config`로 받은 경로가 있으면 가장 높은 우선순위로 병합한다.
#[derive(Debug, Clone, Default)]
pub struct JsonConfigRepository {
    explicit_path: Option<PathBuf>,
}

impl JsonConfigRepository {
    pub fn new(explicit_path: Option<PathBuf>) -> Self {
        Self { explicit_path }
    }
}

impl ConfigRepository for JsonConfigRepository {
    fn load(&self) -> Result<Config> {
        config::load(self.explicit_path.as_deref())
    }

    fn inspect_pretty_json(&self) -> Result<String> {
        config::inspect_pretty_json(self.explicit_path.as_deref())
    }
}
