//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::{LoadedConfig, default_data_dir};
use crate::application::config::Config;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub config: Config,
    pub effective: EffectiveSettings,
}

/// 기본값까지 적용된 최종 값.
#[derive(Debug, Clone, Serialize)]
pub struct EffectiveSettings {
    pub verbosity: String,
    pub log_file: Option<String>,
    pub data_dir: String,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let effective = EffectiveSettings {
            verbosity: format!("{:?}", loaded.config.verbosity()),
            log_file: loaded
                .config
                .log_file()
                .map(|p| p.display().to_string()),
            data_dir: loaded
                .config
                .data_dir()
                .unwrap_or_else(default_data_dir)
                .display()
                .to_string(),
        };

        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            config: loaded.config,
            effective,
        }
    }
}
