//! 설정 파일 탐색/병합 로더.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::config::Config;

pub const CONFIG_ENV: &str = "ROUTEKIT_CONFIG";
const APP_DIR: &str = "routekit";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone)]
pub(crate) struct LoadedConfig {
    pub config: Config,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
}

/// 우선순위 경로를 순회해 JSON 설정을 병합한다.
/// 존재하지 않는 파일은 건너뛰고, 읽기/파싱 실패는 경로를 담아 오류로 돌려준다.
pub(crate) fn load_merged_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    let mut merged = Config::default();
    let mut loaded_paths = Vec::new();
    let paths = config_paths(explicit);

    for path in &paths {
        if !path.exists() {
            continue;
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let parsed: Config = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
        merged.merge_from(parsed);
        loaded_paths.push(path.to_path_buf());
    }

    tracing::debug!(loaded = loaded_paths.len(), "configuration merged");
    Ok(LoadedConfig {
        config: merged,
        searched_paths: paths,
        loaded_paths,
    })
}

/// 사용자 + 프로젝트 + 환경변수 + 명시 경로 순으로 병합 경로를 구성한다.
pub fn config_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    // 낮은 우선순위 -> 높은 우선순위 순서로 병합됨.
    let mut paths = Vec::new();

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join(APP_DIR).join(CONFIG_FILE));
    }

    paths.push(PathBuf::from(format!(".{APP_DIR}")).join(CONFIG_FILE));

    if let Ok(path) = env::var(CONFIG_ENV)
        && !path.trim().is_empty()
    {
        paths.push(PathBuf::from(path));
    }

    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
    }

    dedup_paths(paths)
}

/// 설정에 데이터 디렉터리가 없을 때 쓰는 플랫폼 기본 경로.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from(format!(".{APP_DIR}")))
        .join(APP_DIR)
        .join("positions")
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::logging::LogVerbosity;

    #[test]
    fn explicit_path_is_merged_last() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("explicit.json");
        fs::write(&path, r#"{"logging":{"verbosity":"Verbose"}}"#).expect("write");

        let loaded = load_merged_config(Some(&path)).expect("load");
        assert_eq!(loaded.searched_paths.last(), Some(&path));
        assert!(loaded.loaded_paths.contains(&path));
        assert_eq!(loaded.config.verbosity(), LogVerbosity::Verbose);
    }

    #[test]
    fn malformed_file_names_its_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").expect("write");

        let err = load_merged_config(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("broken.json"));
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let a = PathBuf::from("a.json");
        let b = PathBuf::from("b.json");
        assert_eq!(dedup_paths(vec![a.clone(), b.clone(), a.clone()]), vec![a, b]);
    }
}
