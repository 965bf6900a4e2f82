//! `tracing` 기반 로그 출력.
//! 로거 포트는 상세도 게이트를 적용한 뒤 이벤트를 내보내고, 포매터가 상세도별 템플릿으로 렌더링한다.

mod formatter;
mod logger;

use std::fs::{self, OpenOptions};
use std::io::{self, IsTerminal};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub use formatter::{ConsoleFormatter, EventFields};
pub use logger::TracingLogger;

const DEFAULT_FILTER: &str = "info";

/// 전역 subscriber를 설치한다. 콘솔은 stderr, 로그 파일은 색 없이 추가 기록한다.
/// `RUST_LOG`가 있으면 그 필터를 따른다.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let console = fmt::layer()
        .event_format(ConsoleFormatter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal());

    let file_layer = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create log directory {}", parent.display())
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            Some(
                fmt::layer()
                    .event_format(ConsoleFormatter)
                    .with_writer(Mutex::new(file))
                    .with_ansi(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")
}
