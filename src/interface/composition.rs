//! 애플리케이션 조립(composition root) 모듈.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use crate::application::config::Config;
use crate::application::context::AppContext;
use crate::application::ports::{
    ConfigRepository, Logger, MessageApi, ProcessControl, Repository, Screen,
};
use crate::application::routing::{CommandsHost, RoutingError, ServiceProvider};
use crate::application::usecases::positions::PositionService;
use crate::application::usecases::settings::SettingsService;
use crate::domain::record::PositionRecord;
use crate::infrastructure::adapters::{
    ConsoleScreen, JsonConfigRepository, ProcessExit, StaticMessageApi,
};
use crate::infrastructure::config::default_data_dir;
use crate::infrastructure::logging::TracingLogger;
use crate::infrastructure::storage::JsonFileRepository;
use crate::interface::commands;

pub const PROGRAM_NAME: &str = "routekit";
pub const ROOT_DESCRIPTION: &str = "App example Repl.";

/// 어떤 명령 묶음을 등록할지 결정하는 실행 모드.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostMode {
    Cli,
    Repl,
}

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config: Config,
    config_repo: Arc<dyn ConfigRepository>,
    context: AppContext,
    logger: Arc<dyn Logger>,
}

impl AppComposition {
    /// 설정 파일을 병합해 조립한다. `explicit`은 `--config` 경로다.
    pub fn load(explicit: Option<PathBuf>) -> Result<Self> {
        let repo = JsonConfigRepository::new(explicit);
        let config = repo.load()?;
        Ok(Self::new(config, Arc::new(repo)))
    }

    pub fn new(config: Config, config_repo: Arc<dyn ConfigRepository>) -> Self {
        let context = AppContext::new(config.verbosity());
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new(context.verbosity.clone()));
        Self {
            config,
            config_repo,
            context,
            logger,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn logger(&self) -> Arc<dyn Logger> {
        Arc::clone(&self.logger)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.config.data_dir().unwrap_or_else(default_data_dir)
    }

    /// 명령 팩토리가 꺼내 쓰는 서비스 목록.
    /// 테스트는 반환값에 같은 타입을 다시 등록해 교체할 수 있다.
    pub fn services(&self) -> ServiceProvider {
        let repository: Arc<dyn Repository<PositionRecord>> =
            Arc::new(JsonFileRepository::<PositionRecord>::new(self.data_dir()));

        ServiceProvider::new()
            .with::<Arc<dyn Logger>>(self.logger())
            .with::<Arc<dyn MessageApi>>(Arc::new(StaticMessageApi::default()))
            .with::<Arc<dyn ProcessControl>>(Arc::new(ProcessExit))
            .with::<Arc<dyn Screen>>(Arc::new(ConsoleScreen))
            .with(self.context.cancellation.clone())
            .with(PositionService::new(repository))
            .with(SettingsService::new(
                Arc::clone(&self.config_repo),
                self.context.verbosity.clone(),
            ))
    }

    /// 기본 서비스로 모드별 호스트를 만들고 트리를 빌드한다.
    pub fn commands_host(&self, mode: HostMode) -> Result<CommandsHost, RoutingError> {
        build_host(self.services(), self.logger(), mode)
    }
}

/// 모드별 명령 묶음을 등록하고 트리를 빌드한다.
/// CLI는 앱/로깅 명령만, REPL은 여기에 `exit`/`clear`를 더한다.
pub fn build_host(
    services: ServiceProvider,
    logger: Arc<dyn Logger>,
    mode: HostMode,
) -> Result<CommandsHost, RoutingError> {
    let mut host = CommandsHost::new(PROGRAM_NAME, services, logger);
    host.add_unit(commands::app_unit())
        .add_unit(commands::logging_unit());
    if mode == HostMode::Repl {
        host.add_unit(commands::shell_unit());
    }
    host.build(ROOT_DESCRIPTION)?;
    Ok(host)
}
