//! 명령 호스트: Unbuilt → Built 상태를 관리하고 `parse` 진입점을 제공한다.

use std::sync::Arc;

use crate::application::ports::Logger;
use crate::application::routing::builder::{BuildOptions, build_tree};
use crate::application::routing::dispatcher::{DispatchOutcome, dispatch};
use crate::application::routing::error::{EXIT_OK, RoutingError};
use crate::application::routing::registry::CommandUnit;
use crate::application::routing::services::ServiceProvider;
use crate::application::routing::tokenizer::split_command_line;
use crate::application::routing::tree::CommandTree;
use crate::domain::logging::LogEntry;

const LOG_SYSTEM: &str = "commands";

/// `parse` 한 번의 결과. 도움말 텍스트는 출력하지 않고 호출자에게 넘긴다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseReport {
    pub code: i32,
    pub help: Option<String>,
}

impl ParseReport {
    fn code(code: i32) -> Self {
        Self { code, help: None }
    }

    pub fn is_success(&self) -> bool {
        self.code == EXIT_OK
    }
}

pub struct CommandsHost {
    program: String,
    services: Arc<ServiceProvider>,
    logger: Arc<dyn Logger>,
    units: Vec<CommandUnit>,
    allow_overrides: bool,
    tree: Option<Arc<CommandTree>>,
}

impl CommandsHost {
    pub fn new(
        program: impl Into<String>,
        services: ServiceProvider,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            program: program.into(),
            services: Arc::new(services),
            logger,
            units: Vec::new(),
            allow_overrides: false,
            tree: None,
        }
    }

    pub fn program_name(&self) -> &str {
        &self.program
    }

    pub fn add_unit(&mut self, unit: CommandUnit) -> &mut Self {
        self.units.push(unit);
        self
    }

    pub fn add_units(&mut self, units: impl IntoIterator<Item = CommandUnit>) -> &mut Self {
        self.units.extend(units);
        self
    }

    /// 최상위 이름이 겹칠 때 나중 등록을 채택한다(경고 로그).
    pub fn allow_overrides(&mut self, allow: bool) -> &mut Self {
        self.allow_overrides = allow;
        self
    }

    /// 트리를 한 번만 만든다. 실패하면 부분 트리는 남지 않는다.
    pub fn build(&mut self, description: &str) -> Result<Arc<CommandTree>, RoutingError> {
        if self.tree.is_some() {
            return Err(RoutingError::IllegalState("command tree is already built"));
        }
        let options = BuildOptions {
            program: self.program.clone(),
            allow_overrides: self.allow_overrides,
        };
        let tree = Arc::new(build_tree(
            &self.units,
            description,
            &self.services,
            &options,
        )?);
        self.tree = Some(Arc::clone(&tree));
        Ok(tree)
    }

    pub fn tree(&self) -> Option<&Arc<CommandTree>> {
        self.tree.as_ref()
    }

    pub fn services(&self) -> &ServiceProvider {
        &self.services
    }

    pub async fn try_parse(&self, tokens: &[String]) -> Result<DispatchOutcome, RoutingError> {
        let tree = self
            .tree
            .as_ref()
            .ok_or(RoutingError::IllegalState("parse called before build"))?;
        dispatch(tree, &self.services, tokens).await
    }

    /// 한 번의 디스패치를 실행하고 종료 코드를 돌려준다.
    /// 실패 내용은 로거로 남기며 호스트를 중단시키지 않는다.
    pub async fn parse(&self, tokens: &[String]) -> ParseReport {
        match self.try_parse(tokens).await {
            Ok(DispatchOutcome::Help(text)) => ParseReport {
                code: EXIT_OK,
                help: Some(text),
            },
            Ok(DispatchOutcome::Executed(_)) => ParseReport::code(EXIT_OK),
            Err(err) => {
                self.logger
                    .log(LogEntry::error(err.to_string()).system(LOG_SYSTEM));
                ParseReport::code(err.exit_code())
            }
        }
    }

    pub async fn parse_line(&self, line: &str) -> ParseReport {
        self.parse(&split_command_line(line)).await
    }
}
