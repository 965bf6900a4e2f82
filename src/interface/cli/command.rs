//! CLI 인자 파싱 모듈.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "routekit")]
#[command(version)]
#[command(about = "Declarative command routing with a one-shot CLI and an interactive shell")]
pub struct Cli {
    /// Extra config file merged with the highest priority
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start the interactive shell (cannot be combined with command tokens)
    #[arg(long, conflicts_with = "tokens")]
    repl: bool,

    /// Command tokens passed verbatim to the router (e.g. `api log --logLevel Warning`)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "TOKENS")]
    tokens: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Interactive,
    Dispatch(Vec<String>),
}

impl Cli {
    /// 프로세스 인자를 읽는다. clap 오류는 clap이 직접 출력하고 종료한다.
    pub fn parse_args() -> (Option<PathBuf>, CliAction) {
        Cli::parse().into_action()
    }

    pub fn into_action(self) -> (Option<PathBuf>, CliAction) {
        let action = if self.repl || self.tokens.is_empty() {
            CliAction::Interactive
        } else {
            CliAction::Dispatch(self.tokens)
        };
        (self.config, action)
    }
}
