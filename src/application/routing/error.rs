//! 라우팅 엔진 오류 분류와 종료 코드.

use thiserror::Error;

pub const EXIT_OK: i32 = 0;
pub const EXIT_HANDLER: i32 = 1;
pub const EXIT_RESOLUTION: i32 = 2;
pub const EXIT_BINDING: i32 = 3;
pub const EXIT_CONFIGURATION: i32 = 4;
pub const EXIT_ILLEGAL_STATE: i32 = 5;

#[derive(Debug, Error)]
pub enum RoutingError {
    /// 트리 구성 시점 오류. 시작 단계에서 치명적이다.
    #[error("configuration error in '{command}': {reason}")]
    Configuration { command: String, reason: String },

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Binding(#[from] BindingError),

    /// 명령 코드 내부에서 발생한 오류.
    #[error("command '{command}' failed: {reason}")]
    Handler { command: String, reason: String },

    /// 호출 순서 위반(빌드 전 파싱 등).
    #[error("illegal state: {0}")]
    IllegalState(&'static str),
}

impl RoutingError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Handler { .. } => EXIT_HANDLER,
            Self::Resolution(_) => EXIT_RESOLUTION,
            Self::Binding(_) => EXIT_BINDING,
            Self::Configuration { .. } => EXIT_CONFIGURATION,
            Self::IllegalState(_) => EXIT_ILLEGAL_STATE,
        }
    }

    pub(crate) fn configuration(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            command: command.into(),
            reason: reason.into(),
        }
    }
}

/// 토큰이 트리의 어느 노드와도 맞지 않을 때.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("no command given")]
    NoCommand,

    #[error("unknown command '{token}'")]
    UnknownCommand { token: String },

    #[error("unknown subcommand '{token}' for '{command}'")]
    UnknownSubcommand { command: String, token: String },
}

/// 원시 토큰을 슬롯 값으로 묶지 못했을 때. 항상 해당 파라미터/토큰을 명시한다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("missing required argument '{parameter}'")]
    MissingArgument { parameter: String },

    #[error("option '--{option}' requires a value")]
    MissingOptionValue { option: String },

    #[error("unknown option '{option}'")]
    UnknownOption { option: String },

    #[error("option '--{option}' was given more than once")]
    DuplicateOption { option: String },

    #[error("unexpected argument '{token}'")]
    UnexpectedArgument { token: String },

    #[error("invalid value '{token}' for '{parameter}': expected {expected}")]
    InvalidValue {
        parameter: String,
        token: String,
        expected: String,
    },
}
