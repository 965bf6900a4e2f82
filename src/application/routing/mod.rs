//! 선언형 명령 라우팅 엔진.
//! 등록부 → 트리 빌더 → 파라미터 바인더 → 디스패처 순으로 흐르며, 호스트가 이를 묶는다.

pub mod binder;
pub mod builder;
pub mod dispatcher;
pub mod error;
pub mod host;
pub mod registry;
pub mod services;
pub mod tokenizer;
pub mod tree;

pub use binder::{BoundArgs, bind_parameters, bind_tokens};
pub use builder::{BuildOptions, build_tree};
pub use dispatcher::{DispatchOutcome, dispatch};
pub use error::{BindingError, ResolutionError, RoutingError};
pub use host::{CommandsHost, ParseReport};
pub use registry::{
    Command, CommandFuture, CommandSpec, CommandUnit, ParameterSpec, SubcommandMeta,
    SubcommandSpec, subcommand,
};
pub use services::ServiceProvider;
pub use tokenizer::split_command_line;
pub use tree::{CommandNode, CommandTree, Resolved};
