//! routekit library root.
//! Clean Architecture 계층(domain/application/infrastructure/interface)을 외부에 노출한다.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

pub use application::routing::{
    BoundArgs, Command, CommandSpec, CommandUnit, CommandsHost, RoutingError, ServiceProvider,
    subcommand,
};
