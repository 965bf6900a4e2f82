//! 디스패처: 토큰 → 노드 해석 → 슬롯 바인딩 → 핸들러 생성/호출.

use crate::application::routing::binder::{BoundArgs, bind_tokens};
use crate::application::routing::error::{ResolutionError, RoutingError};
use crate::application::routing::registry::EntryFailure;
use crate::application::routing::services::ServiceProvider;
use crate::application::routing::tree::{CommandNode, CommandTree, NodeHandler};
use crate::domain::command::{Invocation, ValueKind};

const HELP_FLAGS: [&str; 3] = ["--help", "-h", "-?"];
const END_OF_OPTIONS: &str = "--";

/// 성공한 디스패치의 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// 핸들러가 정확히 한 번 실행됐다.
    Executed(Invocation),
    /// 도움말 요청. 핸들러는 생성되지 않는다.
    Help(String),
}

/// 토큰 목록 하나를 처리한다. 트리는 읽기만 한다.
pub async fn dispatch(
    tree: &CommandTree,
    services: &ServiceProvider,
    tokens: &[String],
) -> Result<DispatchOutcome, RoutingError> {
    let resolved = tree.resolve(tokens);
    let node = resolved.node();

    if let Some(others) = help_request(node, resolved.rest) {
        // 도움말이어도 경로 뒤에 남은 이름은 해석 실패로 본다.
        match (node, others.first()) {
            (None, Some(token)) => {
                return Err(ResolutionError::UnknownCommand {
                    token: (*token).clone(),
                }
                .into());
            }
            (Some(node), Some(token)) if !node.is_leaf_dispatch() => {
                return Err(unknown_subcommand(node, token));
            }
            _ => return Ok(DispatchOutcome::Help(tree.render_help(&resolved.path))),
        }
    }

    let Some(node) = node else {
        return Err(match tokens.first() {
            None => ResolutionError::NoCommand,
            Some(token) => ResolutionError::UnknownCommand {
                token: token.clone(),
            },
        }
        .into());
    };

    let invocation = Invocation {
        path: resolved.path_names(),
        raw_args: resolved.rest.to_vec(),
    };
    let command = invocation.path.join(" ");
    tracing::debug!(
        path = ?invocation.path,
        args = ?invocation.raw_args,
        "dispatching command"
    );

    let outcome = match node.handler() {
        Some(NodeHandler::Execute(entry)) => {
            if let Some(token) = resolved.rest.first() {
                return Err(unknown_subcommand(node, token));
            }
            entry.execute(services).await
        }
        Some(NodeHandler::Method { entry, index }) => {
            let args: BoundArgs = bind_tokens(node.slots(), resolved.rest)?;
            entry.invoke(services, *index, args).await
        }
        None => return Err(RoutingError::IllegalState("resolved node has no handler")),
    };

    match outcome {
        Ok(()) => Ok(DispatchOutcome::Executed(invocation)),
        Err(EntryFailure::Construct(err)) => Err(RoutingError::Configuration {
            command,
            reason: format!("handler cannot be constructed: {err:#}"),
        }),
        Err(EntryFailure::Handler(err)) => Err(RoutingError::Handler {
            command,
            reason: format!("{err:#}"),
        }),
    }
}

/// `--` 이전, 옵션 값 자리가 아닌 곳에 도움말 플래그가 있으면
/// 플래그를 뺀 나머지 토큰을 돌려준다.
fn help_request<'t>(node: Option<&CommandNode>, rest: &'t [String]) -> Option<Vec<&'t String>> {
    let mut requested = false;
    let mut others = Vec::new();
    let mut iter = rest.iter().peekable();

    while let Some(token) = iter.next() {
        if token == END_OF_OPTIONS {
            break;
        }
        if HELP_FLAGS.contains(&token.as_str()) {
            requested = true;
            continue;
        }
        others.push(token);
        if takes_value(node, token)
            && let Some(value) = iter.next_if(|next| !next.starts_with("--"))
        {
            others.push(value);
        }
    }
    requested.then_some(others)
}

/// 바인더가 다음 토큰을 값으로 소비하는 `--name` 옵션인지.
fn takes_value(node: Option<&CommandNode>, token: &str) -> bool {
    let Some(name) = token.strip_prefix("--") else {
        return false;
    };
    node.filter(|node| node.is_leaf_dispatch())
        .is_some_and(|node| {
            node.slots().iter().any(|slot| {
                slot.has_default()
                    && slot.kind != ValueKind::Boolean
                    && slot.parameter_name == name
            })
        })
}

fn unknown_subcommand(node: &CommandNode, token: &str) -> RoutingError {
    ResolutionError::UnknownSubcommand {
        command: node.name().to_string(),
        token: token.to_string(),
    }
    .into()
}
