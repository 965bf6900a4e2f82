//! 명령 트리 빌더.
//! 등록된 코드 단위를 한 번 순회해 root → 명령 → 하위 명령 트리를 만든다.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::application::routing::binder::{bind_parameters, validate_slots};
use crate::application::routing::error::RoutingError;
use crate::application::routing::registry::{CommandEntry, CommandUnit};
use crate::application::routing::services::ServiceProvider;
use crate::application::routing::tree::{CommandNode, CommandTree, NodeHandler};

/// 트리 빌드 정책.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// 도움말 usage 줄의 프로그램 이름.
    pub program: String,
    /// 최상위 이름 중복 시 나중 등록을 채택할지(기본: 오류).
    pub allow_overrides: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            program: "app".to_string(),
            allow_overrides: false,
        }
    }
}

/// 코드 단위 목록으로 불변 트리를 만든다.
/// 명령별 객체 팩토리를 한 번씩 호출해 생성 가능성을 미리 검증한다.
pub fn build_tree(
    units: &[CommandUnit],
    description: &str,
    services: &ServiceProvider,
    options: &BuildOptions,
) -> Result<CommandTree, RoutingError> {
    let mut root = CommandNode::root();
    let mut origins: HashMap<String, String> = HashMap::new();

    for unit in units {
        for entry in unit.entries() {
            let node = build_command(entry, services)?;
            let name = node.name().to_string();

            match origins.get(&name) {
                Some(previous) if !options.allow_overrides => {
                    return Err(RoutingError::configuration(
                        name.clone(),
                        format!(
                            "duplicate command name (registered by '{previous}' and '{}')",
                            unit.name()
                        ),
                    ));
                }
                Some(previous) => {
                    tracing::warn!(
                        command = %name,
                        previous = %previous,
                        unit = unit.name(),
                        "duplicate command name, last registration wins"
                    );
                    root.replace_child(node);
                }
                None => root.push_child(node),
            }
            origins.insert(name, unit.name().to_string());
        }
    }

    tracing::debug!(
        commands = root.children().len(),
        units = units.len(),
        "command tree built"
    );
    Ok(CommandTree::new(
        options.program.clone(),
        description.to_string(),
        root,
    ))
}

fn build_command(
    entry: &Arc<dyn CommandEntry>,
    services: &ServiceProvider,
) -> Result<CommandNode, RoutingError> {
    let descriptor = entry.descriptor().clone();
    validate_name(&descriptor.name)
        .map_err(|reason| RoutingError::configuration(descriptor.name.clone(), reason))?;

    entry.probe(services).map_err(|err| {
        RoutingError::configuration(
            descriptor.name.clone(),
            format!("handler cannot be constructed: {err:#}"),
        )
    })?;

    let mut node = CommandNode::new(
        descriptor.clone(),
        NodeHandler::Execute(Arc::clone(entry)),
        Vec::new(),
    );

    let mut seen = HashSet::new();
    for (index, meta) in entry.subcommands().into_iter().enumerate() {
        let path = format!("{} {}", descriptor.name, meta.descriptor.name);
        validate_name(&meta.descriptor.name)
            .map_err(|reason| RoutingError::configuration(path.clone(), reason))?;
        if !seen.insert(meta.descriptor.name.clone()) {
            return Err(RoutingError::configuration(
                path,
                "duplicate subcommand name",
            ));
        }

        let slots = bind_parameters(meta);
        validate_slots(&slots).map_err(|reason| RoutingError::configuration(path, reason))?;

        node.push_child(CommandNode::new(
            meta.descriptor.clone(),
            NodeHandler::Method {
                entry: Arc::clone(entry),
                index,
            },
            slots,
        ));
    }

    Ok(node)
}

fn validate_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("command name must not be empty".to_string());
    }
    if name.starts_with('-') {
        return Err(format!("command name '{name}' must not start with '-'"));
    }
    if name.contains(char::is_whitespace) {
        return Err(format!("command name '{name}' must not contain whitespace"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use anyhow::{Result, bail};
    use async_trait::async_trait;

    use super::*;
    use crate::application::routing::registry::{Command, CommandSpec, subcommand};

    struct Noop;

    #[async_trait]
    impl Command for Noop {
        async fn execute(&self) -> Result<()> {
            Ok(())
        }
    }

    fn noop(name: &str) -> CommandSpec<Noop> {
        CommandSpec::new(name, "Does nothing.", |_: &ServiceProvider| Ok(Noop))
    }

    fn build(units: &[CommandUnit], allow_overrides: bool) -> Result<CommandTree, RoutingError> {
        let options = BuildOptions {
            allow_overrides,
            ..BuildOptions::default()
        };
        build_tree(units, "Test.", &ServiceProvider::new(), &options)
    }

    #[test]
    fn duplicate_top_level_names_are_rejected_by_default() {
        let units = [
            CommandUnit::new("first").command(noop("same")),
            CommandUnit::new("second").command(noop("same")),
        ];
        let err = build(&units, false).unwrap_err();
        assert!(matches!(err, RoutingError::Configuration { ref command, .. } if command == "same"));
        assert!(err.to_string().contains("'second'"));
    }

    #[test]
    fn overrides_keep_a_single_node() {
        let units = [
            CommandUnit::new("first").command(noop("same")),
            CommandUnit::new("second").command(
                noop("same").subcommand(subcommand("extra", "Added later.").handler(
                    |_: &Noop, _| Ok(()),
                )),
            ),
        ];
        let tree = build(&units, true).expect("builds");
        assert_eq!(tree.root().children().len(), 1);
        assert!(tree.find(&["same", "extra"]).is_some());
    }

    #[test]
    fn unconstructible_handler_fails_fast_naming_the_command() {
        struct Needy;

        #[async_trait]
        impl Command for Needy {
            async fn execute(&self) -> Result<()> {
                Ok(())
            }
        }

        let spec = CommandSpec::new("needy", "Needs a service.", |_: &ServiceProvider| -> Result<Needy> {
            bail!("missing dependency")
        });
        let err = build(&[CommandUnit::new("unit").command(spec)], false).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("needy"));
        assert!(text.contains("missing dependency"));
    }

    #[test]
    fn malformed_names_are_configuration_errors() {
        let empty = [CommandUnit::new("unit").command(noop(""))];
        assert!(matches!(build(&empty, false), Err(RoutingError::Configuration { .. })));

        let spaced = [CommandUnit::new("unit").command(
            noop("ok").subcommand(subcommand("two words", "Bad.").handler(|_: &Noop, _| Ok(()))),
        )];
        assert!(matches!(build(&spaced, false), Err(RoutingError::Configuration { .. })));

        let twice = [CommandUnit::new("unit").command(
            noop("ok")
                .subcommand(subcommand("dup", "One.").handler(|_: &Noop, _| Ok(())))
                .subcommand(subcommand("dup", "Two.").handler(|_: &Noop, _| Ok(()))),
        )];
        let err = build(&twice, false).unwrap_err();
        assert!(err.to_string().contains("ok dup"));
    }

    #[test]
    fn duplicate_parameter_names_are_rejected() {
        let units = [CommandUnit::new("unit").command(
            noop("ok").subcommand(
                subcommand("set", "Set.")
                    .argument::<i64>("x", "")
                    .option("x", "", 1_i64)
                    .handler(|_: &Noop, _| Ok(())),
            ),
        )];
        assert!(matches!(build(&units, false), Err(RoutingError::Configuration { .. })));
    }
}
