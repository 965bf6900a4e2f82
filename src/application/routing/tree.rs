//! 불변 명령 트리와 노드 탐색/도움말 렌더링.

use std::fmt;
use std::sync::Arc;

use unicode_width::UnicodeWidthStr;

use crate::application::routing::registry::CommandEntry;
use crate::domain::command::{ArgumentSlot, CommandDescriptor, ValueKind};

/// 노드가 호출할 대상.
#[derive(Clone)]
pub(crate) enum NodeHandler {
    /// 명령 타입의 `execute()`.
    Execute(Arc<dyn CommandEntry>),
    /// 명령 타입의 `index`번째 하위 명령 메서드.
    Method {
        entry: Arc<dyn CommandEntry>,
        index: usize,
    },
}

/// 트리 노드. 루트는 서술자/핸들러 없이 자식만 가진다.
pub struct CommandNode {
    descriptor: Option<CommandDescriptor>,
    handler: Option<NodeHandler>,
    children: Vec<CommandNode>,
    slots: Vec<ArgumentSlot>,
}

impl CommandNode {
    pub(crate) fn root() -> Self {
        Self {
            descriptor: None,
            handler: None,
            children: Vec::new(),
            slots: Vec::new(),
        }
    }

    pub(crate) fn new(
        descriptor: CommandDescriptor,
        handler: NodeHandler,
        slots: Vec<ArgumentSlot>,
    ) -> Self {
        Self {
            descriptor: Some(descriptor),
            handler: Some(handler),
            children: Vec::new(),
            slots,
        }
    }

    pub fn name(&self) -> &str {
        self.descriptor.as_ref().map_or("", |d| d.name.as_str())
    }

    pub fn description(&self) -> &str {
        self.descriptor
            .as_ref()
            .map_or("", |d| d.description.as_str())
    }

    pub fn descriptor(&self) -> Option<&CommandDescriptor> {
        self.descriptor.as_ref()
    }

    pub fn children(&self) -> &[CommandNode] {
        &self.children
    }

    /// 대소문자를 구분하는 정확 일치.
    pub fn child(&self, name: &str) -> Option<&CommandNode> {
        self.children.iter().find(|child| child.name() == name)
    }

    pub fn slots(&self) -> &[ArgumentSlot] {
        &self.slots
    }

    /// 하위 명령 없이 호출 가능한 `execute()` 노드인지.
    pub fn is_execute_node(&self) -> bool {
        matches!(self.handler, Some(NodeHandler::Execute(_)))
    }

    /// 슬롯으로 바인딩되는 하위 명령 메서드 노드인지.
    pub fn is_leaf_dispatch(&self) -> bool {
        matches!(self.handler, Some(NodeHandler::Method { .. }))
    }

    pub(crate) fn handler(&self) -> Option<&NodeHandler> {
        self.handler.as_ref()
    }

    pub(crate) fn push_child(&mut self, child: CommandNode) {
        self.children.push(child);
    }

    /// 같은 이름의 자식을 교체한다. 없으면 `false`.
    pub(crate) fn replace_child(&mut self, child: CommandNode) -> bool {
        match self.children.iter().position(|c| c.name() == child.name()) {
            Some(index) => {
                self.children[index] = child;
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for CommandNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandNode")
            .field("name", &self.name())
            .field("execute", &self.is_execute_node())
            .field("slots", &self.slots)
            .field("children", &self.children)
            .finish()
    }
}

/// 토큰 앞부분을 트리와 맞춘 결과.
#[derive(Debug)]
pub struct Resolved<'a, 't> {
    /// 루트 아래에서 일치한 노드들(루트 제외).
    pub path: Vec<&'a CommandNode>,
    /// 소비되지 않은 토큰.
    pub rest: &'t [String],
}

impl<'a> Resolved<'a, '_> {
    pub fn node(&self) -> Option<&'a CommandNode> {
        self.path.last().copied()
    }

    pub fn path_names(&self) -> Vec<String> {
        self.path.iter().map(|node| node.name().to_string()).collect()
    }
}

/// 빌드 후 변경되지 않는 명령 트리. 동시 디스패치에서 잠금 없이 공유된다.
#[derive(Debug)]
pub struct CommandTree {
    program: String,
    description: String,
    root: CommandNode,
}

impl CommandTree {
    pub(crate) fn new(program: String, description: String, root: CommandNode) -> Self {
        Self {
            program,
            description,
            root,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn root(&self) -> &CommandNode {
        &self.root
    }

    /// 자식 이름과 정확히 일치하는 선행 토큰을 소비한다.
    pub fn resolve<'t>(&self, tokens: &'t [String]) -> Resolved<'_, 't> {
        let mut node = &self.root;
        let mut path = Vec::new();
        let mut consumed = 0;

        for token in tokens {
            let Some(child) = node.child(token) else {
                break;
            };
            path.push(child);
            node = child;
            consumed += 1;
        }

        Resolved {
            path,
            rest: &tokens[consumed..],
        }
    }

    /// 이름 경로로 노드를 찾는다.
    pub fn find(&self, path: &[&str]) -> Option<&CommandNode> {
        path.iter()
            .try_fold(&self.root, |node, name| node.child(name))
    }

    /// 이름/슬롯 형태만 담은 트리 개요(구조 비교용).
    pub fn outline(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for child in self.root.children() {
            outline_node(child, "", &mut lines);
        }
        lines
    }

    /// 경로의 마지막 노드(없으면 루트)에 대한 도움말.
    pub fn render_help(&self, path: &[&CommandNode]) -> String {
        let node = path.last().copied().unwrap_or(&self.root);
        let description = if path.is_empty() {
            self.description.as_str()
        } else {
            node.description()
        };

        let mut out = String::new();
        if !description.is_empty() {
            out.push_str("Description:\n");
            out.push_str(&format!("  {description}\n\n"));
        }

        let mut usage = vec![self.program.clone()];
        usage.extend(path.iter().map(|n| n.name().to_string()));
        if !node.children().is_empty() {
            usage.push("[command]".to_string());
        }
        usage.extend(
            node.slots()
                .iter()
                .filter(|slot| slot.is_positional())
                .map(|slot| format!("<{}>", slot.parameter_name)),
        );
        usage.push("[options]".to_string());
        out.push_str("Usage:\n");
        out.push_str(&format!("  {}\n", usage.join(" ")));

        let arguments: Vec<(String, String)> = node
            .slots()
            .iter()
            .filter(|slot| slot.is_positional())
            .map(|slot| {
                (
                    format!("<{}>", slot.parameter_name),
                    describe_slot(slot),
                )
            })
            .collect();
        write_section(&mut out, "Arguments", &arguments);

        let mut options: Vec<(String, String)> = node
            .slots()
            .iter()
            .filter(|slot| slot.has_default())
            .map(|slot| {
                let label = match slot.kind {
                    ValueKind::Boolean => slot.flag(),
                    kind => format!("{} <{}>", slot.flag(), kind.placeholder()),
                };
                (label, describe_slot(slot))
            })
            .collect();
        options.push((
            "-?, -h, --help".to_string(),
            "Show help and usage information".to_string(),
        ));
        write_section(&mut out, "Options", &options);

        let commands: Vec<(String, String)> = node
            .children()
            .iter()
            .map(|child| (child.name().to_string(), child.description().to_string()))
            .collect();
        write_section(&mut out, "Commands", &commands);

        out
    }
}

fn outline_node(node: &CommandNode, prefix: &str, lines: &mut Vec<String>) {
    let path = if prefix.is_empty() {
        node.name().to_string()
    } else {
        format!("{prefix} {}", node.name())
    };

    let mut line = path.clone();
    for slot in node.slots() {
        match &slot.default {
            None => line.push_str(&format!(" <{}:{}>", slot.parameter_name, slot.kind.placeholder())),
            Some(default) => line.push_str(&format!(" [{}={default}]", slot.flag())),
        }
    }
    lines.push(line);

    for child in node.children() {
        outline_node(child, &path, lines);
    }
}

fn describe_slot(slot: &ArgumentSlot) -> String {
    match &slot.default {
        Some(default) if slot.description.is_empty() => format!("[default: {default}]"),
        Some(default) => format!("{} [default: {default}]", slot.description),
        None => slot.description.clone(),
    }
}

fn write_section(out: &mut String, title: &str, rows: &[(String, String)]) {
    if rows.is_empty() {
        return;
    }

    // 한글 등 넓은 문자도 정렬되도록 표시 폭 기준으로 맞춘다.
    let width = rows
        .iter()
        .map(|(label, _)| UnicodeWidthStr::width(label.as_str()))
        .max()
        .unwrap_or(0);

    out.push('\n');
    out.push_str(&format!("{title}:\n"));
    for (label, text) in rows {
        let pad = width - UnicodeWidthStr::width(label.as_str());
        let line = format!("  {label}{}  {text}", " ".repeat(pad));
        out.push_str(line.trim_end());
        out.push('\n');
    }
}
