//! 명령 메타데이터 등록부.
//! 런타임 리플렉션 대신 명시적 선언(명령 스펙 + 하위 명령 스펙 + 파라미터 스펙)으로 명령을 기술한다.

use std::sync::Arc;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::application::routing::binder::BoundArgs;
use crate::application::routing::services::ServiceProvider;
use crate::domain::command::{ArgValue, CommandDescriptor, Value, ValueKind};

/// 비동기 하위 명령 핸들러가 돌려주는 future.
pub type CommandFuture = BoxFuture<'static, Result<()>>;

type Factory<T> = Arc<dyn Fn(&ServiceProvider) -> Result<T> + Send + Sync>;
type Method<T> = Arc<dyn Fn(Arc<T>, BoundArgs) -> CommandFuture + Send + Sync>;

/// 명령 타입이 제공하는 기본 실행 진입점.
/// 하위 명령 토큰 없이 호출되면 실행된다.
#[async_trait]
pub trait Command: Send + Sync + 'static {
    async fn execute(&self) -> Result<()>;
}

/// 하위 명령 메서드의 파라미터 선언(선언 순서 유지).
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    pub name: String,
    /// 도움말 전용 설명. 바인딩 동작에는 영향이 없다.
    pub description: String,
    pub kind: ValueKind,
    pub default: Option<Value>,
}

/// 하위 명령의 타입 비의존 메타데이터.
#[derive(Debug, Clone, PartialEq)]
pub struct SubcommandMeta {
    pub descriptor: CommandDescriptor,
    pub parameters: Vec<ParameterSpec>,
}

/// 하위 명령 선언을 시작한다. 핸들러를 지정해야 스펙이 완성된다.
pub fn subcommand(name: impl Into<String>, description: impl Into<String>) -> SubcommandBuilder {
    SubcommandBuilder {
        meta: SubcommandMeta {
            descriptor: CommandDescriptor::new(name, description),
            parameters: Vec::new(),
        },
    }
}

/// 파라미터를 선언 순서대로 쌓는 빌더.
pub struct SubcommandBuilder {
    meta: SubcommandMeta,
}

impl SubcommandBuilder {
    /// 기본값 없는 파라미터(위치 인자).
    pub fn argument<V: ArgValue>(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.meta.parameters.push(ParameterSpec {
            name: name.into(),
            description: description.into(),
            kind: V::kind(),
            default: None,
        });
        self
    }

    /// 기본값 있는 파라미터(`--name` 옵션).
    pub fn option<V: ArgValue>(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        default: V,
    ) -> Self {
        self.meta.parameters.push(ParameterSpec {
            name: name.into(),
            description: description.into(),
            kind: V::kind(),
            default: Some(default.into_value()),
        });
        self
    }

    /// 동기 핸들러로 스펙을 완성한다.
    pub fn handler<T, F>(self, method: F) -> SubcommandSpec<T>
    where
        T: Command,
        F: Fn(&T, &BoundArgs) -> Result<()> + Send + Sync + 'static,
    {
        let method: Method<T> = Arc::new(
            move |instance: Arc<T>, args: BoundArgs| -> CommandFuture {
                let result = method(instance.as_ref(), &args);
                Box::pin(async move { result })
            },
        );
        SubcommandSpec {
            meta: self.meta,
            method,
        }
    }

    /// 비동기 핸들러로 스펙을 완성한다.
    pub fn handler_async<T, F>(self, method: F) -> SubcommandSpec<T>
    where
        T: Command,
        F: Fn(Arc<T>, BoundArgs) -> CommandFuture + Send + Sync + 'static,
    {
        SubcommandSpec {
            meta: self.meta,
            method: Arc::new(method),
        }
    }
}

/// 완성된 하위 명령 스펙.
pub struct SubcommandSpec<T> {
    meta: SubcommandMeta,
    method: Method<T>,
}

impl<T> SubcommandSpec<T> {
    pub fn meta(&self) -> &SubcommandMeta {
        &self.meta
    }
}

/// 명령 타입 하나의 스펙: 서술자, 객체 팩토리, 하위 명령 목록.
pub struct CommandSpec<T> {
    descriptor: CommandDescriptor,
    factory: Factory<T>,
    subcommands: Vec<SubcommandSpec<T>>,
}

impl<T: Command> CommandSpec<T> {
    pub fn new<F>(name: impl Into<String>, description: impl Into<String>, factory: F) -> Self
    where
        F: Fn(&ServiceProvider) -> Result<T> + Send + Sync + 'static,
    {
        Self {
            descriptor: CommandDescriptor::new(name, description),
            factory: Arc::new(factory),
            subcommands: Vec::new(),
        }
    }

    /// 하위 명령은 선언 순서를 유지한다.
    pub fn subcommand(mut self, spec: SubcommandSpec<T>) -> Self {
        self.subcommands.push(spec);
        self
    }

    fn construct(&self, services: &ServiceProvider) -> Result<Arc<T>, EntryFailure> {
        (self.factory)(services)
            .map(Arc::new)
            .map_err(EntryFailure::Construct)
    }
}

/// 실행 실패 원인 구분: 인스턴스 생성 단계인지 핸들러 내부인지.
#[derive(Debug)]
pub(crate) enum EntryFailure {
    Construct(anyhow::Error),
    Handler(anyhow::Error),
}

/// 타입이 지워진 명령 항목. 트리 노드가 공유한다.
#[async_trait]
pub(crate) trait CommandEntry: Send + Sync {
    fn descriptor(&self) -> &CommandDescriptor;

    fn subcommands(&self) -> Vec<&SubcommandMeta>;

    /// 인스턴스를 한 번 만들어 보고 버린다(빌드 시점 생성 가능성 검증).
    fn probe(&self, services: &ServiceProvider) -> Result<()>;

    async fn execute(&self, services: &ServiceProvider) -> Result<(), EntryFailure>;

    async fn invoke(
        &self,
        services: &ServiceProvider,
        index: usize,
        args: BoundArgs,
    ) -> Result<(), EntryFailure>;
}

#[async_trait]
impl<T: Command> CommandEntry for CommandSpec<T> {
    fn descriptor(&self) -> &CommandDescriptor {
        &self.descriptor
    }

    fn subcommands(&self) -> Vec<&SubcommandMeta> {
        self.subcommands.iter().map(SubcommandSpec::meta).collect()
    }

    fn probe(&self, services: &ServiceProvider) -> Result<()> {
        (self.factory)(services).map(drop)
    }

    async fn execute(&self, services: &ServiceProvider) -> Result<(), EntryFailure> {
        let instance = self.construct(services)?;
        instance.execute().await.map_err(EntryFailure::Handler)
    }

    async fn invoke(
        &self,
        services: &ServiceProvider,
        index: usize,
        args: BoundArgs,
    ) -> Result<(), EntryFailure> {
        let Some(spec) = self.subcommands.get(index) else {
            return Err(EntryFailure::Handler(anyhow!(
                "subcommand #{index} is not registered on '{}'",
                self.descriptor.name
            )));
        };
        let instance = self.construct(services)?;
        (spec.method)(instance, args)
            .await
            .map_err(EntryFailure::Handler)
    }
}

/// 함께 스캔되는 명령 묶음(코드 단위).
pub struct CommandUnit {
    name: String,
    entries: Vec<Arc<dyn CommandEntry>>,
}

impl CommandUnit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn command<T: Command>(mut self, spec: CommandSpec<T>) -> Self {
        self.entries.push(Arc::new(spec));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries(&self) -> &[Arc<dyn CommandEntry>] {
        &self.entries
    }
}
