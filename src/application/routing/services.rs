//! 명령 인스턴스 생성에 쓰이는 서비스 컨테이너(객체 팩토리의 의존성 공급원).

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;

use anyhow::{Result, anyhow};

/// 타입별로 복제 가능한 서비스 핸들을 보관한다.
/// 트레이트 객체는 `Arc<dyn Trait>` 자체를 서비스 타입으로 등록한다.
#[derive(Default)]
pub struct ServiceProvider {
    services: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl ServiceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// 같은 타입을 다시 등록하면 이전 값을 대체한다.
    pub fn register<S>(&mut self, service: S) -> &mut Self
    where
        S: Clone + Send + Sync + 'static,
    {
        self.services.insert(TypeId::of::<S>(), Box::new(service));
        self
    }

    pub fn with<S>(mut self, service: S) -> Self
    where
        S: Clone + Send + Sync + 'static,
    {
        self.register(service);
        self
    }

    pub fn resolve<S>(&self) -> Result<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        self.services
            .get(&TypeId::of::<S>())
            .and_then(|boxed| boxed.downcast_ref::<S>())
            .cloned()
            .ok_or_else(|| anyhow!("service not registered: {}", type_name::<S>()))
    }

    pub fn contains<S: 'static>(&self) -> bool {
        self.services.contains_key(&TypeId::of::<S>())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    trait Greeter: Send + Sync {
        fn greet(&self) -> String;
    }

    struct Hello;

    impl Greeter for Hello {
        fn greet(&self) -> String {
            "hello".to_string()
        }
    }

    #[test]
    fn resolves_trait_object_handles() {
        let services = ServiceProvider::new().with::<Arc<dyn Greeter>>(Arc::new(Hello));
        let greeter = services.resolve::<Arc<dyn Greeter>>().expect("registered");
        assert_eq!(greeter.greet(), "hello");
    }

    #[test]
    fn missing_service_names_the_type() {
        let services = ServiceProvider::new();
        let err = services.resolve::<String>().unwrap_err();
        assert!(err.to_string().contains("String"));
        assert!(!services.contains::<String>());
    }
}
