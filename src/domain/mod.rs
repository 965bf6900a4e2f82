//! Domain layer
//! 명령 트리 모델, 로그 정책, 레코드 엔티티를 인프라 의존성 없이 표현한다.

pub mod command;
pub mod logging;
pub mod record;
