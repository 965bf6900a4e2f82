//! 명령 핸들러가 호출하는 유스케이스.

pub mod positions;
pub mod settings;
