//! 저장소에 보관되는 레코드 엔티티.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 식별자 하나로 저장/조회되는 레코드.
pub trait Record {
    fn id(&self) -> &str;
}

/// 2차원 좌표 레코드.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRecord {
    pub id: String,
    pub x: i64,
    pub y: i64,
}

impl PositionRecord {
    /// 새 식별자(uuid v4)를 발급해 레코드를 만든다.
    pub fn new(x: i64, y: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            x,
            y,
        }
    }
}

impl Record for PositionRecord {
    fn id(&self) -> &str {
        &self.id
    }
}
