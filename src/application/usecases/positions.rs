//! 좌표 레코드 관리 유스케이스.

use std::sync::Arc;

use crate::application::ports::Repository;
use crate::domain::record::PositionRecord;

/// 저장소 포트 위의 좌표 CRUD. 실패는 `bool`/`Option`으로 전달된다.
#[derive(Clone)]
pub struct PositionService {
    repository: Arc<dyn Repository<PositionRecord>>,
}

impl PositionService {
    pub fn new(repository: Arc<dyn Repository<PositionRecord>>) -> Self {
        Self { repository }
    }

    /// 새 식별자를 발급해 저장한다. 저장에 실패하면 `None`.
    pub fn add(&self, x: i64, y: i64) -> Option<PositionRecord> {
        let record = PositionRecord::new(x, y);
        self.repository.add(&record).then_some(record)
    }

    pub fn all(&self) -> Vec<PositionRecord> {
        self.repository.get_all()
    }

    pub fn find(&self, id: &str) -> Option<PositionRecord> {
        self.repository.get_by_id(id)
    }

    /// 대소문자를 무시하고 식별자가 같은 레코드를 모두 찾는다.
    pub fn query_by_id(&self, id: &str) -> Vec<PositionRecord> {
        self.repository
            .get_all()
            .into_iter()
            .filter(|record| record.id.eq_ignore_ascii_case(id))
            .collect()
    }

    /// 기존 레코드의 좌표만 바꾼다. 없으면 `false`.
    pub fn move_to(&self, id: &str, x: i64, y: i64) -> bool {
        let Some(mut record) = self.repository.get_by_id(id) else {
            return false;
        };
        record.x = x;
        record.y = y;
        self.repository.update(&record)
    }

    pub fn remove(&self, id: &str) -> bool {
        self.repository.delete(id)
    }
}
