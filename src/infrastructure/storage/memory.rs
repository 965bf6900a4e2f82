use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use super::is_storable_id;
use crate::application::ports::Repository;
use crate::domain::record::Record;

/// 메모리 저장소. 식별자 순으로 정렬된 상태를 유지한다.
pub struct InMemoryRepository<T> {
    records: Mutex<BTreeMap<String, T>>,
    simulate_write_error: AtomicBool,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            records: Mutex::new(BTreeMap::new()),
            simulate_write_error: AtomicBool::new(false),
        }
    }
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 이후 쓰기가 모두 `false`를 돌려주게 한다(실패 경로 테스트용).
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::Relaxed);
    }

    fn writable(&self) -> bool {
        !self.simulate_write_error.load(Ordering::Relaxed)
    }
}

impl<T> Repository<T> for InMemoryRepository<T>
where
    T: Record + Clone + Send + Sync,
{
    fn get_all(&self) -> Vec<T> {
        self.records
            .lock()
            .map(|records| records.values().cloned().collect())
            .unwrap_or_default()
    }

    fn get_by_id(&self, id: &str) -> Option<T> {
        self.records.lock().ok()?.get(id).cloned()
    }

    fn add(&self, entity: &T) -> bool {
        if !self.writable() || !is_storable_id(entity.id()) {
            return false;
        }
        let Ok(mut records) = self.records.lock() else {
            return false;
        };
        records.insert(entity.id().to_string(), entity.clone());
        true
    }

    fn update(&self, entity: &T) -> bool {
        if !self.writable() {
            return false;
        }
        let Ok(mut records) = self.records.lock() else {
            return false;
        };
        match records.get_mut(entity.id()) {
            Some(existing) => {
                *existing = entity.clone();
                true
            }
            None => false,
        }
    }

    fn delete(&self, id: &str) -> bool {
        if !self.writable() {
            return false;
        }
        let Ok(mut records) = self.records.lock() else {
            return false;
        };
        records.remove(id);
        true
    }
}
