use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::is_storable_id;
use crate::application::ports::Repository;
use crate::domain::record::Record;

const RECORD_EXT: &str = "json";

/// 디렉터리 하나에 `<id>.json` 파일로 레코드를 보관한다.
pub struct JsonFileRepository<T> {
    root: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T> JsonFileRepository<T> {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            _record: PhantomData,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, id: &str) -> Option<PathBuf> {
        is_storable_id(id).then(|| self.root.join(format!("{id}.{RECORD_EXT}")))
    }
}

impl<T> JsonFileRepository<T>
where
    T: Record + Serialize + DeserializeOwned,
{
    fn read(&self, path: &Path) -> Option<T> {
        let raw = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "skipping unreadable record");
                None
            }
        }
    }

    fn write(&self, entity: &T) -> io::Result<()> {
        let path = self
            .record_path(entity.id())
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "invalid record id"))?;
        fs::create_dir_all(&self.root)?;

        let content = serde_json::to_string_pretty(entity).map_err(io::Error::other)?;
        // 임시 파일에 다 쓴 뒤 rename으로 교체한다.
        let tmp = self.root.join(format!(".{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &path).inspect_err(|_| {
            let _ = fs::remove_file(&tmp);
        })
    }
}

impl<T> Repository<T> for JsonFileRepository<T>
where
    T: Record + Serialize + DeserializeOwned + Send + Sync,
{
    fn get_all(&self) -> Vec<T> {
        let Ok(entries) = fs::read_dir(&self.root) else {
            return Vec::new();
        };

        let mut records: Vec<T> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == RECORD_EXT))
            .filter_map(|path| self.read(&path))
            .collect();
        records.sort_by(|a, b| a.id().cmp(b.id()));
        records
    }

    fn get_by_id(&self, id: &str) -> Option<T> {
        let path = self.record_path(id)?;
        self.read(&path)
    }

    fn add(&self, entity: &T) -> bool {
        match self.write(entity) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(id = entity.id(), error = %err, "failed to write record");
                false
            }
        }
    }

    fn update(&self, entity: &T) -> bool {
        if self.get_by_id(entity.id()).is_none() {
            return false;
        }
        self.add(entity)
    }

    fn delete(&self, id: &str) -> bool {
        let Some(path) = self.record_path(id) else {
            return false;
        };
        match fs::remove_file(&path) {
            Ok(()) => true,
            Err(err) if err.kind() == io::ErrorKind::NotFound => true,
            Err(err) => {
                tracing::warn!(id, error = %err, "failed to delete record");
                false
            }
        }
    }
}
