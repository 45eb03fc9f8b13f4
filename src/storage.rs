use crate::errors::AppError;
use serde_json::{Map, Value};
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub const ANGER_LOGS_KEY: &str = "angerLogs";
pub const ANGER_COUNT_KEY: &str = "angerCount";

pub fn resolve_data_path() -> PathBuf {
    env::var_os("APP_DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/state.json"))
}

/// File-backed key-value storage.
///
/// The whole file is one JSON object. Reads never fail: anything missing or
/// unreadable comes back as empty storage. `flush` rewrites the file in full.
#[derive(Debug, Clone)]
pub struct Defaults {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl Defaults {
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<Map<String, Value>>(&bytes) {
                Ok(entries) => entries,
                Err(err) => {
                    error!("failed to parse storage file {}: {err}", path.display());
                    Map::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Map::new(),
            Err(err) => {
                error!("failed to read storage file {}: {err}", path.display());
                Map::new()
            }
        };

        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn value(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Missing, negative and non-integer values all read as 0.
    pub fn integer(&self, key: &str) -> u64 {
        self.entries.get(key).and_then(Value::as_u64).unwrap_or(0)
    }

    pub fn set(&mut self, key: &str, value: Value) {
        self.entries.insert(key.to_string(), value);
    }

    pub fn set_integer(&mut self, key: &str, value: u64) {
        self.set(key, Value::from(value));
    }

    pub async fn flush(&self) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let payload = serde_json::to_vec_pretty(&self.entries)?;
        fs::write(&self.path, payload).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Defaults::load(dir.path().join("state.json")).await;
        assert!(storage.value(ANGER_LOGS_KEY).is_none());
        assert_eq!(storage.integer(ANGER_COUNT_KEY), 0);
    }

    #[tokio::test]
    async fn malformed_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, b"{ not json").unwrap();

        let storage = Defaults::load(&path).await;
        assert!(storage.value(ANGER_LOGS_KEY).is_none());
        assert_eq!(storage.integer(ANGER_COUNT_KEY), 0);
    }

    #[tokio::test]
    async fn flush_creates_parent_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let mut storage = Defaults::load(&path).await;
        storage.set(ANGER_LOGS_KEY, json!([]));
        storage.set_integer(ANGER_COUNT_KEY, 4);
        storage.flush().await.unwrap();

        let reloaded = Defaults::load(&path).await;
        assert_eq!(reloaded.value(ANGER_LOGS_KEY), Some(&json!([])));
        assert_eq!(reloaded.integer(ANGER_COUNT_KEY), 4);
    }

    #[tokio::test]
    async fn non_integer_count_reads_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, br#"{"angerCount": -3, "other": "x"}"#).unwrap();

        let storage = Defaults::load(&path).await;
        assert_eq!(storage.integer(ANGER_COUNT_KEY), 0);
        assert_eq!(storage.integer("other"), 0);
    }
}
