use std::path::PathBuf;
use std::sync::RwLock;

use log::{debug, error};
use serde_json::{Map, Value};

use crate::settings::settings_errors::Result;

// Define the trait for SettingsRepository
pub trait SettingsRepositoryTrait: Send + Sync {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&self, key: &str, value: Value) -> Result<()>;
}

/// Key → JSON-blob store backed by a single document file.
///
/// The document is read once at construction and rewritten on every change.
/// An unreadable or malformed document falls back to an empty store; a
/// corrupt settings file must never take the application down.
pub struct FileSettingsRepository {
    path: PathBuf,
    cache: RwLock<Map<String, Value>>,
}

impl FileSettingsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cache = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Map<String, Value>>(&raw) {
                Ok(doc) => doc,
                Err(e) => {
                    error!(
                        "Settings file {} is malformed, starting empty: {}",
                        path.display(),
                        e
                    );
                    Map::new()
                }
            },
            Err(e) => {
                debug!("No settings file at {} ({}), starting empty", path.display(), e);
                Map::new()
            }
        };
        FileSettingsRepository {
            path,
            cache: RwLock::new(cache),
        }
    }

    fn persist(&self, doc: &Map<String, Value>) -> Result<()> {
        let raw = serde_json::to_string_pretty(&Value::Object(doc.clone()))?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl SettingsRepositoryTrait for FileSettingsRepository {
    fn get(&self, key: &str) -> Option<Value> {
        self.cache.read().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        let mut cache = self.cache.write().unwrap();
        cache.insert(key.to_string(), value);
        self.persist(&cache)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ui-state.json");

        let repo = FileSettingsRepository::new(&path);
        repo.set("theme", Value::String("dark".to_string())).unwrap();
        drop(repo);

        let reopened = FileSettingsRepository::new(&path);
        assert_eq!(reopened.get("theme"), Some(Value::String("dark".to_string())));
        assert_eq!(reopened.get("missing"), None);
    }

    #[test]
    fn test_malformed_document_falls_back_to_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ui-state.json");
        std::fs::write(&path, "{broken json").unwrap();

        let repo = FileSettingsRepository::new(&path);
        assert_eq!(repo.get("anything"), None);

        // The store stays usable after the fallback
        repo.set("blocks", serde_json::json!({ "budget": true })).unwrap();
        assert!(repo.get("blocks").is_some());
    }
}
