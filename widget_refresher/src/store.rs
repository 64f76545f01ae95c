use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use types::WidgetId;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read preferences: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write preferences: {0}")]
    Write(#[source] io::Error),

    #[error("preferences file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Per-instance configuration storage.
///
/// Keys are widget instance ids, values are the configured image URLs.
/// Persistence across process restarts is the host environment's
/// responsibility; this interface is just `get` and `set`.
pub trait PreferenceStore: Send + Sync {
    /// Configured URL for `id`, or `None` when the instance has never
    /// been configured.
    fn get(&self, id: &WidgetId) -> Option<String>;

    /// Record the URL for `id`, replacing any previous value.
    fn set(&self, id: &WidgetId, url: &str) -> Result<(), StoreError>;
}

/// Preference store backed by a single JSON file holding one flat
/// id-to-url object.
///
/// The file is reloaded on every access and rewritten through a temp-file
/// rename, so concurrent readers never observe a half-written document.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A missing file reads as an empty store.
    fn load(&self) -> Result<HashMap<String, String>, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(StoreError::Read(e)),
        }
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, id: &WidgetId) -> Option<String> {
        match self.load() {
            Ok(entries) => entries.get(id.as_str()).cloned(),
            Err(e) => {
                tracing::error!("Failed to load preferences: {}", e);
                None
            }
        }
    }

    fn set(&self, id: &WidgetId, url: &str) -> Result<(), StoreError> {
        let mut entries = self.load()?;
        entries.insert(id.as_str().to_string(), url.to_string());

        let bytes = serde_json::to_vec_pretty(&entries)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, bytes).map_err(StoreError::Write)?;
        fs::rename(&tmp, &self.path).map_err(StoreError::Write)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> JsonFileStore {
        let path = std::env::temp_dir()
            .join(format!("picframe-prefs-{}.json", uuid::Uuid::now_v7()));
        JsonFileStore::new(path)
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let store = temp_store();
        assert_eq!(store.get(&WidgetId::from("1")), None);
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let store = temp_store();
        let id = WidgetId::from("1");

        store.set(&id, "http://example.com/a.png").unwrap();
        assert_eq!(store.get(&id), Some("http://example.com/a.png".to_string()));

        let _ = fs::remove_file(&store.path);
    }

    #[test]
    fn test_set_replaces_and_preserves_other_entries() {
        let store = temp_store();
        let first = WidgetId::from("1");
        let second = WidgetId::from("2");

        store.set(&first, "http://example.com/a.png").unwrap();
        store.set(&second, "http://example.com/b.png").unwrap();
        store.set(&first, "http://example.com/c.png").unwrap();

        assert_eq!(store.get(&first), Some("http://example.com/c.png".to_string()));
        assert_eq!(store.get(&second), Some("http://example.com/b.png".to_string()));

        let _ = fs::remove_file(&store.path);
    }

    #[test]
    fn test_unknown_id_is_none() {
        let store = temp_store();
        store.set(&WidgetId::from("1"), "http://example.com/a.png").unwrap();

        assert_eq!(store.get(&WidgetId::from("2")), None);

        let _ = fs::remove_file(&store.path);
    }
}
