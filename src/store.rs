//! Persisted theme preference.
//!
//! The preference is a single key-value entry: [`PREFERENCE_KEY`] mapped to
//! `"light"` or `"dark"`. [`PreferenceStore`] is the capability the
//! controller writes through; [`MemoryStore`] is the in-memory fallback for
//! hosts without persistent storage, and [`FileStore`] keeps the entry in a
//! small JSON document alongside whatever other keys the host stores there.

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::theme::Theme;

/// The fixed namespaced key the preference is stored under.
pub const PREFERENCE_KEY: &str = "duotone-theme";

/// Error from a preference save.
///
/// Loads never error: any unreadable or invalid state reads as "no stored
/// preference" so startup can fall back to the ambient signal.
#[derive(Debug)]
pub enum StoreError {
    /// The backing file could not be read or written.
    Io(std::io::Error),
    /// The backing file exists but is not a JSON object.
    Format(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "preference store io error: {}", e),
            StoreError::Format(msg) => write!(f, "preference store format error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Format(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

/// Capability for reading and writing the one persisted preference entry.
pub trait PreferenceStore {
    /// The stored preference, if a valid one exists.
    fn load(&self) -> Option<Theme>;

    /// Persists `theme` under [`PREFERENCE_KEY`].
    fn save(&mut self, theme: Theme) -> Result<(), StoreError>;
}

/// In-memory store.
///
/// This is the explicit fallback when persistent storage is unavailable:
/// the preference lives for the session and is lost afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<Theme>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a value, as if the user had chosen earlier.
    pub fn with_value(theme: Theme) -> Self {
        Self { value: Some(theme) }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<Theme> {
        self.value
    }

    fn save(&mut self, theme: Theme) -> Result<(), StoreError> {
        self.value = Some(theme);
        Ok(())
    }
}

/// File-backed store keeping a flat JSON object of string entries.
///
/// Only [`PREFERENCE_KEY`] is touched; unrelated keys in the same file are
/// preserved across saves. A missing file, a file that is not valid JSON, or
/// an entry that is not `"light"`/`"dark"` all read as no stored preference.
///
/// # Example
///
/// ```rust,no_run
/// use duotone::{FileStore, PreferenceStore, Theme};
///
/// let mut store = FileStore::new("~/.config/myapp/preferences.json");
/// store.save(Theme::Dark)?;
/// assert_eq!(store.load(), Some(Theme::Dark));
/// # Ok::<(), duotone::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Map<String, Value>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Map::new());
            }
            Err(e) => return Err(StoreError::Io(e)),
        };
        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(StoreError::Format(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
            Err(e) => Err(StoreError::Format(e.to_string())),
        }
    }
}

impl PreferenceStore for FileStore {
    fn load(&self) -> Option<Theme> {
        let entries = self.read_entries().ok()?;
        let value = entries.get(PREFERENCE_KEY)?.as_str()?;
        Theme::from_str(value).ok()
    }

    fn save(&mut self, theme: Theme) -> Result<(), StoreError> {
        // An unreadable file is replaced rather than propagated; the save
        // must still record the user's choice.
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(
            PREFERENCE_KEY.to_string(),
            Value::String(theme.as_str().to_string()),
        );
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(&Value::Object(entries))
            .map_err(|e| StoreError::Format(e.to_string()))?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join("preferences.json"))
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load(), None);
        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load(), Some(Theme::Dark));
    }

    #[test]
    fn test_file_store_missing_file_loads_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store_in(&dir).load(), None);
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load(), Some(Theme::Dark));
        store.save(Theme::Light).unwrap();
        assert_eq!(store.load(), Some(Theme::Light));
    }

    #[test]
    fn test_file_store_preserves_unrelated_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, r#"{"editor-font": "mono", "duotone-theme": "dark"}"#).unwrap();

        let mut store = FileStore::new(&path);
        assert_eq!(store.load(), Some(Theme::Dark));
        store.save(Theme::Light).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let entries: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(entries["editor-font"], "mono");
        assert_eq!(entries["duotone-theme"], "light");
    }

    #[test]
    fn test_file_store_invalid_value_loads_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, r#"{"duotone-theme": "sepia"}"#).unwrap();
        assert_eq!(FileStore::new(&path).load(), None);
    }

    #[test]
    fn test_file_store_corrupt_file_loads_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "not json at all").unwrap();
        assert_eq!(FileStore::new(&path).load(), None);
    }

    #[test]
    fn test_file_store_save_replaces_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "not json at all").unwrap();

        let mut store = FileStore::new(&path);
        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load(), Some(Theme::Dark));
    }

    #[test]
    fn test_file_store_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deeper/preferences.json");
        let mut store = FileStore::new(&path);
        store.save(Theme::Light).unwrap();
        assert_eq!(store.load(), Some(Theme::Light));
    }
}
