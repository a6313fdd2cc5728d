//! Persisted theme selection
//!
//! [`KeyValueStore`] is the storage capability (browser local storage, a
//! JSON file, memory). [`ThemeStore`] lays the selection out under a
//! namespace:
//!
//! | key                  | value                   |
//! |----------------------|-------------------------|
//! | `{ns}`               | active theme id         |
//! | `{ns}-custom-hue`    | number                  |
//! | `{ns}-custom-chroma` | number                  |
//! | `{ns}-is-custom`     | `"true"` / `"false"`    |
//! | `themePosition`      | panel corner (global)   |
//!
//! Failures never reach the caller: writes are dropped with a warning and
//! failed reads look like missing keys.

use crate::accent::AccentOverride;
use crate::error::StoreError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Arc, Mutex};

/// Global key for the floating panel corner, shared by all namespaces
pub const POSITION_KEY: &str = "themePosition";

/// Default namespace
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// String key/value storage capability
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// In-process store. Clones share the same data, so a second controller
/// built from a clone sees what the first one persisted.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<FxHashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a raw entry
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store poisoned".into()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON-object file store, written through on every `set`
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open a store file. A missing file is empty; an unreadable or
    /// malformed one is treated as empty and replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match read_entries(&path) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!("ignoring theme state at {}: {}", path.display(), err);
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, String>, StoreError> {
    match std::fs::read_to_string(path) {
        Ok(src) => Ok(serde_json::from_str(&src)?),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
        Err(err) => Err(err.into()),
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// Corner of the floating theme panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl PanelPosition {
    pub const ALL: [PanelPosition; 4] = [
        PanelPosition::TopLeft,
        PanelPosition::TopRight,
        PanelPosition::BottomLeft,
        PanelPosition::BottomRight,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PanelPosition::TopLeft => "top-left",
            PanelPosition::TopRight => "top-right",
            PanelPosition::BottomLeft => "bottom-left",
            PanelPosition::BottomRight => "bottom-right",
        }
    }
}

impl Display for PanelPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PanelPosition::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown panel position `{s}`"))
    }
}

/// Namespaced selection fields
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeField {
    ActiveTheme,
    CustomHue,
    CustomChroma,
    IsCustom,
}

impl ThemeField {
    fn suffix(self) -> &'static str {
        match self {
            ThemeField::ActiveTheme => "",
            ThemeField::CustomHue => "-custom-hue",
            ThemeField::CustomChroma => "-custom-chroma",
            ThemeField::IsCustom => "-is-custom",
        }
    }
}

/// Selection persistence over a [`KeyValueStore`]
#[derive(Debug)]
pub struct ThemeStore<K> {
    namespace: String,
    backend: K,
}

impl<K: KeyValueStore> ThemeStore<K> {
    pub fn new(namespace: impl Into<String>, backend: K) -> Self {
        Self {
            namespace: namespace.into(),
            backend,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Full storage key of a field
    pub fn key(&self, field: ThemeField) -> String {
        format!("{}{}", self.namespace, field.suffix())
    }

    pub fn save(&mut self, field: ThemeField, value: &str) {
        let key = self.key(field);
        self.save_key(&key, value);
    }

    pub fn load(&self, field: ThemeField) -> Option<String> {
        self.load_key(&self.key(field))
    }

    fn save_key(&mut self, key: &str, value: &str) {
        if let Err(err) = self.backend.set(key, value) {
            tracing::warn!("theme storage write `{}` dropped: {}", key, err);
        }
    }

    fn load_key(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("theme storage read `{}` failed: {}", key, err);
                None
            }
        }
    }

    /// Whether the custom accent flag is stored as `"true"`
    pub fn load_is_custom(&self) -> bool {
        self.load(ThemeField::IsCustom).as_deref() == Some("true")
    }

    /// Stored accent; `None` unless both numbers parse as finite values
    pub fn load_accent(&self) -> Option<AccentOverride> {
        let hue = parse_number(self.load(ThemeField::CustomHue)?.as_str())?;
        let chroma = parse_number(self.load(ThemeField::CustomChroma)?.as_str())?;
        Some(AccentOverride::new(hue, chroma))
    }

    pub fn save_accent(&mut self, accent: AccentOverride) {
        self.save(ThemeField::CustomHue, &accent.hue.to_string());
        self.save(ThemeField::CustomChroma, &accent.chroma.to_string());
    }

    pub fn save_is_custom(&mut self, is_custom: bool) {
        self.save(ThemeField::IsCustom, if is_custom { "true" } else { "false" });
    }

    /// Stored panel corner; unrecognised values read as absent
    pub fn load_position(&self) -> Option<PanelPosition> {
        self.load_key(POSITION_KEY)?.parse().ok()
    }

    pub fn save_position(&mut self, position: PanelPosition) {
        self.save_key(POSITION_KEY, position.as_str());
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    pub fn into_backend(self) -> K {
        self.backend
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Unavailable;

    impl KeyValueStore for Unavailable {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("disabled".into()))
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("disabled".into()))
        }
    }

    #[test]
    fn lays_out_keys_under_namespace() {
        let backend = MemoryStore::new();
        let mut store = ThemeStore::new("app-theme", backend.clone());

        store.save(ThemeField::ActiveTheme, "nord");
        store.save_accent(AccentOverride::new(280.0, 0.18));
        store.save_is_custom(true);
        store.save_position(PanelPosition::TopLeft);

        assert_eq!(backend.raw("app-theme").as_deref(), Some("nord"));
        assert_eq!(backend.raw("app-theme-custom-hue").as_deref(), Some("280"));
        assert_eq!(backend.raw("app-theme-custom-chroma").as_deref(), Some("0.18"));
        assert_eq!(backend.raw("app-theme-is-custom").as_deref(), Some("true"));
        assert_eq!(backend.raw("themePosition").as_deref(), Some("top-left"));
    }

    #[test]
    fn accent_requires_both_numbers() {
        let mut backend = MemoryStore::new();
        backend.set("theme-custom-hue", "120").unwrap();
        let store = ThemeStore::new(DEFAULT_STORAGE_KEY, backend.clone());
        assert_eq!(store.load_accent(), None);

        backend.set("theme-custom-chroma", "abc").unwrap();
        assert_eq!(store.load_accent(), None);

        backend.set("theme-custom-chroma", "0.2").unwrap();
        assert_eq!(store.load_accent(), Some(AccentOverride::new(120.0, 0.2)));
    }

    #[test]
    fn unavailable_backend_degrades_silently() {
        let mut store = ThemeStore::new("theme", Unavailable);
        store.save(ThemeField::ActiveTheme, "dark");
        store.save_position(PanelPosition::TopRight);

        assert_eq!(store.load(ThemeField::ActiveTheme), None);
        assert_eq!(store.load_position(), None);
        assert!(!store.load_is_custom());
    }

    #[test]
    fn ignores_unknown_position() {
        let mut backend = MemoryStore::new();
        backend.set(POSITION_KEY, "center").unwrap();
        let store = ThemeStore::new("theme", backend);
        assert_eq!(store.load_position(), None);
    }

    #[test]
    fn file_store_persists_across_opens() {
        let path = std::env::temp_dir().join(format!(
            "tinct-store-{}-{}.json",
            std::process::id(),
            line!()
        ));
        let _ = std::fs::remove_file(&path);

        let mut store = FileStore::open(&path);
        store.set("theme", "dracula").unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dracula"));

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["theme"], "dracula");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn file_store_treats_corrupt_file_as_empty() {
        let path = std::env::temp_dir().join(format!(
            "tinct-store-{}-{}.json",
            std::process::id(),
            line!()
        ));
        std::fs::write(&path, "not json").unwrap();

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("theme").unwrap(), None);
        store.set("theme", "nord").unwrap();
        assert_eq!(FileStore::open(&path).get("theme").unwrap().as_deref(), Some("nord"));

        let _ = std::fs::remove_file(&path);
    }
}
