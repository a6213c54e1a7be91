//! Flat key=value configuration store.
//!
//! One pair per line, split at the first `=`, later duplicates win. No
//! escaping and no types on disk: numbers are decimal text, booleans are
//! "1"/"0". The whole file is rewritten on every change, so the on-disk
//! state always matches the in-memory map.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Default config file, resolved against the working directory.
pub const CONFIG_FILE: &str = "easel.ini";

/// A value that can live in the config file.
pub trait ConfigValue: Sized {
    fn to_entry(&self) -> String;
    fn from_entry(s: &str) -> Option<Self>;
}

impl ConfigValue for bool {
    fn to_entry(&self) -> String {
        if *self { "1".into() } else { "0".into() }
    }

    fn from_entry(s: &str) -> Option<Self> {
        match s {
            "1" => Some(true),
            "0" => Some(false),
            _ => None,
        }
    }
}

impl ConfigValue for String {
    fn to_entry(&self) -> String {
        self.clone()
    }

    fn from_entry(s: &str) -> Option<Self> {
        Some(s.to_owned())
    }
}

macro_rules! numeric_config_value {
    ($($ty:ty),*) => {
        $(impl ConfigValue for $ty {
            fn to_entry(&self) -> String {
                self.to_string()
            }

            fn from_entry(s: &str) -> Option<Self> {
                s.trim().parse().ok()
            }
        })*
    };
}

numeric_config_value!(i32, i64, u32, u64, f32, f64);

/// The key=value store backing all persisted settings.
pub struct ConfigStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl ConfigStore {
    /// Load the store from `path`. A missing or unreadable file is not an
    /// error: the store starts empty and callers get their defaults.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut values = BTreeMap::new();

        match fs::read_to_string(&path) {
            Ok(contents) => {
                for line in contents.lines() {
                    if let Some((key, value)) = line.split_once('=') {
                        values.insert(key.to_owned(), value.to_owned());
                    }
                }
                debug!(path = %path.display(), entries = values.len(), "config loaded");
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no config file, using defaults");
            }
        }

        Self { path, values }
    }

    /// Rewrite the whole file from the in-memory map.
    fn save(&self) {
        let mut out = String::new();
        for (key, value) in &self.values {
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }

        if let Err(e) = fs::write(&self.path, out) {
            warn!(path = %self.path.display(), error = %e, "failed to write config");
        }
    }

    /// Typed read. Missing keys and unparsable values fall back to `default`.
    pub fn get<T: ConfigValue>(&self, key: &str, default: T) -> T {
        self.values
            .get(key)
            .and_then(|raw| T::from_entry(raw))
            .unwrap_or(default)
    }

    /// Typed write. Persists immediately.
    pub fn set<T: ConfigValue>(&mut self, key: &str, value: T) {
        self.values.insert(key.to_owned(), value.to_entry());
        self.save();
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) {
        if self.values.remove(key).is_some() {
            self.save();
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.save();
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Typed snapshot of everything easel persists: window geometry (physical
/// pixels) plus the two UI booleans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub window_width: u32,
    pub window_height: u32,
    pub wireframe: bool,
    pub show_properties: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            wireframe: false,
            show_properties: true,
        }
    }
}

impl Settings {
    pub const KEY_WIDTH: &'static str = "window_width";
    pub const KEY_HEIGHT: &'static str = "window_height";
    pub const KEY_WIREFRAME: &'static str = "wireframe";
    pub const KEY_PROPERTIES: &'static str = "show_properties";

    pub fn load(store: &ConfigStore) -> Self {
        let defaults = Self::default();
        Self {
            window_width: store.get(Self::KEY_WIDTH, defaults.window_width),
            window_height: store.get(Self::KEY_HEIGHT, defaults.window_height),
            wireframe: store.get(Self::KEY_WIREFRAME, defaults.wireframe),
            show_properties: store.get(Self::KEY_PROPERTIES, defaults.show_properties),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("easel-{}-{}.ini", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let store = ConfigStore::load(temp_path("missing"));
        assert_eq!(store.get("window_width", 800u32), 800);
        assert!(!store.contains("window_width"));
    }

    #[test]
    fn test_round_trip_through_file() {
        let path = temp_path("roundtrip");
        {
            let mut store = ConfigStore::load(&path);
            store.set("window_width", 1280u32);
            store.set("wireframe", true);
            store.set("title", "easel".to_string());
        }
        let store = ConfigStore::load(&path);
        assert_eq!(store.get("window_width", 0u32), 1280);
        assert!(store.get("wireframe", false));
        assert_eq!(store.get("title", String::new()), "easel");
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_bool_encodes_as_one_and_zero() {
        let path = temp_path("bools");
        let mut store = ConfigStore::load(&path);
        store.set("a", true);
        store.set("b", false);
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("a=1"));
        assert!(raw.contains("b=0"));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let path = temp_path("dups");
        fs::write(&path, "k=1\nk=2\nk=3\n").unwrap();
        let store = ConfigStore::load(&path);
        assert_eq!(store.get("k", 0i32), 3);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_lines_without_separator_are_skipped() {
        let path = temp_path("garbage");
        fs::write(&path, "not a pair\nwidth=640\n\njunk\n").unwrap();
        let store = ConfigStore::load(&path);
        assert_eq!(store.get("width", 0u32), 640);
        assert!(!store.contains("not a pair"));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_unparsable_value_falls_back_to_default() {
        let path = temp_path("badvalue");
        fs::write(&path, "width=banana\nflag=yes\n").unwrap();
        let store = ConfigStore::load(&path);
        assert_eq!(store.get("width", 123u32), 123);
        assert!(!store.get("flag", false));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_value_with_equals_sign_splits_at_first() {
        let path = temp_path("equals");
        fs::write(&path, "expr=a=b\n").unwrap();
        let store = ConfigStore::load(&path);
        assert_eq!(store.get("expr", String::new()), "a=b");
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_remove_and_clear_persist() {
        let path = temp_path("remove");
        let mut store = ConfigStore::load(&path);
        store.set("a", 1i32);
        store.set("b", 2i32);
        store.remove("a");
        let reloaded = ConfigStore::load(&path);
        assert!(!reloaded.contains("a"));
        assert!(reloaded.contains("b"));

        store.clear();
        let reloaded = ConfigStore::load(&path);
        assert!(!reloaded.contains("b"));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_settings_snapshot_reads_overrides() {
        let path = temp_path("settings");
        fs::write(&path, "window_width=1024\nshow_properties=0\n").unwrap();
        let store = ConfigStore::load(&path);
        let settings = Settings::load(&store);
        assert_eq!(settings.window_width, 1024);
        assert_eq!(settings.window_height, 600); // default
        assert!(!settings.show_properties);
        assert!(!settings.wireframe);
        fs::remove_file(&path).ok();
    }
}
