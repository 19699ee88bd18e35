use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Persistent key-value settings, the player-preferences analogue.
///
/// Reads never fail (a missing key yields the caller's default) and writes
/// are best effort. Widgets hold this behind `&mut dyn SettingsStore` so
/// tests can swap in an in-memory store.
pub trait SettingsStore {
    fn get_float(&self, key: &str, default: f32) -> f32;
    fn set_float(&mut self, key: &str, value: f32);
}

#[derive(Debug, Default)]
pub struct MemorySettings {
    values: HashMap<String, f32>,
}

impl SettingsStore for MemorySettings {
    fn get_float(&self, key: &str, default: f32) -> f32 {
        self.values.get(key).copied().unwrap_or(default)
    }

    fn set_float(&mut self, key: &str, value: f32) {
        self.values.insert(key.to_string(), value);
    }
}

/// Settings persisted to a ron file, rewritten on every set.
#[derive(Debug)]
pub struct FileSettings {
    path: PathBuf,
    values: HashMap<String, f32>,
}

impl FileSettings {
    /// Opens the store at `path`. A missing file is a normal first run;
    /// an unparseable one is logged and treated as empty.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(text) => match ron::from_str::<HashMap<String, f32>>(&text) {
                Ok(values) => values,
                Err(err) => {
                    tracing::warn!(%err, path = %path.display(), "settings file unreadable, starting fresh");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        Self { path, values }
    }

    fn persist(&self) {
        let text = match ron::ser::to_string_pretty(&self.values, ron::ser::PrettyConfig::default()) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(%err, "failed to serialize settings");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, text) {
            tracing::warn!(%err, path = %self.path.display(), "failed to write settings");
        }
    }
}

impl SettingsStore for FileSettings {
    fn get_float(&self, key: &str, default: f32) -> f32 {
        self.values.get(key).copied().unwrap_or(default)
    }

    fn set_float(&mut self, key: &str, value: f32) {
        self.values.insert(key.to_string(), value);
        self.persist();
    }
}
