//! Local stats persistence
//!
//! A narrow load/save interface over JSON records keyed by fixed strings.
//! Missing or corrupt records load as the type's default; an unusable
//! backing directory degrades silently to in-memory records for the
//! session (callers never see a storage error).

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Key-value record store, file-backed when possible
#[derive(Debug)]
pub struct StatsStore {
    backing: Backing,
}

#[derive(Debug)]
enum Backing {
    Dir(PathBuf),
    Memory(HashMap<String, String>),
}

impl StatsStore {
    /// Open a store rooted at `dir`, creating it if needed. Falls back to
    /// an in-memory store when the directory cannot be used.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        match fs::create_dir_all(&dir) {
            Ok(()) => {
                log::info!("stats store at {}", dir.display());
                Self {
                    backing: Backing::Dir(dir),
                }
            }
            Err(err) => {
                log::warn!(
                    "stats dir {} unavailable ({err}), keeping stats in memory",
                    dir.display()
                );
                Self::in_memory()
            }
        }
    }

    /// Session-only store with no backing files
    pub fn in_memory() -> Self {
        Self {
            backing: Backing::Memory(HashMap::new()),
        }
    }

    fn record_path(dir: &Path, key: &str) -> PathBuf {
        dir.join(format!("{key}.json"))
    }

    /// Load the record under `key`, defaulting on missing or corrupt data
    pub fn load<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let json = match &self.backing {
            Backing::Dir(dir) => fs::read_to_string(Self::record_path(dir, key)).ok(),
            Backing::Memory(map) => map.get(key).cloned(),
        };
        match json {
            Some(json) => serde_json::from_str(&json).unwrap_or_else(|err| {
                log::warn!("corrupt record for {key} ({err}), starting fresh");
                T::default()
            }),
            None => T::default(),
        }
    }

    /// Save the record under `key`; failures log a warning and the caller
    /// carries on with its in-memory copy
    pub fn save<T: Serialize>(&mut self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("could not serialize record for {key}: {err}");
                return;
            }
        };
        match &mut self.backing {
            Backing::Dir(dir) => {
                if let Err(err) = fs::write(Self::record_path(dir, key), &json) {
                    log::warn!("could not save record for {key}: {err}");
                }
            }
            Backing::Memory(map) => {
                map.insert(key.to_string(), json);
            }
        }
    }
}
