//! Key/value preference storage
//!
//! Preferences are flat scalars (bool, integer, string) addressed by key.
//! [`MemoryPreferences`] keeps them in a shared map, [`FilePreferences`]
//! additionally writes the whole table to a TOML file on every change.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::PreferenceError;

/// A single stored preference value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreferenceValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl PreferenceValue {
    fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "integer",
            Self::Text(_) => "string",
        }
    }
}

type Table = BTreeMap<String, PreferenceValue>;

/// Durable key/value storage for user preferences
pub trait PreferenceStore: Send {
    /// Read the raw value stored under `key`
    fn get(&self, key: &str) -> Result<Option<PreferenceValue>, PreferenceError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: PreferenceValue) -> Result<(), PreferenceError>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<(), PreferenceError>;

    fn get_bool(&self, key: &str) -> Result<Option<bool>, PreferenceError> {
        match self.get(key)? {
            None => Ok(None),
            Some(PreferenceValue::Bool(value)) => Ok(Some(value)),
            Some(other) => Err(mismatch(key, "bool", &other)),
        }
    }

    fn get_int(&self, key: &str) -> Result<Option<i64>, PreferenceError> {
        match self.get(key)? {
            None => Ok(None),
            Some(PreferenceValue::Int(value)) => Ok(Some(value)),
            Some(other) => Err(mismatch(key, "integer", &other)),
        }
    }

    fn get_string(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        match self.get(key)? {
            None => Ok(None),
            Some(PreferenceValue::Text(value)) => Ok(Some(value)),
            Some(other) => Err(mismatch(key, "string", &other)),
        }
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), PreferenceError> {
        self.set(key, PreferenceValue::Bool(value))
    }

    fn set_int(&mut self, key: &str, value: i64) -> Result<(), PreferenceError> {
        self.set(key, PreferenceValue::Int(value))
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.set(key, PreferenceValue::Text(value.to_string()))
    }
}

fn mismatch(key: &str, expected: &'static str, found: &PreferenceValue) -> PreferenceError {
    PreferenceError::TypeMismatch {
        key: key.to_string(),
        expected,
        found: found.kind(),
    }
}

/// In-memory preferences
///
/// Clones share the same table, so a handle kept by a test observes writes
/// made through another handle.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    table: Arc<Mutex<Table>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self) -> MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.table().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table().is_empty()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<PreferenceValue>, PreferenceError> {
        Ok(self.table().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: PreferenceValue) -> Result<(), PreferenceError> {
        self.table().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PreferenceError> {
        self.table().remove(key);
        Ok(())
    }
}

/// Preferences persisted to a TOML file
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    table: Table,
}

impl FilePreferences {
    /// Open the preference file at `path`; a missing file starts empty
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PreferenceError> {
        let path = path.into();
        let table = if path.exists() {
            let content = fs::read_to_string(&path)?;
            let table: Table = toml::from_str(&content)?;
            log::info!("Loaded {} preferences from {:?}", table.len(), path);
            table
        } else {
            log::debug!("No preference file at {:?}, starting empty", path);
            Table::new()
        };
        Ok(Self { path, table })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), PreferenceError> {
        let content = toml::to_string_pretty(&self.table)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, content)?;
        log::debug!("Saved preferences to {:?}", self.path);
        Ok(())
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Result<Option<PreferenceValue>, PreferenceError> {
        Ok(self.table.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: PreferenceValue) -> Result<(), PreferenceError> {
        self.table.insert(key.to_string(), value);
        self.save()
    }

    fn remove(&mut self, key: &str) -> Result<(), PreferenceError> {
        if self.table.remove(key).is_some() {
            self.save()?;
        }
        Ok(())
    }
}
