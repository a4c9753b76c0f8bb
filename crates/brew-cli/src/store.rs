use brewcalc::core::models::recipe::Recipe;
use directories::ProjectDirs;
#[cfg(test)]
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

const ENTRY_EXTENSION: &str = "toml";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid store key '{0}'. Keys may only contain letters, digits, '-' and '_'.")]
    InvalidKey(String),
    #[error("No recipe stored under key '{0}'")]
    NotFound(String),
    #[error("Could not determine a data directory for the recipe store")]
    NoDataDirectory,
    #[error("I/O error in recipe store: {0}")]
    Io(#[from] std::io::Error),
    #[error("Stored recipe '{key}' is corrupt: {source}")]
    Corrupt {
        key: String,
        source: toml::de::Error,
    },
    #[error("Failed to serialize recipe: {0}")]
    Serialize(#[from] toml::ser::Error),
}

fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

/// A durable map from string keys to string values.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    /// Returns whether an entry was removed.
    fn remove(&mut self, key: &str) -> Result<bool, StoreError>;
    /// All keys, sorted.
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}

/// Stores each entry as `<key>.toml` inside a base directory.
#[derive(Debug)]
pub struct DirectoryStore {
    base_path: PathBuf,
}

impl DirectoryStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        let base_path = base_path.into();
        debug!("DirectoryStore initialized with path: {:?}", &base_path);
        Self { base_path }
    }

    pub fn default_path() -> Result<PathBuf, StoreError> {
        ProjectDirs::from("org", "brewcalc", "brew")
            .map(|dirs| dirs.data_dir().join("recipes"))
            .ok_or(StoreError::NoDataDirectory)
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self
            .base_path
            .join(format!("{}.{}", key, ENTRY_EXTENSION)))
    }
}

impl KeyValueStore for DirectoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.entry_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.entry_path(key)?;
        fs::create_dir_all(&self.base_path)?;
        fs::write(&path, value)?;
        debug!("Wrote store entry {:?}", &path);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool, StoreError> {
        let path = self.entry_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        if !self.base_path.exists() {
            return Ok(Vec::new());
        }
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.base_path)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(ENTRY_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if validate_key(stem).is_ok() {
                    keys.push(stem.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}

/// An in-process store, used where nothing should touch the disk.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        validate_key(key)?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool, StoreError> {
        validate_key(key)?;
        Ok(self.entries.remove(key).is_some())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.entries.keys().cloned().collect())
    }
}

/// Saves and restores recipes in a [`KeyValueStore`].
///
/// Only the recipe itself is persisted; metrics are always recomputed. Restoring a
/// missing key yields the fallback recipe, and a stored recipe without fermentables or
/// hops gets the fallback's entries for the empty list.
pub struct RecipeRepository<S: KeyValueStore> {
    store: S,
    fallback: Recipe,
}

impl<S: KeyValueStore> RecipeRepository<S> {
    pub fn new(store: S, fallback: Recipe) -> Self {
        Self { store, fallback }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn save(&mut self, key: &str, recipe: &Recipe) -> Result<(), StoreError> {
        let content = toml::to_string(recipe)?;
        self.store.set(key, &content)?;
        info!("Saved recipe under key '{}'.", key);
        Ok(())
    }

    /// Restores exactly what was saved, with no default reconstruction.
    pub fn load_exact(&self, key: &str) -> Result<Option<Recipe>, StoreError> {
        let Some(content) = self.store.get(key)? else {
            return Ok(None);
        };
        toml::from_str(&content)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            })
    }

    pub fn load(&self, key: &str) -> Result<Recipe, StoreError> {
        let Some(mut recipe) = self.load_exact(key)? else {
            info!("No recipe stored under '{}'; using the default recipe.", key);
            return Ok(self.fallback.clone());
        };
        if recipe.fermentables.is_empty() {
            debug!("Stored recipe '{}' has no fermentables; adding defaults.", key);
            recipe.fermentables = self.fallback.fermentables.clone();
        }
        if recipe.hop_additions.is_empty() {
            debug!("Stored recipe '{}' has no hops; adding defaults.", key);
            recipe.hop_additions = self.fallback.hop_additions.clone();
        }
        Ok(recipe)
    }

    pub fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.store.remove(key)? {
            Ok(())
        } else {
            Err(StoreError::NotFound(key.to_string()))
        }
    }

    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        self.store.keys()
    }
}
