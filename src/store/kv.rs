use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;

/// Key-value substrate underneath the record store.
///
/// Values are opaque serialized collections; the store never interprets
/// them.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn delete(&mut self, key: &str) -> Result<()>;
    fn keys(&self) -> Result<Vec<String>>;
}

impl<T: KvStore + ?Sized> KvStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        (**self).delete(key)
    }

    fn keys(&self) -> Result<Vec<String>> {
        (**self).keys()
    }
}

/// Non-durable store for tests.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
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
impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }
}

/// Durable store: one `<key>.json` file per key inside a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

const FILE_EXTENSION: &str = "json";

impl FileStore {
    /// Opens (and creates if needed) the data directory.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        info!(dir = %dir.display(), "File store opened");
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // keys are fixed identifiers; strip anything that could escape the directory
        let safe: String = key
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
            .collect();
        self.dir.join(format!("{safe}.{FILE_EXTENSION}"))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        debug!(key, bytes = value.len(), "Stored collection");
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(FILE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.push(stem.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }
}
