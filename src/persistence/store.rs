use super::files::{atomic_write, read_file};
#[cfg(test)]
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// String key-value storage backing the persistence adapter
pub trait KeyValueStore {
    /// `Ok(None)` when nothing was ever written under `key`
    fn get(&self, key: &str) -> io::Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// Stores each key as its own file inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// "@toDos" -> "<dir>/toDos.json"
    pub fn path_for(&self, key: &str) -> PathBuf {
        let stem: String = key
            .trim_start_matches('@')
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", stem))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        read_file(self.path_for(key))
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        atomic_write(self.path_for(key), value)
    }
}

/// In-process store for tests
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    fail_writes: bool,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set` fail with an I/O error
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::Other, "storage unavailable"));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_path_for_key() {
        let store = FileStore::new("/data");
        assert_eq!(store.path_for("@toDos"), PathBuf::from("/data/toDos.json"));
        assert_eq!(store.path_for("@headerMenu"), PathBuf::from("/data/headerMenu.json"));
        assert_eq!(store.path_for("a/b"), PathBuf::from("/data/a_b.json"));
    }

    #[test]
    fn test_file_store_get_set() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(temp_dir.path());

        assert_eq!(store.get("@toDos").unwrap(), None);
        store.set("@toDos", "{}").unwrap();
        assert_eq!(store.get("@toDos").unwrap().as_deref(), Some("{}"));
        assert!(temp_dir.path().join("toDos.json").exists());
    }

    #[test]
    fn test_file_store_missing_dir_fails_write() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(temp_dir.path().join("gone"));
        assert!(store.set("@toDos", "{}").is_err());
    }

    #[test]
    fn test_memory_store_fail_writes() {
        let mut store = MemoryStore::new();
        store.set("k", "v").unwrap();
        store.set_fail_writes(true);
        assert!(store.set("k", "w").is_err());
        assert_eq!(store.raw("k"), Some("v"));
    }
}
