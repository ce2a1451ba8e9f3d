pub mod codec;
pub mod files;
pub mod store;

pub use files::{ensure_dir, get_data_dir, init_local_data_dir};
pub use store::{FileStore, KeyValueStore};
#[cfg(test)]
pub use store::MemoryStore;

use crate::domain::{Context, ItemCollection};
use codec::{parse_context, parse_items, serialize_context, serialize_items};
use thiserror::Error;
use tracing::{debug, info};

/// Key holding the serialized item collection
pub const ITEMS_KEY: &str = "@toDos";
/// Key holding the serialized active context
pub const CONTEXT_KEY: &str = "@headerMenu";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to access '{key}': {source}")]
    Io {
        key: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("stored value for '{key}' is malformed: {source}")]
    Corrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything that survives a restart
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub items: ItemCollection,
    pub context: Context,
}

/// Which of the two keys were present at load time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoredKeys {
    Both,
    /// Exactly one key; its value was left alone
    Partial,
    Neither,
}

/// Write-through adapter over a key-value store.
///
/// The two keys are written independently; there is no grouping between them.
pub struct Persistence<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Load both values. If either one is missing, nothing is loaded.
    pub fn load(&self) -> Result<(Snapshot, StoredKeys), PersistenceError> {
        let items_raw = self.get(ITEMS_KEY)?;
        let context_raw = self.get(CONTEXT_KEY)?;

        let (items_raw, context_raw) = match (items_raw, context_raw) {
            (Some(items), Some(context)) => (items, context),
            (None, None) => {
                info!("no stored state, starting empty");
                return Ok((Snapshot::default(), StoredKeys::Neither));
            }
            (items, context) => {
                info!(
                    has_items = items.is_some(),
                    has_context = context.is_some(),
                    "stored state incomplete, starting empty"
                );
                return Ok((Snapshot::default(), StoredKeys::Partial));
            }
        };

        let items = parse_items(&items_raw).map_err(|source| PersistenceError::Corrupt {
            key: ITEMS_KEY,
            source,
        })?;
        let context = parse_context(&context_raw).map_err(|source| PersistenceError::Corrupt {
            key: CONTEXT_KEY,
            source,
        })?;

        info!(items = items.len(), context = context.name(), "loaded stored state");
        Ok((Snapshot { items, context }, StoredKeys::Both))
    }

    /// Overwrite the stored collection with `items`
    pub fn save_items(&mut self, items: &ItemCollection) -> Result<(), PersistenceError> {
        let json = serialize_items(items).map_err(|source| PersistenceError::Corrupt {
            key: ITEMS_KEY,
            source,
        })?;
        self.set(ITEMS_KEY, &json)?;
        debug!(items = items.len(), "saved items");
        Ok(())
    }

    pub fn save_context(&mut self, context: Context) -> Result<(), PersistenceError> {
        self.set(CONTEXT_KEY, &serialize_context(context))?;
        debug!(context = context.name(), "saved context");
        Ok(())
    }

    fn get(&self, key: &'static str) -> Result<Option<String>, PersistenceError> {
        self.store
            .get(key)
            .map_err(|source| PersistenceError::Io { key, source })
    }

    fn set(&mut self, key: &'static str, value: &str) -> Result<(), PersistenceError> {
        self.store
            .set(key, value)
            .map_err(|source| PersistenceError::Io { key, source })
    }
}
