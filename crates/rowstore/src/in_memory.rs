//! In-memory row store.
//!
//! Intended for tests/dev. Mirrors the remote backend's addressing: one
//! header row, data rows at positions 2..len+1.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use inflow_core::Row;

use crate::store::{RowStore, StoreError, index_for_position};

#[derive(Debug, Default)]
pub struct InMemoryRowStore {
    collections: RwLock<HashMap<String, Vec<Row>>>,
    failing: RwLock<HashSet<String>>,
}

impl InMemoryRowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents of a collection (test fixture setup).
    pub fn seed(&self, collection: &str, rows: Vec<Row>) {
        self.collections
            .write()
            .expect("lock poisoned")
            .insert(collection.to_string(), rows);
    }

    /// Make every call against `collection` fail with a transport error.
    pub fn fail_collection(&self, collection: &str) {
        self.failing
            .write()
            .expect("lock poisoned")
            .insert(collection.to_string());
    }

    /// Current rows of a collection (test assertions).
    pub fn rows(&self, collection: &str) -> Vec<Row> {
        self.collections
            .read()
            .expect("lock poisoned")
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    fn check_reachable(&self, collection: &str) -> Result<(), StoreError> {
        let failing = self
            .failing
            .read()
            .map_err(|_| StoreError::transport("lock poisoned"))?;
        if failing.contains(collection) {
            return Err(StoreError::transport(format!(
                "collection '{collection}' unreachable"
            )));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl RowStore for InMemoryRowStore {
    async fn list(&self, collection: &str) -> Result<Vec<Row>, StoreError> {
        self.check_reachable(collection)?;
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::transport("lock poisoned"))?;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn append(&self, collection: &str, row: Row) -> Result<(), StoreError> {
        self.check_reachable(collection)?;
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::transport("lock poisoned"))?;
        collections.entry(collection.to_string()).or_default().push(row);
        Ok(())
    }

    async fn update(&self, collection: &str, position: u32, row: Row) -> Result<(), StoreError> {
        self.check_reachable(collection)?;
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::transport("lock poisoned"))?;
        let rows = collections
            .get_mut(collection)
            .ok_or_else(|| StoreError::out_of_range(collection, position))?;
        let index = index_for_position(position)
            .filter(|i| *i < rows.len())
            .ok_or_else(|| StoreError::out_of_range(collection, position))?;
        rows[index] = row;
        Ok(())
    }

    async fn delete(&self, collection: &str, position: u32) -> Result<(), StoreError> {
        self.check_reachable(collection)?;
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::transport("lock poisoned"))?;
        let rows = collections
            .get_mut(collection)
            .ok_or_else(|| StoreError::out_of_range(collection, position))?;
        let index = index_for_position(position)
            .filter(|i| *i < rows.len())
            .ok_or_else(|| StoreError::out_of_range(collection, position))?;
        rows.remove(index);
        Ok(())
    }
}
