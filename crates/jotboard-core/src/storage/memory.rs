//! In-memory document store.

use super::{BoxFuture, DocumentStore, StorageError, StorageResult};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory store for testing and ephemeral use.
#[derive(Default)]
pub struct MemoryStore {
    documents: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    fn save(&self, id: &str, content: &str) -> BoxFuture<'_, StorageResult<()>> {
        let id = id.to_string();
        let content = content.to_string();
        Box::pin(async move {
            let mut docs = self
                .documents
                .write()
                .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
            docs.insert(id, content);
            Ok(())
        })
    }

    fn load(&self, id: &str) -> BoxFuture<'_, StorageResult<String>> {
        let id = id.to_string();
        Box::pin(async move {
            let docs = self
                .documents
                .read()
                .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
            docs.get(&id)
                .cloned()
                .ok_or_else(|| StorageError::NotFound(id))
        })
    }

    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>> {
        let id = id.to_string();
        Box::pin(async move {
            let mut docs = self
                .documents
                .write()
                .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
            docs.remove(&id);
            Ok(())
        })
    }

    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>> {
        Box::pin(async move {
            let docs = self
                .documents
                .read()
                .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
            Ok(docs.keys().cloned().collect())
        })
    }

    fn exists(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>> {
        let id = id.to_string();
        Box::pin(async move {
            let docs = self
                .documents
                .read()
                .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
            Ok(docs.contains_key(&id))
        })
    }
}
