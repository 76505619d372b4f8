use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

use menu_core::{MenuError, SessionStorage};

/// Process-lifetime session storage.
/// DashMap inserts replace whole values, so readers never see a partial write.
#[derive(Clone, Default)]
pub struct MemorySessionStorage {
    values: Arc<DashMap<String, String>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[async_trait]
impl SessionStorage for MemorySessionStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, MenuError> {
        Ok(self.values.get(key).map(|v| v.value().clone()))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), MenuError> {
        debug!("Storing {} bytes under '{}'", value.len(), key);
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), MenuError> {
        self.values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_basic_operations() {
        let storage = MemorySessionStorage::new();

        assert_eq!(storage.get("menu-storage").await.unwrap(), None);

        storage.set("menu-storage", "[]".to_string()).await.unwrap();
        assert_eq!(storage.get("menu-storage").await.unwrap().as_deref(), Some("[]"));
        assert_eq!(storage.len(), 1);

        storage.set("menu-storage", "[1]".to_string()).await.unwrap();
        assert_eq!(storage.get("menu-storage").await.unwrap().as_deref(), Some("[1]"));

        storage.remove("menu-storage").await.unwrap();
        assert!(storage.is_empty());

        // Removing a missing key is not an error
        storage.remove("menu-storage").await.unwrap();
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let storage = MemorySessionStorage::new();
        let other = storage.clone();
        storage.set("k", "v".to_string()).await.unwrap();
        assert_eq!(other.get("k").await.unwrap().as_deref(), Some("v"));
    }
}
