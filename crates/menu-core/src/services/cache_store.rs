//! Persisted menu tree cache
//!
//! One JSON array of [`MenuTreeNode`] under a single session-wide key. A
//! payload that no longer parses is cleared on read so it is not retried.

use std::sync::Arc;
use tracing::{debug, info, warn};

use menu_shared::constants::MENU_STORAGE_KEY;

use crate::domain::MenuTreeNode;
use crate::error::MenuError;
use crate::repositories::SessionStorage;

#[derive(Clone)]
pub struct MenuCacheStore {
    storage: Arc<dyn SessionStorage>,
    key: String,
}

impl MenuCacheStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self::with_key(storage, MENU_STORAGE_KEY)
    }

    pub fn with_key(storage: Arc<dyn SessionStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Last persisted tree, or `None` if never written, unreadable or corrupted.
    pub async fn read(&self) -> Option<Vec<MenuTreeNode>> {
        let payload = match self.storage.get(&self.key).await {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                debug!("Menu cache '{}' is empty", self.key);
                return None;
            }
            Err(e) => {
                warn!("Failed to read menu cache '{}': {}", self.key, e);
                return None;
            }
        };

        match serde_json::from_str::<Vec<MenuTreeNode>>(&payload) {
            Ok(tree) => Some(tree),
            Err(e) => {
                warn!("Menu cache '{}' is corrupted ({}), clearing it", self.key, e);
                if let Err(e) = self.clear().await {
                    warn!("Failed to clear corrupted menu cache '{}': {}", self.key, e);
                }
                None
            }
        }
    }

    pub async fn write(&self, tree: &[MenuTreeNode]) -> Result<(), MenuError> {
        let payload = serde_json::to_string(tree)?;
        self.storage.set(&self.key, payload).await?;
        debug!("Menu cache '{}' updated ({} root menus)", self.key, tree.len());
        Ok(())
    }

    pub async fn clear(&self) -> Result<(), MenuError> {
        self.storage.remove(&self.key).await?;
        info!("Menu cache '{}' cleared", self.key);
        Ok(())
    }
}
