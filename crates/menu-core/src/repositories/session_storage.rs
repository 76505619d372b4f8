//! Session-scoped key/value storage (port)

use async_trait::async_trait;

use crate::error::MenuError;

/// Persistent string storage that lives for the browsing session.
///
/// `set` must replace the value atomically: a concurrent `get` sees either the
/// old or the new value.
#[async_trait]
pub trait SessionStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, MenuError>;
    async fn set(&self, key: &str, value: String) -> Result<(), MenuError>;
    async fn remove(&self, key: &str) -> Result<(), MenuError>;
}
