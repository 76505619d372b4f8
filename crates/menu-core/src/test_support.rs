//! Fixtures shared by unit tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::domain::MenuRecord;
use crate::error::MenuError;
use crate::repositories::SessionStorage;
use crate::services::normalizer::materialize_path;

/// Canonical record as the flattener emits it for flat input.
pub fn record(id: &str, parent: &str, priority: i64, menu_number: i64) -> MenuRecord {
    MenuRecord {
        id: id.to_string(),
        parent_id: (!parent.is_empty()).then(|| parent.to_string()),
        name: id.to_uppercase(),
        priority,
        menu_number,
        is_action: false,
        path: materialize_path("", id),
    }
}

#[derive(Default)]
pub struct InMemoryStorage {
    values: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
}

impl InMemoryStorage {
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    pub fn put(&self, key: &str, value: &str) {
        self.values.lock().unwrap().insert(key.to_string(), value.to_string());
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl SessionStorage for InMemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, MenuError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(MenuError::Storage("read failure".to_string()));
        }
        Ok(self.raw(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), MenuError> {
        self.values.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), MenuError> {
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}
