//! Menu engine errors

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error("Malformed menu data: {0}")]
    MalformedMenuData(String),

    #[error("Duplicate menu id: {0}")]
    DuplicateMenuId(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Menu fetch timed out after {0:?}")]
    Timeout(Duration),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for MenuError {
    fn from(e: serde_json::Error) -> Self {
        MenuError::Serialization(e.to_string())
    }
}
