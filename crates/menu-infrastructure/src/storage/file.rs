//! File-backed session storage
//!
//! One file per key inside the session directory. Writes go to a temporary
//! sibling first and are renamed into place, so a reader observes either the
//! old file or the new one.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use menu_core::{MenuError, SessionStorage};

pub struct FileSessionStorage {
    dir: PathBuf,
    tmp_counter: AtomicU64,
}

impl FileSessionStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            tmp_counter: AtomicU64::new(0),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, MenuError> {
        if key.is_empty() || key.contains('/') || key.contains('\\') || key.contains("..") {
            return Err(MenuError::Storage(format!("invalid storage key '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }

    async fn write_atomic(&self, path: &Path, bytes: &[u8]) -> Result<(), MenuError> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(storage_err)?;

        let tmp = self.dir.join(format!(
            ".{}.tmp.{}.{}",
            path.file_name().and_then(|s| s.to_str()).unwrap_or("entry"),
            std::process::id(),
            self.tmp_counter.fetch_add(1, Ordering::Relaxed)
        ));

        let result = async {
            let mut f = tokio::fs::File::create(&tmp).await?;
            f.write_all(bytes).await?;
            f.sync_all().await?;
            drop(f);
            tokio::fs::rename(&tmp, path).await
        }
        .await;

        if let Err(e) = result {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(storage_err(e));
        }
        Ok(())
    }
}

fn storage_err(e: std::io::Error) -> MenuError {
    MenuError::Storage(e.to_string())
}

#[async_trait]
impl SessionStorage for FileSessionStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, MenuError> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(storage_err(e)),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), MenuError> {
        let path = self.path_for(key)?;
        self.write_atomic(&path, value.as_bytes()).await?;
        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), MenuError> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(storage_err(e)),
        }
    }
}
