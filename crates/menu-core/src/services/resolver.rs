// ============================================================================
// Menu Core - Resolution Service
// File: crates/menu-core/src/services/resolver.rs
// ============================================================================
//! Stale-while-revalidate menu resolution
//!
//! Three-tier fallback: cached tree (refreshed in the background), freshly
//! fetched tree, empty tree. `resolve` never fails; a broken menu must not take
//! the page shell down with it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::domain::MenuTreeNode;
use crate::error::MenuError;
use crate::repositories::MenuRepository;

use super::cache_store::MenuCacheStore;
use super::flattener::flatten;
use super::tree_builder::build_tree;
use super::tree_query::count_nodes;

/// Where a resolved tree came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// Served from the cache; a background refresh was scheduled.
    Cache,
    /// Cache miss, fetched in the foreground.
    Fetched,
    /// Cache miss and the fetch failed; empty navigation.
    Fallback,
}

/// Result of [`MenuResolver::resolve_tracked`]
#[derive(Debug)]
pub struct Resolution {
    pub tree: Vec<MenuTreeNode>,
    pub source: ResolutionSource,
    /// Background refresh, if one was scheduled. Dropping it detaches the task.
    pub refresh: Option<JoinHandle<()>>,
}

/// Public entry point of the menu engine
#[derive(Clone)]
pub struct MenuResolver {
    inner: Arc<ResolverInner>,
}

struct ResolverInner {
    repository: Arc<dyn MenuRepository>,
    cache: MenuCacheStore,
    fetch_timeout: Duration,
    /// Bumped by `invalidate`; a refresh scheduled under an older generation
    /// does not write.
    generation: AtomicU64,
    /// Held across generation check + cache write, and across bump + clear.
    write_lock: Mutex<()>,
}

impl MenuResolver {
    pub fn new(
        repository: Arc<dyn MenuRepository>,
        cache: MenuCacheStore,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(ResolverInner {
                repository,
                cache,
                fetch_timeout,
                generation: AtomicU64::new(0),
                write_lock: Mutex::new(()),
            }),
        }
    }

    pub fn cache(&self) -> &MenuCacheStore {
        &self.inner.cache
    }

    /// Resolve the navigation tree: last good tree, fresh tree, or empty.
    pub async fn resolve(&self) -> Vec<MenuTreeNode> {
        self.resolve_tracked().await.tree
    }

    /// Same state machine as [`resolve`](Self::resolve), also reporting the
    /// source and handing back the background refresh task.
    pub async fn resolve_tracked(&self) -> Resolution {
        if let Some(tree) = self.inner.cache.read().await {
            if !tree.is_empty() {
                debug!("Menu cache hit ({} root menus)", tree.len());
                let refresh = self.spawn_refresh();
                return Resolution {
                    tree,
                    source: ResolutionSource::Cache,
                    refresh,
                };
            }
        }

        info!("Menu cache miss, fetching menu resources");
        match self.refresh().await {
            Ok(tree) => Resolution {
                tree,
                source: ResolutionSource::Fetched,
                refresh: None,
            },
            Err(e) => {
                error!("Menu resolution failed, serving empty navigation: {}", e);
                Resolution {
                    tree: Vec::new(),
                    source: ResolutionSource::Fallback,
                    refresh: None,
                }
            }
        }
    }

    /// Foreground fetch, build and cache write. Fetch and build errors are
    /// returned; a failed cache write is logged and the fresh tree still
    /// returned.
    pub async fn refresh(&self) -> Result<Vec<MenuTreeNode>, MenuError> {
        let generation = self.inner.generation.load(Ordering::SeqCst);
        self.refresh_from(generation).await
    }

    /// Drop the cached tree, e.g. on logout or credential change.
    pub async fn invalidate(&self) {
        let _guard = self.inner.write_lock.lock().await;
        self.inner.generation.fetch_add(1, Ordering::SeqCst);
        if let Err(e) = self.inner.cache.clear().await {
            warn!("Failed to invalidate menu cache: {}", e);
        }
    }

    async fn refresh_from(&self, generation: u64) -> Result<Vec<MenuTreeNode>, MenuError> {
        let started = Instant::now();
        let tree = self.fetch_and_build().await?;

        {
            let _guard = self.inner.write_lock.lock().await;
            if self.inner.generation.load(Ordering::SeqCst) != generation {
                info!("Menu cache was invalidated during refresh, not storing fetched tree");
                return Ok(tree);
            }

            if let Err(e) = self.inner.cache.write(&tree).await {
                warn!("Failed to persist menu tree: {}", e);
            }
        }

        info!(
            "Menu tree refreshed: {} menus, {} roots in {:?}",
            count_nodes(&tree),
            tree.len(),
            started.elapsed()
        );
        Ok(tree)
    }

    async fn fetch_and_build(&self) -> Result<Vec<MenuTreeNode>, MenuError> {
        let timeout = self.inner.fetch_timeout;
        let raw = tokio::time::timeout(timeout, self.inner.repository.fetch_raw_menus())
            .await
            .map_err(|_| MenuError::Timeout(timeout))??;

        // Build synchronously once the whole payload is in hand.
        let flat = flatten(&raw)?;
        build_tree(flat)
    }

    fn spawn_refresh(&self) -> Option<JoinHandle<()>> {
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(_) => {
                warn!("No tokio runtime, skipping background menu refresh");
                return None;
            }
        };

        let generation = self.inner.generation.load(Ordering::SeqCst);
        let resolver = self.clone();
        Some(runtime.spawn(async move {
            if let Err(e) = resolver.refresh_from(generation).await {
                warn!("Background menu refresh failed, keeping cached tree: {}", e);
            }
        }))
    }
}
