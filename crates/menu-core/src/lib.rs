//! # Menu Core
//!
//! Domain types, tree construction, caching and resolution for the
//! navigation menu engine.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export domain entities
pub use domain::*;
pub use error::MenuError;
pub use repositories::{MenuRepository, SessionStorage};
pub use services::{
    build_tree, count_nodes, find_menu, flatten, flatten_tree, menu_ancestors, normalize,
    MenuCacheStore, MenuResolver, Resolution, ResolutionSource,
};
