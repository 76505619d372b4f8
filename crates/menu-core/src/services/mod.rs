//! Menu services: normalization, tree construction, caching and resolution

pub mod normalizer;
pub mod flattener;
pub mod tree_builder;
pub mod tree_query;
pub mod cache_store;
pub mod resolver;

pub use normalizer::normalize;
pub use flattener::flatten;
pub use tree_builder::build_tree;
pub use tree_query::{count_nodes, find_menu, flatten_tree, menu_ancestors};
pub use cache_store::MenuCacheStore;
pub use resolver::{MenuResolver, Resolution, ResolutionSource};
