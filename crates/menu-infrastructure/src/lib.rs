//! # Menu Infrastructure
//!
//! Session storage and backend adapters (ports implemented for menu-core).

pub mod storage;
pub mod http;

pub use storage::{FileSessionStorage, MemorySessionStorage};
pub use http::HttpMenuRepository;
