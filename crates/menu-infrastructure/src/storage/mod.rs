//! Session storage adapters

pub mod memory;
pub mod file;

pub use memory::MemorySessionStorage;
pub use file::FileSessionStorage;
