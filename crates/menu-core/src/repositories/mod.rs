//! Repository traits (ports)

pub mod menu_repository;
pub mod session_storage;

pub use menu_repository::MenuRepository;
pub use session_storage::SessionStorage;

#[cfg(test)]
pub use menu_repository::MockMenuRepository;
