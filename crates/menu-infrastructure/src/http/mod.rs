//! Backend adapters

pub mod menu_client;

pub use menu_client::HttpMenuRepository;
