//! Application-wide constants

/// Storage key holding the last successfully resolved menu tree.
pub const MENU_STORAGE_KEY: &str = "menu-storage";

/// Parent id the backend uses for top-level menus.
pub const ROOT_PARENT_SENTINEL: &str = "home";

pub const DEFAULT_SUBSYSTEM: &str = "mc-iam-manager";
pub const DEFAULT_MENU_OPERATION: &str = "Getallavailablemenus";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_STORAGE_DIR: &str = ".menu-session";
