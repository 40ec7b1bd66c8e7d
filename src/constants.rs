//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Endpoint returning the full breed list
pub const BREEDS_LIST_URL: &str = "https://dog.ceo/api/breeds/list/all";

/// Number of columns in the breed grid
pub const GRID_COLUMNS: usize = 3;

/// Diagnostic log file (the terminal itself belongs to the UI)
pub const LOG_FILE: &str = "dogdex.log";

/// Application name
#[allow(dead_code)]
pub const APP_NAME: &str = "Dogdex TUI";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
