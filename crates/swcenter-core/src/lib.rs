//! Core types for the Software Center session.
//!
//! This crate contains the toolkit-independent pieces shared by every
//! Software Center crate:
//! - Application and transaction types
//! - Launcher info passed to the Unity launcher
//! - Desktop file location resolution and desktop entry reading
//! - Configuration types
//! - Error types

mod app;
mod config;
pub mod desktop;
mod desktop_entry;
mod error;
mod launcher_info;
mod transaction;

pub use app::{AppDetails, Application};
pub use config::{
    config_dir, config_path, LauncherConfig, NavigationConfig, StoreConfig,
    DEFAULT_HISTORY_SIZE,
};
pub use desktop::{
    convert_desktop_file_to_installed_location, DesktopPaths, APP_INSTALL_PATH_DELIMITER,
    PURCHASE_AGENT_SENTINEL,
};
pub use desktop_entry::DesktopEntry;
pub use error::{ConfigError, DesktopEntryError, SessionError};
pub use launcher_info::LauncherInfo;
pub use transaction::{TransactionKind, TransactionResult};
