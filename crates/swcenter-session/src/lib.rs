//! Session layer of the Software Center main window.
//!
//! This crate provides:
//! - `ViewManager` - active pane/page tracking with enter/leave hooks
//! - Back/forward navigation history
//! - `AvailablePane` - reacts to install transactions and pins new
//!   applications to the Unity launcher
//! - Traits for the toolkit, catalog and launcher collaborators
//! - The signal loop feeding backend and app view signals to the pane

pub mod available_pane;
pub mod catalog;
pub mod display_state;
pub mod launcher;
pub mod nav_history;
pub mod notebook;
pub mod pane;
pub mod session;
pub mod signals;
pub mod view_manager;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use available_pane::{AvailablePane, AVAILABLE_VIEW_ID};
pub use catalog::{AppCatalog, IconGeometry, DETAILS_VIEW_ICON_SIZE, LIST_VIEW_ICON_SIZE};
pub use display_state::{DisplayState, Page};
pub use launcher::{is_unity_running, LoggingLauncher, UnityLauncher};
pub use nav_history::{NavEntry, NavHistory};
pub use notebook::{Notebook, PageStack};
pub use pane::{Pane, VideoPlayer};
pub use session::Session;
pub use signals::{run_signal_loop, signal_channel, SessionSignal, SignalSender};
pub use view_manager::{ActiveView, ViewManager};

// Re-export swcenter_core types for convenience
pub use swcenter_core::{
    convert_desktop_file_to_installed_location, Application, LauncherInfo, SessionError,
    TransactionKind, TransactionResult,
};
