//! Error types for the Software Center session.

use std::path::PathBuf;
use thiserror::Error;

/// Session errors - raised by the view manager.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// A view manager is already alive for this session.
    #[error("View manager already exists for this session")]
    ViewManagerExists,

    /// No pane registered under the given view id.
    #[error("Unknown view: {0}")]
    UnknownView(String),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Errors reading a `.desktop` file.
#[derive(Debug, Error)]
pub enum DesktopEntryError {
    #[error("Failed to read desktop file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No [Desktop Entry] group in {}", .path.display())]
    MissingGroup { path: PathBuf },
}
