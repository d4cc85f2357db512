//! Application identity and catalog details.

use serde::{Deserialize, Serialize};

/// An application as shown in the store: a display name plus the package
/// that provides it.
///
/// `appname` may be empty, in which case the package stands in for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Application {
    pub appname: String,
    pub pkgname: String,
}

impl Application {
    /// Create a new application reference.
    pub fn new(appname: impl Into<String>, pkgname: impl Into<String>) -> Self {
        Self {
            appname: appname.into(),
            pkgname: pkgname.into(),
        }
    }

    /// Name used for display and for the launcher entry.
    pub fn name(&self) -> &str {
        if self.appname.is_empty() {
            &self.pkgname
        } else {
            &self.appname
        }
    }
}

/// Details the app catalog knows about an application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppDetails {
    /// Human readable name.
    pub display_name: String,

    /// Themed icon name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,

    /// Resolved icon file, when the catalog has one on disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_file_path: Option<String>,

    /// Desktop file in the app-install catalog, or the purchase agent
    /// sentinel for for-purchase items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desktop_file: Option<String>,
}
