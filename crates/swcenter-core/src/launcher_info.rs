//! Data sent to the launcher when an application gets pinned.

use serde::{Deserialize, Serialize};

/// Everything the launcher needs to animate and pin a new application.
///
/// The icon position is in root window coordinates; `icon_size` is the
/// size of the icon as drawn in the view the install was started from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LauncherInfo {
    /// Application name.
    pub name: String,

    /// Themed icon name.
    pub icon_name: String,

    /// Icon file on disk, empty when only the themed name is known.
    #[serde(default)]
    pub icon_file_path: String,

    pub icon_x: i32,
    pub icon_y: i32,
    pub icon_size: i32,

    /// Desktop file in the app-install catalog.
    #[serde(default)]
    pub app_install_desktop_file_path: String,

    /// Location the desktop file has once the package is installed.
    pub installed_desktop_file_path: String,

    /// Backend transaction id, used by the launcher to track progress.
    pub trans_id: String,
}
