//! Unity launcher integration.
//!
//! The launcher service itself lives on the session bus; the store only
//! needs to hand it a [`LauncherInfo`] once an install completes.

use swcenter_core::LauncherInfo;

/// Client of the desktop launcher (dock) service.
#[cfg_attr(test, mockall::automock)]
pub trait UnityLauncher: Send + Sync {
    /// Whether a launcher is present to receive applications.
    fn is_running(&self) -> bool {
        is_unity_running()
    }

    /// Pin `pkgname`'s application to the launcher.
    fn send_application_to_launcher(&self, pkgname: &str, launcher_info: &LauncherInfo);
}

/// Launcher that logs what it would pin as JSON.
///
/// Used when no launcher service is reachable, e.g. from the command line.
#[derive(Debug, Default)]
pub struct LoggingLauncher;

impl LoggingLauncher {
    pub fn new() -> Self {
        Self
    }

    /// JSON line describing a launcher request.
    pub fn describe(
        pkgname: &str,
        launcher_info: &LauncherInfo,
    ) -> Result<String, serde_json::Error> {
        serde_json::to_string(&serde_json::json!({
            "pkgname": pkgname,
            "launcher_info": launcher_info,
        }))
    }
}

impl UnityLauncher for LoggingLauncher {
    fn is_running(&self) -> bool {
        true
    }

    fn send_application_to_launcher(&self, pkgname: &str, launcher_info: &LauncherInfo) {
        match Self::describe(pkgname, launcher_info) {
            Ok(line) => tracing::info!("send_application_to_launcher {}", line),
            Err(e) => tracing::warn!("Cannot describe launcher item for '{}': {}", pkgname, e),
        }
    }
}

/// Whether the current desktop session is Unity.
pub fn is_unity_running() -> bool {
    std::env::var("XDG_CURRENT_DESKTOP")
        .map(|desktop| desktop_is_unity(&desktop))
        .unwrap_or(false)
}

/// `XDG_CURRENT_DESKTOP` is a colon separated list, e.g. `Unity:Unity7`.
fn desktop_is_unity(current_desktop: &str) -> bool {
    current_desktop
        .split(':')
        .any(|name| name.eq_ignore_ascii_case("unity"))
}
