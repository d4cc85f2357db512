//! Desktop file location resolution.
//!
//! The app-install catalog ships a desktop file for every installable
//! application, named `<pkgname>:<file>` under `app-install/desktop/`. Once
//! the package is installed the same file lives under `applications/`.
//! Subdirectories of `applications/` are flattened into the catalog file
//! name with a double underscore, e.g. `kde4__soundkonverter.desktop` is
//! installed as `kde4/soundkonverter.desktop`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Marker standing in for `/` in catalog desktop file names.
pub const APP_INSTALL_PATH_DELIMITER: &str = "__";

/// Desktop file value used by for-purchase items, which have no catalog entry.
pub const PURCHASE_AGENT_SENTINEL: &str = "software-center-agent";

/// Path segment identifying a catalog desktop file.
const CATALOG_SEGMENT: &str = "app-install/desktop/";

/// Locations of installed and catalog desktop files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopPaths {
    /// Directory holding installed desktop files.
    pub applications_dir: PathBuf,

    /// Directory holding the app-install catalog.
    pub app_install_dir: PathBuf,
}

impl Default for DesktopPaths {
    fn default() -> Self {
        Self {
            applications_dir: PathBuf::from("/usr/share/applications"),
            app_install_dir: PathBuf::from("/usr/share/app-install/desktop"),
        }
    }
}

impl DesktopPaths {
    /// Map a catalog desktop file to the location it has once installed.
    ///
    /// Candidates are tried in order: the plain rewrite into
    /// `applications/`, the rewrite with encoded subdirectories decoded,
    /// and `<applications_dir>/<pkgname>.desktop`. The first one present
    /// on disk wins. If none is present the expected location is returned
    /// anyway, so callers can predict where a package about to be
    /// installed will put its desktop file.
    pub fn installed_location(&self, catalog_path: Option<&str>, pkgname: &str) -> PathBuf {
        let fallback = self.package_desktop_file(pkgname);

        let catalog_path = match catalog_path {
            Some(path) if !path.is_empty() && path != PURCHASE_AGENT_SENTINEL => path,
            _ => {
                tracing::debug!(
                    "No catalog desktop file for '{}', using {}",
                    pkgname,
                    fallback.display()
                );
                return fallback;
            }
        };

        let Some(plain) = rewrite_catalog_path(catalog_path) else {
            tracing::debug!(
                "'{}' is not an app-install desktop file, using {}",
                catalog_path,
                fallback.display()
            );
            return fallback;
        };
        let decoded = decode_subdirectory(&plain);

        let found = std::iter::once(&plain)
            .chain(decoded.as_ref())
            .chain(std::iter::once(&fallback))
            .find(|candidate| candidate.exists());
        if let Some(found) = found {
            return found.clone();
        }

        tracing::debug!(
            "No installed desktop file for '{}' yet, predicting location",
            pkgname
        );
        decoded.unwrap_or(plain)
    }

    /// `<applications_dir>/<pkgname>.desktop`
    pub fn package_desktop_file(&self, pkgname: &str) -> PathBuf {
        if pkgname.is_empty() {
            tracing::warn!("Resolving desktop file for an empty package name");
        }
        self.applications_dir.join(format!("{}.desktop", pkgname))
    }

    /// Catalog desktop file for a package, as named by app-install-data.
    pub fn catalog_desktop_file(&self, pkgname: &str, file_name: &str) -> PathBuf {
        self.app_install_dir.join(format!("{}:{}", pkgname, file_name))
    }
}

/// Resolve the installed location of a catalog desktop file using the
/// system default directories.
///
/// `catalog_path` is `None` for local package installs and the purchase
/// agent sentinel for for-purchase items; both resolve to
/// `/usr/share/applications/<pkgname>.desktop`.
pub fn convert_desktop_file_to_installed_location(
    catalog_path: Option<&str>,
    pkgname: &str,
) -> PathBuf {
    DesktopPaths::default().installed_location(catalog_path, pkgname)
}

/// Rewrite `<root>/app-install/desktop/[<pkg>:]<file>` to
/// `<root>/applications/<file>`.
fn rewrite_catalog_path(catalog_path: &str) -> Option<PathBuf> {
    let idx = catalog_path.find(CATALOG_SEGMENT)?;
    let root = &catalog_path[..idx];
    let entry = &catalog_path[idx + CATALOG_SEGMENT.len()..];
    let file = entry.split_once(':').map_or(entry, |(_, file)| file);
    if file.is_empty() {
        return None;
    }
    Some(PathBuf::from(format!("{}applications/{}", root, file)))
}

/// Turn `applications/kde4__foo.desktop` into `applications/kde4/foo.desktop`.
///
/// Returns `None` when the file name carries no encoded subdirectory.
fn decode_subdirectory(path: &Path) -> Option<PathBuf> {
    let file_name = path.file_name()?.to_str()?;
    if !file_name.contains(APP_INSTALL_PATH_DELIMITER) {
        return None;
    }
    let relative: PathBuf = file_name
        .split(APP_INSTALL_PATH_DELIMITER)
        .filter(|part| !part.is_empty())
        .collect();
    Some(path.with_file_name(relative))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_normal() {
        let installed = convert_desktop_file_to_installed_location(
            Some("./data/app-install/desktop/deja-dup:deja-dup.desktop"),
            "deja-dup",
        );
        assert_eq!(installed, PathBuf::from("./data/applications/deja-dup.desktop"));
    }

    #[test]
    fn test_encoded_subdir() {
        let installed = convert_desktop_file_to_installed_location(
            Some("./data/app-install/desktop/soundkonverter:kde4__soundkonverter.desktop"),
            "soundkonverter",
        );
        assert_eq!(
            installed,
            PathBuf::from("./data/applications/kde4/soundkonverter.desktop")
        );
    }

    #[test]
    fn test_purchase_via_software_center_agent() {
        let installed =
            convert_desktop_file_to_installed_location(Some(PURCHASE_AGENT_SENTINEL), "update-manager");
        assert_eq!(
            installed,
            PathBuf::from("/usr/share/applications/update-manager.desktop")
        );
    }

    #[test]
    fn test_no_value() {
        let installed = convert_desktop_file_to_installed_location(None, "update-manager");
        assert_eq!(
            installed,
            PathBuf::from("/usr/share/applications/update-manager.desktop")
        );
    }

    #[test]
    fn test_catalog_file_without_package_prefix() {
        let installed = convert_desktop_file_to_installed_location(
            Some("/usr/share/app-install/desktop/bzr.desktop"),
            "bzr",
        );
        assert_eq!(installed, PathBuf::from("/usr/share/applications/bzr.desktop"));
    }

    #[test]
    fn test_unrecognized_path_uses_package_name() {
        let paths = DesktopPaths {
            applications_dir: PathBuf::from("/opt/apps"),
            ..DesktopPaths::default()
        };
        let installed = paths.installed_location(Some("/tmp/random.desktop"), "foo");
        assert_eq!(installed, PathBuf::from("/opt/apps/foo.desktop"));
    }

    #[test]
    fn test_existing_plain_file_wins_over_decoded() {
        let dir = tempfile::tempdir().unwrap();
        let apps = dir.path().join("applications");
        fs::create_dir_all(&apps).unwrap();
        fs::write(apps.join("kde4__foo.desktop"), "[Desktop Entry]\n").unwrap();

        let catalog = format!("{}/app-install/desktop/foo:kde4__foo.desktop", dir.path().display());
        let installed = DesktopPaths::default().installed_location(Some(&catalog), "foo");
        assert_eq!(installed, apps.join("kde4__foo.desktop"));
    }

    #[test]
    fn test_existing_package_file_wins_over_prediction() {
        let dir = tempfile::tempdir().unwrap();
        let apps = dir.path().join("apps");
        fs::create_dir_all(&apps).unwrap();
        fs::write(apps.join("wine.desktop"), "[Desktop Entry]\n").unwrap();

        let paths = DesktopPaths {
            applications_dir: apps.clone(),
            app_install_dir: dir.path().join("app-install/desktop"),
        };
        let catalog = paths.catalog_desktop_file("wine", "wine1.4.desktop");
        let installed = paths.installed_location(catalog.to_str(), "wine");
        assert_eq!(installed, apps.join("wine.desktop"));
    }

    #[test]
    fn test_decode_subdirectory() {
        assert_eq!(
            decode_subdirectory(Path::new("/a/applications/kde4__x.desktop")),
            Some(PathBuf::from("/a/applications/kde4/x.desktop"))
        );
        assert_eq!(decode_subdirectory(Path::new("/a/applications/x.desktop")), None);
    }
}
