//! Minimal `.desktop` file reader.
//!
//! Only the keys the store needs to decide whether an application can be
//! pinned to the launcher are read. Localized keys and groups other than
//! `[Desktop Entry]` (e.g. desktop actions) are skipped.

use std::path::Path;

use crate::error::DesktopEntryError;

const MAIN_GROUP: &str = "[Desktop Entry]";

/// The `[Desktop Entry]` group of a desktop file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesktopEntry {
    pub name: Option<String>,
    pub exec: Option<String>,
    pub icon: Option<String>,
    pub no_display: bool,
    pub hidden: bool,
}

impl DesktopEntry {
    /// Read and parse a desktop file.
    pub fn load(path: &Path) -> Result<Self, DesktopEntryError> {
        let content = std::fs::read_to_string(path).map_err(|source| DesktopEntryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).ok_or_else(|| DesktopEntryError::MissingGroup {
            path: path.to_path_buf(),
        })
    }

    /// Parse desktop file text. Returns `None` without a `[Desktop Entry]` group.
    pub fn parse(content: &str) -> Option<Self> {
        let mut entry = Self::default();
        let mut seen_main = false;
        let mut in_main = false;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line.starts_with('[') {
                in_main = line == MAIN_GROUP;
                seen_main |= in_main;
                continue;
            }
            if !in_main {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());
            match key {
                "Name" => entry.name = Some(value.to_string()),
                "Exec" => entry.exec = Some(value.to_string()),
                "Icon" => entry.icon = Some(value.to_string()),
                "NoDisplay" => entry.no_display = parse_bool(value),
                "Hidden" => entry.hidden = parse_bool(value),
                // Localized variants such as Name[de]
                _ => {}
            }
        }

        seen_main.then_some(entry)
    }

    /// Whether the entry can be started from a launcher.
    pub fn is_launchable(&self) -> bool {
        let has_exec = self.exec.as_deref().is_some_and(|exec| !exec.is_empty());
        has_exec && !self.no_display && !self.hidden
    }
}

fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_launchable() {
        let entry = DesktopEntry::parse(
            "[Desktop Entry]\n\
             Name=Ubuntu Software Center\n\
             Name[de]=Ubuntu Software-Center\n\
             Exec=software-center %u\n\
             Icon=softwarecenter\n",
        )
        .unwrap();

        assert_eq!(entry.name.as_deref(), Some("Ubuntu Software Center"));
        assert_eq!(entry.icon.as_deref(), Some("softwarecenter"));
        assert!(entry.is_launchable());
    }

    #[test]
    fn test_no_display_is_not_launchable() {
        let entry = DesktopEntry::parse(
            "[Desktop Entry]\nName=Wine\nExec=wine start /unix %f\nNoDisplay=true\n",
        )
        .unwrap();
        assert!(entry.no_display);
        assert!(!entry.is_launchable());
    }

    #[test]
    fn test_missing_exec_is_not_launchable() {
        let entry = DesktopEntry::parse("[Desktop Entry]\nName=Bazaar\nIcon=bzr\n").unwrap();
        assert!(!entry.is_launchable());

        let entry = DesktopEntry::parse("[Desktop Entry]\nName=Bazaar\nExec=\n").unwrap();
        assert!(!entry.is_launchable());
    }

    #[test]
    fn test_other_groups_are_ignored() {
        let entry = DesktopEntry::parse(
            "# comment\n\
             [Desktop Entry]\n\
             Name=Editor\n\
             Exec=editor\n\
             \n\
             [Desktop Action NewWindow]\n\
             Exec=editor --new-window\n\
             NoDisplay=true\n",
        )
        .unwrap();
        assert_eq!(entry.exec.as_deref(), Some("editor"));
        assert!(entry.is_launchable());
    }

    #[test]
    fn test_missing_group() {
        assert!(DesktopEntry::parse("Name=Nothing\n").is_none());
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.desktop");
        assert!(matches!(
            DesktopEntry::load(&missing),
            Err(DesktopEntryError::Io { .. })
        ));

        let bogus = dir.path().join("bogus.desktop");
        std::fs::write(&bogus, "Name=Nothing\n").unwrap();
        assert!(matches!(
            DesktopEntry::load(&bogus),
            Err(DesktopEntryError::MissingGroup { .. })
        ));
    }
}
