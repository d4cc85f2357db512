//! Command implementations for the `swcenter` tool.

use std::path::Path;

use clap::{Parser, Subcommand};
use serde_json::json;
use swcenter_core::{DesktopEntry, DesktopEntryError, LauncherInfo, StoreConfig};
use swcenter_session::{is_unity_running, LoggingLauncher, UnityLauncher};
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "swcenter", about = "Software Center desktop file helpers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print where a catalog desktop file is installed.
    Resolve {
        /// Catalog desktop file, `-` for a local package install.
        catalog: String,
        pkgname: String,
    },
    /// Print the launcher relevant keys of a desktop file as JSON.
    Inspect {
        path: String,
        pkgname: Option<String>,
    },
    /// Send a package to the logging launcher.
    Pin {
        pkgname: String,
        #[arg(long)]
        catalog: Option<String>,
        #[arg(long, default_value = "")]
        trans_id: String,
    },
}

/// Command line errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Desktop(#[from] DesktopEntryError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Run a command and return what to print.
pub fn run(config: &StoreConfig, command: Command) -> Result<String, CliError> {
    match command {
        Command::Resolve { catalog, pkgname } => Ok(resolve(config, &catalog, &pkgname)),
        Command::Inspect { path, pkgname } => inspect(config, &path, pkgname.as_deref()),
        Command::Pin {
            pkgname,
            catalog,
            trans_id,
        } => pin(config, &pkgname, catalog.as_deref(), trans_id),
    }
}

/// `-` stands for "no catalog desktop file", as for local package installs.
fn resolve(config: &StoreConfig, catalog: &str, pkgname: &str) -> String {
    let catalog_path = Some(catalog).filter(|p| *p != "-");
    let installed = config.paths.installed_location(catalog_path, pkgname);
    tracing::debug!("Resolved '{}' to {}", pkgname, installed.display());
    installed.display().to_string()
}

fn inspect(config: &StoreConfig, path: &str, pkgname: Option<&str>) -> Result<String, CliError> {
    let entry = DesktopEntry::load(Path::new(path))?;
    let installed = pkgname.map(|pkgname| {
        config
            .paths
            .installed_location(Some(path), pkgname)
            .display()
            .to_string()
    });

    let report = json!({
        "path": path,
        "name": entry.name,
        "exec": entry.exec,
        "icon": entry.icon,
        "no_display": entry.no_display,
        "hidden": entry.hidden,
        "launchable": entry.is_launchable(),
        "installed_location": installed,
        "add_to_launcher": config.launcher.add_to_launcher && is_unity_running(),
    });
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Builds the launcher info a finished install would send and hands it to
/// the logging launcher. Name and icon come from the catalog file when given.
fn pin(
    config: &StoreConfig,
    pkgname: &str,
    catalog: Option<&str>,
    trans_id: String,
) -> Result<String, CliError> {
    let entry = catalog
        .map(|path| DesktopEntry::load(Path::new(path)))
        .transpose()?
        .unwrap_or_default();

    let launcher_info = LauncherInfo {
        name: entry.name.unwrap_or_else(|| pkgname.to_string()),
        icon_name: entry.icon.unwrap_or_default(),
        app_install_desktop_file_path: catalog.unwrap_or_default().to_string(),
        installed_desktop_file_path: config
            .paths
            .installed_location(catalog, pkgname)
            .display()
            .to_string(),
        trans_id,
        ..LauncherInfo::default()
    };

    let launcher = LoggingLauncher::new();
    launcher.send_application_to_launcher(pkgname, &launcher_info);
    Ok(LoggingLauncher::describe(pkgname, &launcher_info)?)
}
