//! The "available software" pane.
//!
//! Besides showing the lobby, list and details pages, this pane adds newly
//! installed applications to the launcher:
//!
//! 1. `transaction-started` of an install captures a [`LauncherInfo`] while
//!    the icon the user clicked is still on screen.
//! 2. `transaction-finished` sends it to the launcher if the install
//!    succeeded.
//!
//! Applications without a usable desktop file (no `Exec=` line, or
//! `NoDisplay=true`) are never added.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use swcenter_core::{
    AppDetails, Application, DesktopEntry, DesktopPaths, LauncherInfo, StoreConfig,
    TransactionKind, TransactionResult,
};

use crate::catalog::{icon_size_for_page, AppCatalog, IconGeometry};
use crate::display_state::{DisplayState, Page};
use crate::launcher::UnityLauncher;
use crate::notebook::Notebook;
use crate::pane::{Pane, VideoPlayer};
use crate::signals::SessionSignal;
use crate::view_manager::ViewManager;

/// View id of the available pane in the main notebook.
pub const AVAILABLE_VIEW_ID: &str = "available";

/// Pane listing software that can be installed.
pub struct AvailablePane {
    view_manager: Weak<ViewManager>,
    notebook: Arc<dyn Notebook>,
    catalog: Arc<dyn AppCatalog>,
    launcher: Arc<dyn UnityLauncher>,
    geometry: Arc<dyn IconGeometry>,
    video_player: Option<Arc<dyn VideoPlayer>>,
    paths: DesktopPaths,
    add_to_launcher_enabled: AtomicBool,
    current: Mutex<Option<(Page, DisplayState)>>,
    /// Launcher items of installs in progress, by package name.
    pending_launcher_items: Mutex<HashMap<String, LauncherInfo>>,
}

impl AvailablePane {
    /// Create the pane and add its pages to `notebook`.
    pub fn new(
        view_manager: &Arc<ViewManager>,
        notebook: Arc<dyn Notebook>,
        catalog: Arc<dyn AppCatalog>,
        launcher: Arc<dyn UnityLauncher>,
        geometry: Arc<dyn IconGeometry>,
    ) -> Self {
        for page in Page::ALL {
            notebook.append_page(page.label());
        }
        Self {
            view_manager: Arc::downgrade(view_manager),
            notebook,
            catalog,
            launcher,
            geometry,
            video_player: None,
            paths: DesktopPaths::default(),
            add_to_launcher_enabled: AtomicBool::new(true),
            current: Mutex::new(None),
            pending_launcher_items: Mutex::new(HashMap::new()),
        }
    }

    /// Apply launcher and path settings.
    pub fn with_config(mut self, config: &StoreConfig) -> Self {
        self.paths = config.paths.clone();
        self.add_to_launcher_enabled = AtomicBool::new(config.launcher.add_to_launcher);
        self
    }

    /// Video player embedded in the details page.
    pub fn with_video_player(mut self, player: Arc<dyn VideoPlayer>) -> Self {
        self.video_player = Some(player);
        self
    }

    /// Register the pane as a view of the main window.
    pub fn register(self: &Arc<Self>) -> Option<usize> {
        let view_manager = self.view_manager.upgrade()?;
        Some(view_manager.register(AVAILABLE_VIEW_ID, self.clone()))
    }

    pub fn add_to_launcher_enabled(&self) -> bool {
        self.add_to_launcher_enabled.load(Ordering::Relaxed)
    }

    pub fn set_add_to_launcher_enabled(&self, enabled: bool) {
        self.add_to_launcher_enabled.store(enabled, Ordering::Relaxed);
    }

    /// Page the pane currently shows.
    pub fn current_page(&self) -> Option<Page> {
        self.current.lock().as_ref().map(|(page, _)| *page)
    }

    /// Whether an install of `pkgname` is waiting to be sent to the launcher.
    pub fn has_pending_launcher_item(&self, pkgname: &str) -> bool {
        self.pending_launcher_items.lock().contains_key(pkgname)
    }

    // =========================================================================
    // Signal Handlers
    // =========================================================================

    /// Dispatch a signal from the backend or the app view.
    pub fn handle_signal(self: &Arc<Self>, signal: SessionSignal) {
        match signal {
            SessionSignal::TransactionStarted {
                pkgname,
                appname,
                trans_id,
                kind,
            } => self.on_transaction_started(&pkgname, &appname, &trans_id, kind),
            SessionSignal::TransactionFinished(result) => self.on_transaction_finished(&result),
            SessionSignal::TransactionStopped(result) => self.on_transaction_stopped(&result),
            SessionSignal::ApplicationActivated(app) => self.on_application_activated(app),
            SessionSignal::SearchTermsChanged(terms) => self.on_search_terms_changed(&terms),
        }
    }

    /// `application-activated`: show the details page for `app`.
    pub fn on_application_activated(self: &Arc<Self>, app: Application) {
        self.show(Page::Details, DisplayState::for_application(app));
    }

    /// `search-terms-changed`: show the results list.
    pub fn on_search_terms_changed(self: &Arc<Self>, terms: &str) {
        self.show(Page::List, DisplayState::for_search(terms));
    }

    /// `transaction-started`: remember launcher info for installs.
    pub fn on_transaction_started(
        &self,
        pkgname: &str,
        appname: &str,
        trans_id: &str,
        kind: TransactionKind,
    ) {
        if kind != TransactionKind::Install {
            return;
        }
        if !self.add_to_launcher_enabled() {
            tracing::debug!("Add to launcher disabled, ignoring install of '{}'", pkgname);
            return;
        }
        if !self.launcher.is_running() {
            tracing::debug!("No launcher running, ignoring install of '{}'", pkgname);
            return;
        }

        let app = Application::new(appname, pkgname);
        let Some(details) = self.catalog.get_details(&app) else {
            tracing::debug!("'{}' is not in the catalog", pkgname);
            return;
        };
        let Some(desktop_file) = details.desktop_file.as_deref().filter(|f| !f.is_empty()) else {
            tracing::debug!("'{}' has no desktop file", pkgname);
            return;
        };
        if !desktop_file_is_launchable(desktop_file) {
            tracing::info!("'{}' cannot be launched, not adding it to the launcher", pkgname);
            return;
        }

        let launcher_info = self.launcher_info(&app, &details, desktop_file, trans_id);
        tracing::debug!(
            "Install of '{}' started ({}), launcher icon at {}x{} size {}",
            pkgname,
            trans_id,
            launcher_info.icon_x,
            launcher_info.icon_y,
            launcher_info.icon_size
        );
        self.pending_launcher_items
            .lock()
            .insert(pkgname.to_string(), launcher_info);
    }

    /// `transaction-finished`: send the pending launcher item on success.
    pub fn on_transaction_finished(&self, result: &TransactionResult) {
        let Some(mut launcher_info) = self.pending_launcher_items.lock().remove(&result.pkgname)
        else {
            return;
        };
        if !result.success {
            tracing::debug!("Install of '{}' failed, not adding to launcher", result.pkgname);
            return;
        }

        // Resolve again now that the package put its desktop file in place
        let catalog_path = Some(launcher_info.app_install_desktop_file_path.as_str())
            .filter(|p| !p.is_empty());
        launcher_info.installed_desktop_file_path = self
            .paths
            .installed_location(catalog_path, &result.pkgname)
            .to_string_lossy()
            .into_owned();

        if !desktop_file_is_launchable(&launcher_info.installed_desktop_file_path) {
            tracing::info!(
                "Installed desktop file of '{}' cannot be launched, not adding it to the launcher",
                result.pkgname
            );
            return;
        }

        tracing::info!("Adding '{}' to the launcher", result.pkgname);
        self.launcher
            .send_application_to_launcher(&result.pkgname, &launcher_info);
    }

    /// `transaction-stopped`: forget the pending launcher item.
    pub fn on_transaction_stopped(&self, result: &TransactionResult) {
        if self
            .pending_launcher_items
            .lock()
            .remove(&result.pkgname)
            .is_some()
        {
            tracing::debug!("Install of '{}' stopped", result.pkgname);
        }
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    fn show(self: &Arc<Self>, page: Page, state: DisplayState) {
        match self.view_manager.upgrade() {
            Some(view_manager) => view_manager.display_page(self.clone(), page, state),
            None => tracing::warn!("View manager is gone, cannot show {:?}", page),
        }
    }

    fn launcher_info(
        &self,
        app: &Application,
        details: &AppDetails,
        desktop_file: &str,
        trans_id: &str,
    ) -> LauncherInfo {
        let (icon_x, icon_y, icon_size) = self
            .current_page()
            .and_then(|page| {
                let (x, y) = self.geometry.icon_origin(page, app)?;
                Some((x, y, icon_size_for_page(page)))
            })
            .unwrap_or((0, 0, 0));

        let installed = self.paths.installed_location(Some(desktop_file), &app.pkgname);

        LauncherInfo {
            name: app.name().to_string(),
            icon_name: details.icon_name.clone().unwrap_or_default(),
            icon_file_path: details.icon_file_path.clone().unwrap_or_default(),
            icon_x,
            icon_y,
            icon_size,
            app_install_desktop_file_path: desktop_file.to_string(),
            installed_desktop_file_path: installed.to_string_lossy().into_owned(),
            trans_id: trans_id.to_string(),
        }
    }
}

impl Pane for AvailablePane {
    fn pane_name(&self) -> &str {
        AVAILABLE_VIEW_ID
    }

    fn display_page(&self, page: Page, state: &DisplayState) {
        self.notebook.set_current_page(page.index());
        *self.current.lock() = Some((page, state.clone()));
    }

    fn video_player(&self) -> Option<Arc<dyn VideoPlayer>> {
        self.video_player.clone()
    }
}

/// Desktop files that exist must have an `Exec=` line and must not be
/// hidden. Files that are missing or unreadable cannot be checked and
/// are let through.
fn desktop_file_is_launchable(desktop_file: &str) -> bool {
    let path = Path::new(desktop_file);
    if !path.exists() {
        return true;
    }
    match DesktopEntry::load(path) {
        Ok(entry) => entry.is_launchable(),
        Err(e) => {
            tracing::warn!("{}", e);
            true
        }
    }
}
