//! View manager for the main window.
//!
//! Tracks the active pane and page, switches the main notebook between
//! registered views and runs the enter/leave hooks of panes.
//!
//! ## Page switches
//!
//! ```text
//! display_page(pane, page, state)
//!        │
//!        ▼
//! active pane/page differs? ──yes──▶ leave hooks on the active pane
//!        │                            - list page: save scroll offset
//!        │                            - details page: stop video
//!        ▼
//! record in navigation history
//!        │
//!        ▼
//! pane.display_page(page, state), switch notebook, broadcast
//! ```
//!
//! No lock is held while a pane hook runs, so hooks may call back into
//! the view manager.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;

use swcenter_core::SessionError;

use crate::display_state::{DisplayState, Page};
use crate::nav_history::{NavEntry, NavHistory};
use crate::notebook::Notebook;
use crate::pane::{same_pane, Pane};
use crate::session::Session;

// =============================================================================
// Snapshots
// =============================================================================

/// Broadcast description of what the main window shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveView {
    /// Registered view id of the active pane, if it was registered.
    pub view_id: Option<String>,
    pub pane_name: String,
    pub page: Page,
}

// =============================================================================
// ViewManager
// =============================================================================

struct RegisteredView {
    view_id: String,
    pane: Arc<dyn Pane>,
    page_index: usize,
    /// Page the view showed when it was last active.
    last: Option<NavEntry>,
}

struct ManagerState {
    views: Vec<RegisteredView>,
    active: Option<NavEntry>,
    active_view_id: Option<String>,
    history: NavHistory,
}

impl ManagerState {
    fn registered_mut(&mut self, pane: &Arc<dyn Pane>) -> Option<&mut RegisteredView> {
        self.views.iter_mut().find(|v| same_pane(&v.pane, pane))
    }

    fn snapshot(&self) -> Option<ActiveView> {
        self.active.as_ref().map(|entry| ActiveView {
            view_id: self.active_view_id.clone(),
            pane_name: entry.pane.pane_name().to_string(),
            page: entry.page,
        })
    }
}

/// Owner of the main window's active (pane, page) pair.
///
/// Only one view manager can be alive per [`Session`].
pub struct ViewManager {
    notebook: Arc<dyn Notebook>,
    state: Mutex<ManagerState>,
    tx: watch::Sender<Option<ActiveView>>,
    rx: watch::Receiver<Option<ActiveView>>,
}

impl ViewManager {
    /// Create the session's view manager around the main notebook.
    ///
    /// Fails with [`SessionError::ViewManagerExists`] while another view
    /// manager of the same session is alive.
    pub fn new(session: &Session, notebook: Arc<dyn Notebook>) -> Result<Arc<Self>, SessionError> {
        let history_size = session.config().navigation.history_size;
        session.install_view_manager(|| {
            let (tx, rx) = watch::channel(None);
            Self {
                notebook,
                state: Mutex::new(ManagerState {
                    views: Vec::new(),
                    active: None,
                    active_view_id: None,
                    history: NavHistory::new(history_size),
                }),
                tx,
                rx,
            }
        })
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Register a pane as a view of the main notebook.
    ///
    /// Returns the notebook page index of the view.
    pub fn register(&self, view_id: &str, pane: Arc<dyn Pane>) -> usize {
        if let Some(existing) = self.get_notebook_page_from_view_id(view_id) {
            tracing::warn!("View '{}' already registered", view_id);
            return existing;
        }
        let page_index = self.notebook.append_page(view_id);
        self.state.lock().views.push(RegisteredView {
            view_id: view_id.to_string(),
            pane,
            page_index,
            last: None,
        });
        tracing::info!("Registered view '{}' at page {}", view_id, page_index);
        page_index
    }

    /// Show a registered view in the main notebook.
    ///
    /// The view comes back on the page it showed last, or its lobby the
    /// first time. Leave hooks of the previous view run as for
    /// [`display_page`](Self::display_page).
    pub fn set_active_view(&self, view_id: &str) -> Result<Arc<dyn Pane>, SessionError> {
        let entry = {
            let state = self.state.lock();
            let view = state
                .views
                .iter()
                .find(|v| v.view_id == view_id)
                .ok_or_else(|| SessionError::UnknownView(view_id.to_string()))?;
            view.last.clone().unwrap_or_else(|| {
                NavEntry::new(view.pane.clone(), Page::Lobby, DisplayState::default())
            })
        };
        tracing::debug!("Active view: {}", view_id);
        let pane = entry.pane.clone();
        self.show(entry, true);
        Ok(pane)
    }

    /// Id of the view shown in the main notebook.
    pub fn get_active_view(&self) -> Option<String> {
        self.state.lock().active_view_id.clone()
    }

    pub fn is_active_view(&self, view_id: &str) -> bool {
        self.state.lock().active_view_id.as_deref() == Some(view_id)
    }

    /// Notebook page index of a registered view.
    pub fn get_notebook_page_from_view_id(&self, view_id: &str) -> Option<usize> {
        let state = self.state.lock();
        state
            .views
            .iter()
            .find(|v| v.view_id == view_id)
            .map(|v| v.page_index)
    }

    /// Pane registered under `view_id`.
    pub fn get_view_widget(&self, view_id: &str) -> Option<Arc<dyn Pane>> {
        let state = self.state.lock();
        state
            .views
            .iter()
            .find(|v| v.view_id == view_id)
            .map(|v| v.pane.clone())
    }

    // =========================================================================
    // Page Display
    // =========================================================================

    /// Show `page` of `pane` with `view_state`.
    ///
    /// Runs the leave hooks of the previously active pane first when the
    /// pane or the page changes, then records the navigation.
    pub fn display_page(&self, pane: Arc<dyn Pane>, page: Page, view_state: DisplayState) {
        self.show(NavEntry::new(pane, page, view_state), true);
    }

    /// Go back to the previous page. Returns `false` at the start of history.
    pub fn nav_back(&self) -> bool {
        let entry = self.state.lock().history.back();
        match entry {
            Some(entry) => {
                self.show(entry, false);
                true
            }
            None => false,
        }
    }

    /// Go forward again after `nav_back`. Returns `false` at the end of history.
    pub fn nav_forward(&self) -> bool {
        let entry = self.state.lock().history.forward();
        match entry {
            Some(entry) => {
                self.show(entry, false);
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.state.lock().history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.state.lock().history.can_go_forward()
    }

    /// The active pane.
    pub fn active_pane(&self) -> Option<Arc<dyn Pane>> {
        let state = self.state.lock();
        state.active.as_ref().map(|entry| entry.pane.clone())
    }

    /// The active page.
    pub fn active_page(&self) -> Option<Page> {
        let state = self.state.lock();
        state.active.as_ref().map(|entry| entry.page)
    }

    /// State the active page was displayed with.
    pub fn active_state(&self) -> Option<DisplayState> {
        let state = self.state.lock();
        state.active.as_ref().map(|entry| entry.state.clone())
    }

    // =========================================================================
    // Subscription
    // =========================================================================

    /// Subscribe to active view changes.
    ///
    /// The receiver sees the current value immediately and every change
    /// after it.
    pub fn subscribe(&self) -> watch::Receiver<Option<ActiveView>> {
        self.rx.clone()
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    fn show(&self, entry: NavEntry, record: bool) {
        let previous = self.state.lock().active.clone();

        if let Some(previous) = previous {
            if !previous.is_at(&entry.pane, entry.page) {
                let saved_scroll = leave(&previous);
                if let Some(offset) = saved_scroll {
                    let mut state = self.state.lock();
                    if let Some(current) = state.history.current_mut() {
                        if current.is_at(&previous.pane, previous.page) {
                            current.state.list_scroll = Some(offset);
                        }
                    }
                }
            }
        }

        let (page_index, snapshot) = {
            let mut state = self.state.lock();
            let registered = state.registered_mut(&entry.pane).map(|v| {
                v.last = Some(entry.clone());
                (v.view_id.clone(), v.page_index)
            });
            let page_index = registered.as_ref().map(|(_, index)| *index);
            if let Some((view_id, _)) = registered {
                state.active_view_id = Some(view_id);
            }
            if record {
                state.history.append(entry.clone());
            }
            state.active = Some(entry.clone());
            (page_index, state.snapshot())
        };

        tracing::debug!(
            "Displaying page {:?} of pane '{}'",
            entry.page,
            entry.pane.pane_name()
        );
        entry.pane.display_page(entry.page, &entry.state);
        if let Some(index) = page_index {
            self.notebook.set_current_page(index);
        }
        let _ = self.tx.send(snapshot);
    }
}

/// Run the leave hooks for the page being left.
///
/// Returns the list scroll offset to remember when a list page is left.
fn leave(previous: &NavEntry) -> Option<f64> {
    match previous.page {
        Page::List => previous.pane.list_scroll_offset(),
        Page::Details => {
            if let Some(player) = previous.pane.video_player() {
                tracing::debug!(
                    "Stopping video of pane '{}'",
                    previous.pane.pane_name()
                );
                player.stop();
            }
            None
        }
        _ => None,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notebook::PageStack;
    use crate::pane::MockVideoPlayer;
    use crate::test_support::RecordingPane;
    use swcenter_core::Application;

    fn view_manager(session: &Session) -> Arc<ViewManager> {
        ViewManager::new(session, Arc::new(PageStack::new())).unwrap()
    }

    fn details_state(pkgname: &str) -> DisplayState {
        DisplayState::for_application(Application::new("", pkgname))
    }

    #[test]
    fn test_get_viewmanager() {
        let session = Session::default();
        assert!(session.view_manager().is_none());

        let vm = view_manager(&session);
        let first = session.view_manager().unwrap();
        let second = session.view_manager().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&vm, &first));

        // Creating it twice is an error
        let result = ViewManager::new(&session, Arc::new(PageStack::new()));
        assert!(matches!(result, Err(SessionError::ViewManagerExists)));
    }

    #[test]
    fn test_dropping_frees_the_slot() {
        let session = Session::default();
        let vm = view_manager(&session);
        drop(vm);

        assert!(session.view_manager().is_none());
        assert!(ViewManager::new(&session, Arc::new(PageStack::new())).is_ok());
    }

    #[test]
    fn test_sessions_are_independent() {
        let a = Session::default();
        let b = Session::default();
        let _vm_a = view_manager(&a);
        let _vm_b = view_manager(&b);
    }

    #[test]
    fn test_display_page_stops_video() {
        let session = Session::default();
        let vm = view_manager(&session);

        let mut player = MockVideoPlayer::new();
        player.expect_stop().times(1).return_const(());
        let pane = Arc::new(RecordingPane::new("MockPane").with_video(Arc::new(player)));
        vm.display_page(pane.clone(), Page::Details, details_state("foo"));

        let other_pane = RecordingPane::shared("MockPane");
        vm.display_page(other_pane.clone(), Page::Details, details_state("foo"));

        assert_eq!(pane.displayed().len(), 1);
        assert_eq!(other_pane.displayed().len(), 1);
        assert_eq!(vm.active_page(), Some(Page::Details));
    }

    #[test]
    fn test_redisplaying_same_page_keeps_video_playing() {
        let session = Session::default();
        let vm = view_manager(&session);

        let mut player = MockVideoPlayer::new();
        player.expect_stop().never();
        let pane = Arc::new(RecordingPane::new("available").with_video(Arc::new(player)));

        vm.display_page(pane.clone(), Page::Details, details_state("foo"));
        vm.display_page(pane.clone(), Page::Details, details_state("bar"));

        let displayed = pane.displayed();
        assert_eq!(displayed.len(), 2);
        assert_eq!(
            displayed[1].1.application.as_ref().map(|a| a.pkgname.as_str()),
            Some("bar")
        );
    }

    #[test]
    fn test_leaving_details_within_pane_stops_video() {
        let session = Session::default();
        let vm = view_manager(&session);

        let mut player = MockVideoPlayer::new();
        player.expect_stop().times(1).return_const(());
        let pane = Arc::new(RecordingPane::new("available").with_video(Arc::new(player)));

        vm.display_page(pane.clone(), Page::Details, details_state("foo"));
        vm.display_page(pane.clone(), Page::List, DisplayState::for_search("ark"));
        assert_eq!(vm.active_page(), Some(Page::List));
    }

    #[test]
    fn test_list_scroll_is_restored_on_back() {
        let session = Session::default();
        let vm = view_manager(&session);
        let pane = Arc::new(RecordingPane::new("available").with_scroll(120.0));

        vm.display_page(pane.clone(), Page::List, DisplayState::for_search("ark"));
        vm.display_page(pane.clone(), Page::Details, details_state("ark"));
        assert!(vm.can_go_back());

        assert!(vm.nav_back());
        let (page, state) = pane.displayed().last().cloned().unwrap();
        assert_eq!(page, Page::List);
        assert_eq!(state.search_terms, "ark");
        assert_eq!(state.list_scroll, Some(120.0));

        assert!(vm.can_go_forward());
        assert!(vm.nav_forward());
        assert_eq!(vm.active_page(), Some(Page::Details));
        assert!(!vm.nav_forward());
    }

    #[test]
    fn test_registered_views_switch_notebook() {
        let session = Session::default();
        let notebook = Arc::new(PageStack::new());
        let vm = ViewManager::new(&session, notebook.clone()).unwrap();

        let available = RecordingPane::shared("available");
        let installed = RecordingPane::shared("installed");
        assert_eq!(vm.register("available", available.clone()), 0);
        assert_eq!(vm.register("installed", installed.clone()), 1);
        assert_eq!(vm.register("installed", installed.clone()), 1);
        assert_eq!(vm.get_notebook_page_from_view_id("installed"), Some(1));
        assert!(vm.get_view_widget("history").is_none());

        vm.set_active_view("installed").unwrap();
        assert_eq!(notebook.current_page(), Some(1));
        assert!(vm.is_active_view("installed"));

        vm.display_page(available, Page::Lobby, DisplayState::default());
        assert_eq!(notebook.current_page(), Some(0));
        assert_eq!(vm.get_active_view().as_deref(), Some("available"));

        assert!(matches!(
            vm.set_active_view("history"),
            Err(SessionError::UnknownView(_))
        ));
    }

    #[test]
    fn test_set_active_view_switches_pane_and_page() {
        let session = Session::default();
        let notebook = Arc::new(PageStack::new());
        let vm = ViewManager::new(&session, notebook.clone()).unwrap();
        let rx = vm.subscribe();

        let mut player = MockVideoPlayer::new();
        // Details is left twice: switching to "installed" and going back to it
        player.expect_stop().times(2).return_const(());
        let available = Arc::new(RecordingPane::new("available").with_video(Arc::new(player)));
        let installed = RecordingPane::shared("installed");
        vm.register("available", available.clone());
        vm.register("installed", installed.clone());

        vm.display_page(available.clone(), Page::Details, details_state("foo"));
        vm.set_active_view("installed").unwrap();

        assert_eq!(
            rx.borrow().clone(),
            Some(ActiveView {
                view_id: Some("installed".to_string()),
                pane_name: "installed".to_string(),
                page: Page::Lobby,
            })
        );
        assert_eq!(notebook.current_page(), Some(1));
        assert_eq!(installed.displayed().len(), 1);

        // Coming back shows the page the view was left on
        vm.set_active_view("available").unwrap();
        assert_eq!(vm.active_page(), Some(Page::Details));
        assert_eq!(
            rx.borrow().as_ref().map(|v| v.pane_name.clone()),
            Some("available".to_string())
        );
        assert_eq!(notebook.current_page(), Some(0));
        assert!(vm.nav_back());
        assert_eq!(vm.get_active_view().as_deref(), Some("installed"));
    }

    /// Notebook that reads the view manager back while switching pages.
    struct ObservingNotebook {
        pages: PageStack,
        view_manager: parking_lot::Mutex<std::sync::Weak<ViewManager>>,
        seen: parking_lot::Mutex<Vec<Option<String>>>,
    }

    impl Notebook for ObservingNotebook {
        fn append_page(&self, label: &str) -> usize {
            if let Some(vm) = self.view_manager.lock().upgrade() {
                self.seen.lock().push(vm.get_active_view());
            }
            self.pages.append_page(label)
        }

        fn set_current_page(&self, index: usize) {
            if let Some(vm) = self.view_manager.lock().upgrade() {
                self.seen.lock().push(vm.get_active_view());
            }
            self.pages.set_current_page(index);
        }

        fn current_page(&self) -> Option<usize> {
            self.pages.current_page()
        }
    }

    #[test]
    fn test_notebook_may_call_back_into_view_manager() {
        let session = Session::default();
        let notebook = Arc::new(ObservingNotebook {
            pages: PageStack::new(),
            view_manager: parking_lot::Mutex::new(std::sync::Weak::new()),
            seen: parking_lot::Mutex::new(Vec::new()),
        });
        let vm = ViewManager::new(&session, notebook.clone()).unwrap();
        *notebook.view_manager.lock() = Arc::downgrade(&vm);

        vm.register("available", RecordingPane::shared("available"));
        vm.register("installed", RecordingPane::shared("installed"));
        vm.set_active_view("installed").unwrap();

        let seen = notebook.seen.lock().clone();
        assert_eq!(
            seen,
            vec![None, None, Some("installed".to_string())]
        );
    }

    #[test]
    fn test_subscribe_sees_active_view() {
        let session = Session::default();
        let vm = view_manager(&session);
        let rx = vm.subscribe();
        assert!(rx.borrow().is_none());

        let pane = RecordingPane::shared("available");
        vm.register("available", pane.clone());
        vm.display_page(pane, Page::List, DisplayState::for_search("ark"));

        let active = rx.borrow().clone().unwrap();
        assert_eq!(
            active,
            ActiveView {
                view_id: Some("available".to_string()),
                pane_name: "available".to_string(),
                page: Page::List,
            }
        );
    }
}
