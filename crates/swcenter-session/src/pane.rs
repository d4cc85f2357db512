//! Pane trait implemented by every top-level view of the main window.

use std::sync::Arc;

use crate::display_state::{DisplayState, Page};

/// Embedded video player of an application details page.
#[cfg_attr(test, mockall::automock)]
pub trait VideoPlayer: Send + Sync {
    /// Stop playback.
    fn stop(&self);
}

/// A top-level view of the main window (available software, installed
/// software, history, ...).
///
/// `display_page` is the enter hook; the leave hooks are expressed through
/// what the pane exposes: the view manager stops `video_player` when a
/// details page is left and saves `list_scroll_offset` when a list page
/// is left.
pub trait Pane: Send + Sync {
    /// Name used in logs and view snapshots.
    fn pane_name(&self) -> &str;

    /// Switch the pane to `page` and show `state` on it.
    fn display_page(&self, page: Page, state: &DisplayState);

    /// Video player of the details page, if it has one.
    fn video_player(&self) -> Option<Arc<dyn VideoPlayer>> {
        None
    }

    /// Current scroll offset of the application list.
    fn list_scroll_offset(&self) -> Option<f64> {
        None
    }
}

/// Whether two pane handles point at the same pane.
///
/// Compares data pointers only; vtable pointers of the same type may
/// differ between codegen units.
pub fn same_pane(a: &Arc<dyn Pane>, b: &Arc<dyn Pane>) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}
