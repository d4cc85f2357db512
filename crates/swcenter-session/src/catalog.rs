//! Toolkit and database collaborators of the available pane.

use swcenter_core::{AppDetails, Application};

use crate::display_state::Page;

/// Icon size of an application row in the list view.
pub const LIST_VIEW_ICON_SIZE: i32 = 32;

/// Icon size of the application details view.
pub const DETAILS_VIEW_ICON_SIZE: i32 = 96;

/// Application database lookups.
#[cfg_attr(test, mockall::automock)]
pub trait AppCatalog: Send + Sync {
    /// Details for an application, `None` if it is not in the catalog.
    fn get_details(&self, app: &Application) -> Option<AppDetails>;
}

/// On-screen geometry of application icons.
#[cfg_attr(test, mockall::automock)]
pub trait IconGeometry: Send + Sync {
    /// Root window position of `app`'s icon on `page`, if it is visible.
    fn icon_origin(&self, page: Page, app: &Application) -> Option<(i32, i32)>;
}

/// Icon size drawn on `page`, 0 for pages without an application icon.
pub fn icon_size_for_page(page: Page) -> i32 {
    match page {
        Page::List => LIST_VIEW_ICON_SIZE,
        Page::Details => DETAILS_VIEW_ICON_SIZE,
        _ => 0,
    }
}
