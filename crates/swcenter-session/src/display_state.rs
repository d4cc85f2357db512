//! Pages of a pane and the state each page is displayed with.

use serde::{Deserialize, Serialize};
use swcenter_core::Application;

/// Notebook pages inside a software pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Lobby,
    Subcategory,
    List,
    Details,
    Purchase,
}

impl Page {
    /// All pages in notebook order.
    pub const ALL: [Page; 5] = [
        Page::Lobby,
        Page::Subcategory,
        Page::List,
        Page::Details,
        Page::Purchase,
    ];

    /// Index of the page in the pane's notebook.
    pub fn index(self) -> usize {
        match self {
            Page::Lobby => 0,
            Page::Subcategory => 1,
            Page::List => 2,
            Page::Details => 3,
            Page::Purchase => 4,
        }
    }

    /// Notebook tab label.
    pub fn label(self) -> &'static str {
        match self {
            Page::Lobby => "lobby",
            Page::Subcategory => "subcategory",
            Page::List => "list",
            Page::Details => "details",
            Page::Purchase => "purchase",
        }
    }
}

/// What a page shows: the category, search and selected application the
/// user navigated to.
///
/// A copy is kept per navigation history entry so back/forward can
/// restore it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,

    #[serde(default)]
    pub search_terms: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<Application>,

    /// Maximum number of results, 0 for no limit.
    #[serde(default)]
    pub limit: usize,

    /// Vertical scroll offset of the application list when it was left.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_scroll: Option<f64>,
}

impl DisplayState {
    /// State showing the details of one application.
    pub fn for_application(app: Application) -> Self {
        Self {
            application: Some(app),
            ..Self::default()
        }
    }

    /// State showing search results.
    pub fn for_search(terms: impl Into<String>) -> Self {
        Self {
            search_terms: terms.into(),
            ..Self::default()
        }
    }
}
