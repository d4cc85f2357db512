//! Back/forward navigation history.

use std::sync::Arc;

use crate::display_state::{DisplayState, Page};
use crate::pane::{same_pane, Pane};

/// A page the user navigated to.
#[derive(Clone)]
pub struct NavEntry {
    pub pane: Arc<dyn Pane>,
    pub page: Page,
    pub state: DisplayState,
}

impl NavEntry {
    pub fn new(pane: Arc<dyn Pane>, page: Page, state: DisplayState) -> Self {
        Self { pane, page, state }
    }

    /// Same pane and page, regardless of state.
    pub fn is_at(&self, pane: &Arc<dyn Pane>, page: Page) -> bool {
        same_pane(&self.pane, pane) && self.page == page
    }

    /// Same pane, page and state. The saved list scroll offset is not
    /// part of what the user navigated to.
    fn is_same(&self, other: &NavEntry) -> bool {
        self.is_at(&other.pane, other.page)
            && without_scroll(&self.state) == without_scroll(&other.state)
    }
}

fn without_scroll(state: &DisplayState) -> DisplayState {
    DisplayState {
        list_scroll: None,
        ..state.clone()
    }
}

impl std::fmt::Debug for NavEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavEntry")
            .field("pane", &self.pane.pane_name())
            .field("page", &self.page)
            .field("state", &self.state)
            .finish()
    }
}

/// Bounded history with a cursor on the current entry.
///
/// Appending after going back drops the forward entries. When full, the
/// oldest entry is dropped.
#[derive(Debug)]
pub struct NavHistory {
    entries: Vec<NavEntry>,
    cursor: usize,
    max_len: usize,
}

impl NavHistory {
    /// Create an empty history keeping at most `max_len` entries.
    pub fn new(max_len: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            max_len: max_len.max(1),
        }
    }

    /// Record a navigation.
    ///
    /// Re-displaying the current entry with an identical state is not
    /// recorded twice.
    pub fn append(&mut self, entry: NavEntry) {
        if let Some(current) = self.current() {
            if current.is_same(&entry) {
                return;
            }
            self.entries.truncate(self.cursor + 1);
        }

        self.entries.push(entry);
        if self.entries.len() > self.max_len {
            self.entries.remove(0);
        }
        self.cursor = self.entries.len() - 1;
        tracing::debug!(
            "Navigation history: {} entries, at {}",
            self.entries.len(),
            self.cursor
        );
    }

    /// Move back one entry and return it.
    pub fn back(&mut self) -> Option<NavEntry> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        self.current().cloned()
    }

    /// Move forward one entry and return it.
    pub fn forward(&mut self) -> Option<NavEntry> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        self.current().cloned()
    }

    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty() && self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// The entry the cursor is on.
    pub fn current(&self) -> Option<&NavEntry> {
        self.entries.get(self.cursor)
    }

    /// Mutable access to the entry the cursor is on.
    pub fn current_mut(&mut self) -> Option<&mut NavEntry> {
        self.entries.get_mut(self.cursor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}
