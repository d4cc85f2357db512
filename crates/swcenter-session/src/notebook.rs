//! Notebook abstraction over the toolkit's tabbed container.
//!
//! The view manager and the panes only need to add pages and switch
//! between them. `PageStack` is an in-memory notebook used when running
//! without a toolkit.

use parking_lot::RwLock;

/// A container showing one of several pages at a time.
pub trait Notebook: Send + Sync {
    /// Append a page and return its index.
    fn append_page(&self, label: &str) -> usize;

    /// Show the page at `index`.
    fn set_current_page(&self, index: usize);

    /// Index of the visible page, `None` before the first switch.
    fn current_page(&self) -> Option<usize>;
}

/// Headless notebook that only tracks labels and the current page.
#[derive(Debug, Default)]
pub struct PageStack {
    labels: RwLock<Vec<String>>,
    current: RwLock<Option<usize>>,
}

impl PageStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label of the visible page.
    pub fn current_label(&self) -> Option<String> {
        let current = (*self.current.read())?;
        self.labels.read().get(current).cloned()
    }

    pub fn len(&self) -> usize {
        self.labels.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.read().is_empty()
    }
}

impl Notebook for PageStack {
    fn append_page(&self, label: &str) -> usize {
        let mut labels = self.labels.write();
        labels.push(label.to_string());
        labels.len() - 1
    }

    fn set_current_page(&self, index: usize) {
        if index >= self.len() {
            tracing::warn!("Ignoring switch to missing notebook page {}", index);
            return;
        }
        *self.current.write() = Some(index);
    }

    fn current_page(&self) -> Option<usize> {
        *self.current.read()
    }
}
