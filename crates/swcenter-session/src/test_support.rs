//! Panes and players shared by the unit tests.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::display_state::{DisplayState, Page};
use crate::pane::{Pane, VideoPlayer};

/// Pane that records every page it was asked to display.
pub(crate) struct RecordingPane {
    name: String,
    video: Option<Arc<dyn VideoPlayer>>,
    scroll: Option<f64>,
    displayed: Mutex<Vec<(Page, DisplayState)>>,
}

impl RecordingPane {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            video: None,
            scroll: None,
            displayed: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn shared(name: &str) -> Arc<Self> {
        Arc::new(Self::new(name))
    }

    pub(crate) fn with_video(mut self, player: Arc<dyn VideoPlayer>) -> Self {
        self.video = Some(player);
        self
    }

    pub(crate) fn with_scroll(mut self, offset: f64) -> Self {
        self.scroll = Some(offset);
        self
    }

    pub(crate) fn displayed(&self) -> Vec<(Page, DisplayState)> {
        self.displayed.lock().clone()
    }
}

impl Pane for RecordingPane {
    fn pane_name(&self) -> &str {
        &self.name
    }

    fn display_page(&self, page: Page, state: &DisplayState) {
        self.displayed.lock().push((page, state.clone()));
    }

    fn video_player(&self) -> Option<Arc<dyn VideoPlayer>> {
        self.video.clone()
    }

    fn list_scroll_offset(&self) -> Option<f64> {
        self.scroll
    }
}
