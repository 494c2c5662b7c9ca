//! Application state and view management

use crate::ui::caps::HostCaps;
use crate::ui::views::{CellLabView, GalleryView};

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    CellLab,
    Gallery,
    Help,
}

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current view
    pub current_view: View,
    /// Previous view (for back navigation)
    pub(crate) previous_view: Option<View>,
    /// Cell workbench state
    pub cell_lab: CellLabView,
    /// Placeholder gallery state
    pub gallery: GalleryView,
    /// Host capabilities the rendering adapts to
    pub caps: HostCaps,
    /// Help view scroll offset
    pub(crate) help_scroll: u16,
    /// Last noteworthy event, shown as a badge in the status bar
    pub last_event: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new() -> Self {
        Self::with_caps(HostCaps::detect())
    }

    /// Construct with explicit capabilities (tests pin these down)
    pub fn with_caps(caps: HostCaps) -> Self {
        Self {
            running: true,
            current_view: View::CellLab,
            previous_view: None,
            cell_lab: CellLabView::new(),
            gallery: GalleryView::new(),
            caps,
            help_scroll: 0,
            last_event: None,
        }
    }

    /// Switch to next view (Tab key)
    pub(crate) fn next_view(&mut self) {
        let next = match self.current_view {
            View::CellLab => View::Gallery,
            View::Gallery => View::CellLab,
            View::Help => View::CellLab,
        };
        self.go_to_view(next);
    }

    /// Navigate to a specific view
    pub(crate) fn go_to_view(&mut self, view: View) {
        if self.current_view != view {
            self.previous_view = Some(self.current_view);
            self.current_view = view;
            if view == View::Help {
                self.help_scroll = 0;
            }
        }
    }

    /// Go back to previous view
    pub(crate) fn go_back(&mut self) {
        if let Some(prev) = self.previous_view.take() {
            self.current_view = prev;
        } else {
            self.current_view = View::CellLab;
        }
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// Flip the whole capability set between the unicode and ascii
    /// profiles, so both rendering paths can be eyeballed live.
    pub(crate) fn toggle_charset(&mut self) {
        self.caps = if self.caps.unicode_symbols {
            HostCaps::plain()
        } else {
            HostCaps::full()
        };
    }
}
