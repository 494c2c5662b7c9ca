//! Rendering logic for the application

use ratatui::Frame;
use ratatui::layout::Rect;

use super::state::{App, View};
use crate::keys;
use crate::ui::widgets::{render_help_panel, render_status_bar};

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        match self.current_view {
            View::CellLab => self.render_cell_lab(frame),
            View::Gallery => self.render_gallery(frame),
            View::Help => render_help_panel(frame, frame.area(), self.help_scroll),
        }
    }

    fn render_cell_lab(&self, frame: &mut Frame) {
        self.cell_lab.render(frame, main_area(frame), &self.caps);
        let hints = keys::current_hints(View::CellLab, self.cell_lab.is_editing());
        render_status_bar(frame, hints, self.last_event.as_deref());
    }

    fn render_gallery(&self, frame: &mut Frame) {
        self.gallery.render(frame, main_area(frame), &self.caps);
        let hints = keys::current_hints(View::Gallery, false);
        render_status_bar(frame, hints, self.last_event.as_deref());
    }
}

/// Main area with the bottom row reserved for the status bar
fn main_area(frame: &Frame) -> Rect {
    let area = frame.area();
    Rect {
        height: area.height.saturating_sub(1),
        ..area
    }
}
