//! Input handling for the application

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{App, View};
use crate::keys;
use crate::ui::views::{CellLabAction, GalleryAction};

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Clear the event badge on any key press
        self.last_event = None;

        // Handle Ctrl+C globally
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            self.quit();
            return;
        }

        // During a rename session every key belongs to the cell's editor
        if self.current_view == View::CellLab && self.cell_lab.is_editing() {
            let action = self.cell_lab.handle_key(key);
            self.handle_cell_lab_action(action);
            return;
        }

        if self.handle_global_key(key) {
            return;
        }

        self.handle_view_key(key);
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            keys::QUIT => {
                self.handle_quit();
                true
            }
            keys::ESC => {
                self.handle_back();
                true
            }
            keys::HELP => {
                self.go_to_view(View::Help);
                true
            }
            keys::TAB => {
                self.next_view();
                true
            }
            keys::TOGGLE_CHARSET => {
                self.toggle_charset();
                true
            }
            _ => false,
        }
    }

    fn handle_quit(&mut self) {
        if self.current_view == View::CellLab {
            self.quit();
        } else {
            self.go_back();
        }
    }

    fn handle_back(&mut self) {
        if self.current_view != View::CellLab {
            self.go_back();
        }
    }

    fn handle_view_key(&mut self, key: KeyEvent) {
        match self.current_view {
            View::CellLab => {
                let action = self.cell_lab.handle_key(key);
                self.handle_cell_lab_action(action);
            }
            View::Gallery => {
                let action = self.gallery.handle_key(key);
                self.handle_gallery_action(action);
            }
            View::Help => self.handle_help_key(key),
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            code if keys::is_move_down(code) => {
                self.help_scroll = self.help_scroll.saturating_add(1);
            }
            code if keys::is_move_up(code) => {
                self.help_scroll = self.help_scroll.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn handle_cell_lab_action(&mut self, action: CellLabAction) {
        match action {
            CellLabAction::None => {}
            CellLabAction::Renamed { from, to } => {
                self.last_event = Some(format!("renamed {from} -> {to}"));
            }
        }
    }

    fn handle_gallery_action(&mut self, action: GalleryAction) {
        match action {
            GalleryAction::None => {}
            GalleryAction::ActionPressed { label } => {
                self.last_event = Some(format!("pressed {label}"));
            }
        }
    }
}
