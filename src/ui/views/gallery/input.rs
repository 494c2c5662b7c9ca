//! Input handling for the Placeholder Gallery View

use crossterm::event::{KeyCode, KeyEvent};

use super::{GalleryAction, GalleryView};
use crate::keys;

impl GalleryView {
    /// Handle key events; returns action for App to process
    pub fn handle_key(&mut self, key: KeyEvent) -> GalleryAction {
        match key.code {
            code if keys::is_move_down(code) => {
                self.next_preset();
                GalleryAction::None
            }
            code if keys::is_move_up(code) => {
                self.prev_preset();
                GalleryAction::None
            }
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                let index = (c as usize) - ('1' as usize);
                match self.action_label(index) {
                    Some(label) => GalleryAction::ActionPressed { label },
                    None => GalleryAction::None,
                }
            }
            _ => GalleryAction::None,
        }
    }
}
