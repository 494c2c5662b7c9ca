//! Input handling for the Cell Workbench View

use crossterm::event::KeyEvent;

use super::{CellLabAction, CellLabView};
use crate::keys;

impl CellLabView {
    /// Handle key events; returns action for App to process.
    ///
    /// During a rename session Enter commits and Esc cancels; every
    /// other key goes to the cell's editor.
    pub fn handle_key(&mut self, key: KeyEvent) -> CellLabAction {
        if self.cell.is_editing() {
            self.handle_edit_key(key)
        } else {
            self.handle_normal_key(key)
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) -> CellLabAction {
        match key.code {
            keys::RENAME => self.commit_rename(),
            keys::ESC => {
                self.cell.cancel_editing();
                CellLabAction::None
            }
            _ => {
                self.cell.input(key);
                CellLabAction::None
            }
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> CellLabAction {
        match key.code {
            keys::RENAME => {
                self.cell.begin_editing();
            }
            code if keys::is_widen(code) => {
                self.step_width(true);
            }
            code if keys::is_narrow(code) => {
                self.step_width(false);
            }
            code if keys::is_move_down(code) => {
                self.cycle_height(true);
            }
            code if keys::is_move_up(code) => {
                self.cycle_height(false);
            }
            keys::TOGGLE_ALIGNMENT => {
                self.toggle_alignment();
            }
            keys::TOGGLE_ICON => {
                self.toggle_icon();
            }
            keys::CYCLE_ALIGNMENT_WIDTH => {
                self.cycle_alignment_width();
            }
            keys::NEXT_SAMPLE => {
                self.next_item();
            }
            keys::TOGGLE_WORKSPACE => {
                self.toggle_workspace();
            }
            _ => {}
        }
        CellLabAction::None
    }

    /// Commit the active rename session.
    ///
    /// The cell itself records the rename on the workspace document;
    /// the view mirrors the new name into its sample item list and
    /// reports the change so the app can surface it.
    fn commit_rename(&mut self) -> CellLabAction {
        let from = self
            .cell
            .primary()
            .map(|p| p.value().to_string())
            .unwrap_or_default();
        self.cell.end_editing();
        let to = self
            .cell
            .primary()
            .map(|p| p.value().to_string())
            .unwrap_or_default();

        if from == to {
            return CellLabAction::None;
        }
        self.apply_rename(&to);
        CellLabAction::Renamed { from, to }
    }
}
