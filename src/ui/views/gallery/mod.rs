//! Placeholder Gallery View
//!
//! Cycles through the empty-state presets the navigator shows when a
//! pane has no content, and lets each action button be pressed from the
//! keyboard.

mod input;
mod render;

use crate::ui::components::{EmptyState, EmptyStateAction};
use crate::ui::symbols;

/// Action returned from GalleryView key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryAction {
    /// An action button in the placeholder was pressed
    ActionPressed {
        /// Label of the pressed button
        label: String,
    },
    /// No action
    None,
}

/// Short names for the title bar, one per preset
const PRESET_NAMES: [&str; 4] = [
    "empty folder",
    "no results",
    "nothing selected",
    "no stencils",
];

/// Placeholder Gallery state
#[derive(Debug, Default)]
pub struct GalleryView {
    /// Index of the preset on display
    pub(super) preset_index: usize,
}

impl GalleryView {
    /// Create a new GalleryView showing the first preset
    pub fn new() -> Self {
        Self { preset_index: 0 }
    }

    /// Build the placeholder for the preset on display.
    ///
    /// Built fresh on every use, so the action row closure runs at the
    /// construction site each time.
    pub(super) fn current_preset(&self) -> EmptyState {
        build_preset(self.preset_index)
    }

    /// Short name of the preset on display
    pub(super) fn preset_name(&self) -> &'static str {
        PRESET_NAMES[self.preset_index]
    }

    /// Advance to the next preset
    pub(super) fn next_preset(&mut self) {
        self.preset_index = (self.preset_index + 1) % PRESET_NAMES.len();
    }

    /// Go back to the previous preset
    pub(super) fn prev_preset(&mut self) {
        let len = PRESET_NAMES.len();
        self.preset_index = (self.preset_index + len - 1) % len;
    }

    /// Label of the `index`-th action button of the preset on display
    pub(super) fn action_label(&self, index: usize) -> Option<String> {
        self.current_preset()
            .action_row()
            .get(index)
            .map(|action| action.label.clone())
    }
}

/// The placeholder presets: every combination of the optional parts
/// (icon, description, actions) that the navigator actually shows.
fn build_preset(index: usize) -> EmptyState {
    match index {
        0 => EmptyState::new("No Canvases")
            .description("This folder does not contain any canvases yet.")
            .icon(symbols::items::FOLDER)
            .actions(|| {
                vec![
                    EmptyStateAction::new("New Canvas"),
                    EmptyStateAction::new("Import…"),
                ]
            }),
        1 => EmptyState::new("No Results").description("No items match the current filter."),
        2 => EmptyState::new("Nothing Selected"),
        _ => EmptyState::new("No Stencils")
            .icon(symbols::items::STENCIL)
            .actions(|| vec![EmptyStateAction::new("Browse Library")]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_cycling_wraps() {
        let mut view = GalleryView::new();
        for _ in 0..PRESET_NAMES.len() {
            view.next_preset();
        }
        assert_eq!(view.preset_index, 0);
        view.prev_preset();
        assert_eq!(view.preset_index, PRESET_NAMES.len() - 1);
    }

    #[test]
    fn test_first_preset_actions() {
        let view = GalleryView::new();
        assert_eq!(view.action_label(0).as_deref(), Some("New Canvas"));
        assert_eq!(view.action_label(1).as_deref(), Some("Import…"));
        assert_eq!(view.action_label(2), None);
    }

    #[test]
    fn test_label_only_preset_has_no_actions() {
        let view = GalleryView {
            preset_index: 2,
        };
        assert!(view.current_preset().action_row().is_empty());
        assert_eq!(view.action_label(0), None);
    }
}
