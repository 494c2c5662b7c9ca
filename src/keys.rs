//! Keybinding definitions for the workbench
//!
//! All keybindings are defined here for easy modification and future config file support.

use crossterm::event::KeyCode;
use ratatui::style::Color;

use crate::app::View;

// =============================================================================
// Global keys (available in all views)
// =============================================================================

/// Quit application or go back
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Show help
pub const HELP: KeyCode = KeyCode::Char('?');

/// Switch between views
pub const TAB: KeyCode = KeyCode::Tab;

/// Alternative back
pub const ESC: KeyCode = KeyCode::Esc;

/// Toggle between unicode and ascii rendering
pub const TOGGLE_CHARSET: KeyCode = KeyCode::Char('c');

// =============================================================================
// Navigation keys
// =============================================================================

/// Cycle forward (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Cycle forward (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Cycle backward (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Cycle backward (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Check if key is cycle backward (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is cycle forward (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Cell workbench keys
// =============================================================================

/// Start or commit a rename on the primary field
pub const RENAME: KeyCode = KeyCode::Enter;

/// Widen the cell (vim style)
pub const WIDEN: KeyCode = KeyCode::Char('l');

/// Widen the cell (arrow key)
pub const WIDEN_ARROW: KeyCode = KeyCode::Right;

/// Narrow the cell (vim style)
pub const NARROW: KeyCode = KeyCode::Char('h');

/// Narrow the cell (arrow key)
pub const NARROW_ARROW: KeyCode = KeyCode::Left;

/// Toggle the secondary label between right-aligned and trailing layout
pub const TOGGLE_ALIGNMENT: KeyCode = KeyCode::Char('a');

/// Remove or restore the icon subview
pub const TOGGLE_ICON: KeyCode = KeyCode::Char('i');

/// Cycle the icon symbol's alignment width
pub const CYCLE_ALIGNMENT_WIDTH: KeyCode = KeyCode::Char('r');

/// Load the next sample item into the cell
pub const NEXT_SAMPLE: KeyCode = KeyCode::Char('n');

/// Attach or detach the workspace document
pub const TOGGLE_WORKSPACE: KeyCode = KeyCode::Char('w');

/// Check if key is widen (l or →)
pub fn is_widen(code: KeyCode) -> bool {
    matches!(code, WIDEN | WIDEN_ARROW)
}

/// Check if key is narrow (h or ←)
pub fn is_narrow(code: KeyCode) -> bool {
    matches!(code, NARROW | NARROW_ARROW)
}

// =============================================================================
// Help text generation
// =============================================================================

/// Key binding entry for help display
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

/// Global key bindings for help display
pub const GLOBAL_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "q",
        description: "Quit / Back",
    },
    KeyBindEntry {
        key: "?",
        description: "Help",
    },
    KeyBindEntry {
        key: "Tab",
        description: "Switch view",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Back to previous",
    },
    KeyBindEntry {
        key: "c",
        description: "Toggle unicode/ascii symbols",
    },
];

/// Cell workbench key bindings for help display
pub const CELL_LAB_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "Enter",
        description: "Rename (commit with Enter, cancel with Esc)",
    },
    KeyBindEntry {
        key: "h/l",
        description: "Narrow/widen cell",
    },
    KeyBindEntry {
        key: "j/k",
        description: "Cycle row height (20/22/24/26)",
    },
    KeyBindEntry {
        key: "a",
        description: "Toggle secondary label alignment",
    },
    KeyBindEntry {
        key: "i",
        description: "Remove/restore icon subview",
    },
    KeyBindEntry {
        key: "r",
        description: "Cycle icon alignment width",
    },
    KeyBindEntry {
        key: "n",
        description: "Next sample item",
    },
    KeyBindEntry {
        key: "w",
        description: "Attach/detach workspace document",
    },
];

/// Gallery key bindings for help display
pub const GALLERY_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j/k",
        description: "Next/previous placeholder preset",
    },
    KeyBindEntry {
        key: "1-9",
        description: "Press action button",
    },
];

/// Rename session key bindings for help display
pub const EDIT_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "Enter",
        description: "Commit rename",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Cancel rename",
    },
    KeyBindEntry {
        key: "Backspace",
        description: "Delete character",
    },
];

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

/// Cell workbench status bar hints
pub const CELL_LAB_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "?",
        label: "Help",
        color: Color::Cyan,
    },
    KeyHint {
        key: "Enter",
        label: "Rename",
        color: Color::Green,
    },
    KeyHint {
        key: "h/l",
        label: "Width",
        color: Color::Yellow,
    },
    KeyHint {
        key: "j/k",
        label: "Height",
        color: Color::Yellow,
    },
    KeyHint {
        key: "a",
        label: "Align",
        color: Color::Magenta,
    },
    KeyHint {
        key: "i",
        label: "Icon",
        color: Color::Cyan,
    },
    KeyHint {
        key: "n",
        label: "Sample",
        color: Color::Blue,
    },
    KeyHint {
        key: "w",
        label: "Doc",
        color: Color::Blue,
    },
    KeyHint {
        key: "Tab",
        label: "Switch",
        color: Color::Blue,
    },
    KeyHint {
        key: "q",
        label: "Quit",
        color: Color::Red,
    },
];

/// Rename session status bar hints
pub const EDIT_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "Enter",
        label: "Commit",
        color: Color::Green,
    },
    KeyHint {
        key: "Esc",
        label: "Cancel",
        color: Color::Red,
    },
];

/// Gallery status bar hints
pub const GALLERY_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "?",
        label: "Help",
        color: Color::Cyan,
    },
    KeyHint {
        key: "j/k",
        label: "Preset",
        color: Color::Yellow,
    },
    KeyHint {
        key: "1-9",
        label: "Action",
        color: Color::Green,
    },
    KeyHint {
        key: "c",
        label: "Charset",
        color: Color::Magenta,
    },
    KeyHint {
        key: "Tab",
        label: "Switch",
        color: Color::Blue,
    },
    KeyHint {
        key: "q",
        label: "Quit",
        color: Color::Red,
    },
];

/// Get the appropriate hints for the current context.
///
/// A live rename session overrides the view hints; Help has no status bar.
pub fn current_hints(view: View, editing: bool) -> &'static [KeyHint] {
    if editing {
        return EDIT_HINTS;
    }
    match view {
        View::CellLab => CELL_LAB_HINTS,
        View::Gallery => GALLERY_HINTS,
        View::Help => &[],
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_lab_hints_include_core_keys() {
        let hints = current_hints(View::CellLab, false);
        assert!(hints.iter().any(|h| h.key == "?"), "Help hint missing");
        assert!(hints.iter().any(|h| h.key == "Enter"), "Rename hint missing");
        assert!(hints.iter().any(|h| h.key == "a"), "Align hint missing");
        assert!(hints.iter().any(|h| h.key == "q"), "Quit hint missing");
    }

    #[test]
    fn test_editing_overrides_view_hints() {
        let hints = current_hints(View::CellLab, true);
        assert_eq!(hints.len(), 2);
        assert!(hints.iter().any(|h| h.label == "Commit"));
        assert!(hints.iter().any(|h| h.label == "Cancel"));
    }

    #[test]
    fn test_gallery_hints() {
        let hints = current_hints(View::Gallery, false);
        assert!(hints.iter().any(|h| h.key == "1-9"), "Action hint missing");
        assert!(hints.iter().any(|h| h.key == "c"), "Charset hint missing");
    }

    #[test]
    fn test_help_view_has_no_hints() {
        assert!(current_hints(View::Help, false).is_empty());
    }

    #[test]
    fn test_move_predicates() {
        assert!(is_move_up(KeyCode::Char('k')));
        assert!(is_move_up(KeyCode::Up));
        assert!(is_move_down(KeyCode::Char('j')));
        assert!(is_move_down(KeyCode::Down));
        assert!(!is_move_down(KeyCode::Char('k')));
    }

    #[test]
    fn test_width_predicates() {
        assert!(is_widen(KeyCode::Char('l')));
        assert!(is_widen(KeyCode::Right));
        assert!(is_narrow(KeyCode::Char('h')));
        assert!(is_narrow(KeyCode::Left));
        assert!(!is_narrow(KeyCode::Right));
    }
}
