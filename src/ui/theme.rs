//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Colors for empty-state placeholders
pub mod empty_state {
    use super::*;

    /// Label and icon color
    pub const SECONDARY: Color = Color::Gray;
    /// Description color
    pub const TERTIARY: Color = Color::DarkGray;
    /// Accessory-bar action color
    pub const ACCESSORY_ACTION: Color = Color::Cyan;
    /// Plain link action color
    pub const LINK_ACTION: Color = Color::Blue;
}

/// Colors for outline cells
pub mod cell {
    use super::*;

    /// Icon tint
    pub const ICON: Color = Color::Cyan;
    /// Secondary label color
    pub const SECONDARY_LABEL: Color = Color::Gray;
    /// Background shown behind the primary field while editing
    pub const EDIT_BACKGROUND: Color = Color::DarkGray;
    /// Selected text highlight inside the editor
    pub const EDIT_SELECTION: Color = Color::Blue;
}

/// Colors for the blueprint overlay in the workbench
pub mod blueprint {
    use super::*;

    /// Cell bounds outline
    pub const CELL_BORDER: Color = Color::Cyan;
    /// Icon frame outline
    pub const ICON_BOX: Color = Color::Magenta;
    /// Primary field frame outline
    pub const PRIMARY_BOX: Color = Color::Green;
    /// Secondary field frame outline
    pub const SECONDARY_BOX: Color = Color::Yellow;
    /// Frame coordinate labels
    pub const LABEL: Color = Color::DarkGray;
}
