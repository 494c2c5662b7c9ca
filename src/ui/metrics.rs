//! Navigator cell metrics
//!
//! Geometry constants and the text measurement model shared by the cell
//! layout solver and the workbench. All values are in layout units
//! ("points"), matching the desktop client's navigator metrics so both
//! frontends agree on geometry.
//!
//! ## Measurement model
//! The terminal has no font metrics, so natural text sizes are derived from
//! a fixed table: a glyph advances half the point size (rounded up) and a
//! line is point size + 3 tall. Every geometry test computes its expected
//! values through these same functions.

/// Horizontal inset of the icon frame when no alignment width is set
pub const ICON_INSET_X: u16 = 2;
/// Vertical inset of the icon frame
pub const ICON_INSET_Y: u16 = 4;
/// Width of the icon column
pub const ICON_COLUMN_WIDTH: u16 = 22;
/// Gap between the primary field and a right-aligned secondary label
pub const RIGHT_ALIGNED_GAP: u16 = 5;
/// Gap between the primary field and a trailing secondary label
pub const TRAILING_GAP: u16 = 2;
/// Fixed height of the text fields
pub const FIELD_HEIGHT: u16 = 25;
/// Vertical inset of the fields in the right-aligned strategy
pub const RIGHT_ALIGNED_FIELD_Y: u16 = 3;
/// Vertical inset of the fields in the trailing strategy
pub const TRAILING_FIELD_Y: u16 = 2;
/// Font size used for unrecognized row heights
pub const DEFAULT_FONT_SIZE: u16 = 13;

/// Returns the font size for a row height. Defaults to [`DEFAULT_FONT_SIZE`].
pub fn font_size_for_row_height(row_height: u16) -> u16 {
    match row_height {
        20 => 11,
        22 => 13,
        24 => 14,
        _ => DEFAULT_FONT_SIZE,
    }
}

/// Horizontal advance of one glyph at the given font size
pub fn char_advance(font_size: u16) -> u16 {
    font_size.div_ceil(2)
}

/// Height of a single text line at the given font size
pub fn line_height(font_size: u16) -> u16 {
    font_size.saturating_add(3)
}

/// Natural width of a single-line string at the given font size
pub fn text_width(text: &str, font_size: u16) -> u16 {
    let chars = text.chars().count() as u32;
    let width = chars * u32::from(char_advance(font_size));
    width.min(u32::from(u16::MAX)) as u16
}
