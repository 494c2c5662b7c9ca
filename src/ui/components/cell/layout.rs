//! Frame solver for the outline cell
//!
//! Pure point-space arithmetic: given the cell size and its three
//! subviews, produce the frame of each. All math saturates so a
//! degenerate cell size (including zero) can never panic.

use ratatui::layout::{Rect, Size};
use thiserror::Error;

use super::field::TextField;
use super::icon::IconView;
use crate::ui::metrics::{
    FIELD_HEIGHT, ICON_COLUMN_WIDTH, ICON_INSET_X, ICON_INSET_Y, RIGHT_ALIGNED_FIELD_Y,
    RIGHT_ALIGNED_GAP, TRAILING_FIELD_Y, TRAILING_GAP,
};

/// Raised when a layout pass runs while the cell is in an invalid state
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// One or more subviews were absent at resize time
    #[error(
        "cannot resize cell, subviews missing (icon: {icon}, primary: {primary}, secondary: {secondary})"
    )]
    MissingSubview {
        /// Icon view absent
        icon: bool,
        /// Primary field absent
        primary: bool,
        /// Secondary field absent
        secondary: bool,
    },
}

/// Solved geometry for one layout pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellFrames {
    /// Icon view frame
    pub icon: Rect,
    /// Primary field frame
    pub primary: Rect,
    /// Secondary field frame
    pub secondary: Rect,
}

impl CellFrames {
    /// Solve subview frames for a cell of `size`.
    ///
    /// The icon sits at the fixed insets spanning the full cell height,
    /// or is centered within the icon column when its symbol carries an
    /// intrinsic alignment width. The two strategies then split the
    /// remaining width between the primary and secondary fields:
    /// right-aligned pins the secondary against the right edge and lets
    /// the primary fill the gap; trailing gives the primary its natural
    /// width and lets the secondary fill to the right edge.
    pub fn solve(
        size: Size,
        icon: &IconView,
        primary: &TextField,
        secondary: &TextField,
        secondary_right_aligned: bool,
    ) -> Self {
        let icon_frame = match icon.alignment_width() {
            Some(width) => Rect::new(
                ICON_COLUMN_WIDTH.saturating_sub(width) / 2,
                ICON_INSET_Y,
                width,
                size.height,
            ),
            None => Rect::new(ICON_INSET_X, ICON_INSET_Y, ICON_COLUMN_WIDTH, size.height),
        };

        let field_x = ICON_COLUMN_WIDTH + ICON_INSET_X;

        if secondary_right_aligned {
            let measured =
                secondary.size_that_fits(Size::new(secondary.frame().width, u16::MAX));
            let secondary_x = size.width.saturating_sub(measured.width);
            // Intentional zero width; the visual extent comes from the
            // unbounded-height measurement above, and the two must stay
            // paired.
            let secondary_frame =
                Rect::new(secondary_x, RIGHT_ALIGNED_FIELD_Y, 0, measured.height);
            let primary_width = secondary_x
                .saturating_sub(icon_frame.right())
                .saturating_sub(RIGHT_ALIGNED_GAP);
            let primary_frame =
                Rect::new(field_x, RIGHT_ALIGNED_FIELD_Y, primary_width, FIELD_HEIGHT);
            Self {
                icon: icon_frame,
                primary: primary_frame,
                secondary: secondary_frame,
            }
        } else {
            let measured = primary.size_that_fits(Size::new(primary.frame().width, u16::MAX));
            let primary_frame = Rect::new(field_x, TRAILING_FIELD_Y, measured.width, FIELD_HEIGHT);
            let secondary_x = primary_frame.right().saturating_add(TRAILING_GAP);
            let secondary_frame = Rect::new(
                secondary_x,
                TRAILING_FIELD_Y,
                size.width.saturating_sub(secondary_x),
                FIELD_HEIGHT,
            );
            Self {
                icon: icon_frame,
                primary: primary_frame,
                secondary: secondary_frame,
            }
        }
    }
}
