//! Cell Workbench View
//!
//! Hosts a single outline cell over a set of sample navigator items and
//! exposes a key for every knob the cell has: width, row height, secondary
//! label alignment, icon presence, symbol alignment width, and the
//! workspace document that receives rename records.

mod input;
mod render;

use std::rc::Rc;

use ratatui::layout::Rect;

use crate::model::{ItemKind, NavigatorItem, WorkspaceDoc};
use crate::ui::components::{IconSymbol, OutlineCell};

/// Action returned from CellLabView key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellLabAction {
    /// A rename was committed through the cell
    Renamed {
        /// Name before the edit session
        from: String,
        /// Name after the edit session
        to: String,
    },
    /// No action
    None,
}

/// Row heights the workbench cycles through.
///
/// 20, 22, and 24 each map to a distinct font size; 26 exercises the
/// fallback branch of the lookup.
pub(super) const ROW_HEIGHTS: [u16; 4] = [20, 22, 24, 26];

/// Alignment widths the workbench cycles through for the icon symbol
pub(super) const ALIGNMENT_WIDTHS: [Option<u16>; 3] = [Some(16), Some(18), None];

/// Initial cell width
const DEFAULT_CELL_WIDTH: u16 = 300;

/// Width bounds for the h/l keys
const MIN_CELL_WIDTH: u16 = 60;
const MAX_CELL_WIDTH: u16 = 600;

/// Width step for the h/l keys
const WIDTH_STEP: u16 = 10;

/// Cell Workbench state
#[derive(Debug)]
pub struct CellLabView {
    /// The cell under inspection
    pub(super) cell: OutlineCell,

    /// Items the cell cycles through
    pub(super) items: Vec<NavigatorItem>,

    /// Index into `items`
    pub(super) item_index: usize,

    /// Index into ROW_HEIGHTS
    pub(super) height_index: usize,

    /// Index into ALIGNMENT_WIDTHS
    pub(super) alignment_width_index: usize,

    /// Workspace document the cell records renames on (None = detached)
    pub(super) workspace: Option<Rc<WorkspaceDoc>>,
}

impl Default for CellLabView {
    fn default() -> Self {
        Self::new()
    }
}

impl CellLabView {
    /// Create a new CellLabView with the cell attached to a fresh workspace
    pub fn new() -> Self {
        let workspace = WorkspaceDoc::new("Flowcharts");
        let mut cell = OutlineCell::new(
            Rect::new(0, 0, DEFAULT_CELL_WIDTH, ROW_HEIGHTS[1]),
            true,
        );
        cell.set_workspace(&workspace);

        let mut view = Self {
            cell,
            items: sample_items(),
            item_index: 0,
            height_index: 1,
            alignment_width_index: 0,
            workspace: Some(workspace),
        };
        view.load_item();
        view
    }

    /// The cell under inspection
    pub fn cell(&self) -> &OutlineCell {
        &self.cell
    }

    /// Whether a rename session is active on the cell
    pub fn is_editing(&self) -> bool {
        self.cell.is_editing()
    }

    /// The item currently loaded into the cell
    pub(super) fn current_item(&self) -> &NavigatorItem {
        &self.items[self.item_index]
    }

    /// Push the current item's values into the cell and re-run layout
    fn load_item(&mut self) {
        let name = self.current_item().name.clone();
        let detail = self.current_item().detail.clone();
        let kind = self.current_item().kind;
        let alignment_width = ALIGNMENT_WIDTHS[self.alignment_width_index];

        if let Some(primary) = self.cell.primary_mut() {
            primary.set_value(name);
        }
        if let Some(secondary) = self.cell.secondary_mut() {
            secondary.set_value(detail);
        }
        if let Some(icon) = self.cell.icon_mut() {
            icon.set_symbol(Some(IconSymbol {
                kind,
                alignment_width,
            }));
        }
        self.cell.resize_subviews();
    }

    /// Advance to the next sample item
    pub(super) fn next_item(&mut self) {
        self.item_index = (self.item_index + 1) % self.items.len();
        self.load_item();
    }

    /// Step the cell width by `WIDTH_STEP` in either direction
    pub(super) fn step_width(&mut self, widen: bool) {
        let frame = self.cell.frame();
        let width = if widen {
            frame.width.saturating_add(WIDTH_STEP).min(MAX_CELL_WIDTH)
        } else {
            frame.width.saturating_sub(WIDTH_STEP).max(MIN_CELL_WIDTH)
        };
        self.cell.set_frame(Rect { width, ..frame });
    }

    /// Cycle the row height and rebuild the cell at the new height.
    ///
    /// The font size is fixed when the subviews are built, so a height
    /// change goes through the factory again rather than just resizing.
    pub(super) fn cycle_height(&mut self, forward: bool) {
        let len = ROW_HEIGHTS.len();
        self.height_index = if forward {
            (self.height_index + 1) % len
        } else {
            (self.height_index + len - 1) % len
        };
        self.rebuild_cell();
    }

    /// Toggle the secondary label between right-aligned and trailing layout
    pub(super) fn toggle_alignment(&mut self) {
        let right_aligned = self.cell.secondary_right_aligned();
        self.cell.set_secondary_right_aligned(!right_aligned);
    }

    /// Remove the icon subview, or restore it if missing.
    ///
    /// Removal deliberately skips the layout pass; the next resize logs
    /// the missing subview and leaves all frames untouched.
    pub(super) fn toggle_icon(&mut self) {
        if self.cell.take_icon().is_none() {
            self.rebuild_cell();
        }
    }

    /// Cycle the icon symbol's alignment width (16 → 18 → none)
    pub(super) fn cycle_alignment_width(&mut self) {
        self.alignment_width_index = (self.alignment_width_index + 1) % ALIGNMENT_WIDTHS.len();
        let kind = self.current_item().kind;
        let alignment_width = ALIGNMENT_WIDTHS[self.alignment_width_index];
        if let Some(icon) = self.cell.icon_mut() {
            icon.set_symbol(Some(IconSymbol {
                kind,
                alignment_width,
            }));
        }
        self.cell.resize_subviews();
    }

    /// Attach the workspace document to the cell, or drop it.
    ///
    /// Dropping releases the only strong reference, so the cell's weak
    /// handle goes dead and committed renames stop being recorded.
    pub(super) fn toggle_workspace(&mut self) {
        if self.workspace.take().is_none() {
            let workspace = WorkspaceDoc::new("Flowcharts");
            self.cell.set_workspace(&workspace);
            self.workspace = Some(workspace);
        }
    }

    /// Rebuild the cell from scratch at the current height and width.
    ///
    /// Keeps the alignment strategy and workspace attachment, then
    /// reloads the current item.
    fn rebuild_cell(&mut self) {
        let frame = Rect {
            height: ROW_HEIGHTS[self.height_index],
            ..self.cell.frame()
        };
        let right_aligned = self.cell.secondary_right_aligned();

        let mut cell = OutlineCell::new(frame, true);
        cell.set_secondary_right_aligned(right_aligned);
        if let Some(ref workspace) = self.workspace {
            cell.set_workspace(workspace);
        }
        self.cell = cell;
        self.load_item();
    }

    /// Record a committed rename back into the sample item list
    pub(super) fn apply_rename(&mut self, to: &str) {
        self.items[self.item_index].name = to.to_string();
    }
}

/// Sample items covering every icon kind and selection edge case:
/// single extension, double extension, and no extension at all.
fn sample_items() -> Vec<NavigatorItem> {
    vec![
        NavigatorItem::new("flow.canvas", "12 shapes", ItemKind::Canvas),
        NavigatorItem::new("icons.stencil", "48 shapes", ItemKind::Stencil),
        NavigatorItem::new("export.tar.gz", "2.1 MB", ItemKind::Asset),
        NavigatorItem::new("readme", "just now", ItemKind::Generic),
        NavigatorItem::new("sketches", "3 items", ItemKind::Folder),
    ]
}
