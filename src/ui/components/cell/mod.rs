//! Composite outline cell
//!
//! An imperative, layout-manual cell for navigator outlines: an icon
//! column, an editable primary field, and a secondary label, with
//! frames recomputed on every resize by [`CellFrames::solve`]. The
//! subviews are built through a pluggable [`CellFactory`] so hosts can
//! substitute any piece without changing the assembly sequence.

mod field;
mod icon;
mod layout;

pub use field::{FieldAlignment, TextField, Truncation, rename_selection, truncate_middle};
pub use icon::{IconSymbol, IconView, SymbolConfiguration, SymbolScale, SymbolWeight};
pub use layout::{CellFrames, LayoutError};

use std::rc::Rc;

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use crate::model::{WorkspaceDoc, WorkspaceHandle};
use crate::ui::metrics;
use crate::ui::theme;

/// Pluggable construction steps for the cell's subviews.
///
/// One create and one configure method per sub-element, each with the
/// standard behavior as its default body. Implementors override
/// individual steps; the cell drives them in a fixed order.
pub trait CellFactory {
    /// Build the primary field
    fn create_label(&self) -> TextField {
        TextField::new("")
    }

    /// Configure the primary field: editability per the cell flag, no
    /// background or border, rounded corners, row-height font, middle
    /// truncation
    fn configure_label(&self, label: &mut TextField, editable: bool, font_size: u16) {
        label.editable = editable;
        label.selectable = editable;
        label.draws_background = false;
        label.bordered = false;
        label.corner_radius = 10;
        label.font_size = font_size;
        label.truncation = Truncation::Middle;
    }

    /// Build the secondary label
    fn create_secondary_label(&self) -> TextField {
        TextField::new("")
    }

    /// Configure the secondary label: read-only, centered, secondary
    /// color, bold at two points below the primary font
    fn configure_secondary_label(&self, label: &mut TextField, font_size: u16) {
        label.editable = false;
        label.selectable = false;
        label.draws_background = false;
        label.bordered = false;
        label.alignment = FieldAlignment::Center;
        label.text_color = theme::cell::SECONDARY_LABEL;
        label.bold = true;
        label.font_size = font_size.saturating_sub(2);
    }

    /// Build the icon view
    fn create_icon(&self) -> IconView {
        IconView::new()
    }

    /// Configure the icon: symbol rendering at the cell's font size,
    /// regular weight, medium scale
    fn configure_icon(&self, icon: &mut IconView, font_size: u16) {
        icon.set_config(SymbolConfiguration::new(font_size));
    }
}

/// The standard factory, all default steps
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCellFactory;

impl CellFactory for StandardCellFactory {}

/// Outline/table cell with manual subview layout.
///
/// Owns its three subviews and holds a non-owning handle to the open
/// workspace document. Every frame change re-solves the subview
/// geometry; a resize that finds a subview missing logs the invalid
/// state and leaves the prior geometry untouched.
#[derive(Debug)]
pub struct OutlineCell {
    frame: Rect,
    editable: bool,
    secondary_right_aligned: bool,
    icon: Option<IconView>,
    primary: Option<TextField>,
    secondary: Option<TextField>,
    workspace: WorkspaceHandle,
}

impl OutlineCell {
    /// Create a cell with the standard factory
    pub fn new(frame: Rect, editable: bool) -> Self {
        Self::with_factory(frame, editable, &StandardCellFactory)
    }

    /// Create a cell, building subviews through `factory`.
    ///
    /// The assembly sequence is fixed: primary field, secondary label,
    /// icon, then the initial layout pass.
    pub fn with_factory(frame: Rect, editable: bool, factory: &dyn CellFactory) -> Self {
        let font_size = metrics::font_size_for_row_height(frame.height);

        let mut primary = factory.create_label();
        factory.configure_label(&mut primary, editable, font_size);

        let mut secondary = factory.create_secondary_label();
        factory.configure_secondary_label(&mut secondary, font_size);

        let mut icon = factory.create_icon();
        factory.configure_icon(&mut icon, font_size);

        let mut cell = Self {
            frame,
            editable,
            secondary_right_aligned: true,
            icon: Some(icon),
            primary: Some(primary),
            secondary: Some(secondary),
            workspace: WorkspaceHandle::empty(),
        };
        cell.resize_subviews();
        cell
    }

    /// Current cell frame
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Resize the cell and re-solve subview frames
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.resize_subviews();
    }

    /// Whether the primary field accepts edit sessions
    pub fn editable(&self) -> bool {
        self.editable
    }

    /// Which alignment strategy the layout uses
    pub fn secondary_right_aligned(&self) -> bool {
        self.secondary_right_aligned
    }

    /// Switch alignment strategy and re-solve subview frames
    pub fn set_secondary_right_aligned(&mut self, right_aligned: bool) {
        self.secondary_right_aligned = right_aligned;
        self.resize_subviews();
    }

    /// Font size derived from the current row height
    pub fn font_size(&self) -> u16 {
        metrics::font_size_for_row_height(self.frame.height)
    }

    /// Solve subview frames for the current state without applying them
    pub fn try_layout(&self) -> Result<CellFrames, LayoutError> {
        match (&self.icon, &self.primary, &self.secondary) {
            (Some(icon), Some(primary), Some(secondary)) => Ok(CellFrames::solve(
                self.frame.as_size(),
                icon,
                primary,
                secondary,
                self.secondary_right_aligned,
            )),
            (icon, primary, secondary) => Err(LayoutError::MissingSubview {
                icon: icon.is_none(),
                primary: primary.is_none(),
                secondary: secondary.is_none(),
            }),
        }
    }

    /// Run a layout pass, assigning the solved frames to the subviews.
    ///
    /// A missing subview is a programming error in the host: the pass
    /// is logged and skipped, prior geometry stays in place.
    pub fn resize_subviews(&mut self) {
        let frames = match self.try_layout() {
            Ok(frames) => frames,
            Err(err) => {
                tracing::error!("skipping cell layout: {err}");
                return;
            }
        };
        if let Some(icon) = self.icon.as_mut() {
            icon.set_frame(frames.icon);
        }
        if let Some(primary) = self.primary.as_mut() {
            primary.set_frame(frames.primary);
        }
        if let Some(secondary) = self.secondary.as_mut() {
            secondary.set_frame(frames.secondary);
        }
    }

    /// The icon subview
    pub fn icon(&self) -> Option<&IconView> {
        self.icon.as_ref()
    }

    /// Mutable access to the icon subview
    pub fn icon_mut(&mut self) -> Option<&mut IconView> {
        self.icon.as_mut()
    }

    /// Remove the icon subview (no layout pass runs)
    pub fn take_icon(&mut self) -> Option<IconView> {
        self.icon.take()
    }

    /// Install an icon subview and re-solve frames
    pub fn set_icon(&mut self, icon: IconView) {
        self.icon = Some(icon);
        self.resize_subviews();
    }

    /// The primary field
    pub fn primary(&self) -> Option<&TextField> {
        self.primary.as_ref()
    }

    /// Mutable access to the primary field
    pub fn primary_mut(&mut self) -> Option<&mut TextField> {
        self.primary.as_mut()
    }

    /// The secondary label
    pub fn secondary(&self) -> Option<&TextField> {
        self.secondary.as_ref()
    }

    /// Mutable access to the secondary label
    pub fn secondary_mut(&mut self) -> Option<&mut TextField> {
        self.secondary.as_mut()
    }

    /// Point the cell at the open workspace document
    pub fn set_workspace(&mut self, doc: &Rc<WorkspaceDoc>) {
        self.workspace = WorkspaceHandle::new(doc);
    }

    /// The workspace document, if it is still alive
    pub fn workspace(&self) -> Option<Rc<WorkspaceDoc>> {
        self.workspace.upgrade()
    }

    /// Whether an edit session is active on the primary field
    pub fn is_editing(&self) -> bool {
        self.primary.as_ref().is_some_and(TextField::is_editing)
    }

    /// Start an edit session on the primary field.
    ///
    /// Does nothing when the cell is not editable.
    pub fn begin_editing(&mut self) {
        if !self.editable {
            return;
        }
        if let Some(primary) = self.primary.as_mut() {
            primary.begin_editing();
        }
    }

    /// End the edit session, committing the edit.
    ///
    /// A committed change is recorded as a rename on the workspace
    /// document when one is still alive.
    pub fn end_editing(&mut self) {
        let Some(primary) = self.primary.as_mut() else {
            return;
        };
        let before = primary.value().to_string();
        let Some(after) = primary.end_editing() else {
            return;
        };
        if before != after {
            if let Some(doc) = self.workspace.upgrade() {
                doc.record_rename(before, after);
            }
        }
    }

    /// Abandon the edit session without committing
    pub fn cancel_editing(&mut self) {
        if let Some(primary) = self.primary.as_mut() {
            primary.cancel_editing();
        }
    }

    /// Forward a key event to the primary field's editor.
    ///
    /// Returns whether the text changed; `false` when not editing.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        match self.primary.as_mut() {
            Some(primary) if primary.is_editing() => primary.input(key),
            _ => false,
        }
    }
}

impl Default for OutlineCell {
    fn default() -> Self {
        Self::new(Rect::default(), false)
    }
}
