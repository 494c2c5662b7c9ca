//! Text fields for the outline cell
//!
//! One field type serves both roles: the editable primary field and the
//! read-only secondary label. Appearance flags start from conventional
//! text-field defaults so the cell's configure step has something to
//! override, exactly like the host toolkit the cell is modeled on.

use std::ops::Range;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Rect, Size},
    style::{Color, Style},
};
use tui_textarea::{CursorMove, TextArea};

use crate::ui::metrics;
use crate::ui::theme;

/// How overlong text is shortened for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truncation {
    /// Cut at the right edge
    Clip,
    /// Drop the middle, keeping both ends visible
    Middle,
}

/// Horizontal text alignment within the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAlignment {
    /// Flush left
    Left,
    /// Centered
    Center,
}

/// A single-line text field owned by an outline cell.
///
/// Carries its own frame (assigned by the cell's layout pass) and an
/// edit-session state machine: while editing, keystrokes go to an
/// embedded editor and a background highlight is painted; ending the
/// session commits the edited text back into `value`.
#[derive(Debug)]
pub struct TextField {
    value: String,
    frame: Rect,

    /// Whether an edit session may be started
    pub editable: bool,
    /// Whether the text can be selected without editing
    pub selectable: bool,
    /// Whether the field paints its own background when idle
    pub draws_background: bool,
    /// Whether the field draws a border
    pub bordered: bool,
    /// Corner radius of the background layer
    pub corner_radius: u16,
    /// Font size, drives measurement
    pub font_size: u16,
    /// Display shortening strategy
    pub truncation: Truncation,
    /// Horizontal alignment
    pub alignment: FieldAlignment,
    /// Foreground color
    pub text_color: Color,
    /// Bold text
    pub bold: bool,

    editor: Option<TextArea<'static>>,
    active_background: Option<Color>,
}

impl TextField {
    /// Create a field with conventional text-field defaults
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            frame: Rect::default(),
            editable: true,
            selectable: true,
            draws_background: true,
            bordered: true,
            corner_radius: 0,
            font_size: metrics::DEFAULT_FONT_SIZE,
            truncation: Truncation::Clip,
            alignment: FieldAlignment::Left,
            text_color: Color::Reset,
            bold: false,
            editor: None,
            active_background: None,
        }
    }

    /// Current committed text
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the committed text
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Current frame in cell coordinates
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Assign the frame (done by the cell's layout pass)
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    /// Measure the field against a proposed size.
    ///
    /// An unbounded height proposal (`u16::MAX`) asks for the natural
    /// size of the text and ignores the proposed width; a bounded
    /// proposal clamps the natural size to it. The cell's layout pass
    /// relies on the unbounded form for both alignment strategies.
    pub fn size_that_fits(&self, proposal: Size) -> Size {
        let natural = Size::new(
            metrics::text_width(&self.value, self.font_size),
            metrics::line_height(self.font_size),
        );
        if proposal.height == u16::MAX {
            natural
        } else {
            Size::new(
                natural.width.min(proposal.width),
                natural.height.min(proposal.height),
            )
        }
    }

    /// Whether an edit session is active
    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    /// Background color painted while editing, if active
    pub fn active_background(&self) -> Option<Color> {
        self.active_background
    }

    /// The embedded editor, while an edit session is active
    pub fn editor(&self) -> Option<&TextArea<'static>> {
        self.editor.as_ref()
    }

    /// Start an edit session.
    ///
    /// Selects all text, then narrows the selection to end just before
    /// the last "." so a trailing extension stays out of the initial
    /// selection; a value without a dot keeps the full selection. The
    /// editing background is enabled for the duration of the session.
    pub fn begin_editing(&mut self) {
        let mut editor = TextArea::new(vec![self.value.clone()]);
        editor.set_cursor_line_style(Style::default());
        editor.set_style(Style::default().bg(theme::cell::EDIT_BACKGROUND));
        editor.set_selection_style(Style::default().bg(theme::cell::EDIT_SELECTION));
        editor.select_all();

        let selection = rename_selection(&self.value);
        if selection.end < self.value.chars().count() {
            editor.cancel_selection();
            editor.move_cursor(CursorMove::Jump(0, 0));
            editor.start_selection();
            let end = u16::try_from(selection.end).unwrap_or(u16::MAX);
            editor.move_cursor(CursorMove::Jump(0, end));
        }

        self.active_background = Some(theme::cell::EDIT_BACKGROUND);
        self.editor = Some(editor);
    }

    /// End the edit session, committing the edited text.
    ///
    /// Returns the committed value, or `None` if no session was active.
    /// Stray line breaks in the editor are joined away so the committed
    /// value stays single line. The editing background is disabled
    /// either way.
    pub fn end_editing(&mut self) -> Option<String> {
        self.active_background = None;
        let editor = self.editor.take()?;
        let value = editor.into_lines().concat();
        self.value = value.clone();
        Some(value)
    }

    /// Abandon the edit session without committing
    pub fn cancel_editing(&mut self) {
        self.active_background = None;
        self.editor = None;
    }

    /// Forward a key event to the active editor.
    ///
    /// Returns whether the text changed; `false` when not editing. The
    /// field holds a single line, so `Enter` is never forwarded.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Enter {
            return false;
        }
        match self.editor.as_mut() {
            Some(editor) => editor.input(key),
            None => false,
        }
    }

    /// Text shortened for display within `max_chars` columns
    pub fn display_text(&self, max_chars: usize) -> String {
        match self.truncation {
            Truncation::Middle => truncate_middle(&self.value, max_chars),
            Truncation::Clip => self.value.chars().take(max_chars).collect(),
        }
    }
}

impl Default for TextField {
    fn default() -> Self {
        Self::new("")
    }
}

/// Selection range (in chars) used when a rename session starts.
///
/// Ends just before the last "." in `value`; spans the whole string
/// when no dot is present. A leading dot yields an empty range.
pub fn rename_selection(value: &str) -> Range<usize> {
    match value.rfind('.') {
        Some(dot) => 0..value[..dot].chars().count(),
        None => 0..value.chars().count(),
    }
}

/// Shorten `text` to at most `max_chars`, dropping the middle
pub fn truncate_middle(text: &str, max_chars: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    if max_chars == 1 {
        return "…".to_string();
    }
    let keep = max_chars - 1;
    let head = keep.div_ceil(2);
    let tail = keep - head;
    let mut out: String = chars[..head].iter().collect();
    out.push('…');
    out.extend(&chars[chars.len() - tail..]);
    out
}
