//! Cell blueprint widget
//!
//! Draws an outline cell to scale, one terminal cell per point: the cell
//! bounds and each subview frame are outlined in their own color with the
//! live content inside. Subviews clip to the drawing area, not to the
//! cell bounds, matching how the cell treats frames that extend past its
//! own row.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::caps::HostCaps;
use crate::ui::components::{FieldAlignment, IconView, OutlineCell, TextField};
use crate::ui::metrics;
use crate::ui::theme;

/// Render `cell` as a scale drawing inside `area`
pub fn render_cell_blueprint(frame: &mut Frame, area: Rect, cell: &OutlineCell, caps: &HostCaps) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(" Blueprint ").style(Style::default().fg(Color::Cyan)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let bounds = Rect::new(0, 0, cell.frame().width, cell.frame().height);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::blueprint::CELL_BORDER)),
        translate(bounds, inner),
    );

    if let Some(icon) = cell.icon() {
        render_icon(frame, inner, icon, caps);
    }
    if let Some(primary) = cell.primary() {
        render_field_box(frame, inner, primary, theme::blueprint::PRIMARY_BOX);
    }
    if let Some(secondary) = cell.secondary() {
        render_secondary(frame, inner, secondary);
    }
}

fn render_icon(frame: &mut Frame, inner: Rect, icon: &IconView, caps: &HostCaps) {
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::blueprint::ICON_BOX)),
        translate(icon.frame(), inner),
    );

    let Some(glyph) = icon.glyph(caps) else {
        return;
    };
    let gx = icon.frame().x + icon.frame().width / 2;
    let gy = icon.frame().y + icon.frame().height / 2;
    frame.render_widget(
        Paragraph::new(glyph.to_string()).style(Style::default().fg(theme::cell::ICON)),
        translate(Rect::new(gx, gy, 1, 1), inner),
    );
}

fn render_field_box(frame: &mut Frame, inner: Rect, field: &TextField, border: Color) {
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
        translate(field.frame(), inner),
    );

    // Background layer that comes on for the length of an edit session
    if let Some(bg) = field.active_background() {
        frame.render_widget(
            Block::default().style(Style::default().bg(bg)),
            translate(inset(field.frame(), 1), inner),
        );
    }

    let text_rect = text_row_of(field.frame(), inner);
    if text_rect.is_empty() {
        return;
    }

    if let Some(editor) = field.editor() {
        frame.render_widget(editor, text_rect);
        return;
    }

    let text = field.display_text(text_rect.width as usize);
    let mut paragraph = Paragraph::new(text).style(field_style(field));
    if field.alignment == FieldAlignment::Center {
        paragraph = paragraph.centered();
    }
    frame.render_widget(paragraph, text_rect);
}

fn render_secondary(frame: &mut Frame, inner: Rect, field: &TextField) {
    if field.frame().width > 0 {
        render_field_box(frame, inner, field, theme::blueprint::SECONDARY_BOX);
        return;
    }

    // Right-aligned strategy stores a zero width frame; the glyphs spill
    // out of it, ending where the unbounded measurement said they would.
    let extent = metrics::text_width(field.value(), field.font_size);
    let strip = Rect::new(field.frame().x, field.frame().y, extent, 1);
    frame.render_widget(
        Paragraph::new(field.value().to_string())
            .style(field_style(field))
            .right_aligned(),
        translate(strip, inner),
    );
}

fn field_style(field: &TextField) -> Style {
    let mut style = Style::default().fg(field.text_color);
    if field.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    style
}

/// The single text row inside a field box, inset past the border
fn text_row_of(frame: Rect, inner: Rect) -> Rect {
    let row = Rect::new(
        frame.x.saturating_add(2),
        frame.y.saturating_add(1),
        frame.width.saturating_sub(4),
        1,
    );
    translate(row, inner)
}

/// Map a frame in cell coordinates onto the screen, clipped to the
/// drawing area
fn translate(rect: Rect, inner: Rect) -> Rect {
    let screen = Rect {
        x: inner.x.saturating_add(rect.x),
        y: inner.y.saturating_add(rect.y),
        width: rect.width,
        height: rect.height,
    };
    screen.intersection(inner)
}

/// Shrink a frame by `by` on every side
fn inset(frame: Rect, by: u16) -> Rect {
    Rect::new(
        frame.x.saturating_add(by),
        frame.y.saturating_add(by),
        frame.width.saturating_sub(by * 2),
        frame.height.saturating_sub(by * 2),
    )
}
