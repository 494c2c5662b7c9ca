//! Status bar widget

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::keys::KeyHint;

/// Build a status bar line from key hints
pub fn build_status_bar(hints: &[KeyHint]) -> Line<'static> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Build a status bar line with a prefix and key hints
pub fn build_status_bar_with_prefix(
    prefix: Vec<Span<'static>>,
    hints: &[KeyHint],
) -> Line<'static> {
    let mut spans = prefix;

    for hint in hints {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Calculate status bar area at bottom of screen
fn status_bar_area(frame: &Frame) -> Option<Rect> {
    let area = frame.area();
    if area.height < 2 {
        return None;
    }

    Some(Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    })
}

/// Render the bottom status bar.
///
/// `note` is a transient message about the last thing that happened
/// (a committed rename, a pressed action button); it renders as a
/// badge in front of the key hints.
pub fn render_status_bar(frame: &mut Frame, hints: &[KeyHint], note: Option<&str>) {
    let Some(status_area) = status_bar_area(frame) else {
        return;
    };

    let status = match note {
        Some(note) => build_status_bar_with_prefix(
            vec![Span::styled(
                format!(" {} ", note),
                Style::default().fg(Color::Black).bg(Color::Green),
            )],
            hints,
        ),
        None => build_status_bar(hints),
    };
    frame.render_widget(Paragraph::new(status), status_area);
}
