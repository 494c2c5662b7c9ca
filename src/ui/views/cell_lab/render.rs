//! Cell Workbench rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{ALIGNMENT_WIDTHS, CellLabView};
use crate::ui::caps::HostCaps;
use crate::ui::theme;
use crate::ui::widgets::render_cell_blueprint;

impl CellLabView {
    /// Render the workbench: cell blueprint on the left, state panel on
    /// the right.
    pub fn render(&self, frame: &mut Frame, area: Rect, caps: &HostCaps) {
        let title = Line::from(" Trellis - Cell Workbench ")
            .style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::Cyan),
            )
            .centered();
        let block = Block::default().borders(Borders::ALL).title(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks =
            Layout::horizontal([Constraint::Min(40), Constraint::Length(34)]).split(inner);

        render_cell_blueprint(frame, chunks[0], &self.cell, caps);
        self.render_state_panel(frame, chunks[1]);
    }

    /// Render the state panel listing every knob and the applied frames.
    ///
    /// Frames come from the subviews, not from a fresh layout pass, so a
    /// skipped pass (missing icon) shows the geometry that stayed behind.
    fn render_state_panel(&self, frame: &mut Frame, area: Rect) {
        let item = self.current_item();
        let cell_frame = self.cell.frame();

        let strategy = if self.cell.secondary_right_aligned() {
            "right-aligned"
        } else {
            "trailing"
        };
        let sym_width = match ALIGNMENT_WIDTHS[self.alignment_width_index] {
            Some(w) => w.to_string(),
            None => "none".to_string(),
        };

        let mut lines = vec![
            text_line("item", item.name.clone()),
            text_line("kind", item.kind.label().to_string()),
            text_line(
                "cell",
                format!("w={} h={}", cell_frame.width, cell_frame.height),
            ),
            text_line("font", self.cell.font_size().to_string()),
            text_line("strategy", strategy.to_string()),
            text_line("sym width", sym_width),
        ];

        lines.push(match self.cell.icon() {
            Some(icon) => frame_line("icon", icon.frame()),
            None => missing_line("icon"),
        });
        lines.push(match self.cell.primary() {
            Some(primary) => frame_line("primary", primary.frame()),
            None => missing_line("primary"),
        });
        lines.push(match self.cell.secondary() {
            Some(secondary) => frame_line("secondary", secondary.frame()),
            None => missing_line("secondary"),
        });

        lines.push(text_line(
            "editing",
            if self.cell.is_editing() { "yes" } else { "no" }.to_string(),
        ));

        match self.workspace {
            Some(ref doc) => {
                lines.push(text_line(
                    "doc",
                    format!("{} ({} renames)", doc.name, doc.rename_count()),
                ));
                if let Some(rename) = doc.last_rename() {
                    lines.push(text_line(
                        "rename",
                        format!("{} -> {}", rename.from, rename.to),
                    ));
                }
            }
            None => lines.push(text_line("doc", "detached".to_string())),
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(" State ").style(Style::default().fg(Color::Cyan)));
        let paragraph = Paragraph::new(lines).block(block);
        frame.render_widget(paragraph, area);
    }
}

/// Build a `label: value` panel line
fn text_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {:<10}", label),
            Style::default().fg(theme::blueprint::LABEL),
        ),
        Span::raw(value),
    ])
}

/// Build a panel line showing an applied frame
fn frame_line(label: &str, frame: Rect) -> Line<'static> {
    text_line(
        label,
        format!(
            "x={} y={} w={} h={}",
            frame.x, frame.y, frame.width, frame.height
        ),
    )
}

/// Build a panel line for a subview that has been removed
fn missing_line(label: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {:<10}", label),
            Style::default().fg(theme::blueprint::LABEL),
        ),
        Span::styled("missing", Style::default().fg(Color::Red)),
    ])
}
