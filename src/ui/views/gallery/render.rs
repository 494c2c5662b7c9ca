//! Placeholder Gallery rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders},
};

use super::GalleryView;
use crate::ui::caps::HostCaps;

impl GalleryView {
    /// Render the placeholder on display, centered in the view area
    pub fn render(&self, frame: &mut Frame, area: Rect, caps: &HostCaps) {
        let title = Line::from(format!(
            " Trellis - Placeholder Gallery ({}) ",
            self.preset_name()
        ))
        .style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Cyan),
        )
        .centered();

        let block = Block::default().borders(Borders::ALL).title(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.current_preset().render(frame, inner, caps);
    }
}
