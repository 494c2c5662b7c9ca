//! Empty state component
//!
//! Declarative placeholder shown when a navigator pane has no content:
//! an optional icon glyph above a label, an optional description below,
//! and an optional row of actions. The whole composition is centered in
//! the area it is given.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::caps::HostCaps;
use crate::ui::symbols::Glyph;
use crate::ui::theme;

/// One entry in the action row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyStateAction {
    /// Button label
    pub label: String,
}

impl EmptyStateAction {
    /// Create an action with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// Centered placeholder composition.
///
/// Built with [`EmptyState::new`] plus optional builder steps; absent
/// optional parts are simply omitted from the output (no space is
/// reserved for them).
#[derive(Debug, Clone)]
pub struct EmptyState {
    label: String,
    description: Option<String>,
    icon: Option<Glyph>,
    actions: Vec<EmptyStateAction>,
}

impl EmptyState {
    /// Create an empty state with only a label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
            icon: None,
            actions: Vec::new(),
        }
    }

    /// Add a description line below the label
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Add an icon glyph above the label.
    ///
    /// The label renders bold only when an icon is present.
    pub fn icon(mut self, glyph: Glyph) -> Self {
        self.icon = Some(glyph);
        self
    }

    /// Build the action row.
    ///
    /// The closure runs once, here, so callers can assemble actions
    /// lazily at the construction site.
    pub fn actions<F>(mut self, build: F) -> Self
    where
        F: FnOnce() -> Vec<EmptyStateAction>,
    {
        self.actions = build();
        self
    }

    /// The built action row, in display order
    pub fn action_row(&self) -> &[EmptyStateAction] {
        &self.actions
    }

    /// Compose the output lines.
    ///
    /// Order: icon glyph (blank line after it), label, description,
    /// then a blank line and the action row. Each line is centered
    /// horizontally. `caps` picks the glyph charset and the action
    /// style: accessory-capable hosts get inverse-video pills, others
    /// get plain bracketed links.
    pub fn lines(&self, caps: &HostCaps) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        if let Some(glyph) = self.icon {
            lines.push(
                Line::styled(
                    glyph.for_caps(caps).to_string(),
                    Style::default().fg(theme::empty_state::TERTIARY),
                )
                .centered(),
            );
            lines.push(Line::from(""));
        }

        let mut label_style = Style::default().fg(theme::empty_state::SECONDARY);
        if self.icon.is_some() {
            label_style = label_style.add_modifier(Modifier::BOLD);
        }
        lines.push(Line::styled(self.label.clone(), label_style).centered());

        if let Some(description) = &self.description {
            lines.push(
                Line::styled(
                    description.clone(),
                    Style::default().fg(theme::empty_state::TERTIARY),
                )
                .centered(),
            );
        }

        if !self.actions.is_empty() {
            lines.push(Line::from(""));
            let mut spans: Vec<Span<'static>> = Vec::new();
            for (i, action) in self.actions.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw("  "));
                }
                if caps.accessory_actions {
                    spans.push(Span::styled(
                        format!(" {} ", action.label),
                        Style::default()
                            .fg(theme::empty_state::ACCESSORY_ACTION)
                            .add_modifier(Modifier::REVERSED),
                    ));
                } else {
                    spans.push(Span::styled(
                        format!("[{}]", action.label),
                        Style::default().fg(theme::empty_state::LINK_ACTION),
                    ));
                }
            }
            lines.push(Line::from(spans).centered());
        }

        lines
    }

    /// The single renderable output consumed by a parent view
    pub fn paragraph(&self, caps: &HostCaps) -> Paragraph<'static> {
        Paragraph::new(self.lines(caps))
    }

    /// Render the composition vertically centered within `area`
    pub fn render(&self, frame: &mut Frame, area: Rect, caps: &HostCaps) {
        let lines = self.lines(caps);
        let height = (lines.len() as u16).min(area.height);
        let pad = area.height.saturating_sub(height) / 2;
        let target = Rect::new(area.x, area.y + pad, area.width, height);
        frame.render_widget(Paragraph::new(lines), target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::symbols;

    #[test]
    fn test_label_only() {
        let state = EmptyState::new("No Canvases");
        let lines = state.lines(&HostCaps::full());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].content, "No Canvases");
    }

    #[test]
    fn test_label_is_bold_only_with_icon() {
        let plain = EmptyState::new("No Canvases");
        let lines = plain.lines(&HostCaps::full());
        assert!(!lines[0].style.add_modifier.contains(Modifier::BOLD));

        let with_icon = EmptyState::new("No Canvases").icon(symbols::items::CANVAS);
        let lines = with_icon.lines(&HostCaps::full());
        // icon line, blank line, then the bolded label
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].spans[0].content, "◇");
        assert!(lines[2].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_icon_honors_charset_capability() {
        let state = EmptyState::new("No Canvases").icon(symbols::items::CANVAS);
        let lines = state.lines(&HostCaps::plain());
        assert_eq!(lines[0].spans[0].content, "*");
    }

    #[test]
    fn test_description_reserves_no_space_when_absent() {
        let with = EmptyState::new("No Canvases").description("Create one to get started.");
        let without = EmptyState::new("No Canvases");
        assert_eq!(
            with.lines(&HostCaps::full()).len(),
            without.lines(&HostCaps::full()).len() + 1
        );
    }

    #[test]
    fn test_actions_built_lazily_and_styled_by_capability() {
        let state = EmptyState::new("No Canvases")
            .actions(|| vec![EmptyStateAction::new("New Canvas")]);

        let accessory = state.lines(&HostCaps::full());
        let row = accessory.last().unwrap();
        assert_eq!(row.spans[0].content, " New Canvas ");
        assert!(row.spans[0].style.add_modifier.contains(Modifier::REVERSED));

        let linked = state.lines(&HostCaps::plain());
        let row = linked.last().unwrap();
        assert_eq!(row.spans[0].content, "[New Canvas]");
    }

    #[test]
    fn test_multiple_actions_are_separated() {
        let state = EmptyState::new("Empty").actions(|| {
            vec![
                EmptyStateAction::new("New"),
                EmptyStateAction::new("Import"),
            ]
        });
        let lines = state.lines(&HostCaps::plain());
        let row = lines.last().unwrap();
        assert_eq!(row.spans.len(), 3);
        assert_eq!(row.spans[1].content, "  ");
    }
}
