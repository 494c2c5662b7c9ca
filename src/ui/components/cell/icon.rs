//! Icon view for the outline cell

use ratatui::layout::Rect;

use crate::model::ItemKind;
use crate::ui::caps::HostCaps;
use crate::ui::metrics;
use crate::ui::symbols;

/// Rendering weight of a symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolWeight {
    /// Thin strokes
    Light,
    /// Standard strokes
    Regular,
    /// Heavy strokes
    Bold,
}

/// Rendering scale of a symbol relative to its point size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolScale {
    /// Smaller than the text it sits beside
    Small,
    /// Matched to the text
    Medium,
    /// Larger than the text
    Large,
}

/// How a symbol is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolConfiguration {
    /// Point size, normally the cell's font size
    pub point_size: u16,
    /// Stroke weight
    pub weight: SymbolWeight,
    /// Scale relative to the point size
    pub scale: SymbolScale,
}

impl SymbolConfiguration {
    /// Regular weight at medium scale for the given point size
    pub fn new(point_size: u16) -> Self {
        Self {
            point_size,
            weight: SymbolWeight::Regular,
            scale: SymbolScale::Medium,
        }
    }
}

/// A symbol assigned to the icon view.
///
/// `alignment_width` is the symbol's intrinsic alignment width; when
/// present, the layout pass centers the icon within the icon column
/// using it instead of the fixed inset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSymbol {
    /// Which glyph family to draw
    pub kind: ItemKind,
    /// Intrinsic alignment width, if the symbol carries one
    pub alignment_width: Option<u16>,
}

impl IconSymbol {
    /// Symbol for `kind` with the standard alignment width
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            alignment_width: Some(16),
        }
    }

    /// Symbol for `kind` without alignment metadata
    pub fn plain(kind: ItemKind) -> Self {
        Self {
            kind,
            alignment_width: None,
        }
    }
}

/// The cell's icon subview
#[derive(Debug, Clone)]
pub struct IconView {
    frame: Rect,
    symbol: Option<IconSymbol>,
    config: SymbolConfiguration,
}

impl IconView {
    /// Create an icon view with no symbol assigned
    pub fn new() -> Self {
        Self {
            frame: Rect::default(),
            symbol: None,
            config: SymbolConfiguration::new(metrics::DEFAULT_FONT_SIZE),
        }
    }

    /// Current frame in cell coordinates
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Assign the frame (done by the cell's layout pass)
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    /// The assigned symbol, if any
    pub fn symbol(&self) -> Option<IconSymbol> {
        self.symbol
    }

    /// Assign or clear the symbol
    pub fn set_symbol(&mut self, symbol: Option<IconSymbol>) {
        self.symbol = symbol;
    }

    /// Current symbol configuration
    pub fn config(&self) -> SymbolConfiguration {
        self.config
    }

    /// Replace the symbol configuration
    pub fn set_config(&mut self, config: SymbolConfiguration) {
        self.config = config;
    }

    /// Intrinsic alignment width of the assigned symbol, if any
    pub fn alignment_width(&self) -> Option<u16> {
        self.symbol.and_then(|symbol| symbol.alignment_width)
    }

    /// Displayable glyph for the assigned symbol
    pub fn glyph(&self, caps: &HostCaps) -> Option<char> {
        self.symbol
            .map(|symbol| symbols::icon_glyph(symbol.kind).for_caps(caps))
    }
}

impl Default for IconView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_icon_has_no_symbol() {
        let icon = IconView::new();
        assert!(icon.symbol().is_none());
        assert!(icon.alignment_width().is_none());
        assert!(icon.glyph(&HostCaps::full()).is_none());
    }

    #[test]
    fn test_symbol_carries_alignment_width() {
        let mut icon = IconView::new();
        icon.set_symbol(Some(IconSymbol::new(ItemKind::Canvas)));
        assert_eq!(icon.alignment_width(), Some(16));

        icon.set_symbol(Some(IconSymbol::plain(ItemKind::Canvas)));
        assert_eq!(icon.alignment_width(), None);
    }

    #[test]
    fn test_glyph_follows_kind_and_charset() {
        let mut icon = IconView::new();
        icon.set_symbol(Some(IconSymbol::new(ItemKind::Folder)));
        assert_eq!(icon.glyph(&HostCaps::full()), Some('▣'));
        assert_eq!(icon.glyph(&HostCaps::plain()), Some('+'));
    }

    #[test]
    fn test_configuration_defaults() {
        let config = SymbolConfiguration::new(13);
        assert_eq!(config.point_size, 13);
        assert_eq!(config.weight, SymbolWeight::Regular);
        assert_eq!(config.scale, SymbolScale::Medium);
    }
}
