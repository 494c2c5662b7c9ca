//! UI symbols (item glyphs, blueprint markers)
//!
//! ## Character Set Policy
//! - **Unicode preferred**: glyphs read best on modern terminals
//! - Every glyph carries an ASCII fallback selected through
//!   [`HostCaps`](crate::ui::caps::HostCaps) for hosts without
//!   Unicode symbol support
//! - The fallback is a single printable ASCII character so frame
//!   widths stay identical in both modes

use crate::model::ItemKind;
use crate::ui::caps::HostCaps;

/// A display glyph with an ASCII fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Preferred Unicode form
    pub unicode: char,
    /// Fallback when the host lacks symbol support
    pub ascii: char,
}

impl Glyph {
    /// Pick the form supported by `caps`
    pub fn for_caps(&self, caps: &HostCaps) -> char {
        if caps.unicode_symbols {
            self.unicode
        } else {
            self.ascii
        }
    }
}

/// Item glyphs used by outline cells
pub mod items {
    use super::Glyph;

    /// Folder glyph (▣)
    pub const FOLDER: Glyph = Glyph {
        unicode: '▣',
        ascii: '+',
    };
    /// Canvas glyph (◇)
    pub const CANVAS: Glyph = Glyph {
        unicode: '◇',
        ascii: '*',
    };
    /// Stencil glyph (⬡)
    pub const STENCIL: Glyph = Glyph {
        unicode: '⬡',
        ascii: '#',
    };
    /// Asset glyph (◲)
    pub const ASSET: Glyph = Glyph {
        unicode: '◲',
        ascii: '@',
    };
    /// Generic item glyph (○)
    pub const GENERIC: Glyph = Glyph {
        unicode: '○',
        ascii: 'o',
    };
}

/// Glyph for an item kind
pub fn icon_glyph(kind: ItemKind) -> Glyph {
    match kind {
        ItemKind::Folder => items::FOLDER,
        ItemKind::Canvas => items::CANVAS,
        ItemKind::Stencil => items::STENCIL,
        ItemKind::Asset => items::ASSET,
        ItemKind::Generic => items::GENERIC,
    }
}
