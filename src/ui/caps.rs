//! Host capability detection
//!
//! The desktop client styles the empty-state action row only on platform
//! versions that support it; the terminal equivalent is a capability flag
//! queried at render time. Rendering code takes [`HostCaps`] by reference so
//! tests can pin either profile.

/// Render capabilities of the hosting terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCaps {
    /// Unicode glyphs are available (ASCII fallback otherwise)
    pub unicode_symbols: bool,
    /// Action rows may use the accessory (inverse-video pill) style
    pub accessory_actions: bool,
}

impl HostCaps {
    /// Full capability profile (unicode glyphs, styled action rows)
    pub const fn full() -> Self {
        Self {
            unicode_symbols: true,
            accessory_actions: true,
        }
    }

    /// Plain profile (ASCII glyphs, unstyled action rows)
    pub const fn plain() -> Self {
        Self {
            unicode_symbols: false,
            accessory_actions: false,
        }
    }

    /// Detect capabilities from the environment.
    ///
    /// `TERM=dumb` (or unset) selects the plain profile. Otherwise unicode
    /// support follows the locale; such terminals also get the accessory
    /// style.
    pub fn detect() -> Self {
        let term = std::env::var("TERM").unwrap_or_default();
        if term.is_empty() || term == "dumb" {
            return Self::plain();
        }

        let locale = std::env::var("LC_ALL")
            .or_else(|_| std::env::var("LC_CTYPE"))
            .or_else(|_| std::env::var("LANG"))
            .unwrap_or_default();
        let unicode = locale.to_ascii_uppercase().contains("UTF-8")
            || locale.to_ascii_uppercase().contains("UTF8");

        Self {
            unicode_symbols: unicode,
            accessory_actions: true,
        }
    }
}

impl Default for HostCaps {
    fn default() -> Self {
        Self::full()
    }
}
