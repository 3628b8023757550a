//! Theme system.
//!
//! Semantic color slots resolved to [`Rgba`] at draw time. The active theme
//! lives in a signal so switching presets re-runs the render effect like any
//! other state change.
//!
//! # Example
//!
//! ```rust
//! use monster_academy::theme::{active, set_theme};
//!
//! set_theme("dracula");
//! let theme = active();
//! let primary = theme.primary.resolve();
//! ```

use spark_signals::{signal, Signal};

use crate::types::Rgba;

pub mod presets;

pub use presets::{dracula, get_preset, gruvbox, nord, preset_names, terminal};

// =============================================================================
// ThemeColor
// =============================================================================

/// A theme color slot.
///
/// - `Default`: terminal's own color
/// - `Ansi(n)`: ANSI palette index (0-255), respects the user's terminal theme
/// - `Rgb(c)`: explicit truecolor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeColor {
    Default,
    Ansi(u8),
    Rgb(Rgba),
}

impl ThemeColor {
    /// Resolve to a concrete Rgba.
    pub fn resolve(&self) -> Rgba {
        match self {
            Self::Default => Rgba::TERMINAL_DEFAULT,
            Self::Ansi(i) => Rgba::ansi(*i),
            Self::Rgb(c) => *c,
        }
    }
}

impl Default for ThemeColor {
    fn default() -> Self {
        Self::Default
    }
}

impl From<u32> for ThemeColor {
    fn from(rgb: u32) -> Self {
        Self::Rgb(Rgba::from_rgb_int(rgb))
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Theme definition with the semantic colors the deck draws with.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Preset name (e.g. "dracula").
    pub name: &'static str,

    // Main palette
    pub primary: ThemeColor,
    pub secondary: ThemeColor,
    pub accent: ThemeColor,

    // Semantic
    pub success: ThemeColor,
    pub warning: ThemeColor,
    pub error: ThemeColor,

    // Text
    pub text: ThemeColor,
    pub text_muted: ThemeColor,
    pub text_bright: ThemeColor,

    // Surfaces
    pub background: ThemeColor,
    pub surface: ThemeColor,
    pub border: ThemeColor,
}

impl Default for Theme {
    fn default() -> Self {
        terminal()
    }
}

// =============================================================================
// Reactive active theme
// =============================================================================

thread_local! {
    static ACTIVE: Signal<Theme> = signal(Theme::default());
}

/// Get the current theme.
///
/// Reading this inside an effect creates a reactive dependency.
pub fn active() -> Theme {
    ACTIVE.with(|s| s.get())
}

/// Replace the active theme with a custom definition.
pub fn set_custom_theme(theme: Theme) {
    ACTIVE.with(|s| s.set(theme));
}

/// Switch to a named preset. Returns false if the name is unknown.
pub fn set_theme(name: &str) -> bool {
    match get_preset(name) {
        Some(theme) => {
            set_custom_theme(theme);
            true
        }
        None => false,
    }
}

/// Advance to the next preset in the catalog (wraps around).
pub fn cycle_theme() {
    let names = preset_names();
    let current = active().name;
    let pos = names.iter().position(|n| *n == current).unwrap_or(0);
    let next = names[(pos + 1) % names.len()];
    set_theme(next);
}

/// Reset to the default theme (for testing).
pub fn reset_theme_state() {
    set_custom_theme(Theme::default());
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        reset_theme_state();
    }

    #[test]
    fn test_default_is_terminal() {
        setup();
        assert_eq!(active().name, "terminal");
    }

    #[test]
    fn test_set_theme_known_preset() {
        setup();
        assert!(set_theme("dracula"));
        assert_eq!(active().name, "dracula");
    }

    #[test]
    fn test_set_theme_unknown_is_noop() {
        setup();
        assert!(!set_theme("no-such-theme"));
        assert_eq!(active().name, "terminal");
    }

    #[test]
    fn test_cycle_visits_every_preset_and_wraps() {
        setup();
        let names = preset_names();
        for expected in names.iter().skip(1) {
            cycle_theme();
            assert_eq!(active().name, *expected);
        }
        cycle_theme();
        assert_eq!(active().name, names[0]);
    }

    #[test]
    fn test_theme_color_resolve() {
        assert!(ThemeColor::Default.resolve().is_terminal_default());
        assert_eq!(ThemeColor::Ansi(3).resolve().ansi_index(), 3);
        assert_eq!(
            ThemeColor::from(0xff00ff).resolve(),
            Rgba::rgb(255, 0, 255)
        );
    }
}
