//! Theme presets.
//!
//! - terminal (default - uses ANSI colors so the user's terminal theme wins)
//! - dracula
//! - nord
//! - gruvbox

use super::{Theme, ThemeColor};
use crate::types::Rgba;

/// Names of all built-in presets, in cycle order.
pub fn preset_names() -> &'static [&'static str] {
    &["terminal", "dracula", "nord", "gruvbox"]
}

/// Look up a preset by name.
pub fn get_preset(name: &str) -> Option<Theme> {
    match name {
        "terminal" => Some(terminal()),
        "dracula" => Some(dracula()),
        "nord" => Some(nord()),
        "gruvbox" => Some(gruvbox()),
        _ => None,
    }
}

/// Terminal theme - ANSI colors, respects the user's terminal scheme.
pub fn terminal() -> Theme {
    Theme {
        name: "terminal",
        primary: ThemeColor::Ansi(13),  // bright magenta
        secondary: ThemeColor::Ansi(12), // bright blue
        accent: ThemeColor::Ansi(11),   // bright yellow
        success: ThemeColor::Ansi(2),
        warning: ThemeColor::Ansi(3),
        error: ThemeColor::Ansi(1),
        text: ThemeColor::Default,
        text_muted: ThemeColor::Ansi(8),
        text_bright: ThemeColor::Ansi(15),
        background: ThemeColor::Default,
        surface: ThemeColor::Default,
        border: ThemeColor::Ansi(7),
    }
}

/// Dracula - the deck's signature dark look, matching the original's purple
/// and pink palette.
pub fn dracula() -> Theme {
    Theme {
        name: "dracula",
        primary: ThemeColor::Rgb(Rgba::from_rgb_int(0xbd93f9)),
        secondary: ThemeColor::Rgb(Rgba::from_rgb_int(0xff79c6)),
        accent: ThemeColor::Rgb(Rgba::from_rgb_int(0xf1fa8c)),
        success: ThemeColor::Rgb(Rgba::from_rgb_int(0x50fa7b)),
        warning: ThemeColor::Rgb(Rgba::from_rgb_int(0xffb86c)),
        error: ThemeColor::Rgb(Rgba::from_rgb_int(0xff5555)),
        text: ThemeColor::Rgb(Rgba::from_rgb_int(0xf8f8f2)),
        text_muted: ThemeColor::Rgb(Rgba::from_rgb_int(0x6272a4)),
        text_bright: ThemeColor::Rgb(Rgba::from_rgb_int(0xffffff)),
        background: ThemeColor::Rgb(Rgba::from_rgb_int(0x282a36)),
        surface: ThemeColor::Rgb(Rgba::from_rgb_int(0x343746)),
        border: ThemeColor::Rgb(Rgba::from_rgb_int(0x6272a4)),
    }
}

/// Nord - arctic, bluish colors.
pub fn nord() -> Theme {
    Theme {
        name: "nord",
        primary: ThemeColor::Rgb(Rgba::from_rgb_int(0x88c0d0)),
        secondary: ThemeColor::Rgb(Rgba::from_rgb_int(0x81a1c1)),
        accent: ThemeColor::Rgb(Rgba::from_rgb_int(0xd08770)),
        success: ThemeColor::Rgb(Rgba::from_rgb_int(0xa3be8c)),
        warning: ThemeColor::Rgb(Rgba::from_rgb_int(0xebcb8b)),
        error: ThemeColor::Rgb(Rgba::from_rgb_int(0xbf616a)),
        text: ThemeColor::Rgb(Rgba::from_rgb_int(0xd8dee9)),
        text_muted: ThemeColor::Rgb(Rgba::from_rgb_int(0x4c566a)),
        text_bright: ThemeColor::Rgb(Rgba::from_rgb_int(0xeceff4)),
        background: ThemeColor::Rgb(Rgba::from_rgb_int(0x2e3440)),
        surface: ThemeColor::Rgb(Rgba::from_rgb_int(0x3b4252)),
        border: ThemeColor::Rgb(Rgba::from_rgb_int(0x4c566a)),
    }
}

/// Gruvbox - retro warm colors.
pub fn gruvbox() -> Theme {
    Theme {
        name: "gruvbox",
        primary: ThemeColor::Rgb(Rgba::from_rgb_int(0xd3869b)),
        secondary: ThemeColor::Rgb(Rgba::from_rgb_int(0x83a598)),
        accent: ThemeColor::Rgb(Rgba::from_rgb_int(0xfabd2f)),
        success: ThemeColor::Rgb(Rgba::from_rgb_int(0xb8bb26)),
        warning: ThemeColor::Rgb(Rgba::from_rgb_int(0xfe8019)),
        error: ThemeColor::Rgb(Rgba::from_rgb_int(0xfb4934)),
        text: ThemeColor::Rgb(Rgba::from_rgb_int(0xebdbb2)),
        text_muted: ThemeColor::Rgb(Rgba::from_rgb_int(0x928374)),
        text_bright: ThemeColor::Rgb(Rgba::from_rgb_int(0xfbf1c7)),
        background: ThemeColor::Rgb(Rgba::from_rgb_int(0x282828)),
        surface: ThemeColor::Rgb(Rgba::from_rgb_int(0x3c3836)),
        border: ThemeColor::Rgb(Rgba::from_rgb_int(0x665c54)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_resolves() {
        for name in preset_names() {
            let theme = get_preset(name).expect("preset exists");
            assert_eq!(theme.name, *name);
            // Every slot must resolve without panicking
            let _ = theme.primary.resolve();
            let _ = theme.background.resolve();
            let _ = theme.text_muted.resolve();
        }
    }

    #[test]
    fn test_unknown_preset_is_none() {
        assert!(get_preset("monokai-pro-extra").is_none());
    }
}
