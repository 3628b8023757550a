//! Raw ANSI escape sequences.
//!
//! Small helpers that write escape codes into any `Write`. The renderer
//! feeds these an [`OutputBuffer`](super::OutputBuffer) so the whole frame
//! goes out in one syscall.

use std::io::{self, Write};

use crate::types::{Attr, Rgba};

// =============================================================================
// Cursor
// =============================================================================

/// Move cursor to (x, y). Coordinates are 0-based; ANSI is 1-based.
pub fn cursor_to<W: Write>(w: &mut W, x: u16, y: u16) -> io::Result<()> {
    write!(w, "\x1b[{};{}H", y + 1, x + 1)
}

/// Hide the cursor.
pub fn cursor_hide<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[?25l")
}

/// Show the cursor.
pub fn cursor_show<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[?25h")
}

// =============================================================================
// Screen
// =============================================================================

/// Clear the screen and move cursor to home.
pub fn clear_screen<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[2J\x1b[H")
}

/// Enter the alternate screen buffer.
pub fn enter_alt_screen<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[?1049h")
}

/// Exit the alternate screen buffer.
pub fn exit_alt_screen<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[?1049l")
}

// =============================================================================
// Synchronized output
// =============================================================================

/// Begin a synchronized update block (DEC private mode 2026).
///
/// Terminals that support it hold output until end_sync, eliminating tearing.
/// Unsupported terminals ignore the sequence.
pub fn begin_sync<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[?2026h")
}

/// End a synchronized update block.
pub fn end_sync<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[?2026l")
}

// =============================================================================
// Colors and attributes
// =============================================================================

/// Reset all colors and attributes.
pub fn reset<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

/// Set the foreground color.
pub fn fg<W: Write>(w: &mut W, color: Rgba) -> io::Result<()> {
    if color.is_terminal_default() {
        w.write_all(b"\x1b[39m")
    } else if color.is_ansi() {
        write!(w, "\x1b[38;5;{}m", color.ansi_index())
    } else {
        write!(w, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
    }
}

/// Set the background color.
pub fn bg<W: Write>(w: &mut W, color: Rgba) -> io::Result<()> {
    if color.is_terminal_default() {
        w.write_all(b"\x1b[49m")
    } else if color.is_ansi() {
        write!(w, "\x1b[48;5;{}m", color.ansi_index())
    } else {
        write!(w, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
    }
}

/// Apply a set of text attributes.
pub fn attrs<W: Write>(w: &mut W, attr: Attr) -> io::Result<()> {
    if attr.contains(Attr::BOLD) {
        w.write_all(b"\x1b[1m")?;
    }
    if attr.contains(Attr::DIM) {
        w.write_all(b"\x1b[2m")?;
    }
    if attr.contains(Attr::ITALIC) {
        w.write_all(b"\x1b[3m")?;
    }
    if attr.contains(Attr::UNDERLINE) {
        w.write_all(b"\x1b[4m")?;
    }
    if attr.contains(Attr::INVERSE) {
        w.write_all(b"\x1b[7m")?;
    }
    if attr.contains(Attr::STRIKETHROUGH) {
        w.write_all(b"\x1b[9m")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_to_is_one_based() {
        let mut out = Vec::new();
        cursor_to(&mut out, 0, 0).unwrap();
        assert_eq!(out, b"\x1b[1;1H");
    }

    #[test]
    fn test_fg_variants() {
        let mut out = Vec::new();
        fg(&mut out, Rgba::TERMINAL_DEFAULT).unwrap();
        assert_eq!(out, b"\x1b[39m");

        out.clear();
        fg(&mut out, Rgba::ansi(12)).unwrap();
        assert_eq!(out, b"\x1b[38;5;12m");

        out.clear();
        fg(&mut out, Rgba::rgb(1, 2, 3)).unwrap();
        assert_eq!(out, b"\x1b[38;2;1;2;3m");
    }

    #[test]
    fn test_attrs_bold_italic() {
        let mut out = Vec::new();
        attrs(&mut out, Attr::BOLD | Attr::ITALIC).unwrap();
        assert_eq!(out, b"\x1b[1m\x1b[3m");
    }
}
