//! The presentation shell.
//!
//! Draws the whole frame from the deck state: header bar, the active
//! slide's viewport, and the footer with prev/next controls and one
//! progress dot per slide. Owns no state of its own - everything here is
//! derived from the controller, the registry and the theme.

use crate::app::Navigator;
use crate::deck::{self, SlideBody, SlideKind, TheoryContent, TipKind};
use crate::renderer::FrameBuffer;
use crate::slides::SlideView;
use crate::state::HitRegions;
use crate::text::{string_width, wrap_text};
use crate::theme::Theme;
use crate::types::{Attr, BorderStyle, Rect};

pub const DECK_TITLE: &str = "MONSTER OOP ACADEMY";
pub const DECK_VERSION: &str = "v2.0";

/// Below this the layout degrades into a resize prompt.
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 20;

/// Render one full frame.
pub fn render(
    frame: &mut FrameBuffer,
    nav: &Navigator,
    active: Option<&dyn SlideView>,
    theme: &Theme,
    hits: &mut HitRegions,
) {
    let width = frame.width();
    let height = frame.height();

    if width < MIN_WIDTH || height < MIN_HEIGHT {
        let prompt = format!("Please enlarge the terminal ({}x{} minimum)", MIN_WIDTH, MIN_HEIGHT);
        frame.draw_text_centered(
            0,
            height / 2,
            width,
            &prompt,
            theme.warning.resolve(),
            None,
            Attr::BOLD,
        );
        return;
    }

    let deck = nav.deck();
    let records = deck::slides();
    let index = deck.current();
    let record = &records[index];

    // =========================================================================
    // Header
    // =========================================================================

    frame.draw_text(
        1,
        0,
        &format!("👻 {} {}", DECK_TITLE, DECK_VERSION),
        theme.primary.resolve(),
        None,
        Attr::BOLD,
        None,
    );
    let position = format!(
        "Module {} • Slide {}/{}",
        deck.module_number(),
        index + 1,
        deck.slide_count()
    );
    frame.draw_text_right(
        0,
        0,
        width.saturating_sub(1),
        &position,
        theme.text_muted.resolve(),
        None,
        Attr::NONE,
    );
    frame.draw_hline(0, 1, width, '─', theme.border.resolve());

    // =========================================================================
    // Slide title block
    // =========================================================================

    frame.draw_text_centered(0, 3, width, record.title, theme.primary.resolve(), None, Attr::BOLD);
    let marker = match record.kind {
        SlideKind::Visual => "⚡",
        SlideKind::Theory => "</>",
        SlideKind::End => "★",
    };
    let subtitle = format!("{} {}", marker, record.subtitle.to_uppercase());
    frame.draw_text_centered(
        0,
        4,
        width,
        &subtitle,
        theme.text_muted.resolve(),
        None,
        Attr::NONE,
    );

    // =========================================================================
    // Viewport
    // =========================================================================

    let body = Rect::new(2, 6, width.saturating_sub(4), height.saturating_sub(9));
    match &record.body {
        SlideBody::Visual(_) => {
            if let Some(view) = active {
                view.render(frame, body, theme, hits);
            }
        }
        SlideBody::Theory(content) => render_theory(frame, body, content, theme),
    }

    // =========================================================================
    // Footer
    // =========================================================================

    frame.draw_hline(0, height - 3, width, '─', theme.border.resolve());
    let footer_y = height - 2;

    if deck.is_first() {
        frame.draw_text(2, footer_y, "◀ Prev", theme.text_muted.resolve().dim(0.5), None, Attr::DIM, None);
    } else {
        frame.draw_text(2, footer_y, "◀ Prev", theme.text.resolve(), None, Attr::BOLD, None);
        let nav = nav.clone();
        hits.push(Rect::new(2, footer_y, 6, 1), move || nav.prev());
    }

    let next_label = if deck.is_last() { "Finish ■" } else { "Next ▶" };
    let next_width = string_width(next_label) as u16;
    let next_x = width.saturating_sub(next_width + 2);
    if deck.is_last() {
        // Terminal no-op: the action is disabled, only the label changes
        frame.draw_text(next_x, footer_y, next_label, theme.text_muted.resolve().dim(0.5), None, Attr::DIM, None);
    } else {
        frame.draw_text(next_x, footer_y, next_label, theme.primary.resolve(), None, Attr::BOLD, None);
        let nav = nav.clone();
        hits.push(Rect::new(next_x, footer_y, next_width, 1), move || nav.next());
    }

    draw_progress_dots(frame, nav, footer_y, hits, theme);
}

/// One dot per slide; the current one is widened. Each dot is a direct-jump
/// click target.
fn draw_progress_dots(
    frame: &mut FrameBuffer,
    nav: &Navigator,
    y: u16,
    hits: &mut HitRegions,
    theme: &Theme,
) {
    let deck = nav.deck();
    let count = deck.slide_count();
    let current = deck.current();
    let dots_width = (count * 2) as u16;
    let width = frame.width();

    // Not enough room between the buttons; the header counter still shows
    // the position
    if dots_width + 24 > width {
        return;
    }

    let start_x = (width - dots_width) / 2;
    for i in 0..count {
        let x = start_x + (i * 2) as u16;
        let (glyph, color) = if i == current {
            ('●', theme.primary.resolve())
        } else {
            ('·', theme.text_muted.resolve())
        };
        frame.draw_char(x, y, glyph, color, None, Attr::NONE, None);

        let nav = nav.clone();
        hits.push(Rect::new(x, y, 2, 1), move || nav.go_to(i));
    }
}

/// Render a theory panel: wrapped paragraphs, bullets, a code block, and an
/// optional tip box.
fn render_theory(frame: &mut FrameBuffer, area: Rect, content: &TheoryContent, theme: &Theme) {
    let panel = area.centered_block(area.width.min(64), area.height, 0);
    frame.draw_border(panel, BorderStyle::Rounded, theme.border.resolve(), None);

    let inner = panel.inset(3, 1);
    let mut y = inner.y;
    let max_y = inner.bottom();
    let text_width = inner.width as usize;

    for paragraph in content.paragraphs {
        for line in wrap_text(paragraph, text_width) {
            if y >= max_y {
                return;
            }
            frame.draw_text(inner.x, y, &line, theme.text.resolve(), None, Attr::NONE, None);
            y += 1;
        }
        y += 1;
    }

    for bullet in content.bullets {
        let lines = wrap_text(bullet, text_width.saturating_sub(2));
        for (i, line) in lines.iter().enumerate() {
            if y >= max_y {
                return;
            }
            let prefix = if i == 0 { "• " } else { "  " };
            frame.draw_text(
                inner.x,
                y,
                &format!("{}{}", prefix, line),
                theme.text.resolve(),
                None,
                Attr::NONE,
                None,
            );
            y += 1;
        }
    }
    if !content.bullets.is_empty() {
        y += 1;
    }

    if let Some(code) = content.code {
        for line in code.lines() {
            if y >= max_y {
                return;
            }
            frame.draw_char(inner.x, y, '┃', theme.primary.resolve(), None, Attr::NONE, None);
            frame.draw_text(
                inner.x + 2,
                y,
                line,
                theme.success.resolve(),
                None,
                Attr::NONE,
                None,
            );
            y += 1;
        }
        y += 1;
    }

    if let Some(tip) = content.tip {
        let tip_color = match tip.kind {
            TipKind::Info => theme.accent.resolve(),
            TipKind::Warning => theme.error.resolve(),
            TipKind::Fun => theme.secondary.resolve(),
        };
        if y < max_y {
            frame.draw_text(
                inner.x,
                y,
                &format!("⚡ {}", tip.title),
                tip_color,
                None,
                Attr::BOLD,
                None,
            );
            y += 1;
        }
        for line in wrap_text(tip.body, text_width) {
            if y >= max_y {
                return;
            }
            frame.draw_text(
                inner.x,
                y,
                &line,
                theme.text_muted.resolve(),
                None,
                Attr::ITALIC,
                None,
            );
            y += 1;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
