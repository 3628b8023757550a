//! The visual slides.
//!
//! One module per animated demo. Each view owns its signals and a
//! [`TimerScope`]; both die with the view when the learner navigates away,
//! so no scheduled transition can outlive its slide.
//!
//! Views are cheap to clone (signals and scopes are shared handles), which
//! is how click actions capture them: a button's closure holds a clone of
//! the view and calls the same method the keyboard path calls.

use crate::renderer::FrameBuffer;
use crate::state::keyboard::KeyboardEvent;
use crate::state::HitRegions;
use crate::text::string_width;
use crate::theme::Theme;
use crate::types::{Attr, Rect, Rgba};

pub mod abstractness;
pub mod blueprint;
pub mod chain;
pub mod chorus;
pub mod constructor;
pub mod hiding;
pub mod horde;
pub mod inheritance;
pub mod inventory;
pub mod overloading;

/// A mounted visual slide.
pub trait SlideView {
    /// Draw into the viewport area and register this frame's click targets.
    fn render(&self, frame: &mut FrameBuffer, area: Rect, theme: &Theme, hits: &mut HitRegions);

    /// Handle a slide-local key. Return true to consume the event.
    fn on_key(&self, event: &KeyboardEvent) -> bool {
        let _ = event;
        false
    }
}

/// True for the keys that trigger a slide's primary action.
pub(crate) fn is_primary_key(event: &KeyboardEvent) -> bool {
    event.key == " " || event.key == "Enter"
}

/// Stops a reactive effect when dropped.
///
/// Views that watch their own signals (the chained reveal does) hold one of
/// these so the watcher dies with the view.
pub(crate) struct EffectHandle {
    stop: Option<Box<dyn FnOnce()>>,
}

impl EffectHandle {
    pub fn new(stop: impl FnOnce() + 'static) -> Self {
        Self {
            stop: Some(Box::new(stop)),
        }
    }
}

impl Drop for EffectHandle {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            stop();
        }
    }
}

// =============================================================================
// Shared drawing helpers
// =============================================================================

/// Draw a clickable `[ label ]` button and register its hit region.
///
/// Returns the rect the button occupies.
pub(crate) fn draw_button(
    frame: &mut FrameBuffer,
    x: u16,
    y: u16,
    label: &str,
    fg: Rgba,
    hits: &mut HitRegions,
    action: impl Fn() + 'static,
) -> Rect {
    let text = format!("[ {} ]", label);
    frame.draw_text(x, y, &text, fg, None, Attr::BOLD, None);
    let rect = Rect::new(x, y, string_width(&text) as u16, 1);
    hits.push(rect, action);
    rect
}

/// Draw a disabled `[ label ]` button (dimmed, no hit region).
pub(crate) fn draw_button_disabled(
    frame: &mut FrameBuffer,
    x: u16,
    y: u16,
    label: &str,
    fg: Rgba,
) -> Rect {
    let text = format!("[ {} ]", label);
    frame.draw_text(x, y, &text, fg.dim(0.5), None, Attr::DIM, None);
    Rect::new(x, y, string_width(&text) as u16, 1)
}

/// Centered variant of [`draw_button`].
pub(crate) fn draw_button_centered(
    frame: &mut FrameBuffer,
    area: Rect,
    y: u16,
    label: &str,
    fg: Rgba,
    hits: &mut HitRegions,
    action: impl Fn() + 'static,
) -> Rect {
    let width = string_width(label) as u16 + 4;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    draw_button(frame, x, y, label, fg, hits, action)
}

/// Centered variant of [`draw_button_disabled`].
pub(crate) fn draw_button_disabled_centered(
    frame: &mut FrameBuffer,
    area: Rect,
    y: u16,
    label: &str,
    fg: Rgba,
) -> Rect {
    let width = string_width(label) as u16 + 4;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    draw_button_disabled(frame, x, y, label, fg)
}
