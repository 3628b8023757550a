//! Slide 15: the phantom blueprint.
//!
//! Trying to instantiate the abstract class fails loudly: every attempt
//! bumps a counter and flashes the error line for a moment. The concrete
//! subclass, by contrast, can be equipped into the inventory.

use std::time::Duration;

use spark_signals::{signal, Signal};

use super::SlideView;
use crate::renderer::FrameBuffer;
use crate::state::keyboard::KeyboardEvent;
use crate::state::{HitRegions, TimerScope};
use crate::theme::Theme;
use crate::types::{Attr, BorderStyle, Rect};

/// How long the error line stays highlighted after an attempt.
pub const ERROR_FLASH: Duration = Duration::from_millis(400);

pub fn build() -> Box<dyn SlideView> {
    Box::new(AbstractDemo::new())
}

/// Abstract base vs. concrete subclass.
#[derive(Clone)]
pub struct AbstractDemo {
    attempts: Signal<u32>,
    flash: Signal<bool>,
    equipped: Signal<bool>,
    timers: TimerScope,
}

impl AbstractDemo {
    pub fn new() -> Self {
        Self {
            attempts: signal(0),
            flash: signal(false),
            equipped: signal(false),
            timers: TimerScope::new(),
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts.get()
    }

    pub fn is_flashing(&self) -> bool {
        self.flash.get()
    }

    pub fn is_equipped(&self) -> bool {
        self.equipped.get()
    }

    /// `new Item()` - always fails, always flashes.
    pub fn try_instantiate(&self) {
        self.attempts.set(self.attempts.get() + 1);
        self.flash.set(true);

        // A fresh attempt restarts the flash window.
        self.timers.cancel_all();
        let flash = self.flash.clone();
        self.timers.schedule(ERROR_FLASH, move || {
            flash.set(false);
        });
    }

    /// `new Sword()` - perfectly legal.
    pub fn equip(&self) {
        self.equipped.set(true);
    }
}

impl Default for AbstractDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideView for AbstractDemo {
    fn render(&self, frame: &mut FrameBuffer, area: Rect, theme: &Theme, hits: &mut HitRegions) {
        let half = area.width / 2;

        // Abstract class, unobtainable
        let left = Rect::new(area.x + 2, area.y, half.saturating_sub(4), 6);
        frame.draw_border(left, BorderStyle::Dashed, theme.text_muted.resolve(), None);
        frame.draw_text_centered(left.x, left.y + 1, left.width, "👻", theme.text_muted.resolve(), None, Attr::DIM);
        frame.draw_text_centered(
            left.x,
            left.y + 2,
            left.width,
            "ABSTRACT",
            theme.text_muted.resolve(),
            None,
            Attr::BOLD,
        );
        frame.draw_text_centered(
            left.x,
            left.y + 3,
            left.width,
            "class Item",
            theme.text_muted.resolve(),
            None,
            Attr::NONE,
        );
        frame.draw_text_centered(
            left.x,
            left.y + 4,
            left.width,
            "try to instantiate (1)",
            theme.text_muted.resolve(),
            None,
            Attr::DIM,
        );
        let demo = self.clone();
        hits.push(left, move || demo.try_instantiate());

        // Concrete subclass, ready to use
        let right = Rect::new(area.x + half + 2, area.y, half.saturating_sub(4), 6);
        let right_color = if self.equipped.get() {
            theme.success.resolve()
        } else {
            theme.border.resolve()
        };
        frame.draw_border(right, BorderStyle::Rounded, right_color, None);
        frame.draw_text_centered(right.x, right.y + 1, right.width, "🗡", theme.text_bright.resolve(), None, Attr::BOLD);
        frame.draw_text_centered(
            right.x,
            right.y + 3,
            right.width,
            "class Sword : Item",
            theme.success.resolve(),
            None,
            Attr::NONE,
        );
        frame.draw_text_centered(
            right.x,
            right.y + 4,
            right.width,
            "equip it (2)",
            theme.text_muted.resolve(),
            None,
            Attr::DIM,
        );
        let demo = self.clone();
        hits.push(right, move || demo.equip());

        // Error line for failed instantiations
        if self.attempts.get() > 0 {
            let color = if self.flash.get() {
                theme.error.resolve()
            } else {
                theme.error.resolve().dim(0.6)
            };
            frame.draw_text_centered(
                area.x,
                area.y + 7,
                area.width,
                "Error: cannot instantiate an abstract class!",
                color,
                None,
                Attr::BOLD,
            );
        }

        // Inventory readout
        let inventory = if self.equipped.get() {
            "Inventory: Sword (valid)"
        } else {
            "Inventory: empty"
        };
        let inv_color = if self.equipped.get() {
            theme.success.resolve()
        } else {
            theme.text_muted.resolve()
        };
        frame.draw_text_centered(
            area.x,
            area.y + 9,
            area.width,
            inventory,
            inv_color,
            None,
            Attr::NONE,
        );
    }

    fn on_key(&self, event: &KeyboardEvent) -> bool {
        match event.key.as_str() {
            "1" | "a" => {
                self.try_instantiate();
                true
            }
            "2" | "s" => {
                self.equip();
                true
            }
            _ => false,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::timer;
    use std::time::Instant;

    #[test]
    fn test_instantiation_always_fails_and_counts() {
        let demo = AbstractDemo::new();
        demo.try_instantiate();
        demo.try_instantiate();
        assert_eq!(demo.attempts(), 2);
        assert!(!demo.is_equipped());
    }

    #[test]
    fn test_flash_clears_after_window() {
        let demo = AbstractDemo::new();
        demo.try_instantiate();
        assert!(demo.is_flashing());

        timer::fire_due(Instant::now() + ERROR_FLASH);
        assert!(!demo.is_flashing());
        assert_eq!(demo.attempts(), 1, "the error line itself stays");
    }

    #[test]
    fn test_rapid_attempts_keep_one_clear_scheduled() {
        let demo = AbstractDemo::new();
        demo.try_instantiate();
        demo.try_instantiate();
        assert_eq!(demo.timers.pending(), 1, "flash window restarts, not stacks");
    }

    #[test]
    fn test_equip_concrete_class() {
        let demo = AbstractDemo::new();
        demo.equip();
        assert!(demo.is_equipped());
    }

    #[test]
    fn test_unmount_cancels_flash_clear() {
        let demo = AbstractDemo::new();
        let flash = demo.flash.clone();
        demo.try_instantiate();

        drop(demo);
        timer::fire_due(Instant::now() + ERROR_FLASH + ERROR_FLASH);
        assert!(flash.get(), "no stale clear after unmount");
    }
}
