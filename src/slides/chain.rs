//! Slide 7: the order of creation.
//!
//! Chained timed reveal: the trigger sets step 1 (the base constructor
//! builds the skeleton); a watcher effect sees step 1 and schedules step 2
//! (the derived constructor adds the skin) after a fixed delay. The watcher
//! and the scheduled task both die with the view.

use std::rc::Rc;
use std::time::Duration;

use spark_signals::{effect, signal, Signal};

use super::{
    draw_button_centered, draw_button_disabled_centered, is_primary_key, EffectHandle, SlideView,
};
use crate::renderer::FrameBuffer;
use crate::state::keyboard::KeyboardEvent;
use crate::state::{HitRegions, TimerScope};
use crate::theme::Theme;
use crate::types::{Attr, BorderStyle, Rect};

/// Delay between the base and derived constructor steps.
pub const DERIVED_DELAY: Duration = Duration::from_millis(2000);

pub fn build() -> Box<dyn SlideView> {
    Box::new(ChainDemo::new())
}

/// Two-stage construction: skeleton first, skin second.
#[derive(Clone)]
pub struct ChainDemo {
    step: Signal<u8>,
    timers: TimerScope,
    _watch: Rc<EffectHandle>,
}

impl ChainDemo {
    pub fn new() -> Self {
        let step = signal(0u8);
        let timers = TimerScope::new();

        // Watch the step: only the 0 -> 1 transition arms the second stage.
        let watch = {
            let step = step.clone();
            let timers = timers.clone();
            effect(move || {
                if step.get() == 1 {
                    let step = step.clone();
                    timers.schedule(DERIVED_DELAY, move || {
                        step.set(2);
                    });
                }
            })
        };

        Self {
            step,
            timers,
            _watch: Rc::new(EffectHandle::new(watch)),
        }
    }

    pub fn step(&self) -> u8 {
        self.step.get()
    }

    /// `new Zombie()` - starts the chain. No re-entry.
    pub fn start(&self) {
        if self.step.get() == 0 {
            self.step.set(1);
        }
    }
}

impl Default for ChainDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideView for ChainDemo {
    fn render(&self, frame: &mut FrameBuffer, area: Rect, theme: &Theme, hits: &mut HitRegions) {
        let step = self.step.get();
        let scene = area.centered_block(44, 7, 0);

        let figure = if step >= 2 { "🧟" } else if step >= 1 { "💀" } else { " " };
        frame.draw_text_centered(
            scene.x,
            scene.y + 1,
            scene.width,
            figure,
            theme.text_bright.resolve(),
            None,
            Attr::BOLD,
        );

        if step >= 1 {
            let callout = Rect::new(scene.x, scene.y + 3, 21, 3);
            frame.draw_border(callout, BorderStyle::Single, theme.secondary.resolve(), None);
            frame.draw_text(
                callout.x + 1,
                callout.y + 1,
                "1. Base ctor: bones",
                theme.secondary.resolve(),
                None,
                Attr::NONE,
                None,
            );
        }
        if step >= 2 {
            let callout = Rect::new(scene.right().saturating_sub(21), scene.y + 3, 21, 3);
            frame.draw_border(callout, BorderStyle::Single, theme.success.resolve(), None);
            frame.draw_text(
                callout.x + 1,
                callout.y + 1,
                "2. Derived: the rot",
                theme.success.resolve(),
                None,
                Attr::NONE,
                None,
            );
        }

        let button_y = area.bottom().saturating_sub(2);
        match step {
            0 => {
                let demo = self.clone();
                draw_button_centered(
                    frame,
                    area,
                    button_y,
                    "new Zombie()",
                    theme.primary.resolve(),
                    hits,
                    move || demo.start(),
                );
            }
            1 => {
                draw_button_disabled_centered(
                    frame,
                    area,
                    button_y,
                    "Building base...",
                    theme.text.resolve(),
                );
            }
            _ => {
                draw_button_disabled_centered(
                    frame,
                    area,
                    button_y,
                    "Complete",
                    theme.success.resolve(),
                );
            }
        }
    }

    fn on_key(&self, event: &KeyboardEvent) -> bool {
        if is_primary_key(event) && self.step.get() == 0 {
            self.start();
            return true;
        }
        false
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
    fn test_start_sets_step_one_and_arms_step_two() {
        let demo = ChainDemo::new();
        assert_eq!(demo.step(), 0);
        assert_eq!(timer::pending_count(), 0, "nothing armed before the trigger");

        demo.start();
        assert_eq!(demo.step(), 1);
        assert_eq!(demo.timers.pending(), 1, "watcher armed the second stage");
    }

    #[test]
    fn test_step_two_fires_after_delay_only() {
        let demo = ChainDemo::new();
        let before = Instant::now();
        demo.start();

        timer::fire_due(before);
        assert_eq!(demo.step(), 1);

        timer::fire_due(Instant::now() + DERIVED_DELAY);
        assert_eq!(demo.step(), 2);
        assert_eq!(demo.timers.pending(), 0, "watcher does not re-arm at step 2");
    }

    #[test]
    fn test_restart_is_noop_once_running() {
        let demo = ChainDemo::new();
        demo.start();
        demo.start();
        assert_eq!(demo.timers.pending(), 1);
    }

    #[test]
    fn test_unmount_cancels_scheduled_step() {
        let demo = ChainDemo::new();
        let step = demo.step.clone();
        demo.start();

        drop(demo);
        assert_eq!(timer::pending_count(), 0, "cancelled on unmount");

        timer::fire_due(Instant::now() + DERIVED_DELAY + DERIVED_DELAY);
        assert_eq!(step.get(), 1, "no stale update after the view is gone");
    }
}
