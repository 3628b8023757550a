//! Slide 3: Frankenstein's laboratory.
//!
//! Timed-sequence machine: Idle -> Assembling (immediate on trigger) ->
//! Alive after a fixed delay. The trigger is disabled once the sequence has
//! left Idle, and the delayed transition is scope-cancelled if the slide
//! unmounts before the spark lands.

use std::time::Duration;

use spark_signals::{signal, Signal};

use super::{draw_button_centered, draw_button_disabled_centered, is_primary_key, SlideView};
use crate::renderer::FrameBuffer;
use crate::state::keyboard::KeyboardEvent;
use crate::state::{HitRegions, TimerScope};
use crate::theme::Theme;
use crate::types::{Attr, BorderStyle, Rect};

/// Delay between assembly and the lightning strike.
pub const ASSEMBLY_DELAY: Duration = Duration::from_millis(1200);

pub fn build() -> Box<dyn SlideView> {
    Box::new(ConstructorDemo::new())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Assembling,
    Alive,
}

/// The constructor as a laboratory scene.
#[derive(Clone)]
pub struct ConstructorDemo {
    stage: Signal<Stage>,
    timers: TimerScope,
}

impl ConstructorDemo {
    pub fn new() -> Self {
        Self {
            stage: signal(Stage::Idle),
            timers: TimerScope::new(),
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage.get()
    }

    /// Run the constructor. No re-entry once the sequence has started.
    pub fn assemble(&self) {
        if self.stage.get() != Stage::Idle {
            return;
        }
        self.stage.set(Stage::Assembling);

        let stage = self.stage.clone();
        self.timers
            .schedule(ASSEMBLY_DELAY, move || {
                stage.set(Stage::Alive);
            });
    }
}

impl Default for ConstructorDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideView for ConstructorDemo {
    fn render(&self, frame: &mut FrameBuffer, area: Rect, theme: &Theme, hits: &mut HitRegions) {
        let stage = self.stage.get();
        let scene = area.centered_block(34, 8, 1);

        match stage {
            Stage::Idle => {
                frame.draw_text_centered(
                    scene.x,
                    scene.y + 2,
                    scene.width,
                    "· · · parts on the slab · · ·",
                    theme.text_muted.resolve(),
                    None,
                    Attr::DIM,
                );
            }
            Stage::Assembling => {
                frame.draw_text_centered(
                    scene.x,
                    scene.y,
                    scene.width,
                    "⚡",
                    theme.accent.resolve(),
                    None,
                    Attr::BOLD,
                );
                frame.draw_text_centered(
                    scene.x,
                    scene.y + 2,
                    scene.width,
                    "🧟",
                    theme.text.resolve(),
                    None,
                    Attr::DIM,
                );
                frame.draw_text_centered(
                    scene.x,
                    scene.y + 4,
                    scene.width,
                    "bolting limbs in place...",
                    theme.text_muted.resolve(),
                    None,
                    Attr::ITALIC,
                );
            }
            Stage::Alive => {
                frame.draw_text_centered(
                    scene.x,
                    scene.y,
                    scene.width,
                    "🧟",
                    theme.success.resolve(),
                    None,
                    Attr::BOLD,
                );
                let readout = scene.centered_block(20, 4, 2);
                frame.draw_border(readout, BorderStyle::Single, theme.success.resolve(), None);
                frame.draw_text(
                    readout.x + 2,
                    readout.y + 1,
                    "HP = 100;",
                    theme.success.resolve(),
                    None,
                    Attr::NONE,
                    None,
                );
                frame.draw_text(
                    readout.x + 2,
                    readout.y + 2,
                    "Name = \"Frank\";",
                    theme.success.resolve(),
                    None,
                    Attr::NONE,
                    None,
                );
            }
        }

        let button_y = area.bottom().saturating_sub(2);
        match stage {
            Stage::Idle => {
                let demo = self.clone();
                draw_button_centered(
                    frame,
                    area,
                    button_y,
                    "Activate Constructor()",
                    theme.primary.resolve(),
                    hits,
                    move || demo.assemble(),
                );
            }
            Stage::Assembling => {
                draw_button_disabled_centered(
                    frame,
                    area,
                    button_y,
                    "Assembling...",
                    theme.text.resolve(),
                );
            }
            Stage::Alive => {
                draw_button_disabled_centered(
                    frame,
                    area,
                    button_y,
                    "IT'S ALIVE!",
                    theme.success.resolve(),
                );
            }
        }
    }

    fn on_key(&self, event: &KeyboardEvent) -> bool {
        if is_primary_key(event) && self.stage.get() == Stage::Idle {
            self.assemble();
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
    fn test_trigger_enters_assembling_synchronously() {
        let demo = ConstructorDemo::new();
        assert_eq!(demo.stage(), Stage::Idle);

        demo.assemble();
        assert_eq!(demo.stage(), Stage::Assembling, "no waiting for the timer");
    }

    #[test]
    fn test_alive_only_after_delay() {
        let demo = ConstructorDemo::new();
        let before = Instant::now();
        demo.assemble();

        // Not yet: the deadline is ASSEMBLY_DELAY past the trigger
        timer::fire_due(before);
        assert_eq!(demo.stage(), Stage::Assembling);

        timer::fire_due(Instant::now() + ASSEMBLY_DELAY);
        assert_eq!(demo.stage(), Stage::Alive);
    }

    #[test]
    fn test_retrigger_is_noop_mid_sequence() {
        let demo = ConstructorDemo::new();
        demo.assemble();
        demo.assemble();
        assert_eq!(demo.timers.pending(), 1, "no second transition queued");
    }

    #[test]
    fn test_unmount_cancels_the_pending_transition() {
        let demo = ConstructorDemo::new();
        let stage = demo.stage.clone();
        demo.assemble();
        assert_eq!(demo.timers.pending(), 1);

        drop(demo);
        timer::fire_due(Instant::now() + ASSEMBLY_DELAY + ASSEMBLY_DELAY);
        assert_eq!(stage.get(), Stage::Assembling, "state 2 never applied after unmount");
    }
}
