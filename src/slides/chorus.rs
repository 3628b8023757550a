//! Slide 9: the talent show.
//!
//! Transient broadcast: one `Sing()` call fans out to every monster at
//! once - each answers in its own voice - and the performance auto-resets
//! after a fixed delay. Re-triggering is disabled while they sing.

use std::time::Duration;

use spark_signals::{signal, Signal};

use super::{draw_button_centered, draw_button_disabled_centered, is_primary_key, SlideView};
use crate::renderer::FrameBuffer;
use crate::state::keyboard::KeyboardEvent;
use crate::state::{HitRegions, TimerScope};
use crate::theme::Theme;
use crate::types::{Attr, Rect, Rgba};

/// How long the chorus lasts.
pub const SING_DURATION: Duration = Duration::from_millis(2000);

/// The fixed cast: icon, name, and each one's own rendition of Sing().
pub const CAST: [(&str, &str, &str); 3] = [
    ("🐺", "Wolf", "Hooooowl!"),
    ("🧛", "Vampire", "Hiss!"),
    ("👻", "Ghost", "Boooo!"),
];

pub fn build() -> Box<dyn SlideView> {
    Box::new(ChorusDemo::new())
}

/// One command, three behaviors.
#[derive(Clone)]
pub struct ChorusDemo {
    singing: Signal<bool>,
    timers: TimerScope,
}

impl ChorusDemo {
    pub fn new() -> Self {
        Self {
            singing: signal(false),
            timers: TimerScope::new(),
        }
    }

    pub fn is_singing(&self) -> bool {
        self.singing.get()
    }

    /// `monster.Sing()` on the whole cast. No-op while the chorus is live.
    pub fn sing(&self) {
        if self.singing.get() {
            return;
        }
        self.singing.set(true);

        let singing = self.singing.clone();
        self.timers
            .schedule(SING_DURATION, move || {
                singing.set(false);
            });
    }
}

impl Default for ChorusDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideView for ChorusDemo {
    fn render(&self, frame: &mut FrameBuffer, area: Rect, theme: &Theme, hits: &mut HitRegions) {
        let singing = self.singing.get();
        let voices: [Rgba; 3] = [
            theme.secondary.resolve(),
            theme.error.resolve(),
            theme.text_bright.resolve(),
        ];

        let slot = area.width / 3;
        for (i, (icon, name, sound)) in CAST.iter().enumerate() {
            let x = area.x + i as u16 * slot;

            if singing {
                let bubble = format!("({})", sound);
                frame.draw_text_centered(x, area.y, slot, &bubble, voices[i], None, Attr::BOLD);
            }
            frame.draw_text_centered(x, area.y + 2, slot, icon, voices[i], None, Attr::BOLD);
            frame.draw_text_centered(
                x,
                area.y + 3,
                slot,
                name,
                theme.text.resolve(),
                None,
                Attr::NONE,
            );
        }

        frame.draw_text_centered(
            area.x,
            area.y + 5,
            area.width,
            "3 different monsters, 1 command (run-time decision)",
            theme.text_muted.resolve(),
            None,
            Attr::ITALIC,
        );

        let button_y = area.bottom().saturating_sub(2);
        if singing {
            draw_button_disabled_centered(
                frame,
                area,
                button_y,
                "🎤 monster.Sing()",
                theme.text.resolve(),
            );
        } else {
            let demo = self.clone();
            draw_button_centered(
                frame,
                area,
                button_y,
                "🎤 monster.Sing()",
                theme.primary.resolve(),
                hits,
                move || demo.sing(),
            );
        }
    }

    fn on_key(&self, event: &KeyboardEvent) -> bool {
        if (is_primary_key(event) || event.key == "s") && !self.singing.get() {
            self.sing();
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
    fn test_sing_broadcasts_then_auto_resets() {
        let demo = ChorusDemo::new();
        assert!(!demo.is_singing());

        let before = Instant::now();
        demo.sing();
        assert!(demo.is_singing(), "all bubbles show at once");

        timer::fire_due(before);
        assert!(demo.is_singing(), "not before the delay elapses");

        timer::fire_due(Instant::now() + SING_DURATION);
        assert!(!demo.is_singing(), "auto-reset");
    }

    #[test]
    fn test_retrigger_disabled_while_singing() {
        let demo = ChorusDemo::new();
        demo.sing();
        demo.sing();
        assert_eq!(demo.timers.pending(), 1, "one reset scheduled, not two");
    }

    #[test]
    fn test_can_sing_again_after_reset() {
        let demo = ChorusDemo::new();
        demo.sing();
        timer::fire_due(Instant::now() + SING_DURATION);
        demo.sing();
        assert!(demo.is_singing());
    }

    #[test]
    fn test_unmount_cancels_reset() {
        let demo = ChorusDemo::new();
        let singing = demo.singing.clone();
        demo.sing();

        drop(demo);
        timer::fire_due(Instant::now() + SING_DURATION + SING_DURATION);
        assert!(singing.get(), "stale reset never applied");
    }
}
