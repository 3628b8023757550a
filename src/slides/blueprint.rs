//! Slide 1: the blueprint and the living object.
//!
//! Toggle-reveal machine: {unspawned, spawned}. Spawning swaps the class
//! card for the zombie it describes; resetting frees the "memory" again.

use spark_signals::{signal, Signal};

use super::{draw_button_centered, is_primary_key, SlideView};
use crate::renderer::FrameBuffer;
use crate::state::keyboard::KeyboardEvent;
use crate::state::HitRegions;
use crate::theme::Theme;
use crate::types::{Attr, BorderStyle, Rect};

pub fn build() -> Box<dyn SlideView> {
    Box::new(BlueprintDemo::new())
}

/// Class card vs. spawned monster.
#[derive(Clone)]
pub struct BlueprintDemo {
    created: Signal<bool>,
}

impl BlueprintDemo {
    pub fn new() -> Self {
        Self {
            created: signal(false),
        }
    }

    pub fn is_created(&self) -> bool {
        self.created.get()
    }

    /// `new Monster()` - a no-op once the object exists.
    pub fn spawn(&self) {
        if !self.created.get() {
            self.created.set(true);
        }
    }

    /// Free the object. Only meaningful in the spawned state.
    pub fn reset(&self) {
        if self.created.get() {
            self.created.set(false);
        }
    }
}

impl Default for BlueprintDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideView for BlueprintDemo {
    fn render(&self, frame: &mut FrameBuffer, area: Rect, theme: &Theme, hits: &mut HitRegions) {
        let button_y = area.bottom().saturating_sub(2);

        if !self.created.get() {
            // The class card
            let card = area.centered_block(26, 8, 1);
            frame.draw_border(card, BorderStyle::Dashed, theme.secondary.resolve(), None);
            frame.draw_text(
                card.x + 2,
                card.y + 1,
                "class Monster",
                theme.text_bright.resolve(),
                None,
                Attr::BOLD,
                None,
            );
            for (i, field) in ["int Hp;", "string Name;", "void Roar();"].iter().enumerate() {
                frame.draw_text(
                    card.x + 4,
                    card.y + 3 + i as u16,
                    field,
                    theme.text_muted.resolve(),
                    None,
                    Attr::NONE,
                    None,
                );
            }
            frame.draw_text_right(
                card.x,
                card.bottom().saturating_sub(2),
                card.width.saturating_sub(2),
                "Monster.cs",
                theme.text_muted.resolve(),
                None,
                Attr::DIM,
            );

            let demo = self.clone();
            draw_button_centered(
                frame,
                area,
                button_y,
                "⚡ SPAWN (new)",
                theme.primary.resolve(),
                hits,
                move || demo.spawn(),
            );
        } else {
            // The living object
            let stage = area.centered_block(26, 5, 2);
            frame.draw_text_centered(
                stage.x,
                stage.y,
                stage.width,
                "🧟",
                theme.success.resolve(),
                None,
                Attr::BOLD,
            );
            frame.draw_text_centered(
                stage.x,
                stage.y + 1,
                stage.width,
                "Heap: 0x2A",
                theme.accent.resolve(),
                None,
                Attr::NONE,
            );
            frame.draw_text_centered(
                stage.x,
                stage.y + 3,
                stage.width,
                "IT'S ALIVE!",
                theme.success.resolve(),
                None,
                Attr::BOLD,
            );

            let demo = self.clone();
            draw_button_centered(
                frame,
                area,
                button_y,
                "Reset Memory",
                theme.text_muted.resolve(),
                hits,
                move || demo.reset(),
            );
        }
    }

    fn on_key(&self, event: &KeyboardEvent) -> bool {
        if is_primary_key(event) && !self.created.get() {
            self.spawn();
            return true;
        }
        if event.key == "r" && self.created.get() {
            self.reset();
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

    #[test]
    fn test_starts_unspawned() {
        let demo = BlueprintDemo::new();
        assert!(!demo.is_created());
    }

    #[test]
    fn test_spawn_then_reset_round_trip() {
        let demo = BlueprintDemo::new();
        demo.spawn();
        assert!(demo.is_created());
        demo.reset();
        assert!(!demo.is_created());
    }

    #[test]
    fn test_spawn_is_noop_while_spawned() {
        let demo = BlueprintDemo::new();
        demo.spawn();
        demo.spawn();
        assert!(demo.is_created());
    }

    #[test]
    fn test_reset_is_noop_while_unspawned() {
        let demo = BlueprintDemo::new();
        demo.reset();
        assert!(!demo.is_created());
    }

    #[test]
    fn test_primary_key_spawns_and_consumes_once() {
        let demo = BlueprintDemo::new();
        assert!(demo.on_key(&KeyboardEvent::new(" ")));
        assert!(demo.is_created());
        // Spawned: the trigger affordance is gone
        assert!(!demo.on_key(&KeyboardEvent::new(" ")));
        assert!(demo.on_key(&KeyboardEvent::new("r")));
        assert!(!demo.is_created());
    }
}
