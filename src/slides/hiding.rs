//! Slide 11: the sword dilemma.
//!
//! Exclusive choice with a static mapping: two mutually exclusive options
//! (override vs new), each deterministically mapped to an outcome line in
//! the upcasting snippet below. No timers.

use spark_signals::{signal, Signal};

use super::SlideView;
use crate::renderer::FrameBuffer;
use crate::state::keyboard::KeyboardEvent;
use crate::state::HitRegions;
use crate::theme::Theme;
use crate::types::{Attr, BorderStyle, Rect};

pub fn build() -> Box<dyn SlideView> {
    Box::new(HidingDemo::new())
}

/// Which keyword the child class used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    Unset,
    Override,
    New,
}

impl Choice {
    /// What `m.Attack()` prints when the child is viewed as a Monster.
    pub fn output(self) -> &'static str {
        match self {
            Self::Unset => "Waiting for selection...",
            Self::Override => "> Output: SLASH! (the child's method)",
            Self::New => "> Output: BONK! (the parent's method)",
        }
    }
}

/// The upcasting trap, interactively.
#[derive(Clone)]
pub struct HidingDemo {
    choice: Signal<Choice>,
}

impl HidingDemo {
    pub fn new() -> Self {
        Self {
            choice: signal(Choice::Unset),
        }
    }

    pub fn choice(&self) -> Choice {
        self.choice.get()
    }

    pub fn select(&self, choice: Choice) {
        self.choice.set(choice);
    }
}

impl Default for HidingDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideView for HidingDemo {
    fn render(&self, frame: &mut FrameBuffer, area: Rect, theme: &Theme, hits: &mut HitRegions) {
        let choice = self.choice.get();
        let half = area.width / 2;

        // Left panel: virtual / override
        let left = Rect::new(area.x + 1, area.y, half.saturating_sub(2), 6);
        let left_active = choice == Choice::Override;
        let left_color = if left_active {
            theme.success.resolve()
        } else {
            theme.border.resolve()
        };
        frame.draw_border(left, BorderStyle::Rounded, left_color, None);
        frame.draw_text_centered(left.x, left.y + 1, left.width, "virtual / override", theme.text_muted.resolve(), None, Attr::NONE);
        frame.draw_text_centered(
            left.x,
            left.y + 2,
            left.width,
            "The Sharpened Sword",
            theme.success.resolve(),
            None,
            Attr::BOLD,
        );
        let left_icon = if left_active { "🗡" } else { "⚔" };
        frame.draw_text_centered(left.x, left.y + 3, left.width, left_icon, theme.text_bright.resolve(), None, Attr::BOLD);
        frame.draw_text_centered(
            left.x,
            left.y + 4,
            left.width,
            "every Monster sees it sharp (1)",
            theme.text_muted.resolve(),
            None,
            Attr::DIM,
        );
        let demo = self.clone();
        hits.push(left, move || demo.select(Choice::Override));

        // Right panel: new (hiding)
        let right = Rect::new(area.x + half + 1, area.y, half.saturating_sub(2), 6);
        let right_active = choice == Choice::New;
        let right_color = if right_active {
            theme.error.resolve()
        } else {
            theme.border.resolve()
        };
        frame.draw_border(right, BorderStyle::Rounded, right_color, None);
        frame.draw_text_centered(right.x, right.y + 1, right.width, "new (hiding)", theme.text_muted.resolve(), None, Attr::NONE);
        frame.draw_text_centered(
            right.x,
            right.y + 2,
            right.width,
            "A Brand-New Wand",
            theme.error.resolve(),
            None,
            Attr::BOLD,
        );
        let right_icon = if right_active { "🪄" } else { "⚔" };
        frame.draw_text_centered(right.x, right.y + 3, right.width, right_icon, theme.text_bright.resolve(), None, Attr::BOLD);
        frame.draw_text_centered(
            right.x,
            right.y + 4,
            right.width,
            "the parent uses the old sword (2)",
            theme.text_muted.resolve(),
            None,
            Attr::DIM,
        );
        let demo = self.clone();
        hits.push(right, move || demo.select(Choice::New));

        // Upcasting snippet and outcome
        let code_row = area.height.saturating_sub(5).min(7);
        let code = area.centered_block(46, 5, code_row);
        frame.draw_border(code, BorderStyle::Single, theme.border.resolve(), None);
        frame.draw_text(
            code.x + 2,
            code.y + 1,
            "Monster m = new Child();",
            theme.text.resolve(),
            None,
            Attr::NONE,
            None,
        );
        frame.draw_text(
            code.x + 2,
            code.y + 2,
            "m.Attack();",
            theme.text.resolve(),
            None,
            Attr::NONE,
            None,
        );
        let outcome_color = match choice {
            Choice::Unset => theme.text_muted.resolve(),
            Choice::Override => theme.success.resolve(),
            Choice::New => theme.warning.resolve(),
        };
        frame.draw_text(
            code.x + 2,
            code.y + 3,
            choice.output(),
            outcome_color,
            None,
            Attr::BOLD,
            None,
        );
    }

    fn on_key(&self, event: &KeyboardEvent) -> bool {
        match event.key.as_str() {
            "1" => {
                self.select(Choice::Override);
                true
            }
            "2" => {
                self.select(Choice::New);
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

    #[test]
    fn test_starts_unset() {
        let demo = HidingDemo::new();
        assert_eq!(demo.choice(), Choice::Unset);
        assert_eq!(demo.choice().output(), "Waiting for selection...");
    }

    #[test]
    fn test_choices_are_mutually_exclusive() {
        let demo = HidingDemo::new();
        demo.select(Choice::Override);
        assert_eq!(demo.choice(), Choice::Override);
        demo.select(Choice::New);
        assert_eq!(demo.choice(), Choice::New);
    }

    #[test]
    fn test_static_outcome_mapping() {
        assert!(Choice::Override.output().contains("SLASH"));
        assert!(Choice::New.output().contains("BONK"));
    }

    #[test]
    fn test_number_keys_select() {
        let demo = HidingDemo::new();
        assert!(demo.on_key(&KeyboardEvent::new("1")));
        assert_eq!(demo.choice(), Choice::Override);
        assert!(demo.on_key(&KeyboardEvent::new("2")));
        assert_eq!(demo.choice(), Choice::New);
        assert!(!demo.on_key(&KeyboardEvent::new("3")));
    }
}
