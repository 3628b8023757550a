//! Slide 17: the monster chef.
//!
//! Exclusive choice with a static mapping: three overloads of `Cook`, each
//! deterministically mapped to a dish. Picking one shows the pan on fire
//! for a moment before the dish appears - the "dispatch" is staged, but the
//! mapping is fixed at compile time.

use std::time::Duration;

use spark_signals::{signal, Signal};

use super::SlideView;
use crate::renderer::FrameBuffer;
use crate::state::keyboard::KeyboardEvent;
use crate::state::{HitRegions, TimerScope};
use crate::theme::Theme;
use crate::types::{Attr, BorderStyle, Rect};

/// How long the pan burns before the dish lands.
pub const COOK_DELAY: Duration = Duration::from_millis(600);

pub fn build() -> Box<dyn SlideView> {
    Box::new(OverloadingDemo::new())
}

/// The three overloads on the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recipe {
    /// `Cook()`
    Plain,
    /// `Cook(Human h)`
    Human,
    /// `Cook(Human h, Sauce s)`
    HumanWithSauce,
}

impl Recipe {
    pub const ALL: [Recipe; 3] = [Recipe::Plain, Recipe::Human, Recipe::HumanWithSauce];

    pub fn signature(self) -> &'static str {
        match self {
            Self::Plain => "Cook()",
            Self::Human => "Cook(Human h)",
            Self::HumanWithSauce => "Cook(Human h, Sauce s)",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Plain => "cooks thin air",
            Self::Human => "cooks a human",
            Self::HumanWithSauce => "human, with sauce",
        }
    }

    /// The compile-time-fixed outcome of each overload.
    pub fn dish(self) -> Dish {
        match self {
            Self::Plain => Dish::Eggs,
            Self::Human => Dish::Steak,
            Self::HumanWithSauce => Dish::Pasta,
        }
    }
}

/// What sits on the counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dish {
    Empty,
    Cooking,
    Eggs,
    Steak,
    Pasta,
}

impl Dish {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Empty => "🍽",
            Self::Cooking => "🔥",
            Self::Eggs => "🍳",
            Self::Steak => "🍖",
            Self::Pasta => "🍝",
        }
    }
}

/// Overload resolution, kitchen edition.
#[derive(Clone)]
pub struct OverloadingDemo {
    active: Signal<Option<Recipe>>,
    dish: Signal<Dish>,
    timers: TimerScope,
}

impl OverloadingDemo {
    pub fn new() -> Self {
        Self {
            active: signal(None),
            dish: signal(Dish::Empty),
            timers: TimerScope::new(),
        }
    }

    pub fn active(&self) -> Option<Recipe> {
        self.active.get()
    }

    pub fn dish(&self) -> Dish {
        self.dish.get()
    }

    /// Dispatch one overload. Ignored while the pan is busy.
    pub fn cook(&self, recipe: Recipe) {
        if self.active.get().is_some() {
            return;
        }
        self.active.set(Some(recipe));
        self.dish.set(Dish::Cooking);

        let active = self.active.clone();
        let dish = self.dish.clone();
        self.timers.schedule(COOK_DELAY, move || {
            dish.set(recipe.dish());
            active.set(None);
        });
    }
}

impl Default for OverloadingDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideView for OverloadingDemo {
    fn render(&self, frame: &mut FrameBuffer, area: Rect, theme: &Theme, hits: &mut HitRegions) {
        let active = self.active.get();

        // The menu of overloads
        let menu_width = 32u16.min(area.width / 2);
        for (i, recipe) in Recipe::ALL.iter().enumerate() {
            let row = Rect::new(area.x + 1, area.y + i as u16 * 4, menu_width, 4);
            let selected = active == Some(*recipe);
            let border_color = if selected {
                theme.accent.resolve()
            } else {
                theme.border.resolve()
            };
            frame.draw_border(row, BorderStyle::Single, border_color, None);
            let label = format!("{}. {}", i + 1, recipe.signature());
            frame.draw_text(
                row.x + 2,
                row.y + 1,
                &label,
                theme.text.resolve(),
                None,
                if selected { Attr::BOLD } else { Attr::NONE },
                None,
            );
            frame.draw_text(
                row.x + 2,
                row.y + 2,
                recipe.description(),
                theme.text_muted.resolve(),
                None,
                Attr::DIM,
                None,
            );

            let demo = self.clone();
            let recipe = *recipe;
            hits.push(row, move || demo.cook(recipe));
        }

        // The chef and the counter
        let kitchen_x = area.x + menu_width + 4;
        let kitchen_width = area.width.saturating_sub(menu_width + 5);
        frame.draw_text_centered(kitchen_x, area.y + 2, kitchen_width, "👨", theme.text_bright.resolve(), None, Attr::BOLD);
        frame.draw_text_centered(
            kitchen_x,
            area.y + 3,
            kitchen_width,
            "the chef",
            theme.text_muted.resolve(),
            None,
            Attr::DIM,
        );
        frame.draw_text_centered(
            kitchen_x,
            area.y + 6,
            kitchen_width,
            self.dish.get().icon(),
            theme.accent.resolve(),
            None,
            Attr::BOLD,
        );

        let caption_y = (area.y + 13).min(area.bottom().saturating_sub(1));
        frame.draw_text_centered(
            area.x,
            caption_y,
            area.width,
            "Static polymorphism: decided at COMPILE TIME from the ingredients.",
            theme.text_muted.resolve(),
            None,
            Attr::ITALIC,
        );
    }

    fn on_key(&self, event: &KeyboardEvent) -> bool {
        let recipe = match event.key.as_str() {
            "1" => Recipe::Plain,
            "2" => Recipe::Human,
            "3" => Recipe::HumanWithSauce,
            _ => return false,
        };
        self.cook(recipe);
        true
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
    fn test_cook_shows_processing_then_mapped_dish() {
        let demo = OverloadingDemo::new();
        assert_eq!(demo.dish(), Dish::Empty);

        let before = Instant::now();
        demo.cook(Recipe::Human);
        assert_eq!(demo.dish(), Dish::Cooking, "pan on fire immediately");
        assert_eq!(demo.active(), Some(Recipe::Human));

        timer::fire_due(before);
        assert_eq!(demo.dish(), Dish::Cooking, "not before the delay");

        timer::fire_due(Instant::now() + COOK_DELAY);
        assert_eq!(demo.dish(), Dish::Steak);
        assert_eq!(demo.active(), None, "ready for the next order");
    }

    #[test]
    fn test_every_overload_maps_deterministically() {
        assert_eq!(Recipe::Plain.dish(), Dish::Eggs);
        assert_eq!(Recipe::Human.dish(), Dish::Steak);
        assert_eq!(Recipe::HumanWithSauce.dish(), Dish::Pasta);
    }

    #[test]
    fn test_cook_ignored_while_busy() {
        let demo = OverloadingDemo::new();
        demo.cook(Recipe::Plain);
        demo.cook(Recipe::HumanWithSauce);
        assert_eq!(demo.active(), Some(Recipe::Plain), "first order wins");
        assert_eq!(demo.timers.pending(), 1);

        timer::fire_due(Instant::now() + COOK_DELAY);
        assert_eq!(demo.dish(), Dish::Eggs);
    }

    #[test]
    fn test_number_keys_dispatch() {
        let demo = OverloadingDemo::new();
        assert!(demo.on_key(&KeyboardEvent::new("3")));
        assert_eq!(demo.active(), Some(Recipe::HumanWithSauce));
        assert!(!demo.on_key(&KeyboardEvent::new("4")));
    }

    #[test]
    fn test_unmount_cancels_plating() {
        let demo = OverloadingDemo::new();
        let dish = demo.dish.clone();
        demo.cook(Recipe::Human);

        drop(demo);
        timer::fire_due(Instant::now() + COOK_DELAY + COOK_DELAY);
        assert_eq!(dish.get(), Dish::Cooking, "no dish after the kitchen closed");
    }
}
