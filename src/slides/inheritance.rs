//! Slide 5: the family tree.
//!
//! Cyclic-selector machine: the base class mutates through a fixed palette
//! of strains (Gray -> Red -> Blue -> Gray) and both children recolor
//! reactively from the same value. Nothing is timed.

use spark_signals::{signal, Signal};

use super::{is_primary_key, SlideView};
use crate::renderer::FrameBuffer;
use crate::state::keyboard::KeyboardEvent;
use crate::state::HitRegions;
use crate::theme::Theme;
use crate::types::{Attr, BorderStyle, Rect, Rgba};

pub fn build() -> Box<dyn SlideView> {
    Box::new(InheritanceDemo::new())
}

/// The DNA strain shared by the whole family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strain {
    Gray,
    Red,
    Blue,
}

impl Strain {
    /// Advance cyclically. Three steps return to the start.
    pub fn next(self) -> Self {
        match self {
            Self::Gray => Self::Red,
            Self::Red => Self::Blue,
            Self::Blue => Self::Gray,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Red => "red",
            Self::Blue => "blue",
        }
    }

    fn color(self, theme: &Theme) -> Rgba {
        match self {
            Self::Gray => theme.text_muted.resolve(),
            Self::Red => theme.error.resolve(),
            Self::Blue => theme.secondary.resolve(),
        }
    }
}

/// Parent and children bound to one strain value.
#[derive(Clone)]
pub struct InheritanceDemo {
    strain: Signal<Strain>,
}

impl InheritanceDemo {
    pub fn new() -> Self {
        Self {
            strain: signal(Strain::Gray),
        }
    }

    pub fn strain(&self) -> Strain {
        self.strain.get()
    }

    /// Mutate the base class. Children follow for free.
    pub fn mutate(&self) {
        self.strain.set(self.strain.get().next());
    }
}

impl Default for InheritanceDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideView for InheritanceDemo {
    fn render(&self, frame: &mut FrameBuffer, area: Rect, theme: &Theme, hits: &mut HitRegions) {
        let strain = self.strain.get();
        let color = strain.color(theme);

        // Base class
        let parent = area.centered_block(24, 4, 0);
        frame.draw_text_centered(
            parent.x,
            parent.y,
            parent.width,
            "BASE CLASS (DNA)",
            theme.primary.resolve(),
            None,
            Attr::BOLD,
        );
        let icon = parent.centered_block(6, 3, 1);
        frame.draw_border(icon, BorderStyle::Rounded, color, None);
        frame.draw_text_centered(icon.x, icon.y + 1, icon.width, "👹", color, None, Attr::BOLD);

        let demo = self.clone();
        hits.push(icon, move || demo.mutate());

        frame.draw_text_centered(
            area.x,
            parent.bottom(),
            area.width,
            "click the parent to mutate (m)",
            theme.text_muted.resolve(),
            None,
            Attr::DIM,
        );

        // Lineage connector
        frame.draw_text_centered(
            area.x,
            parent.bottom() + 1,
            area.width,
            "┌────────┴────────┐",
            theme.border.resolve(),
            None,
            Attr::NONE,
        );

        // Children, recolored from the same strain
        let row = parent.bottom() + 2;
        let children = [("🧛", "Vampire"), ("🧟", "Zombie")];
        let slot = area.width / 2;
        for (i, (icon, name)) in children.iter().enumerate() {
            let x = area.x + i as u16 * slot;
            frame.draw_text_centered(x, row, slot, icon, color, None, Attr::BOLD);
            frame.draw_text_centered(x, row + 1, slot, name, theme.text.resolve(), None, Attr::BOLD);
            frame.draw_text_centered(
                x,
                row + 2,
                slot,
                ": Monster",
                theme.text_muted.resolve(),
                None,
                Attr::DIM,
            );
        }
    }

    fn on_key(&self, event: &KeyboardEvent) -> bool {
        if is_primary_key(event) || event.key == "m" {
            self.mutate();
            return true;
        }
        false
    }
}

// =============================================================================
// TESTS
// =============================================================================
