//! Slide 13: the diverse army.
//!
//! Staggered entrance: the five horde members walk in one at a time on
//! mount, a fixed interval apart. Navigating away mid-entrance cancels the
//! stragglers.

use std::time::Duration;

use spark_signals::{signal, Signal};

use super::SlideView;
use crate::renderer::FrameBuffer;
use crate::state::{HitRegions, TimerScope};
use crate::theme::Theme;
use crate::types::{Attr, BorderStyle, Rect};

/// Interval between members joining the line.
pub const ENTRANCE_STAGGER: Duration = Duration::from_millis(150);

/// The horde, in list order.
pub const MEMBERS: [&str; 5] = ["🧛", "🧟", "🐺", "👻", "👹"];

pub fn build() -> Box<dyn SlideView> {
    Box::new(HordeDemo::new())
}

/// `List<Monster>` filling itself in.
#[derive(Clone)]
pub struct HordeDemo {
    revealed: Signal<usize>,
    timers: TimerScope,
}

impl HordeDemo {
    pub fn new() -> Self {
        let revealed = signal(0usize);
        let timers = TimerScope::new();

        for i in 0..MEMBERS.len() {
            let revealed = revealed.clone();
            timers.schedule(ENTRANCE_STAGGER * i as u32, move || {
                revealed.set(i + 1);
            });
        }

        Self { revealed, timers }
    }

    /// How many members have entered so far.
    pub fn revealed(&self) -> usize {
        self.revealed.get()
    }
}

impl Default for HordeDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideView for HordeDemo {
    fn render(&self, frame: &mut FrameBuffer, area: Rect, theme: &Theme, _hits: &mut HitRegions) {
        frame.draw_text_centered(
            area.x,
            area.y,
            area.width,
            "List<Monster> horde;",
            theme.secondary.resolve(),
            None,
            Attr::BOLD,
        );

        let revealed = self.revealed.get();
        let slot_width = 8u16;
        let total = slot_width * MEMBERS.len() as u16;
        let start_x = area.x + area.width.saturating_sub(total) / 2;
        let row = area.y + 2;

        for (i, icon) in MEMBERS.iter().enumerate() {
            let slot = Rect::new(start_x + i as u16 * slot_width, row, slot_width - 1, 4);
            if i < revealed {
                frame.draw_border(slot, BorderStyle::Single, theme.border.resolve(), None);
                frame.draw_text_centered(slot.x, slot.y + 1, slot.width, icon, theme.text_bright.resolve(), None, Attr::BOLD);
                let index_tag = format!("[{}]", i);
                frame.draw_text_centered(
                    slot.x,
                    slot.y + 2,
                    slot.width,
                    &index_tag,
                    theme.text_muted.resolve(),
                    None,
                    Attr::DIM,
                );
            } else {
                frame.draw_border(slot, BorderStyle::Dashed, theme.text_muted.resolve().dim(0.5), None);
            }
        }

        frame.draw_text_centered(
            area.x,
            row + 5,
            area.width,
            "They look different, but at the bottom they are all Monster.",
            theme.text_muted.resolve(),
            None,
            Attr::ITALIC,
        );
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
    fn test_entrance_is_staggered_in_order() {
        let demo = HordeDemo::new();
        let base = Instant::now();
        assert_eq!(demo.revealed(), 0, "nobody enters synchronously");
        assert_eq!(demo.timers.pending(), MEMBERS.len());

        // First member is due immediately (stagger * 0)
        timer::fire_due(base);
        assert_eq!(demo.revealed(), 1);

        timer::fire_due(base + ENTRANCE_STAGGER);
        assert_eq!(demo.revealed(), 2);

        timer::fire_due(base + ENTRANCE_STAGGER * 10);
        assert_eq!(demo.revealed(), MEMBERS.len());
        assert_eq!(demo.timers.pending(), 0);
    }

    #[test]
    fn test_unmount_mid_entrance_cancels_stragglers() {
        let demo = HordeDemo::new();
        let base = Instant::now();
        let revealed = demo.revealed.clone();

        timer::fire_due(base);
        assert_eq!(revealed.get(), 1);

        drop(demo);
        assert_eq!(timer::pending_count(), 0);

        timer::fire_due(base + ENTRANCE_STAGGER * 10);
        assert_eq!(revealed.get(), 1, "the rest never enter");
    }
}
