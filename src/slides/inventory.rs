//! Slide 19: the RPG inventory.
//!
//! Queued staggered log: one trigger iterates the fixed backpack and
//! appends one deterministic message per item, each a fixed interval after
//! the previous. Re-triggering cancels any outstanding appends and rebuilds
//! the log from scratch.

use std::time::Duration;

use spark_signals::{signal, Signal};

use super::{draw_button_centered, is_primary_key, SlideView};
use crate::renderer::FrameBuffer;
use crate::state::keyboard::KeyboardEvent;
use crate::state::{HitRegions, TimerScope};
use crate::theme::Theme;
use crate::types::{Attr, BorderStyle, Rect};

/// Interval between log entries.
pub const USE_STAGGER: Duration = Duration::from_millis(600);

/// The backpack: icon, item, and what using it prints.
pub const ITEMS: [(&str, &str, &str); 3] = [
    ("⚔", "Sword", "Sword: SLASH! (-10 HP)"),
    ("🧪", "Potion", "Potion: Glug glug! (+50 HP)"),
    ("🛡", "Shield", "Shield: Clang! (Block)"),
];

pub fn build() -> Box<dyn SlideView> {
    Box::new(InventoryDemo::new())
}

/// `foreach (var item in backpack)` with a visible log.
#[derive(Clone)]
pub struct InventoryDemo {
    log: Signal<Vec<&'static str>>,
    timers: TimerScope,
}

impl InventoryDemo {
    pub fn new() -> Self {
        Self {
            log: signal(Vec::new()),
            timers: TimerScope::new(),
        }
    }

    pub fn log(&self) -> Vec<&'static str> {
        self.log.get()
    }

    /// Iterate the backpack. Clears the previous run, including any of its
    /// appends still in flight.
    pub fn use_all(&self) {
        self.timers.cancel_all();
        self.log.set(Vec::new());

        for (i, (_, _, message)) in ITEMS.iter().enumerate() {
            let log = self.log.clone();
            self.timers.schedule(USE_STAGGER * i as u32, move || {
                let mut entries = log.get();
                entries.push(message);
                log.set(entries);
            });
        }
    }
}

impl Default for InventoryDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideView for InventoryDemo {
    fn render(&self, frame: &mut FrameBuffer, area: Rect, theme: &Theme, hits: &mut HitRegions) {
        // The backpack
        let slot_width = 9u16;
        let total = slot_width * ITEMS.len() as u16;
        let start_x = area.x + area.width.saturating_sub(total) / 2;
        for (i, (icon, name, _)) in ITEMS.iter().enumerate() {
            let slot = Rect::new(start_x + i as u16 * slot_width, area.y, slot_width - 1, 4);
            frame.draw_border(slot, BorderStyle::Single, theme.warning.resolve().dim(0.7), None);
            frame.draw_text_centered(slot.x, slot.y + 1, slot.width, icon, theme.text_bright.resolve(), None, Attr::BOLD);
            frame.draw_text_centered(
                slot.x,
                slot.y + 2,
                slot.width,
                name,
                theme.text_muted.resolve(),
                None,
                Attr::DIM,
            );
        }

        let demo = self.clone();
        draw_button_centered(
            frame,
            area,
            area.y + 5,
            "▶ foreach (var item in backpack)",
            theme.primary.resolve(),
            hits,
            move || demo.use_all(),
        );

        // The log
        let log_box = area.centered_block(44, 6, 7);
        frame.draw_border(log_box, BorderStyle::Single, theme.border.resolve(), None);
        let entries = self.log.get();
        if entries.is_empty() {
            frame.draw_text_centered(
                log_box.x,
                log_box.y + 2,
                log_box.width,
                "Ready to iterate...",
                theme.text_muted.resolve().dim(0.6),
                None,
                Attr::ITALIC,
            );
        } else {
            for (i, entry) in entries.iter().enumerate() {
                let line = format!("> {}", entry);
                frame.draw_text(
                    log_box.x + 2,
                    log_box.y + 1 + i as u16,
                    &line,
                    theme.success.resolve(),
                    None,
                    Attr::NONE,
                    None,
                );
            }
        }
    }

    fn on_key(&self, event: &KeyboardEvent) -> bool {
        if is_primary_key(event) {
            self.use_all();
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
    fn test_entries_appear_in_order_at_stagger_cadence() {
        let demo = InventoryDemo::new();
        demo.use_all();
        let base = Instant::now();
        assert!(demo.log().is_empty(), "appends are deferred, not synchronous");

        timer::fire_due(base);
        assert_eq!(demo.log(), vec![ITEMS[0].2]);

        timer::fire_due(base + USE_STAGGER);
        assert_eq!(demo.log(), vec![ITEMS[0].2, ITEMS[1].2]);

        timer::fire_due(base + USE_STAGGER * 2);
        assert_eq!(demo.log().len(), 3, "exactly the fixed input set");
        assert_eq!(demo.log()[2], ITEMS[2].2);
        assert_eq!(demo.timers.pending(), 0);
    }

    #[test]
    fn test_retrigger_clears_and_rebuilds() {
        let demo = InventoryDemo::new();
        demo.use_all();
        timer::fire_due(Instant::now() + USE_STAGGER * 3);
        assert_eq!(demo.log().len(), 3);

        // Run it again: old entries go away before new ones arrive
        demo.use_all();
        assert!(demo.log().is_empty());

        timer::fire_due(Instant::now() + USE_STAGGER * 3);
        assert_eq!(demo.log().len(), 3);
    }

    #[test]
    fn test_retrigger_midway_cancels_outstanding_appends() {
        let demo = InventoryDemo::new();
        demo.use_all();
        let base = Instant::now();

        timer::fire_due(base);
        assert_eq!(demo.log().len(), 1);

        // Re-trigger while two appends are still pending
        demo.use_all();
        assert_eq!(demo.timers.pending(), ITEMS.len(), "only the new run is queued");

        timer::fire_due(Instant::now() + USE_STAGGER * 3);
        assert_eq!(demo.log().len(), 3, "no interleaving from the first run");
    }

    #[test]
    fn test_unmount_cancels_remaining_appends() {
        let demo = InventoryDemo::new();
        let log = demo.log.clone();
        demo.use_all();

        drop(demo);
        timer::fire_due(Instant::now() + USE_STAGGER * 5);
        assert!(log.get().is_empty(), "nothing appended after unmount");
    }
}
