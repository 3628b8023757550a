//! Deck navigation.
//!
//! Holds the current slide index in a signal so the render effect follows
//! every move. All operations are total: out-of-range requests are silent
//! no-ops, and the boundaries clamp instead of wrapping.

use spark_signals::{signal, Signal};

/// Navigation state over a fixed-length slide sequence.
#[derive(Clone)]
pub struct DeckController {
    current: Signal<usize>,
    len: usize,
}

impl DeckController {
    /// Create a controller over `len` slides, starting at index 0.
    ///
    /// `len` must be non-zero - the deck always has a current slide.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "a deck needs at least one slide");
        Self {
            current: signal(0),
            len,
        }
    }

    /// Current slide index. Reading inside an effect tracks it.
    pub fn current(&self) -> usize {
        self.current.get()
    }

    /// Number of slides in the deck.
    pub fn slide_count(&self) -> usize {
        self.len
    }

    /// Last valid index.
    pub fn last_index(&self) -> usize {
        self.len - 1
    }

    /// Advance one slide. No-op at the last slide.
    pub fn next(&self) {
        let current = self.current.get();
        if current < self.last_index() {
            self.current.set(current + 1);
        }
    }

    /// Go back one slide. No-op at the first slide.
    pub fn prev(&self) {
        let current = self.current.get();
        if current > 0 {
            self.current.set(current - 1);
        }
    }

    /// Jump to an index. Out-of-range requests are silent no-ops.
    pub fn go_to(&self, index: usize) {
        if index < self.len {
            self.current.set(index);
        }
    }

    pub fn is_first(&self) -> bool {
        self.current.get() == 0
    }

    pub fn is_last(&self) -> bool {
        self.current.get() == self.last_index()
    }

    /// 1-based module label: one module per demo/theory pair.
    pub fn module_number(&self) -> usize {
        self.current.get() / 2 + 1
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_to_in_range_lands_exactly() {
        let deck = DeckController::new(20);
        for i in 0..20 {
            deck.go_to(i);
            assert_eq!(deck.current(), i);
        }
    }

    #[test]
    fn test_go_to_out_of_range_is_noop() {
        let deck = DeckController::new(20);
        deck.go_to(7);
        deck.go_to(20);
        assert_eq!(deck.current(), 7);
        deck.go_to(usize::MAX);
        assert_eq!(deck.current(), 7);
    }

    #[test]
    fn test_prev_at_first_is_noop() {
        let deck = DeckController::new(20);
        assert!(deck.is_first());
        deck.prev();
        assert_eq!(deck.current(), 0);
    }

    #[test]
    fn test_next_at_last_is_noop() {
        let deck = DeckController::new(20);
        deck.go_to(19);
        assert!(deck.is_last());
        deck.next();
        assert_eq!(deck.current(), 19);
    }

    #[test]
    fn test_repeated_next_reaches_and_stays_at_last() {
        let deck = DeckController::new(20);
        for _ in 0..deck.last_index() {
            deck.next();
        }
        assert_eq!(deck.current(), 19);
        deck.next();
        assert_eq!(deck.current(), 19);
    }

    #[test]
    fn test_module_number_pairs_slides() {
        let deck = DeckController::new(20);
        assert_eq!(deck.module_number(), 1);
        deck.next(); // index 1
        assert_eq!(deck.module_number(), 1);
        deck.next(); // index 2
        assert_eq!(deck.module_number(), 2);
        deck.go_to(19);
        assert_eq!(deck.module_number(), 10);
    }

    #[test]
    #[should_panic]
    fn test_empty_deck_rejected() {
        let _ = DeckController::new(0);
    }
}
