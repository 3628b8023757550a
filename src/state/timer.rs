//! Scoped cancellable timers.
//!
//! Every animation delay in the deck is a deferred task bound to the
//! lifetime of the view that scheduled it. A [`TimerScope`] is owned by its
//! view; when the view is dropped (the learner navigated away), every
//! outstanding task in that scope is removed from the queue - cancelled, not
//! merely ignored - so a stale callback can never mutate state behind a view
//! that is no longer on screen.
//!
//! The queue is single-threaded and fires from the event loop:
//! [`next_deadline`] bounds the input poll timeout, [`fire_due`] runs due
//! callbacks in deadline order.
//!
//! # Example
//!
//! ```ignore
//! let scope = TimerScope::new();
//! scope.schedule(Duration::from_millis(1200), move || stage.set(Stage::Alive));
//! // ... dropping `scope` cancels the pending transition
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

// =============================================================================
// QUEUE
// =============================================================================

struct ScheduledTask {
    scope: u64,
    deadline: Instant,
    /// Tie-breaker so equal deadlines fire in schedule order.
    seq: u64,
    run: Box<dyn FnOnce()>,
}

struct TimerQueue {
    tasks: Vec<ScheduledTask>,
    next_scope: u64,
    next_seq: u64,
}

impl TimerQueue {
    fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_scope: 0,
            next_seq: 0,
        }
    }
}

thread_local! {
    static QUEUE: RefCell<TimerQueue> = RefCell::new(TimerQueue::new());
}

// =============================================================================
// SCOPE
// =============================================================================

struct ScopeHandle {
    id: u64,
}

impl Drop for ScopeHandle {
    fn drop(&mut self) {
        cancel_scope(self.id);
    }
}

/// A handle that ties scheduled tasks to an owner's lifetime.
///
/// Cloning shares the scope; the tasks are cancelled when the last clone is
/// dropped. Views clone the scope into their action closures, so the tasks
/// live exactly as long as the view and the frame's interaction handlers.
#[derive(Clone)]
pub struct TimerScope {
    handle: Rc<ScopeHandle>,
}

impl TimerScope {
    pub fn new() -> Self {
        let id = QUEUE.with(|q| {
            let mut q = q.borrow_mut();
            let id = q.next_scope;
            q.next_scope += 1;
            id
        });
        Self {
            handle: Rc::new(ScopeHandle { id }),
        }
    }

    /// Schedule a task to run after `delay`.
    pub fn schedule(&self, delay: Duration, run: impl FnOnce() + 'static) {
        self.schedule_at(Instant::now() + delay, run);
    }

    /// Schedule a task at an absolute deadline.
    pub fn schedule_at(&self, deadline: Instant, run: impl FnOnce() + 'static) {
        let scope = self.handle.id;
        QUEUE.with(|q| {
            let mut q = q.borrow_mut();
            let seq = q.next_seq;
            q.next_seq += 1;
            q.tasks.push(ScheduledTask {
                scope,
                deadline,
                seq,
                run: Box::new(run),
            });
        });
    }

    /// Cancel every outstanding task in this scope.
    pub fn cancel_all(&self) {
        cancel_scope(self.handle.id);
    }

    /// Number of tasks still pending in this scope.
    pub fn pending(&self) -> usize {
        let id = self.handle.id;
        QUEUE.with(|q| q.borrow().tasks.iter().filter(|t| t.scope == id).count())
    }
}

impl Default for TimerScope {
    fn default() -> Self {
        Self::new()
    }
}

fn cancel_scope(id: u64) {
    QUEUE.with(|q| q.borrow_mut().tasks.retain(|t| t.scope != id));
}

// =============================================================================
// QUEUE API
// =============================================================================

/// Earliest pending deadline, if any. Bounds the event-loop poll timeout.
pub fn next_deadline() -> Option<Instant> {
    QUEUE.with(|q| q.borrow().tasks.iter().map(|t| t.deadline).min())
}

/// Total number of pending tasks across all scopes.
pub fn pending_count() -> usize {
    QUEUE.with(|q| q.borrow().tasks.len())
}

/// Run every task whose deadline has passed, in deadline order.
///
/// Returns the number of tasks fired. Callbacks run outside the queue
/// borrow, so they may schedule follow-up tasks (chained reveals do).
pub fn fire_due(now: Instant) -> usize {
    let mut fired = 0;
    loop {
        let task = QUEUE.with(|q| {
            let mut q = q.borrow_mut();
            let due = q
                .tasks
                .iter()
                .enumerate()
                .filter(|(_, t)| t.deadline <= now)
                .min_by_key(|(_, t)| (t.deadline, t.seq))
                .map(|(i, _)| i);
            due.map(|i| q.tasks.swap_remove(i))
        });

        match task {
            Some(t) => {
                (t.run)();
                fired += 1;
            }
            None => break,
        }
    }
    fired
}

/// Drop every pending task (for testing).
pub fn reset_timers() {
    QUEUE.with(|q| q.borrow_mut().tasks.clear());
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn setup() {
        reset_timers();
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fire_due_respects_deadlines() {
        setup();
        let t0 = Instant::now();
        let scope = TimerScope::new();
        let hits = Rc::new(Cell::new(0u32));

        let h = hits.clone();
        scope.schedule_at(t0 + ms(100), move || h.set(h.get() + 1));

        assert_eq!(fire_due(t0 + ms(50)), 0, "not due yet");
        assert_eq!(hits.get(), 0);

        assert_eq!(fire_due(t0 + ms(100)), 1);
        assert_eq!(hits.get(), 1);
        assert_eq!(pending_count(), 0);
    }

    #[test]
    fn test_fire_order_by_deadline_then_seq() {
        setup();
        let t0 = Instant::now();
        let scope = TimerScope::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for (label, delay) in [("c", 300), ("a", 100), ("b", 200)] {
            let order = order.clone();
            scope.schedule_at(t0 + ms(delay), move || order.borrow_mut().push(label));
        }
        // Equal deadline: schedule order wins
        let o = order.clone();
        scope.schedule_at(t0 + ms(100), move || o.borrow_mut().push("a2"));

        fire_due(t0 + ms(300));
        assert_eq!(*order.borrow(), vec!["a", "a2", "b", "c"]);
    }

    #[test]
    fn test_drop_cancels_pending() {
        setup();
        let t0 = Instant::now();
        let scope = TimerScope::new();
        let hits = Rc::new(Cell::new(0u32));

        let h = hits.clone();
        scope.schedule_at(t0 + ms(10), move || h.set(h.get() + 1));
        assert_eq!(pending_count(), 1);

        drop(scope);
        assert_eq!(pending_count(), 0, "drop removes the task, not just ignores it");

        assert_eq!(fire_due(t0 + ms(1000)), 0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_clone_keeps_scope_alive_until_last() {
        setup();
        let t0 = Instant::now();
        let scope = TimerScope::new();
        let clone = scope.clone();

        scope.schedule_at(t0 + ms(10), || {});
        drop(scope);
        assert_eq!(pending_count(), 1, "a live clone keeps the scope");

        drop(clone);
        assert_eq!(pending_count(), 0);
    }

    #[test]
    fn test_cancel_all_only_touches_own_scope() {
        setup();
        let t0 = Instant::now();
        let a = TimerScope::new();
        let b = TimerScope::new();

        a.schedule_at(t0 + ms(10), || {});
        b.schedule_at(t0 + ms(10), || {});

        a.cancel_all();
        assert_eq!(a.pending(), 0);
        assert_eq!(b.pending(), 1);
    }

    #[test]
    fn test_next_deadline_is_earliest() {
        setup();
        let t0 = Instant::now();
        let scope = TimerScope::new();

        assert!(next_deadline().is_none());
        scope.schedule_at(t0 + ms(300), || {});
        scope.schedule_at(t0 + ms(100), || {});
        assert_eq!(next_deadline(), Some(t0 + ms(100)));
    }

    #[test]
    fn test_callback_may_schedule_followup() {
        setup();
        let t0 = Instant::now();
        let scope = TimerScope::new();
        let hits = Rc::new(Cell::new(0u32));

        let h = hits.clone();
        let chained = scope.clone();
        scope.schedule_at(t0 + ms(10), move || {
            h.set(h.get() + 1);
            let h2 = h.clone();
            chained.schedule_at(t0 + ms(20), move || h2.set(h2.get() + 1));
        });

        assert_eq!(fire_due(t0 + ms(10)), 1);
        assert_eq!(pending_count(), 1, "follow-up is queued, not run");

        assert_eq!(fire_due(t0 + ms(20)), 1);
        assert_eq!(hits.get(), 2);
    }
}
