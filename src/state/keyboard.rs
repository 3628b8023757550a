//! Keyboard event state and handler registry.
//!
//! Handlers are registered with cleanup closures and dispatched in priority
//! order: key-specific handlers first, then global handlers. The active
//! slide gets the event before either tier (see `app::route_event`).
//!
//! # Example
//!
//! ```ignore
//! let cleanup = keyboard::on_key("ArrowRight", || {
//!     // navigate
//!     true // consume
//! });
//! // later:
//! cleanup();
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use spark_signals::{signal, Signal};

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }
}

/// Key event state (press, repeat, release).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g. "a", "Enter", "ArrowLeft").
    pub key: String,
    pub modifiers: Modifiers,
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Create a key press with modifiers.
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    pub fn is_press(&self) -> bool {
        self.state == KeyState::Press
    }
}

/// Handler for keyboard events. Return true to consume the event.
pub type KeyHandler = Box<dyn Fn(&KeyboardEvent) -> bool>;

/// Handler for a specific key. Return true to consume the event.
pub type KeySpecificHandler = Box<dyn Fn() -> bool>;

// =============================================================================
// STATE
// =============================================================================

thread_local! {
    static LAST_EVENT: Signal<Option<KeyboardEvent>> = signal(None);
}

/// Get the last keyboard event.
pub fn last_event() -> Option<KeyboardEvent> {
    LAST_EVENT.with(|s| s.get())
}

/// Get the last key pressed.
pub fn last_key() -> String {
    last_event().map(|e| e.key).unwrap_or_default()
}

// =============================================================================
// HANDLER REGISTRY
// =============================================================================

struct HandlerRegistry {
    global_handlers: Vec<(usize, KeyHandler)>,
    key_handlers: HashMap<String, Vec<(usize, KeySpecificHandler)>>,
    next_id: usize,
}

impl HandlerRegistry {
    fn new() -> Self {
        Self {
            global_handlers: Vec::new(),
            key_handlers: HashMap::new(),
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

thread_local! {
    static REGISTRY: RefCell<HandlerRegistry> = RefCell::new(HandlerRegistry::new());
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Dispatch a keyboard event to all registered handlers.
/// Returns true if any handler consumed the event.
pub fn dispatch(event: KeyboardEvent) -> bool {
    LAST_EVENT.with(|s| s.set(Some(event.clone())));

    // Only press events reach handlers
    if event.state != KeyState::Press {
        return false;
    }

    REGISTRY.with(|reg| {
        let reg = reg.borrow();

        if let Some(handlers) = reg.key_handlers.get(&event.key) {
            for (_, handler) in handlers {
                if handler() {
                    return true;
                }
            }
        }

        for (_, handler) in &reg.global_handlers {
            if handler(&event) {
                return true;
            }
        }

        false
    })
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Subscribe to all keyboard events.
/// Return true from the handler to consume the event.
/// Returns a cleanup function.
pub fn on<F>(handler: F) -> impl FnOnce()
where
    F: Fn(&KeyboardEvent) -> bool + 'static,
{
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        reg.global_handlers.push((id, Box::new(handler)));
        id
    });

    move || {
        REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            reg.global_handlers.retain(|(handler_id, _)| *handler_id != id);
        });
    }
}

/// Subscribe to a specific key.
/// Return true to consume the event.
/// Returns a cleanup function.
pub fn on_key<F>(key: &str, handler: F) -> impl FnOnce()
where
    F: Fn() -> bool + 'static,
{
    let key = key.to_string();
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        reg.key_handlers
            .entry(key.clone())
            .or_default()
            .push((id, Box::new(handler)));
        id
    });

    move || {
        REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            if let Some(handlers) = reg.key_handlers.get_mut(&key) {
                handlers.retain(|(handler_id, _)| *handler_id != id);
                if handlers.is_empty() {
                    reg.key_handlers.remove(&key);
                }
            }
        });
    }
}

/// Subscribe to multiple keys with the same handler.
/// Returns a cleanup function.
pub fn on_keys<F>(keys: &[&str], handler: F) -> impl FnOnce()
where
    F: Fn() -> bool + Clone + 'static,
{
    let ids: Vec<(String, usize)> = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        keys.iter()
            .map(|key| {
                let id = reg.next_id();
                reg.key_handlers
                    .entry(key.to_string())
                    .or_default()
                    .push((id, Box::new(handler.clone())));
                (key.to_string(), id)
            })
            .collect()
    });

    move || {
        REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            for (key, id) in &ids {
                if let Some(handlers) = reg.key_handlers.get_mut(key) {
                    handlers.retain(|(handler_id, _)| *handler_id != *id);
                    if handlers.is_empty() {
                        reg.key_handlers.remove(key);
                    }
                }
            }
        });
    }
}

/// Clear all handlers and state (for testing).
pub fn reset_keyboard_state() {
    REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        reg.global_handlers.clear();
        reg.key_handlers.clear();
    });
    LAST_EVENT.with(|s| s.set(None));
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn setup() {
        reset_keyboard_state();
    }

    #[test]
    fn test_on_key_receives_matching_key() {
        setup();
        let hits = Rc::new(Cell::new(0u32));
        let h = hits.clone();
        let _cleanup = on_key("Enter", move || {
            h.set(h.get() + 1);
            true
        });

        assert!(dispatch(KeyboardEvent::new("Enter")));
        assert!(!dispatch(KeyboardEvent::new("a")));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_cleanup_removes_handler() {
        setup();
        let hits = Rc::new(Cell::new(0u32));
        let h = hits.clone();
        let cleanup = on_key("x", move || {
            h.set(h.get() + 1);
            true
        });

        dispatch(KeyboardEvent::new("x"));
        cleanup();
        dispatch(KeyboardEvent::new("x"));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_global_handler_sees_modifiers() {
        setup();
        let hits = Rc::new(Cell::new(0u32));
        let h = hits.clone();
        let _cleanup = on(move |event| {
            if event.modifiers.ctrl && event.key == "c" {
                h.set(h.get() + 1);
                true
            } else {
                false
            }
        });

        dispatch(KeyboardEvent::new("c"));
        assert_eq!(hits.get(), 0);

        dispatch(KeyboardEvent::with_modifiers("c", Modifiers::ctrl()));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_key_specific_runs_before_global() {
        setup();
        let order = Rc::new(RefCell::new(Vec::new()));

        let o = order.clone();
        let _g = on(move |_| {
            o.borrow_mut().push("global");
            false
        });
        let o = order.clone();
        let _k = on_key("a", move || {
            o.borrow_mut().push("key");
            true // consume: global never runs
        });

        dispatch(KeyboardEvent::new("a"));
        assert_eq!(*order.borrow(), vec!["key"]);
    }

    #[test]
    fn test_release_events_not_dispatched() {
        setup();
        let hits = Rc::new(Cell::new(0u32));
        let h = hits.clone();
        let _cleanup = on_key("a", move || {
            h.set(h.get() + 1);
            true
        });

        let mut event = KeyboardEvent::new("a");
        event.state = KeyState::Release;
        assert!(!dispatch(event));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_on_keys_binds_all() {
        setup();
        let hits = Rc::new(Cell::new(0u32));
        let h = hits.clone();
        let cleanup = on_keys(&["n", "ArrowRight"], move || {
            h.set(h.get() + 1);
            true
        });

        dispatch(KeyboardEvent::new("n"));
        dispatch(KeyboardEvent::new("ArrowRight"));
        assert_eq!(hits.get(), 2);

        cleanup();
        dispatch(KeyboardEvent::new("n"));
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_last_event_tracked() {
        setup();
        dispatch(KeyboardEvent::new("z"));
        assert_eq!(last_key(), "z");
    }
}
