//! Application lifecycle and event loop.
//!
//! `mount()` takes over the terminal and wires the reactive pipeline: one
//! render effect reads the deck controller, the theme and the active view's
//! signals, draws a frame and diff-renders it. `run()` polls input with a
//! timeout bounded by the earliest timer deadline, routes events, and fires
//! due timers - the whole deck is single-threaded and event-driven.
//!
//! Navigation remounts the viewport: the outgoing view is dropped before
//! the index signal changes, which cancels its outstanding scheduled tasks.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use spark_signals::{effect, signal, Signal};

use crate::deck::{self, DeckController, SlideBody};
use crate::renderer::{DiffRenderer, FrameBuffer};
use crate::shell;
use crate::slides::SlideView;
use crate::state::keyboard::{self, KeyboardEvent};
use crate::state::{hit, input, timer, HitRegions, InputEvent};
use crate::theme;

/// Poll timeout when no timer is pending.
const IDLE_POLL: Duration = Duration::from_millis(50);

// =============================================================================
// Terminal size signal
// =============================================================================

thread_local! {
    static TERMINAL_SIZE: Signal<(u16, u16)> = signal((80, 24));
}

/// Current terminal size. Reading inside an effect tracks it.
pub fn terminal_size() -> (u16, u16) {
    TERMINAL_SIZE.with(|s| s.get())
}

/// Update the terminal size signal (resize events, startup detection).
pub fn set_terminal_size(width: u16, height: u16) {
    TERMINAL_SIZE.with(|s| s.set((width, height)));
}

// =============================================================================
// Viewport
// =============================================================================

/// Holds the mounted slide view, if the current slide is a visual one.
///
/// Replacing the view drops the old one, and with it the old view's
/// [`TimerScope`](crate::state::TimerScope) - that drop is what cancels
/// in-flight animation timers on navigation.
#[derive(Clone, Default)]
pub struct Viewport {
    active: Rc<RefCell<Option<Box<dyn SlideView>>>>,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount the view for the slide at `index` (or nothing for theory
    /// slides), discarding whatever was mounted before.
    pub fn mount(&self, index: usize) {
        let view = match &deck::slides()[index].body {
            SlideBody::Visual(build) => Some(build()),
            SlideBody::Theory(_) => None,
        };
        *self.active.borrow_mut() = view;
    }

    /// Run `f` with the active view borrowed.
    pub fn with_active<R>(&self, f: impl FnOnce(Option<&dyn SlideView>) -> R) -> R {
        let guard = self.active.borrow();
        f(guard.as_deref())
    }

    /// Offer a key press to the active view. Returns true if consumed.
    pub fn on_key(&self, event: &KeyboardEvent) -> bool {
        let guard = self.active.borrow();
        match guard.as_deref() {
            Some(view) => view.on_key(event),
            None => false,
        }
    }
}

// =============================================================================
// Navigator
// =============================================================================

/// Navigation with remounting: the controller's clamping rules plus the
/// viewport swap that every slide change implies.
#[derive(Clone)]
pub struct Navigator {
    deck: DeckController,
    viewport: Viewport,
}

impl Navigator {
    pub fn new(deck: DeckController, viewport: Viewport) -> Self {
        Self { deck, viewport }
    }

    pub fn deck(&self) -> &DeckController {
        &self.deck
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Jump to a slide. Out-of-range and same-slide requests are no-ops.
    pub fn go_to(&self, index: usize) {
        if index >= self.deck.slide_count() || index == self.deck.current() {
            return;
        }
        // Swap the view first: the old view's timers must be dead before
        // the index change triggers a render of the new slide.
        self.viewport.mount(index);
        self.deck.go_to(index);
        tracing::debug!(slide = index, "navigated");
    }

    /// Advance one slide. No-op at the last slide ("Finish").
    pub fn next(&self) {
        let current = self.deck.current();
        if current < self.deck.last_index() {
            self.go_to(current + 1);
        }
    }

    /// Go back one slide. No-op at the first slide.
    pub fn prev(&self) {
        let current = self.deck.current();
        if current > 0 {
            self.go_to(current - 1);
        }
    }
}

// =============================================================================
// Mount handle
// =============================================================================

/// Handle returned by [`mount`] that allows unmounting.
pub struct AppHandle {
    running: Arc<AtomicBool>,
    nav: Navigator,
    renderer: Rc<RefCell<DiffRenderer>>,
    stop_effect: Option<Box<dyn FnOnce()>>,
    key_cleanups: Vec<Box<dyn FnOnce()>>,
    torn_down: bool,
}

impl AppHandle {
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Request graceful shutdown.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.running.store(false, Ordering::SeqCst);

        for cleanup in self.key_cleanups.drain(..) {
            cleanup();
        }
        if let Some(stop) = self.stop_effect.take() {
            stop();
        }

        let _ = input::disable_mouse();
        let _ = self.renderer.borrow_mut().exit_fullscreen();
        let _ = disable_raw_mode();
    }

    /// Stop the render effect and restore the terminal.
    pub fn unmount(mut self) {
        self.teardown();
        tracing::info!("unmounted");
    }
}

impl Drop for AppHandle {
    fn drop(&mut self) {
        // Best effort: never leave the terminal in raw mode
        self.teardown();
    }
}

// =============================================================================
// Mount
// =============================================================================

/// Mount the deck, starting at `start` (clamped into range).
///
/// Sets up raw mode, the alternate screen, mouse capture, global key
/// handlers and the render effect. Pair with [`AppHandle::unmount`].
pub fn mount(start: usize) -> io::Result<AppHandle> {
    let deck = DeckController::new(deck::slides().len());
    let viewport = Viewport::new();

    let start = start.min(deck.last_index());
    viewport.mount(start);
    deck.go_to(start);
    let nav = Navigator::new(deck, viewport);

    if let Ok((w, h)) = crossterm::terminal::size() {
        set_terminal_size(w, h);
    }

    enable_raw_mode()?;
    let renderer = Rc::new(RefCell::new(DiffRenderer::new()));
    renderer.borrow_mut().enter_fullscreen()?;
    input::enable_mouse()?;

    let running = Arc::new(AtomicBool::new(true));

    // The ONE render effect: every signal read below is a dependency.
    let stop_effect: Box<dyn FnOnce()> = {
        let nav = nav.clone();
        let renderer = renderer.clone();
        let running = running.clone();
        Box::new(effect(move || {
            if !running.load(Ordering::SeqCst) {
                return;
            }

            let (width, height) = terminal_size();
            let current_theme = theme::active();
            let mut frame =
                FrameBuffer::with_background(width, height, current_theme.background.resolve());
            let mut hits = HitRegions::new();

            nav.viewport().with_active(|view| {
                shell::render(&mut frame, &nav, view, &current_theme, &mut hits);
            });

            // Side effects: click targets for this frame, then the terminal
            hit::install(hits);
            let _ = renderer.borrow_mut().render(&frame);
        }))
    };

    let key_cleanups = install_global_keys(&nav, running.clone());

    tracing::info!(start, "mounted");
    Ok(AppHandle {
        running,
        nav,
        renderer,
        stop_effect: Some(stop_effect),
        key_cleanups,
        torn_down: false,
    })
}

/// Unmount and clean up.
pub fn unmount(handle: AppHandle) {
    handle.unmount();
}

/// Register the deck-wide key handlers. Returns their cleanup closures.
pub fn install_global_keys(
    nav: &Navigator,
    running: Arc<AtomicBool>,
) -> Vec<Box<dyn FnOnce()>> {
    let mut cleanups: Vec<Box<dyn FnOnce()>> = Vec::new();

    let nav_next = nav.clone();
    cleanups.push(Box::new(keyboard::on_keys(&["ArrowRight", "n"], move || {
        nav_next.next();
        true
    })));

    let nav_prev = nav.clone();
    cleanups.push(Box::new(keyboard::on_keys(&["ArrowLeft", "p"], move || {
        nav_prev.prev();
        true
    })));

    let nav_home = nav.clone();
    cleanups.push(Box::new(keyboard::on_key("Home", move || {
        nav_home.go_to(0);
        true
    })));

    let nav_end = nav.clone();
    cleanups.push(Box::new(keyboard::on_key("End", move || {
        let last = nav_end.deck().last_index();
        nav_end.go_to(last);
        true
    })));

    cleanups.push(Box::new(keyboard::on_key("t", || {
        theme::cycle_theme();
        true
    })));

    let running_q = running.clone();
    cleanups.push(Box::new(keyboard::on_key("q", move || {
        running_q.store(false, Ordering::SeqCst);
        true
    })));

    // Ctrl+C - graceful shutdown
    let running_ctrl_c = running;
    cleanups.push(Box::new(keyboard::on(move |event| {
        if event.modifiers.ctrl && event.key == "c" {
            running_ctrl_c.store(false, Ordering::SeqCst);
            true
        } else {
            false
        }
    })));

    cleanups
}

// =============================================================================
// Event loop
// =============================================================================

/// Route one input event. The active slide sees key presses first; what it
/// doesn't consume falls through to the global handler registry.
pub fn route_event(event: InputEvent, nav: &Navigator) -> bool {
    match event {
        InputEvent::Key(key) => {
            if key.is_press() && nav.viewport().on_key(&key) {
                return true;
            }
            keyboard::dispatch(key)
        }
        InputEvent::Click { x, y } => hit::dispatch_click(x, y),
        InputEvent::Resize(width, height) => {
            set_terminal_size(width, height);
            false
        }
        InputEvent::None => false,
    }
}

/// Run the event loop once.
///
/// Returns `Ok(false)` when the application should stop.
pub fn tick(handle: &AppHandle) -> io::Result<bool> {
    if !handle.is_running() {
        return Ok(false);
    }

    // Sleep until input arrives or the next timer is due
    let timeout = match timer::next_deadline() {
        Some(deadline) => deadline
            .saturating_duration_since(Instant::now())
            .min(IDLE_POLL),
        None => IDLE_POLL,
    };

    if let Some(event) = input::poll_event(timeout)? {
        route_event(event, &handle.nav);
    }

    timer::fire_due(Instant::now());

    Ok(handle.is_running())
}

/// Run the event loop until Ctrl+C, `q`, or [`AppHandle::stop`].
pub fn run(handle: &AppHandle) -> io::Result<()> {
    while tick(handle)? {}
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::timer;

    fn make_nav() -> Navigator {
        let deck = DeckController::new(deck::slides().len());
        let viewport = Viewport::new();
        viewport.mount(0);
        Navigator::new(deck, viewport)
    }

    #[test]
    fn test_navigator_clamps_like_the_controller() {
        let nav = make_nav();
        nav.prev();
        assert_eq!(nav.deck().current(), 0);

        nav.go_to(999);
        assert_eq!(nav.deck().current(), 0);

        nav.go_to(19);
        nav.next();
        assert_eq!(nav.deck().current(), 19);
    }

    #[test]
    fn test_navigation_remounts_the_viewport() {
        let nav = make_nav();
        // Slide 0 is visual: a view is mounted
        assert!(nav.viewport().with_active(|view| view.is_some()));

        nav.next();
        // Slide 1 is theory: no view
        assert!(nav.viewport().with_active(|view| view.is_none()));

        nav.next();
        assert!(nav.viewport().with_active(|view| view.is_some()));
    }

    #[test]
    fn test_navigating_away_cancels_in_flight_timers() {
        let nav = make_nav();
        // Index 2 is the constructor lab; trigger its timed sequence
        nav.go_to(2);
        assert!(nav.viewport().on_key(&KeyboardEvent::new(" ")));
        assert_eq!(timer::pending_count(), 1);

        // Leaving the slide drops the view and its pending transition
        nav.go_to(3);
        assert_eq!(timer::pending_count(), 0);
    }

    #[test]
    fn test_global_keys_drive_navigation() {
        keyboard::reset_keyboard_state();
        let nav = make_nav();
        let running = Arc::new(AtomicBool::new(true));
        let cleanups = install_global_keys(&nav, running.clone());

        keyboard::dispatch(KeyboardEvent::new("ArrowRight"));
        assert_eq!(nav.deck().current(), 1);
        keyboard::dispatch(KeyboardEvent::new("n"));
        assert_eq!(nav.deck().current(), 2);
        keyboard::dispatch(KeyboardEvent::new("ArrowLeft"));
        assert_eq!(nav.deck().current(), 1);
        keyboard::dispatch(KeyboardEvent::new("End"));
        assert_eq!(nav.deck().current(), 19);
        keyboard::dispatch(KeyboardEvent::new("Home"));
        assert_eq!(nav.deck().current(), 0);

        keyboard::dispatch(KeyboardEvent::new("q"));
        assert!(!running.load(Ordering::SeqCst));

        for cleanup in cleanups {
            cleanup();
        }
    }

    #[test]
    fn test_ctrl_c_stops() {
        keyboard::reset_keyboard_state();
        let nav = make_nav();
        let running = Arc::new(AtomicBool::new(true));
        let _cleanups = install_global_keys(&nav, running.clone());

        keyboard::dispatch(KeyboardEvent::new("c"));
        assert!(running.load(Ordering::SeqCst), "plain c does nothing");

        keyboard::dispatch(KeyboardEvent::with_modifiers(
            "c",
            crate::state::Modifiers::ctrl(),
        ));
        assert!(!running.load(Ordering::SeqCst));
    }

    #[test]
    fn test_slide_consumes_keys_before_global_registry() {
        keyboard::reset_keyboard_state();
        let nav = make_nav();
        let running = Arc::new(AtomicBool::new(true));
        let _cleanups = install_global_keys(&nav, running);

        // On the blueprint slide, Space spawns; the registry never sees it
        let consumed = route_event(
            InputEvent::Key(KeyboardEvent::new(" ")),
            &nav,
        );
        assert!(consumed);
        assert_eq!(nav.deck().current(), 0, "space did not navigate");
    }

    #[test]
    fn test_resize_updates_size_signal() {
        let nav = make_nav();
        route_event(InputEvent::Resize(100, 40), &nav);
        assert_eq!(terminal_size(), (100, 40));
    }
}
