//! # monster-academy
//!
//! An interactive terminal slide deck for teaching object-oriented
//! programming: 20 fixed slides alternating animated monster demos with
//! theory panels, navigated with keyboard or mouse.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity: the deck has ONE render effect, and every state
//! change - navigation, a demo transition, a theme switch, a resize - flows
//! through signals into a fresh frame that the diff renderer trims down to
//! the cells that actually changed.
//!
//! ## Architecture
//!
//! ```text
//! DeckController / slide signals / theme -> shell::render -> FrameBuffer -> DiffRenderer
//!                                        -> hit regions  (mouse targets per frame)
//! crossterm events + scoped timers       -> state mutations (loop back around)
//! ```
//!
//! Every animation delay is a scoped task: the owning view's
//! [`TimerScope`](state::TimerScope) dies with the view, so navigating away
//! cancels whatever was still pending.
//!
//! ## Modules
//!
//! - [`types`] - Cell, color and rect primitives
//! - [`renderer`] - frame buffer, diff renderer, ANSI output
//! - [`state`] - keyboard registry, input bridge, hit regions, timers
//! - [`theme`] - semantic colors and presets
//! - [`deck`] - the slide registry and navigation controller
//! - [`slides`] - the per-slide demo state machines
//! - [`shell`] - header, viewport and footer rendering
//! - [`app`] - mount/unmount lifecycle and the event loop

pub mod app;
pub mod deck;
pub mod logging;
pub mod renderer;
pub mod shell;
pub mod slides;
pub mod state;
pub mod text;
pub mod theme;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use deck::{slides, DeckController, SlideKind, SlideRecord};

pub use renderer::{DiffRenderer, FrameBuffer};

pub use state::{
    // Keyboard
    KeyState, KeyboardEvent, Modifiers,
    // Timers
    TimerScope,
    // Hit testing
    HitRegions,
    // Input
    InputEvent,
};

pub use app::{mount, run, tick, unmount, AppHandle, Navigator, Viewport};

pub use theme::{active as active_theme, cycle_theme, set_theme, Theme, ThemeColor};

pub use slides::SlideView;
