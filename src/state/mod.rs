//! Runtime state: keyboard registry, input bridge, click targets, timers.

pub mod hit;
pub mod input;
pub mod keyboard;
pub mod timer;

pub use hit::HitRegions;
pub use input::InputEvent;
pub use keyboard::{KeyState, KeyboardEvent, Modifiers};
pub use timer::TimerScope;
