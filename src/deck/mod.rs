//! The deck: slide registry and navigation controller.

pub mod controller;
pub mod registry;

pub use controller::DeckController;
pub use registry::{slides, SlideBody, SlideKind, SlideRecord, TheoryContent, Tip, TipKind};
