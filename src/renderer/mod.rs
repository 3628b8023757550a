//! Terminal renderer: frame buffer, diffing, ANSI output.
//!
//! The pipeline is buffer-oriented: the shell draws a full [`FrameBuffer`]
//! every render, and [`DiffRenderer`] emits only the cells that changed
//! since the previous frame, wrapped in a synchronized update block.

pub mod ansi;
pub mod buffer;
pub mod diff;
pub mod output;

pub use buffer::FrameBuffer;
pub use diff::DiffRenderer;
pub use output::{OutputBuffer, StatefulCellRenderer};
