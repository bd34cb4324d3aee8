//! Terminal rendering module.
//!
//! Dialogs draw through the narrow [`Screen`] trait: clear a region, draw a
//! run of text, flush, query the size. Two backends implement it:
//!
//! - [`MemoryScreen`]: an in-memory framebuffer for tests
//! - [`TerminalScreen`]: the same framebuffer flushed to a real terminal by
//!   [`TerminalRenderer`], which only re-emits changed cell runs
//!
//! Coordinates outside the framebuffer are clipped, never an error.

pub mod fb;
pub mod renderer;
pub mod screen;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer, TerminalScreen};
pub use screen::{MemoryScreen, Screen};
