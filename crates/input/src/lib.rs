//! Terminal input module (dialog-facing).
//!
//! This module is intentionally independent of any UI framework. It reads one
//! raw terminal event at a time and classifies it into a single logical
//! [`Key`](crate::types::Key). There is no buffering reader: every read is one
//! chunk that is decoded by its length and content alone.

pub mod decode;
pub mod source;

pub use tui_dialog_types as types;

pub use decode::decode;
pub use source::{read_event, read_key, RawSource, ScriptedSource, StdinSource};
