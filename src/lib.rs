//! TUI Dialog (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_dialog::{types,input,term,widgets,dialog}`
//! and holds the bits shared by the binaries.

pub mod logging;

pub use tui_dialog_core as dialog;
pub use tui_dialog_input as input;
pub use tui_dialog_term as term;
pub use tui_dialog_types as types;
pub use tui_dialog_widgets as widgets;
