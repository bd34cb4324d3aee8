//! Modal dialogs driven by decoded keys.
//!
//! Every dialog is the same synchronous loop: render, block for one key,
//! react. Escape cancels, Enter commits, Tab/ShiftTab flip the highlighted
//! button, and anything else goes to the dialog's input widget (if it has
//! one). See [`DialogRunner`] for the individual flavors.

pub mod config;
pub mod layout;
pub mod runner;

pub use tui_dialog_input as input;
pub use tui_dialog_term as term;
pub use tui_dialog_types as types;
pub use tui_dialog_widgets as widgets;

pub use config::{ConfigError, DialogConfig, Theme};
pub use runner::DialogRunner;
