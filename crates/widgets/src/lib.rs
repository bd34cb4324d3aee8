//! Input widgets driven by dialogs.
//!
//! Dialogs only see the [`InputWidget`] trait. The two concrete widgets here
//! cover the dialog flavors: a single-line [`TextEdit`] (optionally limited to
//! characters matching a regex) and a [`ComboBox`] that cycles through fixed
//! labels.

pub mod combo_box;
pub mod text_edit;
pub mod widget;

pub use tui_dialog_term as term;
pub use tui_dialog_types as types;

pub use combo_box::ComboBox;
pub use text_edit::TextEdit;
pub use widget::{Controller, InputWidget, NoopController, WidgetStyle};
