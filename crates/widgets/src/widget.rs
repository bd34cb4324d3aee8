//! The widget seam and the controller capability.

use std::rc::Rc;

use crate::term::{CellStyle, Rgb, Screen};
use crate::types::Key;

/// Capability object handed to widgets by the embedding application.
///
/// What it does with the notifications is up to the application; both hooks
/// default to doing nothing.
pub trait Controller {
    fn value_changed(&self, _value: &str) {}

    fn focus_changed(&self, _focused: bool) {}
}

/// A controller that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopController;

impl Controller for NoopController {}

/// Colors used when a widget draws itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetStyle {
    pub normal: CellStyle,
    pub cursor: CellStyle,
}

impl Default for WidgetStyle {
    fn default() -> Self {
        Self {
            normal: CellStyle::new(Rgb::WHITE, Rgb::BLUE),
            cursor: CellStyle::new(Rgb::BLUE, Rgb::WHITE),
        }
    }
}

/// An editable control hosted by a dialog.
pub trait InputWidget {
    fn set_controller(&mut self, controller: Rc<dyn Controller>);

    fn set_style(&mut self, style: WidgetStyle);

    fn focus(&mut self, focused: bool);

    fn redraw(&self, screen: &mut dyn Screen);

    /// Apply one key to the widget's own state.
    fn handle_event(&mut self, key: Key);

    fn value(&self) -> String;
}
