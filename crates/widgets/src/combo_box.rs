//! A single-choice selector cycling through fixed labels.

use std::rc::Rc;

use unicode_width::UnicodeWidthStr;

use crate::term::Screen;
use crate::types::Key;
use crate::widget::{Controller, InputWidget, NoopController, WidgetStyle};

/// Shows the selected label as `< label >`; arrows move through the items.
pub struct ComboBox {
    x: u16,
    y: u16,
    items: Vec<String>,
    selected: usize,
    focused: bool,
    style: WidgetStyle,
    controller: Rc<dyn Controller>,
}

impl ComboBox {
    pub fn new(x: u16, y: u16) -> Self {
        Self {
            x,
            y,
            items: Vec::new(),
            selected: 0,
            focused: false,
            style: WidgetStyle::default(),
            controller: Rc::new(NoopController),
        }
    }

    pub fn add_item(&mut self, label: impl Into<String>) {
        self.items.push(label.into());
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    /// Width of the drawn control: the widest label plus the arrows.
    pub fn width(&self) -> u16 {
        let widest = self.items.iter().map(|s| s.width()).max().unwrap_or(0);
        u16::try_from(widest.saturating_add(4)).unwrap_or(u16::MAX)
    }

    fn step(&mut self, forward: bool) -> bool {
        let n = self.items.len();
        if n < 2 {
            return false;
        }
        self.selected = if forward {
            (self.selected + 1) % n
        } else {
            (self.selected + n - 1) % n
        };
        true
    }
}

impl InputWidget for ComboBox {
    fn set_controller(&mut self, controller: Rc<dyn Controller>) {
        self.controller = controller;
    }

    fn set_style(&mut self, style: WidgetStyle) {
        self.style = style;
    }

    fn focus(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.controller.focus_changed(focused);
        }
    }

    fn redraw(&self, screen: &mut dyn Screen) {
        let style = if self.focused {
            self.style.cursor
        } else {
            self.style.normal
        };
        let label = self.items.get(self.selected).map_or("", String::as_str);
        let width = self.width() as usize;
        let pad = width.saturating_sub(label.width() + 4);
        let text = format!("< {label}{} >", " ".repeat(pad));
        screen.draw_text(self.x, self.y, &text, style);
    }

    fn handle_event(&mut self, key: Key) {
        let changed = match key {
            Key::ArrowUp | Key::ArrowLeft => self.step(false),
            Key::ArrowDown | Key::ArrowRight | Key::SPACE => self.step(true),
            _ => false,
        };
        if changed {
            log::trace!("combo box selected {:?}", self.value());
            self.controller.value_changed(&self.value());
        }
    }

    fn value(&self) -> String {
        self.items.get(self.selected).cloned().unwrap_or_default()
    }
}
