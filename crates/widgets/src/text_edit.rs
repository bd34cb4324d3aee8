//! Single-line text editor.

use std::rc::Rc;

use regex::Regex;
use unicode_width::UnicodeWidthChar;

use crate::term::Screen;
use crate::types::Key;
use crate::widget::{Controller, InputWidget, NoopController, WidgetStyle};

/// A one-line editable text field.
///
/// The field is `width` cells wide and scrolls horizontally to keep the
/// cursor visible.
pub struct TextEdit {
    x: u16,
    y: u16,
    width: u16,
    text: Vec<char>,
    /// Cursor position as a char index into `text`.
    cursor: usize,
    /// First visible char index.
    offset: usize,
    allowed: Option<Regex>,
    focused: bool,
    style: WidgetStyle,
    controller: Rc<dyn Controller>,
}

impl TextEdit {
    pub fn new(x: u16, y: u16) -> Self {
        Self {
            x,
            y,
            width: 10,
            text: Vec::new(),
            cursor: 0,
            offset: 0,
            allowed: None,
            focused: false,
            style: WidgetStyle::default(),
            controller: Rc::new(NoopController),
        }
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width.max(1);
        self.scroll_to_cursor();
    }

    /// Only accept characters for which the regex `pattern` matches.
    ///
    /// Each typed character is tested on its own, so `[0-9]` and `\d` both
    /// limit the field to digits.
    pub fn set_allowed_character_set(&mut self, pattern: &str) -> Result<(), regex::Error> {
        self.allowed = Some(Regex::new(pattern)?);
        Ok(())
    }

    fn accepts(&self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.allowed
            .as_ref()
            .map_or(true, |re| re.is_match(ch.encode_utf8(&mut buf)))
    }

    fn insert(&mut self, ch: char) -> bool {
        if !self.accepts(ch) {
            log::trace!("text edit rejected {ch:?}");
            return false;
        }
        self.text.insert(self.cursor, ch);
        self.cursor += 1;
        true
    }

    fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.text.remove(self.cursor);
        true
    }

    fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        self.text.remove(self.cursor);
        true
    }

    fn kill_to_end(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        self.text.truncate(self.cursor);
        true
    }

    fn clear(&mut self) -> bool {
        if self.text.is_empty() {
            return false;
        }
        self.text.clear();
        self.cursor = 0;
        true
    }

    fn display_width(chars: &[char]) -> usize {
        chars.iter().map(|c| c.width().unwrap_or(0)).sum()
    }

    fn scroll_to_cursor(&mut self) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        }
        // Leave one cell for the cursor itself.
        let room = (self.width as usize).saturating_sub(1);
        while Self::display_width(&self.text[self.offset..self.cursor]) > room {
            self.offset += 1;
        }
    }
}

impl InputWidget for TextEdit {
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
        let last = self.x.saturating_add(self.width - 1);
        screen.clear_region(self.x, self.y, last, self.y, self.style.normal);

        let mut col = self.x;
        for (i, &ch) in self.text.iter().enumerate().skip(self.offset) {
            let w = ch.width().unwrap_or(0) as u16;
            if col.saturating_add(w) > self.x.saturating_add(self.width) {
                break;
            }
            let style = if self.focused && i == self.cursor {
                self.style.cursor
            } else {
                self.style.normal
            };
            let mut buf = [0u8; 4];
            screen.draw_text(col, self.y, ch.encode_utf8(&mut buf), style);
            col = col.saturating_add(w);
        }

        if self.focused && self.cursor == self.text.len() && col <= last {
            screen.draw_text(col, self.y, " ", self.style.cursor);
        }
    }

    fn handle_event(&mut self, key: Key) {
        let changed = match key {
            Key::BACKSPACE | Key::BACKSPACE2 => self.delete_backward(),
            Key::Delete => self.delete_forward(),
            Key::ArrowLeft => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            Key::ArrowRight => {
                self.cursor = (self.cursor + 1).min(self.text.len());
                false
            }
            Key::CTRL_A => {
                self.cursor = 0;
                false
            }
            Key::CTRL_E => {
                self.cursor = self.text.len();
                false
            }
            Key::CTRL_K => self.kill_to_end(),
            Key::CTRL_U => self.clear(),
            _ => match key.as_char() {
                Some(ch) => self.insert(ch),
                None => false,
            },
        };
        self.scroll_to_cursor();
        if changed {
            self.controller.value_changed(&self.value());
        }
    }

    fn value(&self) -> String {
        self.text.iter().collect()
    }
}
