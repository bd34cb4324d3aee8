//! DialogRunner: the dialog flavors and their shared key loop.
//!
//! | Flavor | Widget | Commit | Cancel |
//! |--------|--------|--------|--------|
//! | [`confirm`](DialogRunner::confirm) | none | highlighted button (`y`/`n` answer directly) | `false` |
//! | [`input_string`](DialogRunner::input_string) | [`TextEdit`] | `(text, toggle)` | `(text, false)` |
//! | [`input_integer`](DialogRunner::input_integer) | digits-only [`TextEdit`] | `(n, toggle)`, or `(0, false)` if unparsable | `(0, false)` |
//! | [`input_choice`](DialogRunner::input_choice) | [`ComboBox`] | `(label, toggle)` | `(label, false)` |
//! | [`input_bool`](DialogRunner::input_bool) | choice of `No`/`Yes` | `(label == "Yes", toggle)` | same |
//! | [`splash`](DialogRunner::splash) | none | dismissed by Enter, Escape or space | same |
//!
//! Exactly one frame is flushed before each blocking read, and exactly one key
//! is consumed per iteration.

use std::rc::Rc;

use anyhow::Result;

use crate::config::Theme;
use crate::input::{read_key, RawSource};
use crate::layout::{self, Buttons, Frame};
use crate::term::Screen;
use crate::types::Key;
use crate::widgets::{ComboBox, Controller, InputWidget, TextEdit};

/// Labels offered by [`DialogRunner::input_bool`], in display order.
pub const BOOL_CHOICES: [&str; 2] = ["No", "Yes"];

const DIGITS: &str = "[0-9]";

/// Which keys a flavor treats specially.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct KeyPolicy {
    /// Arrow left/right also flip the button highlight.
    pub arrows_toggle: bool,
    /// `y`/`n` answer immediately.
    pub yes_no_shortcuts: bool,
    /// Unclaimed keys go to the input widget.
    pub has_widget: bool,
}

/// What one key does to a running dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Cancel,
    Commit,
    Toggle,
    Answer(bool),
    Forward,
    Ignore,
}

pub(crate) fn interpret(policy: KeyPolicy, key: Key) -> Action {
    match key {
        Key::ESCAPE => Action::Cancel,
        Key::ENTER => Action::Commit,
        Key::TAB | Key::ShiftTab => Action::Toggle,
        Key::ArrowLeft | Key::ArrowRight if policy.arrows_toggle => Action::Toggle,
        Key::Byte(b'y' | b'Y') if policy.yes_no_shortcuts => Action::Answer(true),
        Key::Byte(b'n' | b'N') if policy.yes_no_shortcuts => Action::Answer(false),
        Key::Unknown => Action::Ignore,
        _ if policy.has_widget => Action::Forward,
        _ => Action::Ignore,
    }
}

/// How a dialog loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Exit {
    /// Enter, with the accept button highlighted or not.
    Commit(bool),
    Cancel,
    /// A direct yes/no shortcut.
    Answer(bool),
}

/// Everything one dialog flavor plugs into the shared loop.
struct Flow<'a> {
    name: &'static str,
    message: &'a str,
    frame: Frame,
    buttons: Buttons,
    policy: KeyPolicy,
    widget: Option<&'a mut dyn InputWidget>,
}

/// Runs modal dialogs on a screen, reading keys from a raw source.
///
/// Only one dialog runs at a time: each method blocks until its dialog is
/// committed or cancelled.
pub struct DialogRunner<S, R> {
    screen: S,
    input: R,
    theme: Theme,
}

impl<S: Screen, R: RawSource> DialogRunner<S, R> {
    pub fn new(screen: S, input: R) -> Self {
        Self {
            screen,
            input,
            theme: Theme::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn input(&self) -> &R {
        &self.input
    }

    /// Ask a yes/no question. "Yes" starts highlighted.
    pub fn confirm(&mut self, msg: &str) -> Result<bool> {
        let (frame, buttons) = layout::confirm(self.screen.size(), msg);
        let exit = self.run(Flow {
            name: "confirm",
            message: msg,
            frame,
            buttons,
            policy: KeyPolicy {
                arrows_toggle: true,
                yes_no_shortcuts: true,
                has_widget: false,
            },
            widget: None,
        })?;
        let answer = match exit {
            Exit::Commit(accept) | Exit::Answer(accept) => accept,
            Exit::Cancel => false,
        };
        log::debug!("confirm {msg:?} -> {answer}");
        Ok(answer)
    }

    /// Prompt for free text. Returns the text and whether it was accepted.
    pub fn input_string(
        &mut self,
        controller: Rc<dyn Controller>,
        msg: &str,
    ) -> Result<(String, bool)> {
        let mut edit = self.text_edit(controller);
        let exit = self.run_text_entry("input_string", msg, &mut edit)?;
        Ok((edit.value(), accepted(exit)))
    }

    /// Prompt for a base-10 integer.
    ///
    /// Only digits can be typed. Committing an empty or out-of-range value
    /// counts as a cancel and yields `(0, false)`.
    pub fn input_integer(
        &mut self,
        controller: Rc<dyn Controller>,
        msg: &str,
    ) -> Result<(i64, bool)> {
        let mut edit = self.text_edit(controller);
        edit.set_allowed_character_set(DIGITS)?;
        let exit = self.run_text_entry("input_integer", msg, &mut edit)?;
        let Exit::Commit(accept) = exit else {
            return Ok((0, false));
        };
        match edit.value().parse::<i64>() {
            Ok(n) => Ok((n, accept)),
            Err(e) => {
                log::debug!("input_integer: {:?} rejected: {e}", edit.value());
                Ok((0, false))
            }
        }
    }

    /// Prompt for one of `choices`. Returns the selected label and whether
    /// it was accepted.
    ///
    /// Tab only moves between Cancel and OK; the arrows move through the
    /// choices.
    pub fn input_choice<T: AsRef<str>>(
        &mut self,
        controller: Rc<dyn Controller>,
        msg: &str,
        choices: &[T],
    ) -> Result<(String, bool)> {
        let (frame, (fx, fy), buttons) = layout::choice_entry(self.screen.size(), msg);
        let mut combo = ComboBox::new(fx, fy);
        for choice in choices {
            combo.add_item(choice.as_ref());
        }
        combo.set_style(self.theme.widget());
        combo.set_controller(controller);
        combo.focus(true);

        let exit = self.run(Flow {
            name: "input_choice",
            message: msg,
            frame,
            buttons,
            policy: KeyPolicy {
                arrows_toggle: false,
                yes_no_shortcuts: false,
                has_widget: true,
            },
            widget: Some(&mut combo as &mut dyn InputWidget),
        })?;
        Ok((combo.value(), accepted(exit)))
    }

    /// A `No`/`Yes` choice. The first value is true iff `Yes` was selected.
    pub fn input_bool(
        &mut self,
        controller: Rc<dyn Controller>,
        msg: &str,
    ) -> Result<(bool, bool)> {
        let (label, ok) = self.input_choice(controller, msg, &BOOL_CHOICES[..])?;
        Ok((label == BOOL_CHOICES[1], ok))
    }

    /// Show `text` centered until Enter, Escape or space is pressed.
    pub fn splash(&mut self, title: &str, text: &str) -> Result<()> {
        let lines: Vec<&str> = text.split('\n').collect();
        let frame = layout::splash(self.screen.size(), &lines);
        let style = self.theme.text();
        log::debug!("splash {title:?} opened");
        loop {
            self.screen
                .clear_region(frame.x, frame.y, frame.right(), frame.bottom(), style);
            if !title.is_empty() {
                self.screen
                    .draw_text(frame.x.saturating_add(2), frame.y, title, style.bold());
            }
            for (row, line) in (frame.y.saturating_add(1)..).zip(&lines) {
                self.screen
                    .draw_text(frame.x.saturating_add(2), row, line, style);
            }
            self.screen.flush()?;

            let key = read_key(&mut self.input)?;
            if matches!(key, Key::ENTER | Key::ESCAPE | Key::SPACE) {
                log::debug!("splash {title:?} dismissed by {key}");
                return Ok(());
            }
        }
    }

    fn text_edit(&self, controller: Rc<dyn Controller>) -> TextEdit {
        let (_, (fx, fy), width, _) = layout::text_entry(self.screen.size());
        let mut edit = TextEdit::new(fx, fy);
        edit.set_width(width);
        edit.set_style(self.theme.widget());
        edit.set_controller(controller);
        edit.focus(true);
        edit
    }

    fn run_text_entry(
        &mut self,
        name: &'static str,
        msg: &str,
        edit: &mut TextEdit,
    ) -> Result<Exit> {
        let (frame, _, _, buttons) = layout::text_entry(self.screen.size());
        self.run(Flow {
            name,
            message: msg,
            frame,
            buttons,
            policy: KeyPolicy {
                arrows_toggle: false,
                yes_no_shortcuts: false,
                has_widget: true,
            },
            widget: Some(edit as &mut dyn InputWidget),
        })
    }

    /// The shared loop: render, block for one key, react.
    fn run(&mut self, mut flow: Flow<'_>) -> Result<Exit> {
        log::debug!("{} dialog opened: {:?}", flow.name, flow.message);
        let mut accept = true;
        loop {
            self.render(&flow, accept)?;
            let key = read_key(&mut self.input)?;
            let exit = match interpret(flow.policy, key) {
                Action::Cancel => Exit::Cancel,
                Action::Commit => Exit::Commit(accept),
                Action::Answer(answer) => Exit::Answer(answer),
                Action::Toggle => {
                    accept = !accept;
                    continue;
                }
                Action::Forward => {
                    if let Some(widget) = flow.widget.as_deref_mut() {
                        widget.handle_event(key);
                    }
                    continue;
                }
                Action::Ignore => continue,
            };
            log::debug!("{} dialog closed: {exit:?}", flow.name);
            return Ok(exit);
        }
    }

    fn render(&mut self, flow: &Flow<'_>, accept: bool) -> Result<()> {
        let Flow { frame, buttons, .. } = *flow;
        let text = self.theme.text();
        self.screen
            .clear_region(frame.x, frame.y, frame.right(), frame.bottom(), text);
        self.screen
            .draw_text(frame.x.saturating_add(2), frame.y.saturating_add(1), flow.message, text);
        if let Some(widget) = flow.widget.as_deref() {
            widget.redraw(&mut self.screen);
        }
        let (left, lx) = buttons.left;
        let (right, rx) = buttons.right;
        self.screen
            .draw_text(lx, buttons.row, left, self.theme.button(!accept));
        self.screen
            .draw_text(rx, buttons.row, right, self.theme.button(accept));
        self.screen.flush()
    }
}

fn accepted(exit: Exit) -> bool {
    matches!(exit, Exit::Commit(true) | Exit::Answer(true))
}
