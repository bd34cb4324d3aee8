//! Dialog geometry.
//!
//! Dialogs are centered on the screen. Offsets saturate at zero on screens
//! too small for the dialog; anything past the right or bottom edge is
//! clipped by the screen.

use unicode_width::UnicodeWidthStr;

/// Minimum splash width.
const SPLASH_MIN_WIDTH: u16 = 10;

/// A dialog box. Covers `(x, y)..=(x + w, y + h)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Frame {
    /// Center a `w` by `h` box on a `screen` sized surface.
    pub fn centered(screen: (u16, u16), w: u16, h: u16) -> Self {
        let (sw, sh) = screen;
        Self {
            x: (sw / 2).saturating_sub(w / 2),
            y: (sh / 2).saturating_sub(h / 2),
            w,
            h,
        }
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }
}

/// A pair of action buttons on one row. The right one means "accept".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Buttons {
    pub row: u16,
    pub left: (&'static str, u16),
    pub right: (&'static str, u16),
}

impl Buttons {
    /// `" No "` / `" Yes "` for the confirm dialog.
    pub fn no_yes(screen_width: u16, row: u16) -> Self {
        let x = button_x(screen_width);
        Self {
            row,
            left: (" No ", x),
            right: (" Yes ", x.saturating_add(5)),
        }
    }

    /// `" Cancel "` / `" OK "` for the input dialogs.
    pub fn cancel_ok(screen_width: u16, row: u16) -> Self {
        let x = button_x(screen_width);
        Self {
            row,
            left: (" Cancel ", x),
            right: (" OK ", x.saturating_add(10)),
        }
    }
}

fn button_x(screen_width: u16) -> u16 {
    (screen_width / 2).saturating_sub(5)
}

pub fn text_width(s: &str) -> u16 {
    u16::try_from(s.width()).unwrap_or(u16::MAX)
}

/// Yes/no question: message plus a button row.
pub fn confirm(screen: (u16, u16), message: &str) -> (Frame, Buttons) {
    let frame = Frame::centered(screen, text_width(message).saturating_add(4), 4);
    let buttons = Buttons::no_yes(screen.0, frame.y.saturating_add(3));
    (frame, buttons)
}

/// Text and integer entry: message, field on row 3, buttons on row 4.
///
/// Returns the frame, the field origin and width, and the buttons.
pub fn text_entry(screen: (u16, u16)) -> (Frame, (u16, u16), u16, Buttons) {
    let frame = Frame::centered(screen, screen.0 / 3, 4);
    let field = (frame.x.saturating_add(1), frame.y.saturating_add(3));
    let field_width = frame.w.saturating_sub(2).max(1);
    let buttons = Buttons::cancel_ok(screen.0, frame.bottom());
    (frame, field, field_width, buttons)
}

/// Choice entry: the selector sits right of the message on row 1.
pub fn choice_entry(screen: (u16, u16), message: &str) -> (Frame, (u16, u16), Buttons) {
    let frame = Frame::centered(screen, screen.0 / 3, 3);
    let field = (
        frame.x.saturating_add(text_width(message)).saturating_add(3),
        frame.y.saturating_add(1),
    );
    let buttons = Buttons::cancel_ok(screen.0, frame.bottom());
    (frame, field, buttons)
}

/// Splash: one row per line plus a title row and a bottom margin.
pub fn splash(screen: (u16, u16), lines: &[&str]) -> Frame {
    let longest = lines.iter().map(|l| text_width(l)).max().unwrap_or(0);
    let w = SPLASH_MIN_WIDTH.max(longest.saturating_add(4));
    let h = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let (sw, sh) = screen;
    Frame {
        x: (sw / 2).saturating_sub(w / 2),
        y: (sh / 2).saturating_sub(h / 2).saturating_sub(2),
        w,
        h: h.saturating_add(1),
    }
}
