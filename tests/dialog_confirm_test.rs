//! Confirm dialog driven by scripted keys on an in-memory screen.

use std::io;

use tui_dialog::dialog::DialogRunner;
use tui_dialog::input::ScriptedSource;
use tui_dialog::term::{MemoryScreen, Rgb};
use tui_dialog::types::Key;

fn runner(keys: &[Key]) -> DialogRunner<MemoryScreen, ScriptedSource> {
    DialogRunner::new(
        MemoryScreen::new(80, 24),
        ScriptedSource::from_keys(keys.iter().copied()),
    )
}

fn confirm(keys: &[Key]) -> bool {
    runner(keys).confirm("Really quit?").unwrap()
}

#[test]
fn enter_accepts_the_default_yes() {
    assert!(confirm(&[Key::ENTER]));
}

#[test]
fn tab_then_enter_selects_no() {
    assert!(!confirm(&[Key::TAB, Key::ENTER]));
    assert!(!confirm(&[Key::ShiftTab, Key::ENTER]));
    assert!(confirm(&[Key::TAB, Key::ShiftTab, Key::ENTER]));
}

#[test]
fn arrows_flip_the_selection() {
    assert!(!confirm(&[Key::ArrowLeft, Key::ENTER]));
    assert!(!confirm(&[Key::ArrowRight, Key::ENTER]));
    assert!(confirm(&[Key::ArrowRight, Key::ArrowLeft, Key::ENTER]));
}

#[test]
fn letter_shortcuts_ignore_the_toggle() {
    assert!(!confirm(&[Key::Byte(b'n')]));
    assert!(!confirm(&[Key::TAB, Key::TAB, Key::Byte(b'N')]));
    assert!(confirm(&[Key::TAB, Key::Byte(b'y')]));
    assert!(confirm(&[Key::Byte(b'Y')]));
}

#[test]
fn escape_always_answers_no() {
    assert!(!confirm(&[Key::ESCAPE]));
    assert!(!confirm(&[Key::TAB, Key::TAB, Key::ESCAPE]));
}

#[test]
fn unrelated_keys_are_ignored() {
    let mut r = runner(&[
        Key::Byte(b'q'),
        Key::ArrowUp,
        Key::Unknown,
        Key::Delete,
        Key::ENTER,
    ]);
    assert!(r.confirm("Continue?").unwrap());
    assert_eq!(r.input().consumed(), 5);
}

#[test]
fn one_frame_is_flushed_before_each_key() {
    let mut r = runner(&[Key::TAB, Key::TAB, Key::ENTER]);
    r.confirm("Save?").unwrap();
    assert_eq!(r.screen().flushes(), 3);
    assert_eq!(r.input().consumed(), 3);
    assert_eq!(r.input().remaining(), 0);
}

#[test]
fn no_key_is_read_past_the_answer() {
    let mut r = runner(&[Key::Byte(b'y'), Key::ENTER, Key::ENTER]);
    assert!(r.confirm("Save?").unwrap());
    assert_eq!(r.input().remaining(), 2);
}

#[test]
fn highlight_follows_the_toggle() {
    let mut r = runner(&[Key::ENTER]);
    r.confirm("Quit?").unwrap();
    let screen = r.screen();
    assert!(screen.contains("Quit?"));
    let (yes_x, yes_y) = screen.find(" Yes ").unwrap();
    let (no_x, no_y) = screen.find(" No ").unwrap();
    let fb = screen.framebuffer();
    assert_eq!(fb.get(yes_x, yes_y).unwrap().style.bg, Rgb::YELLOW);
    assert_eq!(fb.get(no_x, no_y).unwrap().style.bg, Rgb::CYAN);

    // The last frame before Enter had No highlighted.
    let mut r = runner(&[Key::TAB, Key::ENTER]);
    r.confirm("Quit?").unwrap();
    let screen = r.screen();
    let (no_x, no_y) = screen.find(" No ").unwrap();
    assert_eq!(
        screen.framebuffer().get(no_x, no_y).unwrap().style.bg,
        Rgb::YELLOW
    );
}

#[test]
fn exhausted_input_is_an_error() {
    let err = runner(&[Key::TAB]).confirm("Quit?").unwrap_err();
    let io_err = err.downcast_ref::<io::Error>().unwrap();
    assert_eq!(io_err.kind(), io::ErrorKind::UnexpectedEof);
}

#[test]
fn raw_escape_sequences_drive_the_dialog() {
    let mut src = ScriptedSource::new();
    src.push_raw(&[0x1b, 0x5b, 0x5a]).push_raw(&[0x0d]);
    let mut r = DialogRunner::new(MemoryScreen::new(80, 24), src);
    assert!(!r.confirm("Delete file?").unwrap());
}

#[test]
fn tiny_terminals_do_not_panic() {
    let mut r = DialogRunner::new(
        MemoryScreen::new(3, 2),
        ScriptedSource::from_keys([Key::TAB, Key::ENTER]),
    );
    assert!(!r.confirm("a question far wider than the screen").unwrap());
}
