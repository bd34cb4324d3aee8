//! Text, integer, choice and boolean dialogs driven by scripted keys.

use std::cell::RefCell;
use std::rc::Rc;

use tui_dialog::dialog::DialogRunner;
use tui_dialog::input::ScriptedSource;
use tui_dialog::term::MemoryScreen;
use tui_dialog::types::Key;
use tui_dialog::widgets::{Controller, NoopController};

fn noop() -> Rc<dyn Controller> {
    Rc::new(NoopController)
}

fn runner(src: ScriptedSource) -> DialogRunner<MemoryScreen, ScriptedSource> {
    DialogRunner::new(MemoryScreen::new(90, 30), src)
}

fn typed_then(text: &str, keys: &[Key]) -> ScriptedSource {
    let mut src = ScriptedSource::typed(text);
    for &key in keys {
        src.push_key(key);
    }
    src
}

fn keys(keys: &[Key]) -> ScriptedSource {
    ScriptedSource::from_keys(keys.iter().copied())
}

#[test]
fn text_escape_keeps_what_was_typed() {
    let mut r = runner(typed_then("hello", &[Key::ESCAPE]));
    assert_eq!(
        r.input_string(noop(), "Name").unwrap(),
        ("hello".to_string(), false)
    );
}

#[test]
fn text_enter_accepts() {
    let mut r = runner(typed_then("hello", &[Key::ENTER]));
    assert_eq!(
        r.input_string(noop(), "Name").unwrap(),
        ("hello".to_string(), true)
    );
}

#[test]
fn text_enter_on_cancel_button_is_not_accepted() {
    let mut r = runner(typed_then("hi", &[Key::TAB, Key::ENTER]));
    assert_eq!(
        r.input_string(noop(), "Name").unwrap(),
        ("hi".to_string(), false)
    );

    let mut r = runner(typed_then("hi", &[Key::ShiftTab, Key::TAB, Key::ENTER]));
    assert!(r.input_string(noop(), "Name").unwrap().1);
}

#[test]
fn text_editing_keys_reach_the_widget() {
    let mut src = ScriptedSource::typed("helo");
    src.push_key(Key::ArrowLeft)
        .push_text("l")
        .push_key(Key::CTRL_E)
        .push_key(Key::BACKSPACE2)
        .push_text("o!")
        .push_key(Key::ENTER);
    let mut r = runner(src);
    assert_eq!(
        r.input_string(noop(), "Word").unwrap(),
        ("hello!".to_string(), true)
    );
}

#[test]
fn text_letters_y_and_n_are_typed_not_answers() {
    let mut r = runner(typed_then("ynYN", &[Key::ENTER]));
    assert_eq!(r.input_string(noop(), "Letters").unwrap().0, "ynYN");
}

#[test]
fn text_dialog_draws_message_field_and_buttons() {
    let mut r = runner(typed_then("abc", &[Key::ENTER]));
    r.input_string(noop(), "Callsign").unwrap();
    let screen = r.screen();
    assert!(screen.contains("Callsign"));
    assert!(screen.contains("abc"));
    assert!(screen.contains(" Cancel "));
    assert!(screen.contains(" OK "));
    assert_eq!(screen.flushes(), 4);
}

#[test]
fn integer_enter_parses() {
    let mut r = runner(typed_then("42", &[Key::ENTER]));
    assert_eq!(r.input_integer(noop(), "Count").unwrap(), (42, true));
}

#[test]
fn integer_empty_is_a_cancel() {
    let mut r = runner(keys(&[Key::ENTER]));
    assert_eq!(r.input_integer(noop(), "Count").unwrap(), (0, false));
}

#[test]
fn integer_filters_non_digits() {
    let mut r = runner(typed_then("12x", &[Key::ENTER]));
    assert_eq!(r.input_integer(noop(), "Count").unwrap(), (12, true));

    let mut r = runner(typed_then("-7", &[Key::ENTER]));
    assert_eq!(r.input_integer(noop(), "Count").unwrap(), (7, true));
}

#[test]
fn integer_escape_discards_the_value() {
    let mut r = runner(typed_then("42", &[Key::ESCAPE]));
    assert_eq!(r.input_integer(noop(), "Count").unwrap(), (0, false));
}

#[test]
fn integer_toggle_keeps_the_value_but_not_acceptance() {
    let mut r = runner(typed_then("42", &[Key::TAB, Key::ENTER]));
    assert_eq!(r.input_integer(noop(), "Count").unwrap(), (42, false));
}

#[test]
fn integer_overflow_is_a_cancel() {
    let mut r = runner(typed_then("99999999999999999999", &[Key::ENTER]));
    assert_eq!(r.input_integer(noop(), "Count").unwrap(), (0, false));

    let mut r = runner(typed_then("9223372036854775807", &[Key::ENTER]));
    assert_eq!(r.input_integer(noop(), "Count").unwrap(), (i64::MAX, true));
}

const ABC: [&str; 3] = ["A", "B", "C"];

#[test]
fn choice_tab_only_moves_between_buttons() {
    let mut r = runner(keys(&[Key::TAB, Key::TAB, Key::ENTER]));
    assert_eq!(
        r.input_choice(noop(), "Pick", &ABC).unwrap(),
        ("A".to_string(), true)
    );

    let mut r = runner(keys(&[Key::TAB, Key::ENTER]));
    assert_eq!(
        r.input_choice(noop(), "Pick", &ABC).unwrap(),
        ("A".to_string(), false)
    );
}

#[test]
fn choice_arrows_move_through_options() {
    let mut r = runner(keys(&[Key::ArrowDown, Key::ENTER]));
    assert_eq!(r.input_choice(noop(), "Pick", &ABC).unwrap().0, "B");

    let mut r = runner(keys(&[Key::ArrowRight, Key::ENTER]));
    assert_eq!(
        r.input_choice(noop(), "Pick", &ABC).unwrap(),
        ("B".to_string(), true)
    );

    let mut r = runner(keys(&[Key::ArrowLeft, Key::ENTER]));
    assert_eq!(r.input_choice(noop(), "Pick", &ABC).unwrap().0, "C");
}

#[test]
fn choice_escape_reports_current_selection() {
    let mut r = runner(keys(&[Key::ArrowDown, Key::ArrowDown, Key::ESCAPE]));
    assert_eq!(
        r.input_choice(noop(), "Pick", &ABC).unwrap(),
        ("C".to_string(), false)
    );
}

#[test]
fn choice_accepts_owned_strings() {
    let options = vec!["20m".to_string(), "40m".to_string()];
    let mut r = runner(keys(&[Key::SPACE, Key::ENTER]));
    assert_eq!(
        r.input_choice(noop(), "Band", &options).unwrap(),
        ("40m".to_string(), true)
    );
}

#[test]
fn bool_defaults_to_no() {
    let mut r = runner(keys(&[Key::ENTER]));
    assert_eq!(r.input_bool(noop(), "QSL sent?").unwrap(), (false, true));
}

#[test]
fn bool_yes_after_moving_selection() {
    let mut r = runner(keys(&[Key::ArrowDown, Key::ENTER]));
    assert_eq!(r.input_bool(noop(), "QSL sent?").unwrap(), (true, true));

    let mut r = runner(keys(&[Key::ArrowDown, Key::ESCAPE]));
    assert_eq!(r.input_bool(noop(), "QSL sent?").unwrap(), (true, false));
}

#[derive(Default)]
struct Recorder {
    values: RefCell<Vec<String>>,
    focus: RefCell<Vec<bool>>,
}

impl Controller for Recorder {
    fn value_changed(&self, value: &str) {
        self.values.borrow_mut().push(value.to_string());
    }

    fn focus_changed(&self, focused: bool) {
        self.focus.borrow_mut().push(focused);
    }
}

#[test]
fn controller_is_handed_to_the_widget() {
    let recorder = Rc::new(Recorder::default());
    let mut r = runner(typed_then("ok", &[Key::ENTER]));
    r.input_string(recorder.clone(), "Note").unwrap();
    assert_eq!(*recorder.values.borrow(), vec!["o", "ok"]);
    assert_eq!(*recorder.focus.borrow(), vec![true]);

    let recorder = Rc::new(Recorder::default());
    let mut r = runner(keys(&[Key::ArrowDown, Key::ENTER]));
    r.input_choice(recorder.clone(), "Pick", &ABC).unwrap();
    assert_eq!(*recorder.values.borrow(), vec!["B"]);
}
