//! Key decoding from raw terminal events.
//!
//! Recognized shapes:
//!
//! | Bytes | Key |
//! |-------|-----|
//! | `XX` | literal byte |
//! | `1B 4F 41..44` | ArrowUp / ArrowDown / ArrowRight / ArrowLeft |
//! | `1B 5B 5A` | ShiftTab |
//! | `1B 5B 33 7E` | Delete |
//!
//! Everything else is [`Key::Unknown`]. This is a closed recognizer, not an
//! ANSI parser: a new multi-byte key needs a new length/pattern arm.

use crate::types::{Key, RawEvent};

const ESC: u8 = 0x1b;
const SS3: u8 = 0x4f;
const CSI: u8 = 0x5b;

/// Classify one raw event. Pure and total.
pub fn decode(raw: &RawEvent) -> Key {
    let bytes = raw.bytes();
    let key = match bytes.len() {
        1 => Key::Byte(bytes[0]),
        3 => parse3(bytes),
        4 => parse4(bytes),
        _ => Key::Unknown,
    };
    if key == Key::Unknown {
        log::trace!("unrecognized raw event {:02x?}", bytes);
    } else {
        log::trace!("decoded {:02x?} as {}", bytes, key);
    }
    key
}

fn parse3(d: &[u8]) -> Key {
    let &[first, second, third] = d else {
        log::warn!("expected a three byte event, got {:02x?}", d);
        return Key::Unknown;
    };
    match (first, second, third) {
        (ESC, SS3, 0x41) => Key::ArrowUp,
        (ESC, SS3, 0x42) => Key::ArrowDown,
        (ESC, SS3, 0x43) => Key::ArrowRight,
        (ESC, SS3, 0x44) => Key::ArrowLeft,
        (ESC, CSI, 0x5a) => Key::ShiftTab,
        _ => Key::Unknown,
    }
}

fn parse4(d: &[u8]) -> Key {
    let &[first, second, third, fourth] = d else {
        log::warn!("expected a four byte event, got {:02x?}", d);
        return Key::Unknown;
    };
    match (first, second, third, fourth) {
        (ESC, CSI, 0x33, 0x7e) => Key::Delete,
        _ => Key::Unknown,
    }
}
