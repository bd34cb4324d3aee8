//! Core types module - logical keys and raw terminal events
//!
//! Everything here is plain data with no I/O, so the decoder, the widgets and
//! the dialogs can all share it.
//!
//! # Key domain
//!
//! A [`Key`] is either a literal byte (`0x00..=0xFF`) or one of a closed set
//! of extended keys that have no single-byte form. The numeric view returned
//! by [`Key::code`] keeps the two ranges disjoint:
//!
//! | Range | Meaning |
//! |-------|---------|
//! | `0x01..=0x1A` | Ctrl+A .. Ctrl+Z (Backspace, Tab and Enter alias Ctrl+H/I/M) |
//! | `0x1B` | Escape |
//! | `0x7F` | Backspace (second form) |
//! | other bytes | literal characters |
//! | `256..` | Unknown, ShiftTab, Delete, arrows |
//!
//! # Examples
//!
//! ```
//! use tui_dialog_types::{Key, RawEvent};
//!
//! assert_eq!(Key::ctrl('m'), Key::ENTER);
//! assert!(Key::ArrowUp.is_extended());
//! assert_eq!(Key::Unknown.code(), 256);
//!
//! let raw = RawEvent::from_bytes(&[0x1b, 0x5b, 0x5a]);
//! assert_eq!(raw.len(), 3);
//! ```

use std::fmt;

use arrayvec::ArrayVec;

/// Capacity of one raw terminal read, in bytes.
pub const RAW_EVENT_CAPACITY: usize = 10;

/// First numeric code of the extended key range.
pub const EXTENDED_KEY_BASE: u16 = 256;

/// A logical key decoded from one raw terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A literal byte: control byte or printable character.
    Byte(u8),
    Unknown,
    ShiftTab,
    Delete,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl Key {
    pub const CTRL_A: Key = Key::Byte(0x01);
    pub const CTRL_B: Key = Key::Byte(0x02);
    pub const CTRL_C: Key = Key::Byte(0x03);
    pub const CTRL_D: Key = Key::Byte(0x04);
    pub const CTRL_E: Key = Key::Byte(0x05);
    pub const CTRL_F: Key = Key::Byte(0x06);
    pub const CTRL_G: Key = Key::Byte(0x07);
    pub const BACKSPACE: Key = Key::Byte(0x08);
    pub const CTRL_H: Key = Key::Byte(0x08);
    /// Same as Ctrl+I.
    pub const TAB: Key = Key::Byte(0x09);
    pub const CTRL_I: Key = Key::Byte(0x09);
    pub const CTRL_J: Key = Key::Byte(0x0A);
    pub const CTRL_K: Key = Key::Byte(0x0B);
    pub const CTRL_L: Key = Key::Byte(0x0C);
    /// Same as Ctrl+M.
    pub const ENTER: Key = Key::Byte(0x0D);
    pub const CTRL_M: Key = Key::Byte(0x0D);
    pub const CTRL_N: Key = Key::Byte(0x0E);
    pub const CTRL_O: Key = Key::Byte(0x0F);
    pub const CTRL_P: Key = Key::Byte(0x10);
    pub const CTRL_Q: Key = Key::Byte(0x11);
    pub const CTRL_R: Key = Key::Byte(0x12);
    pub const CTRL_S: Key = Key::Byte(0x13);
    pub const CTRL_T: Key = Key::Byte(0x14);
    pub const CTRL_U: Key = Key::Byte(0x15);
    pub const CTRL_V: Key = Key::Byte(0x16);
    pub const CTRL_W: Key = Key::Byte(0x17);
    pub const CTRL_X: Key = Key::Byte(0x18);
    pub const CTRL_Y: Key = Key::Byte(0x19);
    pub const CTRL_Z: Key = Key::Byte(0x1A);
    pub const ESCAPE: Key = Key::Byte(0x1B);
    pub const BACKSPACE2: Key = Key::Byte(0x7F);
    pub const SPACE: Key = Key::Byte(b' ');

    /// Ctrl+`letter` as a C0 control key. Case-insensitive.
    ///
    /// Non-letters map to [`Key::Unknown`].
    pub const fn ctrl(letter: char) -> Key {
        match letter {
            'a'..='z' => Key::Byte(letter as u8 - b'a' + 1),
            'A'..='Z' => Key::Byte(letter as u8 - b'A' + 1),
            _ => Key::Unknown,
        }
    }

    /// Numeric view of the key domain.
    ///
    /// Literal keys keep their byte value; extended keys start at
    /// [`EXTENDED_KEY_BASE`] in declaration order.
    pub const fn code(self) -> u16 {
        match self {
            Key::Byte(b) => b as u16,
            Key::Unknown => EXTENDED_KEY_BASE,
            Key::ShiftTab => EXTENDED_KEY_BASE + 1,
            Key::Delete => EXTENDED_KEY_BASE + 2,
            Key::ArrowUp => EXTENDED_KEY_BASE + 3,
            Key::ArrowDown => EXTENDED_KEY_BASE + 4,
            Key::ArrowLeft => EXTENDED_KEY_BASE + 5,
            Key::ArrowRight => EXTENDED_KEY_BASE + 6,
        }
    }

    pub const fn is_extended(self) -> bool {
        self.code() >= EXTENDED_KEY_BASE
    }

    /// The printable character carried by a literal key, if any.
    ///
    /// Bytes `0x80..=0xFF` are read as Latin-1.
    pub fn as_char(self) -> Option<char> {
        match self {
            Key::Byte(b @ 0x20..=0x7E) | Key::Byte(b @ 0x80..=0xFF) => Some(char::from(b)),
            _ => None,
        }
    }

    /// True for the literal key `ch` (exact byte match).
    pub fn is_char(self, ch: char) -> bool {
        self.as_char() == Some(ch)
    }

    /// Canonical raw byte shape for this key.
    ///
    /// [`Key::Unknown`] has no shape and encodes as an empty event.
    pub fn to_bytes(self) -> ArrayVec<u8, RAW_EVENT_CAPACITY> {
        let bytes: &[u8] = match self {
            Key::Byte(ref b) => std::slice::from_ref(b),
            Key::Unknown => &[],
            Key::ShiftTab => &[0x1b, 0x5b, 0x5a],
            Key::Delete => &[0x1b, 0x5b, 0x33, 0x7e],
            Key::ArrowUp => &[0x1b, 0x4f, 0x41],
            Key::ArrowDown => &[0x1b, 0x4f, 0x42],
            Key::ArrowRight => &[0x1b, 0x4f, 0x43],
            Key::ArrowLeft => &[0x1b, 0x4f, 0x44],
        };
        bytes.iter().copied().collect()
    }
}

impl From<u8> for Key {
    fn from(b: u8) -> Self {
        Key::Byte(b)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Key::BACKSPACE => f.write_str("Backspace"),
            Key::TAB => f.write_str("Tab"),
            Key::ENTER => f.write_str("Enter"),
            Key::ESCAPE => f.write_str("Escape"),
            Key::BACKSPACE2 => f.write_str("Backspace2"),
            Key::Byte(b @ 0x01..=0x1A) => write!(f, "Ctrl+{}", char::from(b'A' + b - 1)),
            Key::Byte(b) => match Key::Byte(b).as_char() {
                Some(ch) => write!(f, "{ch:?}"),
                None => write!(f, "0x{b:02x}"),
            },
            Key::Unknown => f.write_str("Unknown"),
            Key::ShiftTab => f.write_str("ShiftTab"),
            Key::Delete => f.write_str("Delete"),
            Key::ArrowUp => f.write_str("ArrowUp"),
            Key::ArrowDown => f.write_str("ArrowDown"),
            Key::ArrowLeft => f.write_str("ArrowLeft"),
            Key::ArrowRight => f.write_str("ArrowRight"),
        }
    }
}

/// One raw terminal read: up to [`RAW_EVENT_CAPACITY`] bytes.
///
/// The valid-byte count is the length of the buffer; an empty event means
/// nothing was read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEvent {
    bytes: ArrayVec<u8, RAW_EVENT_CAPACITY>,
}

impl RawEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an event from `bytes`, truncated to the capacity.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.iter().copied().take(RAW_EVENT_CAPACITY).collect(),
        }
    }

    /// Build an event from a full read buffer and the count of valid bytes.
    pub fn from_read(buf: &[u8; RAW_EVENT_CAPACITY], n: usize) -> Self {
        Self::from_bytes(&buf[..n.min(RAW_EVENT_CAPACITY)])
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Key> for RawEvent {
    fn from(key: Key) -> Self {
        Self {
            bytes: key.to_bytes(),
        }
    }
}
