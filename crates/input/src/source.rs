//! Raw event sources.
//!
//! [`RawSource::poll_raw`] is the only blocking call in a dialog loop. The
//! live terminal and the scripted replay both sit behind it so dialogs can be
//! driven without a real terminal.

use std::collections::VecDeque;
use std::io::{self, Read};

use crate::decode::decode;
use crate::types::{Key, RawEvent, RAW_EVENT_CAPACITY};

/// A blocking supplier of raw terminal reads.
pub trait RawSource {
    /// Block until one raw event is available and copy it into `buf`.
    ///
    /// Returns the number of valid bytes.
    fn poll_raw(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

impl<S: RawSource + ?Sized> RawSource for &mut S {
    fn poll_raw(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).poll_raw(buf)
    }
}

/// Read one raw event from `source`.
pub fn read_event<S: RawSource + ?Sized>(source: &mut S) -> io::Result<RawEvent> {
    let mut buf = [0u8; RAW_EVENT_CAPACITY];
    let n = source.poll_raw(&mut buf)?;
    Ok(RawEvent::from_read(&buf, n))
}

/// Block for one raw event and decode it.
pub fn read_key<S: RawSource + ?Sized>(source: &mut S) -> io::Result<Key> {
    let raw = read_event(source)?;
    Ok(decode(&raw))
}

/// Reads raw chunks straight from the terminal's stdin.
///
/// The terminal must already be in raw mode; otherwise reads are
/// line-buffered by the tty and decode as `Unknown`.
pub struct StdinSource {
    stdin: io::Stdin,
}

impl StdinSource {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RawSource for StdinSource {
    fn poll_raw(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            match self.stdin.lock().read(buf) {
                Ok(0) => {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "terminal input closed",
                    ))
                }
                Ok(n) => return Ok(n),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

/// Replays a fixed queue of raw events.
///
/// Once the queue is drained every read fails with `UnexpectedEof`, so a
/// dialog under test ends instead of blocking forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    events: VecDeque<RawEvent>,
    consumed: usize,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one event per key, using each key's canonical byte shape.
    pub fn from_keys<I: IntoIterator<Item = Key>>(keys: I) -> Self {
        Self {
            events: keys.into_iter().map(RawEvent::from).collect(),
            consumed: 0,
        }
    }

    /// Queue each character of `text` as a one-byte event.
    ///
    /// Characters outside Latin-1 are skipped.
    pub fn typed(text: &str) -> Self {
        let mut source = Self::new();
        source.push_text(text);
        source
    }

    pub fn push_raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.events.push_back(RawEvent::from_bytes(bytes));
        self
    }

    pub fn push_key(&mut self, key: Key) -> &mut Self {
        self.events.push_back(RawEvent::from(key));
        self
    }

    pub fn push_text(&mut self, text: &str) -> &mut Self {
        for ch in text.chars() {
            if let Ok(b) = u8::try_from(u32::from(ch)) {
                self.push_key(Key::Byte(b));
            }
        }
        self
    }

    /// Events not yet read.
    pub fn remaining(&self) -> usize {
        self.events.len()
    }

    /// Events read so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl RawSource for ScriptedSource {
    fn poll_raw(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let Some(event) = self.events.pop_front() else {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "scripted input exhausted",
            ));
        };
        self.consumed += 1;
        let n = event.len().min(buf.len());
        buf[..n].copy_from_slice(&event.bytes()[..n]);
        Ok(n)
    }
}
