//! Character sources the tokenizer reads from.

use std::io::{self, BufReader, Bytes, Read};
use std::str::Chars;

/// Sequential, left-to-right supply of characters.
///
/// `Ok(None)` marks the end of input.
pub trait CharSource {
    fn next_char(&mut self) -> io::Result<Option<char>>;
}

impl CharSource for Chars<'_> {
    fn next_char(&mut self) -> io::Result<Option<char>> {
        Ok(self.next())
    }
}

/// Decodes UTF-8 characters from a byte reader.
///
/// The reader is wrapped in a [`BufReader`] and decoded one byte at a
/// time. A malformed or truncated sequence decodes to U+FFFD. Reads
/// failing with [`io::ErrorKind::Interrupted`] are retried; any other
/// read error is returned as is.
#[derive(Debug)]
pub struct ReadChars<R> {
    bytes: Bytes<BufReader<R>>,
    pending: Option<u8>,
}

impl<R: Read> ReadChars<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            bytes: BufReader::new(reader).bytes(),
            pending: None,
        }
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(b) = self.pending.take() {
            return Ok(Some(b));
        }
        loop {
            match self.bytes.next() {
                Some(Err(e)) if e.kind() == io::ErrorKind::Interrupted => {}
                next => return next.transpose(),
            }
        }
    }
}

const fn sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

const fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

impl<R: Read> CharSource for ReadChars<R> {
    fn next_char(&mut self) -> io::Result<Option<char>> {
        let Some(lead) = self.next_byte()? else {
            return Ok(None);
        };
        let Some(len) = sequence_len(lead) else {
            return Ok(Some(char::REPLACEMENT_CHARACTER));
        };

        let mut buf = [lead, 0, 0, 0];
        for slot in buf.iter_mut().take(len).skip(1) {
            match self.next_byte()? {
                Some(b) if is_continuation(b) => *slot = b,
                Some(b) => {
                    // start of the next character
                    self.pending = Some(b);
                    return Ok(Some(char::REPLACEMENT_CHARACTER));
                }
                None => return Ok(Some(char::REPLACEMENT_CHARACTER)),
            }
        }

        // rejects overlong forms and surrogates
        let ch = std::str::from_utf8(&buf[..len])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Ok(Some(ch))
    }
}
