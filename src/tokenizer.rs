use std::io::{self, Read};
use std::iter::FusedIterator;
use std::str::Chars;

use log::{debug, trace};

use crate::classifier::{CharClass, Classifier};
use crate::source::{CharSource, ReadChars};
use crate::token::{Token, TokenKind};

/// Error produced while tokenizing.
#[derive(Debug, thiserror::Error)]
pub enum LexError {
    /// Input ended inside a quoted region or right after an escape
    /// inside one.
    #[error("unterminated quote")]
    UnterminatedQuote,
    /// The underlying reader failed.
    #[error("read failure: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between tokens.
    Start,
    /// Unquoted word body.
    InWord,
    /// Inside `"..."`.
    EscQuoted,
    /// Escape just read inside `"..."`.
    EscQuotedPending,
    /// Inside `'...'`.
    RawQuoted,
    /// After a word-boundary `#`, up to the end of the line.
    Comment,
}

enum Step {
    Next(State),
    Emit(TokenKind),
    Exhausted,
    Unterminated,
}

/// Streaming shell-style tokenizer.
///
/// Each call to [`Tokenizer::next_token`] runs the state machine
/// until a complete token, the end of input, or an error.
///
/// ```
/// use shlex_rs::{Token, Tokenizer};
///
/// let mut tokenizer = Tokenizer::from_text("ls 'my dir' # list");
/// assert_eq!(tokenizer.next_token().unwrap(), Some(Token::word("ls")));
/// assert_eq!(tokenizer.next_token().unwrap(), Some(Token::word("my dir")));
/// assert_eq!(tokenizer.next_token().unwrap(), Some(Token::comment(" list")));
/// assert_eq!(tokenizer.next_token().unwrap(), None);
/// ```
#[derive(Debug)]
pub struct Tokenizer<S> {
    source: S,
    classifier: Classifier,
    state: State,
    buffer: String,
    escape: Option<char>,
    eof: bool,
    done: bool,
}

impl<'a> Tokenizer<Chars<'a>> {
    /// Tokenize an in-memory string with the default classifier.
    #[must_use]
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.chars())
    }
}

impl<R: Read> Tokenizer<ReadChars<R>> {
    /// Tokenize UTF-8 text from a reader with the default classifier.
    #[must_use]
    pub fn from_reader(reader: R) -> Self {
        Self::new(ReadChars::new(reader))
    }
}

impl<S: CharSource> Tokenizer<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_classifier(source, Classifier::default())
    }

    #[must_use]
    pub const fn with_classifier(source: S, classifier: Classifier) -> Self {
        Self {
            source,
            classifier,
            state: State::Start,
            buffer: String::new(),
            escape: None,
            eof: false,
            done: false,
        }
    }

    /// Produce the next token, or `None` once the input is exhausted.
    ///
    /// After an error every further call returns `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::UnterminatedQuote`] when input ends inside
    /// a quote, and [`LexError::Io`] when the source fails to read.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        if self.done {
            return Ok(None);
        }

        loop {
            let ch = self.read()?;
            let class = self.classifier.classify(ch);
            match self.transition(class, ch) {
                Step::Next(state) => self.state = state,
                Step::Emit(kind) => {
                    self.state = State::Start;
                    let token = Token {
                        kind,
                        value: std::mem::take(&mut self.buffer),
                    };
                    trace!("emit {token}");
                    return Ok(Some(token));
                }
                Step::Exhausted => {
                    self.done = true;
                    return Ok(None);
                }
                Step::Unterminated => {
                    debug!("input ended in {:?} with {:?} buffered", self.state, self.buffer);
                    self.done = true;
                    self.buffer.clear();
                    return Err(LexError::UnterminatedQuote);
                }
            }
        }
    }

    fn read(&mut self) -> Result<Option<char>, LexError> {
        if self.eof {
            return Ok(None);
        }
        match self.source.next_char() {
            Ok(Some(ch)) => Ok(Some(ch)),
            Ok(None) => {
                self.eof = true;
                Ok(None)
            }
            Err(e) => {
                self.done = true;
                Err(e.into())
            }
        }
    }

    fn push(&mut self, ch: Option<char>) {
        self.buffer.extend(ch);
    }

    fn transition(&mut self, class: CharClass, ch: Option<char>) -> Step {
        use CharClass as C;

        match (self.state, class) {
            (State::Start, C::Space) => Step::Next(State::Start),
            (State::Start, C::Comment) => Step::Next(State::Comment),
            (State::Start, C::Eof) => Step::Exhausted,

            // quoted segments splice onto the word being built
            (State::Start | State::InWord, C::EscapingQuote) => Step::Next(State::EscQuoted),
            (State::Start | State::InWord, C::NonEscapingQuote) => Step::Next(State::RawQuoted),
            // a bare backslash is literal, so unquoted Windows paths survive
            (State::Start | State::InWord, C::Escape | C::Ordinary)
            | (State::InWord, C::Comment) => {
                self.push(ch);
                Step::Next(State::InWord)
            }
            (State::InWord, C::Space | C::Eof) => Step::Emit(TokenKind::Word),

            (State::EscQuoted, C::EscapingQuote) | (State::RawQuoted, C::NonEscapingQuote) => {
                Step::Next(State::InWord)
            }
            (State::EscQuoted, C::Escape) => {
                self.escape = ch;
                Step::Next(State::EscQuotedPending)
            }
            (State::EscQuoted, C::Space | C::NonEscapingQuote | C::Comment | C::Ordinary) => {
                self.push(ch);
                Step::Next(State::EscQuoted)
            }
            (State::EscQuoted | State::EscQuotedPending | State::RawQuoted, C::Eof) => {
                Step::Unterminated
            }

            // the escape is dropped only before a quote or another escape
            (State::EscQuotedPending, C::EscapingQuote | C::NonEscapingQuote | C::Escape) => {
                self.escape = None;
                self.push(ch);
                Step::Next(State::EscQuoted)
            }
            (State::EscQuotedPending, C::Space | C::Comment | C::Ordinary) => {
                let escape = self.escape.take();
                self.push(escape);
                self.push(ch);
                Step::Next(State::EscQuoted)
            }

            (
                State::RawQuoted,
                C::Space | C::EscapingQuote | C::Escape | C::Comment | C::Ordinary,
            ) => {
                self.push(ch);
                Step::Next(State::RawQuoted)
            }

            // only '\n' ends a comment, so a CRLF comment keeps its '\r'
            (State::Comment, _) if matches!(ch, None | Some('\n')) => {
                Step::Emit(TokenKind::Comment)
            }
            (State::Comment, _) => {
                self.push(ch);
                Step::Next(State::Comment)
            }
        }
    }
}

impl<S: CharSource> Iterator for Tokenizer<S> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl<S: CharSource> FusedIterator for Tokenizer<S> {}
