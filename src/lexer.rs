use std::io::Read;
use std::iter::FusedIterator;
use std::str::Chars;

use crate::classifier::Classifier;
use crate::source::{CharSource, ReadChars};
use crate::tokenizer::{LexError, Tokenizer};

/// Word-only view over a [`Tokenizer`]: comments are skipped.
#[derive(Debug)]
pub struct Lexer<S> {
    tokenizer: Tokenizer<S>,
}

impl<'a> Lexer<Chars<'a>> {
    #[must_use]
    pub fn from_text(text: &'a str) -> Self {
        Self::from(Tokenizer::from_text(text))
    }
}

impl<R: Read> Lexer<ReadChars<R>> {
    #[must_use]
    pub fn from_reader(reader: R) -> Self {
        Self::from(Tokenizer::from_reader(reader))
    }
}

impl<S: CharSource> Lexer<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::from(Tokenizer::new(source))
    }

    #[must_use]
    pub fn with_classifier(source: S, classifier: Classifier) -> Self {
        Self::from(Tokenizer::with_classifier(source, classifier))
    }

    /// Next word, or `None` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Passes through any [`LexError`] from the tokenizer.
    pub fn next_word(&mut self) -> Result<Option<String>, LexError> {
        while let Some(token) = self.tokenizer.next_token()? {
            if token.is_word() {
                return Ok(Some(token.value));
            }
        }
        Ok(None)
    }
}

impl<S> From<Tokenizer<S>> for Lexer<S> {
    fn from(tokenizer: Tokenizer<S>) -> Self {
        Self { tokenizer }
    }
}

impl<S: CharSource> Iterator for Lexer<S> {
    type Item = Result<String, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_word().transpose()
    }
}

impl<S: CharSource> FusedIterator for Lexer<S> {}
