//! Shell-style word splitting.
//!
//! Splits a command line into words the way a POSIX shell would
//! quote them, without any expansion. Double quotes honour `\"` and
//! `\\`; single quotes are fully literal; `#` at a word boundary
//! starts a comment. A backslash outside double quotes is an ordinary
//! character, so Windows paths survive unquoted.
//!
//! # Quick start
//!
//! ```
//! use shlex_rs::split;
//!
//! let words = split(r#"log_get --file c:\temp\data.json "a \"b\"" # tail"#).unwrap();
//! assert_eq!(words, ["log_get", "--file", r"c:\temp\data.json", r#"a "b""#]);
//! ```
//!
//! For comments as well as words, or streaming input, use
//! [`Tokenizer`] directly.

#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod classifier;
pub mod lexer;
pub mod source;
pub mod token;
pub mod tokenizer;

pub use classifier::{CharClass, Classifier, ClassifierBuilder, ClassifierError};
pub use lexer::Lexer;
pub use source::{CharSource, ReadChars};
pub use token::{Token, TokenKind};
pub use tokenizer::{LexError, Tokenizer};

/// Split a string into words, dropping comments.
///
/// # Errors
///
/// Returns [`LexError::UnterminatedQuote`] if a quote is left open.
pub fn split(input: &str) -> Result<Vec<String>, LexError> {
    Lexer::from_text(input).collect()
}

/// Split a string into words with a custom classifier.
pub fn split_with(input: &str, classifier: &Classifier) -> Result<Vec<String>, LexError> {
    Lexer::with_classifier(input.chars(), classifier.clone()).collect()
}

/// Tokenize a whole string, comments included.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Tokenizer::from_text(input).collect()
}
