use std::collections::HashMap;
use std::fmt;

/// Lexical class of a single input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Word separator.
    Space,
    /// Opens and closes a quoted region that honours escapes (`"`).
    EscapingQuote,
    /// Opens and closes a fully literal quoted region (`'`).
    NonEscapingQuote,
    /// Escapes the next quote or escape inside an escaping quote (`\`).
    Escape,
    /// Starts a comment at a word boundary (`#`).
    Comment,
    /// End of input. Never assigned to a real character.
    Eof,
    /// Everything else.
    Ordinary,
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Space => "space",
            Self::EscapingQuote => "escaping quote",
            Self::NonEscapingQuote => "non-escaping quote",
            Self::Escape => "escape",
            Self::Comment => "comment",
            Self::Eof => "end of input",
            Self::Ordinary => "ordinary",
        };
        f.write_str(name)
    }
}

/// Rejected classifier configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifierError {
    /// The same character was assigned to two different classes.
    #[error("character {ch:?} assigned to both {first} and {second}")]
    Conflict {
        ch: char,
        first: CharClass,
        second: CharClass,
    },
}

const DEFAULT_SPACE: &str = " \t\r\n";
const DEFAULT_ESCAPING_QUOTE: &str = "\"";
const DEFAULT_NON_ESCAPING_QUOTE: &str = "'";
const DEFAULT_ESCAPE: &str = "\\";
const DEFAULT_COMMENT: &str = "#";

/// Immutable mapping from character to [`CharClass`].
///
/// Characters not in the mapping are [`CharClass::Ordinary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    classes: HashMap<char, CharClass>,
}

impl Classifier {
    /// Start an empty mapping. Every character is ordinary until
    /// assigned.
    #[must_use]
    pub fn builder() -> ClassifierBuilder {
        ClassifierBuilder::default()
    }

    /// Classify one read result; `None` stands for end of input.
    #[must_use]
    pub fn classify(&self, ch: Option<char>) -> CharClass {
        ch.map_or(CharClass::Eof, |c| {
            self.classes.get(&c).copied().unwrap_or(CharClass::Ordinary)
        })
    }
}

impl Default for Classifier {
    fn default() -> Self {
        let mut classes = HashMap::new();
        for (chars, class) in [
            (DEFAULT_SPACE, CharClass::Space),
            (DEFAULT_ESCAPING_QUOTE, CharClass::EscapingQuote),
            (DEFAULT_NON_ESCAPING_QUOTE, CharClass::NonEscapingQuote),
            (DEFAULT_ESCAPE, CharClass::Escape),
            (DEFAULT_COMMENT, CharClass::Comment),
        ] {
            classes.extend(chars.chars().map(|c| (c, class)));
        }
        Self { classes }
    }
}

/// Fluent builder for a custom [`Classifier`].
///
/// ```
/// use shlex_rs::{CharClass, Classifier};
///
/// let classifier = Classifier::builder()
///     .space(" ,")
///     .escaping_quote("\"")
///     .comment(";")
///     .build()
///     .unwrap();
/// assert_eq!(classifier.classify(Some(',')), CharClass::Space);
/// assert_eq!(classifier.classify(Some('#')), CharClass::Ordinary);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClassifierBuilder {
    assignments: Vec<(char, CharClass)>,
}

impl ClassifierBuilder {
    #[must_use]
    pub fn space(self, chars: &str) -> Self {
        self.assign(chars, CharClass::Space)
    }

    #[must_use]
    pub fn escaping_quote(self, chars: &str) -> Self {
        self.assign(chars, CharClass::EscapingQuote)
    }

    #[must_use]
    pub fn non_escaping_quote(self, chars: &str) -> Self {
        self.assign(chars, CharClass::NonEscapingQuote)
    }

    #[must_use]
    pub fn escape(self, chars: &str) -> Self {
        self.assign(chars, CharClass::Escape)
    }

    #[must_use]
    pub fn comment(self, chars: &str) -> Self {
        self.assign(chars, CharClass::Comment)
    }

    fn assign(mut self, chars: &str, class: CharClass) -> Self {
        self.assignments.extend(chars.chars().map(|c| (c, class)));
        self
    }

    /// Freeze the mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::Conflict`] if a character was given
    /// two different classes.
    pub fn build(self) -> Result<Classifier, ClassifierError> {
        let mut classes = HashMap::with_capacity(self.assignments.len());
        for (ch, class) in self.assignments {
            match classes.insert(ch, class) {
                Some(first) if first != class => {
                    return Err(ClassifierError::Conflict {
                        ch,
                        first,
                        second: class,
                    });
                }
                _ => {}
            }
        }
        Ok(Classifier { classes })
    }
}
