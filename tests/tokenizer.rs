//! Token stream tests: comments, exhaustion, errors, and readers.

mod common;

use std::io::{self, Read};

use common::{MIXED, MIXED_WORDS};
use shlex_rs::{LexError, Lexer, Token, TokenKind, Tokenizer, tokenize};

#[test]
fn tokenize_mixed_line() {
    let want = vec![
        Token::word("one"),
        Token::word("two"),
        Token::word("three four"),
        Token::word("five \"six\""),
        Token::word("seven#eight"),
        Token::comment(" nine # ten"),
        Token::word("eleven"),
        Token::word("twelve\\"),
        Token::word("thirteen=13"),
        Token::word("fourteen/14"),
    ];
    assert_eq!(tokenize(MIXED).expect("tokenize"), want);
}

#[test]
fn lexer_mixed_line() {
    let mut lexer = Lexer::from_text(MIXED);
    for want in MIXED_WORDS {
        assert_eq!(lexer.next_word().expect("lex").as_deref(), Some(want));
    }
    assert_eq!(lexer.next_word().expect("lex"), None);
}

#[test]
fn tokenize_whitespace_words_match_split_whitespace() {
    let input = "  alpha\tbeta \n gamma\r\ndelta  ";
    let words: Vec<_> = input.split_whitespace().map(Token::word).collect();
    assert_eq!(tokenize(input).expect("tokenize"), words);
}

#[test]
fn tokenize_comment_at_end_without_newline() {
    let tokens = tokenize("x #trailing").expect("tokenize");
    assert_eq!(tokens, [Token::word("x"), Token::comment("trailing")]);
}

#[test]
fn tokenize_comment_keeps_quotes_and_escapes() {
    let tokens = tokenize("# \"unclosed 'quote \\\n").expect("tokenize");
    assert_eq!(tokens, [Token::comment(" \"unclosed 'quote \\")]);
}

#[test]
fn tokenize_crlf_comment_keeps_carriage_return() {
    let tokens = tokenize("#x\r\ny # z\r\n").expect("tokenize");
    assert_eq!(
        tokens,
        [Token::comment("x\r"), Token::word("y"), Token::comment(" z\r")]
    );
}

#[test]
fn tokenize_kinds() {
    let kinds: Vec<_> = tokenize("a #b\nc")
        .expect("tokenize")
        .into_iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(kinds, [TokenKind::Word, TokenKind::Comment, TokenKind::Word]);
}

#[test]
fn tokenizer_exhaustion_is_sticky() {
    let mut tokenizer = Tokenizer::from_text("a");
    assert_eq!(tokenizer.next_token().expect("tokenize"), Some(Token::word("a")));
    for _ in 0..3 {
        assert_eq!(tokenizer.next_token().expect("tokenize"), None);
    }
}

#[test]
fn tokenizer_no_tokens_after_error() {
    let mut tokenizer = Tokenizer::from_text("\"abc\ndef ghi");
    assert!(matches!(
        tokenizer.next_token(),
        Err(LexError::UnterminatedQuote)
    ));
    assert!(matches!(tokenizer.next_token(), Ok(None)));
    assert!(tokenizer.next().is_none());
}

// -----------------------------------------------------------
// Reader-backed sources.
// -----------------------------------------------------------

#[test]
fn reader_source_matches_str_source() {
    let from_reader: Vec<_> = Tokenizer::from_reader(MIXED.as_bytes())
        .collect::<Result<_, _>>()
        .expect("tokenize");
    assert_eq!(from_reader, tokenize(MIXED).expect("tokenize"));
}

#[test]
fn reader_source_lexer() {
    let words: Vec<_> = Lexer::from_reader("ünï 'cödé x' # c".as_bytes())
        .collect::<Result<_, _>>()
        .expect("lex");
    assert_eq!(words, ["ünï", "cödé x"]);
}

struct FailingReader {
    data: &'static [u8],
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Err(io::Error::other("disk on fire"));
        }
        let n = buf.len().min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

#[test]
fn reader_error_passes_through() {
    let mut tokenizer = Tokenizer::from_reader(FailingReader { data: b"ok more" });
    assert_eq!(tokenizer.next_token().expect("tokenize"), Some(Token::word("ok")));
    let err = tokenizer.next_token().unwrap_err();
    assert!(matches!(&err, LexError::Io(e) if e.to_string() == "disk on fire"));
    assert_eq!(err.to_string(), "read failure: disk on fire");
    assert!(matches!(tokenizer.next_token(), Ok(None)));
}

struct InterruptingReader {
    interrupt_next: bool,
    data: &'static [u8],
}

impl Read for InterruptingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.interrupt_next {
            self.interrupt_next = false;
            return Err(io::ErrorKind::Interrupted.into());
        }
        self.interrupt_next = true;
        let n = buf.len().min(self.data.len()).min(3);
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

#[test]
fn reader_interrupts_are_retried() {
    let reader = InterruptingReader {
        interrupt_next: true,
        data: MIXED.as_bytes(),
    };
    let words: Vec<_> = Lexer::from_reader(reader)
        .collect::<Result<_, _>>()
        .expect("lex");
    assert_eq!(words, MIXED_WORDS);
}
