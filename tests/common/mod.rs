#![allow(dead_code)]

use shlex_rs::split;

/// Command line exercising every token boundary rule.
pub const MIXED: &str = "one two \"three four\" \"five \\\"six\\\"\" seven#eight # nine # ten\n eleven 'twelve\\' thirteen=13 fourteen/14";

pub const MIXED_WORDS: [&str; 9] = [
    "one",
    "two",
    "three four",
    "five \"six\"",
    "seven#eight",
    "eleven",
    "twelve\\",
    "thirteen=13",
    "fourteen/14",
];

pub fn assert_split(input: &str, want: &[&str]) {
    let got = split(input).unwrap_or_else(|e| panic!("split({input:?}) failed: {e}"));
    assert_eq!(got, want, "split({input:?})");
}
