//! Splits text into surface-form tokens.
use lazy_static::lazy_static;
use regex::Regex;

/// Coarse shape of a raw token, decided before any tagging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Letters, with optional inner apostrophes or hyphens.
    Word,
    /// Digits, with optional inner `.` or `,` separators.
    Number,
    /// Sentence or clause punctuation.
    Punctuation,
    /// Any other single non-space character.
    Symbol,
}

/// A token borrowed from the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawToken<'text> {
    /// Surface form.
    pub text: &'text str,
    /// Coarse shape.
    pub shape: Shape,
}

impl RawToken<'_> {
    /// Whether this token closes a sentence.
    pub fn ends_sentence(&self) -> bool {
        self.shape == Shape::Punctuation && matches!(self.text, "." | "!" | "?" | ";" | ":")
    }
}

/// Characters that are treated as punctuation rather than symbols.
const PUNCTUATION: &str = ".,;:!?'\"()[]{}-–—…/‘’“”«»";

#[expect(clippy::expect_used, reason = "The pattern is a compile-time constant")]
/// Split `text` into word, number, punctuation and symbol tokens.
///
/// Whitespace only separates tokens; it never appears in one.
pub fn tokenize(text: &str) -> Vec<RawToken<'_>> {
    lazy_static! {
        static ref RE: Regex = Regex::new(
            r"(?P<number>\d+(?:[.,]\d+)*)|(?P<word>[\p{L}\p{M}]+(?:['’\-][\p{L}\p{M}]+)*)|(?P<other>[^\s\p{L}\p{M}\d])"
        )
        .expect("Failed to compile regex!?!");
    }
    RE.captures_iter(text)
        .filter_map(|caps| {
            if let Some(number) = caps.name("number") {
                return Some(RawToken {
                    text: number.as_str(),
                    shape: Shape::Number,
                });
            }
            if let Some(word) = caps.name("word") {
                return Some(RawToken {
                    text: word.as_str(),
                    shape: Shape::Word,
                });
            }
            caps.name("other").map(|other| {
                let shape = if PUNCTUATION.contains(other.as_str()) {
                    Shape::Punctuation
                } else {
                    Shape::Symbol
                };
                RawToken {
                    text: other.as_str(),
                    shape,
                }
            })
        })
        .collect()
}
