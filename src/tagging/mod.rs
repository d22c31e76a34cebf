//! Part-of-speech tagging.
//!
//! A [`Tagger`] turns a text blob into a stream of [`Token`]s, each carrying the
//! literal surface form found in the text and the grammatical role assigned to it.
//! The upload workflow only cares about nouns and verbs; [`partition`] pulls those
//! two streams out while keeping document order.

mod lexicon;
mod rules;
mod tokenizer;

pub use rules::RuleTagger;

/// Grammatical role assigned to a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Common or proper noun.
    Noun,
    /// Any verb form, including auxiliaries (`is`, `has`, `did`) and gerunds.
    Verb,
    /// Modal auxiliary (`can`, `should`, `must`).
    Modal,
    /// Adjective.
    Adjective,
    /// Adverb.
    Adverb,
    /// Article or demonstrative (`the`, `a`, `this`).
    Determiner,
    /// Personal, possessive or relative pronoun.
    Pronoun,
    /// Preposition.
    Preposition,
    /// Coordinating or subordinating conjunction.
    Conjunction,
    /// Cardinal or ordinal number.
    Numeral,
    /// Infinitival `to`.
    Particle,
    /// Interjection (`oh`, `wow`).
    Interjection,
    /// Sentence and clause punctuation.
    Punctuation,
    /// Symbols and anything else the tagger has no role for.
    Other,
}

/// A single tagged token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface form, exactly as it appears in the text.
    pub text: String,
    /// Assigned role.
    pub tag: Tag,
}

impl Token {
    /// Create a new token.
    #[must_use]
    pub fn new(text: &str, tag: Tag) -> Self {
        Self {
            text: text.to_owned(),
            tag,
        }
    }
}

/// Assigns a grammatical role to every token of a text.
///
/// Implementations are constructed once and shared read-only between requests.
pub trait Tagger: Send + Sync {
    /// Tokenize and tag `text`, returning tokens in text order.
    fn tag(&self, text: &str) -> Vec<Token>;
}

/// Split tagged tokens into `(nouns, verbs)`.
///
/// Surface forms are kept as-is: no deduplication, case folding or lemmatization.
#[must_use]
pub fn partition(tokens: Vec<Token>) -> (Vec<String>, Vec<String>) {
    let mut nouns = vec![];
    let mut verbs = vec![];
    for token in tokens {
        match token.tag {
            Tag::Noun => nouns.push(token.text),
            Tag::Verb => verbs.push(token.text),
            Tag::Modal
            | Tag::Adjective
            | Tag::Adverb
            | Tag::Determiner
            | Tag::Pronoun
            | Tag::Preposition
            | Tag::Conjunction
            | Tag::Numeral
            | Tag::Particle
            | Tag::Interjection
            | Tag::Punctuation
            | Tag::Other => {}
        }
    }
    (nouns, verbs)
}
