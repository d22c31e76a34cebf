//! Lexicon and context rules for [`RuleTagger`].
//!
//! Tagging is a single left-to-right pass. Each word first gets a [`Candidate`] from the
//! word lists, its inflection and its suffix; the candidate is then settled using the
//! [`Cue`] left by the already-tagged words before it.
use super::lexicon;
use super::tokenizer::{tokenize, Shape};
use super::{Tag, Tagger, Token};

/// Suffixes that mark an unknown word as a noun.
const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ism", "ist", "ship", "hood", "ance", "ence", "dom",
    "ery", "logy", "graphy", "ure", "age", "er", "or",
];

/// Suffixes that mark an unknown word as an adjective.
const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "able", "ible", "ive", "less", "ical", "ic", "ish", "ary", "al",
];

/// Suffixes that mark an unknown word as a verb.
const VERB_SUFFIXES: &[&str] = &["ize", "ify"];

/// What the word lists and suffix rules say about a word before context is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Candidate {
    /// Role is settled.
    Fixed(Tag),
    /// Noun, whatever the context.
    Noun,
    /// Verb unless it sits in a noun slot.
    Verb,
    /// Noun or verb. `inflected` is set for `-s` and `-ed` forms.
    Either {
        /// Word carries a verb-like inflection.
        inflected: bool,
    },
    /// `-ing` form of a verb.
    Gerund,
    /// `-ed` form or irregular past of a verb.
    Participle,
}

/// Grammatical slot implied by the words before the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cue {
    /// After a determiner, possessive, adjective or numeral.
    NounSlot,
    /// After a preposition.
    AfterPreposition,
    /// After `to`, a modal, a subject pronoun or a form of `do`.
    VerbSlot,
    /// After a form of `be` or `have`.
    AfterAuxiliary,
    /// After a noun.
    AfterNoun {
        /// The noun looks plural.
        plural: bool,
    },
    /// Start of a sentence or clause.
    Open,
}

/// Verb inflection read off a word's ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Inflection {
    /// No inflection, or the word is itself a known lemma.
    Bare,
    /// `-s` / `-es` / `-ies`.
    ThirdPerson,
    /// `-ed` / `-ied`.
    Past,
    /// `-ing`.
    Progressive,
}

/// Part-of-speech tagger driven by word lists, suffix rules and the role of the
/// preceding word.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleTagger;

impl RuleTagger {
    /// Create a new tagger.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Tagger for RuleTagger {
    fn tag(&self, text: &str) -> Vec<Token> {
        let raw_tokens = tokenize(text);
        let mut tokens: Vec<Token> = Vec::with_capacity(raw_tokens.len());
        let mut sentence_start = true;
        for raw in raw_tokens {
            let tag = match raw.shape {
                Shape::Punctuation => Tag::Punctuation,
                Shape::Symbol => Tag::Other,
                Shape::Number => Tag::Numeral,
                Shape::Word => resolve(candidate(raw.text, sentence_start), cue(&tokens)),
            };
            // Opening quotes and brackets keep the sentence open.
            sentence_start =
                raw.ends_sentence() || (sentence_start && raw.shape == Shape::Punctuation);
            tokens.push(Token::new(raw.text, tag));
        }
        tokens
    }
}

/// Lowercase `word` and fold typographic apostrophes.
fn normalize(word: &str) -> String {
    word.to_lowercase().replace('’', "'")
}

/// Whether a noun's surface form looks plural.
fn looks_plural(lower: &str) -> bool {
    lower.len() > 3
        && lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
        && !lower.ends_with("'s")
}

/// Derive the cue for the next word from the tokens tagged so far.
fn cue(tokens: &[Token]) -> Cue {
    // Adverbs are transparent: "the cat quickly runs" reads as "the cat runs".
    let mut previous = tokens.iter().rev().filter(|token| token.tag != Tag::Adverb);
    let Some(last) = previous.next() else {
        return Cue::Open;
    };
    let lower = normalize(&last.text);
    match last.tag {
        Tag::Determiner | Tag::Adjective | Tag::Numeral => Cue::NounSlot,
        Tag::Preposition => Cue::AfterPreposition,
        Tag::Particle | Tag::Modal => Cue::VerbSlot,
        Tag::Pronoun if lexicon::is_possessive(&lower) => Cue::NounSlot,
        Tag::Pronoun if lexicon::is_subject_pronoun(&lower) => Cue::VerbSlot,
        Tag::Verb if lexicon::is_auxiliary(&lower) => Cue::AfterAuxiliary,
        Tag::Verb if lexicon::is_do_support(&lower) => Cue::VerbSlot,
        Tag::Noun if lower.ends_with("'s") || lower.ends_with("s'") => Cue::NounSlot,
        Tag::Noun => Cue::AfterNoun {
            plural: looks_plural(&lower),
        },
        // "eats and runs", "cats and dogs": a coordinated word takes the role of its
        // left-hand partner.
        Tag::Conjunction if matches!(lower.as_str(), "and" | "or" | "but") => {
            match previous.next().map(|token| token.tag) {
                Some(Tag::Verb) => Cue::VerbSlot,
                Some(Tag::Noun) => Cue::NounSlot,
                _ => Cue::Open,
            }
        }
        Tag::Pronoun
        | Tag::Verb
        | Tag::Conjunction
        | Tag::Adverb
        | Tag::Interjection
        | Tag::Punctuation
        | Tag::Other => Cue::Open,
    }
}

/// Settle a candidate using its cue.
const fn resolve(candidate: Candidate, cue: Cue) -> Tag {
    match candidate {
        Candidate::Fixed(tag) => tag,
        Candidate::Noun => Tag::Noun,
        Candidate::Verb | Candidate::Gerund => match cue {
            Cue::NounSlot => Tag::Noun,
            Cue::AfterPreposition
            | Cue::VerbSlot
            | Cue::AfterAuxiliary
            | Cue::AfterNoun { .. }
            | Cue::Open => Tag::Verb,
        },
        Candidate::Participle => match cue {
            Cue::NounSlot => Tag::Adjective,
            Cue::AfterPreposition
            | Cue::VerbSlot
            | Cue::AfterAuxiliary
            | Cue::AfterNoun { .. }
            | Cue::Open => Tag::Verb,
        },
        Candidate::Either { inflected } => match cue {
            Cue::VerbSlot => Tag::Verb,
            Cue::AfterNoun { plural } if inflected || plural => Tag::Verb,
            Cue::NounSlot
            | Cue::AfterPreposition
            | Cue::AfterAuxiliary
            | Cue::AfterNoun { .. }
            | Cue::Open => Tag::Noun,
        },
    }
}

/// Look `word` up in the word lists, falling back to shape and suffix rules.
fn candidate(word: &str, sentence_start: bool) -> Candidate {
    let lower = normalize(word);
    if let Some(tag) = lexicon::closed_class(&lower) {
        return Candidate::Fixed(tag);
    }
    if let Some(tag) = lexicon::modifier(&lower) {
        return Candidate::Fixed(tag);
    }
    if lexicon::is_irregular_verb_form(&lower) {
        return Candidate::Participle;
    }
    if let Some(owner) = lower.strip_suffix("'s") {
        if !owner.is_empty() {
            return Candidate::Noun;
        }
    }

    let (inflection, lemmas) = inflect(&lower);
    let verb = lemmas.iter().any(|lemma| lexicon::is_verb_lemma(lemma));
    let noun = lemmas.iter().any(|lemma| lexicon::is_noun_lemma(lemma));
    let inflected = matches!(inflection, Inflection::ThirdPerson | Inflection::Past);
    match (noun, verb, inflection) {
        (_, true, Inflection::Progressive) => Candidate::Gerund,
        (_, true, Inflection::Past) => Candidate::Participle,
        (true, true, _) => Candidate::Either { inflected },
        (false, true, _) => Candidate::Verb,
        (true, false, _) => Candidate::Noun,
        (false, false, _) => unknown(word, &lower, inflection, &lemmas, sentence_start),
    }
}

/// Rules for words found in no word list.
fn unknown(
    word: &str,
    lower: &str,
    inflection: Inflection,
    lemmas: &[String],
    sentence_start: bool,
) -> Candidate {
    let letters = word.chars().filter(|ch| ch.is_alphabetic()).count();
    if letters > 1 && !word.chars().any(char::is_lowercase) {
        // Acronym.
        return Candidate::Noun;
    }
    if !sentence_start && word.chars().next().is_some_and(char::is_uppercase) {
        // Proper noun.
        return Candidate::Noun;
    }
    match inflection {
        Inflection::Progressive => return Candidate::Gerund,
        Inflection::Past => return Candidate::Participle,
        Inflection::Bare | Inflection::ThirdPerson => {}
    }

    let has_suffix = |text: &str, suffixes: &[&str]| {
        suffixes
            .iter()
            .any(|suffix| text.len() > suffix.len() + 2 && text.ends_with(suffix))
    };
    if has_suffix(lower, &["ly"]) {
        return Candidate::Fixed(Tag::Adverb);
    }
    let stem = lemmas.first().map_or(lower, String::as_str);
    if has_suffix(stem, NOUN_SUFFIXES) {
        Candidate::Noun
    } else if has_suffix(stem, ADJECTIVE_SUFFIXES) {
        Candidate::Fixed(Tag::Adjective)
    } else if has_suffix(stem, VERB_SUFFIXES) {
        Candidate::Verb
    } else {
        Candidate::Either {
            inflected: inflection == Inflection::ThirdPerson,
        }
    }
}

/// Read the inflection off `lower` and list the lemmas it could come from.
fn inflect(lower: &str) -> (Inflection, Vec<String>) {
    if lexicon::is_verb_lemma(lower) || lexicon::is_noun_lemma(lower) {
        return (Inflection::Bare, vec![lower.to_owned()]);
    }
    if let Some(stem) = lower.strip_suffix("ing") {
        if stem.len() >= 2 {
            return (Inflection::Progressive, stems(stem));
        }
    }
    if let Some(stem) = lower.strip_suffix("ied") {
        if stem.len() >= 2 {
            return (Inflection::Past, vec![format!("{stem}y")]);
        }
    }
    if let Some(stem) = lower.strip_suffix("ed") {
        if stem.len() >= 2 {
            return (Inflection::Past, stems(stem));
        }
    }
    if let Some(stem) = lower.strip_suffix("ies") {
        if stem.len() >= 2 {
            return (Inflection::ThirdPerson, vec![format!("{stem}y")]);
        }
    }
    if !looks_plural(lower) {
        return (Inflection::Bare, vec![lower.to_owned()]);
    }
    if let Some(stem) = lower.strip_suffix('s') {
        let mut lemmas = vec![stem.to_owned()];
        if let Some(shorter) = stem.strip_suffix('e') {
            lemmas.push(shorter.to_owned());
        }
        return (Inflection::ThirdPerson, lemmas);
    }
    (Inflection::Bare, vec![lower.to_owned()])
}

/// Possible lemmas for a stem left after removing `-ing` or `-ed`:
/// the stem itself, the stem with a silent `e`, and the stem with a doubled final
/// consonant undone.
fn stems(stem: &str) -> Vec<String> {
    let mut lemmas = vec![stem.to_owned(), format!("{stem}e")];
    let mut chars = stem.chars().rev();
    if let (Some(last), Some(before)) = (chars.next(), chars.next()) {
        if last == before && !"aeiou".contains(last) {
            let end = stem.len() - last.len_utf8();
            lemmas.push(stem[..end].to_owned());
        }
    }
    lemmas
}
