//! Word lists backing [`super::RuleTagger`].
//!
//! Keys are lowercase with ASCII apostrophes. Open-class lists hold lemmas; inflected
//! forms are resolved by the rules module.
use std::collections::HashSet;

use lazy_static::lazy_static;

use super::Tag;

/// Articles and demonstratives.
const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "either", "neither",
    "some", "any", "no", "another", "such", "what", "which", "whatever", "whichever", "all",
    "both", "half", "several", "many", "much", "more", "most", "few", "fewer", "less", "least",
    "enough",
];

/// Possessive determiners. A noun slot always follows.
const POSSESSIVES: &[&str] = &["my", "your", "his", "her", "its", "our", "their", "whose"];

/// Pronouns that can open a clause as its subject.
const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "he", "she", "it", "we", "they", "who"];

/// Remaining pronouns.
const OTHER_PRONOUNS: &[&str] = &[
    "me", "him", "us", "them", "mine", "yours", "hers", "ours", "theirs", "myself", "yourself",
    "himself", "herself", "itself", "ourselves", "yourselves", "themselves", "whom", "someone",
    "somebody", "something", "anyone", "anybody", "anything", "everyone", "everybody",
    "everything", "nobody", "nothing", "none", "one", "oneself", "i'm", "you're", "he's",
    "she's", "it's", "we're", "they're", "i've", "you've", "we've", "they've", "i'll",
    "you'll", "he'll", "she'll", "we'll", "they'll", "i'd", "you'd", "he'd", "she'd", "we'd",
    "they'd", "there", "that's", "what's", "there's", "here's", "who's", "let's",
];

const PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "amid", "among", "around", "as",
    "at", "before", "behind", "below", "beneath", "beside", "besides", "between", "beyond",
    "by", "despite", "down", "during", "except", "for", "from", "in", "inside", "into",
    "near", "of", "off", "on", "onto", "out", "outside", "over", "past", "per", "since",
    "through", "throughout", "toward", "towards", "under", "underneath", "unlike", "until",
    "up", "upon", "via", "with", "within", "without",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "but", "or", "nor", "yet", "so", "because", "although", "though", "while", "whereas",
    "if", "unless", "whether", "once", "than", "when", "whenever", "where", "wherever",
    "why", "how",
];

const MODALS: &[&str] = &[
    "can", "could", "may", "might", "must", "shall", "should", "will", "would", "ought",
    "can't", "cannot", "couldn't", "won't", "wouldn't", "shouldn't", "mustn't", "mightn't",
    "shan't",
];

/// Forms of `be` and `have`. A participle after one of these is a verb.
const AUXILIARIES: &[&str] = &[
    "be", "am", "is", "are", "was", "were", "been", "being", "isn't", "aren't", "wasn't",
    "weren't", "have", "has", "had", "having", "hasn't", "haven't", "hadn't",
];

/// Forms of `do`. A bare verb follows.
const DO_SUPPORT: &[&str] = &["do", "does", "did", "don't", "doesn't", "didn't", "done", "doing"];

const INTERJECTIONS: &[&str] = &[
    "oh", "ah", "wow", "hey", "hello", "hi", "oops", "alas", "hmm", "ouch", "yes", "yeah", "okay",
    "ok", "bye", "please", "thanks",
];

const NUMBER_WORDS: &[&str] = &[
    "zero", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "twenty", "thirty", "forty", "fifty", "hundred", "thousand", "million", "billion",
    "first", "second", "third", "fourth", "fifth", "last",
];

const ADVERBS: &[&str] = &[
    "not", "n't", "very", "too", "also", "just", "only", "even", "still", "already", "always",
    "never", "often", "sometimes", "usually", "seldom", "rarely", "again", "ever", "here",
    "now", "then", "soon", "today", "tomorrow", "yesterday", "tonight", "later", "away",
    "fast", "hard", "well", "quite", "rather", "almost", "perhaps", "maybe", "really",
    "instead", "together", "however", "therefore", "thus", "otherwise", "meanwhile", "else",
    "indeed", "abroad", "ahead", "anyway", "everywhere", "somewhere", "nowhere", "forward",
    "ago", "twice", "thrice", "alone", "downstairs", "upstairs",
];

const ADJECTIVES: &[&str] = &[
    "good", "bad", "new", "old", "big", "small", "large", "little", "long", "short", "high",
    "low", "great", "young", "early", "late", "important", "public", "private", "able",
    "right", "wrong", "real", "sure", "free", "full", "true", "false", "whole", "clear",
    "easy", "difficult", "strong", "weak", "hot", "cold", "warm", "cool", "red", "blue",
    "green", "yellow", "black", "white", "brown", "gray", "grey", "dark", "happy",
    "sad", "angry", "quiet", "loud", "quick", "slow", "rich", "poor", "best", "better",
    "worse", "worst", "same", "different", "other", "own", "certain", "possible", "likely",
    "main", "major", "minor", "special", "simple", "recent", "ready", "similar", "fine",
    "nice", "pretty", "huge", "tiny", "deep", "wide", "narrow", "heavy", "soft", "dirty",
    "safe", "busy", "lazy", "brave", "calm", "wise",
    "general", "local", "national", "social", "human", "final", "next", "previous", "single",
    "lovely", "friendly", "lonely", "silly", "ugly", "holy", "elderly", "daily",
    "weekly", "monthly", "yearly",
];

/// Common verb lemmas. Members that are also in [`NOUNS`] are ambiguous.
const VERBS: &[&str] = &[
    "accept", "achieve", "add", "admit", "agree", "allow", "answer", "appear", "apply",
    "argue", "arrive", "ask", "attack", "avoid", "bake", "bark", "bear", "beat", "become",
    "begin", "believe", "belong", "bite", "blow", "boil", "borrow", "break", "bring", "build",
    "burn", "buy", "call", "carry", "catch", "cause", "change", "chase", "check", "choose",
    "claim", "clean", "climb", "close", "collect", "come", "compare", "complain", "complete",
    "consider", "contain", "continue", "cook", "cost", "count", "cover", "create", "cross",
    "cry", "cut", "dance", "deal", "decide", "deliver", "depend", "describe", "design",
    "destroy", "develop", "die", "dig", "discover", "discuss", "draw", "dream", "dress",
    "drink", "drive", "drop", "eat", "enjoy", "enter", "escape", "explain", "fail", "fall",
    "feed", "feel", "fight", "fill", "find", "finish", "fix", "fly", "follow", "forget",
    "forgive", "form", "get", "give", "go", "grow", "guess", "hang", "happen", "hate", "hear",
    "help", "hide", "hit", "hold", "hope", "hunt", "hurry", "hurt", "imagine", "improve",
    "include", "increase", "introduce", "invite", "join", "jump", "keep", "kick", "kill",
    "kiss", "knock", "know", "laugh", "lay", "lead", "learn", "leave", "lend", "let", "lie",
    "lift", "like", "listen", "live", "look", "lose", "love", "make", "manage", "marry",
    "matter", "mean", "meet", "mention", "mind", "miss", "move", "need", "notice", "obtain",
    "offer", "open", "order", "paint", "pass", "pay", "perform", "pick", "plan",
    "plant", "play", "point", "pour", "prefer", "prepare", "present", "press", "prevent",
    "produce", "promise", "protect", "prove", "provide", "pull", "push", "put", "raise",
    "reach", "read", "receive", "recognize", "record", "reduce", "refuse", "remain",
    "remember", "remove", "repeat", "replace", "reply", "report", "require", "rest", "return",
    "ride", "ring", "rise", "run", "rush", "save", "say", "see", "seek", "seem", "sell",
    "send", "serve", "set", "shake", "share", "shine", "shoot", "shout", "show", "shut",
    "sing", "sit", "sleep", "slide", "smell", "smile", "speak", "spend", "stand", "start",
    "stay", "steal", "stop", "study", "succeed", "suggest", "support", "suppose", "swim",
    "take", "talk", "taste", "teach", "tell", "tend", "test", "thank", "think", "throw",
    "touch", "train", "travel", "treat", "try", "turn", "understand", "use", "visit", "wait",
    "wake", "walk", "want", "warn", "wash", "watch", "wear", "win", "wish", "wonder", "work",
    "worry", "write", "yell",
];

/// Irregular past and participle forms whose lemma is in [`VERBS`] or an auxiliary.
const IRREGULAR_VERB_FORMS: &[&str] = &[
    "ate", "eaten", "became", "began", "begun", "bit", "bitten", "blew", "blown", "bore",
    "born", "borne", "bought", "broke", "broken", "brought", "built", "burnt", "came", "caught",
    "chose", "chosen", "dealt", "drew", "drawn", "dreamt", "drank", "drunk", "drove", "driven",
    "dug", "fed", "fell", "fallen", "felt", "fought", "found", "flew", "flown", "forgot",
    "forgotten", "forgave", "forgiven", "gave", "given", "went", "gone", "got", "gotten",
    "grew", "grown", "hung", "heard", "hid", "hidden", "held", "kept", "knew", "known", "laid",
    "led", "left", "lent", "lay", "lain", "lost", "made", "meant", "met", "paid", "rode",
    "ridden", "rang", "rung", "rose", "risen", "ran", "said", "saw", "seen", "sought", "sold",
    "sent", "shook", "shaken", "shone", "shot", "sang", "sung", "sat", "slept", "slid", "spoke",
    "spoken", "spent", "stood", "stole", "stolen", "swam", "swum", "took", "taken", "taught",
    "told", "thought", "threw", "thrown", "understood", "woke", "woken", "wore", "worn", "won",
    "wrote", "written",
];

/// Common noun lemmas. Members that are also in [`VERBS`] are ambiguous.
const NOUNS: &[&str] = &[
    "account", "act", "address", "age", "air", "animal", "answer", "apple", "area", "arm",
    "art", "attack", "baby", "back", "bag", "ball", "bank", "bed", "bird", "boat", "body",
    "book", "bottle", "box", "boy", "brother", "building", "business", "call", "car", "card",
    "care", "case", "cat", "cause", "chair", "chance", "change", "check", "child", "city",
    "class", "clock", "cloud", "coffee", "color", "colour", "company", "computer", "cost",
    "country", "course", "cover", "cow", "cup", "dance", "data", "date", "daughter", "day",
    "deal", "design", "desk", "dinner", "document", "dog", "door", "dream", "dress", "drink",
    "drop", "ear", "earth", "email", "end", "energy", "evening", "eye", "face", "fact",
    "fall", "family", "farm", "father", "field", "file", "film", "fire", "fish", "floor",
    "flower", "fly", "food", "foot", "form", "friend", "fruit", "game", "garden", "girl",
    "glass", "government", "grass", "group", "guess", "hair", "hand", "head", "health",
    "heart", "help", "hill", "history", "hope", "horse", "hospital", "hotel", "hour", "house",
    "idea", "increase", "information", "island", "job", "journey", "key", "kind", "kiss",
    "kitchen", "knowledge", "lake", "land", "language", "law", "leg", "letter", "level",
    "library", "life", "light", "line", "list", "look", "love", "lunch", "machine", "man",
    "map", "market", "matter", "meal", "meat", "meeting", "member", "milk", "mind", "minute",
    "moment", "money", "month", "moon", "morning", "mother", "mountain", "mouse", "mouth",
    "movie", "music", "name", "nature", "need", "network", "news", "night", "nose", "note",
    "number", "object", "offer", "office", "oil", "order", "page", "paint", "paper", "parent",
    "park", "part", "party", "pass", "pen", "people", "person", "phone", "picture", "piece",
    "place", "plan", "plant", "play", "point", "policy", "power", "present", "press", "price",
    "problem", "process", "product", "program", "project", "promise", "question", "rain",
    "reason", "record", "reply", "report", "rest", "result", "return", "ride", "ring", "river",
    "road", "rock", "room", "rule", "run", "school", "sea", "season", "seat", "share", "ship",
    "shoe", "shop", "show", "side", "sign", "sister", "size", "sky", "sleep", "smell", "smile",
    "snow", "society", "son", "song", "sound", "space", "sport", "spring", "star", "start",
    "state", "station", "step", "stone", "store", "story", "street", "student", "study",
    "sugar", "summer", "sun", "support", "system", "table", "talk", "taste", "tea", "teacher",
    "team", "test", "text", "thing", "time", "town", "train", "tree", "trip", "truth", "turn",
    "type", "university", "use", "user", "value", "village", "visit", "voice", "wait", "walk",
    "wall", "war", "watch", "water", "way", "weather", "week", "wind", "window", "winter",
    "wish", "woman", "wood", "word", "work", "world", "year",
];

lazy_static! {
    static ref DETERMINER_SET: HashSet<&'static str> = DETERMINERS.iter().copied().collect();
    static ref POSSESSIVE_SET: HashSet<&'static str> = POSSESSIVES.iter().copied().collect();
    static ref SUBJECT_PRONOUN_SET: HashSet<&'static str> =
        SUBJECT_PRONOUNS.iter().copied().collect();
    static ref OTHER_PRONOUN_SET: HashSet<&'static str> = OTHER_PRONOUNS.iter().copied().collect();
    static ref PREPOSITION_SET: HashSet<&'static str> = PREPOSITIONS.iter().copied().collect();
    static ref CONJUNCTION_SET: HashSet<&'static str> = CONJUNCTIONS.iter().copied().collect();
    static ref MODAL_SET: HashSet<&'static str> = MODALS.iter().copied().collect();
    static ref AUXILIARY_SET: HashSet<&'static str> = AUXILIARIES.iter().copied().collect();
    static ref DO_SUPPORT_SET: HashSet<&'static str> = DO_SUPPORT.iter().copied().collect();
    static ref INTERJECTION_SET: HashSet<&'static str> = INTERJECTIONS.iter().copied().collect();
    static ref NUMBER_WORD_SET: HashSet<&'static str> = NUMBER_WORDS.iter().copied().collect();
    static ref ADVERB_SET: HashSet<&'static str> = ADVERBS.iter().copied().collect();
    static ref ADJECTIVE_SET: HashSet<&'static str> = ADJECTIVES.iter().copied().collect();
    static ref VERB_SET: HashSet<&'static str> = VERBS.iter().copied().collect();
    static ref IRREGULAR_SET: HashSet<&'static str> =
        IRREGULAR_VERB_FORMS.iter().copied().collect();
    static ref NOUN_SET: HashSet<&'static str> = NOUNS.iter().copied().collect();
}

/// Closed-class role of `word`, if it has one.
///
/// Closed-class roles are final: context never changes them.
pub fn closed_class(word: &str) -> Option<Tag> {
    if word == "to" {
        return Some(Tag::Particle);
    }
    if AUXILIARY_SET.contains(word) || DO_SUPPORT_SET.contains(word) {
        return Some(Tag::Verb);
    }
    if MODAL_SET.contains(word) {
        return Some(Tag::Modal);
    }
    if DETERMINER_SET.contains(word) {
        return Some(Tag::Determiner);
    }
    if POSSESSIVE_SET.contains(word)
        || SUBJECT_PRONOUN_SET.contains(word)
        || OTHER_PRONOUN_SET.contains(word)
    {
        return Some(Tag::Pronoun);
    }
    if PREPOSITION_SET.contains(word) {
        return Some(Tag::Preposition);
    }
    if CONJUNCTION_SET.contains(word) {
        return Some(Tag::Conjunction);
    }
    if NUMBER_WORD_SET.contains(word) {
        return Some(Tag::Numeral);
    }
    if INTERJECTION_SET.contains(word) {
        return Some(Tag::Interjection);
    }
    None
}

/// Adjective or adverb role of `word` from the word lists.
pub fn modifier(word: &str) -> Option<Tag> {
    if ADVERB_SET.contains(word) {
        Some(Tag::Adverb)
    } else if ADJECTIVE_SET.contains(word) {
        Some(Tag::Adjective)
    } else {
        None
    }
}

/// `my`, `their`, ...
pub fn is_possessive(word: &str) -> bool {
    POSSESSIVE_SET.contains(word)
}

/// `I`, `they`, ...
pub fn is_subject_pronoun(word: &str) -> bool {
    SUBJECT_PRONOUN_SET.contains(word)
}

/// Forms of `be` and `have`.
pub fn is_auxiliary(word: &str) -> bool {
    AUXILIARY_SET.contains(word)
}

/// Forms of `do`.
pub fn is_do_support(word: &str) -> bool {
    DO_SUPPORT_SET.contains(word)
}

/// Whether `lemma` is a known verb lemma.
pub fn is_verb_lemma(lemma: &str) -> bool {
    VERB_SET.contains(lemma)
}

/// Whether `word` is a known irregular past or participle form.
pub fn is_irregular_verb_form(word: &str) -> bool {
    IRREGULAR_SET.contains(word)
}

/// Whether `lemma` is a known noun lemma.
pub fn is_noun_lemma(lemma: &str) -> bool {
    NOUN_SET.contains(lemma)
}
