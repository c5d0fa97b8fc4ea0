//! Static contraction lexicon
//!
//! Two disjoint read-only tables: unambiguous contractions with a single
//! expansion, and ambiguous contractions carrying an ordered candidate pair.
//! "i'd" appears in neither table; it is resolved by lookahead alone in the
//! disambiguator. Keys are lowercase; the caller derives case from the
//! matched token at substitution time.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Contractions with exactly one expansion, independent of context.
const UNAMBIGUOUS: &[(&str, &str)] = &[
    ("aren't", "are not"),
    ("can't", "cannot"),
    ("couldn't", "could not"),
    ("didn't", "did not"),
    ("doesn't", "does not"),
    ("don't", "do not"),
    ("hadn't", "had not"),
    ("hasn't", "has not"),
    ("haven't", "have not"),
    ("he'll", "he will"),
    ("i'll", "i will"),
    ("i'm", "i am"),
    ("i've", "i have"),
    ("isn't", "is not"),
    ("it'll", "it will"),
    ("let's", "let us"),
    ("ma'am", "madam"),
    ("mightn't", "might not"),
    ("mustn't", "must not"),
    ("needn't", "need not"),
    ("o'clock", "of the clock"),
    ("oughtn't", "ought not"),
    ("shan't", "shall not"),
    ("she'll", "she will"),
    ("shouldn't", "should not"),
    ("that'll", "that will"),
    ("they'll", "they will"),
    ("they're", "they are"),
    ("they've", "they have"),
    ("wasn't", "was not"),
    ("we'll", "we will"),
    ("we're", "we are"),
    ("we've", "we have"),
    ("weren't", "were not"),
    ("what'll", "what will"),
    ("what're", "what are"),
    ("who'll", "who will"),
    ("who're", "who are"),
    ("who've", "who have"),
    ("won't", "will not"),
    ("wouldn't", "would not"),
    ("you'll", "you will"),
    ("you're", "you are"),
    ("you've", "you have"),
];

/// Contractions with two context-dependent readings. The pair order is
/// fixed: first is the "is"/"had" reading, second is the "has"/"would"
/// reading, and the disambiguation rules index into it by position.
const AMBIGUOUS: &[(&str, (&str, &str))] = &[
    ("he's", ("he is", "he has")),
    ("she's", ("she is", "she has")),
    ("it's", ("it is", "it has")),
    ("that's", ("that is", "that has")),
    ("there's", ("there is", "there has")),
    ("who's", ("who is", "who has")),
    ("what's", ("what is", "what has")),
    ("where's", ("where is", "where has")),
    ("when's", ("when is", "when has")),
    ("why's", ("why is", "why has")),
    ("how's", ("how is", "how has")),
    ("you'd", ("you had", "you would")),
    ("he'd", ("he had", "he would")),
    ("she'd", ("she had", "she would")),
    ("it'd", ("it had", "it would")),
    ("we'd", ("we had", "we would")),
    ("they'd", ("they had", "they would")),
];

/// Adverbs that, when they follow a contraction, force the "has"/"would"
/// reading regardless of what comes after them.
const LOOKAHEAD_ADVERBS: &[&str] = &["always", "never", "often", "already", "just"];

fn unambiguous_map() -> &'static HashMap<&'static str, &'static str> {
    static MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| UNAMBIGUOUS.iter().copied().collect())
}

fn ambiguous_map() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    static MAP: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();
    MAP.get_or_init(|| AMBIGUOUS.iter().copied().collect())
}

fn adverb_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| LOOKAHEAD_ADVERBS.iter().copied().collect())
}

/// Look up the single expansion for an unambiguous contraction.
///
/// Case-insensitive on the key; absent keys yield `None`.
pub fn unambiguous(token: &str) -> Option<&'static str> {
    unambiguous_map().get(token.to_lowercase().as_str()).copied()
}

/// Look up the ordered candidate pair for an ambiguous contraction.
pub fn ambiguous(token: &str) -> Option<(&'static str, &'static str)> {
    ambiguous_map().get(token.to_lowercase().as_str()).copied()
}

/// Whether a word triggers the adverb lookahead override.
pub fn is_lookahead_adverb(word: &str) -> bool {
    adverb_set().contains(word.to_lowercase().as_str())
}

/// All unambiguous keys, longest first, for alternation construction.
/// Descending length keeps a short key from shadowing a longer one.
pub(crate) fn unambiguous_keys_by_length() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = UNAMBIGUOUS.iter().map(|(key, _)| *key).collect();
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    keys
}
