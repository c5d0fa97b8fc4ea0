//! Unambiguous contraction substitution
//!
//! One case-insensitive alternation over every unambiguous key, applied to
//! the raw sentence rather than to tokens, so contractions glued to
//! punctuation ("don't!") still match.

use crate::error::Result;
use crate::lexicon;
use regex::{Captures, Regex};

/// Pattern-based substitutor for unambiguous contractions.
pub struct Substitutor {
    pattern: Regex,
}

impl Substitutor {
    /// Compile the alternation over the unambiguous lexicon.
    pub fn new() -> Result<Self> {
        let alternation = lexicon::unambiguous_keys_by_length()
            .iter()
            .map(|key| regex::escape(key))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"(?i)\b(?:{alternation})\b"))?;
        Ok(Self { pattern })
    }

    /// Replace every unambiguous contraction with its expansion, keeping
    /// the case of the matched token's first character. No match returns
    /// the sentence unchanged.
    pub fn substitute(&self, sentence: &str) -> String {
        self.pattern
            .replace_all(sentence, |caps: &Captures| {
                let matched = &caps[0];
                match lexicon::unambiguous(matched) {
                    Some(expansion) => apply_case(matched, expansion),
                    // Unreachable with the shipped tables, but a miss is a
                    // no-op rather than a panic.
                    None => matched.to_string(),
                }
            })
            .into_owned()
    }
}

/// Capitalize the expansion's first letter when the source token was
/// capitalized. Only the first character is inspected and only the first
/// character of the expansion changes.
pub(crate) fn apply_case(source: &str, expansion: &str) -> String {
    if source.chars().next().is_some_and(char::is_uppercase) {
        capitalize_first(expansion)
    } else {
        expansion.to_string()
    }
}

pub(crate) fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
