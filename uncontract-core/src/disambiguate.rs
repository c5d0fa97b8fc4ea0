//! Context-based disambiguation passes
//!
//! Token-level resolution for contractions whose expansion depends on the
//! following word. Tokens are whitespace-split; lookahead checks run against
//! the raw next token, so attached punctuation defeats the exact adverb
//! comparison but not the substring participle match.

use crate::error::Result;
use crate::lexicon;
use crate::substitute::apply_case;
use regex::Regex;

/// Suffix heuristic for past participles. Deliberately a substring match:
/// any word chunk ending in -ed or -en counts, wherever it sits in the
/// token. Irregular participles ("gone", "seen") are a known miss, kept
/// as-is rather than upgraded to real morphology.
const PARTICIPLE_PATTERN: &str = r"\b\w+(?:ed|en)\b";

/// Token-by-token disambiguator for ambiguous contractions.
pub struct Disambiguator {
    participle: Regex,
}

impl Disambiguator {
    /// Compile the participle lookahead pattern.
    pub fn new() -> Result<Self> {
        Ok(Self {
            participle: Regex::new(PARTICIPLE_PATTERN)?,
        })
    }

    fn looks_like_participle(&self, word: &str) -> bool {
        self.participle.is_match(word)
    }

    /// First pass: expand "I'd" from lookahead alone. It sits in neither
    /// lexicon table; a following participle-shaped word selects the
    /// perfect ("I had"), anything else the conditional ("I would"),
    /// including the end of the sentence.
    pub fn expand_i_d(&self, sentence: &str) -> String {
        let words: Vec<&str> = sentence.split_whitespace().collect();
        let mut result: Vec<String> = Vec::with_capacity(words.len());

        for (i, &word) in words.iter().enumerate() {
            if word.eq_ignore_ascii_case("i'd") {
                let perfect = words
                    .get(i + 1)
                    .is_some_and(|next| self.looks_like_participle(&next.to_lowercase()));
                result.push(if perfect { "I had" } else { "I would" }.to_string());
            } else {
                result.push(word.to_string());
            }
        }

        result.join(" ")
    }

    /// Second pass: resolve every token found in the ambiguous map.
    ///
    /// A following adverb from the lookahead set forces the "has"/"would"
    /// candidate before the participle check is consulted. Otherwise the
    /// "is/has" family promotes to "has" on a participle and the
    /// "had/would" family demotes to "would" without one. With no next
    /// token the participle check is false and the "is"/"would" branch
    /// wins by default.
    pub fn resolve_ambiguous(&self, sentence: &str) -> String {
        let words: Vec<&str> = sentence.split_whitespace().collect();
        let mut result: Vec<String> = Vec::with_capacity(words.len());

        for (i, &word) in words.iter().enumerate() {
            let Some((first, second)) = lexicon::ambiguous(word) else {
                result.push(word.to_string());
                continue;
            };

            let next = words.get(i + 1);
            let participle_next = next.is_some_and(|n| self.looks_like_participle(n));

            let chosen = if next.is_some_and(|n| lexicon::is_lookahead_adverb(n)) {
                second
            } else if is_is_has_family(word) {
                if participle_next {
                    second
                } else {
                    first
                }
            } else if participle_next {
                first
            } else {
                second
            };

            result.push(apply_case(word, chosen));
        }

        result.join(" ")
    }
}

/// An 's-contraction reads "is"/"has"; a 'd-contraction reads
/// "had"/"would". Equivalent to enumerating the two families given the
/// shipped tables.
fn is_is_has_family(token: &str) -> bool {
    token.to_lowercase().ends_with("'s")
}
