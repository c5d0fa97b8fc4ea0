//! Contraction expansion engine
//!
//! Expands English contractions ("it's", "I'd", "can't") into their full
//! grammatical forms, choosing between candidate expansions by inspecting
//! the following word. The engine is pure per call: the lexicon tables are
//! immutable process-wide statics and the match patterns compile once, so
//! one [`Expander`] serves any number of concurrent callers.

#![warn(missing_docs)]

pub mod disambiguate;
pub mod error;
pub mod lexicon;
pub mod substitute;

// Re-export key types
pub use disambiguate::Disambiguator;
pub use error::{ExpandError, Result};
pub use substitute::Substitutor;

use serde::{Deserialize, Serialize};

/// Result of one expansion call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expansion {
    /// The sentence as received
    pub original: String,
    /// The sentence with every recognized contraction expanded
    pub expanded: String,
}

/// Main entry point for contraction expansion
///
/// Runs the fixed three-stage pipeline: the "I'd" lookahead pass, then
/// unambiguous pattern substitution, then ambiguous-map resolution.
pub struct Expander {
    substitutor: Substitutor,
    disambiguator: Disambiguator,
}

impl Expander {
    /// Create an expander, compiling and caching its match patterns.
    pub fn new() -> Result<Self> {
        Ok(Self {
            substitutor: Substitutor::new()?,
            disambiguator: Disambiguator::new()?,
        })
    }

    /// Expand every recognized contraction in `sentence`.
    ///
    /// The only error is an empty input; anything else succeeds,
    /// with unmatched tokens passing through verbatim. Tokens are
    /// rejoined with single spaces.
    pub fn expand(&self, sentence: &str) -> Result<Expansion> {
        if sentence.is_empty() {
            return Err(ExpandError::EmptyInput);
        }

        let after_i_d = self.disambiguator.expand_i_d(sentence);
        let after_unambiguous = self.substitutor.substitute(&after_i_d);
        let expanded = self.disambiguator.resolve_ambiguous(&after_unambiguous);

        Ok(Expansion {
            original: sentence.to_string(),
            expanded,
        })
    }
}

impl Default for Expander {
    fn default() -> Self {
        Self::new().expect("default expander creation should not fail")
    }
}

/// Expand a sentence with a freshly built expander (convenience).
pub fn expand_text(sentence: &str) -> Result<Expansion> {
    let expander = Expander::new()?;
    expander.expand(sentence)
}
