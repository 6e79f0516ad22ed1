//! Data model for token reconciliation.

use serde::{Deserialize, Serialize};

/// A replacement proposed for a flagged token, ranked by confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested replacement text.
    pub text: String,
    /// Confidence score reported by the source service (higher is better).
    /// Not every service reports one.
    pub score: Option<f64>,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new<S: Into<String>>(text: S, score: Option<f64>) -> Self {
        Suggestion {
            text: text.into(),
            score,
        }
    }
}

/// One misspelled/flagged word instance found by the spell-check service.
///
/// `token` is the exact substring as it appeared in the input text, not
/// normalized. `suggestions` is ordered by the source service's confidence,
/// highest first, and may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlaggedToken {
    /// The flagged substring, verbatim.
    pub token: String,
    /// Ranked replacement candidates, best first.
    pub suggestions: Vec<Suggestion>,
}

impl FlaggedToken {
    /// Create a new flagged token.
    pub fn new<S: Into<String>>(token: S, suggestions: Vec<Suggestion>) -> Self {
        FlaggedToken {
            token: token.into(),
            suggestions,
        }
    }

    /// The highest-ranked suggestion, if any.
    pub fn best_suggestion(&self) -> Option<&Suggestion> {
        self.suggestions.first()
    }
}

/// Record of one token replacement applied during reconciliation.
///
/// Exactly one record is emitted per distinct flagged token that was
/// replaced, not one per occurrence. `occurrence_index` is the 0-based
/// ordinal of the first occurrence replaced; under the all-occurrences
/// replacement policy it is always 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedCorrection {
    /// The flagged token that was replaced.
    pub original_token: String,
    /// The replacement text that was substituted.
    pub replacement: String,
    /// 0-based ordinal of the first replaced occurrence.
    pub occurrence_index: usize,
}

/// Result of reconciling flagged tokens against an input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionResult {
    /// The corrected text.
    pub corrected_text: String,
    /// One entry per flagged token that was actually replaced, in input order.
    pub applied_corrections: Vec<AppliedCorrection>,
}

impl CorrectionResult {
    /// Check if any corrections were applied.
    pub fn has_corrections(&self) -> bool {
        !self.applied_corrections.is_empty()
    }
}

/// Why a flagged token produced no replacement.
///
/// These are not errors: reconciliation degrades gracefully by skipping
/// tokens it cannot apply and reporting them here for caller visibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The token's literal text was absent from the working text at
    /// replacement time (already rewritten by an earlier correction, or a
    /// service mismatch).
    TokenNotFound {
        /// The token that could not be located.
        token: String,
    },
    /// The token carried no suggestions.
    EmptySuggestions {
        /// The token that had nothing to replace it with.
        token: String,
    },
}

impl Diagnostic {
    /// The token this diagnostic refers to.
    pub fn token(&self) -> &str {
        match self {
            Diagnostic::TokenNotFound { token } => token,
            Diagnostic::EmptySuggestions { token } => token,
        }
    }
}
