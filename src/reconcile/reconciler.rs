//! The reconciliation algorithm: applying ranked suggestions to text.

use log::debug;

use crate::reconcile::types::{
    AppliedCorrection, CorrectionResult, Diagnostic, FlaggedToken,
};

/// Apply flagged-token corrections to `original_text`.
///
/// Tokens are processed strictly in input order. For each token the rank-0
/// suggestion replaces **all** literal occurrences of the token in the
/// current working text. Matching is exact-case and literal (no regex), so
/// special characters coming back from the API cannot be misinterpreted as
/// patterns. Tokens with no suggestions, and tokens whose text is no longer
/// present in the working text, are skipped without error.
///
/// Replacing all occurrences is a deliberate policy: a token flagged once is
/// almost always misspelled everywhere it appears verbatim. Because later
/// tokens are searched in the text *after* earlier replacements, a token that
/// overlaps an earlier one may no longer be found; that is accepted behavior,
/// not fixed up with fuzzy matching.
///
/// # Examples
///
/// ```
/// use corrigo::reconcile::{reconcile, FlaggedToken, Suggestion};
///
/// let flagged = vec![FlaggedToken::new(
///     "pinapple",
///     vec![Suggestion::new("pineapple", Some(0.92))],
/// )];
/// let result = reconcile("pinapple", &flagged);
/// assert_eq!(result.corrected_text, "pineapple");
/// ```
pub fn reconcile(original_text: &str, flagged_tokens: &[FlaggedToken]) -> CorrectionResult {
    reconcile_with_diagnostics(original_text, flagged_tokens).0
}

/// Like [`reconcile`], but also returns a [`Diagnostic`] for every token that
/// was skipped, so callers can surface "nothing happened for this token"
/// without treating it as a failure.
pub fn reconcile_with_diagnostics(
    original_text: &str,
    flagged_tokens: &[FlaggedToken],
) -> (CorrectionResult, Vec<Diagnostic>) {
    let mut working = original_text.to_string();
    let mut applied = Vec::new();
    let mut diagnostics = Vec::new();

    for flagged in flagged_tokens {
        let Some(suggestion) = flagged.best_suggestion() else {
            debug!("skipping '{}': no suggestions", flagged.token);
            diagnostics.push(Diagnostic::EmptySuggestions {
                token: flagged.token.clone(),
            });
            continue;
        };

        // Empty tokens would match everywhere; treat them as not found.
        if flagged.token.is_empty() || !working.contains(&flagged.token) {
            debug!("skipping '{}': not present in working text", flagged.token);
            diagnostics.push(Diagnostic::TokenNotFound {
                token: flagged.token.clone(),
            });
            continue;
        }

        working = working.replace(&flagged.token, &suggestion.text);
        applied.push(AppliedCorrection {
            original_token: flagged.token.clone(),
            replacement: suggestion.text.clone(),
            occurrence_index: 0,
        });
    }

    (
        CorrectionResult {
            corrected_text: working,
            applied_corrections: applied,
        },
        diagnostics,
    )
}

/// Mark every literal occurrence of each flagged token in `original_text`.
///
/// Each occurrence is wrapped in `[` `]` so a terminal user can see what the
/// service flagged without applying any replacement. Matching follows the
/// same rules as [`reconcile`]: literal, exact-case, against the original
/// text only (marks never stack or rescan marked output for later tokens
/// whose text was introduced by the marking itself).
pub fn highlight(original_text: &str, flagged_tokens: &[FlaggedToken]) -> String {
    // Collect match ranges against the original text, then rebuild once, so
    // one token's markers cannot perturb another token's offsets.
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for flagged in flagged_tokens {
        if flagged.token.is_empty() {
            continue;
        }
        for (start, matched) in original_text.match_indices(flagged.token.as_str()) {
            ranges.push((start, start + matched.len()));
        }
    }
    ranges.sort_unstable();
    ranges.dedup();

    let mut out = String::with_capacity(original_text.len() + ranges.len() * 2);
    let mut cursor = 0;
    for (start, end) in ranges {
        // Overlapping ranges from tokens that are substrings of each other:
        // keep the earlier mark, drop the overlap.
        if start < cursor {
            continue;
        }
        out.push_str(&original_text[cursor..start]);
        out.push('[');
        out.push_str(&original_text[start..end]);
        out.push(']');
        cursor = end;
    }
    out.push_str(&original_text[cursor..]);
    out
}
