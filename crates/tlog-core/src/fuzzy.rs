//! Approximate label matching for resuming previous activities.

use std::cmp::Ordering;

use strsim::normalized_levenshtein;

/// Minimum normalized similarity for a label to count as a match.
const SIMILARITY_CUTOFF: f64 = 0.6;

/// Candidates reported back are capped at this many, best first.
const MAX_CANDIDATES: usize = 3;

/// Outcome of matching a query against the known labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// No label cleared the similarity cutoff.
    None,
    /// Exactly one label cleared the cutoff.
    Unique(String),
    /// Several labels cleared the cutoff; resolution is up to the user.
    Ambiguous(Vec<String>),
}

/// Scores `query` against `labels` and classifies the outcome.
///
/// Labels scoring at least [`SIMILARITY_CUTOFF`] are kept best first (ties
/// keep their input order) and capped at [`MAX_CANDIDATES`].
pub fn close_matches(query: &str, labels: &[String]) -> MatchOutcome {
    let mut scored: Vec<(f64, &String)> = labels
        .iter()
        .map(|label| (normalized_levenshtein(query, label), label))
        .filter(|(score, _)| *score >= SIMILARITY_CUTOFF)
        .collect();
    scored.sort_by(|(a, _), (b, _)| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    scored.truncate(MAX_CANDIDATES);

    match scored.as_slice() {
        [] => MatchOutcome::None,
        [(_, label)] => MatchOutcome::Unique((*label).clone()),
        _ => MatchOutcome::Ambiguous(scored.into_iter().map(|(_, label)| label.clone()).collect()),
    }
}
