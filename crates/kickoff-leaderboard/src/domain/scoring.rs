//! Scoring and ranking.

use std::collections::HashSet;

use kickoff_fixture::domain::fixture::Event;

/// Sums the points of events that occurred and were selected.
///
/// Each event name counts once, no matter how often it appears in
/// `selections` or in `events`.
#[must_use]
pub fn score<S: AsRef<str>>(events: &[Event], selections: &[S]) -> u32 {
    let mut scored = HashSet::new();
    events
        .iter()
        .filter(|event| event.has_occured)
        .filter(|event| selections.iter().any(|s| s.as_ref() == event.name))
        .filter(|event| scored.insert(event.name.as_str()))
        .map(|event| event.points)
        .sum()
}

/// One plus the number of scores strictly greater than `score`.
///
/// Equal scores share a rank.
#[must_use]
pub fn rank(score: u32, other_scores: impl IntoIterator<Item = u32>) -> usize {
    1 + other_scores
        .into_iter()
        .filter(|other| *other > score)
        .count()
}
