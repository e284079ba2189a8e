//! In-memory filter and sort over a loaded record collection.
//!
//! All functions are pure: they take a slice and produce a new `Vec`,
//! leaving the input untouched. A filter that matches nothing returns an
//! empty `Vec`, never an error. Every lookup is a full linear scan; the
//! file format has no index, an accepted tradeoff at the target scale of
//! tens to low thousands of records.

use std::cmp::Ordering;

use crate::record::AthleteRecord;

/// All records with exactly this `id`. Ids are not assumed unique, so
/// the result may hold zero, one, or many records.
pub fn search_by_id(records: &[AthleteRecord], id: i32) -> Vec<AthleteRecord> {
    records.iter().filter(|r| r.id() == id).cloned().collect()
}

/// Case-insensitive exact match on the full country value (ordinal ASCII
/// casefold, locale-independent).
pub fn search_by_country(records: &[AthleteRecord], country: &str) -> Vec<AthleteRecord> {
    records
        .iter()
        .filter(|r| r.country().eq_ignore_ascii_case(country))
        .cloned()
        .collect()
}

/// Case-insensitive exact match on the full discipline value.
pub fn search_by_discipline(records: &[AthleteRecord], discipline: &str) -> Vec<AthleteRecord> {
    records
        .iter()
        .filter(|r| r.discipline().eq_ignore_ascii_case(discipline))
        .cloned()
        .collect()
}

/// Conjunction filter: discipline equality (case-insensitive) AND
/// `result_seconds <= max_seconds` AND `points >= min_points`.
pub fn search_complex(
    records: &[AthleteRecord],
    discipline: &str,
    max_seconds: f64,
    min_points: i32,
) -> Vec<AthleteRecord> {
    records
        .iter()
        .filter(|r| {
            r.discipline().eq_ignore_ascii_case(discipline)
                && r.result_seconds() <= max_seconds
                && r.points() >= min_points
        })
        .cloned()
        .collect()
}

/// Sorted copy: descending by points, ties broken by ascending result
/// time. Records equal on both keys may appear in either relative order.
pub fn sort_by_points(records: &[AthleteRecord]) -> Vec<AthleteRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        b.points()
            .cmp(&a.points())
            .then(cmp_seconds(a.result_seconds(), b.result_seconds()))
    });
    sorted
}

/// Sorted copy: ascending by result time, no tie-break.
pub fn sort_by_result(records: &[AthleteRecord]) -> Vec<AthleteRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| cmp_seconds(a.result_seconds(), b.result_seconds()));
    sorted
}

// NaN compares as equal so the comparator stays a total order.
fn cmp_seconds(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
