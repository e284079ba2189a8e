//! Summary statistics over a record collection.

use crate::record::AthleteRecord;

/// Aggregate snapshot of a loaded record set.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub record_count: usize,
    pub mean_result_seconds: f64,
    pub mean_points: f64,
    pub gold_medals: usize,
}

impl Statistics {
    /// Compute statistics; `None` when there is nothing to aggregate.
    pub fn compute(records: &[AthleteRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let count = records.len();
        let total_seconds: f64 = records.iter().map(|r| r.result_seconds()).sum();
        let total_points: f64 = records.iter().map(|r| r.points() as f64).sum();
        let gold_medals = records
            .iter()
            .filter(|r| r.medal().eq_ignore_ascii_case("Gold"))
            .count();

        Some(Self {
            record_count: count,
            mean_result_seconds: total_seconds / count as f64,
            mean_points: total_points / count as f64,
            gold_medals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_records;

    #[test]
    fn test_empty_set_has_no_statistics() {
        assert_eq!(Statistics::compute(&[]), None);
    }

    #[test]
    fn test_single_record() {
        let records = vec![AthleteRecord::new(
            1, "a", "b", "c", 10.0, 0, 950, "gold",
        )];
        let stats = Statistics::compute(&records).unwrap();
        assert_eq!(stats.record_count, 1);
        assert_eq!(stats.mean_result_seconds, 10.0);
        assert_eq!(stats.mean_points, 950.0);
        // Medal comparison is case-insensitive, like the country filter.
        assert_eq!(stats.gold_medals, 1);
    }

    #[test]
    fn test_demo_set_statistics() {
        let stats = Statistics::compute(&demo_records()).unwrap();
        assert_eq!(stats.record_count, 20);
        assert_eq!(stats.gold_medals, 9);
        assert!((stats.mean_points - 958.95).abs() < 1e-9);
    }
}
