//! Columnar aggregation of trial records.
//!
//! Merges every [`TrialRecord`] into one struct-of-arrays dataset ready
//! for persistence: one row per winning outcome, each carrying the trial
//! id it came from. This is the single hand-off point between the
//! simulation and the storage layer.

use bondsim_core::TrialRecord;

/// Struct-of-arrays dataset of every winning outcome in a run.
///
/// Columns are parallel: row `i` is `(trial_id[i], bond[i], prize[i])`.
/// Rows appear grouped by trial in the order records were supplied, with
/// within-trial outcome order preserved; consumers must rely on the
/// `trial_id` column rather than on row position.
///
/// # Examples
///
/// ```rust
/// use bondsim_core::{DrawOutcome, TrialRecord};
/// use bondsim_engine::AggregatedDataset;
///
/// let records = vec![
///     TrialRecord { trial_id: 0, outcomes: vec![DrawOutcome { bond: 5, prize: 25 }] },
///     TrialRecord { trial_id: 1, outcomes: vec![] },
/// ];
/// let dataset = AggregatedDataset::from_records(&records);
/// assert_eq!(dataset.len(), 1);
/// assert_eq!(dataset.trial_id, vec![0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedDataset {
    /// Originating trial per row.
    pub trial_id: Vec<u32>,
    /// Winning bond position per row.
    pub bond: Vec<u32>,
    /// Prize amount per row, in pounds.
    pub prize: Vec<u32>,
}

impl AggregatedDataset {
    /// Creates an empty dataset with room for `capacity` rows.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            trial_id: Vec::with_capacity(capacity),
            bond: Vec::with_capacity(capacity),
            prize: Vec::with_capacity(capacity),
        }
    }

    /// Merges a slice of trial records into one dataset.
    ///
    /// Row count equals the sum of record lengths; every row is tagged
    /// with its record's own `trial_id`.
    pub fn from_records(records: &[TrialRecord]) -> Self {
        let rows = records.iter().map(TrialRecord::len).sum();
        let mut dataset = Self::with_capacity(rows);
        for record in records {
            dataset.push_record(record);
        }
        dataset
    }

    /// Appends one trial's outcomes, preserving their order.
    pub fn push_record(&mut self, record: &TrialRecord) {
        for outcome in &record.outcomes {
            self.trial_id.push(record.trial_id);
            self.bond.push(outcome.bond);
            self.prize.push(outcome.prize);
        }
    }

    /// Number of rows (winning outcomes) in the dataset.
    #[inline]
    pub fn len(&self) -> usize {
        self.trial_id.len()
    }

    /// Returns whether the dataset has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trial_id.is_empty()
    }

    /// Sum of all prizes in the dataset, in pounds.
    pub fn total_prize(&self) -> u64 {
        self.prize.iter().map(|&p| p as u64).sum()
    }

    /// Mean winning outcomes per draw over the run.
    pub fn mean_winners_per_draw(&self, num_trials: u32, periods_per_trial: u32) -> f64 {
        let draws = num_trials as f64 * periods_per_trial as f64;
        self.len() as f64 / draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bondsim_core::DrawOutcome;

    fn sample_records() -> Vec<TrialRecord> {
        vec![
            TrialRecord {
                trial_id: 0,
                outcomes: vec![
                    DrawOutcome { bond: 3, prize: 25 },
                    DrawOutcome { bond: 8, prize: 100 },
                ],
            },
            TrialRecord {
                trial_id: 1,
                outcomes: vec![],
            },
            TrialRecord {
                trial_id: 2,
                outcomes: vec![DrawOutcome { bond: 1, prize: 50 }],
            },
        ]
    }

    #[test]
    fn test_row_count_is_sum_of_record_lengths() {
        let records = sample_records();
        let dataset = AggregatedDataset::from_records(&records);
        let expected: usize = records.iter().map(TrialRecord::len).sum();
        assert_eq!(dataset.len(), expected);
        assert_eq!(dataset.len(), 3);
        assert!(!dataset.is_empty());
    }

    #[test]
    fn test_rows_tagged_with_their_trial_id() {
        let dataset = AggregatedDataset::from_records(&sample_records());
        assert_eq!(dataset.trial_id, vec![0, 0, 2]);
        assert_eq!(dataset.bond, vec![3, 8, 1]);
        assert_eq!(dataset.prize, vec![25, 100, 50]);
    }

    #[test]
    fn test_within_trial_order_preserved() {
        let dataset = AggregatedDataset::from_records(&sample_records());
        // Trial 0's rows keep their original outcome order.
        assert_eq!((dataset.bond[0], dataset.bond[1]), (3, 8));
    }

    #[test]
    fn test_summary_helpers() {
        let dataset = AggregatedDataset::from_records(&sample_records());
        assert_eq!(dataset.total_prize(), 175);
        let mean = dataset.mean_winners_per_draw(3, 1);
        assert!((mean - 1.0).abs() < f64::EPSILON);
    }
}
