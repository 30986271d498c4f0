//! Cost histogram: counts per PL outcome with percentage annotations.
//!
//! Buckets are kept in a `BTreeMap` so that iteration is always in ascending
//! cost order; the running percentage is a prefix sum over that order.
//!
//! Percentages are rounded per bucket (half to even), so they need not sum to
//! exactly 100. The running total is left as is.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::TravelError;

/// One histogram bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sample {
    /// How many trials produced this cost.
    pub count: u64,
    /// This bucket's share of all trials, in whole percent.
    pub absolute_percentage: u32,
    /// Sum of `absolute_percentage` over this and all cheaper buckets.
    pub running_percentage: u32,
}

/// Ascending map from cost to [`Sample`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Histogram {
    buckets: BTreeMap<u32, Sample>,
    total: u64,
}

/// `round(100 * count / total)` with ties to even, in integer arithmetic.
fn percent_of(count: u64, total: u64) -> u32 {
    let scaled = 100 * count;
    let quotient = scaled / total;
    let twice_remainder = 2 * (scaled % total);
    let rounded = if twice_remainder > total || (twice_remainder == total && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    };
    rounded as u32
}

/// Count outcomes and annotate each bucket with its percentages.
pub fn build_histogram(outcomes: &[u32]) -> Histogram {
    let mut counts: BTreeMap<u32, u64> = BTreeMap::new();
    for &cost in outcomes {
        *counts.entry(cost).or_insert(0) += 1;
    }

    let total = outcomes.len() as u64;
    let mut running = 0u32;
    let buckets = counts
        .into_iter()
        .map(|(cost, count)| {
            let absolute_percentage = percent_of(count, total);
            running += absolute_percentage;
            (
                cost,
                Sample {
                    count,
                    absolute_percentage,
                    running_percentage: running,
                },
            )
        })
        .collect();

    Histogram { buckets, total }
}

impl Histogram {
    /// Build from pre-annotated buckets, rejecting zero counts and running
    /// percentages that decrease along ascending cost.
    pub fn from_buckets(buckets: BTreeMap<u32, Sample>) -> Result<Self, TravelError> {
        let mut previous_running = 0u32;
        let mut total = 0u64;
        for (&outcome, sample) in &buckets {
            if sample.count == 0 {
                return Err(TravelError::MalformedHistogram {
                    outcome,
                    reason: "bucket has zero count".to_string(),
                });
            }
            if sample.running_percentage < previous_running {
                return Err(TravelError::MalformedHistogram {
                    outcome,
                    reason: format!(
                        "running percentage {} drops below {}",
                        sample.running_percentage, previous_running
                    ),
                });
            }
            previous_running = sample.running_percentage;
            total += sample.count;
        }
        Ok(Self { buckets, total })
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of distinct outcomes.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of trials counted.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn get(&self, outcome: u32) -> Option<&Sample> {
        self.buckets.get(&outcome)
    }

    /// Buckets in ascending cost order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Sample)> + '_ {
        self.buckets.iter().map(|(&k, v)| (k, v))
    }
}

/// Summary statistics of one cell's simulated costs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub min: u32,
    pub max: u32,
    pub median: u32,
}

impl CostSummary {
    /// Summarize ascending costs. `None` if there are none.
    pub fn from_sorted(costs: &[u32]) -> Option<Self> {
        let n = costs.len();
        if n == 0 {
            return None;
        }
        let mean = costs.iter().map(|&c| c as f64).sum::<f64>() / n as f64;
        let variance = costs
            .iter()
            .map(|&c| (c as f64 - mean).powi(2))
            .sum::<f64>()
            / n as f64;
        Some(Self {
            mean,
            std_dev: variance.sqrt(),
            min: costs[0],
            max: costs[n - 1],
            median: costs[n / 2],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_rounding_half_even() {
        assert_eq!(percent_of(1, 8), 12); // 12.5 -> 12
        assert_eq!(percent_of(3, 8), 38); // 37.5 -> 38
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(2, 3), 67);
        assert_eq!(percent_of(1, 200), 0); // 0.5 -> 0
        assert_eq!(percent_of(3, 200), 2); // 1.5 -> 2
        assert_eq!(percent_of(5, 5), 100);
    }

    #[test]
    fn test_counts_and_running_total() {
        let outcomes = [2, 2, 2, 2, 3, 3, 3, 5, 5, 9];
        let histo = build_histogram(&outcomes);
        assert_eq!(histo.len(), 4);
        assert_eq!(histo.total(), 10);

        let expected = [(2, 4, 40, 40), (3, 3, 30, 70), (5, 2, 20, 90), (9, 1, 10, 100)];
        for (&(cost, count, abs, run), (k, s)) in expected.iter().zip(histo.iter()) {
            assert_eq!(k, cost);
            assert_eq!(s.count, count);
            assert_eq!(s.absolute_percentage, abs);
            assert_eq!(s.running_percentage, run);
        }
    }

    #[test]
    fn test_unsorted_input_iterates_ascending() {
        let histo = build_histogram(&[7, 3, 5, 3, 7, 7]);
        let keys: Vec<u32> = histo.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![3, 5, 7]);
        assert_eq!(histo.get(7).unwrap().running_percentage, 17 + 33 + 50);
    }

    #[test]
    fn test_rounding_not_forced_to_100() {
        // Three thirds: 33 + 33 + 33 = 99.
        let histo = build_histogram(&[1, 2, 3]);
        assert_eq!(histo.get(3).unwrap().running_percentage, 99);
    }

    #[test]
    fn test_empty_input() {
        let histo = build_histogram(&[]);
        assert!(histo.is_empty());
        assert_eq!(histo.total(), 0);
    }

    #[test]
    fn test_from_buckets_rejects_decreasing_running() {
        let mut buckets = BTreeMap::new();
        buckets.insert(
            2,
            Sample {
                count: 5,
                absolute_percentage: 50,
                running_percentage: 50,
            },
        );
        buckets.insert(
            3,
            Sample {
                count: 5,
                absolute_percentage: 50,
                running_percentage: 40,
            },
        );
        assert!(matches!(
            Histogram::from_buckets(buckets),
            Err(TravelError::MalformedHistogram { outcome: 3, .. })
        ));
    }

    #[test]
    fn test_from_buckets_rejects_zero_count() {
        let mut buckets = BTreeMap::new();
        buckets.insert(
            4,
            Sample {
                count: 0,
                absolute_percentage: 0,
                running_percentage: 0,
            },
        );
        assert!(matches!(
            Histogram::from_buckets(buckets),
            Err(TravelError::MalformedHistogram { outcome: 4, .. })
        ));
    }

    #[test]
    fn test_cost_summary() {
        let s = CostSummary::from_sorted(&[2, 2, 3, 5]).unwrap();
        assert_eq!(s.min, 2);
        assert_eq!(s.max, 5);
        assert_eq!(s.median, 3);
        assert!((s.mean - 3.0).abs() < 1e-12);
        assert!((s.std_dev - 1.5f64.sqrt()).abs() < 1e-12);
        assert!(CostSummary::from_sorted(&[]).is_none());
    }
}
