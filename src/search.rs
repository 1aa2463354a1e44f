//! The combination search engine.
//!
//! Enumerates multisets of standard values for each topology, scores them by
//! relative error against the target, and keeps the best few. Everything here
//! is a pure function of the request; callers may memoize results keyed on
//! the request value if they wish.

use std::cmp::Ordering;

use itertools::Itertools;

use crate::error::SearchError;
use crate::{RSeries, E12};

/// Hard ceiling on resistors per combination, bounding the search space.
pub const MAX_RESISTORS: usize = 4;

/// Maximum records retained per topology.
pub const DISPLAY_CAP: usize = 5;

/// How a combination's resistors are wired together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    Series,
    Parallel,
}

impl Topology {
    /// The resulting resistance of `values` wired in this topology.
    pub fn resistance(self, values: &[f64]) -> f64 {
        match self {
            Topology::Series => values.iter().sum(),
            // A lone resistor "in parallel" is just itself; skipping the
            // reciprocal round-trip keeps the degenerate case exact.
            Topology::Parallel => match values {
                [value] => *value,
                _ => 1.0 / values.iter().map(|r| 1.0 / r).sum::<f64>(),
            },
        }
    }
}

/// Validated parameters for a combination search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchRequest {
    /// Target resistance in ohms, must be positive.
    pub target: f64,
    /// Maximum acceptable relative error, in percent.
    pub tolerance_percent: f64,
    /// Smallest combination size to try, at least 1.
    pub min_count: usize,
    /// Largest combination size to try, at most [`MAX_RESISTORS`].
    pub max_count: usize,
}

impl SearchRequest {
    /// Builds a request, rejecting out-of-range parameters up front.
    pub fn new(
        target: f64,
        tolerance_percent: f64,
        min_count: usize,
        max_count: usize,
    ) -> Result<Self, SearchError> {
        let request = SearchRequest {
            target,
            tolerance_percent,
            min_count,
            max_count,
        };
        request.validate()?;
        Ok(request)
    }

    /// Checks the field invariants; [`RFinder::find`] calls this before
    /// searching so directly-constructed requests are covered too.
    pub fn validate(&self) -> Result<(), SearchError> {
        // Negated comparisons so NaN fails validation as well.
        if !(self.target > 0.0) {
            return Err(SearchError::InvalidTarget(self.target));
        }
        if !(self.tolerance_percent >= 0.0) {
            return Err(SearchError::InvalidTolerance(self.tolerance_percent));
        }
        if self.min_count < 1 || self.max_count < self.min_count || self.max_count > MAX_RESISTORS {
            return Err(SearchError::InvalidCountRange {
                min: self.min_count,
                max: self.max_count,
            });
        }
        Ok(())
    }
}

/// An unordered selection of standard values plus the topology they are
/// wired in. Values are held sorted ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct Combination {
    topology: Topology,
    values: Box<[f64]>,
}

impl Combination {
    /// Builds a combination directly, normalizing values into ascending
    /// order. Mostly useful to feed renderers outside of a search.
    pub fn new(topology: Topology, mut values: Vec<f64>) -> Self {
        values.sort_by(|a, b| a.partial_cmp(b).expect("No NaNs"));
        Combination {
            topology,
            values: values.into_boxed_slice(),
        }
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// The component values in ascending order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Retrieves the value of R{idx}, starting from R1, R2, ..., Rn.
    pub fn r(&self, idx: usize) -> f64 {
        self.values[idx - 1]
    }
}

/// A scored combination.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    pub combination: Combination,
    /// Resistance of the combination under its topology, in ohms.
    pub resistance: f64,
    /// `|resistance - target|` in ohms.
    pub absolute_error: f64,
    /// `absolute_error / target * 100`.
    pub relative_error_percent: f64,
}

impl ResultRecord {
    fn evaluate(topology: Topology, values: Box<[f64]>, target: f64) -> Self {
        let resistance = topology.resistance(&values);
        let absolute_error = (resistance - target).abs();
        ResultRecord {
            combination: Combination { topology, values },
            resistance,
            absolute_error,
            relative_error_percent: absolute_error / target * 100.0,
        }
    }

    /// Relative error quantized to parts per billion, the sort key. Keeps
    /// ordering total without pulling NaN handling into every comparison.
    fn error_key(&self) -> u64 {
        (self.relative_error_percent * 1e9).round() as u64
    }
}

/// Best matches per topology, each sorted ascending by relative error and
/// capped at [`DISPLAY_CAP`] entries.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub series_best: Vec<ResultRecord>,
    pub parallel_best: Vec<ResultRecord>,
}

impl SearchResult {
    /// The overall lowest-error record across both topologies. Series wins
    /// exact ties.
    pub fn best(&self) -> Option<&ResultRecord> {
        match (self.series_best.first(), self.parallel_best.first()) {
            (Some(series), Some(parallel)) => {
                if parallel.relative_error_percent < series.relative_error_percent {
                    Some(parallel)
                } else {
                    Some(series)
                }
            }
            (series, parallel) => series.or(parallel),
        }
    }
}

/// The combination finder, bound to a value series.
#[derive(Debug)]
pub struct RFinder<'a> {
    series: &'a RSeries,
}

impl<'a> RFinder<'a> {
    /// Creates a finder drawing values from the given series.
    pub fn new(series: &'a RSeries) -> Self {
        RFinder { series }
    }

    /// Creates a finder over the E12 series, the usual pool for commercial
    /// 10% resistors.
    pub fn e12() -> RFinder<'static> {
        RFinder::new(&E12)
    }

    /// Returns the number of candidate multisets per topology for the
    /// request's count range. This fairly directly maps to the amount of
    /// time taken by [`find`](RFinder::find).
    pub fn combinations(&self, request: &SearchRequest) -> u128 {
        let n = self.series.len() as u128;
        (request.min_count..=request.max_count)
            .map(|k| binomial(n + k as u128 - 1, k as u128))
            .sum()
    }

    /// Runs the search, returning the best matches for each topology.
    ///
    /// For every count in the request's range, all
    /// combinations-with-repetition from the series are evaluated under both
    /// topologies, then ranked ascending by relative error with ties broken
    /// by fewer resistors and then by lexicographically smaller values.
    /// Entries beyond the tolerance are dropped unless nothing met it, in
    /// which case the closest matches found are returned instead, so a
    /// caller always has something to report.
    pub fn find(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
        request.validate()?;
        Ok(SearchResult {
            series_best: self.search_topology(Topology::Series, request),
            parallel_best: self.search_topology(Topology::Parallel, request),
        })
    }

    fn search_topology(&self, topology: Topology, request: &SearchRequest) -> Vec<ResultRecord> {
        let mut records: Vec<ResultRecord> = (request.min_count..=request.max_count)
            .flat_map(|k| self.series.iter().cloned().combinations_with_replacement(k))
            .map(|values| ResultRecord::evaluate(topology, values.into_boxed_slice(), request.target))
            .collect();
        records.sort_by(|a, b| {
            a.error_key()
                .cmp(&b.error_key())
                .then_with(|| a.combination.len().cmp(&b.combination.len()))
                .then_with(|| cmp_values(a.combination.values(), b.combination.values()))
        });
        if records
            .iter()
            .any(|r| r.relative_error_percent <= request.tolerance_percent)
        {
            records.retain(|r| r.relative_error_percent <= request.tolerance_percent);
        }
        records.truncate(DISPLAY_CAP);
        records
    }
}

fn cmp_values(a: &[f64], b: &[f64]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        match x.partial_cmp(y).expect("No NaNs") {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

fn binomial(n: u128, k: u128) -> u128 {
    // Multiply-then-divide at each step keeps intermediates exact.
    (1..=k).fold(1u128, |acc, i| acc * (n - k + i) / i)
}
