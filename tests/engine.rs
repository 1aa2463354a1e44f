//! End-to-end checks on the search engine over the E12 pool.

use approx::assert_relative_eq;
use resistor_combos::{RFinder, SearchError, SearchRequest, SearchResult, DISPLAY_CAP};

fn find(target: f64, tolerance: f64, min: usize, max: usize) -> SearchResult {
    RFinder::e12()
        .find(&SearchRequest::new(target, tolerance, min, max).unwrap())
        .unwrap()
}

#[test]
fn exact_standard_value_scores_zero_error() {
    // 1kΩ is itself an E12 value, so a single resistor is a perfect match
    // under either topology.
    let result = find(1_000.0, 1.0, 1, 2);
    let series = &result.series_best[0];
    let parallel = &result.parallel_best[0];
    assert_eq!(series.resistance, 1_000.0);
    assert_eq!(series.relative_error_percent, 0.0);
    assert_eq!(series.combination.values(), &[1_000.0]);
    assert_eq!(parallel.resistance, 1_000.0);
    assert_eq!(parallel.relative_error_percent, 0.0);
}

#[test]
fn single_count_topologies_agree() {
    // With exactly one resistor both topologies degenerate to the closest
    // single value.
    for target in [765.0, 333.0, 12_345.0, 2.5] {
        let result = find(target, 100.0, 1, 1);
        assert_eq!(
            result.series_best[0].resistance,
            result.parallel_best[0].resistance
        );
        assert_eq!(
            result.series_best[0].combination.values(),
            result.parallel_best[0].combination.values()
        );
    }
}

#[test]
fn unmet_tolerance_returns_closest_found() {
    // No single E12 value is within 0.5% of 333Ω; the engine still reports
    // the closest candidates rather than an empty list. (Always returning
    // the best found, instead of nothing, is a deliberate policy choice.)
    let result = find(333.0, 0.5, 1, 1);
    let best = &result.series_best[0];
    assert_eq!(best.combination.values(), &[330.0]);
    assert_relative_eq!(
        best.relative_error_percent,
        100.0 * 3.0 / 333.0,
        max_relative = 1e-9
    );
    assert!(best.relative_error_percent > 0.5);
}

#[test]
fn target_far_outside_pool_still_answers() {
    let result = find(1e12, 1.0, 1, 1);
    assert_eq!(result.series_best[0].combination.values(), &[8.2e6]);
    assert!(!result.parallel_best.is_empty());
}

#[test]
fn results_are_sorted_within_tolerance_and_capped() {
    let result = find(5_000.0, 25.0, 2, 3);
    for records in [&result.series_best, &result.parallel_best] {
        assert!(!records.is_empty());
        assert!(records.len() <= DISPLAY_CAP);
        for pair in records.windows(2) {
            assert!(pair[0].relative_error_percent <= pair[1].relative_error_percent + 1e-6);
        }
        for record in records.iter() {
            assert!(record.relative_error_percent <= 25.0);
            assert!(record.relative_error_percent >= 0.0);
        }
    }
}

#[test]
fn series_and_parallel_respect_value_bounds() {
    let result = find(5_000.0, 100.0, 2, 3);
    for record in &result.series_best {
        let largest = *record.combination.values().last().unwrap();
        assert!(record.resistance >= largest - 1e-9);
    }
    for record in &result.parallel_best {
        let smallest = record.combination.values()[0];
        assert!(record.resistance <= smallest + 1e-9);
    }
}

#[test]
fn zero_error_only_at_the_target() {
    let result = find(1_000.0, 5.0, 1, 2);
    for record in result.series_best.iter().chain(&result.parallel_best) {
        if record.relative_error_percent == 0.0 {
            assert_eq!(record.resistance, 1_000.0);
        } else {
            assert_ne!(record.resistance, 1_000.0);
        }
    }
}

#[test]
fn identical_requests_yield_identical_results() {
    let request = SearchRequest::new(4_321.0, 2.0, 1, 3).unwrap();
    let finder = RFinder::e12();
    assert_eq!(finder.find(&request).unwrap(), finder.find(&request).unwrap());
}

#[test]
fn count_ceiling_is_enforced_at_find_time() {
    // Directly constructed requests go through the same validation.
    let request = SearchRequest {
        target: 1_000.0,
        tolerance_percent: 1.0,
        min_count: 1,
        max_count: 8,
    };
    assert_eq!(
        RFinder::e12().find(&request),
        Err(SearchError::InvalidCountRange { min: 1, max: 8 })
    );
}

#[test]
fn two_resistor_fallback_when_singles_miss() {
    // 3.1kΩ sits between E12 singles; within 1% only multi-resistor sums
    // qualify, such as 390 + 2.7k = 3.09k.
    let result = find(3_100.0, 1.0, 1, 2);
    let best = &result.series_best[0];
    assert_eq!(best.combination.values(), &[390.0, 2_700.0]);
    assert_relative_eq!(best.resistance, 3_090.0, max_relative = 1e-12);
    assert!(best.relative_error_percent <= 1.0);
}
