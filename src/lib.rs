//! A resistor combination finder for circuit design.
//!
//! Given a target resistance, a tolerance and a resistor-count range, this
//! crate enumerates combinations of standard series values (E12 by default)
//! wired in series or in parallel, and returns the best matches for each
//! topology ranked by relative error.
//!
//! # Example
//! Approximating 3.1kΩ to within 1% using one or two resistors:
//! ```rust
//! use resistor_combos::{RFinder, SearchRequest};
//!
//! let finder = RFinder::e12();
//! let request = SearchRequest::new(3_100.0, 1.0, 1, 2).unwrap();
//! let result = finder.find(&request).unwrap();
//!
//! for record in &result.series_best {
//!     println!(
//!         "{} = {} ({:.3}% error)",
//!         record.combination,
//!         resistor_combos::format_resistance(record.resistance),
//!         record.relative_error_percent,
//!     );
//! }
//! ```
//! Producing output in the manner of:
//! ```text
//! 390 Ω + 2.7 kΩ = 3.09 kΩ (0.323% error)
//! ```
//! The search is a pure function of its request: no shared mutable state, no
//! randomness, identical requests yield identical results.

use itertools::Itertools;
use lazy_static::lazy_static;

pub mod bands;
pub mod diagram;
pub mod display;
pub mod error;
pub mod parse;
pub mod search;

pub use bands::{color_bands, Band};
pub use diagram::{Diagram, DotDiagram};
pub use display::format_resistance;
pub use error::SearchError;
pub use parse::{parse_resistance, ParseError};
pub use search::{
    Combination, RFinder, ResultRecord, SearchRequest, SearchResult, Topology, DISPLAY_CAP,
    MAX_RESISTORS,
};

/// Decade multipliers spanning the practical range 1Ω to 8.2MΩ.
const POWERS: &[f64] = &[1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6];

/// Standard mantissas have at most two decimals, so snapping the
/// mantissa-times-decade product to a centiohm grid removes float drift
/// (3.9 * 1e2 would otherwise land a hair above 390).
fn snap(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

lazy_static! {
    /// RSeries constant for the E3 standard series
    pub static ref E3: RSeries = RSeries::new(&[1.0, 2.2, 4.7]);
    /// RSeries constant for the E6 standard series
    pub static ref E6: RSeries = RSeries::extend(&E3, &[1.5, 3.3, 6.8]);
    /// RSeries constant for the E12 standard series
    pub static ref E12: RSeries = RSeries::extend(&E6, &[1.2, 1.8, 2.7, 3.9, 5.6, 8.2]);
    /// RSeries constant for the E24 standard series
    pub static ref E24: RSeries = RSeries::extend(
        &E12,
        &[1.1, 1.3, 1.6, 2.0, 2.4, 3.0, 3.6, 4.3, 5.1, 6.2, 7.5, 9.1],
    );
}

/// A series of resistor values, constants are provided for standard resistor
/// array values. Values are held sorted ascending with duplicates removed.
#[derive(Debug)]
pub struct RSeries {
    values: Box<[f64]>,
}

impl RSeries {
    /// Defines a new series of resistor values. Only the decade needs to be
    /// provided, multiples upto Val * 1M will be generated automatically.
    /// # Example
    /// ```
    ///     # use resistor_combos::*;
    ///     let piher = RSeries::new(&[1.0, 2.0, 2.2, 2.5, 4.7, 5.0]);
    /// ```
    pub fn new(series: &[f64]) -> Self {
        RSeries {
            values: series
                .iter()
                .cartesian_product(POWERS.iter())
                .map(|(val, pow)| snap(val * pow))
                .sorted_by(|a, b| a.partial_cmp(b).expect("No NaNs"))
                .dedup()
                .collect::<Vec<f64>>()
                .into_boxed_slice(),
        }
    }

    fn extend(base: &RSeries, add: &[f64]) -> Self {
        RSeries {
            values: base
                .iter()
                .cloned()
                .chain(
                    add.iter()
                        .cartesian_product(POWERS.iter())
                        .map(|(val, pow)| snap(val * pow)),
                )
                .sorted_by(|a, b| a.partial_cmp(b).expect("No NaNs"))
                .dedup()
                .collect::<Vec<f64>>()
                .into_boxed_slice(),
        }
    }

    /// Iterates the values of the series in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &f64> + Clone {
        self.values.iter()
    }

    /// The number of distinct values in the series.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
