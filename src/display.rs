//! Human-readable formatting of resistance values and combinations.

use std::fmt;

use itertools::Itertools;

use crate::search::{Combination, Topology};

/// Formats a resistance with its natural magnitude unit, up to three
/// decimals with trailing zeros trimmed: `330 Ω`, `4.7 kΩ`, `1.5 MΩ`.
pub fn format_resistance(ohms: f64) -> String {
    if ohms >= 1e6 {
        format!("{} MΩ", trim_decimal(ohms / 1e6))
    } else if ohms >= 1e3 {
        format!("{} kΩ", trim_decimal(ohms / 1e3))
    } else {
        format!("{} Ω", trim_decimal(ohms))
    }
}

fn trim_decimal(value: f64) -> String {
    let s = format!("{value:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

impl fmt::Display for Combination {
    /// `4.7 kΩ + 220 Ω` for series, `10 kΩ || 10 kΩ` for parallel.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = match self.topology() {
            Topology::Series => " + ",
            Topology::Parallel => " || ",
        };
        write!(
            f,
            "{}",
            self.values().iter().map(|v| format_resistance(*v)).join(sep)
        )
    }
}
