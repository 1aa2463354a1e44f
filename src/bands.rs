//! Standard color-band lookup for resistor bodies.
//!
//! A static mapping from a two-significant-figure value to its digit, digit
//! and multiplier bands. Independent of the search engine.

use std::fmt;

/// A resistor band color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Grey,
    White,
    Gold,
    Silver,
}

impl Band {
    fn digit(digit: u32) -> Band {
        match digit {
            0 => Band::Black,
            1 => Band::Brown,
            2 => Band::Red,
            3 => Band::Orange,
            4 => Band::Yellow,
            5 => Band::Green,
            6 => Band::Blue,
            7 => Band::Violet,
            8 => Band::Grey,
            _ => Band::White,
        }
    }

    fn multiplier(exponent: i32) -> Option<Band> {
        match exponent {
            -2 => Some(Band::Silver),
            -1 => Some(Band::Gold),
            0..=9 => Some(Band::digit(exponent as u32)),
            _ => None,
        }
    }

    /// Lower-case color name.
    pub fn name(self) -> &'static str {
        match self {
            Band::Black => "black",
            Band::Brown => "brown",
            Band::Red => "red",
            Band::Orange => "orange",
            Band::Yellow => "yellow",
            Band::Green => "green",
            Band::Blue => "blue",
            Band::Violet => "violet",
            Band::Grey => "grey",
            Band::White => "white",
            Band::Gold => "gold",
            Band::Silver => "silver",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The digit, digit and multiplier bands for a resistance value.
///
/// Returns `None` for non-positive values and for multipliers outside the
/// standard color range (below 10mΩ or above 99GΩ).
pub fn color_bands(ohms: f64) -> Option<[Band; 3]> {
    if !ohms.is_finite() || ohms <= 0.0 {
        return None;
    }
    let mut exponent = ohms.log10().floor() as i32;
    // First two significant figures as a number 10..=99.
    let mut leading = (ohms / 10f64.powi(exponent - 1)).round() as i64;
    if leading >= 100 {
        leading /= 10;
        exponent += 1;
    }
    let first = Band::digit((leading / 10) as u32);
    let second = Band::digit((leading % 10) as u32);
    Some([first, second, Band::multiplier(exponent - 1)?])
}
