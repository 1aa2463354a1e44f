//! Parsing human-entered resistance strings.

use thiserror::Error;

/// Rejections from [`parse_resistance`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty resistance string")]
    Empty,

    #[error("unrecognised resistance {0:?}")]
    Invalid(String),

    #[error("resistance must be greater than zero: {0:?}")]
    NonPositive(String),
}

/// Parses strings like `"330"`, `"4.7k"`, `"10K"`, `"2.2M"` or the infix
/// form `"4k7"` into ohms. An optional trailing `Ω`/`ohm`/`ohms` unit is
/// accepted. `m` and `M` both mean mega, following resistor labelling
/// convention; milliohms are not supported.
pub fn parse_resistance(input: &str) -> Result<f64, ParseError> {
    let s = strip_unit(input.trim());
    if s.is_empty() {
        return Err(ParseError::Empty);
    }
    let invalid = || ParseError::Invalid(input.to_string());

    let value = match s.find(|c: char| matches!(c, 'r' | 'R' | 'k' | 'K' | 'm' | 'M')) {
        Some(idx) => {
            let multiplier = match s.as_bytes()[idx] {
                b'r' | b'R' => 1.0,
                b'k' | b'K' => 1e3,
                _ => 1e6,
            };
            let whole = s[..idx].trim_end();
            let frac = &s[idx + 1..];
            if whole.is_empty() {
                return Err(invalid());
            }
            let magnitude: f64 = if frac.is_empty() {
                whole.parse().map_err(|_| invalid())?
            } else {
                // Infix notation, the suffix doubles as the decimal point.
                if !whole.bytes().all(|b| b.is_ascii_digit())
                    || !frac.bytes().all(|b| b.is_ascii_digit())
                {
                    return Err(invalid());
                }
                format!("{whole}.{frac}").parse().map_err(|_| invalid())?
            };
            magnitude * multiplier
        }
        None => s.parse().map_err(|_| invalid())?,
    };

    if !value.is_finite() {
        return Err(invalid());
    }
    if value <= 0.0 {
        return Err(ParseError::NonPositive(input.to_string()));
    }
    Ok(value)
}

fn strip_unit(s: &str) -> &str {
    for unit in ["ohms", "ohm", "Ω"] {
        if let Some(head) = strip_suffix_ignore_case(s, unit) {
            return head.trim_end();
        }
    }
    s
}

fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    if s.get(split..)?.eq_ignore_ascii_case(suffix) {
        s.get(..split)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers() {
        assert_eq!(parse_resistance("330"), Ok(330.0));
        assert_eq!(parse_resistance("  47.5 "), Ok(47.5));
    }

    #[test]
    fn magnitude_suffixes() {
        assert_eq!(parse_resistance("10k"), Ok(10_000.0));
        assert_eq!(parse_resistance("10K"), Ok(10_000.0));
        assert_eq!(parse_resistance("4.7M"), Ok(4_700_000.0));
        assert_eq!(parse_resistance("4.7m"), Ok(4_700_000.0));
        assert_eq!(parse_resistance("330R"), Ok(330.0));
    }

    #[test]
    fn infix_notation() {
        assert_eq!(parse_resistance("4k7"), Ok(4_700.0));
        assert_eq!(parse_resistance("1M5"), Ok(1_500_000.0));
        assert_eq!(parse_resistance("0R5"), Ok(0.5));
    }

    #[test]
    fn units_are_stripped() {
        assert_eq!(parse_resistance("330Ω"), Ok(330.0));
        assert_eq!(parse_resistance("330 ohm"), Ok(330.0));
        assert_eq!(parse_resistance("4.7k Ohms"), Ok(4_700.0));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_resistance(""), Err(ParseError::Empty));
        assert_eq!(parse_resistance("   "), Err(ParseError::Empty));
        assert_eq!(
            parse_resistance("k7"),
            Err(ParseError::Invalid("k7".to_string()))
        );
        assert_eq!(
            parse_resistance("4.7k2"),
            Err(ParseError::Invalid("4.7k2".to_string()))
        );
        assert!(matches!(
            parse_resistance("resistor"),
            Err(ParseError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_non_positive() {
        assert_eq!(
            parse_resistance("-330"),
            Err(ParseError::NonPositive("-330".to_string()))
        );
        assert_eq!(
            parse_resistance("0"),
            Err(ParseError::NonPositive("0".to_string()))
        );
    }
}
