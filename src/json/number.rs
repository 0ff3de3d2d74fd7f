//! Canonical number formatting.
//!
//! Numbers print the way ECMAScript's `Number.prototype.toString` prints
//! them, which is also what stylesheet authors expect to see: integral
//! values without a fraction, shortest round-trip digits otherwise, and
//! exponent notation only for very small or very large magnitudes.

/// Magnitude from which integral values switch to exponent notation.
const EXPONENT_UPPER: f64 = 1e21;

/// Magnitude below which values switch to exponent notation.
const EXPONENT_LOWER: f64 = 1e-6;

/// Format a finite number in canonical form.
///
/// Returns `None` for NaN and infinities, which have no literal form.
pub fn format_number(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }

    if value == 0.0 {
        // Covers -0.0 as well.
        return Some("0".to_string());
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        return Some(format_exponent(value));
    }

    if value.fract() == 0.0 {
        return Some(format!("{:.0}", value));
    }

    Some(value.to_string())
}

/// Rust prints `1e21` and `1.5e-7`; ECMAScript wants an explicit `+` on
/// positive exponents.
fn format_exponent(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(format_number(0.0).unwrap(), "0");
        assert_eq!(format_number(-0.0).unwrap(), "0");
        assert_eq!(format_number(42.0).unwrap(), "42");
        assert_eq!(format_number(-123.0).unwrap(), "-123");
        assert_eq!(format_number(9007199254740991.0).unwrap(), "9007199254740991");
        assert_eq!(format_number(1e20).unwrap(), "100000000000000000000");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_number(1.5).unwrap(), "1.5");
        assert_eq!(format_number(0.1).unwrap(), "0.1");
        assert_eq!(format_number(-0.25).unwrap(), "-0.25");
        assert_eq!(format_number(0.000001).unwrap(), "0.000001");
    }

    #[test]
    fn test_exponents() {
        assert_eq!(format_number(1e21).unwrap(), "1e+21");
        assert_eq!(format_number(1.5e-7).unwrap(), "1.5e-7");
        assert_eq!(format_number(-2e30).unwrap(), "-2e+30");
    }

    #[test]
    fn test_non_finite() {
        assert!(format_number(f64::NAN).is_none());
        assert!(format_number(f64::INFINITY).is_none());
        assert!(format_number(f64::NEG_INFINITY).is_none());
    }
}
