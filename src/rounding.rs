//! Rounding to a fixed number of decimal places.
//!
//! The value is scaled by `10^decimals`, rounded to the nearest integer,
//! and scaled back. Results carry ordinary binary floating-point error:
//! `1.005` is stored as `1.00499999999999989...`, so rounding it to two
//! places gives `1.0`, not `1.01`.
//!
//! # Tie-breaking
//!
//! [`round`] uses [`f64::round`], which resolves ties away from zero.
//! Other rules are available through [`round_with_mode`].

use crate::error::Result;
use crate::validate;

/// Magnitude (2^52) from which every `f64` is already a whole number.
const EXACT_INTEGER_THRESHOLD: f64 = 4_503_599_627_370_496.0;

/// How a value exactly halfway between two integers is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingMode {
    /// `2.5 → 3`, `-2.5 → -3` ([`f64::round`]).
    #[default]
    HalfAwayFromZero,
    /// `2.5 → 3`, `-2.5 → -2`. Ties go toward positive infinity, the way
    /// JavaScript's `Math.round` behaves.
    HalfUp,
    /// `2.5 → 2`, `3.5 → 4` ([`f64::round_ties_even`]).
    HalfEven,
}

impl RoundingMode {
    /// Rounds `x` to a whole number under this mode.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            RoundingMode::HalfAwayFromZero => x.round(),
            RoundingMode::HalfUp => {
                // x - floor(x) is exact below 2^52, so no 0.49999999999999994 surprise.
                let floor = x.floor();
                if x - floor >= 0.5 {
                    floor + 1.0
                } else {
                    floor
                }
            }
            RoundingMode::HalfEven => x.round_ties_even(),
        }
    }
}

/// Rounds `num` to `decimals` decimal places.
///
/// Fail-soft form of [`try_round`]: invalid input is logged and the
/// sentinel `f64::NAN` is returned.
///
/// # Returns
/// - `NaN` if `num` is NaN/Inf or `decimals` is negative.
///
/// # Examples
/// ```
/// use u_mathutils::round;
/// assert_eq!(round(3.14159, 2), 3.14);
/// assert_eq!(round(2.5, 0), 3.0);
/// assert!(round(5.0, -1).is_nan());
/// ```
pub fn round(num: f64, decimals: i32) -> f64 {
    validate::fail_soft("round", try_round(num, decimals))
}

/// Rounds `num` to the nearest whole number; `round(num, 0)`.
///
/// # Examples
/// ```
/// use u_mathutils::round_to_integer;
/// assert_eq!(round_to_integer(2.5), 3.0);
/// assert_eq!(round_to_integer(-0.4), -0.0);
/// ```
pub fn round_to_integer(num: f64) -> f64 {
    round(num, 0)
}

/// Fail-soft rounding with an explicit tie-breaking rule.
///
/// # Examples
/// ```
/// use u_mathutils::{round_with_mode, RoundingMode};
/// assert_eq!(round_with_mode(-2.5, 0, RoundingMode::HalfUp), -2.0);
/// assert_eq!(round_with_mode(0.125, 2, RoundingMode::HalfEven), 0.12);
/// ```
pub fn round_with_mode(num: f64, decimals: i32, mode: RoundingMode) -> f64 {
    validate::fail_soft("round", try_round_with_mode(num, decimals, mode))
}

/// Rounds `num` to `decimals` decimal places, ties away from zero.
///
/// # Errors
/// See [`try_round_with_mode`].
pub fn try_round(num: f64, decimals: i32) -> Result<f64> {
    try_round_with_mode(num, decimals, RoundingMode::default())
}

/// Rounds `num` to `decimals` decimal places under `mode`.
///
/// When `num * 10^decimals` is at least 2^52 in magnitude, or the scale
/// factor overflows, `num` already has no digits beyond the requested
/// precision and is returned unchanged.
///
/// # Errors
/// - [`MathError::NonFinite`](crate::MathError::NonFinite) if `num` is
///   NaN or infinite.
/// - [`MathError::NegativePrecision`](crate::MathError::NegativePrecision)
///   if `decimals < 0`.
///
/// # Examples
/// ```
/// use u_mathutils::{try_round_with_mode, MathError, RoundingMode};
/// let mode = RoundingMode::HalfAwayFromZero;
/// assert_eq!(try_round_with_mode(123.456, 1, mode), Ok(123.5));
/// assert_eq!(
///     try_round_with_mode(5.0, -1, mode),
///     Err(MathError::NegativePrecision(-1)),
/// );
/// ```
pub fn try_round_with_mode(num: f64, decimals: i32, mode: RoundingMode) -> Result<f64> {
    let num = validate::finite("num", num)?;
    let decimals = validate::precision(decimals)?;

    let factor = 10_f64.powi(decimals);
    if !factor.is_finite() {
        return Ok(num);
    }
    let scaled = num * factor;
    if !scaled.is_finite() || scaled.abs() >= EXACT_INTEGER_THRESHOLD {
        return Ok(num);
    }
    Ok(mode.apply(scaled) / factor)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::approx_constant)]
mod tests {
    use super::*;
    use crate::error::MathError;

    #[test]
    fn test_round_two_places() {
        assert_eq!(round(3.14159, 2), 3.14);
    }

    #[test]
    fn test_round_default_precision() {
        assert_eq!(round_to_integer(2.5), 3.0);
        assert_eq!(round_to_integer(2.4), 2.0);
        assert_eq!(round(7.0, 0), 7.0);
    }

    #[test]
    fn test_round_representation_error() {
        // 1.005 is slightly below the tie in binary.
        assert_eq!(round(1.005, 2), 1.0);
        assert_eq!(round(-1.005, 2), -1.0);
    }

    #[test]
    fn test_round_negative_precision() {
        assert!(round(5.0, -1).is_nan());
        assert_eq!(try_round(5.0, -1), Err(MathError::NegativePrecision(-1)));
    }

    #[test]
    fn test_round_non_finite() {
        assert!(round(f64::NAN, 2).is_nan());
        assert!(round(f64::INFINITY, 0).is_nan());
    }

    #[test]
    fn test_round_huge_precision_is_identity() {
        assert_eq!(round(1.234_567_89, 400), 1.234_567_89);
        assert_eq!(round(0.1, 30), 0.1);
    }

    #[test]
    fn test_round_large_magnitude_is_identity() {
        assert_eq!(round(1e300, 2), 1e300);
        assert_eq!(round(9_007_199_254_740_992.0, 0), 9_007_199_254_740_992.0);
    }

    #[test]
    fn test_mode_half_away_from_zero() {
        let m = RoundingMode::HalfAwayFromZero;
        assert_eq!(m.apply(2.5), 3.0);
        assert_eq!(m.apply(-2.5), -3.0);
    }

    #[test]
    fn test_mode_half_up() {
        let m = RoundingMode::HalfUp;
        assert_eq!(m.apply(2.5), 3.0);
        assert_eq!(m.apply(-2.5), -2.0);
        assert_eq!(m.apply(0.49999999999999994), 0.0);
        assert_eq!(m.apply(-0.6), -1.0);
    }

    #[test]
    fn test_mode_half_even() {
        let m = RoundingMode::HalfEven;
        assert_eq!(m.apply(0.5), 0.0);
        assert_eq!(m.apply(1.5), 2.0);
        assert_eq!(m.apply(2.5), 2.0);
        assert_eq!(m.apply(-2.5), -2.0);
    }

    #[test]
    fn test_default_mode() {
        assert_eq!(RoundingMode::default(), RoundingMode::HalfAwayFromZero);
    }

    #[test]
    fn test_round_with_mode_propagates_validation() {
        assert!(round_with_mode(1.0, -2, RoundingMode::HalfEven).is_nan());
    }
}
