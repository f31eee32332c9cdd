//! Bounded random integers.
//!
//! [`random_int`] draws from the process-wide thread-local generator and
//! takes no seed. For reproducible results, build a generator with
//! [`create_rng`] and pass it to [`random_int_with`].

use rand::Rng;

use crate::error::Result;
use crate::validate;

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++). The sequence is deterministic for a
/// given seed on the same platform.
///
/// # Examples
/// ```
/// use u_mathutils::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Returns a uniformly distributed integer in `[min, max]`, both inclusive.
///
/// Fail-soft form of [`try_random_int`]: invalid bounds are logged and the
/// sentinel `f64::NAN` is returned.
///
/// # Returns
/// - `NaN` if either bound is not a finite whole number, or `min > max`.
///
/// # Examples
/// ```
/// use u_mathutils::random_int;
/// let v = random_int(1.0, 100.0);
/// assert!((1.0..=100.0).contains(&v));
/// assert_eq!(v.fract(), 0.0);
/// assert_eq!(random_int(5.0, 5.0), 5.0);
/// assert!(random_int(10.0, 1.0).is_nan());
/// ```
pub fn random_int(min: f64, max: f64) -> f64 {
    validate::fail_soft("random_int", try_random_int(min, max))
}

/// Like [`random_int`], drawing from the caller's generator.
///
/// # Examples
/// ```
/// use u_mathutils::random::{create_rng, random_int_with};
/// let mut rng = create_rng(7);
/// let v = random_int_with(-3.0, 3.0, &mut rng);
/// assert!((-3.0..=3.0).contains(&v));
/// ```
pub fn random_int_with<R: Rng>(min: f64, max: f64, rng: &mut R) -> f64 {
    validate::fail_soft("random_int", try_random_int_with(min, max, rng))
}

/// Returns a uniformly distributed integer in `[min, max]` using the
/// thread-local generator.
///
/// # Errors
/// See [`try_random_int_with`].
pub fn try_random_int(min: f64, max: f64) -> Result<f64> {
    try_random_int_with(min, max, &mut rand::rng())
}

/// Returns a uniformly distributed integer in `[min, max]`.
///
/// # Algorithm
/// `floor(u * (max - min + 1)) + min` with `u` uniform in `[0, 1)`.
///
/// # Errors
/// - [`MathError::NonFinite`](crate::MathError::NonFinite) or
///   [`MathError::NonIntegral`](crate::MathError::NonIntegral) if a bound
///   is not a finite whole number.
/// - [`MathError::InvertedBounds`](crate::MathError::InvertedBounds) if
///   `min > max`.
/// - [`MathError::RangeTooWide`](crate::MathError::RangeTooWide) if
///   `max - min + 1` overflows.
///
/// # Examples
/// ```
/// use u_mathutils::random::{create_rng, try_random_int_with};
/// use u_mathutils::MathError;
/// let mut rng = create_rng(42);
/// assert_eq!(try_random_int_with(5.0, 5.0, &mut rng), Ok(5.0));
/// assert_eq!(
///     try_random_int_with(10.0, 1.0, &mut rng),
///     Err(MathError::InvertedBounds { min: 10.0, max: 1.0 }),
/// );
/// ```
pub fn try_random_int_with<R: Rng>(min: f64, max: f64, rng: &mut R) -> Result<f64> {
    let (min, max) = validate::bounds(min, max)?;
    let span = max - min + 1.0;
    let u: f64 = rng.random();
    // u * span can round up to span once span exceeds 2^53.
    Ok(((u * span).floor() + min).clamp(min, max))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MathError;

    #[test]
    fn test_create_rng_deterministic() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);
        let vals1: Vec<f64> = (0..10).map(|_| random_int_with(0.0, 1000.0, &mut rng1)).collect();
        let vals2: Vec<f64> = (0..10).map(|_| random_int_with(0.0, 1000.0, &mut rng2)).collect();
        assert_eq!(vals1, vals2);
    }

    #[test]
    fn test_random_int_in_range() {
        for _ in 0..10_000 {
            let v = random_int(1.0, 10.0);
            assert!((1.0..=10.0).contains(&v), "out of range: {v}");
            assert_eq!(v.fract(), 0.0);
        }
    }

    #[test]
    fn test_random_int_covers_small_range() {
        let mut rng = create_rng(123);
        let mut seen = [false; 6];
        for _ in 0..10_000 {
            let v = random_int_with(1.0, 6.0, &mut rng);
            seen[v as usize - 1] = true;
        }
        assert!(seen.iter().all(|&s| s), "every face should appear");
    }

    #[test]
    fn test_random_int_roughly_uniform() {
        let mut rng = create_rng(42);
        let mut counts = [0u32; 4];
        let n = 10_000;
        for _ in 0..n {
            counts[random_int_with(0.0, 3.0, &mut rng) as usize] += 1;
        }
        for &c in &counts {
            let share = c as f64 / n as f64;
            assert!((share - 0.25).abs() < 0.03, "share {share} too far from 0.25");
        }
    }

    #[test]
    fn test_random_int_degenerate_range() {
        for _ in 0..100 {
            assert_eq!(random_int(5.0, 5.0), 5.0);
        }
    }

    #[test]
    fn test_random_int_negative_range() {
        let mut rng = create_rng(9);
        for _ in 0..1000 {
            let v = random_int_with(-5.0, -1.0, &mut rng);
            assert!((-5.0..=-1.0).contains(&v));
        }
    }

    #[test]
    fn test_random_int_inverted() {
        assert!(random_int(10.0, 1.0).is_nan());
        assert_eq!(
            try_random_int(10.0, 1.0),
            Err(MathError::InvertedBounds {
                min: 10.0,
                max: 1.0
            })
        );
    }

    #[test]
    fn test_random_int_non_finite() {
        assert!(random_int(f64::NAN, 1.0).is_nan());
        assert!(random_int(0.0, f64::INFINITY).is_nan());
    }

    #[test]
    fn test_random_int_fractional_bound() {
        assert_eq!(
            try_random_int(0.5, 3.0),
            Err(MathError::NonIntegral {
                name: "min",
                value: 0.5
            })
        );
    }

    #[test]
    fn test_random_int_huge_range_stays_in_bounds() {
        let mut rng = create_rng(1);
        let (lo, hi) = (-1e300, 1e300);
        for _ in 0..1000 {
            let v = random_int_with(lo, hi, &mut rng);
            assert!(v >= lo && v <= hi);
        }
    }
}
