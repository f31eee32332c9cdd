//! Arithmetic mean with compensated summation.
//!
//! # Algorithm
//!
//! - **Sum**: Neumaier compensated summation, O(ε) error independent of n.
//!   Reference: Neumaier (1974), "Rundungsfehleranalyse einiger Verfahren
//!   zur Summation endlicher Summen", *ZAMM* 54(1), pp. 39–51.
//! - **Mean**: sum divided by count. If the plain sum overflows, every
//!   element is pre-divided by the count and the quotients are summed.

use crate::error::{MathError, Result};
use crate::validate;

/// Computes the arithmetic mean of `numbers`.
///
/// Fail-soft form of [`try_average`]: invalid input is logged and the
/// sentinel `f64::NAN` is returned.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Returns
/// - `NaN` if `numbers` is empty or contains any NaN/Inf.
///
/// # Examples
/// ```
/// use u_mathutils::average;
/// assert_eq!(average(&[10.0, 20.0, 30.0]), 20.0);
/// assert!(average(&[]).is_nan());
/// ```
pub fn average(numbers: &[f64]) -> f64 {
    validate::fail_soft("average", try_average(numbers))
}

/// Computes the arithmetic mean of `numbers`.
///
/// # Errors
/// - [`MathError::EmptyInput`] if `numbers` is empty.
/// - [`MathError::NonFinite`] if any element is NaN or infinite.
///
/// # Examples
/// ```
/// use u_mathutils::{try_average, MathError};
/// assert_eq!(try_average(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
/// assert_eq!(try_average(&[]), Err(MathError::EmptyInput));
/// ```
pub fn try_average(numbers: &[f64]) -> Result<f64> {
    let data = validate::non_empty_finite(numbers)?;
    let n = data.len() as f64;

    let sum = neumaier_sum(data.iter().copied());
    let mean = if sum.is_finite() {
        sum / n
    } else {
        neumaier_sum(data.iter().map(|&x| x / n))
    };

    if mean.is_finite() {
        Ok(mean)
    } else {
        Err(MathError::Overflow)
    }
}

/// Neumaier compensated summation.
///
/// An improved variant of Kahan summation that also handles the case
/// where the addend is larger in magnitude than the running sum.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Examples
/// ```
/// use u_mathutils::stats::neumaier_sum;
/// let s = neumaier_sum([1.0, 1e100, 1.0, -1e100]);
/// assert_eq!(s, 2.0);
/// ```
pub fn neumaier_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for x in values {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

// ============================================================================
// Tests
// ============================================================================
