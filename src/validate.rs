//! Shared argument checks and the fail-soft conversion.
//!
//! Static types already guarantee "is a number" and "is a sequence"; what
//! remains are the range and shape checks below. Each returns
//! [`MathError`] so the `try_*` functions can use `?`.

use crate::error::{MathError, Result};
use crate::LOG_TARGET;

/// Rejects NaN and ±∞.
pub(crate) fn finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MathError::NonFinite { name, value })
    }
}

/// Rejects non-finite values and values with a fractional part.
pub(crate) fn integral(name: &'static str, value: f64) -> Result<f64> {
    let value = finite(name, value)?;
    if value.fract() == 0.0 {
        Ok(value)
    } else {
        Err(MathError::NonIntegral { name, value })
    }
}

/// Requires at least one element, all of them finite.
pub(crate) fn non_empty_finite(data: &[f64]) -> Result<&[f64]> {
    if data.is_empty() {
        return Err(MathError::EmptyInput);
    }
    match data.iter().find(|x| !x.is_finite()) {
        Some(&value) => Err(MathError::NonFinite {
            name: "numbers",
            value,
        }),
        None => Ok(data),
    }
}

/// Checks an inclusive `[min, max]` pair of whole-number bounds.
pub(crate) fn bounds(min: f64, max: f64) -> Result<(f64, f64)> {
    let min = integral("min", min)?;
    let max = integral("max", max)?;
    if min > max {
        return Err(MathError::InvertedBounds { min, max });
    }
    if !(max - min + 1.0).is_finite() {
        return Err(MathError::RangeTooWide { min, max });
    }
    Ok((min, max))
}

/// Requires a non-negative number of decimal places.
pub(crate) fn precision(decimals: i32) -> Result<i32> {
    if decimals < 0 {
        Err(MathError::NegativePrecision(decimals))
    } else {
        Ok(decimals)
    }
}

/// Turns a typed result into the NaN sentinel, logging the failure.
///
/// Invalid input never panics: callers get `f64::NAN` and the error is
/// reported on [`LOG_TARGET`].
pub(crate) fn fail_soft(op: &'static str, result: Result<f64>) -> f64 {
    match result {
        Ok(v) => v,
        Err(err) => {
            tracing::error!(target: LOG_TARGET, op, "[mathutils] Invalid input: {err}");
            f64::NAN
        }
    }
}
