//! Percentage computation between two counts.
//!
//! Every rounded figure the pipeline reports goes through [`round1`]:
//! round-half-to-even (banker's) rounding at one decimal place.

use crate::error::{AnalysisError, AnalysisResult};

/// Round `value` to one decimal place, half-to-even.
///
/// Exact half-way cases land on the even tenth: `0.25 -> 0.2`, `0.75 -> 0.8`.
pub fn round1(value: f64) -> f64 {
    let scaled = value * 10.0;
    let floor = scaled.floor();
    let fraction = scaled - floor;
    let rounded = if fraction > 0.5 {
        floor + 1.0
    } else if fraction < 0.5 {
        floor
    } else if (floor as i64) % 2 == 0 {
        floor
    } else {
        floor + 1.0
    };
    rounded / 10.0
}

/// Compute `numerator / denominator * 100`, rounded via [`round1`].
///
/// `context` names the statistic or group being computed; it is carried into the
/// error when the denominator is zero, since a zero-member group has no defined
/// rate and must abort the run rather than yield NaN or infinity.
pub fn percentage(numerator: u64, denominator: u64, context: &str) -> AnalysisResult<f64> {
    if denominator == 0 {
        return Err(AnalysisError::DivisionByZero {
            context: context.to_string(),
        });
    }
    Ok(round1(numerator as f64 / denominator as f64 * 100.0))
}
