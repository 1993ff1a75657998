//! Threshold classification of segment metrics into line weights.
//!
//! Thresholds split the metric axis into half-open buckets:
//! - value <= t[0]: weights[0]
//! - t[i] < value <= t[i+1]: weights[i+1]
//! - value > t[last]: weights[last]

use crate::error::HideoutError;

/// Map `value` to the weight of the highest threshold it strictly exceeds.
///
/// Starts from `weights[0]` and promotes to `weights[i + 1]` for every
/// threshold `i` below `value`. Callers must supply
/// `weights.len() == thresholds.len() + 1` with ascending thresholds (see
/// [`validate_weight_table`]); with a mismatched table the result is
/// unspecified, but the function never reads past either slice.
///
/// # Examples
/// ```
/// use track_map_style::style::classify;
///
/// assert_eq!(classify(5.0, &[2.0, 8.0], &[1.0, 3.0, 5.0]), 3.0);
/// assert_eq!(classify(10.0, &[2.0, 8.0], &[1.0, 3.0, 5.0]), 5.0);
/// ```
pub fn classify(value: f64, thresholds: &[f64], weights: &[f64]) -> f64 {
    let mut selected = weights.first().copied().unwrap_or_default();
    for (threshold, weight) in thresholds.iter().zip(weights.iter().skip(1)) {
        if value > *threshold {
            selected = *weight;
        }
    }
    selected
}

/// Check the pairing and ordering contract `classify` relies on.
pub fn validate_weight_table(thresholds: &[f64], weights: &[f64]) -> Result<(), HideoutError> {
    if weights.len() != thresholds.len() + 1 {
        return Err(HideoutError::WeightTableMismatch {
            thresholds: thresholds.len(),
            weights: weights.len(),
        });
    }

    if let Some(index) = thresholds.iter().position(|t| !t.is_finite()) {
        return Err(HideoutError::NonFiniteThreshold { index });
    }

    if let Some(pos) = thresholds.windows(2).position(|pair| pair[1] < pair[0]) {
        return Err(HideoutError::UnsortedThresholds { index: pos + 1 });
    }

    Ok(())
}
