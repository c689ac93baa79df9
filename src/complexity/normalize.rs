use crate::complexity::{NORMALIZED_MAX, NORMALIZED_MIN};

/// Round to 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rescale raw growth magnitudes onto `[NORMALIZED_MIN, NORMALIZED_MAX]`.
///
/// The smallest raw value maps to 1 and the largest to 100, preserving the
/// curve's shape. A flat (or single-point) input uses a range of 1, so every
/// value maps to 1.
pub fn normalize(raw: &[f64]) -> Vec<f64> {
    if raw.is_empty() {
        return Vec::new();
    }

    let min_raw = raw.iter().copied().fold(f64::INFINITY, f64::min);
    let max_raw = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = match max_raw - min_raw {
        r if r == 0.0 => 1.0,
        r => r,
    };
    let span = NORMALIZED_MAX - NORMALIZED_MIN;

    raw.iter()
        .map(|r| round2((r - min_raw) / range * span + NORMALIZED_MIN))
        .collect()
}
