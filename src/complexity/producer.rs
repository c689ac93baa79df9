use crate::complexity::class::ComplexityClass;
use crate::complexity::formula::raw_value;
use crate::complexity::normalize::{normalize, round2};
use crate::complexity::series::GrowthSeries;
use crate::complexity::visibility::cutoff;
use crate::complexity::{DISPLAY_MAX, DISPLAY_MIN};

/// Flat level drawn for O(1).
const CONSTANT_LEVEL: f64 = 20.0;
/// Vertical scale for O(log n): `8 * log2(n + 1)`.
const LOG_SCALE: f64 = 8.0;
/// Vertical scale for O(n): `10 * n`.
const LINEAR_SCALE: f64 = 10.0;
/// Fixed O(n!) values for n = 1, 2, 3.
const FACTORIAL_LEVELS: [f64; 3] = [1.11, 10.0, 100.0];

/// Build the chart series for a raw label. Unknown labels draw as O(n).
pub fn produce(label: &str) -> GrowthSeries {
    produce_class(ComplexityClass::resolve(label))
}

/// Build the chart series for an already-resolved class.
///
/// O(1), O(log n), O(n) and O(n!) use hand-tuned display values; the
/// remaining classes are normalized from their raw formulas onto `[1, 100]`.
pub fn produce_class(class: ComplexityClass) -> GrowthSeries {
    let visible = 1..=cutoff(class);

    let values: Vec<f64> = match class {
        ComplexityClass::Constant => visible.map(|_| round2(CONSTANT_LEVEL)).collect(),
        ComplexityClass::Logarithmic => visible
            .map(|n| round2(clamp_display(LOG_SCALE * (n as f64 + 1.0).log2())))
            .collect(),
        ComplexityClass::Linear => visible
            .map(|n| round2(clamp_display(LINEAR_SCALE * n as f64)))
            .collect(),
        ComplexityClass::Factorial => FACTORIAL_LEVELS
            .iter()
            .take(visible.count())
            .map(|v| round2(*v))
            .collect(),
        ComplexityClass::Linearithmic | ComplexityClass::Quadratic | ComplexityClass::Exponential => {
            let raw: Vec<f64> = visible.map(|n| raw_value(class, n)).collect();
            normalize(&raw)
        }
    };

    GrowthSeries::from_visible(values)
}

fn clamp_display(value: f64) -> f64 {
    value.clamp(DISPLAY_MIN, DISPLAY_MAX)
}
