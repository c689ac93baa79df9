use crate::complexity::class::ComplexityClass;

/// Number of leading points drawn before the curve is considered off-scale.
///
/// The fastest-diverging classes stop earliest so the shared `[0, 100]` band
/// does not flatten the slower ones.
pub fn cutoff(class: ComplexityClass) -> u32 {
    match class {
        ComplexityClass::Constant
        | ComplexityClass::Logarithmic
        | ComplexityClass::Linear
        | ComplexityClass::Linearithmic => 10,
        ComplexityClass::Quadratic => 9,
        ComplexityClass::Exponential => 5,
        ComplexityClass::Factorial => 3,
    }
}

/// Whether the point at `n` is drawn for `class`.
pub fn is_visible(class: ComplexityClass, n: u32) -> bool {
    (1..=cutoff(class)).contains(&n)
}
