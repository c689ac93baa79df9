use crate::complexity::class::ComplexityClass;

/// Raw (unscaled) growth of `class` at input size `n`. Defined for `n >= 1`.
pub fn raw_value(class: ComplexityClass, n: u32) -> f64 {
    let x = n as f64;
    match class {
        ComplexityClass::Constant => 1.0,
        ComplexityClass::Logarithmic => (x + 1.0).log2(),
        ComplexityClass::Linear => x,
        ComplexityClass::Linearithmic => x * (x + 1.0).log2(),
        ComplexityClass::Quadratic => x * x,
        ComplexityClass::Exponential => 2f64.powi(n as i32),
        ComplexityClass::Factorial => factorial(n) as f64,
    }
}

/// Exact `n!`. Only ever called with `n <= 10`.
pub fn factorial(n: u32) -> u64 {
    (2..=n as u64).product()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(3), 6);
        assert_eq!(factorial(10), 3_628_800);
    }

    #[test]
    fn test_raw_values() {
        assert_eq!(raw_value(ComplexityClass::Constant, 7), 1.0);
        assert_eq!(raw_value(ComplexityClass::Logarithmic, 1), 1.0);
        assert_eq!(raw_value(ComplexityClass::Logarithmic, 7), 3.0);
        assert_eq!(raw_value(ComplexityClass::Linear, 4), 4.0);
        assert_eq!(raw_value(ComplexityClass::Linearithmic, 3), 6.0);
        assert_eq!(raw_value(ComplexityClass::Quadratic, 9), 81.0);
        assert_eq!(raw_value(ComplexityClass::Exponential, 5), 32.0);
        assert_eq!(raw_value(ComplexityClass::Factorial, 4), 24.0);
    }

    #[test]
    fn test_raw_values_increase_for_growing_classes() {
        for class in ComplexityClass::ALL {
            if class == ComplexityClass::Constant {
                continue;
            }
            for n in 1..10 {
                assert!(raw_value(class, n + 1) > raw_value(class, n), "{} at n={}", class, n);
            }
        }
    }
}
