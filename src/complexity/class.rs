use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the seven asymptotic growth classes the chart knows how to draw.
///
/// Variants are declared in ascending order of growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComplexityClass {
    #[serde(rename = "O(1)")]
    Constant,
    #[serde(rename = "O(log n)")]
    Logarithmic,
    #[serde(rename = "O(n)")]
    Linear,
    #[serde(rename = "O(n log n)")]
    Linearithmic,
    #[serde(rename = "O(n²)")]
    Quadratic,
    #[serde(rename = "O(2ⁿ)")]
    Exponential,
    #[serde(rename = "O(n!)")]
    Factorial,
}

impl ComplexityClass {
    pub const ALL: [ComplexityClass; 7] = [
        ComplexityClass::Constant,
        ComplexityClass::Logarithmic,
        ComplexityClass::Linear,
        ComplexityClass::Linearithmic,
        ComplexityClass::Quadratic,
        ComplexityClass::Exponential,
        ComplexityClass::Factorial,
    ];

    /// Class used for any label that is not one of the known display strings.
    pub const FALLBACK: ComplexityClass = ComplexityClass::Linear;

    /// Big-O display string, e.g. `"O(n log n)"`.
    pub fn label(self) -> &'static str {
        match self {
            ComplexityClass::Constant => "O(1)",
            ComplexityClass::Logarithmic => "O(log n)",
            ComplexityClass::Linear => "O(n)",
            ComplexityClass::Linearithmic => "O(n log n)",
            ComplexityClass::Quadratic => "O(n²)",
            ComplexityClass::Exponential => "O(2ⁿ)",
            ComplexityClass::Factorial => "O(n!)",
        }
    }

    /// Strict lookup: exact match against the display strings only.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|class| class.label() == label)
    }

    /// Total lookup. Unknown labels fall back to [`ComplexityClass::FALLBACK`].
    pub fn resolve(label: &str) -> Self {
        Self::from_label(label).unwrap_or(Self::FALLBACK)
    }
}

impl fmt::Display for ComplexityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
