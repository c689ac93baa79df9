use serde::Serialize;

use crate::complexity::class::ComplexityClass;
use crate::complexity::color::{color_of, ColorToken};
use crate::complexity::producer::produce_class;
use crate::complexity::series::GrowthSeries;

/// Everything a renderer needs to draw one complexity curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBundle {
    pub class: ComplexityClass,
    /// Canonical display label of the resolved class.
    pub label: &'static str,
    pub color: ColorToken,
    pub series: GrowthSeries,
}

impl ChartBundle {
    pub fn for_class(class: ComplexityClass) -> Self {
        Self {
            class,
            label: class.label(),
            color: color_of(class),
            series: produce_class(class),
        }
    }

    /// Resolve `label` once and build the bundle for the resulting class.
    pub fn for_label(label: &str) -> Self {
        Self::for_class(ComplexityClass::resolve(label))
    }

    /// One bundle per class, cheapest first.
    pub fn all() -> Vec<Self> {
        ComplexityClass::ALL.iter().map(|c| Self::for_class(*c)).collect()
    }
}
