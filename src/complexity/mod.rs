//! Growth-series core: turns a Big-O label into a bounded, comparable curve.
//!
//! Everything in here is pure. `produce` is the entry point a renderer
//! calls; the other modules are the per-step tables and transforms.

pub mod bundle;
pub mod class;
pub mod color;
pub mod formula;
pub mod normalize;
pub mod producer;
pub mod series;
pub mod visibility;

pub use bundle::ChartBundle;
pub use class::ComplexityClass;
pub use color::{color_of, color_of_label, ColorToken};
pub use producer::{produce, produce_class};
pub use series::{GrowthSeries, SamplePoint};

/// Points per series: `n` runs `1..=SAMPLE_COUNT`.
pub const SAMPLE_COUNT: u32 = 10;

/// Display band shared by every class.
pub const DISPLAY_MIN: f64 = 0.0;
pub const DISPLAY_MAX: f64 = 100.0;

/// Target band for formula-driven (normalized) classes.
pub const NORMALIZED_MIN: f64 = 1.0;
pub const NORMALIZED_MAX: f64 = 100.0;
