//! Illustrative growth curves for asymptotic complexity classes.
//!
//! [`complexity::produce`] turns a Big-O label such as `"O(n log n)"` into a
//! fixed ten-point series on a shared `[0, 100]` scale, eliding points once a
//! curve would run off that scale. The [`plot`] module draws those series to
//! PNG; [`persistence`] and [`cli`] back the `complexity-chart` binary.

pub mod cli;
pub mod complexity;
pub mod error;
pub mod persistence;
pub mod plot;

pub use complexity::{
    color_of, color_of_label, produce, produce_class, ChartBundle, ColorToken, ComplexityClass, GrowthSeries,
    SamplePoint,
};
pub use error::{ChartError, ChartResult, ErrorKind};
