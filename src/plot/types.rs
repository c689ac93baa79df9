//! Plot options and rendered output types.

use crate::complexity::{DISPLAY_MAX, DISPLAY_MIN, SAMPLE_COUNT};

/// Default output image dimensions (pixels).
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 500;
/// Largest accepted width or height (pixels).
pub const MAX_DIMENSION: u32 = 8192;
/// Default line thickness (pixels).
pub const DEFAULT_STROKE_WIDTH: u32 = 3;

/// x axis covers the sampled input sizes.
pub const X_MIN: f64 = 1.0;
pub const X_MAX: f64 = SAMPLE_COUNT as f64;
/// y axis is pinned to the shared display band, never auto-scaled.
pub const Y_MIN: f64 = DISPLAY_MIN;
pub const Y_MAX: f64 = DISPLAY_MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotOptions {
    pub width: u32,
    pub height: u32,
    pub stroke_width: u32,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

/// A rendered chart image.
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub png_bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Labels of the curves drawn, in draw order.
    pub labels: Vec<&'static str>,
}
