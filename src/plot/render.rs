//! Rendering pipeline: chart bundles → PNG bytes via plotters.

use std::path::Path;

use crate::complexity::ChartBundle;
use crate::error::{ChartError, ChartResult};
use crate::plot::types::*;
use image::codecs::png::PngEncoder;
use image::ImageEncoder;
use plotters::prelude::*;

/// Background color (Catppuccin Mocha base).
const BG_COLOR: RGBColor = RGBColor(30, 30, 46);
/// Axis / grid color.
const AXIS_COLOR: RGBColor = RGBColor(88, 91, 112);
/// Horizontal guide lines across the display band.
const GRID_LEVELS: [f64; 5] = [0.0, 25.0, 50.0, 75.0, 100.0];

/// Render one or more growth curves into a single PNG.
///
/// Each curve uses its class color; gaps in a series break the line.
pub fn render_chart(bundles: &[ChartBundle], options: &PlotOptions) -> ChartResult<RenderedChart> {
    let PlotOptions {
        width,
        height,
        stroke_width,
    } = *options;
    let mut buf = vec![0u8; canvas_len(width, height)?];

    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        root.fill(&BG_COLOR)
            .map_err(|e| ChartError::render(format!("fill: {}", e)))?;

        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .build_cartesian_2d(X_MIN..X_MAX, Y_MIN..Y_MAX)
            .map_err(|e| ChartError::render(format!("chart build: {}", e)))?;

        // Guides are drawn as plain lines: the mesh builder wants a font backend.
        for level in GRID_LEVELS {
            let color = if level == Y_MIN { AXIS_COLOR.mix(1.0) } else { AXIS_COLOR.mix(0.3) };
            chart
                .draw_series(LineSeries::new(vec![(X_MIN, level), (X_MAX, level)], color.stroke_width(1)))
                .map_err(|e| ChartError::render(format!("grid: {}", e)))?;
        }

        for bundle in bundles {
            let (r, g, b) = bundle.color.to_rgb();
            let style = RGBColor(r, g, b).stroke_width(stroke_width);

            for segment in split_segments(&bundle.series.xy()) {
                chart
                    .draw_series(LineSeries::new(segment, style))
                    .map_err(|e| ChartError::render(format!("draw {}: {}", bundle.label, e)))?;
            }
        }

        root.present()
            .map_err(|e| ChartError::render(format!("present: {}", e)))?;
    }

    let png_bytes = encode_rgb_to_png(&buf, width, height)?;
    tracing::debug!(width, height, curves = bundles.len(), bytes = png_bytes.len(), "rendered chart");

    Ok(RenderedChart {
        png_bytes,
        width,
        height,
        labels: bundles.iter().map(|b| b.label).collect(),
    })
}

/// Write a rendered chart to disk.
pub fn save_png(rendered: &RenderedChart, path: &Path) -> ChartResult<()> {
    std::fs::write(path, &rendered.png_bytes)
        .map_err(|e| ChartError::io(format!("write {}: {}", path.display(), e)))
}

/// Byte length of an RGB canvas, rejecting empty or oversized dimensions.
fn canvas_len(width: u32, height: u32) -> ChartResult<usize> {
    let in_bounds = |d: u32| (1..=MAX_DIMENSION).contains(&d);
    if !in_bounds(width) || !in_bounds(height) {
        return Err(ChartError::render(format!(
            "invalid canvas size {}x{} (each side must be 1..={})",
            width, height, MAX_DIMENSION
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|px| px.checked_mul(3))
        .ok_or_else(|| ChartError::render(format!("canvas {}x{} is too large", width, height)))
}

/// Split a point series at None (gaps) into continuous segments.
fn split_segments(points: &[Option<(f64, f64)>]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for pt in points {
        match pt {
            Some(p) => current.push(*p),
            None => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Encode a raw RGB pixel buffer to PNG.
fn encode_rgb_to_png(rgb: &[u8], width: u32, height: u32) -> ChartResult<Vec<u8>> {
    let mut png = Vec::new();
    let encoder = PngEncoder::new(&mut png);
    encoder
        .write_image(rgb, width, height, image::ExtendedColorType::Rgb8)
        .map_err(|e| ChartError::render(format!("PNG encode: {}", e)))?;
    Ok(png)
}
