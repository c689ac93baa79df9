//! Command-line arguments and text output for the binary.

use std::fmt::Write;
use std::path::PathBuf;

use clap::Parser;

use crate::complexity::ChartBundle;
use crate::plot::types::MAX_DIMENSION;

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "complexity-chart",
    version,
    about = "Print illustrative growth curves for Big-O complexity classes",
    after_help = "Known labels: O(1), O(log n), O(n), O(n log n), O(n²), O(2ⁿ), O(n!).\n\
                  Unknown labels are drawn as O(n)."
)]
pub struct CliArgs {
    /// Print the curves as JSON
    #[arg(long)]
    pub json: bool,

    /// Also render the curves to a PNG file
    #[arg(long, value_name = "PATH")]
    pub png: Option<PathBuf>,

    /// Override the image width
    #[arg(long, value_name = "PX", value_parser = clap::value_parser!(u32).range(1..=MAX_DIMENSION as i64))]
    pub width: Option<u32>,

    /// Override the image height
    #[arg(long, value_name = "PX", value_parser = clap::value_parser!(u32).range(1..=MAX_DIMENSION as i64))]
    pub height: Option<u32>,

    /// Complexity labels to draw (defaults to the configured list)
    #[arg(value_name = "LABEL")]
    pub labels: Vec<String>,
}

/// Render bundles as a fixed-width table: one row per `n`, one column per curve.
/// Elided points print as `-`.
pub fn format_table(bundles: &[ChartBundle]) -> String {
    const CELL: usize = 12;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = write!(out, "{:>4}", "n");
    for bundle in bundles {
        let _ = write!(out, "{:>width$}", bundle.label, width = CELL);
    }
    out.push('\n');

    let rows = bundles.first().map_or(0, |b| b.series.points().len());
    for row in 0..rows {
        let n = bundles[0].series.points()[row].n;
        let _ = write!(out, "{:>4}", n);
        for bundle in bundles {
            let _ = match bundle.series.value_at(n) {
                Some(v) => write!(out, "{:>width$.2}", v, width = CELL),
                None => write!(out, "{:>width$}", "-", width = CELL),
            };
        }
        out.push('\n');
    }
    out
}
