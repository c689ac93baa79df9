pub mod render;
pub mod types;

pub use render::{render_chart, save_png};
pub use types::{PlotOptions, RenderedChart};
