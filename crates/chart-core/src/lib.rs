// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the public API for building and rendering category line charts.

pub mod axis;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod legend;
pub mod scale;
pub mod series;
pub mod sketch;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::CategoryAxis;
pub use chart::{shaper_for, Chart, ChartConfig, RenderOptions};
pub use error::{ChartError, Result};
pub use legend::{Corner, LegendLayout};
pub use series::Series;
pub use text::TextShaper;
pub use theme::{Sketch, Theme};
pub use view::ViewState;
