// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy for chart construction and rendering.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    /// A series does not supply exactly one value per category.
    #[error("series '{series}' has {actual} values but the category axis has {expected}")]
    ShapeMismatch {
        series: String,
        expected: usize,
        actual: usize,
    },
    #[error("no series supplied; a chart needs at least one series")]
    EmptyInput,
    #[error("category axis has no labels")]
    EmptyCategories,
    #[error("series name '{name}' is used more than once")]
    DuplicateSeries { name: String },
    #[error("invalid y bounds ({min}, {max}); both must be finite with min < max")]
    InvalidBounds { min: f64, max: f64 },
    /// Drawing surface, encoder or display is unavailable.
    #[error("render backend failure: {0}")]
    Backend(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ChartError {
    pub(crate) fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
