//! Errors from grid construction and configuration.

use thiserror::Error;

/// Errors from noise construction. Sampling itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoiseError {
    #[error("Invalid grid dimensions: {width}x{height} (both must be at least 1)")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Grid of {width}x{height} cells does not fit in memory")]
    GridTooLarge { width: usize, height: usize },

    #[error("Unknown interpolation kernel: {0:?} (expected linear, cubic or quintic)")]
    UnknownInterpolation(String),
}
