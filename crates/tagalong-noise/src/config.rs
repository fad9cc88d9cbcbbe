//! Serializable construction parameters for [`PerlinGrid`].

use serde::{Deserialize, Serialize};

use crate::error::NoiseError;
use crate::grid::PerlinGrid;
use crate::interp::Interpolation;

/// Parameters for building a [`PerlinGrid`].
///
/// Missing fields take their defaults, unknown fields are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Cells along x.
    pub width: usize,
    /// Cells along y.
    pub height: usize,
    /// Blending kernel between corners.
    pub kernel: Interpolation,
    /// Seed for the gradient stream.
    pub seed: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            kernel: Interpolation::Quintic,
            seed: 0,
        }
    }
}

impl GridConfig {
    /// A default-sized quintic grid with the given seed.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Check that both dimensions are non-zero.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.width == 0 || self.height == 0 {
            return Err(NoiseError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Build the grid described by this configuration.
    pub fn build(&self) -> Result<PerlinGrid, NoiseError> {
        self.validate()?;
        PerlinGrid::new(self.width, self.height, self.kernel, self.seed)
    }
}
