//! Interpolation kernels.
//!
//! Each kernel blends `a0` toward `a1` as `(a1 - a0) * k(t) + a0`, so the
//! result is exactly `a0` at `t = 0`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Smooth interpolation (smoothstep), `3t² - 2t³`.
#[inline]
pub fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Quintic interpolation (smootherstep), `6t⁵ - 15t⁴ + 10t³`.
#[inline]
pub fn quintic(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (b - a) * t + a
}

/// Blending kernel used by [`crate::PerlinGrid`] between lattice corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    /// Continuous value only (C0). Cell edges are visible as creases.
    Linear,
    /// Cubic ease, continuous first derivative (C1).
    Cubic,
    /// Quintic smootherstep, continuous second derivative (C2).
    #[default]
    Quintic,
}

impl Interpolation {
    /// All kernels, weakest smoothness first.
    pub const ALL: [Interpolation; 3] = [Self::Linear, Self::Cubic, Self::Quintic];

    /// Blend `a0` and `a1` at `t` in `[0, 1]`.
    #[inline]
    pub fn blend(self, a0: f64, a1: f64, t: f64) -> f64 {
        (a1 - a0) * self.weight(t) + a0
    }

    /// The easing curve `k(t)` on its own.
    #[inline]
    pub fn weight(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::Cubic => smoothstep(t),
            Self::Quintic => quintic(t),
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Cubic => "cubic",
            Self::Quintic => "quintic",
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interpolation {
    type Err = crate::NoiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| crate::NoiseError::UnknownInterpolation(s.to_string()))
    }
}
