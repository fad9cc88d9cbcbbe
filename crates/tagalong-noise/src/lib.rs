//! Deterministic procedural noise.
//!
//! This crate produces continuous pseudo-random scalar fields from real-valued
//! coordinates. Every sampler is a pure function of its inputs (and, for
//! [`PerlinGrid`], of the seed it was built with), so the same call always
//! returns the same bits on the same platform.
//!
//! # Features
//!
//! - **Lattice gradient noise**: [`PerlinGrid`], a fixed-size 2D grid of seeded
//!   gradients with a selectable [`Interpolation`] kernel
//! - **Simplex noise**: [`simplex1d`], [`simplex2d`], [`simplex3d`]
//! - **Value noise**: [`value2d`]
//! - **Config-driven construction**: [`GridConfig`] (serde)
//!
//! Fractal (octave) sums are left to callers; see
//! [`DeterministicRng::derive_layer_seed`] for deriving per-octave seeds.
//!
//! # Example
//!
//! ```
//! use tagalong_noise::{new_grid, simplex3d, Interpolation};
//!
//! let grid = new_grid(10, 10, Interpolation::Quintic, 42).unwrap();
//! let shade = grid.sample(0.25, 0.75);
//! assert!((-0.5..=1.5).contains(&shade));
//!
//! let n = simplex3d(12.5, 3.0, 5.0);
//! assert!(n.abs() < 3.6);
//! ```

pub mod config;
pub mod error;
pub mod gradient;
pub mod grid;
pub mod interp;
pub mod permutation;
pub mod rng;
pub mod simplex;
pub mod value;
pub mod vector;

pub use config::GridConfig;
pub use error::NoiseError;
pub use grid::{new_grid, PerlinGrid};
pub use interp::Interpolation;
pub use rng::DeterministicRng;
pub use simplex::{simplex1d, simplex2d, simplex3d};
pub use value::value2d;
pub use vector::{Vec2, Vec3, Vec4};

/// Trait for 1D noise generators.
pub trait Noise1D {
    /// Sample the noise at `x`, typically in `[-1, 1]`.
    fn sample(&self, x: f64) -> f64;
}

/// Trait for 2D noise generators.
pub trait Noise2D {
    /// Sample the noise at a given 2D coordinate.
    /// Returns a value typically in the range [-1, 1] or [0, 1] depending on the implementation.
    fn sample(&self, x: f64, y: f64) -> f64;

    /// Sample the noise and normalize to [0, 1] range.
    fn sample_01(&self, x: f64, y: f64) -> f64 {
        (self.sample(x, y) + 1.0) * 0.5
    }
}

/// Trait for 3D noise generators.
pub trait Noise3D {
    /// Sample the noise at a given 3D coordinate, typically in `[-1, 1]`.
    fn sample(&self, x: f64, y: f64, z: f64) -> f64;
}

/// Stateless simplex sampler, for code generic over [`Noise1D`],
/// [`Noise2D`] or [`Noise3D`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Simplex;

impl Noise1D for Simplex {
    fn sample(&self, x: f64) -> f64 {
        simplex1d(x)
    }
}

impl Noise2D for Simplex {
    fn sample(&self, x: f64, y: f64) -> f64 {
        simplex2d(x, y)
    }
}

impl Noise3D for Simplex {
    fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        simplex3d(x, y, z)
    }
}

/// Stateless value-noise sampler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Value;

impl Noise2D for Value {
    fn sample(&self, x: f64, y: f64) -> f64 {
        value2d(x, y)
    }
}
