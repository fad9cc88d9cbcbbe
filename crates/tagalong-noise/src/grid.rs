//! Lattice gradient (Perlin) noise over a fixed-size grid.
//!
//! A [`PerlinGrid`] owns one random gradient per lattice point of a
//! `width x height` cell grid and maps the unit square onto it.

use rand::Rng;
use tracing::{debug, warn};

use crate::error::NoiseError;
use crate::interp::Interpolation;
use crate::rng::DeterministicRng;
use crate::Noise2D;

/// 2D lattice gradient noise generator.
///
/// Immutable once built; share it freely between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct PerlinGrid {
    width: usize,
    height: usize,
    /// Row-major, `(width + 1) * (height + 1)` entries, row stride `width + 1`.
    gradients: Vec<[f64; 2]>,
    kernel: Interpolation,
}

/// Build a [`PerlinGrid`] from a 32-bit seed. Same as [`PerlinGrid::new`].
pub fn new_grid(
    width: usize,
    height: usize,
    kernel: Interpolation,
    seed: u32,
) -> Result<PerlinGrid, NoiseError> {
    PerlinGrid::new(width, height, kernel, seed)
}

impl PerlinGrid {
    /// Create a grid of `width x height` cells with gradients drawn from a
    /// PCG32 stream seeded with `seed`.
    ///
    /// Fails with [`NoiseError::InvalidDimensions`] if either dimension is 0.
    pub fn new(
        width: usize,
        height: usize,
        kernel: Interpolation,
        seed: u32,
    ) -> Result<Self, NoiseError> {
        let mut rng = DeterministicRng::new(seed);
        Self::build(width, height, kernel, || rng.gen_signed_f64())
    }

    /// Create a grid drawing gradients from a caller-supplied generator.
    ///
    /// Each component is uniform in `[-1, 1)`. Passing a
    /// [`DeterministicRng`] with the same seed gives the same grid as
    /// [`PerlinGrid::new`].
    pub fn from_rng<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        kernel: Interpolation,
        rng: &mut R,
    ) -> Result<Self, NoiseError> {
        Self::build(width, height, kernel, || rng.gen::<f64>() * 2.0 - 1.0)
    }

    fn build(
        width: usize,
        height: usize,
        kernel: Interpolation,
        mut next_component: impl FnMut() -> f64,
    ) -> Result<Self, NoiseError> {
        if width == 0 || height == 0 {
            warn!(width, height, "rejected perlin grid with empty dimension");
            return Err(NoiseError::InvalidDimensions { width, height });
        }

        let len = lattice_len(width, height).ok_or(NoiseError::GridTooLarge { width, height })?;

        let gradients = (0..len)
            .map(|_| {
                let gx = next_component();
                let gy = next_component();
                [gx, gy]
            })
            .collect();

        debug!(width, height, %kernel, "built perlin grid");

        Ok(Self {
            width,
            height,
            gradients,
            kernel,
        })
    }

    /// Number of cells along x.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of cells along y.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Blending kernel chosen at construction.
    pub fn kernel(&self) -> Interpolation {
        self.kernel
    }

    /// Gradient stored at lattice point `(ix, iy)`, if it is on the grid.
    pub fn gradient(&self, ix: usize, iy: usize) -> Option<[f64; 2]> {
        if ix > self.width || iy > self.height {
            return None;
        }
        self.gradients.get(iy * (self.width + 1) + ix).copied()
    }

    /// Sample the field at `(x, y)`, where the unit square `[0, 1)²` covers
    /// the whole grid. The result lies roughly in `[0, 1]`.
    ///
    /// Coordinates outside the unit square wrap onto the stored gradients,
    /// so the call is total and the field stays continuous everywhere.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        // Scale into grid space
        let x = x * self.width as f64;
        let y = y * self.height as f64;

        // Containing cell corners
        let x0 = x.floor();
        let y0 = y.floor();
        let x1 = x0 + 1.0;
        let y1 = y0 + 1.0;

        // Position within the cell
        let sx = x - x0;
        let sy = y - y0;

        let n0 = self.dot_gradient(x0, y0, x, y);
        let n1 = self.dot_gradient(x1, y0, x, y);
        let top = self.kernel.blend(n0, n1, sx);

        let n0 = self.dot_gradient(x0, y1, x, y);
        let n1 = self.dot_gradient(x1, y1, x, y);
        let bottom = self.kernel.blend(n0, n1, sx);

        self.kernel.blend(top, bottom, sy) * 0.5 + 0.5
    }

    /// `dot(gradient(corner), point - corner)` for an integer-valued corner.
    #[inline]
    fn dot_gradient(&self, cx: f64, cy: f64, x: f64, y: f64) -> f64 {
        let [gx, gy] = self.gradients[self.index(cx, cy)];
        (x - cx) * gx + (y - cy) * gy
    }

    /// Storage index of a lattice corner; off-grid corners wrap.
    #[inline]
    fn index(&self, cx: f64, cy: f64) -> usize {
        let stride = self.width + 1;
        // `as i64` saturates, so non-finite corners still land in range.
        let ix = (cx as i64).rem_euclid(stride as i64) as usize;
        let iy = (cy as i64).rem_euclid((self.height + 1) as i64) as usize;
        iy * stride + ix
    }
}

impl Noise2D for PerlinGrid {
    fn sample(&self, x: f64, y: f64) -> f64 {
        PerlinGrid::sample(self, x, y)
    }

    /// Already in `[0, 1]`.
    fn sample_01(&self, x: f64, y: f64) -> f64 {
        PerlinGrid::sample(self, x, y)
    }
}

/// `(width + 1) * (height + 1)`, if the gradient store fits in an allocation.
fn lattice_len(width: usize, height: usize) -> Option<usize> {
    let len = width.checked_add(1)?.checked_mul(height.checked_add(1)?)?;
    let bytes = len.checked_mul(std::mem::size_of::<[f64; 2]>())?;
    (bytes <= isize::MAX as usize).then_some(len)
}
