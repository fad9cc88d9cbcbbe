//! Simplex noise in one, two and three dimensions.
//!
//! The 1D and 2D samplers follow Stefan Gustavson's table-driven reference
//! (`SimplexNoise1234`). The 3D sampler uses the permutation-polynomial
//! formulation from `webgl-noise`, which needs no lookup table and hashes
//! with [`crate::permutation::permute`].
//!
//! All three are pure and read no state beyond constant tables. Every
//! lattice index is derived with `f64::floor` and folded with a mask, so any
//! finite or infinite input is accepted and NaN propagates to the output.

use crate::gradient::{grad1, grad2, grad3, taylor_inv_sqrt};
use crate::permutation::{hash1, hash2, mod289_vec3, permute_vec4, wrap};
use crate::vector::{Vec3, Vec4};

/// Skewing factor for 2D, `(sqrt(3) - 1) / 2`.
pub const F2: f64 = 0.3660254037844386;
/// Unskewing factor for 2D, `(3 - sqrt(3)) / 6`.
pub const G2: f64 = 0.21132486540518713;
/// Skewing factor for 3D, `1 / 3`.
pub const F3: f64 = 1.0 / 3.0;
/// Unskewing factor for 3D, `1 / 6`.
pub const G3: f64 = 1.0 / 6.0;

/// 1D output scale. The raw peak is `8 * (3/4)^4 = 2.53125`; `0.395` keeps
/// the result inside `[-1, 1]` with a small margin.
const S1: f64 = 0.395;
/// 2D output scale. The raw sum peaks near `0.0221089`, which this maps to
/// about `0.995`; `40 / 0.884343445` would overshoot 1 by ~1.5e-5.
const S2: f64 = 45.0;
/// 3D output scale.
const S3: f64 = 105.0;

/// Radial falloff `(r² - d²)⁴ * contribution`, zero outside the radius.
///
/// Written as `t < 0` rather than `t >= 0` so a NaN offset reaches the sum.
#[inline]
fn attenuate(r2: f64, d2: f64, contribution: impl FnOnce() -> f64) -> f64 {
    let t = r2 - d2;
    if t < 0.0 {
        0.0
    } else {
        let t2 = t * t;
        t2 * t2 * contribution()
    }
}

/// 1D simplex noise, roughly in `[-1, 1]`.
///
/// Returns exactly `0.0` at every integer `x`.
pub fn simplex1d(x: f64) -> f64 {
    let xf = x.floor();
    let i0 = wrap(xf);
    let x0 = x - xf;
    let x1 = x0 - 1.0;

    // Both corners are always within radius 1, so the falloff never clamps.
    let n0 = attenuate(1.0, x0 * x0, || grad1(hash1(i0), x0));
    let n1 = attenuate(1.0, x1 * x1, || grad1(hash1(i0 + 1), x1));

    S1 * (n0 + n1)
}

/// 2D simplex noise in `(-1, 1)`.
pub fn simplex2d(x: f64, y: f64) -> f64 {
    // Skew the input space to determine which simplex cell we're in
    let s = (x + y) * F2;
    let i = (x + s).floor();
    let j = (y + s).floor();

    // Unskew the cell origin back to (x, y) space
    let t = (i + j) * G2;
    let x0 = x - (i - t);
    let y0 = y - (j - t);

    // Pick the triangle: lower (0,0)->(1,0)->(1,1) or upper (0,0)->(0,1)->(1,1)
    let (i1, j1): (usize, usize) = if x0 > y0 { (1, 0) } else { (0, 1) };

    let x1 = x0 - i1 as f64 + G2;
    let y1 = y0 - j1 as f64 + G2;
    let x2 = x0 - 1.0 + 2.0 * G2;
    let y2 = y0 - 1.0 + 2.0 * G2;

    let ii = wrap(i);
    let jj = wrap(j);

    let n0 = attenuate(0.5, x0 * x0 + y0 * y0, || grad2(hash2(ii, jj), x0, y0));
    let n1 = attenuate(0.5, x1 * x1 + y1 * y1, || {
        grad2(hash2(ii + i1, jj + j1), x1, y1)
    });
    let n2 = attenuate(0.5, x2 * x2 + y2 * y2, || {
        grad2(hash2(ii + 1, jj + 1), x2, y2)
    });

    S2 * (n0 + n1 + n2)
}

/// 3D simplex noise. Measured peaks stay within about `±1.05`.
///
/// `(-3.6, 3.6)` remains the documented bound for callers that sized
/// buffers or color ramps against older releases.
pub fn simplex3d(x: f64, y: f64, z: f64) -> f64 {
    let v = Vec3::new(x, y, z);

    // First corner
    let i = v.add_scalar(v.dot(Vec3::splat(F3))).floor();
    let x0 = v.sub(i).add_scalar(i.dot(Vec3::splat(G3)));

    // Rank the offsets to pick one of the six tetrahedra
    let g = Vec3::step(x0.yzx(), x0);
    let l = Vec3::splat(1.0).sub(g);
    let i1 = g.min(l.zxy());
    let i2 = g.max(l.zxy());

    let x1 = x0.sub(i1).add_scalar(G3);
    let x2 = x0.sub(i2).add_scalar(F3);
    let x3 = x0.add_scalar(-0.5);

    // Hash the four corners
    let i = mod289_vec3(i);
    let p = permute_vec4(Vec4::new(0.0, i1.z, i2.z, 1.0).add_scalar(i.z));
    let p = permute_vec4(p.add_scalar(i.y).add(Vec4::new(0.0, i1.y, i2.y, 1.0)));
    let p = permute_vec4(p.add_scalar(i.x).add(Vec4::new(0.0, i1.x, i2.x, 1.0)));

    let offsets = [x0, x1, x2, x3];
    let mut sum = 0.0;
    for (g, d) in grad3(p).into_iter().zip(offsets) {
        let g = g.scale(taylor_inv_sqrt(g.dot(g)));
        sum += attenuate(0.5, d.dot(d), || g.dot(d));
    }

    S3 * sum
}
