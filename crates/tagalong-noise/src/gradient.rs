//! Hash-to-gradient contribution functions.
//!
//! The direction sets here are fixed; changing them changes every sampled
//! value and introduces anisotropy.

use crate::vector::{Vec3, Vec4};

/// 1D gradient contribution.
///
/// The low nibble of `hash` picks one of 16 gradients: magnitude
/// `1.0..=8.0` from bits 0-2, negated when bit 3 is set.
#[inline]
pub fn grad1(hash: u8, x: f64) -> f64 {
    let h = hash & 15;
    let grad = 1.0 + (h & 7) as f64;
    if h & 8 != 0 {
        -grad * x
    } else {
        grad * x
    }
}

/// 2D gradient contribution.
///
/// The low three bits of `hash` pick one of the 8 directions
/// `(±1, ±2)` / `(±2, ±1)`: bit 2 swaps the axes, bit 0 negates x and bit 1
/// negates y, then the result is `x + 2y`.
#[inline]
pub fn grad2(hash: u8, x: f64, y: f64) -> f64 {
    let h = hash & 7;
    let (mut u, mut v) = if h & 4 != 0 { (y, x) } else { (x, y) };
    if h & 1 != 0 {
        u = -u;
    }
    if h & 2 != 0 {
        v = -v;
    }
    u + 2.0 * v
}

const N7: f64 = 1.0 / 7.0;

/// `(2/7, 0.5/7 - 1, 1/7)`: scale, offset and cell size of the 7x7 gradient
/// grid used by [`grad3`].
pub const NS: Vec3 = Vec3::new(2.0 * N7, 0.5 * N7 - 1.0, N7);

/// Gradients for the four corners of a 3D simplex.
///
/// `p` holds the permuted hash of each corner (values in `0..289`). Each hash
/// is reduced mod 49 and laid onto a 7x7 grid over `[-1, 1]²`, then folded
/// onto the surface of an octahedron. The returned vectors are **not**
/// normalized; scale them with [`taylor_inv_sqrt`] of their squared length.
pub fn grad3(p: Vec4) -> [Vec3; 4] {
    // mod(p, 7 * 7). Multiplying by (1/7)² rounds 49/49 down to just under
    // 1, so divide exactly instead.
    let j = p.map(|v| v.rem_euclid(49.0));

    let x_ = j.map(|v| (v / 7.0).floor());
    // mod(j, 7)
    let y_ = j.sub(x_.scale(7.0));

    let x = x_.scale(NS.x).add_scalar(NS.y);
    let y = y_.scale(NS.x).add_scalar(NS.y);
    let h = Vec4::splat(1.0).sub(x.abs()).sub(y.abs());

    let b0 = Vec4::new(x.x, x.y, y.x, y.y);
    let b1 = Vec4::new(x.z, x.w, y.z, y.w);

    let s0 = b0.floor().scale(2.0).add_scalar(1.0);
    let s1 = b1.floor().scale(2.0).add_scalar(1.0);
    let sh = Vec4::step(h, Vec4::splat(0.0)).scale(-1.0);

    let a0 = b0
        .xzyw()
        .add(s0.xzyw().mul(Vec4::new(sh.x, sh.x, sh.y, sh.y)));
    let a1 = b1
        .xzyw()
        .add(s1.xzyw().mul(Vec4::new(sh.z, sh.z, sh.w, sh.w)));

    [
        Vec3::new(a0.x, a0.y, h.x),
        Vec3::new(a0.z, a0.w, h.y),
        Vec3::new(a1.x, a1.y, h.z),
        Vec3::new(a1.z, a1.w, h.w),
    ]
}

/// First-order Taylor approximation of `1 / sqrt(r)` around `r = 0.7`.
#[inline]
pub fn taylor_inv_sqrt(r: f64) -> f64 {
    1.79284291400159 - 0.85373472095314 * r
}
