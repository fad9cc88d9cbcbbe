//! Lattice value noise.
//!
//! Each integer lattice point gets a pseudo-random scalar from a sine hash and
//! the four corners of the containing cell are blended with the cubic ease.
//! Cheaper than gradient noise but with visible grid alignment.

use crate::interp::smoothstep;
use crate::vector::{fract, mix, Vec2};

const HASH_DIR: Vec2 = Vec2::new(127.1, 311.7);
const HASH_SCALE: f64 = 43758.5453123;

/// Pseudo-random value in `[0, 1)` for a lattice point.
#[inline]
fn lattice_value(p: Vec2) -> f64 {
    fract((p.dot(HASH_DIR)).sin() * HASH_SCALE)
}

/// 2D value noise in `[-1, 1]`.
pub fn value2d(x: f64, y: f64) -> f64 {
    let p = Vec2::new(x, y);
    let i = p.floor();
    let f = p.sub(i);
    let u = f.map(smoothstep);

    let a = lattice_value(i);
    let b = lattice_value(i.add(Vec2::new(1.0, 0.0)));
    let c = lattice_value(i.add(Vec2::new(0.0, 1.0)));
    let d = lattice_value(i.add(Vec2::new(1.0, 1.0)));

    let bottom = mix(a, b, u.x);
    let top = mix(c, d, u.x);
    -1.0 + 2.0 * mix(bottom, top, u.y)
}
