//! Permutation table and lattice hashing.
//!
//! `PERM` is Ken Perlin's reference permutation of `0..=255`, written twice so
//! that `PERM[a + PERM[b]]` with `a, b <= 255` never leaves the table.

use crate::vector::{Vec3, Vec4};

/// Reference permutation, doubled to 512 entries.
pub const PERM: [u8; 512] = doubled(BASE);

const BASE: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

const fn doubled(base: [u8; 256]) -> [u8; 512] {
    let mut out = [0u8; 512];
    let mut i = 0;
    while i < 256 {
        out[i] = base[i];
        out[i + 256] = base[i];
        i += 1;
    }
    out
}

/// Fold an already-floored lattice coordinate into `0..=255`.
///
/// The coordinate must come from `f64::floor`, never from a truncating cast
/// of the raw input. `as i64` saturates, so infinities and NaN are safe here.
#[inline]
pub fn wrap(lattice: f64) -> usize {
    ((lattice as i64) & 0xFF) as usize
}

/// Hash a single wrapped lattice coordinate.
#[inline]
pub fn hash1(i: usize) -> u8 {
    PERM[i & 0xFF]
}

/// Hash a pair of lattice coordinates.
///
/// Both arguments are masked to `0..=255` first, so any `usize` is accepted.
#[inline]
pub fn hash2(i: usize, j: usize) -> u8 {
    PERM[(i & 0xFF) + PERM[j & 0xFF] as usize]
}

/// `x mod 289` in `[0, 289)`, the ring used by the polynomial hash.
///
/// Exact for integral `x`; `x * (1 / 289)` is not, and can land one below
/// a multiple of 289.
#[inline]
pub fn mod289(x: f64) -> f64 {
    x.rem_euclid(289.0)
}

/// Polynomial permutation `((x * 34 + 10) * x) mod 289`.
#[inline]
pub fn permute(x: f64) -> f64 {
    mod289((x * 34.0 + 10.0) * x)
}

#[inline]
pub fn mod289_vec3(v: Vec3) -> Vec3 {
    v.map(mod289)
}

#[inline]
pub fn permute_vec4(v: Vec4) -> Vec4 {
    v.map(permute)
}
