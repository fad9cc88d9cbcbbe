//! Deterministic RNG wrapper using PCG32.
//!
//! Grid construction draws its gradients from this generator so that a grid
//! built twice from the same seed is identical. Nothing in this crate reads
//! process-wide randomness.

use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg32;

/// Wrapper around PCG32 for deterministic random number generation.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: Pcg32,
}

impl DeterministicRng {
    /// Create a new RNG from a 32-bit seed.
    ///
    /// The seed is expanded to 64 bits by duplicating the bits.
    pub fn new(seed: u32) -> Self {
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            inner: Pcg32::seed_from_u64(seed64),
        }
    }

    /// Derive a seed for a specific layer using BLAKE3.
    ///
    /// Useful when a caller composes several grids (octaves, channels) from
    /// one base seed and wants them uncorrelated.
    pub fn derive_layer_seed(base_seed: u32, layer_index: u32) -> u32 {
        let mut input = [0u8; 8];
        input[..4].copy_from_slice(&base_seed.to_le_bytes());
        input[4..].copy_from_slice(&layer_index.to_le_bytes());
        first_u32(blake3::hash(&input))
    }

    /// Derive a seed for a named variant using BLAKE3.
    pub fn derive_variant_seed(base_seed: u32, variant_id: &str) -> u32 {
        let mut input = Vec::with_capacity(4 + variant_id.len());
        input.extend_from_slice(&base_seed.to_le_bytes());
        input.extend_from_slice(variant_id.as_bytes());
        first_u32(blake3::hash(&input))
    }

    /// Generate a random f64 in the range [0.0, 1.0).
    #[inline]
    pub fn gen_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Generate a random f64 in the range [-1.0, 1.0).
    #[inline]
    pub fn gen_signed_f64(&mut self) -> f64 {
        self.gen_f64() * 2.0 - 1.0
    }
}

impl RngCore for DeterministicRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

fn first_u32(hash: blake3::Hash) -> u32 {
    let b = hash.as_bytes();
    u32::from_le_bytes([b[0], b[1], b[2], b[3]])
}
