//! Integration tests: configuration, generic samplers, layered seeds and
//! concurrent sampling.

use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;
use tagalong_noise::{
    new_grid, simplex1d, simplex2d, simplex3d, value2d, DeterministicRng, GridConfig,
    Interpolation, Noise1D, Noise2D, Noise3D, NoiseError, PerlinGrid, Simplex, Value,
};

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn test_config_from_json() {
    let config: GridConfig =
        serde_json::from_str(r#"{"width": 4, "height": 6, "kernel": "cubic", "seed": 7}"#)
            .unwrap();
    assert_eq!(
        config,
        GridConfig {
            width: 4,
            height: 6,
            kernel: Interpolation::Cubic,
            seed: 7,
        }
    );

    let grid = config.build().unwrap();
    assert_eq!(grid.width(), 4);
    assert_eq!(grid.height(), 6);
    assert_eq!(grid.kernel(), Interpolation::Cubic);
}

#[test]
fn test_config_missing_fields_use_defaults() {
    let config: GridConfig = serde_json::from_str(r#"{"seed": 3}"#).unwrap();
    assert_eq!(config, GridConfig::with_seed(3));
}

#[test]
fn test_config_rejects_unknown_fields() {
    let result: Result<GridConfig, _> = serde_json::from_str(r#"{"octaves": 4}"#);
    assert!(result.is_err());
}

#[test]
fn test_config_rejects_unknown_kernel() {
    let result: Result<GridConfig, _> = serde_json::from_str(r#"{"kernel": "hermite"}"#);
    assert!(result.is_err());
}

#[test]
fn test_config_serializes_kernel_in_snake_case() {
    let json = serde_json::to_value(GridConfig::default()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"width": 10, "height": 10, "kernel": "quintic", "seed": 0})
    );
}

#[test]
fn test_config_zero_dimension_fails_to_build() {
    let config: GridConfig = serde_json::from_str(r#"{"width": 0}"#).unwrap();
    assert_eq!(
        config.build().unwrap_err(),
        NoiseError::InvalidDimensions {
            width: 0,
            height: 10
        }
    );
}

// ============================================================================
// Generic Sampler Tests
// ============================================================================

fn mean_2d<N: Noise2D + ?Sized>(noise: &N) -> f64 {
    let mut total = 0.0;
    for i in 0..64 {
        for j in 0..64 {
            total += noise.sample_01(i as f64 / 64.0 * 7.3, j as f64 / 64.0 * 7.3);
        }
    }
    total / (64.0 * 64.0)
}

#[test]
fn test_trait_objects_match_free_functions() {
    assert_eq!(Noise1D::sample(&Simplex, 1.3), simplex1d(1.3));
    assert_eq!(Noise2D::sample(&Simplex, 1.3, -2.1), simplex2d(1.3, -2.1));
    assert_eq!(Noise3D::sample(&Simplex, 1.3, -2.1, 0.4), simplex3d(1.3, -2.1, 0.4));
    assert_eq!(Noise2D::sample(&Value, 1.3, -2.1), value2d(1.3, -2.1));

    let grid = new_grid(3, 3, Interpolation::Quintic, 5).unwrap();
    assert_eq!(Noise2D::sample(&grid, 0.4, 0.6), grid.sample(0.4, 0.6));
}

#[test]
fn test_sample_01_is_normalized() {
    let grid = new_grid(6, 6, Interpolation::Quintic, 21).unwrap();
    for noise in [&Simplex as &dyn Noise2D, &Value, &grid] {
        let m = mean_2d(noise);
        assert!((0.0..=1.0).contains(&m), "mean {m}");
    }
    // The grid is already in [0, 1]; sample_01 must not remap it again.
    assert_eq!(grid.sample_01(0.3, 0.3), grid.sample(0.3, 0.3));
}

// ============================================================================
// Layered Seeds
// ============================================================================

#[test]
fn test_layered_grids_are_independent() {
    let base = 42;
    let grids: Vec<PerlinGrid> = (0..4)
        .map(|layer| {
            let seed = DeterministicRng::derive_layer_seed(base, layer);
            new_grid(8, 8, Interpolation::Quintic, seed).unwrap()
        })
        .collect();

    for (a, b) in grids.iter().zip(grids.iter().skip(1)) {
        assert!(a != b, "layers should not share gradients");
    }

    // Rebuilding from the same base seed gives the same stack.
    let again = new_grid(
        8,
        8,
        Interpolation::Quintic,
        DeterministicRng::derive_layer_seed(base, 2),
    )
    .unwrap();
    assert_eq!(again, grids[2]);
}

#[test]
fn test_caller_composed_octaves() {
    let grid = new_grid(4, 4, Interpolation::Quintic, 8).unwrap();
    let fbm = |x: f64, y: f64| {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut norm = 0.0;
        for _ in 0..4 {
            total += amplitude * simplex2d(x * frequency, y * frequency);
            total += amplitude * (grid.sample((x * frequency).fract(), (y * frequency).fract()) - 0.5);
            norm += 2.0 * amplitude;
            amplitude *= 0.5;
            frequency *= 2.0;
        }
        total / norm
    };
    assert_eq!(fbm(0.3, 0.7).to_bits(), fbm(0.3, 0.7).to_bits());
}

// ============================================================================
// Concurrency Tests
// ============================================================================

#[test]
fn test_concurrent_sampling_matches_serial() {
    let grid = Arc::new(new_grid(12, 12, Interpolation::Quintic, 4242).unwrap());
    let coords: Vec<(f64, f64)> = (0..400)
        .map(|i| ((i as f64 * 0.0317).fract(), (i as f64 * 0.0571).fract()))
        .collect();
    let serial: Vec<u64> = coords
        .iter()
        .map(|&(x, y)| grid.sample(x, y).to_bits() ^ simplex3d(x, y, 1.5).to_bits())
        .collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let grid = Arc::clone(&grid);
            let coords = coords.clone();
            thread::spawn(move || {
                coords
                    .iter()
                    .map(|&(x, y)| grid.sample(x, y).to_bits() ^ simplex3d(x, y, 1.5).to_bits())
                    .collect::<Vec<u64>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), serial);
    }
}

#[test]
fn test_scoped_threads_borrow_grid() {
    let grid = new_grid(5, 5, Interpolation::Linear, 1).unwrap();
    let expected = grid.sample(0.123, 0.456);
    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| assert_eq!(grid.sample(0.123, 0.456), expected));
        }
    });
}
