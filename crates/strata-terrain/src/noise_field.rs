//! Two-pass fractal noise synthesis: fill with raw octave sums, then
//! normalize in place against the observed extrema.

use glam::DVec2;
use noise::{NoiseFn, Perlin};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{GenerationConfig, GenerationError};
use crate::field::{HeightField, RawExtrema, inverse_lerp};

/// Half-open range the per-octave sample offsets are drawn from.
const OCTAVE_OFFSET_RANGE: std::ops::Range<i32> = -100_000..100_000;

/// The 2D noise function uses a fixed permutation table; all seed dependence
/// flows through the octave offsets.
const PERMUTATION_SEED: u32 = 0;

/// Generate a normalized height field and the raw extrema it was scaled from.
///
/// Deterministic: identical configurations (including the seed) produce
/// bit-identical output. The seed drives a `ChaCha8Rng` that draws one wide
/// sample-space offset per octave, decorrelating octaves while staying fully
/// reproducible. Sample coordinates are centered on the grid midpoint before
/// scaling so the feature scale is independent of grid size.
///
/// # Errors
///
/// Returns a [`GenerationError`] for zero dimensions, a non-positive noise
/// scale, or a zero octave count, before anything is allocated.
pub fn generate(config: &GenerationConfig) -> Result<(HeightField, RawExtrema), GenerationError> {
    config.validate()?;

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let octave_offsets: Vec<DVec2> = (0..config.octaves)
        .map(|_| {
            let x = rng.random_range(OCTAVE_OFFSET_RANGE) as f64 + config.offset.x;
            let y = rng.random_range(OCTAVE_OFFSET_RANGE) as f64 + config.offset.y;
            DVec2::new(x, y)
        })
        .collect();

    let perlin = Perlin::new(PERMUTATION_SEED);
    let half_width = config.width as f64 / 2.0;
    let half_depth = config.depth as f64 / 2.0;

    let mut values = Vec::with_capacity(config.vertex_count());
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    // Fill pass over the full inclusive vertex grid. The min/max fold must
    // complete over every sample before normalization starts.
    for z in 0..=config.depth {
        for x in 0..=config.width {
            let mut amplitude = 1.0;
            let mut frequency = 1.0;
            let mut sum = 0.0;

            for offset in &octave_offsets {
                let sample_x =
                    (x as f64 - half_width) / config.noise_scale * frequency + offset.x;
                let sample_z =
                    (z as f64 - half_depth) / config.noise_scale * frequency + offset.y;

                // Perlin output is already in [-1, 1].
                sum += perlin.get([sample_x, sample_z]) * amplitude;

                amplitude *= config.persistence;
                frequency *= config.lacunarity;
            }

            min = min.min(sum);
            max = max.max(sum);
            values.push(sum);
        }
    }

    let extrema = RawExtrema { min, max };

    // Normalize pass: same rectangular iteration, in place.
    for value in &mut values {
        *value = inverse_lerp(extrema.min, extrema.max, *value);
    }

    Ok((HeightField::new(config.width, config.depth, values), extrema))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> GenerationConfig {
        GenerationConfig {
            width: 16,
            depth: 12,
            seed: 42,
            ..Default::default()
        }
    }

    #[test]
    fn test_field_length_matches_vertex_grid() {
        let (field, _) = generate(&small_config()).unwrap();
        assert_eq!(field.len(), 17 * 13);
    }

    #[test]
    fn test_values_normalized_to_unit_range() {
        let (field, _) = generate(&small_config()).unwrap();
        for &v in field.values() {
            assert!((0.0..=1.0).contains(&v), "value {v} outside [0, 1]");
        }
    }

    #[test]
    fn test_extrema_samples_map_to_unit_endpoints() {
        // The raw min and max were both observed during the fill pass, so the
        // normalized field must contain an exact 0.0 and an exact 1.0.
        let (field, _) = generate(&small_config()).unwrap();
        assert!(field.values().iter().any(|&v| v == 0.0));
        assert!(field.values().iter().any(|&v| v == 1.0));
    }

    #[test]
    fn test_extrema_ordered() {
        let (_, extrema) = generate(&small_config()).unwrap();
        assert!(extrema.min < extrema.max);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let config = small_config();
        let (field_a, extrema_a) = generate(&config).unwrap();
        let (field_b, extrema_b) = generate(&config).unwrap();
        assert_eq!(field_a, field_b, "same config must produce identical fields");
        assert_eq!(extrema_a, extrema_b);
    }

    #[test]
    fn test_generation_deterministic_across_threads() {
        let config = small_config();
        let config_clone = config.clone();

        let handle_a = std::thread::spawn(move || generate(&config).unwrap());
        let handle_b = std::thread::spawn(move || generate(&config_clone).unwrap());

        let (field_a, _) = handle_a.join().unwrap();
        let (field_b, _) = handle_b.join().unwrap();
        assert_eq!(
            field_a, field_b,
            "same config on different threads must produce identical fields"
        );
    }

    #[test]
    fn test_different_seeds_produce_different_fields() {
        let config_a = small_config();
        let config_b = GenerationConfig {
            seed: 43,
            ..small_config()
        };
        let (field_a, _) = generate(&config_a).unwrap();
        let (field_b, _) = generate(&config_b).unwrap();
        assert_ne!(field_a, field_b);
    }

    #[test]
    fn test_offset_shifts_sample_space() {
        let config_a = small_config();
        let config_b = GenerationConfig {
            offset: DVec2::new(37.5, -12.25),
            ..small_config()
        };
        let (field_a, _) = generate(&config_a).unwrap();
        let (field_b, _) = generate(&config_b).unwrap();
        assert_ne!(field_a, field_b);
    }

    #[test]
    fn test_more_octaves_changes_output() {
        let config_a = GenerationConfig {
            octaves: 1,
            ..small_config()
        };
        let config_b = GenerationConfig {
            octaves: 6,
            ..small_config()
        };
        let (field_a, _) = generate(&config_a).unwrap();
        let (field_b, _) = generate(&config_b).unwrap();
        assert_ne!(field_a, field_b);
    }

    #[test]
    fn test_invalid_config_produces_no_output() {
        let config = GenerationConfig {
            noise_scale: 0.0,
            ..small_config()
        };
        assert!(generate(&config).is_err());

        let config = GenerationConfig {
            width: 0,
            ..small_config()
        };
        assert!(generate(&config).is_err());

        let config = GenerationConfig {
            octaves: 0,
            ..small_config()
        };
        assert!(generate(&config).is_err());
    }
}
