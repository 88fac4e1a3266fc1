//! Initial per-particle attribute generation.
//!
//! Particles are generated once per pipeline build: positions fill a
//! canonical [-1, 1] cube (spread is applied in the vertex stage, never baked
//! into the data), seeds drive per-particle motion phases and size jitter,
//! and colors sample the palette. Recoloring repeats only the color step so
//! position and seed buffers stay byte-for-byte identical.

use rand::Rng;

use crate::palette::{self, DEFAULT_PALETTE};

/// CPU-side attribute arrays for one particle batch.
///
/// All three vectors always hold exactly `particle_count` entries; the only
/// operation allowed to change their length is a full rebuild.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleBuffers {
    pub positions: Vec<[f32; 3]>,
    pub seeds: Vec<[f32; 4]>,
    pub colors: Vec<[f32; 3]>,
}

/// Generates positions, seeds, and colors for `count` particles.
pub fn generate<R: Rng>(count: u32, palette: &[String], rng: &mut R) -> ParticleBuffers {
    if palette.is_empty() {
        tracing::debug!("empty palette; sampling the built-in neutral palette");
    }
    let count = count as usize;
    let mut positions = Vec::with_capacity(count);
    let mut seeds = Vec::with_capacity(count);
    let mut colors = Vec::with_capacity(count);

    for _ in 0..count {
        positions.push([
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        ]);
        seeds.push([rng.gen(), rng.gen(), rng.gen(), rng.gen()]);
        colors.push(sample_color(palette, rng));
    }

    ParticleBuffers {
        positions,
        seeds,
        colors,
    }
}

/// Resamples colors only, leaving positions and seeds untouched.
pub fn recolor<R: Rng>(count: u32, palette: &[String], rng: &mut R) -> Vec<[f32; 3]> {
    (0..count).map(|_| sample_color(palette, rng)).collect()
}

fn sample_color<R: Rng>(palette: &[String], rng: &mut R) -> [f32; 3] {
    if palette.is_empty() {
        let token = DEFAULT_PALETTE[rng.gen_range(0..DEFAULT_PALETTE.len())];
        return palette::parse_hex(token);
    }
    let token = &palette[rng.gen_range(0..palette.len())];
    palette::parse_hex(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn palette(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn generates_exact_buffer_lengths() {
        let mut rng = StdRng::seed_from_u64(7);
        for count in [1u32, 100, 500] {
            let buffers = generate(count, &palette(&["#ffffff"]), &mut rng);
            assert_eq!(buffers.positions.len(), count as usize);
            assert_eq!(buffers.seeds.len(), count as usize);
            assert_eq!(buffers.colors.len(), count as usize);
        }
    }

    #[test]
    fn attributes_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let buffers = generate(400, &palette(&["#123456", "#abcdef"]), &mut rng);
        for position in &buffers.positions {
            for component in position {
                assert!((-1.0..1.0).contains(component));
            }
        }
        for seed in &buffers.seeds {
            for component in seed {
                assert!((0.0..1.0).contains(component));
            }
        }
        for color in &buffers.colors {
            for component in color {
                assert!((0.0..=1.0).contains(component));
            }
        }
    }

    #[test]
    fn single_entry_palette_colors_every_particle() {
        let mut rng = StdRng::seed_from_u64(3);
        let buffers = generate(500, &palette(&["#ffffff"]), &mut rng);
        assert!(buffers.colors.iter().all(|c| *c == [1.0, 1.0, 1.0]));
    }

    #[test]
    fn recolor_matches_count_and_palette() {
        let mut rng = StdRng::seed_from_u64(5);
        let colors = recolor(250, &palette(&["#ff0000"]), &mut rng);
        assert_eq!(colors.len(), 250);
        assert!(colors.iter().all(|c| *c == [1.0, 0.0, 0.0]));
    }

    #[test]
    fn recolor_leaves_positions_and_seeds_untouched() {
        let mut rng = StdRng::seed_from_u64(13);
        let buffers = generate(200, &palette(&["#ffffff"]), &mut rng);
        let positions_before = buffers.positions.clone();
        let seeds_before = buffers.seeds.clone();

        let _ = recolor(200, &palette(&["#00ff00"]), &mut rng);

        assert_eq!(buffers.positions, positions_before);
        assert_eq!(buffers.seeds, seeds_before);
    }

    #[test]
    fn empty_palette_uses_builtin_fallback() {
        let mut rng = StdRng::seed_from_u64(17);
        let buffers = generate(64, &[], &mut rng);
        assert!(buffers.colors.iter().all(|c| *c == [1.0, 1.0, 1.0]));
    }
}
