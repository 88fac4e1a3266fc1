//! Configuration for the driftpaper particle field.
//!
//! A [`FieldConfig`] is supplied once when a field is created; individual
//! fields may be patched afterwards through the renderer's update channel.
//! Configs are loaded from TOML (or assembled in code) and validated before
//! a renderer ever sees them, so the render path can assume positive counts
//! and finite scalars throughout.

use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Tunable parameters of one particle field instance.
///
/// Defaults mirror the stock background: 200 white particles, gentle drift,
/// soft-edged discs that follow the pointer.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldConfig {
    /// Number of particles; changing it after creation forces a buffer rebuild.
    pub particle_count: u32,
    /// Spatial extent multiplier applied in the vertex stage.
    pub particle_spread: f32,
    /// Multiplies elapsed milliseconds before they drive per-particle motion.
    pub speed: f32,
    /// Hex color tokens sampled per particle; empty falls back to neutral white.
    pub palette: Vec<String>,
    /// When true the whole cloud translates with the pointer.
    pub pointer_follow: bool,
    /// Scale applied to the normalized pointer offset.
    pub pointer_factor: f32,
    /// Soft-edged alpha falloff instead of a hard circular cutoff.
    pub alpha_particles: bool,
    /// Base point size in pixels at unit depth.
    pub base_size: f32,
    /// Per-particle size jitter in [0, 1]; 0 means uniform size.
    pub size_randomness: f32,
    /// Camera position along the view axis.
    pub camera_distance: f32,
    /// Accepted for interface compatibility; no rotation is ever applied.
    pub disable_rotation: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 200,
            particle_spread: 10.0,
            speed: 0.05,
            palette: vec![
                "#ffffff".to_string(),
                "#ffffff".to_string(),
                "#ffffff".to_string(),
            ],
            pointer_follow: true,
            pointer_factor: 1.0,
            alpha_particles: true,
            base_size: 50.0,
            size_randomness: 1.0,
            camera_distance: 20.0,
            disable_rotation: false,
        }
    }
}

impl FieldConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let raw: FieldConfig = toml::from_str(input)?;
        raw.validate()?;
        Ok(raw)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::Invalid(
                "particle_count must be greater than zero".into(),
            ));
        }
        ensure_positive("particle_spread", self.particle_spread)?;
        ensure_positive("base_size", self.base_size)?;
        ensure_positive("camera_distance", self.camera_distance)?;
        if !self.speed.is_finite() {
            return Err(ConfigError::Invalid("speed must be finite".into()));
        }
        if !self.pointer_factor.is_finite() {
            return Err(ConfigError::Invalid("pointer_factor must be finite".into()));
        }
        if !(0.0..=1.0).contains(&self.size_randomness) {
            return Err(ConfigError::Invalid(format!(
                "size_randomness {} is outside [0, 1]",
                self.size_randomness
            )));
        }
        // An empty palette is deliberately not an error: the renderer
        // substitutes its built-in neutral palette instead of failing.
        Ok(())
    }
}

fn ensure_positive(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{name} must be a positive finite number (got {value})"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        FieldConfig::default().validate().expect("default config");
    }

    #[test]
    fn parses_full_config() {
        let config = FieldConfig::from_toml_str(
            r##"
particle_count = 500
particle_spread = 10.0
speed = 0.1
palette = ["#ff5f1f", "#1fbfff"]
pointer_follow = false
pointer_factor = 2.0
alpha_particles = false
base_size = 80.0
size_randomness = 0.5
camera_distance = 25.0
disable_rotation = true
"##,
        )
        .expect("config parses");
        assert_eq!(config.particle_count, 500);
        assert_eq!(config.palette.len(), 2);
        assert!(!config.pointer_follow);
        assert!(config.disable_rotation);
    }

    #[test]
    fn partial_config_uses_defaults() {
        let config = FieldConfig::from_toml_str("particle_count = 42").expect("config parses");
        assert_eq!(config.particle_count, 42);
        assert_eq!(config.base_size, FieldConfig::default().base_size);
        assert!(config.pointer_follow);
    }

    #[test]
    fn rejects_zero_particle_count() {
        let err = FieldConfig::from_toml_str("particle_count = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_negative_spread() {
        let err = FieldConfig::from_toml_str("particle_spread = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_size_randomness_out_of_range() {
        let err = FieldConfig::from_toml_str("size_randomness = 1.5").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn empty_palette_is_allowed() {
        let config = FieldConfig::from_toml_str("palette = []").expect("config parses");
        assert!(config.palette.is_empty());
        config.validate().expect("still valid");
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(FieldConfig::from_toml_str("rotation_speed = 1.0").is_err());
    }
}
