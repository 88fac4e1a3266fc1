use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use fieldconfig::FieldConfig;

use crate::cli::Cli;

pub fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

pub fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let surface_size = cli
        .size
        .as_deref()
        .map(parse_surface_size)
        .transpose()?
        .unwrap_or((1920, 1080));

    tracing::debug!(
        particle_count = config.particle_count,
        spread = config.particle_spread,
        speed = config.speed,
        palette = ?config.palette,
        pointer_follow = config.pointer_follow,
        width = surface_size.0,
        height = surface_size.1,
        "resolved field configuration"
    );

    renderer::run_preview(&config, surface_size)
}

fn resolve_config(cli: &Cli) -> Result<FieldConfig> {
    let mut config = match cli.config.as_ref() {
        Some(path) => FieldConfig::from_path(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => FieldConfig::default(),
    };

    if let Some(count) = cli.count {
        config.particle_count = count;
    }
    if let Some(spread) = cli.spread {
        config.particle_spread = spread;
    }
    if let Some(speed) = cli.speed {
        config.speed = speed;
    }
    if let Some(colors) = cli.colors.clone() {
        config.palette = colors;
    }
    if let Some(base_size) = cli.base_size {
        config.base_size = base_size;
    }
    if let Some(size_randomness) = cli.size_randomness {
        config.size_randomness = size_randomness;
    }
    if let Some(camera_distance) = cli.camera_distance {
        config.camera_distance = camera_distance;
    }
    if cli.no_follow {
        config.pointer_follow = false;
    }
    if let Some(pointer_factor) = cli.pointer_factor {
        config.pointer_factor = pointer_factor;
    }
    if cli.solid {
        config.alpha_particles = false;
    }

    config
        .validate()
        .context("command-line overrides produced an invalid configuration")?;
    Ok(config)
}

fn parse_surface_size(value: &str) -> Result<(u32, u32)> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| anyhow!("expected WIDTHxHEIGHT, got `{value}`"))?;
    let width: u32 = width
        .trim()
        .parse()
        .with_context(|| format!("invalid width in `{value}`"))?;
    let height: u32 = height
        .trim()
        .parse()
        .with_context(|| format!("invalid height in `{value}`"))?;
    if width == 0 || height == 0 {
        return Err(anyhow!("surface size must be non-zero, got `{value}`"));
    }
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("driftpaper").chain(args.iter().copied()))
    }

    #[test]
    fn parses_surface_size() {
        assert_eq!(parse_surface_size("1280x720").unwrap(), (1280, 720));
        assert_eq!(parse_surface_size("1920X1080").unwrap(), (1920, 1080));
    }

    #[test]
    fn rejects_malformed_sizes() {
        assert!(parse_surface_size("1280").is_err());
        assert!(parse_surface_size("x720").is_err());
        assert!(parse_surface_size("0x720").is_err());
        assert!(parse_surface_size("axb").is_err());
    }

    #[test]
    fn defaults_apply_without_flags() {
        let config = resolve_config(&cli(&[])).unwrap();
        assert_eq!(config, FieldConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let config = resolve_config(&cli(&[
            "--count",
            "500",
            "--spread",
            "4.5",
            "--colors",
            "#ff0000,#00ff00",
            "--no-follow",
            "--solid",
        ]))
        .unwrap();
        assert_eq!(config.particle_count, 500);
        assert_eq!(config.particle_spread, 4.5);
        assert_eq!(config.palette, vec!["#ff0000", "#00ff00"]);
        assert!(!config.pointer_follow);
        assert!(!config.alpha_particles);
    }

    #[test]
    fn invalid_overrides_are_rejected() {
        assert!(resolve_config(&cli(&["--count", "0"])).is_err());
        assert!(resolve_config(&cli(&["--size-randomness", "1.5"])).is_err());
    }
}
