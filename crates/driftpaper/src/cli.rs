use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "driftpaper",
    author,
    version,
    about = "Animated particle field background",
    arg_required_else_help = false
)]
pub struct Cli {
    /// Path to a field configuration TOML file.
    #[arg(long, value_name = "FILE", env = "DRIFTPAPER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Window size (e.g. `1280x720`).
    #[arg(long, value_name = "WIDTHxHEIGHT")]
    pub size: Option<String>,

    /// Number of particles in the field.
    #[arg(long, value_name = "N")]
    pub count: Option<u32>,

    /// Half-extent of the particle cloud in world units.
    #[arg(long, value_name = "UNITS")]
    pub spread: Option<f32>,

    /// Animation speed multiplier.
    #[arg(long, value_name = "FACTOR")]
    pub speed: Option<f32>,

    /// Comma-separated hex color tokens (e.g. `#ff0000,#00ff00`).
    #[arg(long, value_name = "COLORS", value_delimiter = ',')]
    pub colors: Option<Vec<String>>,

    /// Base particle size in pixels.
    #[arg(long, value_name = "PIXELS")]
    pub base_size: Option<f32>,

    /// Per-particle size jitter in [0, 1].
    #[arg(long, value_name = "AMOUNT")]
    pub size_randomness: Option<f32>,

    /// Camera distance from the cloud center.
    #[arg(long, value_name = "UNITS")]
    pub camera_distance: Option<f32>,

    /// Disable pointer following.
    #[arg(long)]
    pub no_follow: bool,

    /// Pointer follow strength.
    #[arg(long, value_name = "FACTOR")]
    pub pointer_factor: Option<f32>,

    /// Draw hard-edged opaque discs instead of soft translucent ones.
    #[arg(long)]
    pub solid: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
