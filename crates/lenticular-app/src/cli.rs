use clap::Parser;

/// Lenticular carousel: headless frame driver for the lenticular effect.
#[derive(Parser, Debug)]
#[command(name = "lenticular", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter override (e.g. `lenticular=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Number of frames to run.
    #[arg(long, default_value_t = 180)]
    pub frames: u32,

    /// Frame rate of the driver loop.
    #[arg(long, default_value_t = 60.0)]
    pub fps: f32,

    /// Pointer X where the scripted drag starts.
    #[arg(long, requires = "drag_to", allow_negative_numbers = true)]
    pub drag_from: Option<f32>,

    /// Pointer X where the scripted drag ends.
    #[arg(long, requires = "drag_from", allow_negative_numbers = true)]
    pub drag_to: Option<f32>,

    /// Normalized pointer X in [-1, 1] fed to the parallax tilt.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub pointer_x: f32,

    /// Reload the config file when it changes.
    #[arg(long)]
    pub watch: bool,

    /// Print the effective config as JSON and exit.
    #[arg(long, conflicts_with = "watch")]
    pub print_config: bool,

    /// Write the effective config as TOML to this path and exit.
    #[arg(long, conflicts_with_all = ["watch", "print_config"])]
    pub write_config: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
