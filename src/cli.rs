// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "scroll-rig")]
#[command(about = "Headless simulator for the scroll-driven trailing camera rig", long_about = None)]
pub struct Cli {
    /// Rig configuration JSON (defaults to the built-in landing page scene)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Simulated frames per second
    #[arg(long, default_value_t = 60.0)]
    pub fps: f32,

    /// Total simulated time in seconds
    #[arg(long, default_value_t = 5.0)]
    pub seconds: f32,

    /// Seconds taken for scroll progress to ramp from 0 to 1
    #[arg(long = "scroll-seconds", default_value_t = 3.0)]
    pub scroll_seconds: f32,

    /// Emit one JSON object per frame on stdout
    #[arg(long)]
    pub json: bool,

    /// Drive frames from the wall clock instead of a fixed rate
    #[arg(long)]
    pub realtime: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long = "dump-config")]
    pub dump_config: bool,
}

impl Cli {
    /// Scroll progress at scene time `time`, ramping linearly.
    pub fn progress_at(&self, time: f32) -> f32 {
        if self.scroll_seconds > 0.0 {
            time / self.scroll_seconds
        } else {
            1.0
        }
    }
}
