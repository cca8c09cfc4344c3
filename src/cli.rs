//! Command line arguments for the `gesture-replay` binary.

use clap::Parser;
use log::warn;

use crate::{
    config::{Config, TwoFistAction},
    media::SimulatedMedia,
};

#[derive(Parser, Debug)]
#[command(name = "gesture-replay", author, version, about, long_about = None)]
pub struct Args {
    /// JSON-lines recording of detection snapshots
    #[arg(short, long, required_unless_present = "dump_config")]
    pub input: Option<String>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    pub config: Option<String>,

    /// Duration of the simulated media in seconds
    #[arg(long, default_value = "600")]
    pub duration: f64,

    /// Starting volume of the simulated media (0.0 to 1.0)
    #[arg(long, default_value = "1.0")]
    pub volume: f64,

    /// Start the simulated media playing instead of paused
    #[arg(long)]
    pub playing: bool,

    /// Two-fist binding (toggle, fullscreen)
    #[arg(long)]
    pub two_fist: Option<String>,

    /// Treat landmarks as already in user space
    #[arg(long)]
    pub no_mirror: bool,

    /// Print an example configuration and exit
    #[arg(long)]
    pub dump_config: bool,

    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,
}

impl Args {
    /// Apply command line overrides on top of a loaded configuration.
    ///
    /// An unknown two-fist binding is logged and the configured one kept.
    pub fn apply_to(&self, config: &mut Config) {
        if self.no_mirror {
            config.gestures.mirror = false;
        }
        if let Some(binding) = &self.two_fist {
            match binding.parse::<TwoFistAction>() {
                Ok(action) => config.gestures.two_fist_action = action,
                Err(e) => warn!("{}. Keeping {:?}", e, config.gestures.two_fist_action),
            }
        }
    }

    /// Simulated player in the starting state the arguments describe
    pub fn simulated_media(&self) -> SimulatedMedia {
        let mut media = SimulatedMedia::new(self.duration);
        media.volume = self.volume.clamp(0.0, 1.0);
        media.paused = !self.playing;
        media
    }
}
