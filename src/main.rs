//! Replay recorded hand landmarks through the gesture engine against a simulated player.

use anyhow::{Context, Result};
use clap::Parser;
use gesture_media_control::{
    app::GestureController,
    cli::Args,
    config::{Config, EXAMPLE_CONFIG},
    media::LogNotifier,
    source::JsonLinesSource,
};
use log::{info, warn};

fn main() -> Result<()> {
    let args = Args::parse();

    if args.dump_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Gesture media control replay");

    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        match Config::from_file(config_path).and_then(|cfg| cfg.validate().map(|()| cfg)) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    args.apply_to(&mut config);
    let media = args.simulated_media();

    let input = args.input.as_deref().context("No input recording given")?;
    let mut source = JsonLinesSource::open(input).with_context(|| format!("Failed to open recording {input}"))?;

    let mut controller = GestureController::new(&config, Some(media), LogNotifier);
    let summary = controller.run(&mut source);

    if let Some(e) = source.error() {
        warn!("Replay stopped early: {}", e);
    }

    println!("Frames processed: {}", summary.frames);
    println!("Commands applied: {}", summary.commands);
    if let Some(media) = controller.media() {
        println!(
            "Final media state: time={:.1}s volume={:.0}% {}{}",
            media.current_time,
            media.volume * 100.0,
            if media.paused { "paused" } else { "playing" },
            if media.fullscreen { " fullscreen" } else { "" },
        );
    }

    Ok(())
}
