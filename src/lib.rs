//! Hand-gesture media control library.
//!
//! This library turns per-frame hand landmarks from a hand-tracking provider
//! into playback commands for a media element:
//! - two fists toggle play/pause (or fullscreen)
//! - a single open hand plays (left) or pauses (right)
//! - a held pinch drags the volume (right) or scrubs the playhead (left)
//! - a quick double pinch skips ten seconds back (left) or forward (right)
//!
//! The processing pipeline for every frame is:
//! 1. Mirror landmarks and hand identity for the selfie-view camera
//! 2. Validate each hand and classify its pose from landmark geometry
//! 3. Evaluate discrete gestures in priority order under a shared cooldown
//! 4. Otherwise run the per-hand pinch state machines
//!
//! # Examples
//!
//! ## Driving the engine directly
//!
//! ```
//! use gesture_media_control::{
//!     config::{GestureConfig, SurfaceConfig},
//!     evaluator::GestureEngine,
//!     landmarks::DetectionSnapshot,
//!     media::MediaSnapshot,
//! };
//!
//! let mut engine = GestureEngine::new(GestureConfig::default(), SurfaceConfig::default());
//! let media = MediaSnapshot {
//!     current_time: 12.0,
//!     volume: 0.5,
//!     duration: 300.0,
//!     paused: true,
//! };
//!
//! // No hands, no commands
//! let commands = engine.process_frame(&DetectionSnapshot::empty(), Some(&media), 1_000);
//! assert!(commands.is_empty());
//! ```
//!
//! ## Controller with a media target
//!
//! ```no_run
//! use gesture_media_control::{
//!     app::GestureController,
//!     config::Config,
//!     media::{LogNotifier, SimulatedMedia},
//!     source::JsonLinesSource,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_file("gestures.yaml")?;
//! config.validate()?;
//!
//! let mut controller = GestureController::new(&config, Some(SimulatedMedia::new(600.0)), LogNotifier);
//! let mut source = JsonLinesSource::open("session.jsonl")?;
//! let summary = controller.run(&mut source);
//! println!("{} frames, {} commands", summary.frames, summary.commands);
//! # Ok(())
//! # }
//! ```

/// Hand landmark data model
pub mod landmarks;

/// Mirror adapter for selfie-view camera feeds
pub mod mirror;

/// Pose classification from landmark geometry
pub mod pose;

/// Per-hand pinch state machine
pub mod pinch;

/// Shared cooldown for discrete actions
pub mod cooldown;

/// Per-frame gesture evaluation
pub mod evaluator;

/// Commands and notifications
pub mod command;

/// Media target and notification interfaces
pub mod media;

/// Keyboard and button fallbacks
pub mod manual;

/// Landmark sources and recordings
pub mod source;

/// Main controller module
pub mod app;

/// Error types and result handling
pub mod error;

/// Constants used throughout the library
pub mod constants;

/// Configuration management
pub mod config;

/// Command line interface
pub mod cli;

pub use error::{Error, Result};
