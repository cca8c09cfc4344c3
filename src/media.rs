//! Collaborator interfaces for the controlled media element and the
//! notification surface, plus in-process implementations of both.

use crate::command::{Command, SkipDirection};
use log::info;

/// Read-only view of the media target taken at the start of a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaSnapshot {
    /// Playhead position in seconds
    pub current_time: f64,
    /// Volume in [0, 1]
    pub volume: f64,
    /// Length in seconds; not finite for live or unknown-length streams
    pub duration: f64,
    /// Whether playback is paused
    pub paused: bool,
}

impl MediaSnapshot {
    /// Clamp a playhead position into [0, duration]
    #[must_use]
    pub fn clamp_time(&self, seconds: f64) -> f64 {
        let upper = if self.duration.is_finite() {
            self.duration.max(0.0)
        } else {
            f64::INFINITY
        };
        seconds.clamp(0.0, upper)
    }
}

/// The element being controlled
pub trait MediaTarget {
    /// Playhead position in seconds
    fn current_time(&self) -> f64;
    /// Move the playhead
    fn set_current_time(&mut self, seconds: f64);
    /// Volume in [0, 1]
    fn volume(&self) -> f64;
    /// Change the volume
    fn set_volume(&mut self, volume: f64);
    /// Length in seconds
    fn duration(&self) -> f64;
    /// Whether playback is paused
    fn paused(&self) -> bool;
    /// Start playback
    fn play(&mut self);
    /// Pause playback
    fn pause(&mut self);
    /// Enter or leave fullscreen; targets without a fullscreen notion ignore it
    fn toggle_fullscreen(&mut self) {}

    /// Capture the values the engine reads
    fn snapshot(&self) -> MediaSnapshot {
        MediaSnapshot {
            current_time: self.current_time(),
            volume: self.volume(),
            duration: self.duration(),
            paused: self.paused(),
        }
    }

    /// Carry out one engine command
    fn apply(&mut self, command: &Command) {
        match *command {
            Command::Play(_) => self.play(),
            Command::Pause(_) => self.pause(),
            Command::ToggleFullscreen(_) => self.toggle_fullscreen(),
            Command::SetVolume(volume) => self.set_volume(volume),
            Command::Scrub(position) => self.set_current_time(position),
            // Relative so a scrub applied earlier in the same frame is kept
            Command::Skip { direction, step, .. } => {
                let target = match direction {
                    SkipDirection::Back => self.current_time() - step,
                    SkipDirection::Forward => self.current_time() + step,
                };
                let position = self.snapshot().clamp_time(target);
                self.set_current_time(position);
            }
        }
    }
}

/// Where transient status messages go
pub trait NotificationSink {
    /// Show a message; fire and forget
    fn show(&mut self, message: &str, icon: &str);
}

/// Notification sink that writes to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn show(&mut self, message: &str, icon: &str) {
        info!("{} {}", icon, message);
    }
}

/// Notification sink that keeps every message, newest last
#[derive(Debug, Default, Clone)]
pub struct CollectingNotifier {
    /// (message, icon) pairs in arrival order
    pub shown: Vec<(String, String)>,
}

impl CollectingNotifier {
    /// Messages without icons
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.shown.iter().map(|(message, _)| message.as_str())
    }
}

impl NotificationSink for CollectingNotifier {
    fn show(&mut self, message: &str, icon: &str) {
        self.shown.push((message.to_string(), icon.to_string()));
    }
}

/// In-memory media element used by the replay tool and tests
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedMedia {
    /// Playhead position in seconds
    pub current_time: f64,
    /// Volume in [0, 1]
    pub volume: f64,
    /// Length in seconds
    pub duration: f64,
    /// Whether playback is paused
    pub paused: bool,
    /// Whether fullscreen is active
    pub fullscreen: bool,
    /// Number of `play` calls received
    pub play_calls: usize,
    /// Number of `pause` calls received
    pub pause_calls: usize,
}

impl SimulatedMedia {
    /// A paused element at the start of a clip of the given length
    #[must_use]
    pub fn new(duration: f64) -> Self {
        Self {
            current_time: 0.0,
            volume: 1.0,
            duration,
            paused: true,
            fullscreen: false,
            play_calls: 0,
            pause_calls: 0,
        }
    }
}

impl Default for SimulatedMedia {
    fn default() -> Self {
        Self::new(600.0)
    }
}

impl MediaTarget for SimulatedMedia {
    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.current_time = seconds;
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn paused(&self) -> bool {
        self.paused
    }

    fn play(&mut self) {
        self.play_calls += 1;
        self.paused = false;
    }

    fn pause(&mut self) {
        self.pause_calls += 1;
        self.paused = true;
    }

    fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }
}
