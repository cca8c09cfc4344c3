//! Configuration management for the gesture media controller

use crate::{
    constants::{
        DEFAULT_COARSE_SEEK_SECONDS, DEFAULT_DISCRETE_COOLDOWN_MS, DEFAULT_DOUBLE_TAP_WINDOW_MS,
        DEFAULT_EXTENSION_MARGIN, DEFAULT_PINCH_MIN_HOLD_MS, DEFAULT_PINCH_THRESHOLD_PX, DEFAULT_SEEK_SENSITIVITY,
        DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH, DEFAULT_TAP_MAX_DURATION_MS, DEFAULT_THUMB_MARGIN,
        DEFAULT_VOLUME_SENSITIVITY,
    },
    pose::PoseClassifier,
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gesture recognition thresholds and bindings
    pub gestures: GestureConfig,

    /// Detection surface configuration
    pub surface: SurfaceConfig,

    /// Controller behaviour
    pub controller: ControllerConfig,
}

/// What the two-fist gesture does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwoFistAction {
    /// Play when paused, pause otherwise
    #[default]
    TogglePlayback,
    /// Enter or leave fullscreen
    ToggleFullscreen,
}

impl std::str::FromStr for TwoFistAction {
    type Err = Error;

    /// Parse a command-line binding name
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "toggle" | "toggle_playback" => Ok(Self::TogglePlayback),
            "fullscreen" | "toggle_fullscreen" => Ok(Self::ToggleFullscreen),
            other => Err(Error::InvalidInput(format!("unknown two-fist binding '{other}'"))),
        }
    }
}

/// How a fist treats a pinch that was already engaged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FistPolicy {
    /// Drop the pinch without tap handling
    #[default]
    Release,
    /// Leave the pinch engaged until the hand opens or disappears
    Hold,
}

/// Gesture recognition parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Flip landmarks and identity for a mirrored camera view
    pub mirror: bool,

    /// Fingertip-above-PIP margin for an extended finger (normalized)
    pub extension_margin: f64,

    /// Thumb tip offset past the IP joint for an extended thumb (normalized)
    pub thumb_margin: f64,

    /// Thumb/index distance below which a pinch is engaged (pixels)
    pub pinch_threshold_px: f64,

    /// Hold time before a pinch starts dragging (ms)
    pub pinch_min_hold_ms: u64,

    /// Longest pinch that still counts as a tap (ms)
    pub tap_max_duration_ms: u64,

    /// Maximum gap between two tap releases (ms)
    pub double_tap_window_ms: u64,

    /// Minimum time between discrete actions (ms)
    pub discrete_cooldown_ms: u64,

    /// Volume change per pixel of right-hand drag
    pub volume_sensitivity: f64,

    /// Seconds of scrub per pixel of left-hand drag
    pub seek_sensitivity: f64,

    /// Seconds skipped by a double tap
    pub coarse_seek_seconds: f64,

    /// Binding for the two-fist gesture
    pub two_fist_action: TwoFistAction,

    /// Fist handling for an engaged pinch
    pub fist_policy: FistPolicy,
}

/// Detection surface in pixels, used to scale pinch measurements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Surface width
    pub width: u32,

    /// Surface height
    pub height: u32,
}

/// Controller behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Whether gestures are active at start
    pub enabled: bool,

    /// Whether commands produce notifications
    pub notifications: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            mirror: true,
            extension_margin: DEFAULT_EXTENSION_MARGIN,
            thumb_margin: DEFAULT_THUMB_MARGIN,
            pinch_threshold_px: DEFAULT_PINCH_THRESHOLD_PX,
            pinch_min_hold_ms: DEFAULT_PINCH_MIN_HOLD_MS,
            tap_max_duration_ms: DEFAULT_TAP_MAX_DURATION_MS,
            double_tap_window_ms: DEFAULT_DOUBLE_TAP_WINDOW_MS,
            discrete_cooldown_ms: DEFAULT_DISCRETE_COOLDOWN_MS,
            volume_sensitivity: DEFAULT_VOLUME_SENSITIVITY,
            seek_sensitivity: DEFAULT_SEEK_SENSITIVITY,
            coarse_seek_seconds: DEFAULT_COARSE_SEEK_SECONDS,
            two_fist_action: TwoFistAction::default(),
            fist_policy: FistPolicy::default(),
        }
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SURFACE_WIDTH,
            height: DEFAULT_SURFACE_HEIGHT,
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            notifications: true,
        }
    }
}

impl GestureConfig {
    /// Pose classifier using these margins
    #[must_use]
    pub const fn classifier(&self) -> PoseClassifier {
        PoseClassifier::new(self.extension_margin, self.thumb_margin)
    }

    /// Validate gesture parameters
    pub fn validate(&self) -> Result<()> {
        for (name, margin) in [
            ("Extension margin", self.extension_margin),
            ("Thumb margin", self.thumb_margin),
        ] {
            if !(0.0..1.0).contains(&margin) {
                return Err(Error::ConfigError(format!("{name} must be in [0.0, 1.0)")));
            }
        }

        if !(self.pinch_threshold_px.is_finite() && self.pinch_threshold_px > 0.0) {
            return Err(Error::ConfigError(
                "Pinch threshold must be greater than 0".to_string(),
            ));
        }
        if self.tap_max_duration_ms == 0 {
            return Err(Error::ConfigError(
                "Tap duration must be greater than 0".to_string(),
            ));
        }
        if self.double_tap_window_ms == 0 {
            return Err(Error::ConfigError(
                "Double tap window must be greater than 0".to_string(),
            ));
        }

        for (name, value) in [
            ("Volume sensitivity", self.volume_sensitivity),
            ("Seek sensitivity", self.seek_sensitivity),
            ("Coarse seek step", self.coarse_seek_seconds),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::ConfigError(format!("{name} must be a non-negative number")));
            }
        }

        Ok(())
    }
}

impl SurfaceConfig {
    /// Surface size as floating point pixels
    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        (f64::from(self.width), f64::from(self.height))
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::IoError(e.to_string()))?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content).map_err(|e| Error::IoError(e.to_string()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.gestures.validate()?;

        if self.surface.width == 0 || self.surface.height == 0 {
            return Err(Error::ConfigError(
                "Surface width and height must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Gesture Media Control Configuration

# Gesture recognition
gestures:
  mirror: true
  extension_margin: 0.02
  thumb_margin: 0.02
  pinch_threshold_px: 50.0
  pinch_min_hold_ms: 300
  tap_max_duration_ms: 300
  double_tap_window_ms: 600
  discrete_cooldown_ms: 1200
  volume_sensitivity: 0.002
  seek_sensitivity: 0.08
  coarse_seek_seconds: 10.0
  two_fist_action: toggle_playback   # or toggle_fullscreen
  fist_policy: release               # or hold

# Detection surface (pixels)
surface:
  width: 320
  height: 240

# Controller
controller:
  enabled: true
  notifications: true
"#;
