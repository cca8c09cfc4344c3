//! Constants used throughout the library

/// Number of landmarks reported per hand
pub const NUM_HAND_LANDMARKS: usize = 21;

/// Landmark indices in the 21-point hand topology
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_PIP: usize = 6;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_TIP: usize = 12;
pub const RING_PIP: usize = 14;
pub const RING_TIP: usize = 16;
pub const PINKY_PIP: usize = 18;
pub const PINKY_TIP: usize = 20;

/// (tip, pip) pairs for the four non-thumb fingers
pub const FINGER_JOINTS: [(usize, usize); 4] = [
    (INDEX_TIP, INDEX_PIP),
    (MIDDLE_TIP, MIDDLE_PIP),
    (RING_TIP, RING_PIP),
    (PINKY_TIP, PINKY_PIP),
];

/// Pose classification margins (normalized units)
pub const DEFAULT_EXTENSION_MARGIN: f64 = 0.02;
pub const DEFAULT_THUMB_MARGIN: f64 = 0.02;

/// Pinch detection and timing
pub const DEFAULT_PINCH_THRESHOLD_PX: f64 = 50.0;
pub const DEFAULT_PINCH_MIN_HOLD_MS: u64 = 300;
pub const DEFAULT_TAP_MAX_DURATION_MS: u64 = 300;
pub const DEFAULT_DOUBLE_TAP_WINDOW_MS: u64 = 600;

/// Shared cooldown for discrete actions
pub const DEFAULT_DISCRETE_COOLDOWN_MS: u64 = 1200;

/// Drag sensitivities (per pixel of horizontal pinch travel)
pub const DEFAULT_VOLUME_SENSITIVITY: f64 = 0.002;
pub const DEFAULT_SEEK_SENSITIVITY: f64 = 0.08;

/// Coarse seek step for a double tap
pub const DEFAULT_COARSE_SEEK_SECONDS: f64 = 10.0;

/// Volume step for manual up/down triggers
pub const MANUAL_VOLUME_STEP: f64 = 0.1;

/// Default detection surface in pixels
pub const DEFAULT_SURFACE_WIDTH: u32 = 320;
pub const DEFAULT_SURFACE_HEIGHT: u32 = 240;
