//! Per-hand pinch tracking.
//!
//! A pinch held past the hold gate becomes a drag: the right hand drags the
//! volume, the left hand scrubs the playhead. Both are computed as absolute
//! offsets from the anchor captured at engagement, so dropped frames never
//! accumulate error. A short pinch is a tap instead; two taps inside the
//! double-tap window skip ten seconds back (left) or forward (right).

use crate::{
    command::{Command, SkipDirection},
    config::GestureConfig,
    constants::{INDEX_TIP, THUMB_TIP},
    cooldown::CooldownGovernor,
    landmarks::{Hand, HandLandmarks},
    media::MediaSnapshot,
};
use log::{debug, info};

/// Thumb/index contact measured in surface pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchMetrics {
    /// Distance between the thumb tip and index tip
    pub distance: f64,
    /// Horizontal midpoint of the two tips
    pub center_x: f64,
}

impl PinchMetrics {
    /// Measure a hand on a surface of `width` × `height` pixels
    #[must_use]
    pub fn measure(landmarks: &HandLandmarks, width: f64, height: f64) -> Self {
        let thumb = landmarks[THUMB_TIP];
        let index = landmarks[INDEX_TIP];
        let dx = (thumb.x - index.x) * width;
        let dy = (thumb.y - index.y) * height;
        Self {
            distance: dx.hypot(dy),
            center_x: (thumb.x + index.x) / 2.0 * width,
        }
    }
}

/// Reference captured when a pinch engages
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchAnchor {
    /// Pinch center at engagement, in pixels
    pub center_x: f64,
    /// Engagement time in milliseconds
    pub started_ms: u64,
    /// Playhead position at engagement
    pub media_time: f64,
    /// Volume at engagement
    pub volume: f64,
}

/// Pinch state of one hand
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PinchState {
    /// No contact
    #[default]
    Inactive,
    /// Contact held since `anchor`
    Active {
        /// Reference for drag deltas
        anchor: PinchAnchor,
        /// Most recent pinch center
        last_center_x: f64,
    },
}

/// Pinch state machine plus double-tap clock for one hand identity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchTracker {
    hand: Hand,
    state: PinchState,
    last_tap_ms: Option<u64>,
}

impl PinchTracker {
    /// Create an inactive tracker with no pending tap
    #[must_use]
    pub const fn new(hand: Hand) -> Self {
        Self {
            hand,
            state: PinchState::Inactive,
            last_tap_ms: None,
        }
    }

    /// Hand identity this tracker belongs to
    #[must_use]
    pub const fn hand(&self) -> Hand {
        self.hand
    }

    /// Current pinch state
    #[must_use]
    pub const fn state(&self) -> &PinchState {
        &self.state
    }

    /// Whether a pinch is engaged
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, PinchState::Active { .. })
    }

    /// Release time of a pending first tap
    #[must_use]
    pub const fn pending_tap(&self) -> Option<u64> {
        self.last_tap_ms
    }

    /// Advance the state machine by one frame.
    ///
    /// Returns a drag adjustment while a held pinch moves, or a coarse seek
    /// when a release completes a double tap.
    pub fn update(
        &mut self,
        metrics: PinchMetrics,
        now_ms: u64,
        media: &MediaSnapshot,
        cooldown: &mut CooldownGovernor,
        config: &GestureConfig,
    ) -> Option<Command> {
        let pinched = metrics.distance < config.pinch_threshold_px;

        match (self.state, pinched) {
            (PinchState::Inactive, true) => {
                debug!("{} pinch engaged at x={:.1}", self.hand, metrics.center_x);
                self.state = PinchState::Active {
                    anchor: PinchAnchor {
                        center_x: metrics.center_x,
                        started_ms: now_ms,
                        media_time: media.current_time,
                        volume: media.volume,
                    },
                    last_center_x: metrics.center_x,
                };
                None
            }
            (PinchState::Active { anchor, .. }, true) => {
                self.state = PinchState::Active {
                    anchor,
                    last_center_x: metrics.center_x,
                };
                if now_ms.saturating_sub(anchor.started_ms) <= config.pinch_min_hold_ms {
                    return None;
                }
                let dx = metrics.center_x - anchor.center_x;
                Some(match self.hand {
                    Hand::Right => {
                        Command::SetVolume((anchor.volume + dx * config.volume_sensitivity).clamp(0.0, 1.0))
                    }
                    Hand::Left => Command::Scrub(media.clamp_time(anchor.media_time + dx * config.seek_sensitivity)),
                })
            }
            (PinchState::Active { anchor, .. }, false) => {
                let held_ms = now_ms.saturating_sub(anchor.started_ms);
                self.state = PinchState::Inactive;
                debug!("{} pinch released after {}ms", self.hand, held_ms);
                if held_ms < config.tap_max_duration_ms {
                    self.register_tap(now_ms, media, cooldown, config)
                } else {
                    None
                }
            }
            (PinchState::Inactive, false) => None,
        }
    }

    fn register_tap(
        &mut self,
        now_ms: u64,
        media: &MediaSnapshot,
        cooldown: &mut CooldownGovernor,
        config: &GestureConfig,
    ) -> Option<Command> {
        let second_tap = self
            .last_tap_ms
            .is_some_and(|first| now_ms.saturating_sub(first) < config.double_tap_window_ms);

        if !(second_tap && cooldown.elapsed(now_ms)) {
            self.last_tap_ms = Some(now_ms);
            return None;
        }

        cooldown.mark_fired(now_ms);
        self.last_tap_ms = None;

        let step = config.coarse_seek_seconds;
        let (direction, position) = match self.hand {
            Hand::Left => (SkipDirection::Back, media.clamp_time(media.current_time - step)),
            Hand::Right => (SkipDirection::Forward, media.clamp_time(media.current_time + step)),
        };
        info!("{} double tap: skip to {:.1}s", self.hand, position);
        Some(Command::Skip {
            direction,
            step,
            position,
        })
    }

    /// Drop an engaged pinch without tap handling. Returns whether one was active.
    pub fn force_release(&mut self) -> bool {
        let was_active = self.is_active();
        if was_active {
            debug!("{} pinch force-released", self.hand);
        }
        self.state = PinchState::Inactive;
        was_active
    }

    /// Drop the pinch and any pending tap
    pub fn reset(&mut self) {
        self.state = PinchState::Inactive;
        self.last_tap_ms = None;
    }
}
