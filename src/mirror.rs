//! Mirror adapter for selfie-view camera feeds.
//!
//! The preview is shown flipped horizontally, so the provider's notion of
//! "left" is the user's right. Coordinates and identity are flipped together;
//! flipping only one of them breaks the thumb rule and the pinch bindings.

use crate::landmarks::{DetectionSnapshot, HandLandmarks, HandObservation, LandmarkPoint, TrackedHand};
use log::debug;

/// Flip a point horizontally
#[must_use]
pub fn mirror_point(point: LandmarkPoint) -> LandmarkPoint {
    LandmarkPoint {
        x: 1.0 - point.x,
        ..point
    }
}

/// Flip one observation's landmarks and identity
#[must_use]
pub fn mirror_observation(observation: &HandObservation) -> HandObservation {
    HandObservation {
        landmarks: observation.landmarks.iter().copied().map(mirror_point).collect(),
        handedness: observation.handedness.mirrored(),
    }
}

/// Flip every observation in a snapshot. Applying this twice is the identity.
#[must_use]
pub fn mirror_snapshot(snapshot: &DetectionSnapshot) -> DetectionSnapshot {
    DetectionSnapshot {
        hands: snapshot.hands.iter().map(mirror_observation).collect(),
        surface: snapshot.surface,
    }
}

/// Validate and (optionally) mirror every hand of a snapshot.
///
/// Malformed observations are dropped for this frame.
#[must_use]
pub fn prepare_hands(snapshot: &DetectionSnapshot, mirror: bool) -> Vec<TrackedHand> {
    snapshot
        .hands
        .iter()
        .filter_map(|observation| {
            let observation = if mirror {
                mirror_observation(observation)
            } else {
                observation.clone()
            };
            match HandLandmarks::new(&observation.landmarks) {
                Ok(landmarks) => Some(TrackedHand {
                    hand: observation.handedness,
                    landmarks,
                }),
                Err(e) => {
                    debug!("Discarding {} hand: {}", observation.handedness, e);
                    None
                }
            }
        })
        .collect()
}
