//! Hand landmark data model.
//!
//! A [`DetectionSnapshot`] is what the hand-tracking provider hands us once per
//! frame. Observations inside it are raw: the landmark vector may have any
//! length until it is validated into a [`HandLandmarks`].

use crate::{constants::NUM_HAND_LANDMARKS, Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// One tracked skeletal point, normalized to the detection surface
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LandmarkPoint {
    /// Horizontal position in [0, 1]
    pub x: f64,
    /// Vertical position in [0, 1], growing downwards
    pub y: f64,
    /// Relative depth
    #[serde(default)]
    pub z: f64,
}

impl LandmarkPoint {
    /// Create a new landmark point
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Hand identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Hand {
    /// Left hand
    Left,
    /// Right hand; also assumed when the provider omits the label
    #[default]
    Right,
}

impl Hand {
    /// Both identities, left first
    pub const BOTH: [Self; 2] = [Self::Left, Self::Right];

    /// The opposite identity
    #[must_use]
    pub const fn mirrored(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Label as reported by the provider
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One hand as reported upstream for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandObservation {
    /// Raw landmark list; 21 entries when well formed
    pub landmarks: Vec<LandmarkPoint>,
    /// Raw handedness label
    #[serde(default)]
    pub handedness: Hand,
}

impl HandObservation {
    /// Create an observation from raw parts
    #[must_use]
    pub fn new(landmarks: Vec<LandmarkPoint>, handedness: Hand) -> Self {
        Self { landmarks, handedness }
    }
}

/// All hands seen in one frame tick
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DetectionSnapshot {
    /// Zero, one or two observations in no particular order
    #[serde(default)]
    pub hands: Vec<HandObservation>,
    /// Detection surface size in pixels, when the provider reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<(u32, u32)>,
}

impl DetectionSnapshot {
    /// Snapshot with the given hands and no surface override
    #[must_use]
    pub fn new(hands: Vec<HandObservation>) -> Self {
        Self { hands, surface: None }
    }

    /// Snapshot with no hands
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether no hand was observed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }
}

/// A validated set of exactly 21 finite landmarks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandLandmarks([LandmarkPoint; NUM_HAND_LANDMARKS]);

impl HandLandmarks {
    /// Validate a raw landmark slice
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedHand`] if the slice does not hold exactly 21
    /// points or any coordinate is not finite
    pub fn new(points: &[LandmarkPoint]) -> Result<Self> {
        let array: [LandmarkPoint; NUM_HAND_LANDMARKS] = points.try_into().map_err(|_| {
            Error::MalformedHand(format!(
                "expected {NUM_HAND_LANDMARKS} landmarks, got {}",
                points.len()
            ))
        })?;

        if let Some(index) = array.iter().position(|p| !p.is_finite()) {
            return Err(Error::MalformedHand(format!(
                "landmark {index} has a non-finite coordinate"
            )));
        }

        Ok(Self(array))
    }

    /// All points in topology order
    #[must_use]
    pub const fn points(&self) -> &[LandmarkPoint; NUM_HAND_LANDMARKS] {
        &self.0
    }
}

impl Index<usize> for HandLandmarks {
    type Output = LandmarkPoint;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl TryFrom<&[LandmarkPoint]> for HandLandmarks {
    type Error = Error;

    fn try_from(points: &[LandmarkPoint]) -> Result<Self> {
        Self::new(points)
    }
}

/// A hand that passed validation and mirroring, ready for classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedHand {
    /// Effective identity
    pub hand: Hand,
    /// Effective landmarks
    pub landmarks: HandLandmarks,
}
