//! Pose classification from landmark geometry.

use crate::{
    constants::{FINGER_JOINTS, THUMB_IP, THUMB_TIP},
    landmarks::{Hand, HandLandmarks},
};

/// Discrete hand shape for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoseClass {
    /// All fingers and the thumb curled
    Fist,
    /// All fingers and the thumb extended
    OpenHand,
    /// Anything else
    Indeterminate,
}

/// Per-finger extension summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FingerState {
    /// Number of extended non-thumb fingers, 0..=4
    pub extended: u8,
    /// Whether the thumb is extended for this hand identity
    pub thumb_extended: bool,
}

/// Margins used by the classifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseClassifier {
    /// A fingertip must sit this far above its PIP joint to count as extended
    pub extension_margin: f64,
    /// Horizontal thumb tip offset past the IP joint to count as extended
    pub thumb_margin: f64,
}

impl PoseClassifier {
    /// Create a classifier with explicit margins
    #[must_use]
    pub const fn new(extension_margin: f64, thumb_margin: f64) -> Self {
        Self {
            extension_margin,
            thumb_margin,
        }
    }

    /// Count extended fingers and evaluate the thumb
    #[must_use]
    pub fn finger_state(&self, landmarks: &HandLandmarks, hand: Hand) -> FingerState {
        // Smaller y is higher on screen
        let extended = FINGER_JOINTS
            .iter()
            .filter(|&&(tip, pip)| landmarks[tip].y < landmarks[pip].y - self.extension_margin)
            .count() as u8;

        let tip = landmarks[THUMB_TIP].x;
        let ip = landmarks[THUMB_IP].x;
        let thumb_extended = match hand {
            Hand::Right => tip > ip + self.thumb_margin,
            Hand::Left => tip < ip - self.thumb_margin,
        };

        FingerState {
            extended,
            thumb_extended,
        }
    }

    /// Classify the pose of one hand
    #[must_use]
    pub fn classify(&self, landmarks: &HandLandmarks, hand: Hand) -> PoseClass {
        match self.finger_state(landmarks, hand) {
            FingerState {
                extended: 0,
                thumb_extended: false,
            } => PoseClass::Fist,
            FingerState {
                extended: 4,
                thumb_extended: true,
            } => PoseClass::OpenHand,
            _ => PoseClass::Indeterminate,
        }
    }
}

impl Default for PoseClassifier {
    fn default() -> Self {
        Self::new(
            crate::constants::DEFAULT_EXTENSION_MARGIN,
            crate::constants::DEFAULT_THUMB_MARGIN,
        )
    }
}
