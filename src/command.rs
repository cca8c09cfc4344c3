//! Commands emitted by the gesture engine and their user-facing notifications.

use crate::landmarks::Hand;

/// What caused a discrete playback command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Two fists held at once
    BothFists,
    /// A single open hand
    OpenHand(Hand),
    /// A keyboard or button fallback
    Manual,
}

/// Direction of a coarse seek
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipDirection {
    /// Towards the start of the media
    Back,
    /// Towards the end of the media
    Forward,
}

/// One instruction for the media target.
///
/// Numeric payloads are absolute and already clamped to the target's range,
/// except that a [`Command::Skip`] is applied relative to the playhead the
/// target holds when it receives it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Start playback
    Play(Trigger),
    /// Pause playback
    Pause(Trigger),
    /// Enter or leave fullscreen
    ToggleFullscreen(Trigger),
    /// Set the volume, in [0, 1]
    SetVolume(f64),
    /// Move the playhead continuously while dragging, in seconds
    Scrub(f64),
    /// Jump the playhead by a fixed step
    Skip {
        /// Jump direction
        direction: SkipDirection,
        /// Step size in seconds
        step: f64,
        /// Playhead position after the jump, as seen from the frame's media state
        position: f64,
    },
}

impl Command {
    /// Whether the command is cooldown-gated when produced by a gesture
    #[must_use]
    pub const fn is_discrete(&self) -> bool {
        !matches!(self, Self::SetVolume(_) | Self::Scrub(_))
    }

    /// Message and icon to show the user
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Rounded display values
    pub fn notification(&self) -> Notification {
        match *self {
            Self::Play(trigger) => Notification::new(format!("{}Play", trigger_prefix(trigger)), "▶️"),
            Self::Pause(trigger) => Notification::new(format!("{}Pause", trigger_prefix(trigger)), "⏸️"),
            Self::ToggleFullscreen(Trigger::Manual) => Notification::new("Fullscreen", "⛶"),
            Self::ToggleFullscreen(_) => Notification::new("Fist → Fullscreen", "✊"),
            Self::SetVolume(volume) => {
                Notification::new(format!("Volume {}%", (volume * 100.0).round() as i64), "🔊")
            }
            Self::Scrub(position) => Notification::new(format!("Seek {}s", position.round() as i64), "⏩"),
            Self::Skip {
                direction: SkipDirection::Back,
                step,
                ..
            } => Notification::new(format!("-{step} Seconds"), "⏪"),
            Self::Skip {
                direction: SkipDirection::Forward,
                step,
                ..
            } => Notification::new(format!("+{step} Seconds"), "⏩"),
        }
    }
}

fn trigger_prefix(trigger: Trigger) -> String {
    match trigger {
        Trigger::BothFists => "Both Fists → ".to_string(),
        Trigger::OpenHand(hand) => format!("{hand} Open → "),
        Trigger::Manual => String::new(),
    }
}

/// A transient message for the notification sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Text shown to the user
    pub message: String,
    /// Single emoji icon
    pub icon: &'static str,
}

impl Notification {
    /// Create a notification
    pub fn new(message: impl Into<String>, icon: &'static str) -> Self {
        Self {
            message: message.into(),
            icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discrete_commands() {
        assert!(Command::Play(Trigger::BothFists).is_discrete());
        assert!(Command::ToggleFullscreen(Trigger::BothFists).is_discrete());
        assert!(Command::Skip {
            direction: SkipDirection::Back,
            step: 10.0,
            position: 0.0
        }
        .is_discrete());
        assert!(!Command::SetVolume(0.5).is_discrete());
        assert!(!Command::Scrub(12.0).is_discrete());
    }

    #[test]
    fn test_notification_messages() {
        assert_eq!(
            Command::Play(Trigger::BothFists).notification().message,
            "Both Fists → Play"
        );
        assert_eq!(
            Command::Pause(Trigger::OpenHand(Hand::Right)).notification().message,
            "Right Open → Pause"
        );
        assert_eq!(
            Command::Play(Trigger::OpenHand(Hand::Left)).notification().message,
            "Left Open → Play"
        );
        assert_eq!(Command::SetVolume(0.6).notification().message, "Volume 60%");
        assert_eq!(Command::Scrub(41.6).notification().message, "Seek 42s");

        let back = Command::Skip {
            direction: SkipDirection::Back,
            step: 10.0,
            position: 20.0,
        };
        assert_eq!(back.notification(), Notification::new("-10 Seconds", "⏪"));
    }
}
