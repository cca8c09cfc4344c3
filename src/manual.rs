//! Keyboard and button fallbacks for when no camera is available.

use crate::{
    command::{Command, SkipDirection, Trigger},
    config::GestureConfig,
    constants::MANUAL_VOLUME_STEP,
    media::MediaSnapshot,
};

/// A manually requested action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualTrigger {
    /// Play when paused, pause otherwise
    TogglePlayback,
    /// Skip back
    SkipBack,
    /// Skip forward
    SkipForward,
    /// Raise the volume one step
    VolumeUp,
    /// Lower the volume one step
    VolumeDown,
    /// Enter or leave fullscreen
    ToggleFullscreen,
}

impl ManualTrigger {
    /// Map a DOM-style key name to a trigger
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            " " | "Space" => Some(Self::TogglePlayback),
            "ArrowLeft" => Some(Self::SkipBack),
            "ArrowRight" => Some(Self::SkipForward),
            "ArrowUp" => Some(Self::VolumeUp),
            "ArrowDown" => Some(Self::VolumeDown),
            "f" | "F" => Some(Self::ToggleFullscreen),
            _ => None,
        }
    }

    /// The command this trigger produces against the current media state.
    ///
    /// Skips use the same step as a double tap.
    #[must_use]
    pub fn command(self, media: &MediaSnapshot, config: &GestureConfig) -> Command {
        let step = config.coarse_seek_seconds;
        match self {
            Self::TogglePlayback if media.paused => Command::Play(Trigger::Manual),
            Self::TogglePlayback => Command::Pause(Trigger::Manual),
            Self::SkipBack => Command::Skip {
                direction: SkipDirection::Back,
                step,
                position: media.clamp_time(media.current_time - step),
            },
            Self::SkipForward => Command::Skip {
                direction: SkipDirection::Forward,
                step,
                position: media.clamp_time(media.current_time + step),
            },
            Self::VolumeUp => Command::SetVolume((media.volume + MANUAL_VOLUME_STEP).clamp(0.0, 1.0)),
            Self::VolumeDown => Command::SetVolume((media.volume - MANUAL_VOLUME_STEP).clamp(0.0, 1.0)),
            Self::ToggleFullscreen => Command::ToggleFullscreen(Trigger::Manual),
        }
    }
}
