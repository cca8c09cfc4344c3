//! Controller tying the gesture engine to its collaborators.

use crate::{
    command::Command,
    config::Config,
    evaluator::GestureEngine,
    manual::ManualTrigger,
    media::{MediaTarget, NotificationSink},
    source::{LandmarkSource, TimedSnapshot},
};
use log::{debug, info};

/// Totals from a [`GestureController::run`] pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Snapshots consumed
    pub frames: usize,
    /// Commands applied to the media target
    pub commands: usize,
}

/// Reactive controller: one call per detection result
pub struct GestureController<M, N> {
    engine: GestureEngine,
    media: Option<M>,
    notifier: N,
    notifications: bool,
}

impl<M: MediaTarget, N: NotificationSink> GestureController<M, N> {
    /// Create a controller from configuration
    pub fn new(config: &Config, media: Option<M>, notifier: N) -> Self {
        let mut engine = GestureEngine::new(config.gestures.clone(), config.surface);
        engine.set_enabled(config.controller.enabled);
        Self {
            engine,
            media,
            notifier,
            notifications: config.controller.notifications,
        }
    }

    /// Bind a media target, returning the previous one
    pub fn attach_media(&mut self, media: M) -> Option<M> {
        info!("Media target attached");
        self.media.replace(media)
    }

    /// Unbind the media target
    pub fn detach_media(&mut self) -> Option<M> {
        self.media.take()
    }

    /// Bound media target
    pub fn media(&self) -> Option<&M> {
        self.media.as_ref()
    }

    /// Notification sink
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Underlying engine
    pub fn engine(&self) -> &GestureEngine {
        &self.engine
    }

    /// Process one detection result and apply the resulting commands
    pub fn on_frame(&mut self, frame: &TimedSnapshot) -> Vec<Command> {
        let snapshot = self.media.as_ref().map(MediaTarget::snapshot);
        let commands = self
            .engine
            .process_frame(&frame.snapshot, snapshot.as_ref(), frame.timestamp_ms);
        for command in &commands {
            self.dispatch(command);
        }
        commands
    }

    /// Enable switch. Notifies only on an actual transition.
    pub fn toggle_gestures(&mut self, enabled: bool) {
        if self.engine.set_enabled(enabled) && self.notifications {
            if enabled {
                self.notifier.show("Gestures Enabled", "✅");
            } else {
                self.notifier.show("Gestures Disabled", "❌");
            }
        }
    }

    /// Whether gestures are currently processed
    pub fn is_enabled(&self) -> bool {
        self.engine.is_enabled()
    }

    /// Apply a keyboard or button fallback. Ignored while disabled or unbound.
    pub fn trigger_manual(&mut self, trigger: ManualTrigger) -> Option<Command> {
        if !self.engine.is_enabled() {
            return None;
        }
        let command = trigger.command(&self.media.as_ref()?.snapshot(), self.engine.config());
        debug!("Manual trigger {:?} -> {:?}", trigger, command);
        self.dispatch(&command);
        Some(command)
    }

    /// Drain a source, processing every snapshot in order
    pub fn run<S: LandmarkSource>(&mut self, source: &mut S) -> RunSummary {
        let mut summary = RunSummary::default();
        while let Some(frame) = source.next_snapshot() {
            summary.frames += 1;
            summary.commands += self.on_frame(&frame).len();
        }
        info!(
            "Processed {} frames, applied {} commands",
            summary.frames, summary.commands
        );
        summary
    }

    fn dispatch(&mut self, command: &Command) {
        if let Some(media) = self.media.as_mut() {
            media.apply(command);
        }
        if self.notifications {
            let notification = command.notification();
            self.notifier.show(&notification.message, notification.icon);
        }
    }
}
