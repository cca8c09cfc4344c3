//! Per-frame gesture evaluation.
//!
//! The evaluator is a pure transition over an explicit [`EngineState`]:
//! given the previous state, one detection snapshot and a read-only view of
//! the media target, it returns the next state and the commands to apply.
//! [`GestureEngine`] wraps it with the enable switch.
//!
//! Rules, first match wins:
//! 1. two fists (one left, one right) → configured two-fist action
//! 2. one open hand → left plays, right pauses
//! 3. pinch pass for every hand that is not a fist; only the first
//!    observation of each identity reaches its tracker
//!
//! Rules 1 and 2 need an elapsed cooldown and no engaged pinch. A hand identity
//! missing from the snapshot loses its pinch without tap handling.

use crate::{
    command::{Command, Trigger},
    config::{FistPolicy, GestureConfig, SurfaceConfig, TwoFistAction},
    cooldown::CooldownGovernor,
    landmarks::{DetectionSnapshot, Hand, TrackedHand},
    media::MediaSnapshot,
    mirror::prepare_hands,
    pinch::{PinchMetrics, PinchTracker},
    pose::PoseClass,
};
use log::{debug, info};

/// All mutable gesture state, owned by one engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineState {
    left: PinchTracker,
    right: PinchTracker,
    cooldown: CooldownGovernor,
}

impl EngineState {
    /// Fresh state: no pinches, no pending taps, cooldown elapsed
    #[must_use]
    pub const fn new(config: &GestureConfig) -> Self {
        Self {
            left: PinchTracker::new(Hand::Left),
            right: PinchTracker::new(Hand::Right),
            cooldown: CooldownGovernor::new(config.discrete_cooldown_ms),
        }
    }

    /// Pinch tracker of one hand identity
    #[must_use]
    pub const fn tracker(&self, hand: Hand) -> &PinchTracker {
        match hand {
            Hand::Left => &self.left,
            Hand::Right => &self.right,
        }
    }

    fn tracker_mut(&mut self, hand: Hand) -> &mut PinchTracker {
        match hand {
            Hand::Left => &mut self.left,
            Hand::Right => &mut self.right,
        }
    }

    /// Shared discrete-action cooldown
    #[must_use]
    pub const fn cooldown(&self) -> &CooldownGovernor {
        &self.cooldown
    }

    /// Whether either hand holds a pinch
    #[must_use]
    pub const fn any_pinch_active(&self) -> bool {
        self.left.is_active() || self.right.is_active()
    }

    /// Drop both pinches and both pending taps
    pub fn release_all(&mut self) {
        self.left.reset();
        self.right.reset();
    }

    fn update_pinch(
        &mut self,
        hand: Hand,
        metrics: PinchMetrics,
        now_ms: u64,
        media: &MediaSnapshot,
        config: &GestureConfig,
    ) -> Option<Command> {
        let Self { left, right, cooldown } = self;
        let tracker = match hand {
            Hand::Left => left,
            Hand::Right => right,
        };
        tracker.update(metrics, now_ms, media, cooldown, config)
    }
}

/// Everything the evaluator reads for one frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Raw detection result
    pub snapshot: &'a DetectionSnapshot,
    /// Media target state at frame start; `None` when no target is bound
    pub media: Option<&'a MediaSnapshot>,
    /// Frame timestamp in milliseconds
    pub now_ms: u64,
    /// Surface size used when the snapshot does not carry one
    pub surface: SurfaceConfig,
}

/// Evaluate one frame.
///
/// Returns the next state and the commands to apply, in order. Without a
/// bound media target nothing changes.
#[must_use]
pub fn evaluate(state: &EngineState, config: &GestureConfig, frame: &Frame<'_>) -> (EngineState, Vec<Command>) {
    let mut next = *state;
    let Some(media) = frame.media else {
        return (next, Vec::new());
    };
    let now_ms = frame.now_ms;

    let hands = prepare_hands(frame.snapshot, config.mirror);
    for hand in Hand::BOTH {
        if !hands.iter().any(|tracked| tracked.hand == hand) {
            next.tracker_mut(hand).force_release();
        }
    }
    if hands.is_empty() {
        return (next, Vec::new());
    }

    let classifier = config.classifier();
    let classified: Vec<(TrackedHand, PoseClass)> = hands
        .into_iter()
        .map(|tracked| {
            let pose = classifier.classify(&tracked.landmarks, tracked.hand);
            (tracked, pose)
        })
        .collect();

    if !next.any_pinch_active() && next.cooldown.elapsed(now_ms) {
        if let Some(command) = discrete_gesture(&classified, config, media) {
            info!("Discrete gesture: {:?}", command);
            next.cooldown.mark_fired(now_ms);
            return (next, vec![command]);
        }
    }

    let (width, height) = frame
        .snapshot
        .surface
        .map_or_else(|| frame.surface.size(), |(w, h)| (f64::from(w), f64::from(h)));

    // One tracker transition per identity per frame
    let mut seen: Vec<Hand> = Vec::with_capacity(Hand::BOTH.len());
    let mut commands = Vec::new();
    for (tracked, pose) in &classified {
        if seen.contains(&tracked.hand) {
            debug!("Ignoring duplicate {} hand in pinch pass", tracked.hand);
            continue;
        }
        seen.push(tracked.hand);

        if *pose == PoseClass::Fist {
            if config.fist_policy == FistPolicy::Release {
                next.tracker_mut(tracked.hand).force_release();
            }
            continue;
        }
        let metrics = PinchMetrics::measure(&tracked.landmarks, width, height);
        if let Some(command) = next.update_pinch(tracked.hand, metrics, now_ms, media, config) {
            commands.push(command);
        }
    }

    (next, commands)
}

fn discrete_gesture(
    classified: &[(TrackedHand, PoseClass)],
    config: &GestureConfig,
    media: &MediaSnapshot,
) -> Option<Command> {
    match classified {
        [(a, PoseClass::Fist), (b, PoseClass::Fist)] if a.hand != b.hand => {
            Some(match config.two_fist_action {
                TwoFistAction::TogglePlayback if media.paused => Command::Play(Trigger::BothFists),
                TwoFistAction::TogglePlayback => Command::Pause(Trigger::BothFists),
                TwoFistAction::ToggleFullscreen => Command::ToggleFullscreen(Trigger::BothFists),
            })
        }
        [(single, PoseClass::OpenHand)] => Some(match single.hand {
            Hand::Left => Command::Play(Trigger::OpenHand(Hand::Left)),
            Hand::Right => Command::Pause(Trigger::OpenHand(Hand::Right)),
        }),
        _ => None,
    }
}

/// Gesture engine: evaluator state plus the enable switch
#[derive(Debug, Clone)]
pub struct GestureEngine {
    config: GestureConfig,
    surface: SurfaceConfig,
    state: EngineState,
    enabled: bool,
}

impl GestureEngine {
    /// Create an enabled engine
    #[must_use]
    pub fn new(config: GestureConfig, surface: SurfaceConfig) -> Self {
        let state = EngineState::new(&config);
        Self {
            config,
            surface,
            state,
            enabled: true,
        }
    }

    /// Process one detection snapshot taken at `now_ms`
    pub fn process_frame(
        &mut self,
        snapshot: &DetectionSnapshot,
        media: Option<&MediaSnapshot>,
        now_ms: u64,
    ) -> Vec<Command> {
        if !self.enabled {
            return Vec::new();
        }

        let frame = Frame {
            snapshot,
            media,
            now_ms,
            surface: self.surface,
        };
        let (next, commands) = evaluate(&self.state, &self.config, &frame);
        self.state = next;
        if !commands.is_empty() {
            debug!("Frame at {}ms produced {} command(s)", now_ms, commands.len());
        }
        commands
    }

    /// Turn gesture processing on or off. Returns whether the flag changed.
    ///
    /// Disabling drops every pinch and pending tap so that re-enabling never
    /// resumes a drag against a stale anchor.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        if self.enabled == enabled {
            return false;
        }
        if !enabled {
            self.state.release_all();
        }
        self.enabled = enabled;
        info!("Gestures {}", if enabled { "enabled" } else { "disabled" });
        true
    }

    /// Whether gesture processing is on
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current evaluator state
    #[must_use]
    pub const fn state(&self) -> &EngineState {
        &self.state
    }

    /// Gesture configuration in use
    #[must_use]
    pub const fn config(&self) -> &GestureConfig {
        &self.config
    }
}
