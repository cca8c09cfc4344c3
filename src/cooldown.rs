//! Shared cooldown for discrete actions.

/// Single clock gating every discrete action.
///
/// Continuous drag adjustments never consult it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooldownGovernor {
    cooldown_ms: u64,
    last_action_ms: Option<u64>,
}

impl CooldownGovernor {
    /// Create a governor that has never fired
    #[must_use]
    pub const fn new(cooldown_ms: u64) -> Self {
        Self {
            cooldown_ms,
            last_action_ms: None,
        }
    }

    /// Whether a discrete action may fire at `now_ms`
    #[must_use]
    pub fn elapsed(&self, now_ms: u64) -> bool {
        self.last_action_ms
            .map_or(true, |last| now_ms.saturating_sub(last) >= self.cooldown_ms)
    }

    /// Record that a discrete action fired at `now_ms`
    pub fn mark_fired(&mut self, now_ms: u64) {
        self.last_action_ms = Some(now_ms);
    }

    /// Time of the last discrete action, if any
    #[must_use]
    pub const fn last_action(&self) -> Option<u64> {
        self.last_action_ms
    }

    /// Configured cooldown length
    #[must_use]
    pub const fn cooldown_ms(&self) -> u64 {
        self.cooldown_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_governor_is_elapsed() {
        let governor = CooldownGovernor::new(1200);
        assert!(governor.elapsed(0));
        assert!(governor.last_action().is_none());
    }

    #[test]
    fn test_cooldown_window() {
        let mut governor = CooldownGovernor::new(1200);
        governor.mark_fired(5_000);
        assert!(!governor.elapsed(5_000));
        assert!(!governor.elapsed(6_199));
        assert!(governor.elapsed(6_200));
        assert_eq!(governor.last_action(), Some(5_000));
    }

    #[test]
    fn test_clock_going_backwards_keeps_cooldown_active() {
        let mut governor = CooldownGovernor::new(1200);
        governor.mark_fired(5_000);
        assert!(!governor.elapsed(4_000));
    }
}
