//! Lobby readiness countdowns.

use serde::{Deserialize, Serialize};

/// Seconds until the battle may start regardless of readiness.
pub const START_COUNTDOWN_SECS: u32 = 15;
/// Seconds until the roster is reported as all-ready.
pub const READY_DELAY_SECS: u32 = 5;

/// Countdown state for the battle lobby. Driven by one tick per second from
/// the owning view; the all-ready flag flips on its own fixed delay,
/// independent of per-player readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LobbyState {
    countdown: u32,
    ready_in: u32,
}

impl Default for LobbyState {
    fn default() -> Self {
        Self {
            countdown: START_COUNTDOWN_SECS,
            ready_in: READY_DELAY_SECS,
        }
    }
}

impl LobbyState {
    /// Advance both countdowns by one second, clamped at zero.
    pub fn tick(&mut self) {
        self.countdown = self.countdown.saturating_sub(1);
        self.ready_in = self.ready_in.saturating_sub(1);
    }

    #[must_use]
    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    #[must_use]
    pub fn all_ready(&self) -> bool {
        self.ready_in == 0
    }

    /// The start action unlocks when the countdown expires or everyone is
    /// reported ready, whichever happens first.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.countdown == 0 || self.all_ready()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_locked_until_ready_or_expired() {
        let mut lobby = LobbyState::default();
        assert!(!lobby.can_start());
        assert!(!lobby.all_ready());

        // Ready flag flips after five seconds, well before the countdown ends.
        for _ in 0..READY_DELAY_SECS {
            lobby.tick();
        }
        assert!(lobby.all_ready());
        assert!(lobby.can_start());
        assert_eq!(lobby.countdown(), START_COUNTDOWN_SECS - READY_DELAY_SECS);
    }

    #[test]
    fn countdown_clamps_at_zero() {
        let mut lobby = LobbyState::default();
        for _ in 0..(START_COUNTDOWN_SECS + 10) {
            lobby.tick();
        }
        assert_eq!(lobby.countdown(), 0);
        assert!(lobby.can_start());
    }
}
