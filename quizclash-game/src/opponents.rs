//! Simulated-opponent pressure.
//!
//! There is no real multiplayer: every few seconds each non-current player
//! gains a small random score bump so the live rankings keep moving.

use crate::player::Player;
use crate::rankings::sort_by_score_desc;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Interval between opponent-simulation ticks, in seconds.
pub const SIM_TICK_SECS: u32 = 3;

/// Upper bound (exclusive) of the per-tick score bump.
const MAX_BUMP: u32 = 50;

/// Deterministic per-session RNG, seeded from the room code.
#[must_use]
pub fn session_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Apply one simulation tick: bump every opponent's score by 0..50 and
/// re-sort the rankings.
pub fn perturb_opponents<R: Rng + ?Sized>(players: &mut [Player], rng: &mut R) {
    for player in players.iter_mut().filter(|p| !p.is_current_user) {
        player.score += rng.gen_range(0..MAX_BUMP);
    }
    sort_by_score_desc(players);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::seed_roster;
    use crate::session::BattleMode;

    #[test]
    fn current_user_score_is_never_touched() {
        let mut players = seed_roster(BattleMode::Group);
        players[0].score = 500;
        let mut rng = session_rng(1337);
        for _ in 0..20 {
            perturb_opponents(&mut players, &mut rng);
        }
        let you = players.iter().find(|p| p.is_current_user).unwrap();
        assert_eq!(you.score, 500);
    }

    #[test]
    fn rankings_stay_sorted_after_every_tick() {
        let mut players = seed_roster(BattleMode::Group);
        let mut rng = session_rng(7);
        for _ in 0..10 {
            perturb_opponents(&mut players, &mut rng);
            assert!(players.windows(2).all(|w| w[0].score >= w[1].score));
        }
    }

    #[test]
    fn same_seed_replays_the_same_pressure() {
        let mut a = seed_roster(BattleMode::Group);
        let mut b = seed_roster(BattleMode::Group);
        let mut rng_a = session_rng(42);
        let mut rng_b = session_rng(42);
        for _ in 0..5 {
            perturb_opponents(&mut a, &mut rng_a);
            perturb_opponents(&mut b, &mut rng_b);
        }
        assert_eq!(a, b);
    }
}
