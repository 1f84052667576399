//! Ranking helpers shared by the live battle and the results screen.

use crate::player::Player;

/// Sort players by score, highest first. `sort_by` is stable, so tied
/// players keep their relative order.
pub fn sort_by_score_desc(players: &mut [Player]) {
    players.sort_by(|a, b| b.score.cmp(&a.score));
}

/// 1-based rank of the current user within an already-sorted slice.
#[must_use]
pub fn rank_of_current(players: &[Player]) -> Option<usize> {
    players
        .iter()
        .position(|p| p.is_current_user)
        .map(|idx| idx + 1)
}

/// Top three of an already-sorted slice.
#[must_use]
pub fn podium(players: &[Player]) -> &[Player] {
    &players[..players.len().min(3)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, score: u32) -> Player {
        let mut p = Player::new(name, name);
        p.score = score;
        p
    }

    #[test]
    fn sorts_descending_and_keeps_tie_order() {
        let mut players = vec![player("a", 10), player("b", 30), player("c", 10)];
        sort_by_score_desc(&mut players);
        let names: Vec<_> = players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn rank_of_current_is_one_based() {
        let mut players = vec![player("a", 50), player("b", 80)];
        players[0].is_current_user = true;
        sort_by_score_desc(&mut players);
        assert_eq!(rank_of_current(&players), Some(2));
    }

    #[test]
    fn podium_clamps_to_roster_size() {
        let players = vec![player("a", 3), player("b", 2)];
        assert_eq!(podium(&players).len(), 2);
        let five: Vec<_> = (0..5).map(|i| player("x", i)).collect();
        assert_eq!(podium(&five).len(), 3);
    }
}
