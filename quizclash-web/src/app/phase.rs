/// Screens of the battle flow. Owned by the battle page; the rest of the
/// app navigates by route instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattlePhase {
    Lobby,
    Active,
    Results,
}

/// Legal moves between battle screens. Cancel and return-home leave the
/// flow entirely and are handled by navigation, not by a phase change.
#[must_use]
pub const fn is_transition_allowed(current: BattlePhase, next: BattlePhase) -> bool {
    match current {
        BattlePhase::Lobby => matches!(next, BattlePhase::Active),
        BattlePhase::Active => matches!(next, BattlePhase::Results),
        // Rematch restarts the flow from the lobby.
        BattlePhase::Results => matches!(next, BattlePhase::Lobby),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_moves_forward_only() {
        assert!(is_transition_allowed(BattlePhase::Lobby, BattlePhase::Active));
        assert!(is_transition_allowed(
            BattlePhase::Active,
            BattlePhase::Results
        ));
        assert!(!is_transition_allowed(
            BattlePhase::Lobby,
            BattlePhase::Results
        ));
        assert!(!is_transition_allowed(
            BattlePhase::Active,
            BattlePhase::Lobby
        ));
    }

    #[test]
    fn rematch_goes_back_to_lobby() {
        assert!(is_transition_allowed(
            BattlePhase::Results,
            BattlePhase::Lobby
        ));
        assert!(!is_transition_allowed(
            BattlePhase::Results,
            BattlePhase::Active
        ));
    }
}
