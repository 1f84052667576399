use crate::app::phase::{BattlePhase, is_transition_allowed};
use crate::components::battle::{ActiveBattleView, BattleLobby, BattleResults};
use quizclash_game::{
    BattleConfig, BattleOutcome, Player, Visibility, generate_room_code, seed_roster,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct BattlePageProps {
    /// Leave the battle flow entirely (cancel or return home).
    pub on_exit: Callback<()>,
}

fn clock_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0x5eed
    }
}

fn new_config() -> BattleConfig {
    // Wall-clock seeding is plenty for a mock room code.
    let mut rng = SmallRng::seed_from_u64(clock_seed());
    BattleConfig {
        visibility: Visibility::Private,
        room_code: Some(generate_room_code(&mut rng)),
        ..BattleConfig::default()
    }
}

/// Owns the whole battle flow: session config, roster, and the
/// lobby -> active -> results phase. All of it is discarded on exit.
#[function_component(BattlePage)]
pub fn battle_page(props: &BattlePageProps) -> Html {
    let phase = use_state(|| BattlePhase::Lobby);
    let config = use_state(new_config);
    let roster = {
        let config = config.clone();
        use_state(move || seed_roster(config.mode))
    };
    let finale = use_state(|| None::<(BattleOutcome, Vec<Player>)>);

    let on_start = {
        let phase = phase.clone();
        Callback::from(move |()| {
            if is_transition_allowed(*phase, BattlePhase::Active) {
                phase.set(BattlePhase::Active);
            }
        })
    };
    let on_complete = {
        let phase = phase.clone();
        let finale = finale.clone();
        Callback::from(move |payload: (BattleOutcome, Vec<Player>)| {
            if is_transition_allowed(*phase, BattlePhase::Results) {
                finale.set(Some(payload));
                phase.set(BattlePhase::Results);
            }
        })
    };
    let on_rematch = {
        let phase = phase.clone();
        let roster = roster.clone();
        let finale = finale.clone();
        let config = config.clone();
        Callback::from(move |()| {
            if is_transition_allowed(*phase, BattlePhase::Lobby) {
                // Same room, fresh roster and scores.
                roster.set(seed_roster(config.mode));
                finale.set(None);
                phase.set(BattlePhase::Lobby);
            }
        })
    };
    let on_exit = props.on_exit.clone();

    match *phase {
        BattlePhase::Lobby => html! {
            <BattleLobby
                config={(*config).clone()}
                players={(*roster).clone()}
                on_start={on_start}
                on_cancel={on_exit}
            />
        },
        BattlePhase::Active => html! {
            <ActiveBattleView
                config={(*config).clone()}
                players={(*roster).clone()}
                on_complete={on_complete}
            />
        },
        BattlePhase::Results => {
            let players = finale
                .as_ref()
                .map(|(_, players)| players.clone())
                .unwrap_or_else(|| (*roster).clone());
            html! {
                <BattleResults
                    mode={config.mode}
                    players={players}
                    total_questions={config.total_questions}
                    on_rematch={on_rematch}
                    on_return_home={on_exit.clone()}
                />
            }
        }
    }
}
