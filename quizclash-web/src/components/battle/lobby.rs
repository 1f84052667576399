use crate::components::avatar::Avatar;
use crate::components::badge::Badge;
use crate::components::progress::ProgressBar;
use gloo::timers::callback::Timeout;
use quizclash_game::{BattleConfig, BattleMode, LobbyState, Player, Visibility};
use wasm_bindgen_futures::JsFuture;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct BattleLobbyProps {
    pub config: BattleConfig,
    pub players: Vec<Player>,
    pub on_start: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Pre-battle waiting room. Entirely pre-seeded: the countdown and the
/// all-ready flip run on fixed local timers, no server round-trip.
#[function_component(BattleLobby)]
pub fn battle_lobby(props: &BattleLobbyProps) -> Html {
    let lobby = use_state(LobbyState::default);
    let copied = use_state(|| false);

    // One-second cadence, re-armed per tick; dropped on teardown so an
    // unmounted lobby never updates state.
    {
        let lobby = lobby.clone();
        use_effect_with(*lobby, move |state| {
            let state = *state;
            let timer = (!(state.countdown() == 0 && state.all_ready())).then(|| {
                Timeout::new(1_000, move || {
                    let mut next = state;
                    next.tick();
                    lobby.set(next);
                })
            });
            move || drop(timer)
        });
    }

    // Reset the "copied" hint a couple of seconds after a copy.
    {
        let copied = copied.clone();
        use_effect_with(*copied, move |was_copied| {
            let timer = was_copied.then(|| Timeout::new(2_000, move || copied.set(false)));
            move || drop(timer)
        });
    }

    let copy_room_code = {
        let code = props.config.room_code.clone();
        let copied = copied.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(code) = code.clone() else { return };
            let Some(window) = web_sys::window() else {
                return;
            };
            let promise = window.navigator().clipboard().write_text(&code);
            let copied = copied.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if JsFuture::from(promise).await.is_ok() {
                    copied.set(true);
                }
            });
        })
    };

    let on_cancel = {
        let cb = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_start = {
        let cb = props.on_start.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let mode_label = match props.config.mode {
        BattleMode::OneVsOne => "1v1 Battle",
        BattleMode::Group => "Group Battle",
    };
    let countdown = lobby.countdown();
    let status = if countdown > 0 {
        format!("Battle starts in {countdown} seconds")
    } else {
        "Ready to start battle!".to_string()
    };
    let start_label = if countdown > 0 {
        format!("Starting in {countdown}s")
    } else {
        "Start Battle Now".to_string()
    };

    html! {
        <div class="battle-lobby" data-testid="battle-lobby">
            <div class="screen-heading">
                <h1>{ format!("{mode_label} Lobby") }</h1>
                <p class="muted">{ status }</p>
            </div>

            <section class="card">
                <h2>{ "Players" }</h2>
                <p class="muted">
                    {
                        match props.config.mode {
                            BattleMode::OneVsOne => "You and your opponent".to_string(),
                            BattleMode::Group => format!("{} players in the lobby", props.players.len()),
                        }
                    }
                </p>
                <div class="player-grid">
                    { for props.players.iter().map(|player| html! {
                        <div class="player-tile" key={player.id.clone()}>
                            <Avatar name={player.name.clone()} src={player.avatar.clone().map(AttrValue::from)} size="lg" />
                            <div class="player-name">{ &player.name }</div>
                            <Badge
                                label={if player.is_ready { "Ready" } else { "Waiting..." }}
                                variant={if player.is_ready { "default" } else { "outline" }}
                            />
                        </div>
                    }) }
                </div>
                <div class="card-actions">
                    <button class="btn btn-outline" onclick={on_cancel}>{ "Cancel" }</button>
                    <button class="btn btn-primary" disabled={!lobby.can_start()} onclick={on_start}>
                        { start_label }
                    </button>
                </div>
            </section>

            <section class="card settings-card">
                <h2>{ "Battle Settings" }</h2>
                <dl>
                    <dt>{ "Mode" }</dt>
                    <dd>{ mode_label }</dd>
                    <dt>{ "Type" }</dt>
                    <dd>
                        {
                            match props.config.visibility {
                                Visibility::Public => html! { "Public Match" },
                                Visibility::Private => html! {
                                    <>
                                        { "Private Room" }
                                        if let Some(code) = &props.config.room_code {
                                            <button class="btn btn-ghost room-code" onclick={copy_room_code}>
                                                { code.clone() }
                                                { if *copied { " ✓" } else { " ⧉" } }
                                            </button>
                                        }
                                    </>
                                },
                            }
                        }
                    </dd>
                    <dt>{ "Category" }</dt>
                    <dd>{ props.config.category.clone().unwrap_or_else(|| "Random".to_string()) }</dd>
                    <dt>{ "Difficulty" }</dt>
                    <dd>{ props.config.difficulty.to_string() }</dd>
                    <dt>{ "Questions" }</dt>
                    <dd>{ format!("{} questions", props.config.total_questions) }</dd>
                    <dt>{ "Time per question" }</dt>
                    <dd>{ format!("{} seconds", props.config.time_per_question) }</dd>
                </dl>
            </section>

            <section class="card rules-card">
                <h2>{ "Battle Rules" }</h2>
                <ul>
                    <li>{ "Answer quickly for bonus points" }</li>
                    <li>{ "No changing answers once submitted" }</li>
                    <li>{ "Win streaks earn bonus XP" }</li>
                </ul>
            </section>

            <div class="lobby-footer">
                <span>{ "Waiting for players..." }</span>
                <span>{ if lobby.all_ready() { "All players ready!" } else { "Getting ready..." } }</span>
                <ProgressBar value={if lobby.all_ready() { 100.0 } else { 66.0 }} />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use quizclash_game::seed_roster;
    use yew::LocalServerRenderer;

    #[test]
    fn lobby_lists_roster_and_settings() {
        let config = BattleConfig {
            visibility: Visibility::Private,
            room_code: Some("QC-COMET42".to_string()),
            ..BattleConfig::default()
        };
        let players = seed_roster(config.mode);
        let html = block_on(
            LocalServerRenderer::<BattleLobby>::with_props(BattleLobbyProps {
                config,
                players,
                on_start: Callback::noop(),
                on_cancel: Callback::noop(),
            })
            .render(),
        );
        assert!(html.contains("Group Battle Lobby"));
        assert!(html.contains("5 players in the lobby"));
        assert!(html.contains("QC-COMET42"));
        assert!(html.contains("Battle starts in 15 seconds"));
        assert!(html.contains("10 questions"));
        // Start stays locked on first render.
        assert!(html.contains("disabled"));
    }
}
