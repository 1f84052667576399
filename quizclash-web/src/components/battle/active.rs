use crate::components::avatar::Avatar;
use crate::components::badge::Badge;
use crate::components::progress::ProgressBar;
use gloo::timers::callback::{Interval, Timeout};
use quizclash_game::{
    ActiveBattle, BattleConfig, BattleMode, BattleOutcome, FEEDBACK_DELAY_MS, Player, RoundPhase,
    SIM_TICK_SECS, question_pack,
};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ActiveBattleViewProps {
    pub config: BattleConfig,
    pub players: Vec<Player>,
    /// Fired exactly once when the last question has been answered,
    /// carrying the outcome and the final roster.
    pub on_complete: Callback<(BattleOutcome, Vec<Player>)>,
}

pub enum BattleAction {
    Select(usize),
    Submit,
    Tick,
    Advance,
    SimTick,
}

#[derive(Clone)]
struct BattleModel {
    battle: Option<ActiveBattle>,
    outcome: Option<BattleOutcome>,
}

impl BattleModel {
    fn start(config: &BattleConfig, players: &[Player]) -> Self {
        let questions = question_pack().take(config.total_questions);
        match ActiveBattle::new(questions, players.to_vec(), config) {
            Ok(battle) => Self {
                battle: Some(battle),
                outcome: None,
            },
            Err(err) => {
                log::error!("Failed to start battle session: {err}");
                Self {
                    battle: None,
                    outcome: None,
                }
            }
        }
    }
}

impl Reducible for BattleModel {
    type Action = BattleAction;

    fn reduce(self: Rc<Self>, action: BattleAction) -> Rc<Self> {
        let mut next = (*self).clone();
        if let Some(battle) = next.battle.as_mut() {
            match action {
                BattleAction::Select(index) => {
                    if let Err(err) = battle.select(index) {
                        log::error!("Rejected answer selection: {err}");
                    }
                }
                BattleAction::Submit => battle.submit(),
                BattleAction::Tick => {
                    battle.tick();
                }
                BattleAction::Advance => {
                    if let Some(outcome) = battle.advance() {
                        next.outcome = Some(outcome);
                    }
                }
                BattleAction::SimTick => battle.simulate_opponents(),
            }
        }
        Rc::new(next)
    }
}

/// The live question screen: question clock, live rankings, answer grid,
/// and feedback banner. All timers are cancelled on teardown.
#[function_component(ActiveBattleView)]
pub fn active_battle_view(props: &ActiveBattleViewProps) -> Html {
    let model = {
        let config = props.config.clone();
        let players = props.players.clone();
        use_reducer(move || BattleModel::start(&config, &players))
    };

    // Question clock: one shot per second while awaiting an answer. The
    // machine auto-submits when the clock hits zero.
    {
        let dispatch = model.dispatcher();
        let key = model.battle.as_ref().map(|b| {
            (
                b.question_number(),
                b.time_left(),
                b.phase() == RoundPhase::Awaiting,
            )
        });
        use_effect_with(key, move |key| {
            let timer = matches!(key, Some((_, _, true)))
                .then(|| Timeout::new(1_000, move || dispatch.dispatch(BattleAction::Tick)));
            move || drop(timer)
        });
    }

    // Fixed delay after feedback before the next question (or completion).
    {
        let dispatch = model.dispatcher();
        let key = model.battle.as_ref().map(|b| {
            (
                b.question_number(),
                matches!(b.phase(), RoundPhase::Feedback { .. }),
            )
        });
        use_effect_with(key, move |key| {
            let timer = matches!(key, Some((_, true))).then(|| {
                Timeout::new(FEEDBACK_DELAY_MS, move || {
                    dispatch.dispatch(BattleAction::Advance);
                })
            });
            move || drop(timer)
        });
    }

    // Simulated opponents keep scoring every few seconds for the whole
    // session; this is illusion, not multiplayer.
    {
        let dispatch = model.dispatcher();
        use_effect_with((), move |()| {
            let interval = Interval::new(SIM_TICK_SECS * 1_000, move || {
                dispatch.dispatch(BattleAction::SimTick);
            });
            move || drop(interval)
        });
    }

    // Report completion to the parent exactly once.
    {
        let on_complete = props.on_complete.clone();
        let payload = model.outcome.map(|outcome| {
            let players = model
                .battle
                .as_ref()
                .map(|b| b.rankings().to_vec())
                .unwrap_or_default();
            (outcome, players)
        });
        use_effect_with(model.outcome, move |_| {
            if let Some(payload) = payload {
                on_complete.emit(payload);
            }
        });
    }

    let Some(battle) = model.battle.as_ref() else {
        return html! {
            <div class="card error-card">{ "Unable to start the battle. Please try again." }</div>
        };
    };

    let question = battle.current_question();
    let feedback = match battle.phase() {
        RoundPhase::Feedback { correct } => Some(correct),
        RoundPhase::Awaiting | RoundPhase::Complete => None,
    };

    let submit = {
        let dispatch = model.dispatcher();
        Callback::from(move |_: MouseEvent| dispatch.dispatch(BattleAction::Submit))
    };

    let options = question.options.iter().enumerate().map(|(index, option)| {
        let selected = battle.selected() == Some(index);
        let mut class = String::from("option");
        if selected {
            class.push_str(" selected");
        }
        if feedback.is_some() {
            if index == question.correct {
                class.push_str(" option-correct");
            } else if selected {
                class.push_str(" option-wrong");
            }
        }
        let onclick = {
            let dispatch = model.dispatcher();
            Callback::from(move |_: MouseEvent| dispatch.dispatch(BattleAction::Select(index)))
        };
        let letter = char::from(b'A' + u8::try_from(index).unwrap_or(0));
        html! {
            <button key={index} {class} {onclick}>
                <span class="option-letter">{ letter }</span>
                <span>{ option.clone() }</span>
                if feedback.is_some() && index == question.correct {
                    <span class="option-mark">{ "✓" }</span>
                } else if feedback.is_some() && selected {
                    <span class="option-mark">{ "✗" }</span>
                }
            </button>
        }
    });

    html! {
        <div class="active-battle" data-testid="active-battle">
            <div class="battle-progress">
                <span>{ format!("Question {} of {}", battle.question_number(), battle.total_questions()) }</span>
                <span class="clock">{ format!("{}s", battle.time_left()) }</span>
            </div>
            <ProgressBar value={battle.progress_percent()} />

            if props.config.mode == BattleMode::Group {
                <section class="live-rankings">
                    <h3>{ "Live Rankings" }</h3>
                    <div class="ranking-strip">
                        { for battle.rankings().iter().take(5).enumerate().map(|(index, player)| html! {
                            <div key={player.id.clone()} class={if player.is_current_user { "ranking-tile current" } else { "ranking-tile" }}>
                                <Avatar name={player.name.clone()} src={player.avatar.clone().map(AttrValue::from)} size="sm" />
                                <span class="ranking-pos">{ index + 1 }</span>
                                <span class="ranking-name">{ &player.name }</span>
                                <span class="ranking-pts">{ format!("{} pts", player.score) }</span>
                            </div>
                        }) }
                    </div>
                </section>
            }

            <section class="card question-card">
                <div class="question-text">{ &question.text }</div>
                <div class="option-grid">
                    { for options }
                </div>
            </section>

            <div class="battle-footer">
                <div class="score-block">
                    <span class="muted">{ "Score" }</span>
                    <span class="score">{ battle.score() }</span>
                    if battle.streak() > 1 {
                        <Badge label={format!("{}x Streak!", battle.streak())} variant="warning" />
                    }
                </div>
                <button
                    class="btn btn-primary"
                    disabled={battle.selected().is_none() || feedback.is_some()}
                    onclick={submit}
                >
                    { "Submit Answer" }
                </button>
            </div>

            if let Some(correct) = feedback {
                <div class={if correct { "feedback feedback-correct" } else { "feedback feedback-wrong" }}>
                    if correct {
                        { format!(
                            "Correct!{}",
                            if battle.streak() > 1 {
                                format!(" {}x streak bonus!", battle.streak())
                            } else {
                                String::new()
                            }
                        ) }
                    } else {
                        { format!(
                            "Incorrect! The correct answer was {}",
                            question.options[question.correct]
                        ) }
                    }
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use quizclash_game::seed_roster;
    use yew::LocalServerRenderer;

    fn props() -> ActiveBattleViewProps {
        let config = BattleConfig::default();
        let players = seed_roster(config.mode);
        ActiveBattleViewProps {
            config,
            players,
            on_complete: Callback::noop(),
        }
    }

    #[test]
    fn first_question_renders_with_full_clock() {
        let html = block_on(LocalServerRenderer::<ActiveBattleView>::with_props(props()).render());
        assert!(html.contains("Question 1 of 10"));
        assert!(html.contains("15s"));
        assert!(html.contains("What is the capital of France?"));
        for option in ["London", "Berlin", "Paris", "Madrid"] {
            assert!(html.contains(option), "missing option {option}");
        }
        // Nothing selected yet, so submit is locked.
        assert!(html.contains("disabled"));
        assert!(html.contains("Live Rankings"));
    }

    #[test]
    fn one_v_one_hides_live_rankings() {
        let config = BattleConfig {
            mode: quizclash_game::BattleMode::OneVsOne,
            ..BattleConfig::default()
        };
        let players = seed_roster(config.mode);
        let html = block_on(
            LocalServerRenderer::<ActiveBattleView>::with_props(ActiveBattleViewProps {
                config,
                players,
                on_complete: Callback::noop(),
            })
            .render(),
        );
        assert!(!html.contains("Live Rankings"));
    }
}
