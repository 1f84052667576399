use crate::components::avatar::Avatar;
use crate::components::badge::Badge;
use crate::components::confetti::Confetti;
use quizclash_game::{
    BattleMode, BattleSummary, Player, ResultsConfig, placement_label, podium,
};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct BattleResultsProps {
    pub mode: BattleMode,
    pub players: Vec<Player>,
    pub total_questions: usize,
    pub on_rematch: Callback<()>,
    pub on_return_home: Callback<()>,
}

/// Read-only presentation over the final roster. All numbers are derived
/// once via [`BattleSummary`]; nothing here mutates battle state.
#[function_component(BattleResults)]
pub fn battle_results(props: &BattleResultsProps) -> Html {
    let summary = BattleSummary::from_players(&props.players, &ResultsConfig::default());

    let on_return_home = {
        let cb = props.on_return_home.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_rematch = {
        let cb = props.on_rematch.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let headline = if summary.is_winner {
        "Congratulations! You won the battle!".to_string()
    } else {
        summary.rank.map_or_else(
            || "Battle over".to_string(),
            |rank| format!("You placed {} in the battle", placement_label(rank)),
        )
    };

    html! {
        <div class="battle-results" data-testid="battle-results">
            if summary.celebrate {
                <Confetti />
            }
            <div class="screen-heading">
                <h1>{ "Battle Results" }</h1>
                <p class="muted">{ headline }</p>
            </div>

            if props.mode == BattleMode::Group {
                <section class="podium">
                    <h2>{ "Podium" }</h2>
                    <div class="podium-row">
                        { for podium(&summary.players).iter().enumerate().map(|(index, player)| html! {
                            <div key={player.id.clone()} class={format!("podium-step podium-{}", index + 1)}>
                                <Avatar name={player.name.clone()} src={player.avatar.clone().map(AttrValue::from)} size="lg" />
                                <div class="podium-name">{ &player.name }</div>
                                <div class="muted">{ format!("{} pts", player.score) }</div>
                                <div class="podium-rank">{ format!("#{}", index + 1) }</div>
                                if player.is_current_user {
                                    <Badge label="You" variant="warning" />
                                }
                            </div>
                        }) }
                    </div>
                </section>
            }

            <section class="card">
                <h2>{ "Final Rankings" }</h2>
                <p class="muted">
                    {
                        match props.mode {
                            BattleMode::OneVsOne => "You vs your opponent".to_string(),
                            BattleMode::Group => format!("All {} players ranked by score", summary.players.len()),
                        }
                    }
                </p>
                <ol class="ranking-list">
                    { for summary.players.iter().enumerate().map(|(index, player)| html! {
                        <li key={player.id.clone()} class={if player.is_current_user { "ranking-row current" } else { "ranking-row" }}>
                            <span class="ranking-pos">{ index + 1 }</span>
                            <Avatar name={player.name.clone()} src={player.avatar.clone().map(AttrValue::from)} size="sm" />
                            <span class="ranking-name">{ &player.name }</span>
                            <span class="muted">{ format!("{} correct", player.correct) }</span>
                            <span class="ranking-pts">{ player.score }</span>
                        </li>
                    }) }
                </ol>
                <div class="card-actions">
                    <button class="btn btn-outline" onclick={on_return_home}>{ "Return Home" }</button>
                    <button class="btn btn-primary" onclick={on_rematch}>{ "Rematch" }</button>
                </div>
            </section>

            <section class="card performance-card">
                <h2>{ "Your Performance" }</h2>
                <dl>
                    <dt>{ "Final Score" }</dt>
                    <dd class="score">{ summary.score }</dd>
                    <dt>{ "Correct Answers" }</dt>
                    <dd>{ format!("{}/{}", summary.correct, props.total_questions) }</dd>
                    <dt>{ "Final Streak" }</dt>
                    <dd>{ summary.streak }</dd>
                    <dt>{ "Final Rank" }</dt>
                    <dd>{ summary.rank.map_or_else(|| "-".to_string(), |r| format!("#{r}")) }</dd>
                </dl>
            </section>

            <section class="card rewards-card">
                <h2>{ "Rewards Earned" }</h2>
                <ul>
                    <li>{ format!("XP Points +{}", summary.rewards.xp) }</li>
                    <li>{ format!("Battle Coins +{}", summary.rewards.coins) }</li>
                    if summary.victory_badge {
                        <li>{ "Victory Badge — Unlocked" }</li>
                    }
                    if summary.streak_badge {
                        <li>{ "Streak Master — Unlocked" }</li>
                    }
                </ul>
            </section>
        </div>
    }
}
