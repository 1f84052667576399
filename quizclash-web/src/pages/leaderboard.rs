use crate::components::avatar::Avatar;
use quizclash_game::catalog;
use yew::prelude::*;

/// Global leaderboard over the embedded catalog. Purely presentational;
/// battle results never feed back into it.
#[function_component(LeaderboardPage)]
pub fn leaderboard_page() -> Html {
    let board = &catalog().global_leaderboard;
    let (podium, rest) = board.split_at(board.len().min(3));

    html! {
        <div class="leaderboard-page" data-testid="leaderboard-page">
            <div class="screen-heading">
                <h1>{ "Global Leaderboard" }</h1>
                <p class="muted">{ "The best QuizClash players, all time." }</p>
            </div>

            <section class="podium">
                <div class="podium-row">
                    { for podium.iter().map(|entry| html! {
                        <div key={entry.rank} class={format!("podium-step podium-{}", entry.rank)}>
                            <Avatar name={entry.name.clone()} src={Some(AttrValue::from(entry.avatar.clone()))} size="lg" />
                            <div class="podium-name">{ &entry.name }</div>
                            <div class="muted">{ format!("{} pts", entry.score) }</div>
                            <div class="podium-rank">{ format!("#{}", entry.rank) }</div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="card">
                <table class="leaderboard-table">
                    <thead>
                        <tr>
                            <th>{ "Rank" }</th>
                            <th>{ "Player" }</th>
                            <th>{ "Score" }</th>
                            <th>{ "Quizzes" }</th>
                            <th>{ "Win Rate" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for rest.iter().map(|entry| html! {
                            <tr key={entry.rank}>
                                <td>{ entry.rank }</td>
                                <td class="player-cell">
                                    <Avatar name={entry.name.clone()} src={Some(AttrValue::from(entry.avatar.clone()))} size="sm" />
                                    { &entry.name }
                                </td>
                                <td>{ entry.score }</td>
                                <td>{ entry.quizzes_played }</td>
                                <td>{ format!("{}%", entry.win_rate) }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn leaderboard_splits_podium_from_table() {
        let html = block_on(LocalServerRenderer::<LeaderboardPage>::new().render());
        assert!(html.contains("Global Leaderboard"));
        // Top three on the podium, the rest in the table.
        assert!(html.contains("QuizWhiz"));
        assert!(html.contains("TriviaTitan"));
        assert!(html.contains("NightOwl"));
        assert!(html.contains("82%"));
    }
}
