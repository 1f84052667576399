use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/battle")]
    Battle,
    #[at("/daily-challenge")]
    DailyChallenge,
    #[at("/leaderboard")]
    Leaderboard,
    #[at("/categories")]
    Categories,
    #[at("/categories/:slug")]
    Category { slug: String },
    #[at("/quiz/:id")]
    Quiz { id: String },
    #[at("/support")]
    Support,
    #[at("/404")]
    #[not_found]
    NotFound,
}
