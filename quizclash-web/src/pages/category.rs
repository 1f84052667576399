use crate::components::badge::Badge;
use crate::paths::asset_path;
use crate::router::Route;
use quizclash_game::catalog;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct CategoryPageProps {
    pub slug: AttrValue,
    pub on_navigate: Callback<Route>,
}

/// One category's quiz listing. Unknown slugs render a not-found card
/// instead of routing away.
#[function_component(CategoryPage)]
pub fn category_page(props: &CategoryPageProps) -> Html {
    let cat = catalog();
    let Some(category) = cat.find_category(&props.slug) else {
        let back = {
            let on_navigate = props.on_navigate.clone();
            Callback::from(move |_: MouseEvent| on_navigate.emit(Route::Categories))
        };
        return html! {
            <div class="card error-card" data-testid="category-not-found">
                <h1>{ "Category Not Found" }</h1>
                <p class="muted">{ "That category doesn't exist or was removed." }</p>
                <button class="btn btn-primary" onclick={back}>{ "All Categories" }</button>
            </div>
        };
    };

    let quizzes: Vec<_> = cat
        .quizzes
        .iter()
        .filter(|quiz| quiz.category == category.name)
        .collect();

    html! {
        <div class="category-page" data-testid="category-page">
            <div class="screen-heading">
                <h1>{ format!("{} {}", category.icon, category.name) }</h1>
                <p class="muted">{ &category.description }</p>
            </div>
            if quizzes.is_empty() {
                <p class="muted">{ "No quizzes in this category yet. Check back soon!" }</p>
            } else {
                <div class="quiz-grid">
                    { for quizzes.iter().map(|quiz| {
                        let on_navigate = props.on_navigate.clone();
                        let route = Route::Quiz { id: quiz.id.clone() };
                        let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(route.clone()));
                        html! {
                            <button key={quiz.id.clone()} class="quiz-card" {onclick}>
                                <img src={asset_path(&quiz.image)} alt={quiz.title.clone()} />
                                <div class="quiz-card-body">
                                    <h2>{ &quiz.title }</h2>
                                    <Badge label={quiz.difficulty.clone()} />
                                    <span class="muted">
                                        { format!("{} questions · ★ {:.1}", quiz.questions, quiz.rating) }
                                    </span>
                                </div>
                            </button>
                        }
                    }) }
                </div>
            }
        </div>
    }
}
