use crate::router::Route;
use quizclash_game::catalog;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct CategoriesPageProps {
    pub on_navigate: Callback<Route>,
}

#[function_component(CategoriesPage)]
pub fn categories_page(props: &CategoriesPageProps) -> Html {
    html! {
        <div class="categories-page" data-testid="categories-page">
            <div class="screen-heading">
                <h1>{ "Categories" }</h1>
                <p class="muted">{ "Pick a topic to find quizzes worth battling over." }</p>
            </div>
            <div class="category-grid">
                { for catalog().categories.iter().map(|category| {
                    let on_navigate = props.on_navigate.clone();
                    let route = Route::Category { slug: category.slug.clone() };
                    let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(route.clone()));
                    html! {
                        <button key={category.slug.clone()} class="category-tile" {onclick}>
                            <span class="category-icon">{ &category.icon }</span>
                            <span class="category-name">{ &category.name }</span>
                            <p class="muted">{ &category.description }</p>
                            <span class="muted">{ format!("{} quizzes", category.quiz_count) }</span>
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}
