//! The fixed route map. Paths are matched exactly and case-sensitively;
//! anything unclaimed resolves to `NotFound`.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::ui::views::{EditorPage, ErrorTest, NotFound};

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Markdown,
    #[at("/error-test")]
    ErrorTest,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Markdown => html! { <EditorPage /> },
        Route::ErrorTest => html! { <ErrorTest /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
