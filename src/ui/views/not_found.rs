use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::routes::Route;

/// Fallback for every path no other route claims.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    html! {
        <section class="not-found">
            <h1>{ "404" }</h1>
            <p>{ format!("Nothing lives at {path}") }</p>
            <Link<Route> to={Route::Markdown}>{ "Back to the editor" }</Link<Route>>
        </section>
    }
}
