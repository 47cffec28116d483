use yew::prelude::*;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::prelude::*;

use crate::app::routes::{switch, Route};

#[derive(Properties, PartialEq, Clone, Debug, Default)]
pub struct AppProps {
    /// Path prefix the application is served under, without a trailing slash.
    #[prop_or_default]
    pub basename: Option<String>,
}

/// Root of the browser build, driven by the address bar.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <BrowserRouter basename={props.basename.clone().map(AttrValue::from)}>
            <AppShell />
        </BrowserRouter>
    }
}

#[derive(Properties, PartialEq, Clone, Debug)]
pub struct ServerAppProps {
    pub url: String,
    #[prop_or_default]
    pub basename: Option<String>,
}

/// Root for rendering a single location outside the browser.
#[function_component(ServerApp)]
pub fn server_app(props: &ServerAppProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    history.push(props.url.clone());

    html! {
        <Router history={history} basename={props.basename.clone().map(AttrValue::from)}>
            <AppShell />
        </Router>
    }
}

#[function_component(AppShell)]
fn app_shell() -> Html {
    html! {
        <div class="app-shell">
            <Switch<Route> render={switch} />
        </div>
    }
}
