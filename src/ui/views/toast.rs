use yew::prelude::*;

use crate::app::domain::props::{ToastType, Toastprops};

/// Transient notification. Renders nothing while closed.
#[function_component(Toast)]
pub fn toast(props: &Toastprops) -> Html {
    if !props.is_open {
        return html! {};
    }

    // Errors interrupt screen readers, successes wait their turn.
    let role = match props.kind {
        ToastType::Success => "status",
        ToastType::Error => "alert",
    };

    html! {
        <div class={classes!("toast", format!("toast-{}", props.kind))} role={role}>
            { props.message.clone() }
        </div>
    }
}
