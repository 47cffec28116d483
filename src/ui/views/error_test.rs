use yew::prelude::*;

use super::toast::Toast;
use crate::app::domain::props::Toastprops;

/// Lets a user raise each kind of toast by hand.
#[function_component(ErrorTest)]
pub fn error_test() -> Html {
    let toast = use_state(|| Toastprops::error("Something went wrong").closed());

    let raise_error = {
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            log::warn!("Raising test error");
            toast.set(Toastprops::error("Something went wrong"));
        })
    };
    let raise_success = {
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| toast.set(Toastprops::success("All good")))
    };
    let dismiss = {
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| toast.set((*toast).clone().closed()))
    };

    html! {
        <section class="error-test">
            <h1>{ "Error test" }</h1>
            <button onclick={raise_error}>{ "Raise error" }</button>
            <button onclick={raise_success}>{ "Raise success" }</button>
            <button onclick={dismiss}>{ "Dismiss" }</button>
            <Toast ..(*toast).clone() />
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_starts_without_toast() {
        let html = yew::ServerRenderer::<ErrorTest>::new()
            .hydratable(false)
            .render()
            .await;

        assert!(html.contains(r#"class="error-test""#), "{html}");
        assert!(html.contains("Raise error"), "{html}");
        assert!(!html.contains("toast"), "{html}");
    }
}
