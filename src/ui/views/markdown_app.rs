use yew::prelude::*;

use crate::app::domain::props::MarkdownappProps;

pub const EDITOR_ID: &str = "markdown-editor";

const WELCOME: &str = "# Welcome to MarkPad\n\nStart typing.\n";

/// Owns the document for the `/` route and hands it to the editor view.
#[function_component(EditorPage)]
pub fn editor_page() -> Html {
    let markdown = use_state(|| WELCOME.to_string());
    let editor_ref = use_node_ref();

    {
        let editor_ref = editor_ref.clone();
        use_effect_with((), move |_| {
            if editor_ref.get().is_some() {
                log::debug!("Editor mounted");
            }
        });
    }

    html! {
        <MarkdownApp markdown={(*markdown).clone()} editor_ref={editor_ref} />
    }
}

/// The editor view. `editor_ref` stays empty until the text area is mounted.
#[function_component(MarkdownApp)]
pub fn markdown_app(props: &MarkdownappProps) -> Html {
    let lines = props.markdown.lines().count();

    html! {
        <div class="markdown-app">
            <textarea
                id={EDITOR_ID}
                ref={props.editor_ref.clone()}
                spellcheck="false"
                value={props.markdown.clone()}
            />
            <footer class="editor-status">{ format!("{lines} lines") }</footer>
        </div>
    }
}
