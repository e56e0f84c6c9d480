use dioxus::prelude::*;
use tracing::debug;

/// A form with no submission target: renders its fields and swallows submit.
#[component]
pub fn StaticForm(#[props(into)] class: String, children: Element) -> Element {
    rsx! {
        form {
            class: "{class}",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                debug!(target: "forms", "submit ignored (no backend)");
            },
            {children}
        }
    }
}
