use dioxus::prelude::*;

use crate::context::use_app;

/// Overlay dialog. Closes on backdrop click, the corner icon, or the button.
#[component]
pub fn Modal(title: String, content: String, on_close: EventHandler<()>) -> Element {
    let app = use_app();
    let close_label = app.t("modal_close");

    rsx! {
        div { class: "modal", role: "dialog", "aria-modal": "true",
            div { class: "modal__backdrop", onclick: move |_| on_close.call(()) }
            div { class: "modal__panel",
                button {
                    r#type: "button",
                    class: "modal__close-icon",
                    aria_label: "{close_label}",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
                h2 { class: "modal__title", "{title}" }
                p { class: "modal__content", "{content}" }
                div { class: "modal__actions",
                    button {
                        r#type: "button",
                        class: "button button--accent",
                        onclick: move |_| on_close.call(()),
                        "{close_label}"
                    }
                }
            }
        }
    }
}
