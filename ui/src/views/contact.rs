use dioxus::prelude::*;

use crate::components::StaticForm;
use crate::content::CONTACT_CHANNELS;
use crate::context::use_app;

#[component]
pub fn Contact() -> Element {
    let app = use_app();

    rsx! {
        div { class: "page page-contact",
            h1 { class: "page__title", {app.t("contact_title")} }
            div { class: "contact__columns",
                div { class: "contact__channels",
                    h2 { class: "panel__title", {app.t("contact_channels_title")} }
                    for channel in CONTACT_CHANNELS.iter() {
                        div { key: "{channel.value}", class: "channel channel--{channel.accent}",
                            div { class: "channel__icon", "{channel.icon}" }
                            div {
                                p { class: "channel__label", {app.t(channel.label_key)} }
                                p { class: "channel__value", "{channel.value}" }
                            }
                        }
                    }
                }

                div { class: "panel panel--blue",
                    h2 { class: "panel__title", {app.t("contact_form_title")} }
                    StaticForm { class: "contact-form",
                        div { class: "contact-form__row",
                            input { placeholder: app.t("contact_form_name") }
                            input { placeholder: app.t("contact_form_company") }
                        }
                        input { r#type: "email", placeholder: app.t("contact_form_email") }
                        textarea { placeholder: app.t("contact_form_message") }
                        button { r#type: "submit", class: "button button--solid button--wide",
                            {app.t("contact_form_submit")}
                        }
                    }
                }
            }
        }
    }
}
