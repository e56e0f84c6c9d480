use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::components::StaticForm;
use crate::content::{FOOTER_ADDRESS, FOOTER_EMAIL, FOOTER_PHONE};
use crate::context::use_app;

const SOCIAL_LINKS: &[(&str, &str)] = &[("GitHub", "GH"), ("LinkedIn", "in"), ("Telegram", "TG")];

#[component]
pub fn Footer() -> Element {
    let app = use_app();
    let year = OffsetDateTime::now_utc().year();
    let slogan = app.t("about_slogan");
    let rights = app.t("footer_rights");

    rsx! {
        footer { class: "footer",
            div { class: "footer__inner",
                div { class: "footer__brand",
                    h2 { class: "footer__title", "KRAKEN TECH" }
                    p { class: "footer__slogan", "“{slogan}”" }
                    div { class: "footer__social",
                        for (name, glyph) in SOCIAL_LINKS.iter().copied() {
                            a { key: "{name}", href: "#", class: "footer__social-link", aria_label: name, "{glyph}" }
                        }
                    }
                }

                div { class: "footer__contact",
                    h3 { class: "footer__heading", {app.t("footer_contact")} }
                    ul { class: "footer__contact-list",
                        li { span { class: "footer__icon", "☎" } "{FOOTER_PHONE}" }
                        li { span { class: "footer__icon", "✉" } "{FOOTER_EMAIL}" }
                        li { span { class: "footer__icon", "⌂" } "{FOOTER_ADDRESS}" }
                    }
                }

                div { class: "footer__form-block",
                    h3 { class: "footer__heading footer__heading--accent", {app.t("nav_cta")} }
                    StaticForm { class: "footer__form",
                        div { class: "footer__form-row",
                            input { r#type: "text", placeholder: app.t("footer_form_name") }
                            input { r#type: "email", placeholder: app.t("footer_form_email") }
                        }
                        textarea { placeholder: app.t("footer_form_msg") }
                        button { r#type: "submit", class: "button button--ghost", {app.t("footer_form_send")} }
                    }
                }
            }
            div { class: "footer__legal",
                "© {year} KRAKEN TECH INDUSTRIES. {rights}"
            }
        }
    }
}
