use dioxus::prelude::*;

use crate::components::StaticForm;
use crate::content::{INTERVIEW_STEPS, OPEN_POSITIONS};
use crate::context::use_app;

/// Requirement bullets: icon, translation key.
const REQUIREMENTS: &[(&str, &str)] = &[
    ("</>", "interview_req_algorithms"),
    ("🛡", "interview_req_security"),
    ("⚙", "interview_req_architecture"),
    ("💬", "interview_req_teamwork"),
];

#[component]
pub fn Interview() -> Element {
    let app = use_app();
    let language = app.language();

    rsx! {
        div { class: "page page-interview",
            h1 { class: "page__title page__title--accent", {app.t("interview_title")} }
            p { class: "page__subtitle", {app.t("interview_subtitle")} }

            div { class: "roadmap",
                for step in INTERVIEW_STEPS.iter() {
                    div { key: "{step.id}", class: "roadmap__step",
                        div { class: "roadmap__badge", {format!("{:02}", step.id)} }
                        h3 { class: "roadmap__title", "{step.title.get(language)}" }
                        p { class: "roadmap__desc", "{step.description.get(language)}" }
                    }
                }
            }

            div { class: "interview__columns",
                div { class: "panel panel--blue",
                    h2 { class: "panel__title", {app.t("interview_requirements_title")} }
                    ul { class: "requirements",
                        for (icon, key) in REQUIREMENTS.iter().copied() {
                            li { key: "{key}",
                                span { class: "requirements__icon", "{icon}" }
                                {app.t(key)}
                            }
                        }
                    }
                }

                div { class: "panel panel--purple",
                    h2 { class: "panel__title", {app.t("interview_cta")} }
                    StaticForm { class: "application-form",
                        label { class: "field",
                            span { class: "field__label", {app.t("interview_form_name")} }
                            input { r#type: "text" }
                        }
                        label { class: "field",
                            span { class: "field__label", {app.t("interview_form_portfolio")} }
                            input { r#type: "url" }
                        }
                        label { class: "field",
                            span { class: "field__label", {app.t("interview_form_position")} }
                            select {
                                for position in OPEN_POSITIONS.iter() {
                                    option { key: "{position}", "{position}" }
                                }
                            }
                        }
                        button { r#type: "submit", class: "button button--primary button--wide",
                            {app.t("interview_form_submit")}
                        }
                    }
                }
            }
        }
    }
}
