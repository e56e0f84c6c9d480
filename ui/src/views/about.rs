use dioxus::prelude::*;

use crate::content::TEAM;
use crate::context::use_app;

const OFFICE_IMAGE: &str =
    "https://storage.yandexcloud.net/incrussia-prod/wp-content/uploads/2017/06/Narrow-680x440-6.jpg";

#[component]
pub fn About() -> Element {
    let app = use_app();
    let language = app.language();

    rsx! {
        div { class: "page page-about",
            div { class: "about__intro",
                div { class: "about__text",
                    h1 { class: "about__title", {app.t("about_title")} }
                    h2 { class: "about__mission", {app.t("about_mission")} }
                    p { class: "about__lead", {app.t("about_intro_1")} }
                    p { {app.t("about_intro_2")} }
                }
                div { class: "about__media",
                    img { class: "about__image", src: OFFICE_IMAGE, alt: app.t("about_office_alt") }
                }
            }

            h2 { class: "section-title", {app.t("about_team_title")} }
            div { class: "team__grid",
                for member in TEAM.iter() {
                    div { key: "{member.id}", class: "team-card",
                        div { class: "team-card__photo",
                            img { src: member.image, alt: member.name }
                        }
                        h3 { class: "team-card__name", "{member.name}" }
                        p { class: "team-card__role", "{member.role.get(language)}" }
                    }
                }
            }
        }
    }
}
