use dioxus::prelude::*;

use crate::components::{page_link, Modal, Page};
use crate::content::{find_service, SERVICES};
use crate::context::use_app;

/// Headline figures: value, label key, accent modifier.
const STATS: &[(&str, &str, &str)] = &[
    ("50+", "about_stats_projects", "blue"),
    ("100+", "about_stats_clients", "purple"),
    ("20+", "about_stats_specialists", "blue"),
];

#[cfg(debug_assertions)]
fn log_home_render(lang: crate::core::Language) {
    // Lightweight render trace for diagnosing i18n refresh issues.
    tracing::debug!(target: "i18n", "Home render (lang={lang})");
}

/// Split the hero title on commas; every second segment is accented.
pub fn hero_title_parts(title: &str) -> Vec<(String, bool)> {
    title
        .split(',')
        .enumerate()
        .map(|(i, part)| (part.trim().to_string(), i % 2 == 1))
        .collect()
}

#[component]
pub fn Home() -> Element {
    let app = use_app();
    let language = app.language();
    // Id of the service whose details are open.
    let mut selected = use_signal(|| Option::<&'static str>::None);

    #[cfg(debug_assertions)]
    {
        log_home_render(language);
    }

    let title_parts: Vec<(String, &str)> = hero_title_parts(&app.t("hero_title"))
        .into_iter()
        .map(|(part, accent)| {
            let class = if accent {
                "hero__title-part hero__title-part--accent"
            } else {
                "hero__title-part"
            };
            (part, class)
        })
        .collect();

    rsx! {
        div { class: "page page-home",
            section { class: "hero",
                div { class: "hero__glow" }
                div { class: "hero__inner",
                    h1 { class: "hero__title",
                        for (i, (part, class)) in title_parts.into_iter().enumerate() {
                            span { key: "{i}", class: "{class}", "{part}" }
                        }
                    }
                    p { class: "hero__desc", {app.t("hero_desc")} }
                    div { class: "hero__actions",
                        {page_link(Page::Services, "button button--primary", app.t("hero_cta_services"))}
                        {page_link(Page::Contact, "button button--ghost", app.t("hero_cta_contact"))}
                    }
                }
            }

            section { id: "services", class: "services",
                h2 { class: "section-title",
                    span { {app.t("services_heading_primary")} }
                    " "
                    span { class: "section-title__accent", {app.t("services_heading_accent")} }
                }
                div { class: "services__grid",
                    for service in SERVICES.iter() {
                        div {
                            key: "{service.id}",
                            class: "service-card",
                            onclick: move |_| selected.set(Some(service.id)),
                            div { class: "service-card__icon", "{service.icon}" }
                            h3 { class: "service-card__title", "{service.title.get(language)}" }
                            p { class: "service-card__desc", "{service.description.get(language)}" }
                            span { class: "service-card__more", {app.t("services_more")} " ›" }
                        }
                    }
                }
            }

            section { class: "stats",
                for (value, key, accent) in STATS.iter().copied() {
                    div { key: "{key}", class: "stats__item",
                        div { class: "stats__value stats__value--{accent}", "{value}" }
                        div { class: "stats__label", {app.t(key)} }
                    }
                }
            }

            section { class: "teaser",
                h2 { class: "teaser__title", {app.t("interview_title")} }
                p { class: "teaser__text", {app.t("home_interview_teaser")} }
                {page_link(Page::Interview, "button button--outline", app.t("interview_cta"))}
            }

            if let Some(service) = selected().and_then(find_service) {
                Modal {
                    title: service.title.get(language).to_string(),
                    content: service.details.get(language).to_string(),
                    on_close: move |_| selected.set(None),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_title_alternates_accent() {
        let parts = hero_title_parts("Build, the future ,together");
        assert_eq!(
            parts,
            vec![
                ("Build".to_string(), false),
                ("the future".to_string(), true),
                ("together".to_string(), false),
            ]
        );
    }

    #[test]
    fn hero_title_without_commas_is_one_plain_part() {
        assert_eq!(hero_title_parts("Kraken"), vec![("Kraken".to_string(), false)]);
    }

    #[test]
    fn stat_labels_are_translated() {
        let table = crate::i18n::TranslationTable::embedded();
        for (_, key, _) in STATS {
            for lang in crate::core::Language::ALL {
                assert!(table.contains(lang, key), "{lang}/{key}");
            }
        }
    }
}
