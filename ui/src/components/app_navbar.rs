use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::context::use_app;
use crate::core::{Language, Theme};

// Navbar stylesheet (inlined as well in release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Logical pages of the site. Launcher crates map these onto their own
/// `Route` enum, so `ui` never needs to know it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Services,
    About,
    Interview,
    Contact,
}

impl Page {
    /// Order of the links in the navbar.
    pub const NAV_ORDER: [Page; 5] = [
        Page::Home,
        Page::Services,
        Page::About,
        Page::Interview,
        Page::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Services => "/services",
            Page::About => "/about",
            Page::Interview => "/interview",
            Page::Contact => "/contact",
        }
    }

    /// Translation key of the navbar label.
    pub fn label_key(self) -> &'static str {
        match self {
            Page::Home => "nav_home",
            Page::Services => "nav_services",
            Page::About => "nav_about",
            Page::Interview => "nav_interview",
            Page::Contact => "nav_contact",
        }
    }
}

/// Platforms register a `NavBuilder` that turns a `Page` into a router
/// `Link` (with the given class and the already localized label as its only
/// child). Until one is registered, `page_link` renders plain anchors.
///
/// Example (in a launcher crate):
/// ```ignore
/// fn route_link(page: Page, class: &'static str, label: String) -> Element {
///     let to = match page {
///         Page::Home => Route::Home {},
///         // ...
///     };
///     rsx!(Link { class, active_class: "is-active", to, "{label}" })
/// }
/// register_nav(NavBuilder { link: route_link });
/// ```
pub struct NavBuilder {
    pub link: fn(page: Page, class: &'static str, label: String) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// Register the platform link builder. Only the first registration counts.
pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        debug!(target: "nav", "nav builder already registered; keeping the first");
    }
}

/// Link to `page`, through the registered builder if any.
pub fn page_link(page: Page, class: &'static str, label: String) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.link)(page, class, label),
        None => rsx! {
            a { class: "{class}", href: page.path(), "{label}" }
        },
    }
}

#[component]
pub fn AppNavbar() -> Element {
    let app = use_app();
    let mut menu_open = use_signal(|| false);

    #[cfg(debug_assertions)]
    debug!(target: "i18n", language = %app.language(), "AppNavbar render");

    let cta = app.t("nav_cta");
    let menu_label = app.t("nav_menu_toggle");

    rsx! {
        // Include shared navbar stylesheet (and inline in release native)
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    {page_link(Page::Home, "navbar__brand-link", "KRAKEN TECH".to_string())}
                }

                nav { class: "navbar__links",
                    for page in Page::NAV_ORDER {
                        {page_link(page, "navbar__link", app.t(page.label_key()))}
                    }
                }

                div { class: "navbar__actions",
                    LanguageSelect { id: "locale-select" }
                    ThemeToggle {}
                    button { r#type: "button", class: "button button--primary navbar__cta", "{cta}" }
                }

                button {
                    r#type: "button",
                    class: "navbar__menu-toggle",
                    aria_label: "{menu_label}",
                    aria_expanded: "{menu_open()}",
                    onclick: move |_| menu_open.set(!menu_open()),
                    if menu_open() { "✕" } else { "☰" }
                }
            }

            // Mobile drawer
            if menu_open() {
                div { class: "navbar__drawer",
                    for page in Page::NAV_ORDER {
                        div {
                            key: "{page.path()}",
                            class: "navbar__drawer-item",
                            onclick: move |_| menu_open.set(false),
                            {page_link(page, "navbar__drawer-link", app.t(page.label_key()))}
                        }
                    }
                    div { class: "navbar__drawer-actions",
                        LanguageSelect { id: "locale-select-mobile" }
                        ThemeToggle {}
                    }
                    button { r#type: "button", class: "button button--primary navbar__drawer-cta", "{cta}" }
                }
            }
        }
    }
}

#[component]
fn LanguageSelect(id: &'static str) -> Element {
    let app = use_app();
    let current = app.language();

    rsx! {
        div { class: "navbar__locale",
            label { class: "visually-hidden", r#for: id, {app.t("nav_language_label")} }
            select {
                id: id,
                value: current.code(),
                onchange: move |evt: FormEvent| app.select_language(&evt.value()),
                for lang in Language::ALL {
                    option {
                        key: "{lang.code()}",
                        value: lang.code(),
                        selected: lang == current,
                        "{lang.code()}"
                    }
                }
            }
        }
    }
}

#[component]
fn ThemeToggle() -> Element {
    let app = use_app();
    let label = app.t("nav_theme_toggle");
    // Shows the theme a click switches to.
    let icon = match app.theme() {
        Theme::Dark => "☀",
        Theme::Light => "☾",
    };

    rsx! {
        button {
            r#type: "button",
            class: "navbar__theme",
            title: "{label}",
            aria_label: "{label}",
            onclick: move |_| {
                app.toggle_theme();
            },
            "{icon}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_distinct_and_rooted() {
        let mut paths: Vec<_> = Page::NAV_ORDER.iter().map(|p| p.path()).collect();
        assert!(paths.iter().all(|p| p.starts_with('/')));
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), Page::NAV_ORDER.len());
    }

    #[test]
    fn label_keys_exist_in_every_locale() {
        let table = crate::i18n::TranslationTable::embedded();
        for page in Page::NAV_ORDER {
            for lang in Language::ALL {
                assert!(table.contains(lang, page.label_key()), "{lang}/{}", page.label_key());
            }
        }
    }
}
