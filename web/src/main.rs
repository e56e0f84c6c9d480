use dioxus::prelude::*;

use ui::components::{register_nav, AppNavbar, Footer, NavBuilder, Page, ScrollToTop};
use ui::views::{About, Contact, Home, Interview};
use ui::AppProvider;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
    #[route("/")]
    Home {},
    #[route("/services")]
    Services {},
    #[route("/about")]
    About {},
    #[route("/interview")]
    Interview {},
    #[route("/contact")]
    Contact {},
}

fn route_link(page: Page, class: &'static str, label: String) -> Element {
    let to = match page {
        Page::Home => Route::Home {},
        Page::Services => Route::Services {},
        Page::About => Route::About {},
        Page::Interview => Route::Interview {},
        Page::Contact => Route::Contact {},
    };
    rsx!(Link {
        class: "{class}",
        active_class: "is-active",
        to,
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder { link: route_link });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        AppProvider {
            Router::<Route> {}
        }
    }
}

/// The services page shares the home layout.
#[component]
fn Services() -> Element {
    rsx! { Home {} }
}

/// Web chrome around the routed page: navbar, footer and the scroll button.
#[component]
fn WebLayout() -> Element {
    rsx! {
        AppNavbar {}
        main { Outlet::<Route> {} }
        Footer {}
        ScrollToTop {}
    }
}
