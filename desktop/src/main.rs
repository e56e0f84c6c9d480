#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::{register_nav, AppNavbar, Footer, NavBuilder, Page, ScrollToTop};
use ui::views::{About, Contact, Home, Interview};
use ui::AppProvider;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopLayout)]
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

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Kraken Tech – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn route_link(page: Page, class: &'static str, label: String) -> Element {
    let to = match page {
        Page::Home => Route::Home {},
        Page::Services => Route::Services {},
        Page::About => Route::About {},
        Page::Interview => Route::Interview {},
        Page::Contact => Route::Contact {},
    };
    rsx!(Link { class: "{class}", active_class: "is-active", to, "{label}" })
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder { link: route_link });

    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        AppProvider {
            Router::<Route> {}
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

#[component]
fn Services() -> Element {
    rsx! { Home {} }
}

/// Desktop chrome around the routed page, mirroring the web layout.
#[component]
fn DesktopLayout() -> Element {
    rsx! {
        AppNavbar {}
        main { Outlet::<Route> {} }
        Footer {}
        ScrollToTop {}
    }
}
