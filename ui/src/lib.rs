//! Shared UI crate for the Kraken Tech site. Preferences, translations,
//! content and every view live here; the launcher crates only add routing.

use dioxus::prelude::*;

pub mod content;
pub mod context;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized navbar + platform link registration (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::{page_link, register_nav, AppNavbar, NavBuilder, Page};

    mod footer;
    pub use footer::Footer;

    mod modal;
    pub use modal::Modal;

    pub mod scroll_to_top;
    pub use scroll_to_top::ScrollToTop;

    mod static_form;
    pub use static_form::StaticForm;
}

pub use context::{use_app, AppContext, AppProvider};

/// Shared theme stylesheet (`ui/assets/theme/main.css`).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
