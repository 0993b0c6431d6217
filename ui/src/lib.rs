//! Shared UI crate for LifeHub. Views, content and localization live here;
//! platform crates only supply the router.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Router-agnostic link (components/nav_link.rs)
    mod nav_link;
    pub use nav_link::{register_links, LinkBuilder, NavLink};

    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}

use dioxus::prelude::*;

/// Shared theme stylesheet (home page, destination pages, buttons).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
