#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use ui::components::{register_links, AppNavbar};
use ui::core::Destination;
use ui::views::{Food, Home, Login, Register, Weather};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/food")]
    Food {},
    #[route("/weather")]
    Weather {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
}

impl From<Destination> for Route {
    fn from(dest: Destination) -> Self {
        match dest {
            Destination::Home => Route::Home {},
            Destination::Food => Route::Food {},
            Destination::Weather => Route::Weather {},
            Destination::Login => Route::Login {},
            Destination::Register => Route::Register {},
        }
    }
}

// Shared theme, always inlined so desktop builds need no external stylesheet.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::initialize_default();
    let resource_dir = resolve_resource_dir();
    info!(dir = %resource_dir.display(), "starting LifeHub desktop");

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("LifeHub – v{}", env!("CARGO_PKG_VERSION"))),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    dioxus::logger::initialize_default();
    info!("starting LifeHub server");
    LaunchBuilder::server().launch(App);
}

fn route_link(to: Destination, class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::from(to), "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_links(route_link);

    // AppNavbar updates this on locale selection.
    let lang_code = use_signal(|| ui::i18n::FALLBACK_LANGUAGE.to_string());
    use_context_provider(|| lang_code);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper forces a full remount of the routed subtree on language change.
        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
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

/// A desktop-specific layout around the shared `AppNavbar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
