use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use ui::components::{register_links, AppNavbar};
use ui::core::Destination;
use ui::views::{Food, Home, Login, Register, Weather};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
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

fn route_link(to: Destination, class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::from(to), "{label}" })
}

fn main() {
    dioxus::logger::initialize_default();
    info!("starting LifeHub web");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_links(route_link);

    // Global language code; AppNavbar updates it on locale selection.
    let lang_code = use_signal(|| ui::i18n::FALLBACK_LANGUAGE.to_string());
    use_context_provider(|| lang_code);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// A web-specific layout around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
