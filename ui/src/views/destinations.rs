//! Minimal pages for the routes the landing page links to.

use dioxus::prelude::*;

use crate::components::NavLink;
use crate::core::Destination;
use crate::t;

#[component]
fn DestinationPage(slug: &'static str, title: String, intro: String) -> Element {
    // Reactive dependency on the global language code (if provided).
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-{slug}",
            h1 { "{title}" }
            p { "{intro}" }
            NavLink {
                to: Destination::Home,
                class: "btn btn-secondary",
                label: t!("page-back-home"),
            }
        }
    }
}

#[component]
pub fn Food() -> Element {
    rsx! {
        DestinationPage { slug: "food", title: t!("page-food-title"), intro: t!("page-food-intro") }
    }
}

#[component]
pub fn Weather() -> Element {
    rsx! {
        DestinationPage {
            slug: "weather",
            title: t!("page-weather-title"),
            intro: t!("page-weather-intro"),
        }
    }
}

#[component]
pub fn Login() -> Element {
    rsx! {
        DestinationPage { slug: "login", title: t!("page-login-title"), intro: t!("page-login-intro") }
    }
}

#[component]
pub fn Register() -> Element {
    rsx! {
        DestinationPage {
            slug: "register",
            title: t!("page-register-title"),
            intro: t!("page-register-intro"),
        }
    }
}
