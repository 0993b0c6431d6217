use crate::core::Destination;
use crate::i18n;
use crate::t;
use dioxus::prelude::*;
use tracing::debug;

use super::NavLink;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Application header: brand, public links (through the registered link
/// builder, see [`super::register_links`]) and a locale switcher.
///
/// The switcher writes to the platform-provided `Signal<String>` language code
/// (if any) so routed views keyed on it re-render with fresh strings.
#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    // Seeded from the loader: init() may already have picked the OS locale.
    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Reactive dependency on the global language code.
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    #[cfg(debug_assertions)]
    debug!(lang = %lang_marker, "AppNavbar render");

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => debug!(%err, lang = %val, "language switch rejected"),
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { style: "display:none", "{lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-spark", aria_hidden: "true", "✨" }
                    NavLink {
                        to: Destination::Home,
                        class: "navbar__brand-link",
                        label: "LifeHub",
                    }
                    span { class: "navbar__brand-subtitle", {t!("home-tagline")} }
                }

                nav { class: "navbar__links",
                    NavLink { to: Destination::Home, class: "navbar__link", label: t!("nav-home") }
                }

                div { class: "navbar__auth",
                    NavLink {
                        to: Destination::Login,
                        class: "navbar__auth-link navbar__auth-link--login",
                        label: t!("nav-login"),
                    }
                    NavLink {
                        to: Destination::Register,
                        class: "navbar__auth-link navbar__auth-link--register",
                        label: t!("nav-register"),
                    }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for code in langs().into_iter() {
                                option { key: "{code}", value: "{code}", "{code}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
