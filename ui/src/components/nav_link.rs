use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::core::Destination;

/// Builds a router link for a destination.
///
/// Platforms (web/desktop) register one at start-up so `ui` never needs to
/// know their `Route` enum. The builder receives the class and the already
/// localized label and must return an element that contains exactly that label,
/// usually a `Link { to: Route::from(dest), class, "{label}" }`.
///
/// ```ignore
/// fn route_link(to: Destination, class: &str, label: &str) -> Element {
///     rsx!(Link { class: "{class}", to: Route::from(to), "{label}" })
/// }
/// ui::components::register_links(route_link);
/// ```
pub type LinkBuilder = fn(to: Destination, class: &str, label: &str) -> Element;

static LINK_BUILDER: OnceCell<LinkBuilder> = OnceCell::new();

/// Register the platform link builder. First registration wins.
pub fn register_links(builder: LinkBuilder) {
    let _ = LINK_BUILDER.set(builder);
}

/// Navigational affordance. Without a registered builder (server render,
/// tests) it degrades to a plain anchor on the destination path.
#[component]
pub fn NavLink(to: Destination, class: String, label: String) -> Element {
    match LINK_BUILDER.get() {
        Some(build) => build(to, &class, &label),
        None => rsx! {
            a { class: "{class}", href: "{to}", "{label}" }
        },
    }
}
