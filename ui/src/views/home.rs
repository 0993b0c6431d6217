use dioxus::prelude::*;

use crate::components::NavLink;
use crate::core::content::{FeatureCard, CTA, FEATURE_CARDS, HERO};
use crate::core::Destination;
use crate::i18n::tr;

/// Resolved landing page: every static table run through the active locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub hero: HeroView,
    pub features: Vec<FeatureCardView>,
    pub cta: CtaView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroView {
    pub title: String,
    pub tagline: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureCardView {
    pub icon: &'static str,
    pub title: String,
    pub description: String,
    pub link: Affordance,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CtaView {
    pub heading: String,
    pub subtext: String,
    pub actions: Vec<Affordance>,
}

/// A clickable element that moves the viewer to another route. Rendered
/// through [`NavLink`], so activation is entirely the router's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affordance {
    pub label: String,
    pub destination: Destination,
    pub class: &'static str,
}

impl From<&FeatureCard> for FeatureCardView {
    fn from(card: &FeatureCard) -> Self {
        Self {
            icon: card.icon,
            title: tr(card.title),
            description: tr(card.description),
            link: Affordance {
                label: tr(card.link_label),
                destination: card.destination,
                class: "feature-link",
            },
        }
    }
}

/// Build the landing page from the static tables. Pure apart from reading
/// the active language.
pub fn home_view() -> HomeView {
    HomeView {
        hero: HeroView {
            title: tr(HERO.title),
            tagline: tr(HERO.tagline),
            description: tr(HERO.description),
        },
        features: FEATURE_CARDS.iter().map(FeatureCardView::from).collect(),
        cta: CtaView {
            heading: tr(CTA.heading),
            subtext: tr(CTA.subtext),
            actions: CTA
                .actions
                .iter()
                .map(|action| Affordance {
                    label: tr(action.label),
                    destination: action.destination,
                    class: action.style.class(),
                })
                .collect(),
        },
    }
}

#[cfg(debug_assertions)]
fn log_home_render(lang: &str) {
    tracing::debug!(lang, "Home render");
}

#[component]
pub fn Home() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    #[cfg(debug_assertions)]
    log_home_render(&lang_marker);

    let HomeView { hero, features, cta } = home_view();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        div { class: "home-container",
            div { class: "hero-section",
                h1 { "{hero.title}" }
                p { class: "tagline", "{hero.tagline}" }
                p { class: "description", "{hero.description}" }
            }

            div { class: "features-grid",
                for card in features.into_iter() {
                    div { key: "{card.title}", class: "feature-card",
                        div { class: "feature-icon", "{card.icon}" }
                        h3 { "{card.title}" }
                        p { "{card.description}" }
                        {render_affordance(card.link.clone())}
                    }
                }
            }

            div { class: "cta-section",
                h2 { "{cta.heading}" }
                p { "{cta.subtext}" }
                div { class: "cta-buttons",
                    for action in cta.actions.into_iter() {
                        NavLink {
                            key: "{action.label}",
                            to: action.destination,
                            class: action.class.to_string(),
                            label: action.label.clone(),
                        }
                    }
                }
            }
        }
    }
}

fn render_affordance(affordance: Affordance) -> Element {
    rsx! {
        NavLink {
            to: affordance.destination,
            class: affordance.class.to_string(),
            label: affordance.label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n;

    fn english_home() -> HomeView {
        i18n::use_fallback_for_tests();
        home_view()
    }

    fn card<'a>(view: &'a HomeView, title: &str) -> &'a FeatureCardView {
        view.features
            .iter()
            .find(|c| c.title == title)
            .unwrap_or_else(|| panic!("no card titled {title}"))
    }

    #[test]
    fn hero_heading_and_tagline() {
        let view = english_home();
        assert_eq!(view.hero.title, "Welcome to LifeHub");
        assert_eq!(view.hero.tagline, "Your Personal Lifestyle Dashboard");
        assert!(view.hero.description.ends_with("all in one place."));
    }

    #[test]
    fn exactly_three_features_in_fixed_order() {
        let view = english_home();
        let titles: Vec<_> = view.features.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Food & Recipes", "Weather Tracking", "Art Discovery"]);
    }

    #[test]
    fn every_feature_link_ends_with_arrow() {
        for card in english_home().features {
            assert!(card.link.label.ends_with('→'), "{}", card.link.label);
            assert_eq!(card.link.class, "feature-link");
        }
    }

    #[test]
    fn food_card_targets_food_route() {
        let view = english_home();
        let food = card(&view, "Food & Recipes");
        assert_eq!(food.icon, "🍽️");
        assert_eq!(food.link.destination.path(), "/food");
        assert_eq!(food.link.label, "Explore Recipes →");
    }

    #[test]
    fn weather_card_targets_weather_route() {
        let view = english_home();
        let weather = card(&view, "Weather Tracking");
        assert_eq!(weather.link.destination.path(), "/weather");
        assert_eq!(weather.link.label, "Check Weather →");
    }

    #[test]
    fn art_card_keeps_weather_destination() {
        let view = english_home();
        let art = card(&view, "Art Discovery");
        assert_eq!(art.link.label, "Browse Art →");
        assert_eq!(art.link.destination, Destination::Weather);
    }

    #[test]
    fn cta_has_login_then_register() {
        let view = english_home();
        let labels: Vec<_> = view.cta.actions.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, ["Login", "Register"]);
        assert_eq!(view.cta.actions[0].destination.path(), "/login");
        assert_eq!(view.cta.actions[1].destination.path(), "/register");
        assert_eq!(view.cta.heading, "Start Organizing Your Life");
    }

    #[test]
    fn rendering_twice_is_identical() {
        assert_eq!(english_home(), english_home());
    }

    /// Server-render `Home` without a registered link builder, so every
    /// affordance comes out as a plain anchor.
    fn render_home() -> String {
        i18n::use_fallback_for_tests();
        let mut dom = VirtualDom::new(Home);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// `href` values of anchors carrying exactly `class`, in document order.
    fn hrefs_with_class(html: &str, class: &str) -> Vec<String> {
        let needle = format!("class=\"{class}\" href=\"");
        html.split(needle.as_str())
            .skip(1)
            .filter_map(|rest| rest.split_once('"'))
            .map(|(href, _)| href.to_string())
            .collect()
    }

    #[test]
    fn rendered_home_has_single_hero_heading() {
        let html = render_home();
        assert_eq!(html.matches("<h1").count(), 1, "{html}");
        assert!(html.contains("<h1>Welcome to LifeHub</h1>"), "{html}");
        assert!(html.contains("Your Personal Lifestyle Dashboard"), "{html}");
    }

    #[test]
    fn rendered_home_has_three_cards_in_order() {
        let html = render_home();
        assert_eq!(html.matches("class=\"feature-card\"").count(), 3, "{html}");
        assert_eq!(html.matches("class=\"feature-icon\"").count(), 3, "{html}");
        assert_eq!(
            hrefs_with_class(&html, "feature-link"),
            ["/food", "/weather", "/weather"]
        );

        let food = html.find("Explore Recipes →").expect("food link");
        let weather = html.find("Check Weather →").expect("weather link");
        let art = html.find("Browse Art →").expect("art link");
        assert!(food < weather && weather < art, "{html}");
    }

    #[test]
    fn rendered_cta_is_login_then_register() {
        let html = render_home();
        let login = html
            .find("<a class=\"btn btn-primary\" href=\"/login\">Login</a>")
            .expect("login button");
        let register = html
            .find("<a class=\"btn btn-secondary\" href=\"/register\">Register</a>")
            .expect("register button");
        assert!(login < register, "{html}");
        assert_eq!(hrefs_with_class(&html, "btn btn-primary"), ["/login"]);
        assert_eq!(hrefs_with_class(&html, "btn btn-secondary"), ["/register"]);
    }

    #[test]
    fn register_is_the_only_route_to_registration() {
        let html = render_home();
        assert_eq!(html.matches("href=\"/register\"").count(), 1, "{html}");

        let (_, cta) = html
            .split_once("class=\"cta-buttons\"")
            .expect("cta buttons rendered");
        assert!(cta.contains("href=\"/register\">Register</a>"), "{html}");
    }

    #[test]
    fn rendered_markup_is_stable_across_renders() {
        assert_eq!(render_home(), render_home());
    }
}
