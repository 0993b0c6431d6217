//! Static landing-page content.
//!
//! Text is stored as fluent message keys and resolved at render time.
//! Table order is presentation order.

use super::route::Destination;

/// A feature card advertising one product area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub destination: Destination,
    pub link_label: &'static str,
}

/// Visual weight of a call-to-action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary,
    Secondary,
}

impl ButtonStyle {
    pub fn class(self) -> &'static str {
        match self {
            ButtonStyle::Primary => "btn btn-primary",
            ButtonStyle::Secondary => "btn btn-secondary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtaAction {
    pub label: &'static str,
    pub destination: Destination,
    pub style: ButtonStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroBlock {
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtaBlock {
    pub heading: &'static str,
    pub subtext: &'static str,
    pub actions: [CtaAction; 2],
}

pub const HERO: HeroBlock = HeroBlock {
    title: "home-title",
    tagline: "home-tagline",
    description: "home-description",
};

pub const FEATURE_CARDS: [FeatureCard; 3] = [
    FeatureCard {
        icon: "🍽️",
        title: "home-feature-food-title",
        description: "home-feature-food-description",
        destination: Destination::Food,
        link_label: "home-feature-food-link",
    },
    FeatureCard {
        icon: "⛅",
        title: "home-feature-weather-title",
        description: "home-feature-weather-description",
        destination: Destination::Weather,
        link_label: "home-feature-weather-link",
    },
    FeatureCard {
        icon: "🎨",
        title: "home-feature-art-title",
        description: "home-feature-art-description",
        // No art route exists yet; the card points at weather.
        destination: Destination::Weather,
        link_label: "home-feature-art-link",
    },
];

pub const CTA: CtaBlock = CtaBlock {
    heading: "home-cta-heading",
    subtext: "home-cta-subtext",
    actions: [
        CtaAction {
            label: "home-cta-login",
            destination: Destination::Login,
            style: ButtonStyle::Primary,
        },
        CtaAction {
            label: "home-cta-register",
            destination: Destination::Register,
            style: ButtonStyle::Secondary,
        },
    ],
};
