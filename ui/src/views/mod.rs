mod home;
pub use home::{home_view, Affordance, CtaView, FeatureCardView, HeroView, Home, HomeView};

mod destinations;
pub use destinations::{Food, Login, Register, Weather};
