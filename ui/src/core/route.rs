//! Route identifiers the shared views can hand to a platform router.
//!
//! `ui` does not know each platform's `Routable` enum; views speak in
//! [`Destination`]s and platforms map them onto their own routes.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Home,
    Food,
    Weather,
    Login,
    Register,
}

impl Destination {
    pub const ALL: [Destination; 5] = [
        Destination::Home,
        Destination::Food,
        Destination::Weather,
        Destination::Login,
        Destination::Register,
    ];

    /// Path string resolved by the router.
    pub fn path(self) -> &'static str {
        match self {
            Destination::Home => "/",
            Destination::Food => "/food",
            Destination::Weather => "/weather",
            Destination::Login => "/login",
            Destination::Register => "/register",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDestinationError {
    #[error("unknown route `{0}`")]
    Unknown(String),
}

impl FromStr for Destination {
    type Err = ParseDestinationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Destination::ALL
            .into_iter()
            .find(|dest| dest.path() == s)
            .ok_or_else(|| ParseDestinationError::Unknown(s.to_string()))
    }
}
