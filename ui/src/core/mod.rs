//! Platform-agnostic pieces: route identifiers and static page content.

pub mod content;
pub mod route;

pub use route::{Destination, ParseDestinationError};
