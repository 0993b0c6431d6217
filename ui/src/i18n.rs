//! Internationalization (i18n) support for `lifehub-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/lifehub-ui.ftl   (fallback/reference)
//!   es-ES/lifehub-ui.ftl
//!   fr-FR/lifehub-ui.ftl
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! crate::i18n::init(); // idempotent
//! let home_label = t!("nav-home");
//! ```
//!
//! Static content tables (see `core::content`) store message keys rather than
//! literals; those go through [`tr`] because `fl!` only accepts literals.
//!
//! Platform notes:
//! - Desktop: uses `DesktopLanguageRequester` (OS locale list).
//! - Web/WASM: uses `WebLanguageRequester` (`navigator.languages`).
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::warn;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-home")
///
/// Expands to `fl!(&*LOADER, ...)` so every lookup routes through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file must be `i18n/en-US/{DOMAIN}.ftl`.
/// Must match `[fluent] domain` in `i18n.toml`, which the `fl!` macro reads.
pub const DOMAIN: &str = "lifehub-ui";

/// Language every lookup falls back to.
pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = unic_langid::langid!("en-US");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!(%err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Language tag the loader currently resolves against.
pub fn current_language() -> String {
    active_language(&LOADER)
}

fn active_language(loader: &FluentLanguageLoader) -> String {
    loader
        .current_languages()
        .first()
        .map(|lang| lang.to_string())
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}

/// Resolve a message key that is only known at runtime.
pub fn tr(key: &str) -> String {
    LOADER.get(key)
}

/// Whether the active bundles (or the fallback) define `key`.
pub fn has_message(key: &str) -> bool {
    LOADER.has(key)
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

/// Pins the global loader to the fallback language for assertions on English text.
#[cfg(test)]
pub(crate) fn use_fallback_for_tests() {
    init();
    let _ = set_language(FALLBACK_LANGUAGE);
}
