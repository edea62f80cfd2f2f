//! Localized strings for the Hemascope UI.
//!
//! Messages live in Fluent files embedded at compile time:
//!
//! ```text
//! ui/i18n.toml
//! ui/i18n/en-US/hemascope-ui.ftl   fallback, every key must exist here
//! ui/i18n/es-ES/hemascope-ui.ftl
//! ```
//!
//! Components look strings up through [`t!`](crate::t), which expands to a
//! compile-time checked `fl!` call against the shared [`LOADER`]. Call
//! [`init`] once at startup; the navbar calls [`set_language`] when the user
//! picks another locale.
//!
//! The initial language comes from `navigator.languages` on the web and from
//! the OS locale list on desktop. On wasm the `.ftl` files are always embedded,
//! including debug builds (`debug-embed`).
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Look up a message through the shared loader.
///
/// ```ignore
/// t!("nav-home")
/// t!("results-analysed-at", time = "09:41")
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "hemascope-ui";
const FALLBACK: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK.parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load the bundles for the user's preferred languages. Safe to call repeatedly.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => tracing::debug!(?selected, "localization ready"),
            Err(err) => {
                tracing::warn!(error = %err, "failed selecting languages; continuing with fallback")
            }
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        tracing::debug!(tag, "ignoring unparseable language tag");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Tag of the language currently used for lookups.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Language tags that have an embedded `.ftl` file, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_languages_include_fallback() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == FALLBACK));
        assert!(langs.iter().any(|l| l == "es-ES"));
    }

    #[test]
    fn english_lookups() {
        init();
        set_language(FALLBACK).unwrap();
        assert_eq!(fl!(&*LOADER, "nav-home"), "Home");
        assert_eq!(fl!(&*LOADER, "status-critical"), "critical");
        assert_eq!(fl!(&*LOADER, "upload-not-pdf"), "Please upload a PDF file.");
    }

    #[test]
    fn garbage_tag_keeps_current_language() {
        init();
        set_language(FALLBACK).unwrap();
        let before = current_language();
        set_language("not a tag!").unwrap();
        assert_eq!(current_language(), before);
    }

    #[test]
    fn macro_and_loader_share_a_domain() {
        let manifest = include_str!("../i18n.toml");
        assert!(
            manifest.contains(&format!("domain = \"{DOMAIN}\"")),
            "i18n.toml must name the `{DOMAIN}` domain so `fl!` checks the shipped files"
        );
        let fallback_file = format!("{FALLBACK}/{DOMAIN}.ftl");
        assert!(Localizations::get(&fallback_file).is_some(), "missing {fallback_file}");
    }
}
