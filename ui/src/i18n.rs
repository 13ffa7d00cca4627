//! Localization store for `portfolio-ui`.
//!
//! This module wires together:
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `fluent` (message formatting, one bundle per language)
//! - a Dioxus context (`Localizer`) carrying the active language signal
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   ar/portfolio-ui.ftl   (default language)
//!   en/portfolio-ui.ftl
//! ```
//!
//! Usage in a component (below `PortfolioApp`, which provides the context):
//! ```ignore
//! let i18n = use_localizer();
//! let home_label = i18n.t("nav-home");
//! ```
//!
//! A key missing from the active language's dictionary is rendered verbatim,
//! which keeps untranslated strings visible during development. Both
//! dictionaries must define the same ids; `tests/i18n_missing_keys.rs`
//! enforces that.

use std::borrow::Cow;

use dioxus::logger::tracing;
use dioxus::prelude::*;
use fluent::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::Embed;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

/// Canonical FTL file name inside every language folder.
const DOMAIN_FILE: &str = "portfolio-ui.ftl";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// The two interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Arabic,
    English,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Arabic, Language::English];

    pub fn tag(self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::English => "en",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::Arabic => Language::English,
            Language::English => Language::Arabic,
        }
    }

    pub fn dir(self) -> &'static str {
        match self {
            Language::Arabic => "rtl",
            Language::English => "ltr",
        }
    }

    pub fn font_class(self) -> &'static str {
        match self {
            Language::Arabic => "font-cairo",
            Language::English => "font-inter",
        }
    }

    /// Select the value stored for this language out of a bilingual pair.
    pub fn pick<'a, T: ?Sized>(self, ar: &'a T, en: &'a T) -> &'a T {
        match self {
            Language::Arabic => ar,
            Language::English => en,
        }
    }

    fn index(self) -> usize {
        match self {
            Language::Arabic => 0,
            Language::English => 1,
        }
    }
}

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("Missing dictionary `{0}`")]
    MissingDictionary(String),
    #[error("Dictionary `{path}` is not valid UTF-8")]
    Encoding { path: String },
    #[error("Dictionary `{path}` has {count} syntax error(s); first: {first}")]
    Syntax {
        path: String,
        count: usize,
        first: String,
    },
    #[error("Dictionary `{path}` could not be registered: {reason}")]
    Bundle { path: String, reason: String },
    #[error("Invalid language tag `{0}`")]
    LanguageTag(&'static str),
}

struct Dictionary {
    bundle: FluentBundle<FluentResource>,
    keys: Vec<String>,
}

impl Dictionary {
    fn empty(language: Language) -> Self {
        let langid = language
            .tag()
            .parse::<LanguageIdentifier>()
            .unwrap_or_default();
        let mut bundle = FluentBundle::new(vec![langid]);
        bundle.set_use_isolating(false);
        Self {
            bundle,
            keys: Vec::new(),
        }
    }

    fn load(language: Language) -> Result<Self, I18nError> {
        let path = format!("{}/{DOMAIN_FILE}", language.tag());
        let file = Localizations::get(&path)
            .ok_or_else(|| I18nError::MissingDictionary(path.clone()))?;
        let source = String::from_utf8(file.data.into_owned())
            .map_err(|_| I18nError::Encoding { path: path.clone() })?;

        let keys = message_ids(&source);
        let resource = FluentResource::try_new(source).map_err(|(_, errors)| I18nError::Syntax {
            path: path.clone(),
            count: errors.len(),
            first: errors.first().map(|e| e.to_string()).unwrap_or_default(),
        })?;

        let langid = language
            .tag()
            .parse::<LanguageIdentifier>()
            .map_err(|_| I18nError::LanguageTag(language.tag()))?;
        let mut bundle = FluentBundle::new(vec![langid]);
        // Directionality comes from the page `dir`; FSI/PDI marks only add noise.
        bundle.set_use_isolating(false);
        bundle.add_resource(resource).map_err(|errors| I18nError::Bundle {
            path,
            reason: errors
                .first()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".into()),
        })?;

        Ok(Self { bundle, keys })
    }
}

/// Parsed dictionaries for both languages.
pub struct Catalog {
    dictionaries: [Dictionary; 2],
}

impl Catalog {
    pub fn load() -> Result<Self, I18nError> {
        Ok(Self {
            dictionaries: [
                Dictionary::load(Language::Arabic)?,
                Dictionary::load(Language::English)?,
            ],
        })
    }

    /// A catalog with no messages: every lookup returns its key.
    pub fn empty() -> Self {
        Self {
            dictionaries: [
                Dictionary::empty(Language::Arabic),
                Dictionary::empty(Language::English),
            ],
        }
    }

    /// Load the embedded dictionaries, or fall back to an empty catalog so
    /// the page still renders (with raw keys) when they are broken.
    pub fn load_or_empty() -> Self {
        match Self::load() {
            Ok(catalog) => catalog,
            Err(err) => {
                tracing::error!("[i18n] {err}; rendering message ids verbatim");
                Self::empty()
            }
        }
    }

    pub fn lookup(&self, lang: Language, key: &str) -> String {
        self.format(lang, key, None)
    }

    pub fn lookup_with(&self, lang: Language, key: &str, args: &[(&str, String)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, FluentValue::from(value.clone()));
        }
        self.format(lang, key, Some(&fluent_args))
    }

    /// Message ids defined for `lang`, in file order.
    pub fn keys(&self, lang: Language) -> &[String] {
        &self.dictionaries[lang.index()].keys
    }

    fn format(&self, lang: Language, key: &str, args: Option<&FluentArgs>) -> String {
        let bundle = &self.dictionaries[lang.index()].bundle;
        let Some(pattern) = bundle.get_message(key).and_then(|m| m.value()) else {
            return key.to_string();
        };

        let mut errors = Vec::new();
        let value: Cow<str> = bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            tracing::warn!("[i18n] formatting `{key}` ({}): {errors:?}", lang.tag());
        }
        if value.is_empty() {
            key.to_string()
        } else {
            value.into_owned()
        }
    }
}

/// Message ids (`id = value` lines) of an FTL source.
fn message_ids(source: &str) -> Vec<String> {
    source
        .lines()
        .filter(|line| !line.starts_with([' ', '\t', '#', '-', '.']))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| {
            !id.is_empty()
                && id
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        })
        .map(str::to_string)
        .collect()
}

/// Context handle: shared catalog plus the active language.
#[derive(Clone, Copy, PartialEq)]
pub struct Localizer {
    catalog: CopyValue<Catalog>,
    language: Signal<Language>,
}

impl Localizer {
    /// Must be called inside a Dioxus scope.
    pub fn new(catalog: Catalog, initial: Language) -> Self {
        Self {
            catalog: CopyValue::new(catalog),
            language: Signal::new(initial),
        }
    }

    /// Active language; subscribes the calling component.
    pub fn language(&self) -> Language {
        (self.language)()
    }

    pub fn t(&self, key: &str) -> String {
        let lang = self.language();
        self.catalog.read().lookup(lang, key)
    }

    pub fn t_with(&self, key: &str, args: &[(&str, String)]) -> String {
        let lang = self.language();
        self.catalog.read().lookup_with(lang, key, args)
    }

    pub fn pick<'a>(&self, ar: &'a str, en: &'a str) -> &'a str {
        self.language().pick(ar, en)
    }

    pub fn toggle(&mut self) {
        let next = self.language.peek().toggled();
        self.language.set(next);
    }

    /// Run `f` against the catalog without subscribing to the language.
    pub fn with_catalog<R>(&self, f: impl FnOnce(&Catalog) -> R) -> R {
        f(&self.catalog.read())
    }
}

/// Create the localizer context at the application root.
pub fn use_localizer_provider(initial: Language) -> Localizer {
    use_context_provider(|| Localizer::new(Catalog::load_or_empty(), initial))
}

pub fn use_localizer() -> Localizer {
    use_context::<Localizer>()
}
