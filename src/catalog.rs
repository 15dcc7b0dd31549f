//! In-memory message catalog.
//!
//! Lookups try the requested language, then its bare language (`fr-CA` falls
//! back to `fr`), then the catalog's default language. Templates use
//! positional `{0}` placeholders; `''` renders a single apostrophe.

use std::collections::HashMap;

use crate::args::Arg;
use crate::error::CatalogError;
use crate::lang::Lang;
use crate::messages::Messages;

#[derive(Debug, Clone)]
pub struct Catalog {
    default_lang: Lang,
    messages: HashMap<Lang, HashMap<String, String>>,
}

impl Catalog {
    pub fn new(default_lang: Lang) -> Self {
        Self {
            default_lang,
            messages: HashMap::new(),
        }
    }

    /// Builds a catalog from `key -> (lang -> template)` tables, the layout of
    /// JSON catalogs.
    pub fn from_hashmap(default_lang: Lang, messages: HashMap<String, HashMap<Lang, String>>) -> Self {
        let mut catalog = Self::new(default_lang);
        for (key, translations) in messages {
            for (lang, template) in translations {
                catalog.insert(lang, key.clone(), template);
            }
        }
        catalog
    }

    pub fn default_lang(&self) -> &Lang {
        &self.default_lang
    }

    /// Adds or replaces one template.
    pub fn insert(&mut self, lang: Lang, key: impl Into<String>, template: impl Into<String>) {
        self.messages
            .entry(lang)
            .or_default()
            .insert(key.into(), template.into());
    }

    /// Adds every `key -> template` pair of `entries` to `lang`.
    pub fn add_lang(&mut self, lang: Lang, entries: impl IntoIterator<Item = (String, String)>) {
        self.messages.entry(lang).or_default().extend(entries);
    }

    /// The template stored for exactly `lang`, without fallback.
    pub fn get(&self, lang: &Lang, key: &str) -> Option<&str> {
        self.messages
            .get(lang)
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    pub fn contains(&self, lang: &Lang, key: &str) -> bool {
        self.get(lang, key).is_some()
    }

    /// Languages with at least one entry, sorted.
    pub fn langs(&self) -> Vec<&Lang> {
        let mut langs: Vec<&Lang> = self
            .messages
            .iter()
            .filter(|(_, m)| !m.is_empty())
            .map(|(lang, _)| lang)
            .collect();
        langs.sort_unstable();
        langs
    }

    /// Number of templates across all languages.
    pub fn len(&self) -> usize {
        self.messages.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lookup(&self, lang: &Lang, key: &str) -> Option<&str> {
        if let Some(template) = self.get(lang, key) {
            return Some(template);
        }
        if let Some(bare) = lang.without_country() {
            if let Some(template) = self.get(&bare, key) {
                tracing::trace!(%lang, fallback = %bare, key, "message fallback");
                return Some(template);
            }
        }
        if lang != &self.default_lang {
            if let Some(template) = self.get(&self.default_lang, key) {
                tracing::trace!(%lang, fallback = %self.default_lang, key, "message fallback");
                return Some(template);
            }
        }
        None
    }
}

impl Messages for Catalog {
    type Error = CatalogError;

    fn resolve_default(&self, key: &str, args: &[Arg]) -> Result<String, Self::Error> {
        self.resolve_with_locale(&self.default_lang, key, args)
    }

    fn resolve_with_locale(&self, lang: &Lang, key: &str, args: &[Arg]) -> Result<String, Self::Error> {
        self.lookup(lang, key)
            .map(|template| interpolate(template, args))
            .ok_or_else(|| CatalogError::MissingMessage {
                key: key.to_owned(),
                lang: lang.to_string(),
            })
    }
}

/// Single-pass `{n}` interpolation. Tokens that are not an index of `args`
/// are left as-is, as is an unclosed brace.
fn interpolate(template: &str, args: &[Arg]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\'' if chars.peek() == Some(&'\'') => {
                chars.next();
                result.push('\'');
            }
            '{' => {
                let mut token = String::new();
                let mut found_close = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        found_close = true;
                        break;
                    }
                    token.push(c);
                }

                let arg = token
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| args.get(i));
                match (found_close, arg) {
                    (true, Some(arg)) => result.push_str(&arg.to_string()),
                    (true, None) => {
                        result.push('{');
                        result.push_str(&token);
                        result.push('}');
                    }
                    (false, _) => {
                        result.push('{');
                        result.push_str(&token);
                    }
                }
            }
            _ => result.push(ch),
        }
    }

    result
}
