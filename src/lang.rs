use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::LangError;

/// A language tag such as `"fr"` or `"en-US"`.
///
/// Tags are normalized on parse: the language is lowercased, the country
/// uppercased, and `_` is accepted as a separator (`"pt_br"` becomes `"pt-BR"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lang {
    tag: String,
    language_len: usize,
}

impl Lang {
    pub fn new(tag: &str) -> Result<Self, LangError> {
        let invalid = || LangError::Invalid(tag.to_owned());

        let mut parts = tag.trim().split(['-', '_']);
        let language = parts.next().filter(|l| is_alpha(l, 2..=3)).ok_or_else(invalid)?;
        let country = match parts.next() {
            Some(c) if is_alpha(c, 2..=2) => Some(c),
            Some(_) => return Err(invalid()),
            None => None,
        };
        if parts.next().is_some() {
            return Err(invalid());
        }

        let mut normalized = language.to_ascii_lowercase();
        if let Some(country) = country {
            normalized.push('-');
            normalized.push_str(&country.to_ascii_uppercase());
        }
        Ok(Self {
            tag: normalized,
            language_len: language.len(),
        })
    }

    /// The language subtag, e.g. `"en"` for `"en-US"`.
    pub fn language(&self) -> &str {
        &self.tag[..self.language_len]
    }

    /// The country subtag, e.g. `"US"` for `"en-US"`.
    pub fn country(&self) -> Option<&str> {
        self.tag.get(self.language_len + 1..)
    }

    /// The same language without its country, or `None` if there is no country.
    pub fn without_country(&self) -> Option<Lang> {
        self.country().map(|_| Lang {
            tag: self.language().to_owned(),
            language_len: self.language_len,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.tag
    }

    /// Parses an `Accept-Language` header value into languages ordered by
    /// descending quality. Ties keep header order. `*`, entries whose q-value
    /// is not in `(0, 1]` (including `q=0` and `NaN`), and entries that are not
    /// valid tags are dropped.
    pub fn from_accept_language(header: &str) -> Vec<Lang> {
        let mut weighted: Vec<(Lang, f32)> = header
            .split(',')
            .filter_map(|part| {
                let mut params = part.split(';');
                let tag = params.next()?.trim();
                let mut quality = 1.0;
                for param in params {
                    if let Some(q) = param.trim().strip_prefix("q=") {
                        quality = q.trim().parse::<f32>().ok()?;
                    }
                }
                if tag == "*" || !(quality > 0.0 && quality <= 1.0) {
                    return None;
                }
                Lang::new(tag).ok().map(|lang| (lang, quality))
            })
            .collect();
        weighted.sort_by(|a, b| b.1.total_cmp(&a.1));
        weighted.into_iter().map(|(lang, _)| lang).collect()
    }
}

fn is_alpha(s: &str, len: std::ops::RangeInclusive<usize>) -> bool {
    len.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_alphabetic())
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl FromStr for Lang {
    type Err = LangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::new(s)
    }
}

impl AsRef<str> for Lang {
    fn as_ref(&self) -> &str {
        &self.tag
    }
}

impl Serialize for Lang {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.tag)
    }
}

impl<'de> Deserialize<'de> for Lang {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Lang::new(&tag).map_err(serde::de::Error::custom)
    }
}
