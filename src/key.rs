use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::args::Arg;
use crate::error::InvalidKey;
use crate::lang::Lang;
use crate::messages::Messages;

/// A non-empty key naming one entry of a message catalog.
///
/// The key is checked once, on construction, and never changes afterwards.
/// Lookups are not cached: every call to [`resolve`](Self::resolve) or
/// [`resolve_with_locale`](Self::resolve_with_locale) goes to the [`Messages`]
/// service, and whatever that service returns (including its errors) comes back
/// untouched.
///
/// ```
/// use message_key::{args, Catalog, Lang, MessageKey};
///
/// let en: Lang = "en".parse().unwrap();
/// let mut catalog = Catalog::new(en.clone());
/// catalog.insert(en, "welcome.title", "Welcome, {0}!");
///
/// let key = MessageKey::new("welcome.title").unwrap();
/// assert_eq!(key.resolve(&catalog, &args!["Alice"]).unwrap(), "Welcome, Alice!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MessageKey {
    key: String,
}

impl MessageKey {
    pub fn new(key: impl Into<String>) -> Result<Self, InvalidKey> {
        let key = key.into();
        if key.is_empty() {
            return Err(InvalidKey);
        }
        Ok(Self { key })
    }

    /// Used by `#[derive(AsMessageKey)]`, which rejects empty keys at compile time.
    #[doc(hidden)]
    pub fn from_derive(key: &'static str) -> Self {
        debug_assert!(!key.is_empty());
        Self {
            key: key.to_owned(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Resolves the key in the service's default language.
    pub fn resolve<M>(&self, messages: &M, args: &[Arg]) -> Result<String, M::Error>
    where
        M: Messages + ?Sized,
    {
        messages.resolve_default(&self.key, args)
    }

    /// Resolves the key in `lang`.
    pub fn resolve_with_locale<M>(
        &self,
        messages: &M,
        lang: &Lang,
        args: &[Arg],
    ) -> Result<String, M::Error>
    where
        M: Messages + ?Sized,
    {
        messages.resolve_with_locale(lang, &self.key, args)
    }
}

/// Types that name a message, usually enums deriving `AsMessageKey`.
pub trait AsMessageKey {
    fn message_key(&self) -> MessageKey;
}

impl AsMessageKey for MessageKey {
    fn message_key(&self) -> MessageKey {
        self.clone()
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

impl AsRef<str> for MessageKey {
    fn as_ref(&self) -> &str {
        &self.key
    }
}

impl TryFrom<&str> for MessageKey {
    type Error = InvalidKey;

    fn try_from(key: &str) -> Result<Self, Self::Error> {
        MessageKey::new(key)
    }
}

impl TryFrom<String> for MessageKey {
    type Error = InvalidKey;

    fn try_from(key: String) -> Result<Self, Self::Error> {
        MessageKey::new(key)
    }
}

impl TryFrom<Option<&str>> for MessageKey {
    type Error = InvalidKey;

    fn try_from(key: Option<&str>) -> Result<Self, Self::Error> {
        key.ok_or(InvalidKey).and_then(|key| MessageKey::new(key))
    }
}

impl From<MessageKey> for String {
    fn from(key: MessageKey) -> Self {
        key.key
    }
}

impl<'de> Deserialize<'de> for MessageKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        MessageKey::new(key).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_empty() {
        for k in ["a", "welcome.title", "errors.invalid_id", " ", "é"] {
            let key = MessageKey::new(k).unwrap();
            assert_eq!(key.key(), k);
            assert_eq!(key.to_string(), k);
        }
    }

    #[test]
    fn rejects_empty_and_none() {
        assert_eq!(MessageKey::new(""), Err(InvalidKey));
        assert_eq!(MessageKey::new(String::new()), Err(InvalidKey));
        assert_eq!(MessageKey::try_from(None::<&str>), Err(InvalidKey));
        assert_eq!(MessageKey::try_from(Some("")), Err(InvalidKey));
        assert_eq!(MessageKey::try_from(Some("k")).unwrap().key(), "k");
    }

    #[test]
    fn serde_keeps_invariant() {
        let key = MessageKey::new("greeting").unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), r#""greeting""#);
        assert_eq!(serde_json::from_str::<MessageKey>(r#""greeting""#).unwrap(), key);
        assert!(serde_json::from_str::<MessageKey>(r#""""#).is_err());
    }
}
