use std::sync::Arc;

use crate::args::Arg;
use crate::lang::Lang;

/// A message-resolution service.
///
/// [`MessageKey`](crate::MessageKey) forwards to these two methods and hands
/// back their result as-is, so the implementor decides what a missing key means.
pub trait Messages {
    type Error;

    /// Resolves `key` in the service's default language.
    fn resolve_default(&self, key: &str, args: &[Arg]) -> Result<String, Self::Error>;

    /// Resolves `key` in `lang`.
    fn resolve_with_locale(&self, lang: &Lang, key: &str, args: &[Arg]) -> Result<String, Self::Error>;
}

impl<M: Messages + ?Sized> Messages for &M {
    type Error = M::Error;

    fn resolve_default(&self, key: &str, args: &[Arg]) -> Result<String, Self::Error> {
        (**self).resolve_default(key, args)
    }

    fn resolve_with_locale(&self, lang: &Lang, key: &str, args: &[Arg]) -> Result<String, Self::Error> {
        (**self).resolve_with_locale(lang, key, args)
    }
}

impl<M: Messages + ?Sized> Messages for Box<M> {
    type Error = M::Error;

    fn resolve_default(&self, key: &str, args: &[Arg]) -> Result<String, Self::Error> {
        (**self).resolve_default(key, args)
    }

    fn resolve_with_locale(&self, lang: &Lang, key: &str, args: &[Arg]) -> Result<String, Self::Error> {
        (**self).resolve_with_locale(lang, key, args)
    }
}

impl<M: Messages + ?Sized> Messages for Arc<M> {
    type Error = M::Error;

    fn resolve_default(&self, key: &str, args: &[Arg]) -> Result<String, Self::Error> {
        (**self).resolve_default(key, args)
    }

    fn resolve_with_locale(&self, lang: &Lang, key: &str, args: &[Arg]) -> Result<String, Self::Error> {
        (**self).resolve_with_locale(lang, key, args)
    }
}
