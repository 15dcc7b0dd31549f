//! actix-web compatibility layer.

use std::future::{ready, Ready};

use actix_web::{dev::Payload, http::header::ACCEPT_LANGUAGE, web, FromRequest, HttpRequest};

use crate::args::Arg;
use crate::lang::Lang;
use crate::messages::Messages;

/// Languages from the request's `Accept-Language` header, most preferred first.
///
/// A missing or unreadable header gives an empty list; extraction never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcceptLang(Vec<Lang>);

impl AcceptLang {
    pub fn langs(&self) -> &[Lang] {
        &self.0
    }

    pub fn preferred(&self) -> Option<&Lang> {
        self.0.first()
    }

    /// Walks the preferences in order and returns the first that `available`
    /// can serve: the exact tag, else its bare language (`fr-CH` against `fr`),
    /// else any available tag of the same language (`fr-CH` against `fr-FR`).
    pub fn negotiate<'a>(&self, available: impl IntoIterator<Item = &'a Lang>) -> Option<Lang> {
        let available: Vec<&Lang> = available.into_iter().collect();
        self.0.iter().find_map(|lang| {
            let bare = lang.without_country();
            available
                .iter()
                .find(|a| **a == lang)
                .or_else(|| available.iter().find(|a| Some(**a) == bare.as_ref()))
                .or_else(|| available.iter().find(|a| a.language() == lang.language()))
                .map(|a| (*a).clone())
        })
    }
}

impl FromRequest for AcceptLang {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let langs = req
            .headers()
            .get(ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .map(Lang::from_accept_language)
            .unwrap_or_default();
        ready(Ok(AcceptLang(langs)))
    }
}

impl<M: Messages + ?Sized> Messages for web::Data<M> {
    type Error = M::Error;

    fn resolve_default(&self, key: &str, args: &[Arg]) -> Result<String, Self::Error> {
        (**self).resolve_default(key, args)
    }

    fn resolve_with_locale(&self, lang: &Lang, key: &str, args: &[Arg]) -> Result<String, Self::Error> {
        (**self).resolve_with_locale(lang, key, args)
    }
}
