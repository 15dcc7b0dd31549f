//! Validated message keys that resolve against an injected message catalog.
//!
//! A [`MessageKey`] is checked once, when it is built, and then forwards every
//! lookup to whatever implements [`Messages`]. The crate ships an in-memory
//! [`Catalog`] with JSON and PO loaders, and an actix-web extractor behind the
//! `actix` feature.

pub mod args;
pub mod catalog;
pub mod error;
pub mod json;
pub mod key;
pub mod lang;
pub mod messages;

#[cfg(feature = "actix")]
pub mod actix;
#[cfg(feature = "po")]
pub mod po;

pub use args::Arg;
pub use catalog::Catalog;
pub use error::{CatalogError, InvalidKey, LangError};
pub use key::{AsMessageKey, MessageKey};
pub use lang::Lang;
pub use messages::Messages;

#[cfg(feature = "derive")]
pub use message_key_derive::AsMessageKey;
