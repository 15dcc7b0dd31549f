use std::path::PathBuf;

use thiserror::Error;

/// The key given to [`MessageKey::new`](crate::MessageKey::new) was missing or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("'key' must be provided")]
pub struct InvalidKey;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LangError {
    #[error("invalid language tag: {0:?}")]
    Invalid(String),
}

/// Errors from building or querying a [`Catalog`](crate::Catalog).
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no message for key '{key}' in language '{lang}'")]
    MissingMessage { key: String, lang: String },

    #[error("couldn't read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("couldn't parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}
