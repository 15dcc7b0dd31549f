use std::collections::HashMap;
use std::path::Path;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::lang::Lang;

type JsonMessages = HashMap<String, HashMap<Lang, String>>;

/// Loads a JSON catalog file shaped as `{ "key": { "lang": "template" } }`.
pub fn load_json(path: impl AsRef<Path>, default_lang: Lang) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_owned(),
        source,
    })?;

    let messages: JsonMessages =
        serde_json::from_reader(std::io::BufReader::new(file)).map_err(|e| CatalogError::Parse {
            path: path.to_owned(),
            message: e.to_string(),
        })?;

    let catalog = Catalog::from_hashmap(default_lang, messages);
    tracing::debug!(path = %path.display(), entries = catalog.len(), "loaded JSON catalog");
    Ok(catalog)
}

/// Same as [`load_json`], from an in-memory string.
pub fn from_json_str(json: &str, default_lang: Lang) -> Result<Catalog, CatalogError> {
    let messages: JsonMessages = serde_json::from_str(json).map_err(|e| CatalogError::Parse {
        path: "<string>".into(),
        message: e.to_string(),
    })?;
    Ok(Catalog::from_hashmap(default_lang, messages))
}
