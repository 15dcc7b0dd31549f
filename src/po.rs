use std::path::{Path, PathBuf};

use poreader::{Message, PoParser};

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::lang::Lang;

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> CatalogError {
    let path = path.to_owned();
    move |source| CatalogError::Io { path, source }
}

/// Loads every `<lang>.po` file of `dir` into one catalog.
///
/// Files whose stem is not a language tag are skipped. Plural and
/// untranslated units are skipped too.
pub fn load_po_dir(dir: impl AsRef<Path>, default_lang: Lang) -> Result<Catalog, CatalogError> {
    let dir = dir.as_ref();

    // Get list of .po files
    let mut po_files: Vec<(Lang, PathBuf)> = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err(dir))? {
        let path = entry.map_err(io_err(dir))?.path();
        if path.extension().map_or(true, |ext| ext != "po") {
            continue;
        }
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        match stem.parse::<Lang>() {
            Ok(lang) => po_files.push((lang, path)),
            Err(e) => tracing::debug!(path = %path.display(), "skipping PO file: {e}"),
        }
    }
    po_files.sort();

    // Get the messages from the .po files
    let mut catalog = Catalog::new(default_lang);
    for (lang, po_file) in po_files {
        let file = std::fs::File::open(&po_file).map_err(io_err(&po_file))?;
        let parser = PoParser::new();
        let reader = parser
            .parse(std::io::BufReader::new(file))
            .map_err(|e| CatalogError::Parse {
                path: po_file.clone(),
                message: e.to_string(),
            })?;

        let units = reader.map(|unit| {
            unit.map(|unit| match unit.message() {
                Message::Simple { id, text: Some(text) } => Some((id.clone(), text.clone())),
                _ => None,
            })
        });
        let loaded = insert_units(&mut catalog, &lang, &po_file, units);
        tracing::debug!(%lang, entries = loaded, "loaded {}", po_file.display());
    }
    Ok(catalog)
}

/// Inserts the translated simple units of one file, skipping invalid units,
/// the header (empty id) and untranslated entries. Returns how many were inserted.
fn insert_units<E: std::fmt::Display>(
    catalog: &mut Catalog,
    lang: &Lang,
    po_file: &Path,
    units: impl Iterator<Item = Result<Option<(String, String)>, E>>,
) -> usize {
    let mut loaded = 0;
    for unit in units {
        let (id, text) = match unit {
            Ok(Some(entry)) => entry,
            Ok(None) => continue,
            Err(e) => {
                tracing::warn!(%lang, "invalid unit in {}: {e}", po_file.display());
                continue;
            }
        };
        if id.is_empty() || text.is_empty() {
            continue;
        }
        catalog.insert(lang.clone(), id, text);
        loaded += 1;
    }
    loaded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{args, Messages};
    use pretty_assertions::assert_eq;

    const EN: &str = r#"
msgid ""
msgstr ""
"Content-Type: text/plain; charset=UTF-8\n"

msgid "invalid_password"
msgstr "invalid password"

msgid "invalid_id"
msgstr "invalid id {0}"

msgid "untranslated"
msgstr ""
"#;

    const FR: &str = r#"
msgid ""
msgstr ""
"Content-Type: text/plain; charset=UTF-8\n"

msgid "invalid_id"
msgstr "id invalide {0}"
"#;

    #[test]
    fn test_load_po_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("en.po"), EN).unwrap();
        std::fs::write(dir.path().join("fr.po"), FR).unwrap();
        std::fs::write(dir.path().join("README.md"), "not a catalog").unwrap();
        std::fs::write(dir.path().join("messages.po"), FR).unwrap();

        let en: Lang = "en".parse().unwrap();
        let fr: Lang = "fr".parse().unwrap();
        let catalog = load_po_dir(dir.path(), en.clone()).unwrap();

        assert_eq!(catalog.langs(), vec![&en, &fr]);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.contains(&en, "untranslated"));
        assert!(!catalog.contains(&en, ""));
        assert!(!catalog.contains(&fr, "invalid_password"));
        assert_eq!(
            catalog.resolve_with_locale(&fr, "invalid_id", &args![7]).unwrap(),
            "id invalide 7"
        );
        assert_eq!(
            catalog.resolve_with_locale(&fr, "invalid_password", &[]).unwrap(),
            "invalid password"
        );
    }

    #[test]
    fn test_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_po_dir(dir.path().join("locales"), "en".parse().unwrap()).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }), "{err}");
    }

    #[test]
    fn test_insert_units_skips_invalid() {
        let en: Lang = "en".parse().unwrap();
        let mut catalog = Catalog::new(en.clone());
        let units: Vec<Result<Option<(String, String)>, String>> = vec![
            Ok(Some((String::new(), "Content-Type: text/plain".to_owned()))),
            Err("unterminated string".to_owned()),
            Ok(Some(("greeting".to_owned(), "Hello".to_owned()))),
            Ok(None),
            Ok(Some(("untranslated".to_owned(), String::new()))),
            Ok(Some(("farewell".to_owned(), "Bye".to_owned()))),
        ];

        let loaded = insert_units(&mut catalog, &en, Path::new("en.po"), units.into_iter());
        assert_eq!(loaded, 2);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(&en, "greeting"), Some("Hello"));
        assert_eq!(catalog.get(&en, "farewell"), Some("Bye"));
        assert!(!catalog.contains(&en, "untranslated"));
    }
}
