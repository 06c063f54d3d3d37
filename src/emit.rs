//! Writing theme documents to disk.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};
use tracing::info;

use crate::{
    error::{ThemeError, ThemeResult},
    theme::ThemeDocument,
};

const FILE_SUFFIX: &str = "-color-theme.json";

/// `Gruvalized Light` becomes `gruvalized-light-color-theme.json`
pub fn file_name(theme_name: &str) -> String {
    let mut slug = String::with_capacity(theme_name.len() + FILE_SUFFIX.len());
    for word in theme_name
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        if !slug.is_empty() {
            slug.push('-');
        }
        slug.push_str(&word.to_lowercase());
    }
    if slug.is_empty() {
        slug.push_str("theme");
    }
    slug.push_str(FILE_SUFFIX);
    slug
}

/// Serialize `doc` into `dir`, creating the directory if needed.
/// Returns the path written.
pub fn write_theme(dir: impl AsRef<Path>, doc: &ThemeDocument) -> ThemeResult<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| ThemeError::io(dir, e))?;

    let path = dir.join(file_name(&doc.name));
    let json = doc.to_json().map_err(|e| ThemeError::io(&path, e))?;
    fs::write(&path, json).map_err(|e| ThemeError::io(&path, e))?;

    info!(path = %path.display(), theme = %doc.name, "wrote theme");
    Ok(path)
}

/// Write every document into `dir`. Nothing is written when two documents
/// would share a file name.
pub fn write_themes(dir: impl AsRef<Path>, docs: &[ThemeDocument]) -> ThemeResult<Vec<PathBuf>> {
    let mut claimed: HashMap<String, &str> = HashMap::with_capacity(docs.len());
    for doc in docs {
        let file = file_name(&doc.name);
        if let Some(first) = claimed.get(&file) {
            return Err(ThemeError::duplicate_output(file, *first, doc.name.as_str()));
        }
        claimed.insert(file, &doc.name);
    }

    let dir = dir.as_ref();
    docs.iter().map(|doc| write_theme(dir, doc)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{gruvalized_dark, gruvalized_light};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_file_names() {
        assert_eq!(
            file_name("Gruvalized Light"),
            "gruvalized-light-color-theme.json"
        );
        assert_eq!(
            file_name("Gruvalized Dark"),
            "gruvalized-dark-color-theme.json"
        );
        assert_eq!(
            file_name("  Solar / Flare 2 "),
            "solar-flare-2-color-theme.json"
        );
        assert_eq!(file_name("***"), "theme-color-theme.json");
    }

    #[test]
    fn test_file_names_keep_non_ascii_letters() {
        assert_eq!(
            file_name("Grüvalized Dark"),
            "grüvalized-dark-color-theme.json"
        );
        assert_eq!(file_name("ÉTÉ"), "été-color-theme.json");
    }

    #[test]
    fn test_write_theme_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("nested").join("themes");

        let doc = ThemeDocument::build(&gruvalized_dark()).unwrap();
        let path = write_theme(&out, &doc).unwrap();

        assert_eq!(path, out.join("gruvalized-dark-color-theme.json"));
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, doc.to_json().unwrap());
    }

    #[test]
    fn test_write_theme_reports_io_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        fs::write(&blocker, "x").unwrap();

        let doc = ThemeDocument::build(&gruvalized_light()).unwrap();
        match write_theme(&blocker, &doc) {
            Err(ThemeError::Io { path, .. }) => assert_eq!(path, blocker),
            other => panic!("expected io error, got {:?}", other),
        }
    }

    #[test]
    fn test_write_themes_writes_each_document() {
        let tmp = tempfile::tempdir().unwrap();
        let docs = [
            ThemeDocument::build(&gruvalized_light()).unwrap(),
            ThemeDocument::build(&gruvalized_dark()).unwrap(),
        ];

        let paths = write_themes(tmp.path(), &docs).unwrap();
        assert_eq!(
            paths,
            vec![
                tmp.path().join("gruvalized-light-color-theme.json"),
                tmp.path().join("gruvalized-dark-color-theme.json"),
            ]
        );
        assert!(paths.iter().all(|p| p.is_file()));
    }

    #[test]
    fn test_write_themes_rejects_clashing_names() {
        let tmp = tempfile::tempdir().unwrap();
        let mut renamed = gruvalized_light();
        renamed.name = "gruvalized  DARK".to_string();
        let docs = [
            ThemeDocument::build(&gruvalized_dark()).unwrap(),
            ThemeDocument::build(&renamed).unwrap(),
        ];

        match write_themes(tmp.path(), &docs) {
            Err(ThemeError::DuplicateOutput {
                file,
                first,
                second,
            }) => {
                assert_eq!(file, "gruvalized-dark-color-theme.json");
                assert_eq!(first, "Gruvalized Dark");
                assert_eq!(second, "gruvalized  DARK");
            }
            other => panic!("expected duplicate output error, got {:?}", other),
        }
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    }
}
