use std::fs;
use std::path::Path;

use crate::error::CatalogError;
use crate::model::entry::VocabEntry;

mod builtin;

pub use builtin::BUILTIN_ROWS;

/// Ordered source rows fed to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    entries: Vec<VocabEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<VocabEntry>) -> Self {
        Self { entries }
    }

    pub fn builtin() -> Self {
        let entries = BUILTIN_ROWS
            .iter()
            .map(|&(word, transcription, gloss)| VocabEntry::new(word, transcription, gloss))
            .collect();
        Self { entries }
    }

    /// Reads a JSON array of `{ "word", "transcription", "gloss" }` objects.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let data = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let entries: Vec<VocabEntry> =
            serde_json::from_str(&data).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(path = %path.display(), rows = entries.len(), "Loaded catalog file");

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    fn builtin_keeps_authoring_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 254);
        assert_eq!(catalog.entries()[0], VocabEntry::new("你好", "ni3 hao3", "hello"));
        assert_eq!(catalog.entries()[253], VocabEntry::new("图片", "tu2 pian4", "image"));
    }

    #[rstest]
    fn builtin_contains_repeated_words() {
        let catalog = Catalog::builtin();
        let fish = catalog.entries().iter().filter(|e| e.word == "鱼").count();
        assert_eq!(fish, 2);
    }

    #[rstest]
    fn from_json_file_reads_entries() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"[{"word": "猫", "transcription": "mao1", "gloss": "cat"},
                {"word": "狗", "transcription": "gou3", "gloss": "dog"}]"#,
        )
        .unwrap();

        let catalog = Catalog::from_json_file(&path).unwrap();

        assert_eq!(
            catalog.entries(),
            &[VocabEntry::new("猫", "mao1", "cat"), VocabEntry::new("狗", "gou3", "dog")]
        );
    }

    #[rstest]
    fn from_json_file_rejects_unknown_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, r#"[{"word": "猫", "pinyin": "mao1", "gloss": "cat"}]"#).unwrap();

        assert!(matches!(Catalog::from_json_file(&path), Err(CatalogError::Parse { .. })));
    }

    #[rstest]
    fn from_json_file_missing_is_read_error() {
        let dir = TempDir::new().unwrap();
        let result = Catalog::from_json_file(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(CatalogError::Read { .. })));
    }
}
