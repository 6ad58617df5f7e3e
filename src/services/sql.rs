use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::model::entry::TranslatedEntry;

/// Doubles single quotes for use inside a SQL string literal.
pub fn escape_sql_literal(s: &str) -> String {
    s.replace('\'', "''")
}

/// One `INSERT INTO vocabulary` row.
///
/// Word and pinyin go in verbatim unless `escape_all_fields` is set; the
/// columns this tool does not fill get `''` or `NULL`.
pub fn insert_statement(
    row: &TranslatedEntry,
    category_id: usize,
    escape_all_fields: bool,
) -> String {
    let (word, transcription) = if escape_all_fields {
        (
            escape_sql_literal(&row.entry.word),
            escape_sql_literal(&row.entry.transcription),
        )
    } else {
        (row.entry.word.clone(), row.entry.transcription.clone())
    };

    format!(
        "INSERT INTO vocabulary (chinese_word, pinyin, meaning_vn, audio_url, lesson_id, category_id, part_of_speech) \
         VALUES ('{}', '{}', '{}', '', NULL, {}, '');",
        word,
        transcription,
        escape_sql_literal(&row.gloss_target),
        category_id
    )
}

pub fn render(statements: &[String]) -> String {
    statements.join("\n")
}

/// Writes the whole artifact in one go through a sibling temp file.
pub fn write_output(path: &Path, text: &str) -> Result<(), AppError> {
    let output_err = |source| AppError::Output {
        path: path.to_path_buf(),
        source,
    };

    let tmp = tmp_path(path);

    if let Some(parent) = tmp.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(output_err)?;
        }
    }

    fs::write(&tmp, text.as_bytes()).map_err(output_err)?;
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(output_err(err));
    }

    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut p = path.to_path_buf();
    let file_name = match path.file_name().and_then(|s| s.to_str()) {
        Some(n) => n.to_string(),
        None => "output".to_string(),
    };
    p.set_file_name(format!("{file_name}.tmp"));
    p
}
