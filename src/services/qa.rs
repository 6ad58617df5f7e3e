use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::entry::{GlossOutcome, TranslatedEntry};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct QaIssue {
    pub word: String,
    pub code: String,
    pub message: String,
}

impl QaIssue {
    fn new(row: &TranslatedEntry, code: &str, message: &str) -> Self {
        Self {
            word: row.entry.word.clone(),
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}

fn pinyin_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-zü:v]+[1-5]( [a-zü:v]+[1-5])*$").expect("pinyin pattern is valid")
    })
}

/// Reports data-quality problems in emitted rows. Never changes the rows.
pub fn run<'a>(rows: impl IntoIterator<Item = &'a TranslatedEntry>) -> Vec<QaIssue> {
    let mut issues: Vec<QaIssue> = Vec::new();

    for row in rows {
        let gloss_source = row.entry.gloss_source.trim();
        let gloss_target = row.gloss_target.trim();

        match row.outcome {
            GlossOutcome::Fallback => issues.push(QaIssue::new(
                row,
                "TRANSLATION_FALLBACK",
                "Translation failed; source gloss emitted unchanged",
            )),
            GlossOutcome::Untranslated => {}
            GlossOutcome::Translated => {
                if !gloss_target.is_empty() && gloss_target == gloss_source {
                    issues.push(QaIssue::new(
                        row,
                        "SAME_AS_SOURCE",
                        "Translated gloss is identical to the source gloss",
                    ));
                }
            }
        }

        if row.entry.word.trim().is_empty()
            || row.entry.transcription.trim().is_empty()
            || gloss_target.is_empty()
        {
            issues.push(QaIssue::new(row, "EMPTY_FIELD", "Word, pinyin or gloss is empty"));
        } else if !pinyin_pattern().is_match(&row.entry.transcription) {
            issues.push(QaIssue::new(
                row,
                "INVALID_TRANSCRIPTION",
                "Pinyin is not lower-case syllables with tone numbers 1-5",
            ));
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::model::entry::VocabEntry;

    fn row(transcription: &str, source: &str, target: &str, outcome: GlossOutcome) -> TranslatedEntry {
        TranslatedEntry {
            entry: VocabEntry::new("词", transcription, source),
            gloss_target: target.to_string(),
            outcome,
        }
    }

    fn codes(rows: &[TranslatedEntry]) -> Vec<String> {
        run(rows).into_iter().map(|i| i.code).collect()
    }

    #[rstest]
    fn clean_row_has_no_issues() {
        assert!(codes(&[row("ci2", "word", "từ", GlossOutcome::Translated)]).is_empty());
    }

    #[rstest]
    fn fallback_is_reported() {
        assert_eq!(
            codes(&[row("ci2", "word", "word", GlossOutcome::Fallback)]),
            vec!["TRANSLATION_FALLBACK"]
        );
    }

    #[rstest]
    fn passthrough_gloss_is_not_same_as_source() {
        assert!(codes(&[row("ci2", "email", "email", GlossOutcome::Untranslated)]).is_empty());
    }

    #[rstest]
    fn unchanged_translation_is_reported() {
        assert_eq!(
            codes(&[row("ci2", "email", "email", GlossOutcome::Translated)]),
            vec!["SAME_AS_SOURCE"]
        );
    }

    #[rstest]
    #[case("ni3 hao3", true)]
    #[case("nv3 er2", true)]
    #[case("lü4", true)]
    #[case("ni hao", false)]
    #[case("Ni3", false)]
    #[case("ni3  hao3", false)]
    #[case("ni6", false)]
    fn transcription_format(#[case] transcription: &str, #[case] valid: bool) {
        let found = codes(&[row(transcription, "x", "y", GlossOutcome::Translated)]);
        assert_eq!(found.is_empty(), valid, "{transcription}: {found:?}");
    }

    #[rstest]
    fn empty_gloss_is_reported() {
        assert_eq!(
            codes(&[row("ci2", "word", "  ", GlossOutcome::Translated)]),
            vec!["EMPTY_FIELD"]
        );
    }
}
