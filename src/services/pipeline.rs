use serde::Serialize;

use crate::catalog::Catalog;
use crate::model::category::{CategoryAssignment, CategoryList};
use crate::model::entry::{GlossOutcome, TranslatedEntry};
use crate::services::{
    dedup::{self, SeenSets},
    qa::{self, QaIssue},
    sql,
    translate::{self, Translator},
};

#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig<'a> {
    pub source_lang: &'a str,
    pub target_lang: &'a str,
    pub assignment: CategoryAssignment,
    pub escape_all_fields: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedRow {
    pub category_id: usize,
    pub row: TranslatedEntry,
}

#[derive(Debug, Serialize, Default)]
pub struct RunReport {
    pub catalog_size: usize,
    pub unique_entries: usize,
    pub translated: usize,
    pub fallbacks: usize,
    pub untranslated: usize,
    pub duplicate_glosses: usize,
    pub emitted: usize,
    pub issues: Vec<QaIssue>,
}

#[derive(Debug)]
pub struct PipelineOutput {
    pub rows: Vec<EmittedRow>,
    pub statements: Vec<String>,
    pub report: RunReport,
}

impl PipelineOutput {
    pub fn sql(&self) -> String {
        sql::render(&self.statements)
    }
}

/// Dedups the catalog, translates every surviving gloss, drops repeated
/// translations and builds one INSERT per remaining row.
///
/// With [`CategoryAssignment::SourceIndex`] the category index is the row's
/// position after the word/pinyin pass, so a row dropped for its gloss still
/// consumes an id. Translation failures never abort the run.
pub fn run<T: Translator + ?Sized>(
    catalog: &Catalog,
    categories: &CategoryList,
    translator: &T,
    cfg: &PipelineConfig<'_>,
) -> PipelineOutput {
    let mut report = RunReport {
        catalog_size: catalog.len(),
        ..RunReport::default()
    };
    tracing::info!(entries = catalog.len(), categories = categories.count(), "Catalog loaded");
    if catalog.is_empty() {
        tracing::warn!("Catalog is empty, no statements will be generated");
    }

    let mut seen = SeenSets::new();
    let unique = dedup::dedup_entries(catalog.entries(), &mut seen);
    report.unique_entries = unique.len();
    tracing::info!(entries = unique.len(), "Entries after word/pinyin dedup");

    let mut rows: Vec<EmittedRow> = Vec::with_capacity(unique.len());

    for (index, entry) in unique.into_iter().enumerate() {
        let translation =
            translate::translate_gloss(translator, &entry.gloss_source, cfg.source_lang, cfg.target_lang);

        match translation.outcome() {
            GlossOutcome::Translated => report.translated += 1,
            GlossOutcome::Fallback => report.fallbacks += 1,
            GlossOutcome::Untranslated => report.untranslated += 1,
        }

        if !seen.first_gloss(translation.text()) {
            tracing::debug!(word = %entry.word, gloss = translation.text(), "Skipping duplicate gloss");
            report.duplicate_glosses += 1;
            continue;
        }

        let position = match cfg.assignment {
            CategoryAssignment::SourceIndex => index,
            CategoryAssignment::EmissionOrder => rows.len(),
        };

        rows.push(EmittedRow {
            category_id: categories.id_for(position),
            row: TranslatedEntry {
                entry,
                outcome: translation.outcome(),
                gloss_target: translation.into_text(),
            },
        });
    }

    let statements: Vec<String> = rows
        .iter()
        .map(|r| sql::insert_statement(&r.row, r.category_id, cfg.escape_all_fields))
        .collect();

    report.emitted = statements.len();
    report.issues = qa::run(rows.iter().map(|r| &r.row));

    tracing::info!(
        emitted = report.emitted,
        fallbacks = report.fallbacks,
        duplicate_glosses = report.duplicate_glosses,
        issues = report.issues.len(),
        "Statements generated"
    );

    PipelineOutput {
        rows,
        statements,
        report,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rstest::rstest;

    use super::*;
    use crate::error::TranslateError;
    use crate::model::entry::VocabEntry;
    use crate::services::translate::IdentityTranslator;

    /// Looks glosses up in a table; anything missing fails.
    struct TableTranslator(HashMap<&'static str, &'static str>);

    impl Translator for TableTranslator {
        fn translate(&self, text: &str, _: &str, _: &str) -> Result<String, TranslateError> {
            self.0
                .get(text)
                .map(|t| t.to_string())
                .ok_or_else(|| TranslateError::Malformed("no entry".into()))
        }
    }

    fn cfg(assignment: CategoryAssignment) -> PipelineConfig<'static> {
        PipelineConfig {
            source_lang: "en",
            target_lang: "vi",
            assignment,
            escape_all_fields: false,
        }
    }

    fn categories(n: usize) -> CategoryList {
        CategoryList::new((0..n).map(|i| format!("C{i}")).collect()).unwrap()
    }

    fn catalog(rows: &[(&str, &str, &str)]) -> Catalog {
        Catalog::new(rows.iter().map(|&(w, t, g)| VocabEntry::new(w, t, g)).collect())
    }

    #[rstest]
    fn worked_example() {
        let catalog = catalog(&[
            ("你好", "ni3 hao3", "hello"),
            ("你好", "ni3 hao3", "hi"),
            ("谢谢", "xie4 xie5", "thanks"),
        ]);
        let categories = CategoryList::new(vec!["A".into(), "B".into()]).unwrap();

        let out = run(&catalog, &categories, &IdentityTranslator, &cfg(CategoryAssignment::SourceIndex));

        assert_eq!(
            out.sql(),
            "INSERT INTO vocabulary (chinese_word, pinyin, meaning_vn, audio_url, lesson_id, category_id, part_of_speech) \
             VALUES ('你好', 'ni3 hao3', 'hello', '', NULL, 1, '');\n\
             INSERT INTO vocabulary (chinese_word, pinyin, meaning_vn, audio_url, lesson_id, category_id, part_of_speech) \
             VALUES ('谢谢', 'xie4 xie5', 'thanks', '', NULL, 2, '');"
        );
        assert_eq!(out.report.catalog_size, 3);
        assert_eq!(out.report.unique_entries, 2);
        assert_eq!(out.report.emitted, 2);
        assert_eq!(out.report.translated, 0);
        assert_eq!(out.report.untranslated, 2);
        assert!(out.report.issues.is_empty());
    }

    #[rstest]
    fn categories_cycle_over_surviving_entries() {
        let rows: Vec<(String, String)> =
            (0..7).map(|i| (format!("w{i}"), format!("p{i}"))).collect();
        let catalog = Catalog::new(
            rows.iter()
                .map(|(w, p)| VocabEntry::new(w.as_str(), p.as_str(), w.as_str()))
                .collect(),
        );

        let out = run(&catalog, &categories(3), &IdentityTranslator, &cfg(CategoryAssignment::SourceIndex));

        let ids: Vec<usize> = out.rows.iter().map(|r| r.category_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 1, 2, 3, 1]);
    }

    #[rstest]
    fn duplicate_gloss_consumes_a_slot_by_default() {
        let catalog = catalog(&[
            ("橙子", "cheng2 zi5", "orange"),
            ("橙", "cheng2", "orange"),
            ("红", "hong2", "red"),
        ]);

        let out = run(&catalog, &categories(3), &IdentityTranslator, &cfg(CategoryAssignment::SourceIndex));

        let ids: Vec<(String, usize)> =
            out.rows.iter().map(|r| (r.row.entry.word.clone(), r.category_id)).collect();
        assert_eq!(ids, vec![("橙子".to_string(), 1), ("红".to_string(), 3)]);
        assert_eq!(out.report.duplicate_glosses, 1);
    }

    #[rstest]
    fn emission_order_mode_has_no_gaps() {
        let catalog = catalog(&[
            ("橙子", "cheng2 zi5", "orange"),
            ("橙", "cheng2", "orange"),
            ("红", "hong2", "red"),
        ]);

        let out = run(&catalog, &categories(3), &IdentityTranslator, &cfg(CategoryAssignment::EmissionOrder));

        let ids: Vec<usize> = out.rows.iter().map(|r| r.category_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[rstest]
    fn glosses_equal_after_translation_are_dropped() {
        let catalog = catalog(&[
            ("看", "kan4", "look"),
            ("看见", "kan4 jian4", "see"),
            ("听", "ting1", "listen"),
        ]);
        let translator =
            TableTranslator(HashMap::from([("look", "nhìn"), ("see", "nhìn"), ("listen", "nghe")]));

        let out = run(&catalog, &categories(17), &translator, &cfg(CategoryAssignment::SourceIndex));

        let glosses: Vec<&str> = out.rows.iter().map(|r| r.row.gloss_target.as_str()).collect();
        assert_eq!(glosses, vec!["nhìn", "nghe"]);
        assert_eq!(out.rows[1].category_id, 3);
    }

    #[rstest]
    fn failed_translation_emits_source_gloss() {
        let catalog = catalog(&[("猫", "mao1", "cat"), ("没关系", "mei2 guan1 xi5", "it's okay")]);
        let translator = TableTranslator(HashMap::from([("cat", "mèo")]));

        let out = run(&catalog, &categories(17), &translator, &cfg(CategoryAssignment::SourceIndex));

        assert_eq!(out.report.translated, 1);
        assert_eq!(out.report.fallbacks, 1);
        assert_eq!(out.rows[1].row.gloss_target, "it's okay");
        assert_eq!(out.rows[1].row.outcome, GlossOutcome::Fallback);
        assert!(out.statements[1].contains("'it''s okay'"));
        assert_eq!(out.report.issues.len(), 1);
        assert_eq!(out.report.issues[0].code, "TRANSLATION_FALLBACK");
    }

    #[rstest]
    fn empty_catalog_emits_nothing() {
        let out = run(&Catalog::default(), &categories(17), &IdentityTranslator, &cfg(CategoryAssignment::SourceIndex));

        assert!(out.statements.is_empty());
        assert_eq!(out.sql(), "");
        assert_eq!(out.report.emitted, 0);
    }
}
