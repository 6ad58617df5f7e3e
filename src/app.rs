use std::path::Path;

use crate::catalog::Catalog;
use crate::config::Settings;
use crate::error::AppError;
use crate::services::pipeline::{self, RunReport};
use crate::services::sql;
use crate::services::translate::{GoogleTranslator, IdentityTranslator, Translator};

/// Runs one generation: load catalog, translate, write the SQL file and,
/// if configured, the JSON report.
///
/// Catalog, category and translator problems fail before any translation
/// request is made. The SQL file is the only required artifact: a report
/// that cannot be written is logged and does not fail the run.
pub fn execute(settings: &Settings) -> Result<RunReport, AppError> {
    let catalog = match &settings.catalog {
        Some(path) => Catalog::from_json_file(path)?,
        None => Catalog::builtin(),
    };
    let categories = settings.category_list()?;

    let translator: Box<dyn Translator> = if settings.offline {
        tracing::info!("Offline mode, glosses are emitted untranslated");
        Box::new(IdentityTranslator)
    } else {
        Box::new(GoogleTranslator::new(settings.timeout())?)
    };

    let output = pipeline::run(
        &catalog,
        &categories,
        translator.as_ref(),
        &settings.pipeline_config(),
    );

    sql::write_output(&settings.output, &output.sql())?;
    tracing::info!(path = %settings.output.display(), statements = output.statements.len(), "SQL file written");

    if let Some(path) = &settings.report {
        match write_report(path, &output.report) {
            Ok(()) => tracing::info!(path = %path.display(), "Report written"),
            Err(err) => tracing::warn!(path = %path.display(), "Report not written: {err}"),
        }
    }

    Ok(output.report)
}

fn write_report(path: &Path, report: &RunReport) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(report)?;
    sql::write_output(path, &json)
}
