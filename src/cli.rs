use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;
use crate::error::ConfigError;
use crate::model::category::CategoryAssignment;

/// Generate INSERT statements for the vocabulary table.
#[derive(Debug, Parser)]
#[command(name = "vocab-sql", version, about)]
pub struct Cli {
    /// Output SQL file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON catalog to use instead of the built-in word list
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// JSON settings file; flags given here take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub source_lang: Option<String>,

    #[arg(long)]
    pub target_lang: Option<String>,

    /// Per-request timeout for the translation service
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Skip the translation service and emit source glosses
    #[arg(long)]
    pub offline: bool,

    /// Number categories by emitted row instead of by deduplicated position
    #[arg(long)]
    pub assign_by_emission: bool,

    /// Escape word and pinyin as well as the gloss
    #[arg(long)]
    pub escape_all_fields: bool,

    /// Write a JSON run report here
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl Cli {
    /// Loads the settings file, if any, and applies the flags on top.
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        if let Some(output) = &self.output {
            settings.output = output.clone();
        }
        if let Some(catalog) = &self.catalog {
            settings.catalog = Some(catalog.clone());
        }
        if let Some(report) = &self.report {
            settings.report = Some(report.clone());
        }
        if let Some(lang) = &self.source_lang {
            settings.source_lang = lang.clone();
        }
        if let Some(lang) = &self.target_lang {
            settings.target_lang = lang.clone();
        }
        if let Some(secs) = self.timeout_secs {
            settings.timeout_secs = secs;
        }
        if self.offline {
            settings.offline = true;
        }
        if self.assign_by_emission {
            settings.category_assignment = CategoryAssignment::EmissionOrder;
        }
        if self.escape_all_fields {
            settings.escape_all_fields = true;
        }

        settings.validate()?;
        Ok(settings)
    }
}
