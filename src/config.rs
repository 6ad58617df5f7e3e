use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::model::category::{CategoryAssignment, CategoryList};
use crate::services::pipeline::PipelineConfig;

pub const DEFAULT_OUTPUT: &str = "insert_vocabulary_real.sql";

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_source_lang() -> String {
    "en".to_string()
}

fn default_target_lang() -> String {
    "vi".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Run settings, read from an optional JSON file and then overridden by CLI flags.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Settings {
    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(default)]
    pub catalog: Option<PathBuf>,

    #[serde(default)]
    pub report: Option<PathBuf>,

    #[serde(default = "default_source_lang")]
    pub source_lang: String,

    #[serde(default = "default_target_lang")]
    pub target_lang: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub offline: bool,

    #[serde(default)]
    pub category_assignment: CategoryAssignment,

    #[serde(default)]
    pub escape_all_fields: bool,

    /// Replaces the built-in topic list; only its length affects the ids.
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: default_output(),
            catalog: None,
            report: None,
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
            timeout_secs: default_timeout_secs(),
            offline: false,
            category_assignment: CategoryAssignment::default(),
            escape_all_fields: false,
            categories: None,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!("Loading configuration from: {:?}", path);

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;

        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source_lang.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "sourceLang",
                message: "must not be empty".into(),
            });
        }
        if self.target_lang.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "targetLang",
                message: "must not be empty".into(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "timeoutSecs",
                message: "must be at least 1".into(),
            });
        }
        self.category_list()?;
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn category_list(&self) -> Result<CategoryList, ConfigError> {
        match &self.categories {
            None => Ok(CategoryList::default()),
            Some(names) => CategoryList::new(names.clone()).ok_or(ConfigError::Invalid {
                field: "categories",
                message: "must contain at least one name".into(),
            }),
        }
    }

    pub fn pipeline_config(&self) -> PipelineConfig<'_> {
        PipelineConfig {
            source_lang: &self.source_lang,
            target_lang: &self.target_lang,
            assignment: self.category_assignment,
            escape_all_fields: self.escape_all_fields,
        }
    }
}
