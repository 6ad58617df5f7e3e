use serde::{Deserialize, Serialize};

/// One catalog row: a Chinese word, its numbered pinyin and an English gloss.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct VocabEntry {
    pub word: String,

    pub transcription: String,

    #[serde(rename = "gloss")]
    pub gloss_source: String,
}

impl VocabEntry {
    pub fn new(
        word: impl Into<String>,
        transcription: impl Into<String>,
        gloss_source: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            transcription: transcription.into(),
            gloss_source: gloss_source.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GlossOutcome {
    Translated,
    Fallback,
    /// No service was asked; the source gloss was passed through.
    Untranslated,
}

/// A surviving entry together with its target-language gloss.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct TranslatedEntry {
    pub entry: VocabEntry,
    pub gloss_target: String,
    pub outcome: GlossOutcome,
}
