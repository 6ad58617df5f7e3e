use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;

use crate::error::{AppError, TranslateError};
use crate::model::entry::GlossOutcome;

const ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";
const ERROR_SNIPPET_CHARS: usize = 400;

/// External text translation capability.
pub trait Translator {
    fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslateError>;

    /// True when `translate` returns its input as-is; such output is not
    /// counted as a translation.
    fn is_passthrough(&self) -> bool {
        false
    }
}

/// Result of translating one gloss; never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Translated(String),
    /// The service failed; holds the untranslated source text.
    Fallback(String),
    /// The translator is a pass-through; holds the source text.
    Untranslated(String),
}

impl Translation {
    pub fn text(&self) -> &str {
        match self {
            Translation::Translated(t) | Translation::Fallback(t) | Translation::Untranslated(t) => t,
        }
    }

    pub fn outcome(&self) -> GlossOutcome {
        match self {
            Translation::Translated(_) => GlossOutcome::Translated,
            Translation::Fallback(_) => GlossOutcome::Fallback,
            Translation::Untranslated(_) => GlossOutcome::Untranslated,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Translation::Translated(t) | Translation::Fallback(t) | Translation::Untranslated(t) => t,
        }
    }
}

/// Translates `gloss`, substituting the gloss itself on any failure.
pub fn translate_gloss<T: Translator + ?Sized>(
    translator: &T,
    gloss: &str,
    source_lang: &str,
    target_lang: &str,
) -> Translation {
    if translator.is_passthrough() {
        return Translation::Untranslated(gloss.to_string());
    }

    match translator.translate(gloss, source_lang, target_lang) {
        Ok(text) => Translation::Translated(text),
        Err(err) => {
            tracing::warn!(gloss, error = %err, "Translation failed, keeping source gloss");
            Translation::Fallback(gloss.to_string())
        }
    }
}

/// Client for the public Google Translate `translate_a/single` endpoint.
#[derive(Debug)]
pub struct GoogleTranslator {
    client: Client,
}

impl GoogleTranslator {
    /// Fails only if the HTTP client cannot be built, which leaves the run
    /// with no translator at all.
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::TranslatorUnavailable(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Translator for GoogleTranslator {
    fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslateError> {
        let resp = self
            .client
            .get(ENDPOINT)
            .query(&[
                ("client", "gtx"),
                ("sl", source_lang),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()?;

        let status = resp.status();
        let body = resp.text()?;

        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        parse_response(&body)
    }
}

/// Passes text through unchanged. Used for offline runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, text: &str, _: &str, _: &str) -> Result<String, TranslateError> {
        Ok(text.to_string())
    }

    fn is_passthrough(&self) -> bool {
        true
    }
}

fn status_error(status: StatusCode, body: &str) -> TranslateError {
    if status == StatusCode::TOO_MANY_REQUESTS || status == StatusCode::FORBIDDEN {
        return TranslateError::Quota(status.as_u16());
    }

    let trimmed = body.trim();
    let body = if trimmed.chars().count() > ERROR_SNIPPET_CHARS {
        let head: String = trimmed.chars().take(ERROR_SNIPPET_CHARS).collect();
        format!("{head}...")
    } else {
        trimmed.to_string()
    };

    TranslateError::Status {
        status: status.as_u16(),
        body,
    }
}

/// Extracts the translation from a `dt=t` response.
///
/// The payload is a nested array whose first element lists sentence chunks
/// `[translated, original, ...]`; the translation is the chunks joined.
pub fn parse_response(body: &str) -> Result<String, TranslateError> {
    let data: Value =
        serde_json::from_str(body).map_err(|e| TranslateError::Malformed(e.to_string()))?;

    let chunks = data
        .get(0)
        .and_then(|c| c.as_array())
        .ok_or_else(|| TranslateError::Malformed("missing chunk list".into()))?;

    let joined: String = chunks
        .iter()
        .filter_map(|chunk| chunk.get(0).and_then(|t| t.as_str()))
        .collect();

    let text = joined.trim();
    if text.is_empty() {
        return Err(TranslateError::Malformed("empty translation".into()));
    }

    Ok(text.to_string())
}
