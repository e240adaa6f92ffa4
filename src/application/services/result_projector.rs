use serde::Deserialize;
use serde_json::Value;

use crate::domain::{TranscriptResult, TranscriptWord};

/// Which part of a completed job is returned to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionMode {
    #[default]
    Words,
    FullPayload,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ResultProjector {
    mode: ProjectionMode,
}

impl ResultProjector {
    pub fn new(mode: ProjectionMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ProjectionMode {
        self.mode
    }

    /// A payload without word data projects to an empty word list.
    pub fn project(&self, payload: &Value) -> TranscriptResult {
        match self.mode {
            ProjectionMode::FullPayload => TranscriptResult::Payload(payload.clone()),
            ProjectionMode::Words => TranscriptResult::Words(project_words(payload)),
        }
    }
}

fn project_words(payload: &Value) -> Vec<TranscriptWord> {
    let Some(words) = payload.get("words").and_then(Value::as_array) else {
        return Vec::new();
    };

    words
        .iter()
        .enumerate()
        .filter_map(|(index, word)| match word {
            Value::Object(fields) => Some(TranscriptWord::new(fields.clone())),
            other => {
                tracing::warn!(index, value = %other, "Skipping word entry that is not an object");
                None
            }
        })
        .collect()
}
