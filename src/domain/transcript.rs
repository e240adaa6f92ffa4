use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A recognised word exactly as the remote service reported it.
///
/// Every field, including nulls and keys this crate does not know about,
/// survives a serialize round trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranscriptWord(Map<String, Value>);

impl TranscriptWord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn text(&self) -> Option<&str> {
        self.0.get("text").and_then(Value::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TranscriptResult {
    Words(Vec<TranscriptWord>),
    Payload(Value),
}

impl TranscriptResult {
    pub fn words(&self) -> &[TranscriptWord] {
        match self {
            TranscriptResult::Words(words) => words,
            TranscriptResult::Payload(_) => &[],
        }
    }
}
