use serde::{Deserialize, Serialize};

/// Processing flags sent with a transcription job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobOptions {
    pub punctuate: bool,
    pub format_text: bool,
    pub speaker_labels: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl Default for JobOptions {
    fn default() -> Self {
        Self {
            punctuate: true,
            format_text: true,
            speaker_labels: false,
            language_code: None,
        }
    }
}
