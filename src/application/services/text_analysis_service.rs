use std::borrow::Cow;
use std::sync::Arc;

use crate::application::ports::{CompletionRequest, LlmClient, LlmClientError};

pub const TOPIC_MAX_INPUT_CHARS: usize = 8_000;
pub const SUMMARY_MAX_INPUT_CHARS: usize = 12_000;

const TOPIC_SYSTEM_PROMPT: &str = "\
You classify documents into a video topic category.

Categories:
- Technology & AI (neural, network, artificial, intelligence, machine, learning, algorithm, computer, software, programming, code, data, database, technology)
- Science & Nature (science, biology, chemistry, physics, nature, environment, climate, energy, research)
- Business & Finance (business, finance, economy, market, investment, management, strategy)
- Health & Medicine (health, medical, medicine, treatment, therapy, patient)
- Education & Research (education, study, academic, university, student)
- Space & Astronomy (space, astronomy, planet, universe, galaxy, cosmic)

Reply with ONLY the most relevant category name from the list. If nothing fits, reply with \"default\".";

#[derive(Debug, Clone)]
pub struct TextAnalysisModels {
    pub topic_model: String,
    pub summary_model: String,
}

/// Topic classification and summarization over a chat-completion model.
pub struct TextAnalysisService {
    llm_client: Arc<dyn LlmClient>,
    models: TextAnalysisModels,
}

impl TextAnalysisService {
    pub fn new(llm_client: Arc<dyn LlmClient>, models: TextAnalysisModels) -> Self {
        Self { llm_client, models }
    }

    pub async fn classify_topic(&self, text: &str) -> Result<String, TextAnalysisError> {
        if text.is_empty() {
            return Err(TextAnalysisError::EmptyText);
        }

        let document = truncate_chars(text, TOPIC_MAX_INPUT_CHARS);
        let request = CompletionRequest {
            model: self.models.topic_model.clone(),
            system_prompt: Some(TOPIC_SYSTEM_PROMPT.to_string()),
            user_prompt: format!(
                "Analyze this document and tell me which video category it belongs to:\n\n{}",
                document
            ),
            max_tokens: 50,
            temperature: 0.3,
        };

        let answer = self.llm_client.complete(&request).await?;
        let topic = answer.trim().to_lowercase();

        tracing::info!(topic = %topic, input_chars = text.chars().count(), "Topic classified");

        Ok(topic)
    }

    pub async fn summarize(&self, text: &str) -> Result<String, TextAnalysisError> {
        if text.trim().is_empty() {
            return Err(TextAnalysisError::EmptyText);
        }

        let document = truncate_chars(text, SUMMARY_MAX_INPUT_CHARS);
        let request = CompletionRequest {
            model: self.models.summary_model.clone(),
            system_prompt: None,
            user_prompt: format!(
                "Summarize the following document in under 30 words. Be blunt and get to \
                 the point, no fluff. Document: {}",
                document
            ),
            max_tokens: 300,
            temperature: 0.9,
        };

        let summary = self.llm_client.complete(&request).await?.trim().to_string();

        tracing::info!(summary_chars = summary.len(), "Document summarized");

        Ok(summary)
    }
}

/// Cuts `text` to `max_chars` characters, marking the cut with an ellipsis.
pub fn truncate_chars(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => Cow::Owned(format!("{}...", &text[..byte_index])),
        None => Cow::Borrowed(text),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TextAnalysisError {
    #[error("missing text")]
    EmptyText,
    #[error(transparent)]
    Completion(#[from] LlmClientError),
}
