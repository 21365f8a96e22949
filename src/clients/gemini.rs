use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::GeminiConfig;

/// Returned inside a 200 payload when the provider response lacks the
/// expected candidate structure. Kept verbatim for wire compatibility.
pub const GENERATION_FAILED: &str = "AI generation failed. Please try again.";

pub const SUMMARY_INSTRUCTION: &str = "Summarize the following reviews in 2-3 lines:\n\n";

/// How many reviews feed into a summary prompt.
pub const SUMMARY_REVIEW_CAP: usize = 5;

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

impl GenerateContentRequest {
    fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

// The response is only loosely validated: every level is optional and a
// missing path yields the failure sentinel instead of a deserialization
// error, tolerating provider response variability.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn first_text(self) -> Option<String> {
        self.candidates?
            .into_iter()
            .next()?
            .content?
            .parts?
            .into_iter()
            .next()?
            .text
    }
}

/// A review text submitted to the overview endpoint.
#[derive(Debug, Deserialize)]
pub struct ReviewText {
    #[serde(rename = "Review", alias = "review")]
    pub review: String,
}

pub fn build_summary_prompt(reviews: &[ReviewText]) -> String {
    let mut prompt = String::from(SUMMARY_INSTRUCTION);
    for r in reviews.iter().take(SUMMARY_REVIEW_CAP) {
        prompt.push_str("Review: ");
        prompt.push_str(&r.review);
        prompt.push_str("\n\n");
    }
    prompt
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url, self.config.model, self.config.api_key
        )
    }

    /// Generates a product review for `prompt`.
    ///
    /// Provider failures are reported inside the returned string rather than
    /// as `Err`: a non-200 status yields `Error: {status}, {body}` and a
    /// structurally unexpected 200 yields [`GENERATION_FAILED`]. Only
    /// transport errors propagate.
    pub async fn generate_review(&self, prompt: &str) -> Result<String> {
        let body = GenerateContentRequest::from_prompt(prompt);
        let response = self.client.post(self.endpoint()).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Gemini API error: {} - {}", status, body);
            return Ok(format!("Error: {}, {}", status.as_u16(), body));
        }

        let response: GenerateContentResponse = response.json().await?;
        Ok(response
            .first_text()
            .unwrap_or_else(|| GENERATION_FAILED.to_string()))
    }

    /// Summarizes at most the first [`SUMMARY_REVIEW_CAP`] reviews.
    pub async fn generate_summary(&self, reviews: &[ReviewText]) -> Result<String> {
        let prompt = build_summary_prompt(reviews);
        self.generate_review(&prompt).await
    }
}
