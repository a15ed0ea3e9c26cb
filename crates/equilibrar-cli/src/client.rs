//! Async HTTP client for the hosted text-generation API behind insights.

use std::{future::Future, time::Duration};

use anyhow::{Context, Result};
use equilibrar_core::insight::{InsightPrompt, InsightService};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::settings::InsightConfig;

#[derive(Debug, Error)]
pub enum ClientError {
  #[error("no API key configured")]
  MissingApiKey,

  #[error("request failed: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("generateContent → {0}")]
  Status(StatusCode),
}

/// Async client for the `generateContent` endpoint.
///
/// Cheap to clone: the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct GenerativeClient {
  client: Client,
  config: InsightConfig,
}

impl GenerativeClient {
  pub fn new(config: InsightConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self) -> String {
    format!(
      "{}/v1beta/models/{}:generateContent",
      self.config.base_url.trim_end_matches('/'),
      self.config.model
    )
  }

  async fn generate(&self, prompt: &InsightPrompt) -> Result<String, ClientError> {
    if self.config.api_key.is_empty() {
      return Err(ClientError::MissingApiKey);
    }

    let resp = self
      .client
      .post(self.url())
      .header("x-goog-api-key", &self.config.api_key)
      .json(&GenerateRequest::from(prompt))
      .send()
      .await?;

    if !resp.status().is_success() {
      return Err(ClientError::Status(resp.status()));
    }
    let body: GenerateResponse = resp.json().await?;
    tracing::debug!(candidates = body.candidates.len(), "insight response received");
    Ok(body.text())
  }
}

impl InsightService for GenerativeClient {
  type Error = ClientError;

  fn summarize<'a>(
    &'a self,
    prompt: &'a InsightPrompt,
  ) -> impl Future<Output = Result<String, Self::Error>> + Send + 'a {
    self.generate(prompt)
  }
}

// ─── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
  contents:          [Content<'a>; 1],
  generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
  parts: [OutgoingPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct OutgoingPart<'a> {
  text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
  temperature: f32,
  top_p:       f32,
}

impl<'a> From<&'a InsightPrompt> for GenerateRequest<'a> {
  fn from(prompt: &'a InsightPrompt) -> Self {
    Self {
      contents:          [Content {
        parts: [OutgoingPart { text: &prompt.text }],
      }],
      generation_config: GenerationConfig {
        temperature: prompt.temperature,
        top_p:       prompt.top_p,
      },
    }
  }
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
  #[serde(default)]
  candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
  content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
  #[serde(default)]
  parts: Vec<IncomingPart>,
}

#[derive(Debug, Deserialize)]
struct IncomingPart {
  text: Option<String>,
}

impl GenerateResponse {
  /// Concatenated text of the first candidate; empty if there is none.
  fn text(&self) -> String {
    self
      .candidates
      .first()
      .and_then(|c| c.content.as_ref())
      .map(|content| {
        content
          .parts
          .iter()
          .filter_map(|p| p.text.as_deref())
          .collect::<String>()
      })
      .unwrap_or_default()
  }
}
