//! Therapeutic insights from an external text-generation service.
//!
//! The service is an opaque collaborator: results go out inside a fixed
//! prompt, text comes back. [`fetch_insight`] never fails; anything that goes
//! wrong is logged and replaced with one of two fixed fallback strings.
//!
//! Responses arrive asynchronously. [`InsightGate`] decides whether a
//! response still belongs to the view that asked for it.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::{Result, assessment::ResultSummary};

/// Shown when the service answers with no text.
pub const FALLBACK_EMPTY: &str = "Steady progress detected.";

/// Shown when the call fails for any reason.
pub const FALLBACK_ERROR: &str = "Your evolution journey is under way.";

// ─── Prompt ──────────────────────────────────────────────────────────────────

/// A fully-rendered request for the insight service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightPrompt {
  pub text:        String,
  pub temperature: f32,
  pub top_p:       f32,
}

impl InsightPrompt {
  pub const TEMPERATURE: f32 = 0.7;
  pub const TOP_P: f32 = 0.8;

  /// Render the fixed prompt template around `results`.
  pub fn from_results(results: &[ResultSummary]) -> Result<Self> {
    let payload = serde_json::to_string(results)?;
    let text = format!(
      "Analyse this patient's evolution based on their wellness assessments (0-100).\n\
       Results: {payload}.\n\
       Write a motivating two-paragraph summary of their progress. Be professional and \
       empathetic, and use a 'minimalist luxury' tone (direct, elegant, calm)."
    );
    Ok(Self {
      text,
      temperature: Self::TEMPERATURE,
      top_p: Self::TOP_P,
    })
  }
}

// ─── Service ─────────────────────────────────────────────────────────────────

/// Abstraction over a remote text-generation backend.
///
/// Returns `Send` futures so calls can be spawned onto a multi-threaded
/// runtime.
pub trait InsightService: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Generate text for `prompt`.
  fn summarize<'a>(
    &'a self,
    prompt: &'a InsightPrompt,
  ) -> impl Future<Output = Result<String, Self::Error>> + Send + 'a;
}

/// Ask `service` for a summary of `results`. Always returns display text.
pub async fn fetch_insight<S: InsightService>(service: &S, results: &[ResultSummary]) -> String {
  let prompt = match InsightPrompt::from_results(results) {
    Ok(prompt) => prompt,
    Err(e) => {
      tracing::warn!(error = %e, "failed to render insight prompt");
      return FALLBACK_ERROR.to_string();
    }
  };

  match service.summarize(&prompt).await {
    Ok(text) if text.trim().is_empty() => FALLBACK_EMPTY.to_string(),
    Ok(text) => text,
    Err(e) => {
      tracing::warn!(error = %e, "insight service call failed");
      FALLBACK_ERROR.to_string()
    }
  }
}

// ─── Gate ────────────────────────────────────────────────────────────────────

/// Handed out by [`InsightGate::begin`]; redeemed by
/// [`InsightGate::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InsightTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InsightState {
  #[default]
  Idle,
  Loading,
  Ready(String),
}

/// Last-request-wins gating of insight responses for one view instance.
///
/// Every request and every view change bumps the generation; a response is
/// applied only if it carries the ticket of the latest request made since
/// the last view change.
#[derive(Debug, Clone, Default)]
pub struct InsightGate {
  generation: u64,
  pending:    Option<InsightTicket>,
  state:      InsightState,
}

impl InsightGate {
  pub fn new() -> Self { Self::default() }

  /// Start a request for the current view.
  pub fn begin(&mut self) -> InsightTicket {
    self.generation += 1;
    let ticket = InsightTicket(self.generation);
    self.pending = Some(ticket);
    self.state = InsightState::Loading;
    ticket
  }

  /// The view changed: drop any pending request and clear the text.
  pub fn invalidate(&mut self) {
    self.generation += 1;
    self.pending = None;
    self.state = InsightState::Idle;
  }

  /// Apply `text` if `ticket` is still current. Returns whether it applied.
  pub fn resolve(&mut self, ticket: InsightTicket, text: String) -> bool {
    if self.pending != Some(ticket) {
      return false;
    }
    self.pending = None;
    self.state = InsightState::Ready(text);
    true
  }

  pub fn state(&self) -> &InsightState { &self.state }

  pub fn text(&self) -> Option<&str> {
    match &self.state {
      InsightState::Ready(text) => Some(text),
      InsightState::Idle | InsightState::Loading => None,
    }
  }

  pub fn is_loading(&self) -> bool { self.state == InsightState::Loading }
}

#[cfg(test)]
mod tests {
  use std::sync::Mutex;

  use super::*;
  use crate::assessment::{Phase, Score};

  #[derive(Debug, thiserror::Error)]
  #[error("connection reset by peer")]
  struct TransportError;

  struct Failing;

  impl InsightService for Failing {
    type Error = TransportError;

    fn summarize<'a>(
      &'a self,
      _prompt: &'a InsightPrompt,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send + 'a {
      async { Err(TransportError) }
    }
  }

  /// Answers with a fixed string and records the prompt it saw.
  struct Canned {
    reply: &'static str,
    seen:  Mutex<Option<InsightPrompt>>,
  }

  impl Canned {
    fn new(reply: &'static str) -> Self {
      Self {
        reply,
        seen: Mutex::new(None),
      }
    }
  }

  impl InsightService for Canned {
    type Error = TransportError;

    fn summarize<'a>(
      &'a self,
      prompt: &'a InsightPrompt,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send + 'a {
      async move {
        *self.seen.lock().unwrap() = Some(prompt.clone());
        Ok(self.reply.to_string())
      }
    }
  }

  fn results() -> Vec<ResultSummary> {
    vec![
      ResultSummary {
        phase: Phase::Onboarding,
        score: Score::new(45).unwrap(),
      },
      ResultSummary {
        phase: Phase::Evolution,
        score: Score::new(70).unwrap(),
      },
    ]
  }

  #[test]
  fn prompt_embeds_results_as_json() {
    let prompt = InsightPrompt::from_results(&results()).unwrap();
    assert!(prompt.text.contains(r#"[{"phase":1,"score":45},{"phase":2,"score":70}]"#));
    assert_eq!(prompt.temperature, 0.7);
    assert_eq!(prompt.top_p, 0.8);
  }

  #[tokio::test]
  async fn transport_failure_yields_error_fallback() {
    let text = fetch_insight(&Failing, &results()).await;
    assert_eq!(text, FALLBACK_ERROR);
  }

  #[tokio::test]
  async fn blank_reply_yields_empty_fallback() {
    let text = fetch_insight(&Canned::new("  \n"), &results()).await;
    assert_eq!(text, FALLBACK_EMPTY);
  }

  #[tokio::test]
  async fn reply_text_is_passed_through() {
    let service = Canned::new("You are doing well.");
    let text = fetch_insight(&service, &results()).await;
    assert_eq!(text, "You are doing well.");
    let seen = service.seen.lock().unwrap().clone().unwrap();
    assert!(seen.text.contains(r#""score":70"#));
  }

  #[test]
  fn gate_applies_current_ticket() {
    let mut gate = InsightGate::new();
    let ticket = gate.begin();
    assert!(gate.is_loading());
    assert!(gate.resolve(ticket, "hello".into()));
    assert_eq!(gate.text(), Some("hello"));
  }

  #[test]
  fn gate_discards_response_after_view_change() {
    let mut gate = InsightGate::new();
    let ticket = gate.begin();
    gate.invalidate();
    assert!(!gate.resolve(ticket, "stale".into()));
    assert_eq!(gate.state(), &InsightState::Idle);
  }

  #[test]
  fn gate_keeps_only_the_latest_request() {
    let mut gate = InsightGate::new();
    let first = gate.begin();
    let second = gate.begin();
    assert!(!gate.resolve(first, "old".into()));
    assert!(gate.is_loading());
    assert!(gate.resolve(second, "new".into()));
    assert!(!gate.resolve(second, "again".into()));
    assert_eq!(gate.text(), Some("new"));
  }
}
