//! Error types for `equilibrar-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown role: {0:?}")]
  UnknownRole(String),

  #[error("unknown service type: {0:?}")]
  UnknownService(String),

  #[error("phase out of range: {0} (expected 1-3)")]
  PhaseOutOfRange(u8),

  #[error("score out of range: {0} (expected 0-100)")]
  ScoreOutOfRange(u8),

  #[error("a dataset needs at least one patient")]
  EmptyDataset,

  #[error("no active session")]
  SignedOut,

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
