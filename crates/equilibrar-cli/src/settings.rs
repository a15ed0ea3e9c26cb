//! Layered configuration: optional TOML file, then `EQUILIBRAR_*`
//! environment variables, then built-in defaults. CLI flags are applied on
//! top by the caller.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Connection settings for the insight service.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
  pub api_key:      String,
  pub model:        String,
  pub base_url:     String,
  pub timeout_secs: u64,
}

impl Default for InsightConfig {
  fn default() -> Self {
    Self {
      api_key:      String::new(),
      model:        "gemini-3-flash-preview".to_string(),
      base_url:     "https://generativelanguage.googleapis.com".to_string(),
      timeout_secs: 30,
    }
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
  /// Where to write logs. The terminal belongs to the UI, so logging is off
  /// unless this is set.
  pub log_file: Option<PathBuf>,
  pub insight:  InsightConfig,
}

impl Settings {
  /// Read `path` (if given) and the environment.
  ///
  /// Nested keys use a double underscore in the environment, e.g.
  /// `EQUILIBRAR_INSIGHT__API_KEY`.
  pub fn load(path: Option<&Path>) -> Result<Self> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
      builder = builder.add_source(config::File::from(path).required(true));
    }
    builder
      .add_source(
        config::Environment::with_prefix("EQUILIBRAR")
          .prefix_separator("_")
          .separator("__"),
      )
      .build()
      .context("failed to read configuration")?
      .try_deserialize()
      .context("failed to deserialise Settings")
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use super::*;

  #[test]
  fn defaults_point_at_the_hosted_api() {
    let settings = Settings::default();
    assert!(settings.log_file.is_none());
    assert!(settings.insight.api_key.is_empty());
    assert_eq!(settings.insight.timeout_secs, 30);
    assert!(settings.insight.base_url.starts_with("https://"));
  }

  #[test]
  fn file_values_override_defaults() {
    let path = std::env::temp_dir().join(format!("equilibrar-settings-{}.toml", std::process::id()));
    fs::write(
      &path,
      r#"
log_file = "/tmp/equilibrar.log"

[insight]
model = "test-model"
timeout_secs = 5
"#,
    )
    .unwrap();

    let settings = Settings::load(Some(&path)).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(settings.log_file.as_deref(), Some(Path::new("/tmp/equilibrar.log")));
    assert_eq!(settings.insight.model, "test-model");
    assert_eq!(settings.insight.timeout_secs, 5);
    assert_eq!(settings.insight.base_url, InsightConfig::default().base_url);
  }

  #[test]
  fn missing_file_is_an_error() {
    let path = Path::new("/definitely/not/here/equilibrar.toml");
    assert!(Settings::load(Some(path)).is_err());
  }
}
