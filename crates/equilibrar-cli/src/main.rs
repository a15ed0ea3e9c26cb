//! `equilibrar`: terminal portal for the Equilibrar wellness clinic.
//!
//! # Usage
//!
//! ```
//! equilibrar
//! equilibrar --config ~/.config/equilibrar/config.toml --log-file /tmp/equilibrar.log
//! GEMINI_API_KEY=... equilibrar
//! ```

mod app;
mod client;
mod settings;
mod ui;

use std::{
  fs::File,
  io,
  path::{Path, PathBuf},
  sync::Mutex,
  time::Duration,
};

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use client::GenerativeClient;
use crossterm::{
  event::{self, Event, KeyEventKind},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use equilibrar_core::insight::InsightService;
use ratatui::{Terminal, backend::CrosstermBackend};
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "equilibrar", about = "Terminal portal for the Equilibrar wellness clinic")]
struct Args {
  /// Path to a TOML config file.
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// API key for the insight service.
  #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
  api_key: Option<String>,

  /// Model used for insights.
  #[arg(long)]
  model: Option<String>,

  /// Write logs to this file.
  #[arg(long, value_name = "FILE")]
  log_file: Option<PathBuf>,
}

// ─── Logging ──────────────────────────────────────────────────────────────────

/// Route tracing output to `path`, or discard it. The terminal is owned by
/// the UI so nothing may be written to stdout or stderr.
fn init_tracing(path: Option<&Path>) -> Result<()> {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();
  let builder = tracing_subscriber::fmt().with_env_filter(filter).with_ansi(false);

  match path {
    Some(path) => {
      let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
      builder.with_writer(Mutex::new(file)).init();
    }
    None => builder.with_writer(io::sink).init(),
  }
  Ok(())
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();
  let mut settings = Settings::load(args.config.as_deref())?;

  // CLI flags override the config file and environment.
  if let Some(key) = args.api_key {
    settings.insight.api_key = key;
  }
  if let Some(model) = args.model {
    settings.insight.model = model;
  }
  if let Some(path) = args.log_file {
    settings.log_file = Some(path);
  }

  init_tracing(settings.log_file.as_deref())?;
  tracing::info!(model = %settings.insight.model, "starting equilibrar");

  let client = GenerativeClient::new(settings.insight)?;
  let mut app = App::new(client);

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  let run_result = run_event_loop(&mut terminal, &mut app).await;

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

// ─── Event loop ───────────────────────────────────────────────────────────────

async fn run_event_loop<S>(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App<S>,
) -> Result<()>
where
  S: InsightService + 'static,
{
  loop {
    app.poll_insights();
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    // Poll for an event, yielding control to tokio while waiting.
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    match maybe_event {
      Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
        if !app.handle_key(key) {
          break;
        }
      }
      // Resizes are picked up by the next draw.
      _ => {}
    }
  }

  tracing::info!("exiting");
  Ok(())
}
