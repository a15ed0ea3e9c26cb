//! Client dashboard: programme progress, results chart, audio and insight.

use equilibrar_core::{
  assessment::{PHASES, current_phase, days_until_next_phase, is_unlocked},
  dataset::ChartPoint,
  session::Session,
};
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Gauge, Paragraph, Wrap},
};

use super::widgets::{ACCENT, MUTED, draw_chart, draw_insight, panel};
use crate::app::App;

pub fn draw<S>(f: &mut Frame, area: Rect, app: &App<S>, session: &Session) {
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
    .split(area);

  let left = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(5), // greeting
      Constraint::Min(9),    // phases
      Constraint::Length(5), // audio
    ])
    .split(cols[0]);

  let right = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Min(8), Constraint::Length(6)])
    .split(cols[1]);

  draw_greeting(f, left[0], session);
  draw_phases(f, left[1], session.days_elapsed());
  draw_audio(f, left[2], app, session);

  let points: Vec<ChartPoint> = session
    .results()
    .iter()
    .map(|r| ChartPoint {
      label: format!("P{}", r.phase.ordinal()),
      value: u64::from(r.score.value()),
    })
    .collect();
  draw_chart(f, right[0], "Your results", &points);
  draw_insight(f, right[1], app.insight.state());
}

fn draw_greeting(f: &mut Frame, area: Rect, session: &Session) {
  let identity = session.identity();
  let block = panel("Welcome");
  let inner = block.inner(area);
  f.render_widget(block, area);

  let service = identity.service.unwrap_or_default().label();
  let mut lines = vec![Line::from(vec![
    Span::styled(
      format!("Hello, {}", identity.first_name()),
      Style::default().add_modifier(Modifier::BOLD),
    ),
    Span::styled(format!("  ·  {service}"), Style::default().fg(MUTED)),
  ])];
  lines.push(Line::from(Span::styled(
    format!("Days since registration: {}", session.days_elapsed()),
    Style::default().fg(MUTED),
  )));
  if let Some(professional) = &identity.professional_name {
    lines.push(Line::from(Span::styled(
      format!("Your professional: {professional}"),
      Style::default().fg(MUTED),
    )));
  }
  f.render_widget(Paragraph::new(lines), inner);
}

fn draw_phases(f: &mut Frame, area: Rect, days: u32) {
  let block = panel(&format!("Programme · day {}", days + 1));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let current = current_phase(days);
  let mut lines = Vec::new();
  for config in &PHASES {
    let unlocked = is_unlocked(config.phase, days);
    let (marker, style) = if config.phase == current {
      ("▶", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
    } else if unlocked {
      ("✓", Style::default())
    } else {
      ("🔒", Style::default().fg(MUTED))
    };
    lines.push(Line::from(Span::styled(format!("{marker} {}", config.title), style)));
    if config.phase == current {
      lines.push(Line::from(Span::styled(
        format!("  {}", config.description),
        Style::default().fg(Color::Gray),
      )));
      lines.push(Line::from(format!("  Guide: {}", config.resources.guide_title)));
      if let Some(link) = config.resources.meet_link {
        lines.push(Line::from(format!("  Session: {link}")));
      }
    } else if !unlocked {
      lines.push(Line::from(Span::styled(
        format!("  Unlocks on day {}", config.days_to_unlock + 1),
        Style::default().fg(MUTED),
      )));
    }
  }
  if let Some(remaining) = days_until_next_phase(days) {
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
      format!("Next phase in {remaining} day(s)."),
      Style::default().fg(MUTED),
    )));
  }
  f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn draw_audio<S>(f: &mut Frame, area: Rect, app: &App<S>, session: &Session) {
  let track = app.data.audio_track(current_phase(session.days_elapsed()));
  let block = panel("Audio");
  let inner = block.inner(area);
  f.render_widget(block, area);

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Length(1), Constraint::Length(1)])
    .split(inner);

  let icon = if app.audio_playing { "⏸" } else { "▶" };
  f.render_widget(
    Paragraph::new(Line::from(vec![
      Span::styled(format!("{icon} "), Style::default().fg(ACCENT)),
      Span::raw(track.title),
    ])),
    rows[0],
  );
  let ratio = if app.audio_playing { 0.33 } else { 0.0 };
  f.render_widget(
    Gauge::default()
      .gauge_style(Style::default().fg(ACCENT))
      .ratio(ratio)
      .label(track.duration),
    rows[1],
  );
}
