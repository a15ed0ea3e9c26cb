//! TUI rendering. Orchestrates all panes.

pub mod admin;
pub mod client;
pub mod login;
pub mod professional;
pub mod widgets;

use chrono::Local;
use equilibrar_core::navigation::{
  AdminTab, Navigation, PatientSubTab, PatientsView, ProfessionalTab,
};
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};

use crate::app::App;

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw<S>(f: &mut Frame, app: &App<S>) {
  let area = f.area();

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0], app);
  draw_body(f, rows[1], app);
  draw_status(f, rows[2], app);
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header<S>(f: &mut Frame, area: Rect, app: &App<S>) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let who = match app.portal.identity() {
    Some(identity) => format!(" equilibrar  ·  {} ({})", identity.display_name, identity.role()),
    None => " equilibrar".to_string(),
  };
  let left = Span::styled(
    who,
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(format!("{date} "), Style::default().fg(Color::DarkGray));

  // Simple left-right header: pad the middle.
  let left_width = left.content.chars().count() as u16;
  let right_width = right.content.chars().count() as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let line = Line::from(vec![left, Span::raw(" ".repeat(pad as usize)), right]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_body<S>(f: &mut Frame, area: Rect, app: &App<S>) {
  let (Some(session), Some(navigation)) = (app.portal.session(), app.portal.navigation()) else {
    login::draw(f, area, app);
    return;
  };

  match navigation {
    Navigation::Client => client::draw(f, area, app, session),
    Navigation::Professional(nav) => professional::draw(f, area, app, session, nav),
    Navigation::Administrator(nav) => admin::draw(f, area, app, session, nav.tab),
  }
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status<S>(f: &mut Frame, area: Rect, app: &App<S>) {
  let (mode_label, hints) = match app.portal.navigation() {
    None => ("SIGN IN", "Tab focus  1-6 demo account  Enter select  q quit"),
    Some(Navigation::Client) => ("CLIENT", "Space play/pause  a record assessment  r refresh  o sign out"),
    Some(Navigation::Professional(nav)) => match (&nav.tab, &nav.patients) {
      (ProfessionalTab::Patients, PatientsView::Detail { sub_tab, .. }) => (
        "PATIENT",
        match sub_tab {
          PatientSubTab::Report => "Tab history  r refresh  Esc back  1-5 tabs  o sign out",
          PatientSubTab::History => "Tab report  Esc back  1-5 tabs  o sign out",
        },
      ),
      (ProfessionalTab::Home | ProfessionalTab::Patients, _) => (
        "PRO",
        "↑↓/jk navigate  Enter open  1-5 tabs  o sign out",
      ),
      _ => ("PRO", "1-5 tabs  o sign out  q quit"),
    },
    Some(Navigation::Administrator(_)) if app.filter_active => (
      "SEARCH",
      "Type to filter  Esc cancel  Enter done",
    ),
    Some(Navigation::Administrator(nav)) => (
      "ADMIN",
      match nav.tab {
        AdminTab::Profile => "1-4 open  h/u/l/c bottom bar  o sign out",
        AdminTab::Users => "/ search  ↑↓ navigate  Esc back  h/u/l/c bottom bar",
        AdminTab::Config => "↑↓ select  ←→ adjust  Space toggle  Esc back",
        AdminTab::System => "i health  s profile  Esc back",
        AdminTab::Logs | AdminTab::Home => "h/u/l/c bottom bar  Esc back  o sign out",
      },
    ),
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(format!("  {status}"), Style::default().fg(Color::DarkGray));

  let line = Line::from(vec![mode_span, hint_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}
