//! Administrator dashboard.

use equilibrar_core::{
  dataset::{Dataset, LogLevel},
  navigation::{AdminTab, BOTTOM_NAV},
  portal::{AdminSettings, AdminToggle},
  session::Session,
};
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Gauge, List, ListItem, ListState, Paragraph},
};

use super::widgets::{ACCENT, MUTED, draw_chart, field, panel, tab_bar};
use crate::app::{App, CONFIG_ROWS, ConfigRow};

pub fn draw<S>(f: &mut Frame, area: Rect, app: &App<S>, session: &Session, tab: AdminTab) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Min(0), Constraint::Length(1)])
    .split(area);

  let body = rows[0];
  match tab {
    AdminTab::Profile => draw_profile(f, body, session),
    AdminTab::Users => draw_users(f, body, app),
    AdminTab::Logs => draw_logs(f, body, &app.data),
    AdminTab::Config => {
      if let Some(settings) = app.portal.admin_settings() {
        draw_config(f, body, settings, app.config_cursor);
      }
    }
    AdminTab::System => draw_system(f, body),
    AdminTab::Home => draw_home(f, body, &app.data),
  }

  let bottom = BOTTOM_NAV.iter().map(|t| {
    let key = match t {
      AdminTab::Home => "h",
      AdminTab::Users => "u",
      AdminTab::Logs => "l",
      _ => "c",
    };
    (key, t.title(), *t == tab)
  });
  f.render_widget(Paragraph::new(tab_bar(bottom)), rows[1]);
}

fn menu(entries: &[(&str, &str)]) -> Vec<Line<'static>> {
  entries
    .iter()
    .map(|(key, label)| {
      Line::from(vec![
        Span::styled(format!(" [{key}] "), Style::default().fg(ACCENT)),
        Span::raw(label.to_string()),
      ])
    })
    .collect()
}

fn draw_profile(f: &mut Frame, area: Rect, session: &Session) {
  let identity = session.identity();
  let block = panel(AdminTab::Profile.title());
  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines = vec![
    field("Name", identity.display_name.clone()),
    field("Email", identity.email.clone()),
    field("Access", "Full system access"),
    Line::from(""),
  ];
  lines.extend(menu(&[
    ("1", AdminTab::Users.title()),
    ("2", AdminTab::Logs.title()),
    ("3", AdminTab::Config.title()),
    ("4", AdminTab::System.title()),
  ]));
  f.render_widget(Paragraph::new(lines), inner);
}

fn draw_users<S>(f: &mut Frame, area: Rect, app: &App<S>) {
  let title = if app.filter_active || !app.user_filter.is_empty() {
    format!("{} · /{}", AdminTab::Users.title(), app.user_filter)
  } else {
    AdminTab::Users.title().to_string()
  };

  let items: Vec<ListItem> = app
    .data
    .search_users(&app.user_filter)
    .into_iter()
    .map(|u| {
      let (status, colour) = if u.active { ("active", Color::Green) } else { ("inactive", MUTED) };
      ListItem::new(Line::from(vec![
        Span::raw(format!("{:<22}", u.name)),
        Span::styled(format!("{:<14}", u.role.label()), Style::default().fg(ACCENT)),
        Span::styled(status, Style::default().fg(colour)),
      ]))
    })
    .collect();

  let list = List::new(items).block(panel(&title)).highlight_style(
    Style::default()
      .fg(Color::Black)
      .bg(ACCENT)
      .add_modifier(Modifier::BOLD),
  );
  let mut state = ListState::default().with_selected(Some(app.list_cursor));
  f.render_stateful_widget(list, area, &mut state);
}

fn draw_logs(f: &mut Frame, area: Rect, data: &Dataset) {
  let items: Vec<ListItem> = data
    .logs
    .iter()
    .map(|log| {
      let (label, colour) = match log.level {
        LogLevel::Info => ("INFO", Color::Blue),
        LogLevel::Config => ("CONFIG", Color::Yellow),
        LogLevel::Error => ("ERROR", Color::Red),
      };
      ListItem::new(vec![
        Line::from(vec![
          Span::styled(format!("{label:<7}"), Style::default().fg(colour)),
          Span::styled(log.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
          Span::styled(format!("  {}", log.time), Style::default().fg(MUTED)),
        ]),
        Line::from(Span::styled(
          format!("       {}", log.description),
          Style::default().fg(Color::Gray),
        )),
      ])
    })
    .collect();
  f.render_widget(List::new(items).block(panel(AdminTab::Logs.title())), area);
}

fn draw_config(f: &mut Frame, area: Rect, settings: &AdminSettings, cursor: usize) {
  let block = panel(AdminTab::Config.title());
  let inner = block.inner(area);
  f.render_widget(block, area);

  let lines: Vec<Line> = CONFIG_ROWS
    .iter()
    .enumerate()
    .map(|(i, row)| {
      let (label, value) = match row {
        ConfigRow::Toggle(toggle) => {
          let (label, on) = match toggle {
            AdminToggle::MaintenanceMode => ("Maintenance mode", settings.maintenance_mode),
            AdminToggle::DebugLogging => ("Debug logging", settings.debug_logging),
            AdminToggle::EmailAlerts => ("Email alerts", settings.email_alerts),
            AdminToggle::PushNotifications => ("Push notifications", settings.push_notifications),
          };
          (label, if on { "[on]".to_string() } else { "[off]".to_string() })
        }
        ConfigRow::PhaseWeeks => ("Phase 1 length", format!("◀ {} weeks ▶", settings.phase_one_weeks)),
        ConfigRow::Intensity => ("Intensity", format!("◀ {}% ▶", settings.intensity)),
        ConfigRow::Reset => ("Restore factory defaults", String::new()),
      };
      let style = if i == cursor {
        Style::default()
          .fg(Color::Black)
          .bg(ACCENT)
          .add_modifier(Modifier::BOLD)
      } else {
        Style::default()
      };
      Line::from(vec![
        Span::styled(format!(" {label:<26}"), style),
        Span::raw(format!(" {value}")),
      ])
    })
    .collect();
  f.render_widget(Paragraph::new(lines), inner);
}

fn draw_system(f: &mut Frame, area: Rect) {
  let block = panel(AdminTab::System.title());
  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines = vec![
    field("Last audit", "Yesterday, 22:10 · no findings"),
    field("Last backup", "Today, 03:00 · complete"),
    field("Server", "Operational · uptime 99.98%"),
    Line::from(""),
  ];
  lines.extend(menu(&[
    ("i", AdminTab::Home.title()),
    ("s", AdminTab::Profile.title()),
  ]));
  f.render_widget(Paragraph::new(lines), inner);
}

fn draw_home(f: &mut Frame, area: Rect, data: &Dataset) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Length(3), Constraint::Min(0)])
    .split(area);

  let total = data.users.len().max(1);
  let active = data.active_users();
  f.render_widget(
    Gauge::default()
      .block(panel("Active users"))
      .gauge_style(Style::default().fg(ACCENT))
      .ratio(active as f64 / total as f64)
      .label(format!("{active} / {}", data.users.len())),
    rows[0],
  );
  draw_chart(f, rows[1], AdminTab::Home.title(), &data.weekly);
}
