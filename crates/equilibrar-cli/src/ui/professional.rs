//! Professional (and coordinator) dashboard.

use equilibrar_core::{
  dataset::{Dataset, Patient},
  navigation::{PatientSubTab, PatientsView, ProfessionalNavigation, ProfessionalTab},
  session::Session,
};
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;

use super::widgets::{ACCENT, MUTED, draw_chart, draw_insight, field, panel, tab_bar};
use crate::app::App;

pub fn draw<S>(
  f: &mut Frame,
  area: Rect,
  app: &App<S>,
  session: &Session,
  nav: &ProfessionalNavigation,
) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Length(1), Constraint::Min(0)])
    .split(area);

  let tabs = ProfessionalTab::iter()
    .zip(["1", "2", "3", "4", "5"])
    .map(|(tab, key)| (key, tab.label(), tab == nav.tab));
  f.render_widget(Paragraph::new(tab_bar(tabs)), rows[0]);

  match (&nav.tab, &nav.patients) {
    (ProfessionalTab::Home, _) => draw_home(f, rows[1], app),
    (ProfessionalTab::Schedule, _) => draw_schedule(f, rows[1], &app.data),
    (ProfessionalTab::Patients, PatientsView::List) => draw_patient_list(f, rows[1], app),
    (ProfessionalTab::Patients, PatientsView::Detail { record_id, sub_tab }) => {
      draw_patient_detail(f, rows[1], app, app.data.patient(record_id), *sub_tab)
    }
    (ProfessionalTab::Profile, _) => draw_profile(f, rows[1], session),
    (ProfessionalTab::Settings, _) => {
      let block = panel("Settings");
      let inner = block.inner(rows[1]);
      f.render_widget(block, rows[1]);
      f.render_widget(
        Paragraph::new("Notification and availability preferences are managed by the clinic.")
          .style(Style::default().fg(MUTED)),
        inner,
      );
    }
  }
}

fn selectable_list<'a>(items: Vec<ListItem<'a>>, title: &str) -> List<'a> {
  List::new(items).block(panel(title)).highlight_style(
    Style::default()
      .fg(Color::Black)
      .bg(ACCENT)
      .add_modifier(Modifier::BOLD),
  )
}

fn draw_home<S>(f: &mut Frame, area: Rect, app: &App<S>) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Length(3), Constraint::Min(0)])
    .split(area);
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
    .split(rows[1]);

  let stats = Line::from(vec![
    Span::styled(format!(" {} ", app.data.patients().len()), Style::default().fg(ACCENT)),
    Span::raw("active patients   "),
    Span::styled(format!("{} ", app.data.schedule.len()), Style::default().fg(ACCENT)),
    Span::raw("sessions today"),
  ]);
  f.render_widget(Paragraph::new(stats).block(panel("Overview")), rows[0]);

  let items: Vec<ListItem> = app
    .data
    .recent_results()
    .into_iter()
    .map(|p| {
      let score = p.latest_score().map_or(0, |s| s.value());
      ListItem::new(Line::from(vec![
        Span::raw(format!("{:<20}", p.name)),
        Span::styled(format!("{score:>3}%"), Style::default().fg(ACCENT)),
        Span::styled(format!("  {}", p.service.label()), Style::default().fg(MUTED)),
      ]))
    })
    .collect();
  let mut state = ListState::default().with_selected(Some(app.list_cursor));
  f.render_stateful_widget(selectable_list(items, "Recent results"), cols[0], &mut state);

  draw_chart(f, cols[1], "Weekly activity", &app.data.weekly);
}

fn draw_schedule(f: &mut Frame, area: Rect, data: &Dataset) {
  let items: Vec<ListItem> = data
    .schedule
    .iter()
    .map(|appt| {
      let patient = data.patient(&appt.patient_id);
      let mut spans = vec![
        Span::styled(format!("{:<7}", appt.time), Style::default().fg(ACCENT)),
        Span::raw(format!("{:<20}", patient.name)),
        Span::styled(appt.kind.clone(), Style::default().fg(MUTED)),
      ];
      if let Some(link) = &appt.meet_link {
        spans.push(Span::styled(format!("  {link}"), Style::default().fg(Color::Blue)));
      }
      ListItem::new(Line::from(spans))
    })
    .collect();
  f.render_widget(List::new(items).block(panel("Today's schedule")), area);
}

fn draw_patient_list<S>(f: &mut Frame, area: Rect, app: &App<S>) {
  let items: Vec<ListItem> = app
    .data
    .patients()
    .iter()
    .map(|p| {
      ListItem::new(Line::from(vec![
        Span::raw(format!("{:<20}", p.name)),
        Span::styled(
          format!("Phase {}  ", p.phase.ordinal()),
          Style::default().fg(ACCENT),
        ),
        Span::styled(
          p.next_session.as_deref().unwrap_or("no session booked"),
          Style::default().fg(MUTED),
        ),
      ]))
    })
    .collect();
  let mut state = ListState::default().with_selected(Some(app.list_cursor));
  f.render_stateful_widget(selectable_list(items, "Patients"), area, &mut state);
}

fn draw_patient_detail<S>(
  f: &mut Frame,
  area: Rect,
  app: &App<S>,
  patient: &Patient,
  sub_tab: PatientSubTab,
) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(4), // header
      Constraint::Length(1), // sub-tabs
      Constraint::Min(0),    // content
    ])
    .split(area);

  let block = panel(&patient.name);
  let inner = block.inner(rows[0]);
  f.render_widget(block, rows[0]);
  f.render_widget(
    Paragraph::new(vec![
      field("Service", patient.service.label()),
      field("Phase", format!("{}", patient.phase.ordinal())),
    ]),
    inner,
  );

  let tabs = [PatientSubTab::History, PatientSubTab::Report]
    .into_iter()
    .map(|tab| ("Tab", tab.label(), tab == sub_tab));
  f.render_widget(Paragraph::new(tab_bar(tabs)), rows[1]);

  match sub_tab {
    PatientSubTab::History => {
      let items: Vec<ListItem> = patient
        .history
        .iter()
        .map(|h| {
          ListItem::new(Line::from(vec![
            Span::raw(format!("Phase {}  ", h.phase.ordinal())),
            Span::styled(format!("{:>3}%", h.score.value()), Style::default().fg(ACCENT)),
            Span::styled(format!("  {}", h.taken), Style::default().fg(MUTED)),
          ]))
        })
        .collect();
      f.render_widget(List::new(items).block(panel("Assessment history")), rows[2]);
    }
    PatientSubTab::Report => {
      let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(5)])
        .split(rows[2]);
      draw_chart(f, parts[0], "Evolution", &patient.chart());
      draw_insight(f, parts[1], app.insight.state());
    }
  }
}

fn draw_profile(f: &mut Frame, area: Rect, session: &Session) {
  let identity = session.identity();
  let block = panel("Profile");
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(
    Paragraph::new(vec![
      field("Name", identity.display_name.clone()),
      field("Email", identity.email.clone()),
      field("Role", identity.role().label()),
      field("Member since", identity.registered_at.format("%Y-%m-%d").to_string()),
    ]),
    inner,
  );
}
