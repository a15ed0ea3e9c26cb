//! Application state and key dispatcher.
//!
//! All navigation decisions are delegated to [`Portal`]; this module maps
//! keys to actions, keeps the purely cosmetic UI state (cursors, text
//! fields, the audio toggle) and runs insight requests in the background.

use std::{collections::BTreeMap, sync::Arc};

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use equilibrar_core::{
  assessment::{ResultSummary, Score, current_phase},
  dataset::Dataset,
  identity::{DEMO_ACCOUNTS, DemoAccount, DemoIdentityProvider, IdentityProvider},
  insight::{InsightGate, InsightService, InsightTicket, fetch_insight},
  navigation::{
    AdminAction, AdminTab, NavAction, Navigation, PatientSubTab, PatientsView,
    ProfessionalAction, ProfessionalNavigation, ProfessionalTab,
  },
  portal::{AdminToggle, Portal},
};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

// ─── Login form ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFocus {
  Email,
  Password,
  /// Index into [`DEMO_ACCOUNTS`].
  Demo(usize),
}

impl LoginFocus {
  fn next(self) -> Self {
    match self {
      Self::Email => Self::Password,
      Self::Password => Self::Demo(0),
      Self::Demo(i) if i + 1 < DEMO_ACCOUNTS.len() => Self::Demo(i + 1),
      Self::Demo(_) => Self::Email,
    }
  }

  fn prev(self) -> Self {
    match self {
      Self::Email => Self::Demo(DEMO_ACCOUNTS.len() - 1),
      Self::Password => Self::Email,
      Self::Demo(0) => Self::Password,
      Self::Demo(i) => Self::Demo(i - 1),
    }
  }
}

/// The credential form. Typing works; submitting does not authenticate.
#[derive(Debug, Clone)]
pub struct LoginForm {
  pub email:    String,
  pub password: String,
  pub focus:    LoginFocus,
}

impl Default for LoginForm {
  fn default() -> Self {
    Self {
      email:    String::new(),
      password: String::new(),
      focus:    LoginFocus::Demo(0),
    }
  }
}

// ─── Config screen rows ───────────────────────────────────────────────────────

/// Rows on the administrator configuration screen, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigRow {
  PhaseWeeks,
  Intensity,
  Toggle(AdminToggle),
  Reset,
}

pub const CONFIG_ROWS: [ConfigRow; 7] = [
  ConfigRow::Toggle(AdminToggle::MaintenanceMode),
  ConfigRow::Toggle(AdminToggle::DebugLogging),
  ConfigRow::Toggle(AdminToggle::EmailAlerts),
  ConfigRow::Toggle(AdminToggle::PushNotifications),
  ConfigRow::PhaseWeeks,
  ConfigRow::Intensity,
  ConfigRow::Reset,
];

/// Score increase per demo assessment recorded from the client screen.
const DEMO_SCORE_STEP: u8 = 15;

type InsightReply = (InsightTicket, String);

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App<S> {
  /// Who is signed in and which screen they see.
  pub portal: Portal,

  /// Static demo content.
  pub data: Dataset,

  pub login: LoginForm,

  /// Insight text for the visible view, gated against stale replies.
  pub insight: InsightGate,

  /// Cursor within whichever list the current screen shows.
  pub list_cursor: usize,

  /// Fuzzy filter on the administrator's user list.
  pub user_filter: String,

  /// Whether the user is typing a filter query.
  pub filter_active: bool,

  /// Focused row on the configuration screen.
  pub config_cursor: usize,

  /// Play/pause state of the client's audio widget.
  pub audio_playing: bool,

  /// One-line status message shown in the status bar.
  pub status_msg: String,

  provider: DemoIdentityProvider,
  service:  Arc<S>,
  reply_tx: UnboundedSender<InsightReply>,
  reply_rx: UnboundedReceiver<InsightReply>,
}

impl<S> App<S>
where
  S: InsightService + 'static,
{
  pub fn new(service: S) -> Self {
    let (reply_tx, reply_rx) = unbounded_channel();
    Self {
      portal: Portal::new(),
      data: Dataset::demo(),
      login: LoginForm::default(),
      insight: InsightGate::new(),
      list_cursor: 0,
      user_filter: String::new(),
      filter_active: false,
      config_cursor: 0,
      audio_playing: false,
      status_msg: String::new(),
      provider: DemoIdentityProvider,
      service: Arc::new(service),
      reply_tx,
      reply_rx,
    }
  }

  // ── Insight ───────────────────────────────────────────────────────────────

  /// Spawn an insight request for the current view.
  fn request_insight(&mut self, results: Vec<ResultSummary>) {
    let ticket = self.insight.begin();
    let service = Arc::clone(&self.service);
    let tx = self.reply_tx.clone();
    tokio::spawn(async move {
      let text = fetch_insight(service.as_ref(), &results).await;
      // The receiver only goes away when the app is shutting down.
      let _ = tx.send((ticket, text));
    });
  }

  /// Apply any insight replies that have arrived.
  pub fn poll_insights(&mut self) {
    while let Ok((ticket, text)) = self.reply_rx.try_recv() {
      if !self.insight.resolve(ticket, text) {
        tracing::debug!(?ticket, "discarding stale insight");
      }
    }
  }

  /// Request whatever insight the visible view displays, if any.
  fn refresh_insight(&mut self) {
    let results = match self.portal.navigation() {
      Some(Navigation::Client) => self.portal.session().map(|s| s.summaries()),
      Some(Navigation::Professional(nav)) => match &nav.patients {
        PatientsView::Detail {
          record_id,
          sub_tab: PatientSubTab::Report,
        } => Some(self.data.patient(record_id).summaries()),
        _ => None,
      },
      _ => None,
    };
    if let Some(results) = results {
      self.request_insight(results);
    }
  }

  // ── Session ───────────────────────────────────────────────────────────────

  fn sign_in(&mut self, account: &DemoAccount) {
    let now = Utc::now();
    let identity = self.provider.issue(&account.request(), now);
    self.portal.login(identity, now);
    self.reset_view_state();
    self.status_msg = format!("Signed in as {}", account.button);
    self.refresh_insight();
  }

  fn sign_out(&mut self) {
    self.portal.logout();
    self.reset_view_state();
    self.login = LoginForm::default();
    self.status_msg = "Signed out".into();
  }

  fn reset_view_state(&mut self) {
    self.insight.invalidate();
    self.list_cursor = 0;
    self.user_filter.clear();
    self.filter_active = false;
    self.config_cursor = 0;
    self.audio_playing = false;
  }

  /// Dispatch a navigation action and react if the view changed.
  fn navigate(&mut self, action: impl Into<NavAction>) -> bool {
    let changed = self.portal.dispatch(action, &self.data);
    if changed {
      self.insight.invalidate();
      self.status_msg.clear();
      self.refresh_insight();
    }
    changed
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub fn handle_key(&mut self, key: KeyEvent) -> bool {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    // Filter input mode: all printable keys go into the filter string.
    if self.filter_active {
      self.handle_filter_key(key);
      return true;
    }

    let Some(navigation) = self.portal.navigation().cloned() else {
      return self.handle_login_key(key);
    };

    match key.code {
      KeyCode::Char('q') => return false,
      KeyCode::Char('o') => {
        self.sign_out();
        return true;
      }
      _ => {}
    }

    match navigation {
      Navigation::Client => self.handle_client_key(key),
      Navigation::Professional(nav) => self.handle_professional_key(key, &nav),
      Navigation::Administrator(nav) => self.handle_admin_key(key, nav.tab),
    }
    true
  }

  fn handle_login_key(&mut self, key: KeyEvent) -> bool {
    let focus = self.login.focus;
    match key.code {
      KeyCode::Tab | KeyCode::Down => self.login.focus = focus.next(),
      KeyCode::BackTab | KeyCode::Up => self.login.focus = focus.prev(),
      KeyCode::Enter => match focus {
        LoginFocus::Demo(i) => self.sign_in(&DEMO_ACCOUNTS[i]),
        LoginFocus::Email | LoginFocus::Password => {
          self.status_msg = "Credential sign-in is not available in the demo; pick a demo account.".into();
        }
      },
      KeyCode::Backspace => match focus {
        LoginFocus::Email => {
          self.login.email.pop();
        }
        LoginFocus::Password => {
          self.login.password.pop();
        }
        LoginFocus::Demo(_) => {}
      },
      KeyCode::Char(c) => match focus {
        LoginFocus::Email => self.login.email.push(c),
        LoginFocus::Password => self.login.password.push(c),
        LoginFocus::Demo(_) => match c {
          'q' => return false,
          '1'..='9' => {
            let index = (c as usize) - ('1' as usize);
            if let Some(account) = DEMO_ACCOUNTS.get(index) {
              self.sign_in(account);
            }
          }
          _ => {}
        },
      },
      KeyCode::Esc => self.login.focus = LoginFocus::Demo(0),
      _ => {}
    }
    true
  }

  fn handle_filter_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => {
        self.filter_active = false;
        self.user_filter.clear();
        self.list_cursor = 0;
      }
      KeyCode::Enter => {
        self.filter_active = false;
        self.list_cursor = 0;
      }
      KeyCode::Backspace => {
        self.user_filter.pop();
        self.list_cursor = 0;
      }
      KeyCode::Char(c) => {
        self.user_filter.push(c);
        self.list_cursor = 0;
      }
      _ => {}
    }
  }

  // ── Client ────────────────────────────────────────────────────────────────

  fn handle_client_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Char(' ') => self.audio_playing = !self.audio_playing,
      KeyCode::Char('a') => self.record_demo_assessment(),
      KeyCode::Char('r') => self.refresh_insight(),
      _ => {}
    }
  }

  /// Record an assessment for the current phase, a step above the last one.
  fn record_demo_assessment(&mut self) {
    let days = self.portal.days_elapsed();
    let last = self
      .portal
      .session()
      .and_then(|s| s.results().last())
      .map_or(0, |r| r.score.value());
    let score = match Score::new(last.saturating_add(DEMO_SCORE_STEP).min(Score::MAX)) {
      Ok(score) => score,
      Err(e) => {
        tracing::warn!(error = %e, "demo score out of range");
        return;
      }
    };
    let phase = current_phase(days);
    match self.portal.add_result(phase, score, BTreeMap::new(), Utc::now()) {
      Ok(result) => {
        self.status_msg = format!(
          "Assessment recorded: phase {}, score {}",
          result.phase.ordinal(),
          result.score.value()
        );
        self.insight.invalidate();
        self.refresh_insight();
      }
      Err(e) => self.status_msg = format!("Error: {e}"),
    }
  }

  // ── Professional ──────────────────────────────────────────────────────────

  fn handle_professional_key(&mut self, key: KeyEvent, nav: &ProfessionalNavigation) {
    if let KeyCode::Char(c @ '1'..='5') = key.code {
      let tab = match c {
        '1' => ProfessionalTab::Home,
        '2' => ProfessionalTab::Schedule,
        '3' => ProfessionalTab::Patients,
        '4' => ProfessionalTab::Profile,
        _ => ProfessionalTab::Settings,
      };
      if tab != nav.tab || nav.selected_record().is_some() {
        self.list_cursor = 0;
      }
      self.navigate(ProfessionalAction::SelectTab(tab));
      return;
    }

    match (&nav.tab, &nav.patients) {
      (ProfessionalTab::Home, _) => {
        let len = self.data.recent_results().len();
        if self.move_cursor(key.code, len) {
          return;
        }
        if key.code == KeyCode::Enter {
          let id = self
            .data
            .recent_results()
            .get(self.list_cursor)
            .map(|p| p.id.clone());
          if let Some(id) = id {
            self.navigate(ProfessionalAction::ViewResults(id));
          }
        }
      }
      (ProfessionalTab::Patients, PatientsView::List) => {
        let len = self.data.patients().len();
        if self.move_cursor(key.code, len) {
          return;
        }
        if matches!(key.code, KeyCode::Enter | KeyCode::Right) {
          let id = self.data.patients().get(self.list_cursor).map(|p| p.id.clone());
          if let Some(id) = id {
            self.navigate(ProfessionalAction::SelectRecord(id));
          }
        }
      }
      (ProfessionalTab::Patients, PatientsView::Detail { record_id, sub_tab }) => match key.code {
        KeyCode::Tab | KeyCode::BackTab => {
          self.navigate(ProfessionalAction::SelectSubTab(sub_tab.toggle()));
        }
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => {
          // Land the list cursor on the record we are leaving.
          if let Some(index) = self.data.patients().iter().position(|p| &p.id == record_id) {
            self.list_cursor = index;
          }
          self.navigate(ProfessionalAction::Back);
        }
        KeyCode::Char('r') => self.refresh_insight(),
        _ => {}
      },
      _ => {}
    }
  }

  /// Up/down movement within a list of `len` rows. Returns whether the key
  /// was a movement key.
  fn move_cursor(&mut self, code: KeyCode, len: usize) -> bool {
    match code {
      KeyCode::Down | KeyCode::Char('j') => {
        if len > 0 && self.list_cursor + 1 < len {
          self.list_cursor += 1;
        }
        true
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.list_cursor = self.list_cursor.saturating_sub(1);
        true
      }
      _ => false,
    }
  }

  // ── Administrator ─────────────────────────────────────────────────────────

  fn handle_admin_key(&mut self, key: KeyEvent, tab: AdminTab) {
    // Bottom navigation bar.
    let bottom = match key.code {
      KeyCode::Char('h') => Some(AdminTab::Home),
      KeyCode::Char('u') => Some(AdminTab::Users),
      KeyCode::Char('l') => Some(AdminTab::Logs),
      KeyCode::Char('c') => Some(AdminTab::Config),
      _ => None,
    };
    if let Some(target) = bottom {
      self.enter_admin_tab(AdminAction::BottomNav(target));
      return;
    }

    if matches!(key.code, KeyCode::Esc | KeyCode::Backspace) {
      self.enter_admin_tab(AdminAction::Back);
      return;
    }

    match tab {
      AdminTab::Profile => {
        let target = match key.code {
          KeyCode::Char('1') => Some(AdminTab::Users),
          KeyCode::Char('2') => Some(AdminTab::Logs),
          KeyCode::Char('3') => Some(AdminTab::Config),
          KeyCode::Char('4') => Some(AdminTab::System),
          _ => None,
        };
        if let Some(target) = target {
          self.enter_admin_tab(AdminAction::Open(target));
        }
      }
      AdminTab::System => match key.code {
        KeyCode::Char('i') => self.enter_admin_tab(AdminAction::Open(AdminTab::Home)),
        KeyCode::Char('s') => self.enter_admin_tab(AdminAction::Open(AdminTab::Profile)),
        _ => {}
      },
      AdminTab::Users => {
        if key.code == KeyCode::Char('/') {
          self.filter_active = true;
          self.user_filter.clear();
          self.list_cursor = 0;
        } else {
          let len = self.data.search_users(&self.user_filter).len();
          self.move_cursor(key.code, len);
        }
      }
      AdminTab::Config => self.handle_config_key(key),
      AdminTab::Logs | AdminTab::Home => {}
    }
  }

  fn enter_admin_tab(&mut self, action: AdminAction) {
    if self.navigate(action) {
      self.list_cursor = 0;
      self.user_filter.clear();
    }
  }

  fn handle_config_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Down | KeyCode::Char('j') => {
        self.config_cursor = (self.config_cursor + 1).min(CONFIG_ROWS.len() - 1);
        return;
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.config_cursor = self.config_cursor.saturating_sub(1);
        return;
      }
      _ => {}
    }

    let row = CONFIG_ROWS[self.config_cursor];
    let Some(settings) = self.portal.admin_settings_mut() else {
      return;
    };
    match (row, key.code) {
      (ConfigRow::PhaseWeeks, KeyCode::Left) => settings.adjust_phase_weeks(-1),
      (ConfigRow::PhaseWeeks, KeyCode::Right) => settings.adjust_phase_weeks(1),
      (ConfigRow::Intensity, KeyCode::Left) => settings.adjust_intensity(-5),
      (ConfigRow::Intensity, KeyCode::Right) => settings.adjust_intensity(5),
      (ConfigRow::Toggle(toggle), KeyCode::Enter | KeyCode::Char(' ')) => settings.toggle(toggle),
      (ConfigRow::Reset, KeyCode::Enter | KeyCode::Char(' ')) => {
        settings.reset();
        self.status_msg = "Factory defaults restored".into();
      }
      _ => {}
    }
  }
}

#[cfg(test)]
mod tests {
  use std::{
    future::Future,
    sync::atomic::{AtomicUsize, Ordering},
  };

  use equilibrar_core::{
    identity::Role,
    insight::{FALLBACK_ERROR, InsightPrompt, InsightState},
    router::DashboardVariant,
  };

  use super::*;

  #[derive(Debug, thiserror::Error)]
  #[error("offline")]
  struct Offline;

  /// Replies with the number of calls made so far, or fails if `fail`.
  #[derive(Default)]
  struct Scripted {
    calls: AtomicUsize,
    fail:  bool,
  }

  impl InsightService for Scripted {
    type Error = Offline;

    fn summarize<'a>(
      &'a self,
      _prompt: &'a InsightPrompt,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send + 'a {
      async move {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail { Err(Offline) } else { Ok(format!("insight #{n}")) }
      }
    }
  }

  fn press(app: &mut App<Scripted>, code: KeyCode) -> bool {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
  }

  fn demo_key(role: Role) -> KeyCode {
    let index = DEMO_ACCOUNTS
      .iter()
      .position(|a| a.role == role)
      .expect("demo account");
    KeyCode::Char(char::from(b'1' + index as u8))
  }

  async fn settle(app: &mut App<Scripted>) {
    for _ in 0..50 {
      tokio::task::yield_now().await;
      app.poll_insights();
      if !app.insight.is_loading() {
        return;
      }
    }
  }

  fn admin_tab(app: &App<Scripted>) -> AdminTab {
    match app.portal.navigation() {
      Some(Navigation::Administrator(nav)) => nav.tab,
      other => panic!("expected administrator navigation, got {other:?}"),
    }
  }

  #[tokio::test]
  async fn admin_walkthrough() {
    let mut app = App::new(Scripted::default());
    press(&mut app, demo_key(Role::Administrator));
    assert_eq!(app.portal.variant(), Some(DashboardVariant::Administrator));
    assert_eq!(admin_tab(&app), AdminTab::Profile);

    press(&mut app, KeyCode::Char('2'));
    assert_eq!(admin_tab(&app), AdminTab::Logs);
    press(&mut app, KeyCode::Esc);
    assert_eq!(admin_tab(&app), AdminTab::Profile);

    press(&mut app, KeyCode::Char('4'));
    assert_eq!(admin_tab(&app), AdminTab::System);
    press(&mut app, KeyCode::Char('i'));
    assert_eq!(admin_tab(&app), AdminTab::Home);

    press(&mut app, KeyCode::Char('o'));
    assert!(!app.portal.is_signed_in());
  }

  #[tokio::test]
  async fn admin_config_adjusts_settings() {
    let mut app = App::new(Scripted::default());
    press(&mut app, demo_key(Role::Administrator));
    press(&mut app, KeyCode::Char('c'));
    assert_eq!(admin_tab(&app), AdminTab::Config);

    let weeks_row = CONFIG_ROWS
      .iter()
      .position(|r| *r == ConfigRow::PhaseWeeks)
      .unwrap();
    for _ in 0..weeks_row {
      press(&mut app, KeyCode::Down);
    }
    press(&mut app, KeyCode::Right);
    assert_eq!(app.portal.admin_settings().unwrap().phase_one_weeks, 5);

    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Enter);
    assert!(!app.portal.admin_settings().unwrap().email_alerts);
  }

  #[tokio::test]
  async fn admin_user_filter_captures_typing() {
    let mut app = App::new(Scripted::default());
    press(&mut app, demo_key(Role::Administrator));
    press(&mut app, KeyCode::Char('u'));
    press(&mut app, KeyCode::Char('/'));
    for c in "lena".chars() {
      press(&mut app, KeyCode::Char(c));
    }
    // 'l' and 'u' were typed, not treated as navigation.
    assert_eq!(admin_tab(&app), AdminTab::Users);
    assert_eq!(app.user_filter, "lena");
    press(&mut app, KeyCode::Enter);
    assert!(!app.filter_active);
  }

  #[tokio::test]
  async fn professional_view_results_loads_report_insight() {
    let mut app = App::new(Scripted::default());
    press(&mut app, demo_key(Role::Professional));
    press(&mut app, KeyCode::Enter);

    let Some(Navigation::Professional(nav)) = app.portal.navigation().cloned() else {
      panic!("expected professional navigation");
    };
    let expected = app.data.recent_results()[0].id.clone();
    assert_eq!(nav.selected_record(), Some(expected.as_str()));
    assert_eq!(nav.sub_tab(), Some(PatientSubTab::Report));
    assert!(app.insight.is_loading());

    settle(&mut app).await;
    assert_eq!(app.insight.text(), Some("insight #1"));
  }

  #[tokio::test]
  async fn stale_insight_is_discarded_after_leaving_report() {
    let mut app = App::new(Scripted::default());
    press(&mut app, demo_key(Role::Professional));
    press(&mut app, KeyCode::Enter);
    assert!(app.insight.is_loading());

    press(&mut app, KeyCode::Esc);
    settle(&mut app).await;
    assert_eq!(app.insight.state(), &InsightState::Idle);
    assert_eq!(app.portal.navigation().unwrap().selected_record(), None);
  }

  #[tokio::test]
  async fn back_lands_the_cursor_on_the_record() {
    let mut app = App::new(Scripted::default());
    press(&mut app, demo_key(Role::Professional));
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.portal.navigation().unwrap().selected_record(), Some("3"));
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.list_cursor, 2);
  }

  #[tokio::test]
  async fn client_insight_falls_back_when_offline() {
    let mut app = App::new(Scripted {
      fail: true,
      ..Scripted::default()
    });
    press(&mut app, demo_key(Role::Client));
    assert_eq!(app.portal.navigation(), Some(&Navigation::Client));
    settle(&mut app).await;
    assert_eq!(app.insight.text(), Some(FALLBACK_ERROR));
  }

  #[tokio::test]
  async fn client_records_assessment() {
    let mut app = App::new(Scripted::default());
    press(&mut app, demo_key(Role::Client));
    settle(&mut app).await;
    press(&mut app, KeyCode::Char('a'));
    let results = app.portal.session().unwrap().results();
    assert_eq!(results.len(), 2);
    assert_eq!(results[1].score.value(), 60);
    settle(&mut app).await;
    assert_eq!(app.insight.text(), Some("insight #2"));
  }

  #[tokio::test]
  async fn login_form_accepts_text_but_does_not_sign_in() {
    let mut app = App::new(Scripted::default());
    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::BackTab);
    for c in "a@b.c".chars() {
      press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.login.email, "a@b.c");
    assert!(!app.portal.is_signed_in());
    assert!(!app.status_msg.is_empty());
  }

  #[tokio::test]
  async fn q_quits_only_outside_text_fields() {
    let mut app = App::new(Scripted::default());
    app.login.focus = LoginFocus::Email;
    assert!(press(&mut app, KeyCode::Char('q')));
    app.login.focus = LoginFocus::Demo(0);
    assert!(!press(&mut app, KeyCode::Char('q')));
  }
}
