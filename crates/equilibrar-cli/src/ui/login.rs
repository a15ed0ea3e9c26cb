//! Sign-in screen: credential form plus the demo account buttons.

use equilibrar_core::identity::DEMO_ACCOUNTS;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{List, ListItem, Paragraph},
};

use super::widgets::{ACCENT, MUTED, focus_panel, panel};
use crate::app::{App, LoginFocus};

pub fn draw<S>(f: &mut Frame, area: Rect, app: &App<S>) {
  let outer = centered(area, 60, 22);
  let block = panel("Equilibrar · Sign in");
  let inner = block.inner(outer);
  f.render_widget(block, outer);

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(2), // tagline
      Constraint::Length(3), // email
      Constraint::Length(3), // password
      Constraint::Length(1), // divider
      Constraint::Min(0),    // demo accounts
    ])
    .split(inner);

  f.render_widget(
    Paragraph::new(Line::from(Span::styled(
      "Your space for wellbeing and personal growth.",
      Style::default().fg(MUTED),
    ))),
    rows[0],
  );

  let focus = app.login.focus;
  f.render_widget(
    Paragraph::new(app.login.email.as_str())
      .block(focus_panel("Email", focus == LoginFocus::Email)),
    rows[1],
  );
  let masked = "•".repeat(app.login.password.chars().count());
  f.render_widget(
    Paragraph::new(masked).block(focus_panel("Password", focus == LoginFocus::Password)),
    rows[2],
  );

  f.render_widget(
    Paragraph::new(Span::styled(" Demo access", Style::default().fg(MUTED))),
    rows[3],
  );

  let items: Vec<ListItem> = DEMO_ACCOUNTS
    .iter()
    .enumerate()
    .map(|(i, account)| {
      let selected = focus == LoginFocus::Demo(i);
      let style = if selected {
        Style::default()
          .fg(Color::Black)
          .bg(ACCENT)
          .add_modifier(Modifier::BOLD)
      } else {
        Style::default()
      };
      ListItem::new(Line::from(vec![
        Span::styled(format!(" [{}] ", i + 1), Style::default().fg(MUTED)),
        Span::styled(account.button, style),
      ]))
    })
    .collect();
  f.render_widget(List::new(items), rows[4]);
}

/// A `width` x `height` rectangle centred in `area`, clamped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
  let width = width.min(area.width);
  let height = height.min(area.height);
  Rect {
    x: area.x + (area.width - width) / 2,
    y: area.y + (area.height - height) / 2,
    width,
    height,
  }
}
