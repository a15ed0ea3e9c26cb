//! Small building blocks shared by the dashboards.

use equilibrar_core::{dataset::ChartPoint, insight::InsightState};
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
};

pub const ACCENT: Color = Color::Cyan;
pub const MUTED: Color = Color::DarkGray;

/// A bordered block with the house style.
pub fn panel(title: &str) -> Block<'static> {
  Block::default()
    .title(format!(" {title} "))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(MUTED))
}

/// Highlighted when focused.
pub fn focus_panel(title: &str, focused: bool) -> Block<'static> {
  let block = panel(title);
  if focused { block.border_style(Style::default().fg(ACCENT)) } else { block }
}

/// A one-line tab strip; the selected entry is reversed.
pub fn tab_bar<'a>(labels: impl IntoIterator<Item = (&'a str, &'a str, bool)>) -> Line<'a> {
  let mut spans = Vec::new();
  for (key, label, selected) in labels {
    let style = if selected {
      Style::default()
        .fg(Color::Black)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
    } else {
      Style::default().fg(Color::Gray)
    };
    spans.push(Span::styled(format!(" [{key}] {label} "), style));
    spans.push(Span::raw(" "));
  }
  Line::from(spans)
}

/// Vertical bar chart over labelled points.
pub fn draw_chart(f: &mut Frame, area: Rect, title: &str, points: &[ChartPoint]) {
  let block = panel(title);
  if points.is_empty() {
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
      Paragraph::new("No data yet.").style(Style::default().fg(MUTED)),
      inner,
    );
    return;
  }

  let bars: Vec<Bar> = points
    .iter()
    .map(|p| {
      Bar::default()
        .value(p.value)
        .label(Line::from(p.label.clone()))
        .style(Style::default().fg(ACCENT))
    })
    .collect();

  let chart = BarChart::default()
    .block(block)
    .data(BarGroup::default().bars(&bars))
    .bar_width(5)
    .bar_gap(2)
    .max(100);
  f.render_widget(chart, area);
}

/// The insight panel: spinner text while loading, the insight once ready.
pub fn draw_insight(f: &mut Frame, area: Rect, state: &InsightState) {
  let block = panel("Evolution insight");
  let inner = block.inner(area);
  f.render_widget(block, area);

  let line = match state {
    InsightState::Idle => Line::from(Span::styled("No insight requested.", Style::default().fg(MUTED))),
    InsightState::Loading => Line::from(Span::styled(
      "Analysing results…",
      Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
    )),
    InsightState::Ready(text) => Line::from(text.clone()),
  };
  f.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), inner);
}

/// Label/value pair for detail panes.
pub fn field<'a>(label: &'a str, value: impl Into<String>) -> Line<'a> {
  Line::from(vec![
    Span::styled(format!("{label:<14}"), Style::default().fg(MUTED)),
    Span::raw(value.into()),
  ])
}
