//! Help overlay: keybinding reference for the current stage.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::session::StageKind;
use crate::tui::widgets::centered_rect;

static INITIAL_KEYS: &[(&str, &str)] = &[
    ("←/→ / Tab", "choose button"),
    ("Enter", "confirm"),
    ("p", "positive: open review page"),
    ("n", "negative: tell us why"),
    ("q / Esc", "quit"),
];

static SURVEY_KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "next / prev section"),
    ("↑/↓", "move through reasons"),
    ("Enter / Space", "select reason / press button"),
    ("1-4", "select reason directly"),
    ("Enter (comments)", "new line"),
    ("Ctrl+S", "send feedback"),
    ("Esc", "quit"),
];

static THANK_YOU_KEYS: &[(&str, &str)] = &[("Enter / c", "close"), ("q / Esc", "quit")];

static GLOBAL_KEYS: &[(&str, &str)] = &[("F1", "toggle help"), ("Ctrl+C", "quit")];

fn stage_name(stage: StageKind) -> &'static str {
    match stage {
        StageKind::Initial => "Valutazione",
        StageKind::Survey => "Sondaggio",
        StageKind::ThankYou => "Grazie",
    }
}

fn build_section(title: &'static str, keys: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow);
    let dim_style = Style::default().fg(Color::DarkGray);

    let mut lines = vec![Line::from(Span::styled(title, header_style))];
    for (key, desc) in keys {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<18}"), key_style),
            Span::styled(*desc, dim_style),
        ]));
    }
    lines
}

/// Returns the help lines for `stage`, followed by the global keys.
pub fn help_content(stage: StageKind) -> Vec<Line<'static>> {
    let keys = match stage {
        StageKind::Initial => INITIAL_KEYS,
        StageKind::Survey => SURVEY_KEYS,
        StageKind::ThankYou => THANK_YOU_KEYS,
    };
    let mut lines = build_section(stage_name(stage), keys);
    lines.push(Line::from(""));
    lines.extend(build_section("Sempre", GLOBAL_KEYS));
    lines
}

/// Renders the help overlay on top of `area`.
#[mutants::skip]
pub fn draw_help(stage: StageKind, frame: &mut Frame, area: Rect) {
    let content = help_content(stage);
    let popup = centered_rect(60, content.len() as u16 + 3, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
    frame.render_widget(Paragraph::new(content), content_area);

    let footer = Paragraph::new("any key: close").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
