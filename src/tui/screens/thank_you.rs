//! Thank-you screen shown after a successful submission.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::{ButtonState, button_span, centered_rect};

/// The thank-you screen has a single button and no state of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThankYouState;

impl ScreenState for ThankYouState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return Action::None;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('c') => Action::Dismiss,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Renders the thank-you screen.
#[mutants::skip]
pub fn draw_thank_you(frame: &mut Frame, area: Rect) {
    let card = centered_rect(60, 10, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let [title_area, text_area, button_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .areas(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        "Grazie!",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    let text = Paragraph::new("Il tuo feedback ci aiuterà a migliorare il nostro servizio.")
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(text, text_area);

    let button = Line::from(button_span("Chiudi", Color::Blue, ButtonState::Focused));
    frame.render_widget(
        Paragraph::new(button).alignment(Alignment::Center),
        button_area,
    );

    let footer = Paragraph::new("Enter: chiudi  q: quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
