//! Initial screen: "how did it go?" with a positive and a negative button.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::{ButtonState, button_span, centered_rect};

/// The two ratings the user can give.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rating {
    #[default]
    Positive,
    Negative,
}

impl Rating {
    fn toggled(self) -> Self {
        match self {
            Rating::Positive => Rating::Negative,
            Rating::Negative => Rating::Positive,
        }
    }

    fn action(self) -> Action {
        match self {
            Rating::Positive => Action::Positive,
            Rating::Negative => Action::Negative,
        }
    }
}

/// State for the initial screen: which button has focus.
#[derive(Debug, Clone, Default)]
pub struct InitialState {
    focused: Rating,
}

impl InitialState {
    /// Creates the state with focus on the positive button.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the focused button.
    pub fn focused(&self) -> Rating {
        self.focused
    }
}

impl ScreenState for InitialState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return Action::None;
        }

        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.focused = self.focused.toggled();
                Action::None
            }
            KeyCode::Enter => self.focused.action(),
            KeyCode::Char('p') => Action::Positive,
            KeyCode::Char('n') => Action::Negative,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Renders the initial screen.
#[mutants::skip]
pub fn draw_initial(state: &InitialState, frame: &mut Frame, area: Rect) {
    let card = centered_rect(60, 11, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let [title_area, text_area, buttons_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .areas(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        "Come è andata?",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    let text = Paragraph::new("Il tuo feedback è importante per migliorare il nostro servizio")
        .alignment(Alignment::Center)
        .wrap(ratatui::widgets::Wrap { trim: true })
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(text, text_area);

    let state_for = |rating: Rating| {
        if state.focused() == rating {
            ButtonState::Focused
        } else {
            ButtonState::Normal
        }
    };
    let buttons = Line::from(vec![
        button_span(
            "Esperienza Positiva",
            Color::Green,
            state_for(Rating::Positive),
        ),
        Span::raw("  "),
        button_span(
            "Esperienza Negativa",
            Color::Red,
            state_for(Rating::Negative),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(buttons).alignment(Alignment::Center),
        buttons_area,
    );

    let footer = Paragraph::new("←/→: choose  Enter: confirm  q: quit  F1: help")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
