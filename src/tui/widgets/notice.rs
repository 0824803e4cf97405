//! Blocking notice: a modal message that swallows the next key press.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::popup::centered_rect;

/// Message shown when a submission fails, whatever the cause.
pub const SUBMISSION_FAILED: &str = "Si è verificato un errore. Riprova più tardi.";

/// A message the user must acknowledge before continuing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    title: String,
    message: String,
}

impl Notice {
    /// Creates a notice.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// The notice shown after any failed submission.
    pub fn submission_failed() -> Self {
        Self::new("Errore", SUBMISSION_FAILED)
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Renders the notice as a popup over `area`.
#[mutants::skip]
pub fn draw_notice(notice: &Notice, frame: &mut Frame, area: Rect) {
    let popup = centered_rect(52, 7, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" {} ", notice.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let [message_area, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    let message = Paragraph::new(notice.message())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(message, message_area);

    let footer = Paragraph::new(Line::from("Premi un tasto per continuare"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
