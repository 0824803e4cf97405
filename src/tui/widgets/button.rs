//! Text buttons rendered as `[ label ]`.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// How a button should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// Enabled, without keyboard focus.
    Normal,
    /// Enabled and focused; `Enter` activates it.
    Focused,
    /// Not activatable.
    Disabled,
}

/// Builds the span for a button drawn in `color`.
pub fn button_span(label: &str, color: Color, state: ButtonState) -> Span<'static> {
    let text = format!("[ {label} ]");
    let style = match state {
        ButtonState::Normal => Style::default().fg(color),
        ButtonState::Focused => Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD),
        ButtonState::Disabled => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
    };
    Span::styled(text, style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_label_in_brackets() {
        let span = button_span("Chiudi", Color::Blue, ButtonState::Normal);
        assert_eq!(span.content, "[ Chiudi ]");
        assert_eq!(span.style.fg, Some(Color::Blue));
    }

    #[test]
    fn focused_inverts_colors() {
        let span = button_span("Invia", Color::Blue, ButtonState::Focused);
        assert_eq!(span.style.bg, Some(Color::Blue));
        assert_eq!(span.style.fg, Some(Color::Black));
    }

    #[test]
    fn disabled_is_gray() {
        let span = button_span("Invia", Color::Blue, ButtonState::Disabled);
        assert_eq!(span.style.fg, Some(Color::DarkGray));
        assert_eq!(span.style.bg, None);
    }
}
