//! Survey screen: pick a reason, add optional comments, submit.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::Reason;
use crate::session::{CommentEdit, Survey};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::{ButtonState, button_span, centered_rect};

/// Cursor block drawn at the end of the focused comments box.
const CURSOR: &str = "\u{2588}";

/// Placeholder shown in the empty comments box.
pub const COMMENTS_PLACEHOLDER: &str = "Dettagli aggiuntivi (opzionale)";

/// Which part of the survey receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurveyFocus {
    #[default]
    Reasons,
    Comments,
    Submit,
}

impl SurveyFocus {
    fn next(self) -> Self {
        match self {
            SurveyFocus::Reasons => SurveyFocus::Comments,
            SurveyFocus::Comments => SurveyFocus::Submit,
            SurveyFocus::Submit => SurveyFocus::Reasons,
        }
    }

    fn prev(self) -> Self {
        match self {
            SurveyFocus::Reasons => SurveyFocus::Submit,
            SurveyFocus::Comments => SurveyFocus::Reasons,
            SurveyFocus::Submit => SurveyFocus::Comments,
        }
    }
}

/// Presentation state for the survey screen. The answers themselves live in
/// the [`Survey`].
#[derive(Debug, Clone, Default)]
pub struct SurveyState {
    focus: SurveyFocus,
    /// Highlighted row in the reason list.
    cursor: usize,
}

impl SurveyState {
    /// Creates the state with focus on the first reason.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the focused part.
    pub fn focus(&self) -> SurveyFocus {
        self.focus
    }

    /// Returns the highlighted reason row.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn handle_reasons_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                if self.cursor + 1 < Reason::all().len() {
                    self.cursor += 1;
                }
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                Reason::from_index(self.cursor).map_or(Action::None, Action::SelectReason)
            }
            KeyCode::Char(ch) => {
                // Digits are 1-based positions in the list.
                let index = ch
                    .to_digit(10)
                    .and_then(|n| (n as usize).checked_sub(1));
                match index.and_then(|i| Reason::from_index(i).map(|r| (i, r))) {
                    Some((i, reason)) => {
                        self.cursor = i;
                        Action::SelectReason(reason)
                    }
                    None => Action::None,
                }
            }
            _ => Action::None,
        }
    }

    fn handle_comments_key(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(ch) => Action::EditComments(CommentEdit::Insert(ch)),
            KeyCode::Enter => Action::EditComments(CommentEdit::Insert('\n')),
            KeyCode::Backspace => Action::EditComments(CommentEdit::Backspace),
            _ => Action::None,
        }
    }
}

impl ScreenState for SurveyState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('s') => Action::Submit,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                Action::None
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                Action::None
            }
            KeyCode::Esc => Action::Quit,
            _ => match self.focus {
                SurveyFocus::Reasons => self.handle_reasons_key(key),
                SurveyFocus::Comments => self.handle_comments_key(key),
                SurveyFocus::Submit => match key.code {
                    KeyCode::Enter | KeyCode::Char(' ') => Action::Submit,
                    _ => Action::None,
                },
            },
        }
    }
}

/// Returns the submit button label.
pub fn submit_label(survey: &Survey) -> &'static str {
    if survey.is_submitting() {
        "Invio in corso..."
    } else {
        "Invia Feedback"
    }
}

/// Hard-wraps `text` into rows of at most `width` characters, one or more per
/// line of input. Empty input lines still produce a row.
fn wrap_rows(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
        }
        rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
    }
    rows
}

/// Builds the comment box rows, with a blinking cursor block after the text
/// when the box has focus.
fn comment_lines(comments: &str, focused: bool, width: usize) -> Vec<Line<'static>> {
    if !focused {
        return wrap_rows(comments, width).into_iter().map(Line::from).collect();
    }

    let mut rows = wrap_rows(&format!("{comments}{CURSOR}"), width);
    let last = rows.pop().unwrap_or_default();
    let prefix = last.strip_suffix(CURSOR).unwrap_or(&last).to_string();
    let mut lines: Vec<Line> = rows.into_iter().map(Line::from).collect();
    lines.push(Line::from(vec![
        Span::raw(prefix),
        Span::styled(CURSOR, Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]));
    lines
}

/// Renders the survey screen.
#[mutants::skip]
pub fn draw_survey(state: &SurveyState, survey: &Survey, frame: &mut Frame, area: Rect) {
    let card = centered_rect(64, 20, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let [title_area, reasons_area, comments_area, submit_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(5),
        Constraint::Min(4),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .areas(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        "Aiutaci a Migliorare",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    let reasons: Vec<Line> = Reason::all()
        .iter()
        .enumerate()
        .map(|(i, reason)| {
            let selected = survey.reason() == Some(*reason);
            let pointer = if state.focus() == SurveyFocus::Reasons && state.cursor() == i {
                "›"
            } else {
                " "
            };
            let marker = if selected { "●" } else { "○" };
            let style = if selected {
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(
                format!("{pointer} {marker} {}  {} {}", i + 1, reason.icon(), reason.label()),
                style,
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(reasons), reasons_area);

    let focused = state.focus() == SurveyFocus::Comments;
    let comments_block = Block::default()
        .title(" Commenti ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            Color::Yellow
        } else {
            Color::DarkGray
        }));
    let inner = comments_block.inner(comments_area);
    let lines: Vec<Line> = if survey.comments().is_empty() && !focused {
        vec![Line::from(Span::styled(
            COMMENTS_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        comment_lines(survey.comments(), focused, usize::from(inner.width))
    };
    // Keep the last row (and the cursor) in view.
    let offset = lines.len().saturating_sub(usize::from(inner.height));
    frame.render_widget(
        Paragraph::new(lines)
            .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0))
            .block(comments_block),
        comments_area,
    );

    let button_state = if !survey.can_submit() {
        ButtonState::Disabled
    } else if state.focus() == SurveyFocus::Submit {
        ButtonState::Focused
    } else {
        ButtonState::Normal
    };
    let submit = Line::from(button_span(submit_label(survey), Color::Blue, button_state));
    frame.render_widget(
        Paragraph::new(vec![Line::from(""), submit]).alignment(Alignment::Center),
        submit_area,
    );

    let footer = Paragraph::new("Tab: next  1-4: reason  Ctrl+S: send  Esc: quit  F1: help")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};

    use super::*;
    use crate::session::Session;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        key(code, KeyModifiers::NONE)
    }

    fn focused_on(focus: SurveyFocus) -> SurveyState {
        SurveyState {
            focus,
            cursor: 0,
        }
    }

    mod focus {
        use super::*;

        #[test]
        fn starts_on_reasons() {
            let state = SurveyState::new();
            assert_eq!(state.focus(), SurveyFocus::Reasons);
            assert_eq!(state.cursor(), 0);
        }

        #[test]
        fn tab_cycles_forward_and_wraps() {
            let mut state = SurveyState::new();
            state.handle_key(press(KeyCode::Tab));
            assert_eq!(state.focus(), SurveyFocus::Comments);
            state.handle_key(press(KeyCode::Tab));
            assert_eq!(state.focus(), SurveyFocus::Submit);
            state.handle_key(press(KeyCode::Tab));
            assert_eq!(state.focus(), SurveyFocus::Reasons);
        }

        #[test]
        fn backtab_cycles_backward() {
            let mut state = SurveyState::new();
            state.handle_key(press(KeyCode::BackTab));
            assert_eq!(state.focus(), SurveyFocus::Submit);
        }
    }

    mod reasons {
        use super::*;

        #[test]
        fn down_and_up_move_cursor_without_wrapping() {
            let mut state = SurveyState::new();
            state.handle_key(press(KeyCode::Up));
            assert_eq!(state.cursor(), 0);
            for _ in 0..10 {
                state.handle_key(press(KeyCode::Down));
            }
            assert_eq!(state.cursor(), Reason::all().len() - 1);
        }

        #[test]
        fn enter_selects_reason_under_cursor() {
            let mut state = SurveyState::new();
            state.handle_key(press(KeyCode::Down));
            assert_eq!(
                state.handle_key(press(KeyCode::Enter)),
                Action::SelectReason(Reason::Price)
            );
            assert_eq!(
                state.handle_key(press(KeyCode::Char(' '))),
                Action::SelectReason(Reason::Price)
            );
        }

        #[test]
        fn digits_select_directly_and_move_cursor() {
            let mut state = SurveyState::new();
            assert_eq!(
                state.handle_key(press(KeyCode::Char('3'))),
                Action::SelectReason(Reason::Waiting)
            );
            assert_eq!(state.cursor(), 2);
        }

        #[test]
        fn out_of_range_digits_ignored() {
            let mut state = SurveyState::new();
            assert_eq!(state.handle_key(press(KeyCode::Char('0'))), Action::None);
            assert_eq!(state.handle_key(press(KeyCode::Char('5'))), Action::None);
            assert_eq!(state.cursor(), 0);
        }
    }

    mod comments {
        use super::*;

        #[test]
        fn characters_become_edits() {
            let mut state = focused_on(SurveyFocus::Comments);
            assert_eq!(
                state.handle_key(press(KeyCode::Char('q'))),
                Action::EditComments(CommentEdit::Insert('q'))
            );
            assert_eq!(
                state.handle_key(press(KeyCode::Enter)),
                Action::EditComments(CommentEdit::Insert('\n'))
            );
            assert_eq!(
                state.handle_key(press(KeyCode::Backspace)),
                Action::EditComments(CommentEdit::Backspace)
            );
        }

        #[test]
        fn shifted_characters_are_typed() {
            let mut state = focused_on(SurveyFocus::Comments);
            assert_eq!(
                state.handle_key(key(KeyCode::Char('A'), KeyModifiers::SHIFT)),
                Action::EditComments(CommentEdit::Insert('A'))
            );
        }

        #[test]
        fn digits_are_typed_not_selected() {
            let mut state = focused_on(SurveyFocus::Comments);
            assert_eq!(
                state.handle_key(press(KeyCode::Char('1'))),
                Action::EditComments(CommentEdit::Insert('1'))
            );
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn enter_on_button_submits() {
            let mut state = focused_on(SurveyFocus::Submit);
            assert_eq!(state.handle_key(press(KeyCode::Enter)), Action::Submit);
        }

        #[test]
        fn ctrl_s_submits_from_any_focus() {
            for focus in [
                SurveyFocus::Reasons,
                SurveyFocus::Comments,
                SurveyFocus::Submit,
            ] {
                let mut state = focused_on(focus);
                assert_eq!(
                    state.handle_key(key(KeyCode::Char('s'), KeyModifiers::CONTROL)),
                    Action::Submit,
                    "Ctrl+S on {focus:?}"
                );
            }
        }

        #[test]
        fn other_control_chords_ignored() {
            let mut state = focused_on(SurveyFocus::Comments);
            assert_eq!(
                state.handle_key(key(KeyCode::Char('x'), KeyModifiers::CONTROL)),
                Action::None
            );
        }

        #[test]
        fn esc_quits() {
            let mut state = focused_on(SurveyFocus::Comments);
            assert_eq!(state.handle_key(press(KeyCode::Esc)), Action::Quit);
        }

        #[test]
        fn label_changes_while_submitting() {
            let mut session = Session::new();
            session.choose_negative().unwrap();
            session.select_reason(Reason::Other).unwrap();
            assert_eq!(submit_label(session.survey().unwrap()), "Invia Feedback");
            session.begin_submit(chrono::Utc::now()).unwrap();
            assert_eq!(submit_label(session.survey().unwrap()), "Invio in corso...");
        }
    }

    mod rendering {
        use chrono::Utc;
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;
        use ratatui::buffer::Buffer;

        use super::*;

        fn buffer_to_string(buf: &Buffer) -> String {
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        fn render_buffer(state: &SurveyState, survey: &Survey) -> Buffer {
            let backend = TestBackend::new(80, 24);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| draw_survey(state, survey, frame, frame.area()))
                .unwrap();
            terminal.backend().buffer().clone()
        }

        fn render(state: &SurveyState, survey: &Survey) -> String {
            buffer_to_string(&render_buffer(state, survey))
        }

        /// Cell position of the first character of `text` in the buffer.
        fn find(buf: &Buffer, text: &str) -> (u16, u16) {
            let output = buffer_to_string(buf);
            output
                .lines()
                .enumerate()
                .find_map(|(y, line)| {
                    line.find(text).map(|byte| {
                        let x = line[..byte].chars().count();
                        (x as u16, y as u16)
                    })
                })
                .unwrap_or_else(|| panic!("{text:?} not rendered:\n{output}"))
        }

        fn assert_dimmed(buf: &Buffer, text: &str) {
            let (x, y) = find(buf, text);
            for dx in 0..text.chars().count() as u16 {
                let cell = &buf[(x + dx, y)];
                assert_eq!(cell.fg, Color::DarkGray, "{text:?} at column {}", x + dx);
                assert!(
                    cell.modifier.contains(Modifier::DIM),
                    "{text:?} at column {} should be dim",
                    x + dx
                );
            }
        }

        fn survey_with(reason: Option<Reason>, comments: &str) -> Session {
            let mut session = Session::new();
            session.choose_negative().unwrap();
            if let Some(reason) = reason {
                session.select_reason(reason).unwrap();
            }
            session.set_comments(comments).unwrap();
            session
        }

        #[test]
        fn renders_title_and_all_reasons() {
            let session = survey_with(None, "");
            let output = render(&SurveyState::new(), session.survey().unwrap());
            assert!(output.contains("Aiutaci a Migliorare"), "should show title");
            for reason in Reason::all() {
                assert!(output.contains(reason.label()), "missing {reason:?}");
            }
        }

        #[test]
        fn renders_placeholder_when_empty_and_unfocused() {
            let session = survey_with(None, "");
            let output = render(&SurveyState::new(), session.survey().unwrap());
            assert!(output.contains(COMMENTS_PLACEHOLDER), "should show placeholder");
        }

        #[test]
        fn renders_comments() {
            let session = survey_with(Some(Reason::Waiting), "too slow");
            let output = render(&SurveyState::new(), session.survey().unwrap());
            assert!(output.contains("too slow"), "should show comment text");
            assert!(!output.contains(COMMENTS_PLACEHOLDER));
        }

        #[test]
        fn marks_selected_reason() {
            let session = survey_with(Some(Reason::Price), "");
            let output = render(&SurveyState::new(), session.survey().unwrap());
            let price_line = output
                .lines()
                .find(|line| line.contains("Prezzo"))
                .unwrap();
            assert!(price_line.contains('●'), "selected reason should be marked");
            let other_line = output.lines().find(|line| line.contains("Altro")).unwrap();
            assert!(other_line.contains('○'));
        }

        #[test]
        fn renders_submit_button() {
            let session = survey_with(Some(Reason::Price), "");
            let output = render(&SurveyState::new(), session.survey().unwrap());
            assert!(output.contains("[ Invia Feedback ]"));
        }

        #[test]
        fn submit_button_dimmed_without_reason() {
            let session = survey_with(None, "");
            let buf = render_buffer(&focused_on(SurveyFocus::Submit), session.survey().unwrap());
            assert_dimmed(&buf, "[ Invia Feedback ]");
        }

        #[test]
        fn submit_button_dimmed_while_in_flight() {
            let mut session = survey_with(Some(Reason::Quality), "");
            session.begin_submit(Utc::now()).unwrap();
            let buf = render_buffer(&focused_on(SurveyFocus::Submit), session.survey().unwrap());
            assert_dimmed(&buf, "[ Invio in corso... ]");
        }

        #[test]
        fn submit_button_not_dimmed_when_ready() {
            let session = survey_with(Some(Reason::Quality), "");
            let buf = render_buffer(&SurveyState::new(), session.survey().unwrap());
            let (x, y) = find(&buf, "[ Invia Feedback ]");
            assert!(!buf[(x, y)].modifier.contains(Modifier::DIM));
        }

        #[test]
        fn long_comment_scrolls_to_last_line() {
            let comments = (1..=10)
                .map(|n| format!("line{n}"))
                .collect::<Vec<_>>()
                .join("\n");
            let session = survey_with(Some(Reason::Other), &comments);
            let output = render(&focused_on(SurveyFocus::Comments), session.survey().unwrap());
            assert!(output.contains("line10"), "last line should be visible:\n{output}");
            assert!(output.contains('\u{2588}'), "cursor should be visible");
            assert!(!output.contains("line1 "), "first line should scroll out");
        }

        #[test]
        fn long_comment_unfocused_still_shows_tail() {
            let comments = (1..=10)
                .map(|n| format!("line{n}"))
                .collect::<Vec<_>>()
                .join("\n");
            let session = survey_with(Some(Reason::Other), &comments);
            let output = render(&SurveyState::new(), session.survey().unwrap());
            assert!(output.contains("line10"));
        }
    }

    mod wrapping {
        use super::*;

        #[test]
        fn splits_on_newlines_and_width() {
            assert_eq!(wrap_rows("abcdef\n\ngh", 4), vec!["abcd", "ef", "", "gh"]);
        }

        #[test]
        fn empty_text_is_one_row() {
            assert_eq!(wrap_rows("", 10), vec![String::new()]);
        }

        #[test]
        fn cursor_follows_text_on_last_row() {
            let lines = comment_lines("abcd", true, 4);
            assert_eq!(lines.len(), 2, "a full row pushes the cursor to the next one");
            assert_eq!(lines[1].to_string(), CURSOR);
        }
    }
}
