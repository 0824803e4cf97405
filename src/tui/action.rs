//! Actions returned by screen event handlers.

use crossterm::event::KeyEvent;

use crate::model::Reason;
use crate::session::CommentEdit;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` applies these to the [`Session`](crate::session::Session) and
/// performs any side effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No state change needed.
    None,
    /// The experience was positive: open the review page.
    Positive,
    /// The experience was negative: start the survey.
    Negative,
    /// Choose a reason on the survey.
    SelectReason(Reason),
    /// Edit the survey comments.
    EditComments(CommentEdit),
    /// Submit the survey.
    Submit,
    /// Close the thank-you screen.
    Dismiss,
    /// Quit the application.
    Quit,
}

/// Common behavior for all screen state types.
pub trait ScreenState {
    /// Process a key event and return an [`Action`] for the `App` to apply.
    fn handle_key(&mut self, key: KeyEvent) -> Action;
}
