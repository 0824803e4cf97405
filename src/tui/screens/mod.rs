//! TUI screen implementations, one per session stage, plus the help overlay.

pub mod help;
pub mod initial;
pub mod survey;
pub mod thank_you;

pub use help::draw_help;
pub use initial::{InitialState, Rating, draw_initial};
pub use survey::{SurveyFocus, SurveyState, draw_survey};
pub use thank_you::{ThankYouState, draw_thank_you};
