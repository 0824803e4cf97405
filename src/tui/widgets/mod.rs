//! Reusable TUI widgets.

pub mod button;
pub mod notice;
pub mod popup;

pub use button::{ButtonState, button_span};
pub use notice::{Notice, SUBMISSION_FAILED, draw_notice};
pub use popup::centered_rect;
