mod payload;
mod reason;

pub use payload::FeedbackPayload;
pub use reason::Reason;
