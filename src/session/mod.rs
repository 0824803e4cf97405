//! The feedback state machine.
//!
//! A [`Session`] moves through three stages: `initial` (rate the experience),
//! `survey` (why was it negative?) and `thankyou`. Survey data lives inside
//! [`Stage::Survey`], so leaving the survey drops it and "submitting" cannot
//! exist outside the survey. Side effects (HTTP, browser) are performed by the
//! caller; the session only decides whether they are allowed.

mod error;

use std::fmt;

use chrono::{DateTime, Utc};

use crate::model::{FeedbackPayload, Reason};

pub use error::SessionError;

/// The data collected on the survey stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Survey {
    reason: Option<Reason>,
    comments: String,
    submitting: bool,
}

impl Survey {
    /// Returns the selected reason, if any.
    pub fn reason(&self) -> Option<Reason> {
        self.reason
    }

    /// Returns the free-text comments.
    pub fn comments(&self) -> &str {
        &self.comments
    }

    /// Returns `true` while a submission is outstanding.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Returns `true` if the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.reason.is_some() && !self.submitting
    }
}

/// The current stage together with the data it owns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    Initial,
    Survey(Survey),
    ThankYou,
}

impl Stage {
    /// Returns the data-free discriminant.
    pub fn kind(&self) -> StageKind {
        match self {
            Stage::Initial => StageKind::Initial,
            Stage::Survey(_) => StageKind::Survey,
            Stage::ThankYou => StageKind::ThankYou,
        }
    }
}

/// Stage discriminant, for display and comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    Initial,
    Survey,
    ThankYou,
}

#[mutants::skip]
impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StageKind::Initial => "initial",
            StageKind::Survey => "survey",
            StageKind::ThankYou => "thankyou",
        })
    }
}

/// A single edit to the comment text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentEdit {
    /// Append a character (including `'\n'`).
    Insert(char),
    /// Remove the last character.
    Backspace,
}

/// One run of the feedback widget. Restartable indefinitely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    stage: Stage,
}

impl Session {
    /// Creates a session in the `initial` stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current stage.
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Returns the current stage discriminant.
    pub fn kind(&self) -> StageKind {
        self.stage.kind()
    }

    /// Returns the survey data when in the `survey` stage.
    pub fn survey(&self) -> Option<&Survey> {
        match &self.stage {
            Stage::Survey(survey) => Some(survey),
            _ => None,
        }
    }

    /// Returns `true` if submit is currently allowed.
    pub fn can_submit(&self) -> bool {
        self.survey().is_some_and(Survey::can_submit)
    }

    /// Accepts a positive rating. The stage does not change; the caller opens
    /// the review page.
    pub fn choose_positive(&self) -> Result<(), SessionError> {
        self.expect_stage("positive feedback", StageKind::Initial)
    }

    /// Accepts a negative rating and opens an empty survey.
    pub fn choose_negative(&mut self) -> Result<(), SessionError> {
        self.expect_stage("negative feedback", StageKind::Initial)?;
        self.stage = Stage::Survey(Survey::default());
        Ok(())
    }

    /// Selects the reason, replacing any previous choice.
    pub fn select_reason(&mut self, reason: Reason) -> Result<(), SessionError> {
        let survey = self.survey_mut("select reason")?;
        survey.reason = Some(reason);
        Ok(())
    }

    /// Replaces the comment text.
    pub fn set_comments(&mut self, comments: impl Into<String>) -> Result<(), SessionError> {
        let survey = self.survey_mut("edit comments")?;
        survey.comments = comments.into();
        Ok(())
    }

    /// Applies a single edit to the comment text.
    pub fn edit_comments(&mut self, edit: CommentEdit) -> Result<(), SessionError> {
        let survey = self.survey_mut("edit comments")?;
        match edit {
            CommentEdit::Insert(ch) => survey.comments.push(ch),
            CommentEdit::Backspace => {
                survey.comments.pop();
            }
        }
        Ok(())
    }

    /// Marks a submission as in flight and returns the payload to send,
    /// stamped with `now`.
    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Result<FeedbackPayload, SessionError> {
        let survey = self.survey_mut("submit")?;
        if survey.submitting {
            return Err(SessionError::AlreadySubmitting);
        }
        let reason = survey.reason.ok_or(SessionError::NoReason)?;
        survey.submitting = true;
        Ok(FeedbackPayload::new(reason, survey.comments.clone(), now))
    }

    /// Records the outcome of the outstanding submission.
    ///
    /// Success moves to `thankyou`; failure clears the in-flight flag and keeps
    /// the survey data for a retry.
    pub fn complete_submit(&mut self, succeeded: bool) -> Result<(), SessionError> {
        let survey = self.survey_mut("complete submit")?;
        if !survey.submitting {
            return Err(SessionError::NotSubmitting);
        }
        if succeeded {
            self.stage = Stage::ThankYou;
        } else {
            survey.submitting = false;
        }
        Ok(())
    }

    /// Closes the thank-you stage, returning to `initial` with no survey data.
    pub fn dismiss(&mut self) -> Result<(), SessionError> {
        self.expect_stage("dismiss", StageKind::ThankYou)?;
        self.stage = Stage::Initial;
        Ok(())
    }

    fn expect_stage(&self, action: &'static str, expected: StageKind) -> Result<(), SessionError> {
        let stage = self.kind();
        if stage == expected {
            Ok(())
        } else {
            Err(SessionError::WrongStage { action, stage })
        }
    }

    fn survey_mut(&mut self, action: &'static str) -> Result<&mut Survey, SessionError> {
        let stage = self.kind();
        match &mut self.stage {
            Stage::Survey(survey) => Ok(survey),
            _ => Err(SessionError::WrongStage { action, stage }),
        }
    }
}
