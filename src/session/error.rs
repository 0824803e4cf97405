use super::StageKind;

/// A user action the current stage does not allow.
///
/// These correspond to controls that are not on screen or are disabled; the
/// session is left unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The action belongs to a different stage.
    #[error("{action} is not available in the {stage} stage")]
    WrongStage {
        /// Name of the rejected action.
        action: &'static str,
        /// The stage the session was in.
        stage: StageKind,
    },

    /// Submit was requested before a reason was chosen.
    #[error("no reason selected")]
    NoReason,

    /// Submit was requested while a submission is outstanding.
    #[error("a submission is already in flight")]
    AlreadySubmitting,

    /// A submission outcome arrived with no submission outstanding.
    #[error("no submission in flight")]
    NotSubmitting,
}
