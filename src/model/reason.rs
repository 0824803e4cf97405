use std::fmt;

use serde::Serialize;

/// Why the experience was negative. Closed set; the wire tag is the lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reason {
    Quality,
    Price,
    Waiting,
    Other,
}

static ALL_REASONS: &[Reason] = &[
    Reason::Quality,
    Reason::Price,
    Reason::Waiting,
    Reason::Other,
];

impl Reason {
    /// Returns the tag sent to the collection endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::Quality => "quality",
            Reason::Price => "price",
            Reason::Waiting => "waiting",
            Reason::Other => "other",
        }
    }

    /// Returns the label shown next to the reason in the survey.
    pub fn label(&self) -> &'static str {
        match self {
            Reason::Quality => "Qualità del servizio",
            Reason::Price => "Prezzo",
            Reason::Waiting => "Tempo di attesa",
            Reason::Other => "Altro",
        }
    }

    /// Returns a single-cell glyph drawn before the label.
    pub fn icon(&self) -> &'static str {
        match self {
            Reason::Quality => "◆",
            Reason::Price => "$",
            Reason::Waiting => "◷",
            Reason::Other => "✎",
        }
    }

    /// Returns all reasons in display order.
    pub fn all() -> &'static [Reason] {
        ALL_REASONS
    }

    /// Returns the reason at the given display position (0-based).
    pub fn from_index(index: usize) -> Option<Reason> {
        ALL_REASONS.get(index).copied()
    }
}

#[mutants::skip]
impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
