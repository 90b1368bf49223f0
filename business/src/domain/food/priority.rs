use serde::Serialize;

use crate::domain::shared::dates::or_placeholder;

const HIGH_PRIORITY_SCORE: f64 = 0.9;
const MEDIUM_PRIORITY_SCORE: f64 = 0.6;

/// Three-tier label for the server-computed SCP priority score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PriorityLabel {
    High,
    Medium,
    Low,
}

impl PriorityLabel {
    /// Maps a score in `[0, 1]` to its label.
    ///
    /// Missing and non-finite scores have no label; a priority is absent
    /// until the backend has computed one.
    pub fn from_score(score: Option<f64>) -> Option<Self> {
        let score = score.filter(|s| s.is_finite())?;
        if score >= HIGH_PRIORITY_SCORE {
            Some(PriorityLabel::High)
        } else if score >= MEDIUM_PRIORITY_SCORE {
            Some(PriorityLabel::Medium)
        } else {
            Some(PriorityLabel::Low)
        }
    }
}

impl std::fmt::Display for PriorityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriorityLabel::High => write!(f, "High"),
            PriorityLabel::Medium => write!(f, "Medium"),
            PriorityLabel::Low => write!(f, "Low"),
        }
    }
}

/// Label text for a score, or the placeholder.
pub fn priority_label(score: Option<f64>) -> String {
    or_placeholder(PriorityLabel::from_score(score))
}
