//! Complaint status types.

use serde::{Deserialize, Serialize};

/// Complaint lifecycle status.
///
/// Wire format: the display strings used by the dashboards
/// (`"Pending"`, `"Under Review"`, `"In Progress"`, `"Resolved"`).
/// New complaints always start as `Pending`; only staff accounts move a
/// complaint forward, and `Resolved` requires an after-photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ComplaintStatus {
    #[default]
    Pending,
    #[serde(rename = "Under Review")]
    UnderReview,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    /// Parse from the wire string. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(Self::Pending),
            "Under Review" => Some(Self::UnderReview),
            "In Progress" => Some(Self::InProgress),
            "Resolved" => Some(Self::Resolved),
            _ => None,
        }
    }

    /// Wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::UnderReview => "Under Review",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }
}
