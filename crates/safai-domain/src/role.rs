//! Account role types.

use serde::{Deserialize, Serialize};

/// Account role.
///
/// Wire format: snake_case string (`"user"`, `"municipal"`, `"ngo"`).
/// `Municipal` and `Ngo` accounts triage complaints for their area code;
/// `User` accounts file and track them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    User,
    Municipal,
    Ngo,
}

impl Role {
    /// Parse from the wire string. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Self::User),
            "municipal" => Some(Self::Municipal),
            "ngo" => Some(Self::Ngo),
            _ => None,
        }
    }

    /// Wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Municipal => "municipal",
            Self::Ngo => "ngo",
        }
    }

    /// Staff roles (municipal/NGO) work the area dashboard; they may not
    /// file or track complaints as citizens.
    pub fn is_staff(self) -> bool {
        matches!(self, Self::Municipal | Self::Ngo)
    }
}
