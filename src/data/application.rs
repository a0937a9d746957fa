use crate::data::applicant::SchoolLevel;
use bitflags::bitflags;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    #[serde(alias = "confirmed")]
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Accepted, Self::Rejected];

    pub const fn code(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    pub const fn translation_key(self) -> &'static str {
        match self {
            Self::Pending => "status.pending",
            Self::Accepted => "status.accepted",
            Self::Rejected => "status.rejected",
        }
    }
}

impl FromStr for ApplicationStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "pending" => Ok(Self::Pending),
            "accepted" | "confirmed" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            _ => Err(()),
        }
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    pub struct StatusFilter: u8 {
        const PENDING =  0b0000_0001;
        const ACCEPTED = 0b0000_0010;
        const REJECTED = 0b0000_0100;
    }
}

impl From<ApplicationStatus> for StatusFilter {
    fn from(value: ApplicationStatus) -> Self {
        match value {
            ApplicationStatus::Pending => Self::PENDING,
            ApplicationStatus::Accepted => Self::ACCEPTED,
            ApplicationStatus::Rejected => Self::REJECTED,
        }
    }
}

impl StatusFilter {
    ///an empty filter shows everything rather than nothing
    pub fn from_query(bits: Option<u8>) -> Self {
        let filter = bits.map_or_else(Self::all, Self::from_bits_truncate);
        if filter.is_empty() { Self::all() } else { filter }
    }

    pub fn admits(self, status: ApplicationStatus) -> bool {
        self.contains(status.into())
    }
}

/// What the dashboard knows about one registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: u8,
    pub school_level: SchoolLevel,
    pub school: String,
    pub city: String,
    pub department: String,
    pub commune: String,
    pub registered_at: Timestamp,
    #[serde(default)]
    pub status: ApplicationStatus,
}
