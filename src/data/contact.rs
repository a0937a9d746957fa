use crate::data::{LONG_TEXT_LIMIT, SHORT_TEXT_LIMIT, sanitize_text, strip_whitespace};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    #[default]
    Participant,
    Parent,
    Intervenant,
    Partenaire,
}

impl Interest {
    pub const ALL: [Self; 4] = [
        Self::Participant,
        Self::Parent,
        Self::Intervenant,
        Self::Partenaire,
    ];

    /// Inquiries with this interest skip the backend and go out as a mail draft.
    pub const PARTNER: Self = Self::Partenaire;

    pub const fn code(self) -> &'static str {
        match self {
            Self::Participant => "participant",
            Self::Parent => "parent",
            Self::Intervenant => "intervenant",
            Self::Partenaire => "partenaire",
        }
    }

    pub const fn translation_key(self) -> &'static str {
        match self {
            Self::Participant => "contact.participant",
            Self::Parent => "contact.parent",
            Self::Intervenant => "contact.speaker",
            Self::Partenaire => "contact.partner",
        }
    }
}

impl FromStr for Interest {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL.into_iter().find(|i| i.code() == s).ok_or(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub interest: String,
    pub message: String,
}

impl Default for ContactInquiry {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            interest: Interest::default().code().to_string(),
            message: String::new(),
        }
    }
}

impl ContactInquiry {
    pub fn interest(&self) -> Option<Interest> {
        self.interest.parse().ok()
    }

    pub fn is_partner(&self) -> bool {
        self.interest() == Some(Interest::PARTNER)
    }

    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            name: sanitize_text(&self.name, SHORT_TEXT_LIMIT),
            email: self.email.trim().to_lowercase(),
            phone: strip_whitespace(&self.phone),
            interest: self.interest.trim().to_string(),
            message: sanitize_text(&self.message, LONG_TEXT_LIMIT),
        }
    }

    pub fn summary_lines(&self) -> [(&'static str, &str); 5] {
        [
            ("contact.fullname", self.name.as_str()),
            ("contact.email", self.email.as_str()),
            ("contact.phone", self.phone.as_str()),
            ("contact.interested.as", self.interest.as_str()),
            ("contact.message", self.message.as_str()),
        ]
    }
}
