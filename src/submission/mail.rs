use crate::{
    data::{
        applicant::{ApplicantRecord, SchoolLevel},
        contact::ContactInquiry,
    },
    i18n::{Language, t, t_with},
};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything but the RFC 3986 unreserved characters gets escaped, so `&`, `=`, `?` and
/// newlines inside a subject or body can't break out of their query parameter.
const MAILTO_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// A pre-filled email, handed to the user's mail client as a `mailto:` link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailDraft {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    pub fn to_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to.trim(),
            utf8_percent_encode(&self.subject, MAILTO_ESCAPE),
            utf8_percent_encode(&self.body, MAILTO_ESCAPE)
        )
    }

    pub fn for_contact(inquiry: &ContactInquiry, to: &str, language: Language) -> Self {
        let interest = inquiry
            .interest()
            .map_or(inquiry.interest.as_str(), |i| t(language, i.translation_key()));

        let lines = inquiry.summary_lines().map(|(key, value)| {
            if key == "contact.interested.as" {
                (key, interest)
            } else {
                (key, value)
            }
        });

        Self {
            to: to.to_string(),
            subject: t_with(
                language,
                "contact.mail.subject",
                &[("name", &inquiry.name.trim()), ("interest", &interest)],
            ),
            body: body_from(&lines, language),
        }
    }

    pub fn for_registration(record: &ApplicantRecord, to: &str, language: Language) -> Self {
        let level = record
            .school_level
            .parse::<SchoolLevel>()
            .map_or(record.school_level.as_str(), |level| {
                t(language, level.translation_key())
            });

        let lines = record.summary_lines().map(|(key, value)| {
            if key == "inscription.schoolLevel" {
                (key, level)
            } else {
                (key, value)
            }
        });

        Self {
            to: to.to_string(),
            subject: t_with(
                language,
                "inscription.mail.subject",
                &[("name", &record.full_name())],
            ),
            body: body_from(&lines, language),
        }
    }

    ///the budget section's "become a partner" link
    pub fn for_partnership(to: &str, language: Language) -> Self {
        Self {
            to: to.to_string(),
            subject: t(language, "budget.mail.subject").to_string(),
            body: t(language, "budget.mail.body").to_string(),
        }
    }
}

fn body_from(lines: &[(&str, &str)], language: Language) -> String {
    lines
        .iter()
        .map(|(key, value)| {
            let label = t(language, key).trim_end_matches([' ', ':', '\u{a0}']);
            format!("{label}: {}", value.trim())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
