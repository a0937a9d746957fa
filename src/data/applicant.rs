use crate::data::{LONG_TEXT_LIMIT, SHORT_TEXT_LIMIT, regions, sanitize_text, strip_whitespace};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchoolLevel {
    Quatrieme,
    Troisieme,
    Seconde,
    Premiere,
    Terminale,
}

impl SchoolLevel {
    pub const ALL: [Self; 5] = [
        Self::Quatrieme,
        Self::Troisieme,
        Self::Seconde,
        Self::Premiere,
        Self::Terminale,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            Self::Quatrieme => "quatrieme",
            Self::Troisieme => "troisieme",
            Self::Seconde => "seconde",
            Self::Premiere => "premiere",
            Self::Terminale => "terminale",
        }
    }

    pub const fn translation_key(self) -> &'static str {
        match self {
            Self::Quatrieme => "level.quatrieme",
            Self::Troisieme => "level.troisieme",
            Self::Seconde => "level.seconde",
            Self::Premiere => "level.premiere",
            Self::Terminale => "level.terminale",
        }
    }
}

impl FromStr for SchoolLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.code() == s)
            .ok_or(())
    }
}

/// A registration as typed into the form: every field is the raw string the applicant entered.
///
/// The record is deliberately loose so that a half-filled form can be re-rendered exactly as
/// it was; the validator decides whether it may leave the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicantRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub school_level: String,
    pub school: String,
    pub city: String,
    pub department: String,
    pub commune: String,
    pub motivation_text: String,
}

impl ApplicantRecord {
    /// Switches department, dropping the commune if it does not belong to the new one.
    pub fn select_department(&mut self, department: impl Into<String>) {
        self.department = department.into();
        if !regions::commune_in_department(&self.department, &self.commune) {
            self.commune.clear();
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            first_name: sanitize_text(&self.first_name, SHORT_TEXT_LIMIT),
            last_name: sanitize_text(&self.last_name, SHORT_TEXT_LIMIT),
            email: self.email.trim().to_lowercase(),
            phone: strip_whitespace(&self.phone),
            age: self.age.trim().to_string(),
            school_level: self.school_level.trim().to_string(),
            school: sanitize_text(&self.school, SHORT_TEXT_LIMIT),
            city: sanitize_text(&self.city, SHORT_TEXT_LIMIT),
            department: self.department.trim().to_string(),
            commune: self.commune.trim().to_string(),
            motivation_text: sanitize_text(&self.motivation_text, LONG_TEXT_LIMIT),
        }
    }

    ///`(label key, value)` pairs, in form order, for summaries such as mail drafts
    pub fn summary_lines(&self) -> [(&'static str, &str); 11] {
        [
            ("inscription.firstName", self.first_name.as_str()),
            ("inscription.lastName", self.last_name.as_str()),
            ("inscription.email", self.email.as_str()),
            ("inscription.phone", self.phone.as_str()),
            ("inscription.age", self.age.as_str()),
            ("inscription.schoolLevel", self.school_level.as_str()),
            ("inscription.school", self.school.as_str()),
            ("inscription.city", self.city.as_str()),
            ("inscription.department", self.department.as_str()),
            ("inscription.commune", self.commune.as_str()),
            ("inscription.motivation", self.motivation_text.as_str()),
        ]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub fn valid_applicant() -> ApplicantRecord {
        ApplicantRecord {
            first_name: "Merveille".into(),
            last_name: "Adeyandjou".into(),
            email: "merveille@example.com".into(),
            phone: "+22997123456".into(),
            age: "16".into(),
            school_level: "premiere".into(),
            school: "CEG1 Savè".into(),
            city: "Savè".into(),
            department: "Collines".into(),
            commune: "Savè".into(),
            motivation_text: "J'aime les mathématiques depuis toujours et je veux progresser en géométrie."
                .into(),
        }
    }

    #[test]
    fn changing_department_clears_foreign_commune() {
        let mut record = valid_applicant();
        record.select_department("Littoral");
        assert_eq!(record.department, "Littoral");
        assert!(record.commune.is_empty());
    }

    #[test]
    fn changing_department_keeps_commune_that_still_fits() {
        let mut record = ApplicantRecord {
            department: "Zou".into(),
            commune: "Bohicon".into(),
            ..ApplicantRecord::default()
        };
        record.select_department("Zou");
        assert_eq!(record.commune, "Bohicon");
    }

    #[test]
    fn normalization_trims_lowercases_and_strips() {
        let record = ApplicantRecord {
            first_name: "  Koffi ".into(),
            email: "  Koffi.Agbenaglo@Example.COM ".into(),
            phone: "+229 97 12 34 56".into(),
            department: " Zou".into(),
            ..valid_applicant()
        }
        .normalized();

        assert_eq!(record.first_name, "Koffi");
        assert_eq!(record.email, "koffi.agbenaglo@example.com");
        assert_eq!(record.phone, "+22997123456");
        assert_eq!(record.department, "Zou");
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = valid_applicant().normalized();
        assert_eq!(once.normalized(), once);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(valid_applicant()).expect("record serializes");
        assert_eq!(json["firstName"], "Merveille");
        assert_eq!(json["schoolLevel"], "premiere");
        assert!(json.get("motivationText").is_some());
    }

    #[test]
    fn school_levels_parse_from_codes() {
        assert_eq!(" seconde ".parse(), Ok(SchoolLevel::Seconde));
        assert_eq!("sixieme".parse::<SchoolLevel>(), Err(()));
    }
}
