//! Declarative checks run on a submitted form before anything leaves the server.
//!
//! Every field is checked on its own and every failure is kept, so the whole form can be
//! annotated at once. Within one field the first failing rule wins.

use crate::{
    data::{
        applicant::{ApplicantRecord, SchoolLevel},
        contact::{ContactInquiry, Interest},
        regions,
    },
    i18n::{Language, t, t_with},
};
use std::{collections::BTreeMap, ops::Deref};

pub mod rules;

use rules::{PHONE_PATTERN, RuleResult};

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_SCHOOL_CHARS: usize = 3;
pub const MIN_CITY_CHARS: usize = 2;
pub const MIN_MOTIVATION_CHARS: usize = 50;
pub const MIN_AGE: i64 = 14;
pub const MAX_AGE: i64 = 18;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Age,
    SchoolLevel,
    School,
    City,
    Department,
    Commune,
    MotivationText,
    Name,
    Interest,
    Message,
}

impl Field {
    ///the form/JSON name of the field
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Age => "age",
            Self::SchoolLevel => "schoolLevel",
            Self::School => "school",
            Self::City => "city",
            Self::Department => "department",
            Self::Commune => "commune",
            Self::MotivationText => "motivationText",
            Self::Name => "name",
            Self::Interest => "interest",
            Self::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Required,
    TooShort { min: usize },
    OutOfRange { min: i64, max: i64 },
    NotANumber,
    InvalidEmail,
    PatternMismatch,
    NotAllowed,
    NotInDepartment,
}

impl Violation {
    pub fn message(self, field: Field, language: Language) -> String {
        match (self, field) {
            (Self::Required, Field::SchoolLevel) | (Self::NotAllowed, Field::SchoolLevel) => {
                t(language, "validation.school_level").to_string()
            }
            (Self::Required, _) => t(language, "validation.required").to_string(),
            (Self::TooShort { min }, _) => {
                t_with(language, "validation.too_short", &[("min", &min)])
            }
            (Self::OutOfRange { min, max }, _) => t_with(
                language,
                "validation.age.range",
                &[("min", &min), ("max", &max)],
            ),
            (Self::NotANumber, _) => t(language, "validation.age.number").to_string(),
            (Self::InvalidEmail, _) => t(language, "validation.email").to_string(),
            (Self::PatternMismatch, _) => t(language, "validation.phone").to_string(),
            (Self::NotAllowed, Field::Department) => {
                t(language, "validation.department").to_string()
            }
            (Self::NotAllowed, _) => t(language, "validation.required").to_string(),
            (Self::NotInDepartment, _) => t(language, "validation.commune").to_string(),
        }
    }
}

/// Which fields failed, and how.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, Violation>);

impl FieldErrors {
    pub fn check(&mut self, field: Field, result: RuleResult) {
        if let Err(violation) = result {
            self.0.insert(field, violation);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<Violation> {
        self.0.get(&field).copied()
    }

    pub fn message(&self, field: Field, language: Language) -> Option<String> {
        self.get(field).map(|v| v.message(field, language))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, Violation)> + '_ {
        self.0.iter().map(|(field, violation)| (*field, *violation))
    }

    ///`(field name, message)` in form order
    pub fn messages(&self, language: Language) -> Vec<(&'static str, String)> {
        self.iter()
            .map(|(field, violation)| (field.name(), violation.message(field, language)))
            .collect()
    }
}

/// A normalized value that has passed [`Validate::validate`]; only the validator can make one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated<T>(T);

impl<T> Deref for Validated<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub trait Validate: Sized {
    fn field_errors(&self) -> FieldErrors;

    ///the form as it would be submitted
    fn normalized(&self) -> Self;

    ///rules are checked against the normalized form, since that is what gets sent
    fn validate(self) -> Result<Validated<Self>, FieldErrors> {
        let normalized = Validate::normalized(&self);
        let errors = normalized.field_errors();
        if errors.is_empty() {
            Ok(Validated(normalized))
        } else {
            Err(errors)
        }
    }
}

impl Validate for ApplicantRecord {
    fn normalized(&self) -> Self {
        Self::normalized(self)
    }

    fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        errors.check(
            Field::FirstName,
            rules::min_chars(&self.first_name, MIN_NAME_CHARS),
        );
        errors.check(
            Field::LastName,
            rules::min_chars(&self.last_name, MIN_NAME_CHARS),
        );
        errors.check(Field::Email, rules::email(&self.email));
        errors.check(Field::Phone, rules::matches(&self.phone, &PHONE_PATTERN));
        errors.check(
            Field::Age,
            rules::int_in_range(&self.age, MIN_AGE..=MAX_AGE),
        );
        errors.check(
            Field::SchoolLevel,
            rules::member_of(&self.school_level, |level| {
                level.parse::<SchoolLevel>().is_ok()
            }),
        );
        errors.check(
            Field::School,
            rules::min_chars(&self.school, MIN_SCHOOL_CHARS),
        );
        errors.check(Field::City, rules::min_chars(&self.city, MIN_CITY_CHARS));
        errors.check(
            Field::Department,
            rules::member_of(&self.department, regions::is_department),
        );
        errors.check(
            Field::Commune,
            rules::required(&self.commune).and_then(|()| {
                if regions::commune_in_department(&self.department, &self.commune) {
                    Ok(())
                } else {
                    Err(Violation::NotInDepartment)
                }
            }),
        );
        errors.check(
            Field::MotivationText,
            rules::min_chars(&self.motivation_text, MIN_MOTIVATION_CHARS),
        );

        errors
    }
}

impl Validate for ContactInquiry {
    fn normalized(&self) -> Self {
        Self::normalized(self)
    }

    fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        errors.check(Field::Name, rules::required(&self.name));
        errors.check(Field::Email, rules::required(&self.email));
        errors.check(
            Field::Interest,
            rules::member_of(&self.interest, |interest| {
                interest.parse::<Interest>().is_ok()
            }),
        );
        errors.check(Field::Message, rules::required(&self.message));

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{
        applicant::tests::valid_applicant, contact::tests::inquiry, contact::Interest,
    };

    fn motivation_of(len: usize) -> String {
        "m".repeat(len)
    }

    #[test]
    fn valid_applicant_passes() {
        assert!(valid_applicant().validate().is_ok());
    }

    #[test]
    fn empty_applicant_reports_every_field() {
        let errors = ApplicantRecord::default()
            .validate()
            .expect_err("empty form is invalid");
        assert_eq!(errors.len(), 11);
        assert_eq!(errors.get(Field::FirstName), Some(Violation::Required));
        assert_eq!(errors.get(Field::Commune), Some(Violation::Required));
    }

    #[test]
    fn age_range_is_closed() {
        for (age, ok) in [("13", false), ("14", true), ("18", true), ("19", false)] {
            let record = ApplicantRecord {
                age: age.into(),
                ..valid_applicant()
            };
            let errors = record.field_errors();
            assert_eq!(errors.get(Field::Age).is_none(), ok, "age {age}");
            if !ok {
                assert_eq!(
                    errors.get(Field::Age),
                    Some(Violation::OutOfRange { min: 14, max: 18 })
                );
            }
        }
    }

    #[test]
    fn non_numeric_age_fails_gracefully() {
        let record = ApplicantRecord {
            age: "quinze".into(),
            ..valid_applicant()
        };
        assert_eq!(
            record.field_errors().get(Field::Age),
            Some(Violation::NotANumber)
        );
    }

    #[test]
    fn twenty_digit_age_is_out_of_range() {
        let record = ApplicantRecord {
            age: "18446744073709551616".into(),
            ..valid_applicant()
        };
        assert_eq!(
            record.field_errors().get(Field::Age),
            Some(Violation::OutOfRange { min: 14, max: 18 })
        );
    }

    #[test]
    fn motivation_needs_fifty_characters() {
        let short = ApplicantRecord {
            motivation_text: motivation_of(49),
            ..valid_applicant()
        };
        assert_eq!(
            short.field_errors().get(Field::MotivationText),
            Some(Violation::TooShort { min: 50 })
        );

        let exact = ApplicantRecord {
            motivation_text: motivation_of(50),
            ..valid_applicant()
        };
        assert!(exact.validate().is_ok());
    }

    #[test]
    fn phone_examples() {
        let with_prefix = ApplicantRecord {
            phone: "+22997123456".into(),
            ..valid_applicant()
        };
        assert!(with_prefix.field_errors().get(Field::Phone).is_none());

        let without_prefix = ApplicantRecord {
            phone: "97123456".into(),
            ..valid_applicant()
        };
        assert!(without_prefix.field_errors().get(Field::Phone).is_none());

        let too_short = ApplicantRecord {
            phone: "1234567".into(),
            ..valid_applicant()
        };
        assert_eq!(
            too_short.field_errors().get(Field::Phone),
            Some(Violation::PatternMismatch)
        );
    }

    #[test]
    fn littoral_only_accepts_cotonou() {
        let cotonou = ApplicantRecord {
            department: "Littoral".into(),
            commune: "Cotonou".into(),
            ..valid_applicant()
        };
        assert!(cotonou.validate().is_ok());

        let elsewhere = ApplicantRecord {
            department: "Littoral".into(),
            commune: "Ouidah".into(),
            ..valid_applicant()
        };
        assert_eq!(
            elsewhere.field_errors().get(Field::Commune),
            Some(Violation::NotInDepartment)
        );
    }

    #[test]
    fn cotonou_outside_littoral_fails() {
        let record = ApplicantRecord {
            department: "Atlantique".into(),
            commune: "Cotonou".into(),
            ..valid_applicant()
        };
        assert_eq!(
            record.field_errors().get(Field::Commune),
            Some(Violation::NotInDepartment)
        );
    }

    #[test]
    fn unknown_department_and_level_are_rejected() {
        let record = ApplicantRecord {
            department: "Lagos".into(),
            school_level: "licence".into(),
            ..valid_applicant()
        };
        let errors = record.field_errors();
        assert_eq!(errors.get(Field::Department), Some(Violation::NotAllowed));
        assert_eq!(errors.get(Field::SchoolLevel), Some(Violation::NotAllowed));
        assert_eq!(errors.get(Field::Commune), Some(Violation::NotInDepartment));
    }

    #[test]
    fn independent_fields_are_all_reported() {
        let record = ApplicantRecord {
            first_name: "A".into(),
            email: "not-an-email".into(),
            age: "12".into(),
            ..valid_applicant()
        };
        let messages = record.field_errors().messages(Language::En);
        assert_eq!(
            messages.iter().map(|(name, _)| *name).collect::<Vec<_>>(),
            vec!["firstName", "email", "age"]
        );
        assert_eq!(messages[2].1, "Age must be between 14 and 18");
    }

    #[test]
    fn markup_only_input_is_judged_after_sanitising() {
        let record = ApplicantRecord {
            first_name: "<>".into(),
            motivation_text: format!("{}{}", "<".repeat(10), motivation_of(45)),
            ..valid_applicant()
        };
        let errors = record.validate().expect_err("sanitised form is too short");
        assert_eq!(errors.get(Field::FirstName), Some(Violation::Required));
        assert_eq!(
            errors.get(Field::MotivationText),
            Some(Violation::TooShort { min: 50 })
        );

        let contact = ContactInquiry {
            name: "\u{7}<>".into(),
            message: "<\u{1b}>".into(),
            ..inquiry(Interest::Parent)
        };
        let errors = contact.validate().expect_err("nothing left after sanitising");
        assert_eq!(errors.get(Field::Name), Some(Violation::Required));
        assert_eq!(errors.get(Field::Message), Some(Violation::Required));
    }

    #[test]
    fn validated_value_is_what_gets_sent() {
        let record = ApplicantRecord {
            first_name: "  <b>Zoé</b>\u{7} ".into(),
            email: " Merveille@Example.COM ".into(),
            ..valid_applicant()
        };
        let valid = record.validate().expect("still valid once sanitised");
        assert_eq!(valid.first_name, "bZoé/b");
        assert_eq!(valid.email, "merveille@example.com");
        assert!(valid.normalized().field_errors().is_empty());
        assert_eq!(valid.normalized(), *valid);
    }

    #[test]
    fn contact_requires_only_non_empty_fields() {
        assert!(inquiry(Interest::Parent).validate().is_ok());

        let sparse = ContactInquiry {
            phone: String::new(),
            email: "whatever".into(),
            ..inquiry(Interest::Parent)
        };
        assert!(sparse.validate().is_ok());

        let errors = ContactInquiry {
            name: " ".into(),
            message: String::new(),
            ..inquiry(Interest::Participant)
        }
        .field_errors();
        assert_eq!(errors.get(Field::Name), Some(Violation::Required));
        assert_eq!(errors.get(Field::Message), Some(Violation::Required));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn contact_interest_must_be_known() {
        let errors = ContactInquiry {
            interest: "sponsor".into(),
            ..inquiry(Interest::Parent)
        }
        .field_errors();
        assert_eq!(errors.get(Field::Interest), Some(Violation::NotAllowed));
    }
}
