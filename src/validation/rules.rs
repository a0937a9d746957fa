use crate::{data::strip_whitespace, validation::Violation};
use email_address::EmailAddress;
use regex::Regex;
use std::{num::IntErrorKind, ops::RangeInclusive, str::FromStr, sync::LazyLock};

pub type RuleResult = Result<(), Violation>;

/// `+229` is optional, then at least eight digits.
pub static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+229)?[0-9]{8,}$").expect("phone pattern is valid"));

pub fn required(value: &str) -> RuleResult {
    if value.trim().is_empty() {
        Err(Violation::Required)
    } else {
        Ok(())
    }
}

///counts characters of the trimmed value
pub fn min_chars(value: &str, min: usize) -> RuleResult {
    required(value)?;
    if value.trim().chars().count() < min {
        Err(Violation::TooShort { min })
    } else {
        Ok(())
    }
}

pub fn int_in_range(value: &str, range: RangeInclusive<i64>) -> RuleResult {
    required(value)?;
    let out_of_range = Violation::OutOfRange {
        min: *range.start(),
        max: *range.end(),
    };
    //more digits than an i64 holds is still a number, just not one in range
    let parsed: i64 = value.trim().parse().map_err(|e: std::num::ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range,
        _ => Violation::NotANumber,
    })?;
    if range.contains(&parsed) {
        Ok(())
    } else {
        Err(out_of_range)
    }
}

///whitespace inside the value is ignored, so `+229 97 12 34 56` is fine
pub fn matches(value: &str, pattern: &Regex) -> RuleResult {
    required(value)?;
    if pattern.is_match(&strip_whitespace(value)) {
        Ok(())
    } else {
        Err(Violation::PatternMismatch)
    }
}

pub fn email(value: &str) -> RuleResult {
    required(value)?;
    let valid = EmailAddress::from_str(value.trim())
        .is_ok_and(|address| address.domain().contains('.'));
    if valid {
        Ok(())
    } else {
        Err(Violation::InvalidEmail)
    }
}

pub fn member_of(value: &str, is_member: impl FnOnce(&str) -> bool) -> RuleResult {
    required(value)?;
    if is_member(value.trim()) {
        Ok(())
    } else {
        Err(Violation::NotAllowed)
    }
}
