//! Bilingual text lookup.
//!
//! The active [`Language`] is a plain value threaded through every view, read once per request
//! from the session. Lookups are pure: the same `(language, key)` always yields the same text,
//! and a key with no translation comes back unchanged.

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_login::tower_sessions::Session;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, convert::Infallible, fmt::Display, str::FromStr, sync::LazyLock};

mod translations;

pub const LANGUAGE_SESSION_KEY: &str = "language";

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl Language {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Fr => Self::En,
            Self::En => Self::Fr,
        }
    }

    const fn column(self) -> usize {
        match self {
            Self::Fr => 0,
            Self::En => 1,
        }
    }
}

impl FromStr for Language {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fr" => Ok(Self::Fr),
            "en" => Ok(Self::En),
            _ => Err(()),
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Language {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Ok(session) = Session::from_request_parts(parts, state).await else {
            return Ok(Self::default());
        };

        match session.get::<Self>(LANGUAGE_SESSION_KEY).await {
            Ok(language) => Ok(language.unwrap_or_default()),
            Err(e) => {
                warn!(?e, "Unable to read language from session, using default");
                Ok(Self::default())
            }
        }
    }
}

fn table() -> &'static HashMap<&'static str, [&'static str; 2]> {
    static TABLE: LazyLock<HashMap<&'static str, [&'static str; 2]>> = LazyLock::new(|| {
        translations::TRANSLATIONS
            .iter()
            .map(|(key, fr, en)| (*key, [*fr, *en]))
            .collect()
    });
    &TABLE
}

/// Looks `key` up for `language`, handing the key back when there is no entry.
pub fn t(language: Language, key: &str) -> &str {
    if let Some(entry) = table().get(key) {
        entry[language.column()]
    } else {
        warn!(key, "Translation missing");
        key
    }
}

/// Like [`t`], then replaces every `{name}` placeholder with its value.
///
/// Substitution is a single pass over the template, so braces inside a value are left alone.
/// Unknown placeholders stay as written.
pub fn t_with(language: Language, key: &str, data: &[(&str, &dyn Display)]) -> String {
    let mut rest = t(language, key);
    let mut text = String::with_capacity(rest.len());

    while let Some(open) = rest.find('{') {
        text.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let substitution = after.find('}').and_then(|close| {
            let name = &after[..close];
            data.iter()
                .find(|(placeholder, _)| *placeholder == name)
                .map(|(_, value)| (close, value))
        });

        match substitution {
            Some((close, value)) => {
                text.push_str(&value.to_string());
                rest = &after[close + 1..];
            }
            None => {
                text.push('{');
                rest = after;
            }
        }
    }

    text.push_str(rest);
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn looks_up_both_languages() {
        assert_eq!(t(Language::Fr, "nav.program"), "Programme");
        assert_eq!(t(Language::En, "nav.program"), "Program");
    }

    #[test]
    fn missing_key_falls_back_to_key() {
        assert_eq!(t(Language::En, "does.not.exist"), "does.not.exist");
        assert_eq!(t(Language::Fr, ""), "");
    }

    #[test]
    fn values_are_never_read_as_placeholders() {
        let text = t_with(
            Language::En,
            "validation.age.range",
            &[("min", &"{max}"), ("max", &18)],
        );
        assert_eq!(text, "Age must be between {max} and 18");
    }

    #[test]
    fn unknown_placeholders_are_kept() {
        assert_eq!(t_with(Language::En, "a {b} c {", &[]), "a {b} c {");
    }

    #[test]
    fn placeholders_are_substituted() {
        let text = t_with(Language::En, "validation.too_short", &[("min", &50)]);
        assert!(text.contains("50"));
        assert!(!text.contains("{min}"));
    }

    #[test]
    fn placeholders_on_missing_key_still_substitute() {
        assert_eq!(
            t_with(Language::Fr, "hello {who}", &[("who", &"world")]),
            "hello world"
        );
    }

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Language::Fr.toggled(), Language::En);
        assert_eq!(Language::Fr.toggled().toggled(), Language::Fr);
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("EN".parse(), Ok(Language::En));
        assert_eq!(" fr ".parse(), Ok(Language::Fr));
        assert_eq!("de".parse::<Language>(), Err(()));
    }

    #[test]
    fn keys_are_unique_and_fully_translated() {
        let mut seen = HashSet::new();
        for (key, fr, en) in translations::TRANSLATIONS {
            assert!(seen.insert(*key), "duplicate translation key {key}");
            assert!(!fr.is_empty() && !en.is_empty(), "empty translation for {key}");
        }
    }
}
