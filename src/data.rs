pub mod applicant;
pub mod application;
pub mod contact;
pub mod regions;

pub const SHORT_TEXT_LIMIT: usize = 100;
pub const LONG_TEXT_LIMIT: usize = 2_000;

/// Trims `text`, drops angle brackets and control characters, and caps it at `max_chars`.
pub fn sanitize_text(text: &str, max_chars: usize) -> String {
    text.chars()
        .filter(|c| !matches!(c, '<' | '>') && !c.is_control() || matches!(c, '\n' | '\t'))
        .collect::<String>()
        .trim()
        .chars()
        .take(max_chars)
        .collect()
}

pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_drops_markup_and_control_characters() {
        assert_eq!(
            sanitize_text("  <b>Bohicon</b>\u{7}  ", SHORT_TEXT_LIMIT),
            "bBohicon/b"
        );
    }

    #[test]
    fn sanitize_keeps_apostrophes_and_newlines() {
        assert_eq!(
            sanitize_text("N'Dali\nParakou", SHORT_TEXT_LIMIT),
            "N'Dali\nParakou"
        );
    }

    #[test]
    fn sanitize_caps_on_characters_not_bytes() {
        let capped = sanitize_text(&"é".repeat(150), SHORT_TEXT_LIMIT);
        assert_eq!(capped.chars().count(), SHORT_TEXT_LIMIT);
    }

    #[test]
    fn strip_whitespace_removes_inner_spaces() {
        assert_eq!(strip_whitespace(" +229 97 12 34 56 "), "+22997123456");
    }
}
