use crate::{
    error::{CampResult, NotAMailtoUriSnafu},
    i18n::{Language, t},
    submission::mail::MailDraft,
};
use axum::{extract::Query, response::IntoResponse};
use maud::{Markup, html};
use serde::Deserialize;
use snafu::ensure;
use std::time::Duration;

/// When to open the visitor's mail client with `draft`, and whether to ask first.
#[derive(Debug, Clone, Copy)]
pub enum MailPrompt {
    Immediately,
    AfterDelay(Duration),
}

/// Markup that makes htmx fetch `/internal/mail_fallback`, whose `HX-Redirect` then opens
/// the mail client. A plain link is rendered too, for when the automatic path is blocked.
pub fn mail_fallback_trigger(draft: &MailDraft, prompt: MailPrompt, language: Language) -> Markup {
    let uri = draft.to_uri();
    let vals = serde_json::json!({ "uri": uri }).to_string();

    html! {
        @match prompt {
            MailPrompt::Immediately => {
                div hx-get="/internal/mail_fallback" hx-vals=(vals) hx-trigger="load" hx-swap="none" {}
            }
            MailPrompt::AfterDelay(delay) => {
                div
                    hx-get="/internal/mail_fallback"
                    hx-vals=(vals)
                    hx-trigger={"load delay:" (delay.as_millis()) "ms"}
                    hx-confirm=(t(language, "submission.fallback.confirm"))
                    hx-swap="none"
                    {}
            }
        }
        a href=(uri) class="underline font-semibold block mt-2" {(t(language, "submission.fallback.link"))}
    }
}

fn is_mailto(uri: &str) -> bool {
    uri.starts_with("mailto:") && uri.chars().all(|c| c.is_ascii_graphic())
}

#[derive(Deserialize)]
pub struct MailFallbackQuery {
    uri: String,
}

pub async fn internal_get_mail_fallback(
    Query(MailFallbackQuery { uri }): Query<MailFallbackQuery>,
) -> CampResult<impl IntoResponse> {
    ensure!(is_mailto(&uri), NotAMailtoUriSnafu { uri });
    debug!("Handing mail draft to the client");
    Ok([("HX-Redirect", uri)])
}
