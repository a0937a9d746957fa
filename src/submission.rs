//! Talks to the external registration backend.
//!
//! Every submission is preceded by an advisory health probe, then sent exactly once as JSON.
//! Failures are sorted into the four categories a visitor can act on.

use crate::{
    config::backend::{BackendConfig, MailConfig},
    data::{applicant::ApplicantRecord, contact::ContactInquiry},
    error::{BuildHttpClientSnafu, CampResult},
    i18n::{Language, t, t_with},
    validation::Validated,
};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use snafu::{ResultExt, Snafu};
use std::{sync::Arc, time::Duration};

pub mod mail;

use mail::MailDraft;

pub const HEALTH_PATH: &str = "/api/health";
pub const REGISTER_PATH: &str = "/api/register";
pub const CONTACT_PATH: &str = "/api/contact";

const MAX_RAW_ERROR_CHARS: usize = 300;

#[derive(Debug, Snafu)]
pub enum SubmissionError {
    #[snafu(display("Backend did not answer within {:?}", budget))]
    Timeout {
        source: reqwest::Error,
        budget: Duration,
    },
    #[snafu(display("Unable to reach the backend"))]
    NetworkUnreachable { source: reqwest::Error },
    #[snafu(display("Backend rejected the submission with {}", status))]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },
    #[snafu(display("Unexpected error talking to the backend"))]
    Unknown { source: reqwest::Error },
}

impl SubmissionError {
    pub fn user_message(&self, language: Language) -> String {
        match self {
            Self::Timeout { .. } => t(language, "submission.timeout").to_string(),
            Self::NetworkUnreachable { .. } => t(language, "submission.network").to_string(),
            Self::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Rejected {
                status,
                message: None,
            } => t_with(
                language,
                "submission.generic_status",
                &[("status", &status.as_u16())],
            ),
            Self::Unknown { .. } => t(language, "submission.unknown").to_string(),
        }
    }

    ///only a connectivity failure suggests that email might get through where we could not
    pub const fn offers_mail_fallback(&self) -> bool {
        matches!(self, Self::NetworkUnreachable { .. })
    }
}

fn classify(source: reqwest::Error, budget: Duration) -> SubmissionError {
    if source.is_timeout() {
        SubmissionError::Timeout { source, budget }
    } else if source.is_connect() {
        SubmissionError::NetworkUnreachable { source }
    } else {
        SubmissionError::Unknown { source }
    }
}

/// Pulls a readable message out of an error body: a JSON `error`, then `message`, then the
/// raw text. A JSON body with neither yields nothing so the status code gets reported instead.
fn message_from_body(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    let message = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(fields)) => ["error", "message"]
            .into_iter()
            .filter_map(|name| fields.get(name).and_then(Value::as_str))
            .map(str::trim)
            .find(|message| !message.is_empty())
            .map(ToString::to_string),
        Ok(Value::String(message)) => Some(message),
        Ok(_) => None,
        Err(_) => Some(body.chars().take(MAX_RAW_ERROR_CHARS).collect()),
    };

    message.filter(|m| !m.trim().is_empty())
}

async fn rejection(response: Response) -> SubmissionError {
    let status = response.status();
    let message = match response.text().await {
        Ok(body) => message_from_body(&body),
        Err(e) => {
            warn!(?e, %status, "Unable to read error body from backend");
            None
        }
    };

    SubmissionError::Rejected { status, message }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationReceipt {
    pub applicant_id: Option<String>,
}

impl RegistrationReceipt {
    fn from_body(body: &str) -> Self {
        #[derive(Deserialize)]
        struct Issued {
            #[serde(alias = "studentId", alias = "applicantId")]
            id: Option<Value>,
        }

        let applicant_id = match serde_json::from_str::<Issued>(body) {
            Ok(Issued { id }) => id.and_then(|id| match id {
                Value::String(s) if !s.trim().is_empty() => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            }),
            Err(e) => {
                warn!(?e, "Registration accepted but the response carried no readable id");
                None
            }
        };

        Self { applicant_id }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    Delivered,
    MailDraft(MailDraft),
}

#[derive(Debug, Clone)]
pub struct SubmissionClient {
    http: Client,
    backend: Arc<BackendConfig>,
    mail: Arc<MailConfig>,
}

impl SubmissionClient {
    pub fn new(backend: Arc<BackendConfig>, mail: Arc<MailConfig>) -> CampResult<Self> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context(BuildHttpClientSnafu)?;
        debug!(backend = backend.base_url(), "Submission client ready");

        Ok(Self {
            http,
            backend,
            mail,
        })
    }

    pub fn mail_config(&self) -> &MailConfig {
        &self.mail
    }

    /// Asks the backend whether it is alive. Never fails: the answer is only logged.
    pub async fn probe(&self) -> bool {
        let url = self.backend.endpoint(HEALTH_PATH);
        match self
            .http
            .get(&url)
            .timeout(self.backend.probe_timeout())
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => {
                debug!(%url, "Backend is healthy");
                true
            }
            Ok(response) => {
                warn!(%url, status = %response.status(), "Backend health probe answered with an error");
                false
            }
            Err(e) => {
                warn!(%url, ?e, "Backend health probe failed");
                false
            }
        }
    }

    async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<Response, SubmissionError> {
        self.probe().await;

        let url = self.backend.endpoint(path);
        let budget = self.backend.submit_timeout();
        let response = self
            .http
            .post(&url)
            .timeout(budget)
            .json(body)
            .send()
            .await
            .map_err(|e| classify(e, budget))?;

        if response.status().is_success() {
            Ok(response)
        } else {
            let error = rejection(response).await;
            warn!(%url, ?error, "Backend rejected submission");
            Err(error)
        }
    }

    pub async fn submit_registration(
        &self,
        record: Validated<ApplicantRecord>,
    ) -> Result<RegistrationReceipt, SubmissionError> {
        let response = self.post_json(REGISTER_PATH, &*record).await?;

        let budget = self.backend.submit_timeout();
        let body = response.text().await.map_err(|e| classify(e, budget))?;
        let receipt = RegistrationReceipt::from_body(&body);

        info!(applicant_id = ?receipt.applicant_id, department = %record.department, "Registration submitted");
        Ok(receipt)
    }

    /// Partner inquiries never reach the backend: they come back as a mail draft for the
    /// visitor to send themselves.
    pub async fn submit_contact(
        &self,
        inquiry: Validated<ContactInquiry>,
        language: Language,
    ) -> Result<ContactOutcome, SubmissionError> {
        if inquiry.is_partner() {
            info!("Partner inquiry, handing over to the mail client");
            return Ok(ContactOutcome::MailDraft(MailDraft::for_contact(
                &inquiry,
                &self.mail.contact_address,
                language,
            )));
        }

        self.post_json(CONTACT_PATH, &*inquiry).await?;
        info!(interest = %inquiry.interest, "Contact inquiry submitted");
        Ok(ContactOutcome::Delivered)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{
        data::{
            applicant::tests::valid_applicant,
            contact::{Interest, tests::inquiry},
        },
        validation::Validate,
    };
    use axum::{Json, Router, routing::post};
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };
    use tokio::net::TcpListener;

    pub async fn spawn_backend(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test backend");
        let addr = listener.local_addr().expect("test backend address");
        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("test backend runs");
        });
        format!("http://{addr}")
    }

    ///a base url nobody is listening on
    pub async fn closed_backend() -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind throwaway listener");
        let addr = listener.local_addr().expect("throwaway address");
        drop(listener);
        format!("http://{addr}")
    }

    pub fn client_for(base_url: &str) -> SubmissionClient {
        let backend = BackendConfig::with_base_url(base_url)
            .with_timeouts(Duration::from_millis(200), Duration::from_millis(500));
        SubmissionClient::new(Arc::new(backend), Arc::new(MailConfig::default()))
            .expect("client builds")
    }

    fn validated_applicant() -> Validated<ApplicantRecord> {
        valid_applicant().validate().expect("fixture is valid")
    }

    fn validated_inquiry(interest: Interest) -> Validated<ContactInquiry> {
        inquiry(interest).validate().expect("fixture is valid")
    }

    #[test]
    fn error_body_prefers_error_then_message_then_text() {
        assert_eq!(
            message_from_body(r#"{"error":"Database unavailable","message":"ignored"}"#).as_deref(),
            Some("Database unavailable")
        );
        assert_eq!(
            message_from_body(r#"{"message":"Email already registered"}"#).as_deref(),
            Some("Email already registered")
        );
        assert_eq!(
            message_from_body(r#"{"error":"","message":"fallback"}"#).as_deref(),
            Some("fallback")
        );
        assert_eq!(
            message_from_body("Bad Gateway").as_deref(),
            Some("Bad Gateway")
        );
        assert_eq!(message_from_body(r#"{"detail":"nope"}"#), None);
        assert_eq!(message_from_body("   "), None);
    }

    #[test]
    fn receipt_accepts_any_id_alias() {
        for body in [
            r#"{"id":"STU0001"}"#,
            r#"{"studentId":"STU0001"}"#,
            r#"{"applicantId":"STU0001","success":true}"#,
        ] {
            assert_eq!(
                RegistrationReceipt::from_body(body).applicant_id.as_deref(),
                Some("STU0001"),
                "{body}"
            );
        }
        assert_eq!(
            RegistrationReceipt::from_body(r#"{"id":42}"#).applicant_id.as_deref(),
            Some("42")
        );
        assert_eq!(RegistrationReceipt::from_body("").applicant_id, None);
    }

    #[tokio::test]
    async fn registration_success_returns_server_id_and_sends_normalized_json() {
        let received = Arc::new(Mutex::new(None));
        let sink = received.clone();
        let router = Router::new().route(
            REGISTER_PATH,
            post(move |Json(body): Json<Value>| {
                let sink = sink.clone();
                async move {
                    *sink.lock().expect("sink lock") = Some(body);
                    Json(serde_json::json!({"success": true, "studentId": "STU0007"}))
                }
            }),
        );
        let client = client_for(&spawn_backend(router).await);

        let mut record = valid_applicant();
        record.email = "  Merveille@Example.COM ".into();
        record.phone = "+229 97 12 34 56".into();
        let receipt = client
            .submit_registration(record.validate().expect("valid"))
            .await
            .expect("registration succeeds");

        assert_eq!(receipt.applicant_id.as_deref(), Some("STU0007"));
        let sent = received
            .lock()
            .expect("sink lock")
            .clone()
            .expect("backend saw the request");
        assert_eq!(sent["email"], "merveille@example.com");
        assert_eq!(sent["phone"], "+22997123456");
        assert_eq!(sent["motivationText"], valid_applicant().motivation_text);
    }

    #[tokio::test]
    async fn server_error_message_is_surfaced_verbatim() {
        let router = Router::new().route(
            REGISTER_PATH,
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"error": "Database unavailable"})),
                )
            }),
        );
        let client = client_for(&spawn_backend(router).await);

        let error = client
            .submit_registration(validated_applicant())
            .await
            .expect_err("backend refuses");

        assert!(matches!(
            error,
            SubmissionError::Rejected { status, .. } if status == StatusCode::INTERNAL_SERVER_ERROR
        ));
        assert_eq!(error.user_message(Language::En), "Database unavailable");
        assert_eq!(error.user_message(Language::Fr), "Database unavailable");
        assert!(!error.offers_mail_fallback());
    }

    #[tokio::test]
    async fn plain_text_and_empty_error_bodies() {
        let router = Router::new()
            .route(
                REGISTER_PATH,
                post(|| async { (StatusCode::BAD_REQUEST, "Département inconnu") }),
            )
            .route(CONTACT_PATH, post(|| async { StatusCode::SERVICE_UNAVAILABLE }));
        let client = client_for(&spawn_backend(router).await);

        let text = client
            .submit_registration(validated_applicant())
            .await
            .expect_err("backend refuses");
        assert_eq!(text.user_message(Language::Fr), "Département inconnu");

        let empty = client
            .submit_contact(validated_inquiry(Interest::Parent), Language::Fr)
            .await
            .expect_err("backend unavailable");
        assert_eq!(empty.user_message(Language::Fr), "Erreur serveur (503)");
        assert_eq!(empty.user_message(Language::En), "Server error (503)");
    }

    #[tokio::test]
    async fn slow_backend_is_a_timeout() {
        let router = Router::new().route(
            REGISTER_PATH,
            post(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                StatusCode::OK
            }),
        );
        let client = client_for(&spawn_backend(router).await);

        let error = client
            .submit_registration(validated_applicant())
            .await
            .expect_err("backend is too slow");

        assert!(matches!(error, SubmissionError::Timeout { .. }), "{error:?}");
        assert_eq!(
            error.user_message(Language::En),
            t(Language::En, "submission.timeout")
        );
        assert!(!error.offers_mail_fallback());
    }

    #[tokio::test]
    async fn refused_connection_is_network_unreachable() {
        let client = client_for(&closed_backend().await);

        let error = client
            .submit_contact(validated_inquiry(Interest::Intervenant), Language::En)
            .await
            .expect_err("nobody is listening");

        assert!(
            matches!(error, SubmissionError::NetworkUnreachable { .. }),
            "{error:?}"
        );
        assert!(error.offers_mail_fallback());
        assert_eq!(
            error.user_message(Language::En),
            t(Language::En, "submission.network")
        );
    }

    #[tokio::test]
    async fn partner_inquiry_never_touches_the_network() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counted = hits.clone();
        let router = Router::new().fallback(move || {
            let counted = counted.clone();
            async move {
                counted.fetch_add(1, Ordering::SeqCst);
                StatusCode::OK
            }
        });
        let client = client_for(&spawn_backend(router).await);

        let outcome = client
            .submit_contact(validated_inquiry(Interest::Partenaire), Language::Fr)
            .await
            .expect("partner inquiries always succeed");

        let ContactOutcome::MailDraft(draft) = outcome else {
            panic!("expected a mail draft, got {outcome:?}");
        };
        assert_eq!(draft.to, MailConfig::default().contact_address);
        assert!(draft.body.contains("magloire@example.com"));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn partner_inquiry_succeeds_even_without_a_backend() {
        let client = client_for(&closed_backend().await);
        let outcome = client
            .submit_contact(validated_inquiry(Interest::Partenaire), Language::En)
            .await
            .expect("no network involved");
        assert!(matches!(outcome, ContactOutcome::MailDraft(_)));
    }

    #[tokio::test]
    async fn other_inquiries_are_probed_then_posted() {
        let hits = Arc::new(AtomicUsize::new(0));
        let (health_hits, contact_hits) = (hits.clone(), hits.clone());
        let router = Router::new()
            .route(
                HEALTH_PATH,
                axum::routing::get(move || {
                    let health_hits = health_hits.clone();
                    async move {
                        health_hits.fetch_add(1, Ordering::SeqCst);
                        Json(serde_json::json!({"status": "healthy"}))
                    }
                }),
            )
            .route(
                CONTACT_PATH,
                post(move || {
                    let contact_hits = contact_hits.clone();
                    async move {
                        contact_hits.fetch_add(10, Ordering::SeqCst);
                        Json(serde_json::json!({"success": true}))
                    }
                }),
            );
        let client = client_for(&spawn_backend(router).await);

        assert!(client.probe().await);
        let outcome = client
            .submit_contact(validated_inquiry(Interest::Parent), Language::En)
            .await
            .expect("delivered");

        assert_eq!(outcome, ContactOutcome::Delivered);
        assert_eq!(hits.load(Ordering::SeqCst), 12);
    }

    #[tokio::test]
    async fn failed_probe_does_not_block_submission() {
        let router = Router::new().route(
            REGISTER_PATH,
            post(|| async { Json(serde_json::json!({"id": "STU0002"})) }),
        );
        let client = client_for(&spawn_backend(router).await);

        assert!(!client.probe().await);
        let receipt = client
            .submit_registration(validated_applicant())
            .await
            .expect("submission still goes through");
        assert_eq!(receipt.applicant_id.as_deref(), Some("STU0002"));
    }
}
