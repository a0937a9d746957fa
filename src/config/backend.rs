use crate::{
    config::{millis_var, optional_var},
    error::CampResult,
};
use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(30);

pub const DEFAULT_CONTACT_EMAIL: &str = "contact@mathssummercamp.org";
pub const DEFAULT_FALLBACK_DELAY: Duration = Duration::from_millis(2_500);

/// Where the registration backend lives and how long we are willing to wait for it.
///
/// The probe budget is meant to be much shorter than the submission budget: the probe is
/// advisory and must never hold up a real submission for long.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    base_url: String,
    probe_timeout: Duration,
    submit_timeout: Duration,
}

impl BackendConfig {
    pub fn new() -> CampResult<Self> {
        Ok(Self {
            base_url: optional_var("CAMP_BACKEND_URL")
                .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
            probe_timeout: millis_var("CAMP_PROBE_TIMEOUT_MS", DEFAULT_PROBE_TIMEOUT)?,
            submit_timeout: millis_var("CAMP_SUBMIT_TIMEOUT_MS", DEFAULT_SUBMIT_TIMEOUT)?,
        })
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            submit_timeout: DEFAULT_SUBMIT_TIMEOUT,
        }
    }

    #[must_use]
    pub const fn with_timeouts(mut self, probe_timeout: Duration, submit_timeout: Duration) -> Self {
        self.probe_timeout = probe_timeout;
        self.submit_timeout = submit_timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub const fn probe_timeout(&self) -> Duration {
        self.probe_timeout
    }

    pub const fn submit_timeout(&self) -> Duration {
        self.submit_timeout
    }
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub contact_address: String,
    pub fallback_delay: Duration,
}

impl MailConfig {
    pub fn new() -> CampResult<Self> {
        Ok(Self {
            contact_address: optional_var("CAMP_CONTACT_EMAIL")
                .unwrap_or_else(|| DEFAULT_CONTACT_EMAIL.to_string()),
            fallback_delay: millis_var("CAMP_FALLBACK_DELAY_MS", DEFAULT_FALLBACK_DELAY)?,
        })
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            contact_address: DEFAULT_CONTACT_EMAIL.to_string(),
            fallback_delay: DEFAULT_FALLBACK_DELAY,
        }
    }
}
