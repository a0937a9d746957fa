use crate::error::{BadEnvVarSnafu, CampResult, ParseNumberSnafu};
use dotenvy::var;
use snafu::ResultExt;
use std::{sync::Arc, time::Duration};

pub mod auth;
pub mod backend;
pub mod rate_limit;

use auth::AdminConfig;
use backend::{BackendConfig, MailConfig};
use rate_limit::RateLimitConfig;

pub const DEFAULT_SERVER_IP: &str = "127.0.0.1:8080";

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    server_ip: Arc<str>,
    backend_config: Arc<BackendConfig>,
    mail_config: Arc<MailConfig>,
    admin_config: Arc<AdminConfig>,
    rate_limit_config: Arc<RateLimitConfig>,
}

impl RuntimeConfiguration {
    pub fn new() -> CampResult<Self> {
        Ok(Self {
            server_ip: optional_var("CAMP_SERVER_IP")
                .unwrap_or_else(|| DEFAULT_SERVER_IP.to_string())
                .into(),
            backend_config: Arc::new(BackendConfig::new()?),
            mail_config: Arc::new(MailConfig::new()?),
            admin_config: Arc::new(AdminConfig::new()?),
            rate_limit_config: Arc::new(RateLimitConfig::new()?),
        })
    }

    pub fn from_parts(
        backend_config: BackendConfig,
        mail_config: MailConfig,
        admin_config: AdminConfig,
        rate_limit_config: RateLimitConfig,
    ) -> Self {
        Self {
            server_ip: DEFAULT_SERVER_IP.into(),
            backend_config: Arc::new(backend_config),
            mail_config: Arc::new(mail_config),
            admin_config: Arc::new(admin_config),
            rate_limit_config: Arc::new(rate_limit_config),
        }
    }

    pub fn server_ip(&self) -> &str {
        &self.server_ip
    }

    pub fn backend_config(&self) -> Arc<BackendConfig> {
        self.backend_config.clone()
    }

    pub fn mail_config(&self) -> Arc<MailConfig> {
        self.mail_config.clone()
    }

    pub fn admin_config(&self) -> Arc<AdminConfig> {
        self.admin_config.clone()
    }

    pub fn rate_limit_config(&self) -> Arc<RateLimitConfig> {
        self.rate_limit_config.clone()
    }
}

///blank values count as unset
pub fn optional_var(name: &'static str) -> Option<String> {
    var(name).ok().filter(|value| !value.trim().is_empty())
}

pub fn required_var(name: &'static str) -> CampResult<String> {
    var(name).context(BadEnvVarSnafu { name })
}

pub fn millis_var(name: &'static str, default: Duration) -> CampResult<Duration> {
    optional_var(name).map_or(Ok(default), |raw| {
        raw.trim()
            .parse()
            .map(Duration::from_millis)
            .context(ParseNumberSnafu { name })
    })
}

pub fn number_var(name: &'static str, default: u64) -> CampResult<u64> {
    optional_var(name).map_or(Ok(default), |raw| {
        raw.trim().parse().context(ParseNumberSnafu { name })
    })
}
