use crate::{config::required_var, error::CampResult};
use secrecy::SecretString;

/// The single set of credentials the mock admin backend accepts.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub email: String,
    pub password: SecretString,
}

impl AdminConfig {
    pub fn new() -> CampResult<Self> {
        Ok(Self {
            email: required_var("CAMP_ADMIN_EMAIL")?.trim().to_lowercase(),
            password: SecretString::from(required_var("CAMP_ADMIN_PASSWORD")?),
        })
    }
}
