use crate::{
    admin::{AdminBackend, AdminUser},
    error::CampError,
};
use async_trait::async_trait;
use axum_login::{AuthnBackend, UserId};
use secrecy::SecretString;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct CampAuthBackend {
    admin: Arc<dyn AdminBackend>,
}

impl CampAuthBackend {
    pub fn new(admin: Arc<dyn AdminBackend>) -> Self {
        Self { admin }
    }
}

pub enum CampAuthCredentials {
    EmailPassword {
        email: String,
        password: SecretString,
    },
}

#[async_trait]
impl AuthnBackend for CampAuthBackend {
    type User = AdminUser;
    type Credentials = CampAuthCredentials;
    type Error = CampError;

    async fn authenticate(
        &self,
        creds: Self::Credentials,
    ) -> Result<Option<Self::User>, Self::Error> {
        match creds {
            CampAuthCredentials::EmailPassword { email, password } => {
                let user = self.admin.authenticate(&email, password).await?;
                if user.is_none() {
                    warn!(%email, "Failed admin login");
                }
                Ok(user)
            }
        }
    }

    async fn get_user(&self, user_id: &UserId<Self>) -> Result<Option<Self::User>, Self::Error> {
        self.admin.get_admin(*user_id).await
    }
}
