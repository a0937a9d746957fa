//! The admin dashboard's data source.
//!
//! Only an in-memory mock exists: one configured admin account and a seeded list of
//! applications. Status changes live as long as the process does.

use crate::{
    config::auth::AdminConfig,
    data::application::{Application, ApplicationStatus, StatusFilter},
    error::{BcryptSnafu, CampResult, JoinBlockingSnafu, LoadSeedSnafu, MissingApplicationSnafu},
};
use async_trait::async_trait;
use axum_login::AuthUser;
use secrecy::{ExposeSecret, SecretString};
use snafu::{OptionExt, ResultExt};
use std::{fmt::Debug, sync::Arc};
use tokio::sync::RwLock;
use uuid::Uuid;

const SEED_APPLICATIONS: &str = include_str!("admin/seed_applications.json");

#[derive(Debug, Clone)]
pub struct AdminUser {
    pub id: Uuid,
    pub email: String,
    bcrypt_hashed_password: Arc<SecretString>,
}

impl AuthUser for AdminUser {
    type Id = Uuid;

    fn id(&self) -> Self::Id {
        self.id
    }

    //changing the password invalidates every session
    fn session_auth_hash(&self) -> &[u8] {
        self.bcrypt_hashed_password.expose_secret().as_bytes()
    }
}

#[async_trait]
pub trait AdminBackend: Debug + Send + Sync {
    async fn authenticate(&self, email: &str, password: SecretString)
    -> CampResult<Option<AdminUser>>;

    async fn get_admin(&self, id: Uuid) -> CampResult<Option<AdminUser>>;

    ///newest first
    async fn list_applications(&self, filter: StatusFilter) -> CampResult<Vec<Application>>;

    async fn update_status(&self, id: &str, status: ApplicationStatus)
    -> CampResult<Application>;
}

#[derive(Debug)]
pub struct InMemoryAdminBackend {
    admin: AdminUser,
    applications: RwLock<Vec<Application>>,
}

impl InMemoryAdminBackend {
    pub async fn new(config: &AdminConfig) -> CampResult<Self> {
        let applications = serde_json::from_str(SEED_APPLICATIONS).context(LoadSeedSnafu)?;
        Self::with_applications(config, applications, bcrypt::DEFAULT_COST).await
    }

    pub async fn with_applications(
        config: &AdminConfig,
        applications: Vec<Application>,
        cost: u32,
    ) -> CampResult<Self> {
        let password = config.password.clone();
        let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password.expose_secret(), cost))
            .await
            .context(JoinBlockingSnafu)?
            .context(BcryptSnafu)?;

        info!(applications = applications.len(), "Admin backend ready");

        Ok(Self {
            admin: AdminUser {
                id: Uuid::new_v4(),
                email: config.email.clone(),
                bcrypt_hashed_password: Arc::new(SecretString::from(hashed)),
            },
            applications: RwLock::new(applications),
        })
    }
}

#[async_trait]
impl AdminBackend for InMemoryAdminBackend {
    async fn authenticate(
        &self,
        email: &str,
        password: SecretString,
    ) -> CampResult<Option<AdminUser>> {
        if email.trim().to_lowercase() != self.admin.email {
            return Ok(None);
        }

        let hash = self.admin.bcrypt_hashed_password.clone();
        let password_verification_result = tokio::task::spawn_blocking(move || {
            bcrypt::verify(password.expose_secret(), hash.expose_secret())
        })
        .await
        .context(JoinBlockingSnafu)?
        .context(BcryptSnafu)?;

        Ok(password_verification_result.then(|| self.admin.clone()))
    }

    async fn get_admin(&self, id: Uuid) -> CampResult<Option<AdminUser>> {
        Ok((id == self.admin.id).then(|| self.admin.clone()))
    }

    async fn list_applications(&self, filter: StatusFilter) -> CampResult<Vec<Application>> {
        let mut applications: Vec<Application> = self
            .applications
            .read()
            .await
            .iter()
            .filter(|application| filter.admits(application.status))
            .cloned()
            .collect();
        applications.sort_by(|a, b| b.registered_at.cmp(&a.registered_at));
        Ok(applications)
    }

    async fn update_status(&self, id: &str, status: ApplicationStatus) -> CampResult<Application> {
        let mut applications = self.applications.write().await;
        let application = applications
            .iter_mut()
            .find(|application| application.id == id)
            .context(MissingApplicationSnafu { id })?;

        info!(%id, from = application.status.code(), to = status.code(), "Updating application status");
        application.status = status;
        Ok(application.clone())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::CampError;

    pub const ADMIN_EMAIL: &str = "admin@mathssummercamp.org";
    pub const ADMIN_PASSWORD: &str = "correct horse battery staple";

    pub fn admin_config() -> AdminConfig {
        AdminConfig {
            email: ADMIN_EMAIL.into(),
            password: SecretString::from(ADMIN_PASSWORD),
        }
    }

    pub fn seed() -> Vec<Application> {
        serde_json::from_str(SEED_APPLICATIONS).expect("seed parses")
    }

    ///the minimum bcrypt cost keeps tests quick
    pub async fn backend() -> InMemoryAdminBackend {
        InMemoryAdminBackend::with_applications(&admin_config(), seed(), 4)
            .await
            .expect("backend builds")
    }

    #[test]
    fn seed_covers_every_status() {
        let seed = seed();
        for status in ApplicationStatus::ALL {
            assert!(seed.iter().any(|a| a.status == status), "{status:?}");
        }
    }

    #[tokio::test]
    async fn authenticates_only_configured_credentials() {
        let backend = backend().await;

        let admin = backend
            .authenticate(" Admin@MathsSummerCamp.org ", SecretString::from(ADMIN_PASSWORD))
            .await
            .expect("no backend error")
            .expect("credentials match");
        assert_eq!(admin.email, ADMIN_EMAIL);

        assert!(backend
            .authenticate(ADMIN_EMAIL, SecretString::from("wrong"))
            .await
            .expect("no backend error")
            .is_none());
        assert!(backend
            .authenticate("someone@else.org", SecretString::from(ADMIN_PASSWORD))
            .await
            .expect("no backend error")
            .is_none());
    }

    #[tokio::test]
    async fn admin_is_found_by_id_only() {
        let backend = backend().await;
        let id = backend.admin.id;
        assert!(backend.get_admin(id).await.expect("lookup").is_some());
        assert!(backend.get_admin(Uuid::new_v4()).await.expect("lookup").is_none());
    }

    #[tokio::test]
    async fn lists_newest_first_and_filters() {
        let backend = backend().await;

        let all = backend
            .list_applications(StatusFilter::all())
            .await
            .expect("list");
        assert_eq!(all.len(), seed().len());
        assert!(all.windows(2).all(|w| w[0].registered_at >= w[1].registered_at));

        let pending = backend
            .list_applications(StatusFilter::PENDING)
            .await
            .expect("list");
        assert!(!pending.is_empty());
        assert!(pending.iter().all(|a| a.status == ApplicationStatus::Pending));
    }

    #[tokio::test]
    async fn status_updates_are_visible_to_later_reads() {
        let backend = backend().await;

        let updated = backend
            .update_status("STU0001", ApplicationStatus::Accepted)
            .await
            .expect("update");
        assert_eq!(updated.status, ApplicationStatus::Accepted);

        let accepted = backend
            .list_applications(StatusFilter::ACCEPTED)
            .await
            .expect("list");
        assert!(accepted.iter().any(|a| a.id == "STU0001"));
    }

    #[tokio::test]
    async fn unknown_application_is_an_error() {
        let backend = backend().await;
        let error = backend
            .update_status("STU9999", ApplicationStatus::Rejected)
            .await
            .expect_err("no such application");
        assert!(matches!(error, CampError::MissingApplication { .. }));
    }
}
