use crate::auth::backend::CampAuthBackend;
use axum_login::AuthSession;

pub mod backend;
pub mod memory_store;

pub type CampSession = AuthSession<CampAuthBackend>;
