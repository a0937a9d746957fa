use crate::{
    auth::{backend::CampAuthBackend, memory_store::MemorySessionStore},
    rate_limit::limit_submissions,
    state::CampState,
};
use axum::{
    Router,
    handler::Handler,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use axum_login::{
    AuthManagerLayerBuilder,
    tower_sessions::{Expiry, SessionManagerLayer, cookie::time::Duration},
};
use tower_http::{
    compression::CompressionLayer, limit::RequestBodyLimitLayer, trace::TraceLayer,
};

pub mod admin;
pub mod contact;
pub mod index;
pub mod inscription;
pub mod language;
pub mod login;
pub mod mail_fallback;
pub mod not_found;

use admin::{get_admin, internal_post_admin_status};
use contact::post_contact;
use index::get_index;
use inscription::{get_inscription, internal_get_communes, post_inscription};
use language::post_language;
use login::{get_login, post_login, post_logout};
use mail_fallback::internal_get_mail_fallback;
use not_found::get_not_found;

///forms are small, anything bigger is refused before it reaches a handler
pub const MAX_BODY_BYTES: usize = 64 * 1024;

pub fn app(state: CampState, session_store: MemorySessionStore) -> Router {
    let session_layer = SessionManagerLayer::new(session_store)
        .with_expiry(Expiry::OnInactivity(Duration::days(1)));
    let auth_backend = CampAuthBackend::new(state.admin());
    let auth_layer = AuthManagerLayerBuilder::new(auth_backend, session_layer).build();

    let rate_limited = from_fn_with_state(state.clone(), limit_submissions);

    Router::new()
        .route("/", get(get_index))
        .route(
            "/inscription",
            get(get_inscription).post(post_inscription.layer(rate_limited.clone())),
        )
        .route("/internal/communes", get(internal_get_communes))
        .route("/contact", post(post_contact.layer(rate_limited.clone())))
        .route("/internal/mail_fallback", get(internal_get_mail_fallback))
        .route("/language", post(post_language))
        .route(
            "/login",
            get(get_login).post(post_login.layer(rate_limited)),
        )
        .route("/logout", post(post_logout))
        .route("/admin", get(get_admin))
        .route("/internal/admin/status", post(internal_post_admin_status))
        .fallback(get_not_found)
        .layer(auth_layer)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
