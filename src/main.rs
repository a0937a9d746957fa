#![warn(clippy::pedantic, clippy::all, clippy::nursery)]
#![allow(clippy::single_match_else)]

use crate::{
    auth::memory_store::MemorySessionStore, config::RuntimeConfiguration, routes::app,
    state::CampState,
};
use axum_login::tower_sessions::ExpiredDeletion;
use std::{net::SocketAddr, time::Duration};
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[macro_use]
extern crate tracing;

mod admin;
mod auth;
mod config;
mod data;
mod error;
mod i18n;
mod maud_conveniences;
mod rate_limit;
mod routes;
mod state;
mod submission;
mod validation;

const EXPIRED_SESSION_SWEEP: Duration = Duration::from_secs(60);

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    warn!("signal received, starting graceful shutdown");
}

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("no .env file loaded ({e}), using the process environment");
    }

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish(),
    )
    .expect("unable to set tracing subscriber");

    info!("`tracing` online");

    let config = RuntimeConfiguration::new().expect("unable to create config");
    let server_ip = config.server_ip().to_string();
    let state = CampState::new(config).await.expect("unable to create state");

    let session_store = MemorySessionStore::default();
    tokio::spawn({
        let session_store = session_store.clone();
        async move {
            let mut interval = tokio::time::interval(EXPIRED_SESSION_SWEEP);
            loop {
                interval.tick().await;
                if let Err(e) = session_store.delete_expired().await {
                    error!(?e, "Error deleting expired sessions");
                }
            }
        }
    });

    let app = app(state, session_store);

    let listener = TcpListener::bind(&server_ip)
        .await
        .expect("unable to listen on server ip");

    info!(?server_ip, "Listening");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .expect("unable to serve app");
}
