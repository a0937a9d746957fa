use crate::auth::backend::CampAuthBackend;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::html;
use snafu::Snafu;
use std::num::ParseIntError;

pub type CampResult<T> = Result<T, CampError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum CampError {
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse env var `{}` as a number", name))]
    ParseNumber {
        source: ParseIntError,
        name: &'static str,
    },
    #[snafu(display("Error building the backend HTTP client"))]
    BuildHttpClient { source: reqwest::Error },
    #[snafu(display("Error with hashing/password verification"))]
    Bcrypt { source: bcrypt::BcryptError },
    #[snafu(display("Error joining blocking task"))]
    JoinBlocking { source: tokio::task::JoinError },
    #[snafu(display("Error with sessions"))]
    TowerSession {
        source: axum_login::tower_sessions::session::Error,
    },
    #[snafu(display("Error reading seeded applications"))]
    LoadSeed { source: serde_json::Error },
    #[snafu(display("Unable to find application with ID: {}", id))]
    MissingApplication { id: String },
    #[snafu(display("Refusing to redirect to {:?}, only mailto: links are allowed", uri))]
    NotAMailtoUri { uri: String },
    #[snafu(display("You need to be logged in to see this page"))]
    NotLoggedIn,
}

impl From<axum_login::Error<CampAuthBackend>> for CampError {
    fn from(value: axum_login::Error<CampAuthBackend>) -> Self {
        match value {
            axum_login::Error::Session(source) => Self::TowerSession { source },
            axum_login::Error::Backend(backend) => backend,
        }
    }
}

impl CampError {
    pub const fn status_code(&self) -> StatusCode {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input

        match self {
            Self::BadEnvVar { .. } | Self::ParseNumber { .. } => ISE,
            Self::BuildHttpClient { .. } => ISE,
            Self::Bcrypt { .. } | Self::JoinBlocking { .. } => ISE,
            Self::TowerSession { .. } => ISE,
            Self::LoadSeed { .. } => ISE,
            Self::MissingApplication { .. } => NF,
            Self::NotAMailtoUri { .. } => BI,
            Self::NotLoggedIn => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for CampError {
    fn into_response(self) -> Response {
        let basic_error = |desc| {
            html! {
                div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4" role="alert" {
                    strong class="font-bold" {"Error: "}
                    span {(desc)}
                }
            }
        };

        let status_code = self.status_code();
        if status_code.is_server_error() {
            error!(?self, "Error!");
        } else {
            warn!(?self, "Request rejected");
        }

        (
            status_code,
            [("HX-Retarget", "#notifications"), ("HX-Reswap", "innerHTML")],
            Html(basic_error(self.to_string())),
        )
            .into_response()
    }
}
