use crate::{
    auth::CampSession,
    i18n::{Language, t},
    maud_conveniences::supertitle,
    state::CampState,
};
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use maud::html;

pub async fn get_not_found(
    State(state): State<CampState>,
    session: CampSession,
    language: Language,
) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        state.render(
            language,
            session,
            html! {
                div class="text-center max-w-xl space-y-6" {
                    (supertitle("404"))
                    p class="text-gray-300 text-lg" {(t(language, "404.title"))}
                    a href="/" class="bg-blue-600 hover:bg-blue-800 font-bold py-2 px-4 rounded" {(t(language, "404.button"))}
                }
            },
        ),
    )
}
