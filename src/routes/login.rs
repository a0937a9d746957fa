use crate::{
    auth::{CampSession, backend::CampAuthCredentials},
    error::CampResult,
    i18n::{Language, t},
    maud_conveniences::{errors_list, form_submit_button, simple_form_element, title},
    state::CampState,
};
use axum::{
    Form,
    body::Body,
    extract::{Query, State},
    http::Response,
    response::{IntoResponse, Redirect},
};
use maud::html;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use secrecy::SecretString;
use serde::Deserialize;

pub const ADMIN_HOME: &str = "/admin";

///only same-site paths, so the form can't bounce someone off to another host
fn local_path(next: Option<&str>) -> Option<&str> {
    next.map(str::trim)
        .filter(|next| next.starts_with('/') && !next.starts_with("//") && !next.contains('\\'))
}

#[derive(Deserialize)]
pub struct LoginOptions {
    pub to: Option<String>,
    pub login_failed: Option<bool>,
}

pub async fn get_login(
    State(state): State<CampState>,
    session: CampSession,
    language: Language,
    Query(LoginOptions { to, login_failed }): Query<LoginOptions>,
) -> Response<Body> {
    if session.user.is_some() {
        return Redirect::to(local_path(to.as_deref()).unwrap_or(ADMIN_HOME)).into_response();
    }

    let login_failed = login_failed.unwrap_or(false);
    let to = local_path(to.as_deref()).map(ToString::to_string);

    state.render(language, session, html! {
        div class="bg-gray-800 shadow-md rounded px-8 pt-6 pb-8 mb-4 w-full max-w-sm" {
            (title(t(language, "admin.login.title")))
            @if login_failed {
                // avoid giving extra details for security reasons :)
                (errors_list(None, [t(language, "admin.login.failed")]))
            }

            form method="post" action="/login" {
                @if let Some(to) = to {
                    input type="hidden" name="next" value=(to) {}
                }
                (simple_form_element("email", t(language, "admin.email"), true, Some("email")))
                (simple_form_element("password", t(language, "admin.password"), true, Some("password")))
                (form_submit_button(t(language, "admin.login.submit"), None))
            }
        }
    }).into_response()
}

#[derive(Deserialize)]
pub struct LoginForm {
    email: String,
    password: SecretString,
    next: Option<String>,
}

pub async fn post_login(
    mut session: CampSession,
    Form(LoginForm {
        email,
        password,
        next,
    }): Form<LoginForm>,
) -> CampResult<Redirect> {
    let next = local_path(next.as_deref()).map(ToString::to_string);

    match session
        .authenticate(CampAuthCredentials::EmailPassword { email, password })
        .await?
    {
        Some(user) => {
            session.login(&user).await?;
            info!(email = %user.email, "Admin logged in");
            Ok(Redirect::to(next.as_deref().unwrap_or(ADMIN_HOME)))
        }
        None => {
            let mut redirect = "/login?login_failed=true".to_string();
            if let Some(next) = next {
                redirect += &format!("&to={}", utf8_percent_encode(&next, NON_ALPHANUMERIC));
            }
            Ok(Redirect::to(&redirect))
        }
    }
}

pub async fn post_logout(mut session: CampSession) -> CampResult<impl IntoResponse> {
    session.logout().await?;
    Ok(Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_local_paths_are_followed() {
        assert_eq!(local_path(Some("/admin?filter=1")), Some("/admin?filter=1"));
        assert_eq!(local_path(Some("//evil.example")), None);
        assert_eq!(local_path(Some("https://evil.example")), None);
        assert_eq!(local_path(Some("/\\evil.example")), None);
        assert_eq!(local_path(None), None);
    }
}
