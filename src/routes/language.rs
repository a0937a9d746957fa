use crate::{
    error::{CampResult, TowerSessionSnafu},
    i18n::{LANGUAGE_SESSION_KEY, Language},
};
use axum::{
    Form,
    http::{HeaderMap, Uri, header::REFERER},
    response::Redirect,
};
use axum_login::tower_sessions::Session;
use serde::Deserialize;
use snafu::ResultExt;

#[derive(Deserialize)]
pub struct LanguageForm {
    language: String,
}

/// Only same-site paths are followed back, anything else lands on `/`.
fn return_path(headers: &HeaderMap) -> String {
    headers
        .get(REFERER)
        .and_then(|referer| referer.to_str().ok())
        .and_then(|referer| referer.parse::<Uri>().ok())
        .and_then(|uri| uri.path_and_query().map(ToString::to_string))
        .filter(|path| path.starts_with('/') && !path.starts_with("//"))
        .unwrap_or_else(|| "/".to_string())
}

pub async fn post_language(
    session: Session,
    headers: HeaderMap,
    Form(LanguageForm { language }): Form<LanguageForm>,
) -> CampResult<Redirect> {
    let language: Language = language.parse().unwrap_or_default();
    session
        .insert(LANGUAGE_SESSION_KEY, language)
        .await
        .context(TowerSessionSnafu)?;
    debug!(language = language.code(), "Switched language");

    Ok(Redirect::to(&return_path(&headers)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn with_referer(referer: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(REFERER, HeaderValue::from_str(referer).expect("valid header"));
        headers
    }

    #[test]
    fn returns_to_the_page_it_came_from() {
        assert_eq!(
            return_path(&with_referer("http://localhost:8080/admin?filter=3")),
            "/admin?filter=3"
        );
        assert_eq!(return_path(&with_referer("/inscription")), "/inscription");
    }

    #[test]
    fn falls_back_to_home() {
        assert_eq!(return_path(&HeaderMap::new()), "/");
        assert_eq!(return_path(&with_referer("not a uri at all")), "/");
    }
}
