use crate::{
    auth::CampSession,
    data::application::{Application, ApplicationStatus, StatusFilter},
    error::{CampResult, NotLoggedInSnafu},
    i18n::{Language, t, t_with},
    maud_conveniences::{
        NotificationKind, notification, out_of_band_notification, render_table, supertitle,
    },
    state::CampState,
};
use axum::{
    Form,
    body::Body,
    extract::{Query, State},
    http::Response,
    response::{IntoResponse, Redirect},
};
use maud::{Markup, html};
use serde::Deserialize;
use snafu::OptionExt;

pub const APPLICATIONS_ID: &str = "applications";

#[derive(Deserialize)]
pub struct AdminQuery {
    filter: Option<u8>,
}

pub async fn get_admin(
    State(state): State<CampState>,
    session: CampSession,
    language: Language,
    Query(AdminQuery { filter }): Query<AdminQuery>,
) -> CampResult<Response<Body>> {
    let Some(user) = session.user.clone() else {
        return Ok(Redirect::to("/login?to=%2Fadmin").into_response());
    };

    let filter = StatusFilter::from_query(filter);
    let everything = state.admin().list_applications(StatusFilter::all()).await?;
    let shown: Vec<Application> = everything
        .iter()
        .filter(|application| filter.admits(application.status))
        .cloned()
        .collect();

    Ok(state
        .render(
            language,
            session,
            html! {
                div class="w-full max-w-7xl" {
                    (supertitle(t(language, "admin.login.title")))
                    p class="text-gray-400 text-center mb-6" {(t_with(language, "admin.logged_in_as", &[("email", &user.email)]))}
                    (filter_chips(language, filter, &everything))
                    div id=(APPLICATIONS_ID) {
                        (applications_table(language, &shown, filter))
                    }
                }
            },
        )
        .into_response())
}

/// One link per status; following it toggles that status in the filter.
fn filter_chips(language: Language, filter: StatusFilter, everything: &[Application]) -> Markup {
    html! {
        div class="flex flex-row flex-wrap items-center justify-center space-x-2 mb-6" {
            span class="text-gray-300 font-semibold" {(t(language, "admin.filter"))}
            @for status in ApplicationStatus::ALL {
                @let active = filter.admits(status) && filter != StatusFilter::all();
                @let toggled = filter.symmetric_difference(status.into());
                @let count = everything.iter().filter(|a| a.status == status).count();
                a
                    href={"/admin?filter=" (toggled.bits())}
                    class=(if active { "bg-blue-600 text-white rounded-full px-3 py-1" } else { "bg-gray-700 text-gray-300 rounded-full px-3 py-1 hover:bg-gray-600" })
                    {(t(language, status.translation_key())) " (" (count) ")"}
            }
        }
    }
}

fn status_badge(language: Language, status: ApplicationStatus) -> Markup {
    let classes = match status {
        ApplicationStatus::Pending => "bg-yellow-200 text-yellow-900",
        ApplicationStatus::Accepted => "bg-green-200 text-green-900",
        ApplicationStatus::Rejected => "bg-red-200 text-red-900",
    };

    html! {
        span class={"text-xs font-semibold rounded px-2 py-1 " (classes)} {(t(language, status.translation_key()))}
    }
}

fn status_actions(language: Language, application: &Application, filter: StatusFilter) -> Markup {
    let actions: Vec<_> = [
        (ApplicationStatus::Accepted, "admin.accept", "bg-green-600 hover:bg-green-800"),
        (ApplicationStatus::Rejected, "admin.reject", "bg-red-600 hover:bg-red-800"),
        (ApplicationStatus::Pending, "admin.reset", "bg-slate-600 hover:bg-slate-800"),
    ]
    .into_iter()
    .filter(|(status, _, _)| *status != application.status)
    .map(|(status, key, classes)| {
        let vals = serde_json::json!({
            "id": application.id,
            "status": status.code(),
            "filter": filter.bits(),
        });
        (vals.to_string(), key, classes)
    })
    .collect();

    html! {
        div class="flex flex-row space-x-1" {
            @for (vals, key, classes) in actions {
                button
                    type="button"
                    class={"text-white text-xs font-bold py-1 px-2 rounded " (classes)}
                    hx-post="/internal/admin/status"
                    hx-vals=(vals)
                    hx-target={"#" (APPLICATIONS_ID)}
                    hx-swap="innerHTML"
                    {(t(language, key))}
            }
        }
    }
}

pub fn applications_table(
    language: Language,
    applications: &[Application],
    filter: StatusFilter,
) -> Markup {
    if applications.is_empty() {
        return html! {
            p class="text-gray-400 text-center" {(t(language, "admin.empty"))}
        };
    }

    let rows = applications
        .iter()
        .map(|application| {
            [
                html! { span class="font-mono" {(application.id)} },
                html! { (application.first_name) " " (application.last_name) },
                html! {
                    a href={"mailto:" (application.email)} class="underline block" {(application.email)}
                    span class="text-gray-400 text-xs" {(application.phone)}
                },
                html! { (application.age) },
                html! { (t(language, application.school_level.translation_key())) },
                html! { (application.school) },
                html! {
                    (application.city)
                    span class="text-gray-400 text-xs block" {(application.commune) ", " (application.department)}
                },
                html! { (application.registered_at.strftime("%Y-%m-%d %H:%M").to_string()) },
                status_badge(language, application.status),
                status_actions(language, application, filter),
            ]
        })
        .collect();

    render_table(
        html! { (t(language, "admin.title")) " (" (applications.len()) ")" },
        [
            t(language, "admin.col.id"),
            t(language, "admin.col.name"),
            t(language, "admin.col.contact"),
            t(language, "admin.col.age"),
            t(language, "admin.col.level"),
            t(language, "admin.col.school"),
            t(language, "admin.col.location"),
            t(language, "admin.col.registered"),
            t(language, "admin.col.status"),
            t(language, "admin.col.actions"),
        ],
        rows,
    )
}

#[derive(Deserialize)]
pub struct StatusForm {
    id: String,
    status: ApplicationStatus,
    filter: Option<u8>,
}

pub async fn internal_post_admin_status(
    State(state): State<CampState>,
    session: CampSession,
    language: Language,
    Form(StatusForm { id, status, filter }): Form<StatusForm>,
) -> CampResult<Markup> {
    session.user.as_ref().context(NotLoggedInSnafu)?;

    let admin = state.admin();
    let updated = admin.update_status(&id, status).await?;
    let filter = StatusFilter::from_query(filter);
    let applications = admin.list_applications(filter).await?;

    Ok(html! {
        (applications_table(language, &applications, filter))
        (out_of_band_notification(notification(
            NotificationKind::Success,
            t(language, "notification.success"),
            t_with(language, "admin.updated", &[("id", &updated.id)]),
            None,
            language,
        )))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::tests::seed;

    #[test]
    fn table_offers_only_other_statuses() {
        let applications: Vec<Application> = seed()
            .into_iter()
            .filter(|a| a.status == ApplicationStatus::Pending)
            .take(1)
            .collect();
        let html = applications_table(Language::En, &applications, StatusFilter::all()).into_string();

        assert!(html.contains("Accept"));
        assert!(html.contains("Reject"));
        assert!(!html.contains("Back to pending"));
        assert!(html.contains(r#"hx-post="/internal/admin/status""#));
    }

    #[test]
    fn empty_table_says_so() {
        let html = applications_table(Language::Fr, &[], StatusFilter::REJECTED).into_string();
        assert!(html.contains("Aucune candidature"));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn chips_toggle_their_own_status() {
        let html = filter_chips(Language::En, StatusFilter::PENDING, &seed()).into_string();
        let pending_and_accepted = (StatusFilter::PENDING | StatusFilter::ACCEPTED).bits();
        assert!(html.contains(&format!(r#"href="/admin?filter={pending_and_accepted}""#)));
        assert!(html.contains(r#"href="/admin?filter=0""#));
    }
}
