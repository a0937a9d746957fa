use crate::{
    auth::CampSession,
    data::{
        applicant::{ApplicantRecord, SchoolLevel},
        regions,
    },
    i18n::{Language, t, t_with},
    maud_conveniences::{
        NotificationKind, errors_list, form_element, form_submit_button, notification, out_of_band_notification,
        select_element, supertitle, textarea_element,
    },
    routes::mail_fallback::{MailPrompt, mail_fallback_trigger},
    state::CampState,
    submission::mail::MailDraft,
    validation::{Field, FieldErrors, Validate},
};
use axum::{
    Form,
    extract::{Query, State},
};
use maud::{Markup, html};
use serde::Deserialize;

pub async fn get_inscription(
    State(state): State<CampState>,
    session: CampSession,
    language: Language,
) -> Markup {
    state.render(
        language,
        session,
        html! {
            div class="bg-gray-800 p-8 rounded-lg shadow-xl w-full max-w-3xl" {
                (supertitle(t(language, "inscription.title")))
                p class="text-gray-300 mb-6 text-center" {(t(language, "inscription.description"))}
                (registration_form(language, &ApplicantRecord::default(), &FieldErrors::default()))
            }
        },
    )
}

pub fn registration_form(language: Language, record: &ApplicantRecord, errors: &FieldErrors) -> Markup {
    let error = |field: Field| errors.message(field, language);
    let input = |field: Field, input_type: Option<&str>, value: &str| {
        form_element(
            field.name(),
            t(language, &format!("inscription.{}", field.name())),
            input_type,
            value,
            error(field).as_deref(),
        )
    };

    let levels: Vec<(&str, &str)> = SchoolLevel::ALL
        .into_iter()
        .map(|level| (level.code(), t(language, level.translation_key())))
        .collect();
    let departments = regions::departments().map(|department| (department, department));

    html! {
        form id="registration-form" class="w-full" hx-post="/inscription" hx-target="this" hx-swap="outerHTML" hx-disabled-elt="find button[type='submit']" novalidate {
            @if !errors.is_empty() {
                (errors_list(Some(t(language, "validation.summary")), errors.messages(language).iter().map(|(_, message)| message.as_str())))
            }
            div class="grid grid-cols-1 md:grid-cols-2 gap-x-4" {
                (input(Field::FirstName, None, &record.first_name))
                (input(Field::LastName, None, &record.last_name))
                (input(Field::Email, Some("email"), &record.email))
                (input(Field::Phone, Some("tel"), &record.phone))
                (input(Field::Age, Some("number"), &record.age))
                div class="mb-4" {
                    (select_element(
                        Field::SchoolLevel.name(),
                        t(language, "inscription.schoolLevel"),
                        t(language, "inscription.schoolLevel.placeholder"),
                        levels,
                        record.school_level.trim(),
                        error(Field::SchoolLevel).as_deref(),
                    ))
                }
                (input(Field::School, None, &record.school))
                (input(Field::City, None, &record.city))
                div class="mb-4" {
                    div hx-get="/internal/communes" hx-trigger="change" hx-target="#commune-field" hx-include="[name='department'],[name='commune']" {
                        (select_element(
                            Field::Department.name(),
                            t(language, "inscription.department"),
                            t(language, "inscription.department.placeholder"),
                            departments,
                            record.department.trim(),
                            error(Field::Department).as_deref(),
                        ))
                    }
                }
                div id="commune-field" class="mb-4" {
                    (commune_field(language, &record.department, &record.commune, error(Field::Commune).as_deref()))
                }
            }
            (textarea_element(
                Field::MotivationText.name(),
                t(language, "inscription.motivation"),
                &record.motivation_text,
                Some(t(language, "inscription.motivation.hint")),
                error(Field::MotivationText).as_deref(),
            ))
            (form_submit_button(t(language, "inscription.submit"), Some(t(language, "inscription.sending"))))
        }
    }
}

/// The commune picker for `department`. A `commune` that isn't in that department is dropped.
pub fn commune_field(language: Language, department: &str, commune: &str, error: Option<&str>) -> Markup {
    let communes = regions::communes_of(department)
        .into_iter()
        .flatten()
        .map(|commune| (*commune, *commune));
    let selected = if regions::commune_in_department(department, commune) {
        commune.trim()
    } else {
        ""
    };

    select_element(
        Field::Commune.name(),
        t(language, "inscription.commune"),
        t(language, "inscription.commune.placeholder"),
        communes,
        selected,
        error,
    )
}

#[derive(Deserialize)]
pub struct CommunesQuery {
    #[serde(default)]
    department: String,
    #[serde(default)]
    commune: String,
}

pub async fn internal_get_communes(
    language: Language,
    Query(CommunesQuery { department, commune }): Query<CommunesQuery>,
) -> Markup {
    let mut record = ApplicantRecord {
        commune,
        ..ApplicantRecord::default()
    };
    record.select_department(department);
    commune_field(language, &record.department, &record.commune, None)
}

pub async fn post_inscription(
    State(state): State<CampState>,
    language: Language,
    Form(record): Form<ApplicantRecord>,
) -> Markup {
    let valid = match record.clone().validate() {
        Ok(valid) => valid,
        Err(errors) => {
            debug!(failed = errors.len(), "Registration failed validation");
            return html! {
                (registration_form(language, &record, &errors))
                (out_of_band_notification(notification(
                    NotificationKind::Error,
                    t(language, "submission.error.title"),
                    t(language, "validation.summary"),
                    None,
                    language,
                )))
            };
        }
    };

    match state.client().submit_registration(valid).await {
        Ok(receipt) => {
            let message = receipt.applicant_id.map_or_else(
                || t(language, "inscription.success.no_id").to_string(),
                |id| t_with(language, "inscription.success.description", &[("id", &id)]),
            );

            html! {
                (registration_form(language, &ApplicantRecord::default(), &FieldErrors::default()))
                (out_of_band_notification(notification(
                    NotificationKind::Success,
                    t(language, "inscription.success.title"),
                    message,
                    None,
                    language,
                )))
            }
        }
        Err(error) => {
            let fallback = error.offers_mail_fallback().then(|| {
                let mail = state.client().mail_config();
                let draft = MailDraft::for_registration(
                    &record.normalized(),
                    &mail.contact_address,
                    language,
                );
                mail_fallback_trigger(&draft, MailPrompt::AfterDelay(mail.fallback_delay), language)
            });

            html! {
                (registration_form(language, &record, &FieldErrors::default()))
                (out_of_band_notification(notification(
                    NotificationKind::Error,
                    t(language, "submission.error.title"),
                    error.user_message(language),
                    fallback,
                    language,
                )))
            }
        }
    }
}
