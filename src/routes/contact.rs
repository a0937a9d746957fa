use crate::{
    data::contact::{ContactInquiry, Interest},
    i18n::{Language, t},
    maud_conveniences::{
        NotificationKind, form_element, form_submit_button, notification, out_of_band_notification,
        select_element, textarea_element,
    },
    routes::mail_fallback::{MailPrompt, mail_fallback_trigger},
    state::CampState,
    submission::{ContactOutcome, mail::MailDraft},
    validation::{Field, FieldErrors, Validate},
};
use axum::{Form, extract::State};
use maud::{Markup, html};

pub fn contact_form(language: Language, inquiry: &ContactInquiry, errors: &FieldErrors) -> Markup {
    let error = |field: Field| errors.message(field, language);
    let interests: Vec<(&str, &str)> = Interest::ALL
        .into_iter()
        .map(|interest| (interest.code(), t(language, interest.translation_key())))
        .collect();

    html! {
        form id="contact-form" class="w-full" hx-post="/contact" hx-target="this" hx-swap="outerHTML" hx-disabled-elt="find button[type='submit']" novalidate {
            (form_element(Field::Name.name(), t(language, "contact.fullname"), None, &inquiry.name, error(Field::Name).as_deref()))
            (form_element(Field::Email.name(), t(language, "contact.email"), Some("email"), &inquiry.email, error(Field::Email).as_deref()))
            (form_element("phone", t(language, "contact.phone"), Some("tel"), &inquiry.phone, None))
            div class="mb-4" {
                (select_element(
                    Field::Interest.name(),
                    t(language, "contact.interested.as"),
                    t(language, "contact.interested.as"),
                    interests,
                    inquiry.interest.trim(),
                    error(Field::Interest).as_deref(),
                ))
            }
            (textarea_element(Field::Message.name(), t(language, "contact.message"), &inquiry.message, None, error(Field::Message).as_deref()))
            (form_submit_button(t(language, "contact.send"), Some(t(language, "contact.sending"))))
        }
    }
}

pub async fn post_contact(
    State(state): State<CampState>,
    language: Language,
    Form(inquiry): Form<ContactInquiry>,
) -> Markup {
    let valid = match inquiry.clone().validate() {
        Ok(valid) => valid,
        Err(errors) => {
            return html! {
                (contact_form(language, &inquiry, &errors))
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

    let cleared = ContactInquiry::default();
    match state.client().submit_contact(valid, language).await {
        Ok(ContactOutcome::Delivered) => html! {
            (contact_form(language, &cleared, &FieldErrors::default()))
            (out_of_band_notification(notification(
                NotificationKind::Success,
                t(language, "notification.success"),
                t(language, "contact.success"),
                None,
                language,
            )))
        },
        Ok(ContactOutcome::MailDraft(draft)) => html! {
            (contact_form(language, &cleared, &FieldErrors::default()))
            (out_of_band_notification(notification(
                NotificationKind::Success,
                t(language, "notification.success"),
                t(language, "contact.partner.success"),
                Some(mail_fallback_trigger(&draft, MailPrompt::Immediately, language)),
                language,
            )))
        },
        Err(error) => {
            let fallback = error.offers_mail_fallback().then(|| {
                let mail = state.client().mail_config();
                let draft =
                    MailDraft::for_contact(&inquiry.normalized(), &mail.contact_address, language);
                mail_fallback_trigger(&draft, MailPrompt::AfterDelay(mail.fallback_delay), language)
            });

            html! {
                (contact_form(language, &inquiry, &FieldErrors::default()))
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
