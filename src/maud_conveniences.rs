use crate::i18n::{Language, t};
use axum::response::IntoResponse;
use maud::{Markup, Render, html};

pub const NOTIFICATIONS_ID: &str = "notifications";

pub fn render_table<const N: usize>(
    overall_title: impl Render,
    titles: [&str; N],
    items: Vec<[Markup; N]>,
) -> Markup {
    html! {
        div class="container mx-auto" {
            (title(overall_title))
            div class="overflow-x-auto" {
                table class="min-w-full bg-gray-800 rounded shadow-md" {
                    thead class="bg-gray-700" {
                        tr {
                            @for title in titles {
                                th class="py-2 px-4 text-left font-semibold text-gray-300" {(title)}
                            }
                        }
                    }
                    tbody {
                        @for row in items {
                            tr {
                                @for col in row {
                                    td class="py-2 px-4 border-b border-gray-600 text-gray-200" {(col)}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn supertitle(s: impl Render) -> Markup {
    html! {
        h1 class="text-4xl font-bold mb-6 text-center" {(s)}
    }
}

pub fn title(s: impl Render) -> Markup {
    html! {
        h1 class="text-2xl font-semibold mb-4" {(s)}
    }
}

pub fn subtitle(s: impl Render) -> Markup {
    html! {
        h2 class="text-xl font-semibold mb-2 text-gray-200" {(s)}
    }
}

fn field_error(error: Option<&str>) -> Markup {
    html! {
        @if let Some(error) = error {
            p class="text-red-400 text-xs italic mt-1" {(error)}
        }
    }
}

const INPUT_CLASSES: &str = "shadow appearance-none border rounded w-full py-2 px-3 text-gray-200 bg-gray-700 leading-tight focus:outline-none focus:shadow-outline";
const INPUT_ERROR_CLASSES: &str = "shadow appearance-none border border-red-500 rounded w-full py-2 px-3 text-gray-200 bg-gray-700 leading-tight focus:outline-none focus:shadow-outline";

/// A labelled `<input>` that keeps what was typed and shows its error underneath.
pub fn form_element(
    id: &str,
    label: &str,
    input_type: Option<&str>,
    value: &str,
    error: Option<&str>,
) -> Markup {
    html! {
        div class="mb-4" {
            label class="block text-sm font-bold mb-2 text-gray-300" for=(id) {(label)}
            input
                class=(if error.is_some() { INPUT_ERROR_CLASSES } else { INPUT_CLASSES })
                type=(input_type.unwrap_or("text"))
                id=(id)
                name=(id)
                value=(value)
                aria-invalid=[error.map(|_| "true")];
            (field_error(error))
        }
    }
}

pub fn simple_form_element(id: &str, label: &str, required: bool, input_type: Option<&str>) -> Markup {
    html! {
        div class="mb-4" {
            label class="block text-sm font-bold mb-2 text-gray-300" for=(id) {(label)}
            input class=(INPUT_CLASSES) type=(input_type.unwrap_or("text")) id=(id) name=(id) required[required];
        }
    }
}

pub fn textarea_element(id: &str, label: &str, value: &str, hint: Option<&str>, error: Option<&str>) -> Markup {
    html! {
        div class="mb-4" {
            label class="block text-sm font-bold mb-2 text-gray-300" for=(id) {(label)}
            textarea
                class=(if error.is_some() { INPUT_ERROR_CLASSES } else { INPUT_CLASSES })
                id=(id)
                name=(id)
                rows="5"
                aria-invalid=[error.map(|_| "true")]
                {(value)}
            @if let Some(hint) = hint {
                p class="text-gray-400 text-xs mt-1" {(hint)}
            }
            (field_error(error))
        }
    }
}

/// `options` are `(value, label)` pairs; the option matching `selected` comes pre-selected.
pub fn select_element<'a>(
    id: &str,
    label: &str,
    placeholder: &str,
    options: impl IntoIterator<Item = (&'a str, &'a str)>,
    selected: &str,
    error: Option<&str>,
) -> Markup {
    html! {
        label class="block text-sm font-bold mb-2 text-gray-300" for=(id) {(label)}
        select
            class=(if error.is_some() { INPUT_ERROR_CLASSES } else { INPUT_CLASSES })
            id=(id)
            name=(id)
            aria-invalid=[error.map(|_| "true")]
        {
            option value="" selected[selected.is_empty()] {(placeholder)}
            @for (value, text) in options {
                option value=(value) selected[value == selected] {(text)}
            }
        }
        (field_error(error))
    }
}

pub fn form_submit_button(text: &str, sending_text: Option<&str>) -> Markup {
    html! {
        div class="flex items-center justify-between" {
            button class="bg-blue-600 hover:bg-blue-800 disabled:opacity-50 text-white font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline" type="submit" {
                span class="htmx-hide-on-request" {(text)}
                @if let Some(sending_text) = sending_text {
                    span class="htmx-show-on-request" {(sending_text)}
                }
            }
        }
    }
}

pub fn errors_list<'a>(list_title: Option<&str>, items: impl IntoIterator<Item = &'a str>) -> Markup {
    html! {
        div role="alert" class="bg-red-100 border border-red-400 text-red-700 px-4 py-4 rounded relative mb-4" {
            @if let Some(list_title) = list_title {
                strong class="font-bold" {(list_title)}
            }
            ul class="list-disc list-inside" {
                @for item in items {
                    li {(item)}
                }
            }
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    const fn classes(self) -> &'static str {
        match self {
            Self::Success => "bg-green-100 border border-green-400 text-green-800",
            Self::Error => "bg-red-100 border border-red-400 text-red-700",
        }
    }
}

/// A dismissible toast. `extra` goes underneath the message, eg. a mail-fallback trigger.
pub fn notification(
    kind: NotificationKind,
    heading: impl Render,
    message: impl Render,
    extra: Option<Markup>,
    language: Language,
) -> Markup {
    html! {
        div role="alert" class={"px-4 py-3 rounded shadow-lg mb-2 max-w-sm " (kind.classes())} {
            div class="flex justify-between items-start space-x-4" {
                div {
                    strong class="font-bold block" {(heading)}
                    span class="block" {(message)}
                }
                button type="button" class="font-bold" aria-label=(t(language, "notification.dismiss")) onclick="this.closest('[role=alert]').remove()" {"×"}
            }
            @if let Some(extra) = extra {
                (extra)
            }
        }
    }
}

///appended to an htmx fragment so the toast lands in the page-wide notification area
pub fn out_of_band_notification(notification: Markup) -> Markup {
    html! {
        div id=(NOTIFICATIONS_ID) hx-swap-oob="innerHTML" {(notification)}
    }
}

/// A bare notification that htmx puts in the notification area, whatever the request targeted.
pub fn notification_response(
    kind: NotificationKind,
    heading: impl Render,
    message: impl Render,
    language: Language,
) -> impl IntoResponse {
    (
        [
            ("HX-Retarget", "#notifications"),
            ("HX-Reswap", "innerHTML"),
        ],
        notification(kind, heading, message, None, language),
    )
}
