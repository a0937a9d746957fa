use crate::{
    auth::CampSession,
    data::contact::ContactInquiry,
    i18n::{Language, t},
    maud_conveniences::{subtitle, supertitle, title},
    routes::contact::contact_form,
    state::CampState,
    submission::mail::MailDraft,
    validation::FieldErrors,
};
use axum::extract::State;
use maud::{Markup, html};

/// `(translation key, euros)`
pub const BUDGET: [(&str, u32); 5] = [
    ("budget.item.materials", 15_000),
    ("budget.item.speakers", 25_000),
    ("budget.item.travel", 30_000),
    ("budget.item.scholarships", 20_000),
    ("budget.item.administration", 10_000),
];

/// `(name key, description key, euros)`
pub const PARTNER_TIERS: [(&str, &str, u32); 3] = [
    ("budget.partner.gold", "budget.partner.gold.description", 10_000),
    ("budget.partner.silver", "budget.partner.silver.description", 5_000),
    ("budget.partner.bronze", "budget.partner.bronze.description", 2_000),
];

const STATS: [(&str, &str); 4] = [
    ("5", "program.stats.days"),
    ("30+", "program.stats.workshops"),
    ("10+", "program.stats.experts"),
    ("50+", "program.stats.participants"),
];

pub fn budget_total() -> u32 {
    BUDGET.iter().map(|(_, amount)| amount).sum()
}

///whole percent, rounded to nearest
pub fn share_percent(amount: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (u64::from(amount) * 100 + u64::from(total) / 2)
        .checked_div(u64::from(total))
        .and_then(|share| u32::try_from(share).ok())
        .unwrap_or(0)
}

/// `15 000 €` in French, `€15,000` in English.
pub fn format_euros(amount: u32, language: Language) -> String {
    let digits = amount.to_string();
    let separator = match language {
        Language::Fr => ' ',
        Language::En => ',',
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    match language {
        Language::Fr => format!("{grouped} €"),
        Language::En => format!("€{grouped}"),
    }
}

pub async fn get_index(
    State(state): State<CampState>,
    session: CampSession,
    language: Language,
) -> Markup {
    let partnership_uri =
        MailDraft::for_partnership(&state.client().mail_config().contact_address, language)
            .to_uri();

    state.render(
        language,
        session,
        html! {
            (hero(language))
            (about(language))
            (program(language))
            (gallery(language))
            (budget(language, &partnership_uri))
            (contact(language))
        },
    )
}

fn section_heading(language: Language, chip: &str, heading: &str, sub: &str) -> Markup {
    html! {
        div class="text-center max-w-3xl mx-auto mb-8" {
            span class="inline-block bg-blue-900 text-blue-200 text-xs font-semibold px-3 py-1 rounded-full mb-4" {(t(language, chip))}
            (title(t(language, heading)))
            p class="text-gray-300" {(t(language, sub))}
        }
    }
}

fn hero(language: Language) -> Markup {
    html! {
        section id="hero" class="text-center max-w-3xl space-y-4" {
            p class="text-blue-300 font-semibold" {(t(language, "dates"))}
            (supertitle(t(language, "hero.title")))
            (subtitle(t(language, "hero.subtitle")))
            p class="text-gray-300" {(t(language, "hero.description"))}
            p class="text-green-300 font-semibold" {(t(language, "hero.free"))}
            div class="flex flex-row space-x-4 justify-center" {
                a href="/inscription" class="bg-blue-600 hover:bg-blue-800 font-bold py-2 px-4 rounded" {(t(language, "register.now"))}
                a href="#about" class="bg-slate-600 hover:bg-slate-800 font-bold py-2 px-4 rounded" {(t(language, "hero.learn_more"))}
            }
        }
    }
}

fn about(language: Language) -> Markup {
    html! {
        section id="about" class="w-full max-w-5xl" {
            (section_heading(language, "about", "about.title", "about.subtitle"))
            div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8" {
                @for card in ["about.excellence", "about.who", "about.vision"] {
                    div class="bg-gray-800 rounded-lg p-6" {
                        (subtitle(t(language, &format!("{card}.title"))))
                        p class="text-gray-300" {(t(language, &format!("{card}.description")))}
                    }
                }
            }
            (subtitle(t(language, "about.objectives.title")))
            div class="grid grid-cols-1 md:grid-cols-2 gap-4" {
                @for n in 1..=4 {
                    div class="bg-gray-800 rounded-lg p-4" {
                        h3 class="font-semibold" {(t(language, &format!("about.obj{n}.title")))}
                        p class="text-gray-300 text-sm" {(t(language, &format!("about.obj{n}.description")))}
                    }
                }
            }
        }
    }
}

fn program(language: Language) -> Markup {
    const ACTIVITIES: [&str; 4] = ["workshops", "lectures", "mentoring", "competitions"];

    html! {
        section id="program" class="w-full max-w-5xl" {
            (section_heading(language, "program", "program.title", "program.subtitle"))
            div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-8" {
                @for (session, themes) in [("math", 4), ("programming", 5)] {
                    div class="bg-gray-800 rounded-lg p-6" {
                        (subtitle(t(language, &format!("program.session.{session}"))))
                        p class="text-gray-300 mb-2" {(t(language, &format!("program.session.{session}.description")))}
                        p class="font-semibold" {(t(language, "program.themes"))}
                        ul class="list-disc list-inside text-gray-300" {
                            @for n in 1..=themes {
                                li {(t(language, &format!("program.session.{session}.theme{n}")))}
                            }
                        }
                    }
                }
            }
            div class="grid grid-cols-1 md:grid-cols-2 gap-4 mb-8" {
                @for activity in ACTIVITIES {
                    div class="bg-gray-800 rounded-lg p-4" {
                        div class="flex justify-between" {
                            h3 class="font-semibold" {(t(language, &format!("program.activities.{activity}")))}
                            span class="text-blue-300 text-sm" {(t(language, &format!("program.activities.{activity}.time")))}
                        }
                        p class="text-gray-300 text-sm" {(t(language, &format!("program.activities.{activity}.description")))}
                    }
                }
            }
            div class="grid grid-cols-2 md:grid-cols-4 gap-6 text-center" {
                @for (figure, key) in STATS {
                    div {
                        div class="text-4xl font-bold text-blue-300 mb-2" {(figure)}
                        div class="text-sm" {(t(language, key))}
                    }
                }
            }
        }
    }
}

fn gallery(language: Language) -> Markup {
    html! {
        section id="gallery" class="w-full max-w-5xl" {
            (section_heading(language, "gallery", "gallery.title", "gallery.subtitle"))
            div class="grid grid-cols-1 md:grid-cols-3 gap-6" {
                @for n in 1..=3 {
                    blockquote class="bg-gray-800 rounded-lg p-6" {
                        p class="italic text-gray-200 mb-4" {"« " (t(language, &format!("gallery.testimonial{n}.quote"))) " »"}
                        footer class="text-sm text-blue-300" {(t(language, &format!("gallery.testimonial{n}.author")))}
                    }
                }
            }
        }
    }
}

fn budget(language: Language, partnership_uri: &str) -> Markup {
    let total = budget_total();

    html! {
        section id="budget" class="w-full max-w-5xl" {
            (section_heading(language, "budget", "budget.title", "budget.description"))
            div class="bg-gray-800 rounded-lg p-6 mb-8" {
                (subtitle(html! {(t(language, "budget.total")) ": " (format_euros(total, language))}))
                p class="text-gray-300 mb-4" {(t(language, "budget.distribution"))}
                table class="min-w-full" {
                    thead class="bg-gray-700" {
                        tr {
                            th class="py-2 px-4 text-left" {(t(language, "budget.category"))}
                            th class="py-2 px-4 text-right" {(t(language, "budget.amount"))}
                            th class="py-2 px-4 text-right" {(t(language, "budget.share"))}
                        }
                    }
                    tbody {
                        @for (key, amount) in BUDGET {
                            @let share = share_percent(amount, total);
                            tr {
                                td class="py-2 px-4 border-b border-gray-600" {(t(language, key))}
                                td class="py-2 px-4 border-b border-gray-600 text-right" {(format_euros(amount, language))}
                                td class="py-2 px-4 border-b border-gray-600 text-right" {
                                    div class="flex items-center justify-end space-x-2" {
                                        div class="w-24 bg-gray-600 rounded h-2" {
                                            div class="bg-blue-500 h-2 rounded" style={"width: " (share) "%"} {}
                                        }
                                        span {(share) " %"}
                                    }
                                }
                            }
                        }
                        tr class="font-bold" {
                            td class="py-2 px-4" {(t(language, "budget.total.row"))}
                            td class="py-2 px-4 text-right" {(format_euros(total, language))}
                            td class="py-2 px-4 text-right" {"100 %"}
                        }
                    }
                }
                p class="text-green-300 mt-4" {(t(language, "budget.free"))}
            }
            div class="text-center" {
                (subtitle(t(language, "budget.partner.title")))
                p class="text-gray-300 mb-4" {(t(language, "budget.partner.description"))}
                div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-6" {
                    @for (name, description, amount) in PARTNER_TIERS {
                        div class="bg-gray-800 border border-blue-900 rounded-lg p-6" {
                            h4 class="font-semibold mb-2" {(t(language, name))}
                            p class="text-sm text-gray-300 mb-4" {(t(language, description))}
                            div class="font-bold text-2xl text-blue-300" {(format_euros(amount, language))}
                        }
                    }
                }
                a href=(partnership_uri) class="bg-blue-600 hover:bg-blue-800 font-bold py-2 px-4 rounded" {(t(language, "budget.contact.us"))}
            }
        }
    }
}

fn contact(language: Language) -> Markup {
    html! {
        section id="contact" class="w-full max-w-5xl" {
            (section_heading(language, "contact", "contact.title", "contact.subtitle"))
            div class="grid grid-cols-1 md:grid-cols-2 gap-8" {
                div class="bg-gray-800 rounded-lg p-6" {
                    (contact_form(language, &ContactInquiry::default(), &FieldErrors::default()))
                }
                div class="space-y-4" {
                    (subtitle(t(language, "contact.info.title")))
                    p class="text-gray-300" {(t(language, "contact.info.description"))}
                    (subtitle(t(language, "contact.faq.title")))
                    @for n in 1..=3 {
                        details class="bg-gray-800 rounded p-4" {
                            summary class="font-semibold cursor-pointer" {(t(language, &format!("contact.faq{n}.question")))}
                            p class="text-gray-300 mt-2" {(t(language, &format!("contact.faq{n}.answer")))}
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_adds_up_to_a_hundred_thousand() {
        assert_eq!(budget_total(), 100_000);
        let shares: Vec<u32> = BUDGET
            .iter()
            .map(|(_, amount)| share_percent(*amount, budget_total()))
            .collect();
        assert_eq!(shares, vec![15, 25, 30, 20, 10]);
        assert_eq!(shares.iter().sum::<u32>(), 100);
    }

    #[test]
    fn shares_round_and_never_divide_by_zero() {
        assert_eq!(share_percent(1, 3), 33);
        assert_eq!(share_percent(2, 3), 67);
        assert_eq!(share_percent(5, 0), 0);
    }

    #[test]
    fn euros_are_grouped_per_language() {
        assert_eq!(format_euros(15_000, Language::Fr), "15 000 €");
        assert_eq!(format_euros(100_000, Language::En), "€100,000");
        assert_eq!(format_euros(2_000, Language::En), "€2,000");
        assert_eq!(format_euros(500, Language::Fr), "500 €");
    }

    #[test]
    fn every_landing_section_is_rendered() {
        let html = html! {
            (hero(Language::En))
            (about(Language::En))
            (program(Language::En))
            (gallery(Language::En))
            (budget(Language::En, "mailto:contact@mathssummercamp.org"))
            (contact(Language::En))
        }
        .into_string();

        for id in ["hero", "about", "program", "gallery", "budget", "contact"] {
            assert!(html.contains(&format!(r#"id="{id}""#)), "missing section {id}");
        }
        assert!(html.contains("Gold Partner"));
        assert!(html.contains("€30,000"));
        assert!(html.contains(r#"hx-post="/contact""#));
    }
}
