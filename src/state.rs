use crate::{
    admin::{AdminBackend, InMemoryAdminBackend},
    auth::CampSession,
    config::RuntimeConfiguration,
    error::CampResult,
    i18n::{Language, t},
    maud_conveniences::NOTIFICATIONS_ID,
    rate_limit::RateLimiter,
    submission::SubmissionClient,
};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::sync::Arc;

///swap error responses too, so alerts and 429s reach the page
const HTMX_CONFIG: &str = r#"{"responseHandling":[{"code":"204","swap":false},{"code":"[23]..","swap":true},{"code":"[45]..","swap":true,"error":true}]}"#;

const REQUEST_INDICATOR_STYLE: &str = ".htmx-show-on-request{display:none}.htmx-request .htmx-show-on-request{display:inline}.htmx-request .htmx-hide-on-request{display:none}";

#[derive(Clone, Debug)]
pub struct CampState {
    client: SubmissionClient,
    admin: Arc<dyn AdminBackend>,
    limiter: Arc<RateLimiter>,
}

impl CampState {
    pub async fn new(config: RuntimeConfiguration) -> CampResult<Self> {
        let admin = InMemoryAdminBackend::new(&config.admin_config()).await?;
        Self::from_parts(config, Arc::new(admin))
    }

    pub fn from_parts(
        config: RuntimeConfiguration,
        admin: Arc<dyn AdminBackend>,
    ) -> CampResult<Self> {
        let client = SubmissionClient::new(config.backend_config(), config.mail_config())?;
        let limiter = Arc::new(RateLimiter::new(*config.rate_limit_config()));

        Ok(Self {
            client,
            admin,
            limiter,
        })
    }

    pub const fn client(&self) -> &SubmissionClient {
        &self.client
    }

    pub fn admin(&self) -> Arc<dyn AdminBackend> {
        self.admin.clone()
    }

    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    #[allow(clippy::unused_self, clippy::needless_pass_by_value)] //in case self is ever needed :), and to allow direct html! usage
    pub fn render(&self, language: Language, session: CampSession, markup: Markup) -> Markup {
        let nav = render_nav(language, session.user.is_some());

        html! {
            (DOCTYPE)
            html lang=(language.code()) {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    meta name="htmx-config" content=(HTMX_CONFIG) {}
                    script src="https://unpkg.com/htmx.org@2.0.4" integrity="sha384-HGfztofotfshcF7+8n44JQL2oJmowVChPTg48S+jvZoztPfvwD79OC/LTtG6dMp+" crossorigin="anonymous" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    style { (PreEscaped(REQUEST_INDICATOR_STYLE)) }
                    title { (t(language, "hero.title")) " - " (t(language, "hero.subtitle")) }
                }
                body class="bg-gray-900 min-h-screen flex flex-col items-center text-white" {
                    (nav)
                    div id=(NOTIFICATIONS_ID) class="fixed top-20 right-4 z-50" {}
                    main class="w-full flex flex-col items-center px-4 py-8 space-y-12" {
                        (markup)
                    }
                    footer class="w-full bg-gray-800 text-gray-400 text-sm text-center py-6 mt-auto" {
                        p {(t(language, "footer.description"))}
                        p {"© 2025 " (t(language, "hero.title")) ". " (t(language, "footer.rights"))}
                    }
                }
            }
        }
    }
}

fn render_nav(language: Language, logged_in: bool) -> Markup {
    let link = "hover:text-blue-300 px-2";

    html! {
        nav class="w-full bg-gray-800 shadow-md px-6 py-4 flex flex-wrap items-center justify-between" {
            a href="/" class="text-xl font-bold" {(t(language, "hero.title"))}
            div class="flex flex-wrap items-center space-x-2" {
                a href="/#about" class=(link) {(t(language, "nav.about"))}
                a href="/#program" class=(link) {(t(language, "nav.program"))}
                a href="/#gallery" class=(link) {(t(language, "nav.gallery"))}
                a href="/#budget" class=(link) {(t(language, "nav.budget"))}
                a href="/#contact" class=(link) {(t(language, "nav.contact"))}
                a href="/inscription" class="bg-blue-600 hover:bg-blue-800 font-bold py-2 px-4 rounded" {(t(language, "register"))}
                @if logged_in {
                    a href="/admin" class=(link) {(t(language, "nav.admin"))}
                    form method="post" action="/logout" class="inline" {
                        button type="submit" class=(link) {(t(language, "nav.logout"))}
                    }
                }
                form method="post" action="/language" class="inline" {
                    input type="hidden" name="language" value=(language.toggled().code());
                    button type="submit" class="border border-gray-500 rounded py-1 px-3 hover:bg-gray-700" {(t(language, "language.switch"))}
                }
            }
        }
    }
}
