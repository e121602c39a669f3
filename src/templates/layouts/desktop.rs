use maud::{html, Markup, DOCTYPE};

use crate::auth::Credentials;

/// Who is looking at the page, as far as the navbar cares.
#[derive(Debug, Clone, Default)]
pub struct Viewer {
    pub name: Option<String>,
    pub is_admin: bool,
}

impl Viewer {
    pub fn from_credentials(creds: &Credentials) -> Self {
        Self {
            name: creds.display_name().map(str::to_string),
            is_admin: creds.is_admin(),
        }
    }
}

pub fn desktop_layout(title: &str, viewer: &Viewer, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Referrals" }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
                script src="/static/htmx.js" defer {};
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    h3 { "Referrals" }
                    nav {
                        ul {
                            li { a href="/" { "My referrals" } }
                            li { a href="/jobs" { "Jobs" } }
                            li { a href="/bonuses" { "Bonuses" } }
                        }
                    }
                    div class="inline" {
                        span
                            id="notification-badge"
                            hx-get="/notifications/badge"
                            hx-trigger="load, every 30s"
                            hx-swap="innerHTML"
                        {}
                        @if let Some(name) = &viewer.name {
                            span class="viewer" { (name) }
                        }
                        @if viewer.is_admin {
                            span class="role" { "admin" }
                        }
                    }
                }
                (content)
            }
        }
    }
}
