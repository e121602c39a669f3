use maud::{html, Markup, DOCTYPE};

/// Standalone error page; doesn't depend on who is signed in.
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                link rel="stylesheet" href="/static/main.css";
            }
            body class="error-page" {
                h1 { "Error " (status) }
                p { (message) }
                @if status == 401 {
                    p { "Your session may have expired. Sign in again through the portal." }
                }
                p { a href="/" { "← Back to my referrals" } }
            }
        }
    }
}
