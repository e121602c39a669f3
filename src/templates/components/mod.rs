use maud::{html, Markup};

pub mod error;
pub mod progress;
pub mod status_badge;
pub mod timeline;

pub use error::error_page;
pub use progress::progress_bar;
pub use status_badge::status_badge;
pub use timeline::timeline;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h3 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
