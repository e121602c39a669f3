use crate::domain::status::{normalize_status, ACCEPTED, REJECTED};
use maud::{html, Markup};

fn badge_class(raw: &str) -> &'static str {
    match raw {
        ACCEPTED => "badge badge-success",
        REJECTED => "badge badge-danger",
        r if r.starts_with("Interview") => "badge badge-info",
        _ => "badge badge-neutral",
    }
}

pub fn status_badge(raw_status: &str) -> Markup {
    html! {
        span class=(badge_class(raw_status)) { (normalize_status(raw_status)) }
    }
}
