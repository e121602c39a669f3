use crate::domain::history::format_display_date;
use crate::domain::{ReferralRecord, TimelineView};
use crate::templates::components::{progress_bar, status_badge, timeline};
use crate::templates::{desktop_layout, Viewer};
use maud::{html, Markup};

pub fn track_page(viewer: &Viewer, record: &ReferralRecord, view: &TimelineView) -> Markup {
    let submitted = format_display_date(&record.submitted_date);

    desktop_layout(
        &format!("Tracking {}", record.candidate_name),
        viewer,
        html! {
            main class="container" {
                h1 { (record.candidate_name) }
                p class="subtitle" {
                    (record.position) " · referred by " (record.referred_by)
                    @if !submitted.is_empty() {
                        " on " (submitted)
                    }
                }

                section class="card" {
                    div class="status-row" {
                        (status_badge(&record.current_status))
                        (progress_bar(view.progress, view.failed))
                    }
                    (timeline(&view.steps))
                }

                p { a href="/" { "← All referrals" } }
            }
        },
    )
}
