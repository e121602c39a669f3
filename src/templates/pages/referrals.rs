use crate::api::models::Notification;
use crate::domain::{derive_timeline, ReferralRecord};
use crate::templates::components::{card, progress_bar, status_badge};
use crate::templates::{desktop_layout, Viewer};
use maud::{html, Markup};

pub fn referrals_page(viewer: &Viewer, referrals: &[ReferralRecord], notifications: &[Notification]) -> Markup {
    desktop_layout(
        "My referrals",
        viewer,
        html! {
            main class="container" {
                h1 { "My referrals" }

                @if referrals.is_empty() {
                    p { "You haven't referred anyone yet. " a href="/jobs" { "Browse open jobs" } "." }
                } @else {
                    table class="referrals" {
                        thead {
                            tr {
                                th { "Candidate" }
                                th { "Position" }
                                th { "Status" }
                                th { "Progress" }
                                th {}
                            }
                        }
                        tbody {
                            @for r in referrals {
                                @let view = derive_timeline(r);
                                tr {
                                    td { (r.candidate_name) }
                                    td { (r.position) }
                                    td { (status_badge(&r.current_status)) }
                                    td { (progress_bar(view.progress, view.failed)) }
                                    td { a href=(format!("/referrals/{}", r.id)) { "Track" } }
                                }
                            }
                        }
                    }
                }

                (notifications_card(notifications))
            }
        },
    )
}

fn notifications_card(notifications: &[Notification]) -> Markup {
    card(
        "Notifications",
        html! {
            @if notifications.is_empty() {
                p { "Nothing new." }
            } @else {
                ul class="notifications" {
                    @for n in notifications {
                        li class=(if n.read { "read" } else { "unread" }) {
                            @if let Some(id) = n.referral_id {
                                a href=(format!("/referrals/{id}")) { (n.message) }
                            } @else {
                                (n.message)
                            }
                            @if !n.read {
                                form action=(format!("/notifications/{}/read", n.id)) method="post" class="inline" {
                                    button type="submit" { "Mark read" }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
