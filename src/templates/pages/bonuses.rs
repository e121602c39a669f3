use crate::api::models::Bonus;
use crate::domain::history::format_display_date;
use crate::templates::{desktop_layout, Viewer};
use maud::{html, Markup};

pub fn bonuses_page(viewer: &Viewer, bonuses: &[Bonus]) -> Markup {
    let pending: f64 = bonuses.iter().filter(|b| !b.is_paid()).map(|b| b.amount).sum();
    let paid: f64 = bonuses.iter().filter(|b| b.is_paid()).map(|b| b.amount).sum();

    desktop_layout(
        "Bonuses",
        viewer,
        html! {
            main class="container" {
                h1 { "Referral bonuses" }
                p {
                    "Pending: " strong { (format!("${pending:.2}")) }
                    " · Paid: " strong { (format!("${paid:.2}")) }
                }

                @if bonuses.is_empty() {
                    p { "No bonuses yet." }
                } @else {
                    table class="bonuses" {
                        thead {
                            tr {
                                th { "Candidate" }
                                th { "Referred by" }
                                th { "Amount" }
                                th { "Status" }
                                @if viewer.is_admin { th {} }
                            }
                        }
                        tbody {
                            @for b in bonuses {
                                tr {
                                    td { a href=(format!("/referrals/{}", b.referral_id)) { (b.candidate_name) } }
                                    td { (b.referred_by) }
                                    td { (format!("${:.2}", b.amount)) }
                                    td {
                                        @if b.is_paid() {
                                            span class="badge badge-success" { "Paid" }
                                            @if let Some(at) = &b.paid_at {
                                                " " (format_display_date(at))
                                            }
                                        } @else {
                                            span class="badge badge-neutral" { "Pending" }
                                        }
                                    }
                                    @if viewer.is_admin {
                                        td {
                                            @if !b.is_paid() {
                                                form action=(format!("/bonuses/{}/paid", b.id)) method="post" {
                                                    button type="submit" { "Mark paid" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
