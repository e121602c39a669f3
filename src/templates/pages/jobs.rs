use crate::api::models::Job;
use crate::templates::components::card;
use crate::templates::{desktop_layout, Viewer};
use maud::{html, Markup};

pub fn jobs_page(viewer: &Viewer, jobs: &[Job]) -> Markup {
    desktop_layout(
        "Jobs",
        viewer,
        html! {
            main class="container" {
                h1 { "Open positions" }

                @if viewer.is_admin {
                    (new_job_form())
                }

                @let open: Vec<&Job> = jobs.iter().filter(|j| j.is_open()).collect();
                @if open.is_empty() {
                    p { "No open positions right now." }
                }
                @for job in open {
                    (job_card(job))
                }
            }
        },
    )
}

fn job_card(job: &Job) -> Markup {
    card(
        &job.title,
        html! {
            p class="meta" {
                @if let Some(dept) = &job.department { (dept) }
                @if let Some(loc) = &job.location { " · " (loc) }
                @if let Some(bonus) = job.bonus_amount {
                    " · Referral bonus: " strong { (format!("${bonus:.2}")) }
                }
            }
            p { (job.description) }

            details {
                summary { "Refer a candidate" }
                form action=(format!("/jobs/{}/refer", job.id)) method="post" class="refer-form" {
                    label for=(format!("name-{}", job.id)) { "Candidate name" }
                    input type="text" id=(format!("name-{}", job.id)) name="candidate_name" required;

                    label for=(format!("email-{}", job.id)) { "Candidate email" }
                    input type="email" id=(format!("email-{}", job.id)) name="candidate_email" required;

                    label for=(format!("note-{}", job.id)) { "Why they fit (optional)" }
                    textarea id=(format!("note-{}", job.id)) name="note" rows="3" {}

                    button type="submit" class="primary" { "Submit referral" }
                }
            }
        },
    )
}

fn new_job_form() -> Markup {
    card(
        "Post a job",
        html! {
            form action="/jobs" method="post" class="job-form" {
                label for="title" { "Title" }
                input type="text" id="title" name="title" required;

                label for="department" { "Department" }
                input type="text" id="department" name="department";

                label for="location" { "Location" }
                input type="text" id="location" name="location";

                label for="bonus_amount" { "Referral bonus" }
                input type="number" id="bonus_amount" name="bonus_amount" min="0" step="0.01";

                label for="description" { "Description" }
                textarea id="description" name="description" rows="5" required {}

                button type="submit" class="primary" { "Post job" }
            }
        },
    )
}
