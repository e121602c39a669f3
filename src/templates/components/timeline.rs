use crate::domain::{DerivedStep, StepState};
use maud::{html, Markup};

fn marker(state: StepState) -> &'static str {
    match state {
        StepState::Completed => "✓",
        StepState::Current => "●",
        StepState::Pending => "○",
        StepState::Failed => "✕",
    }
}

pub fn timeline(steps: &[DerivedStep]) -> Markup {
    html! {
        ol class="timeline" {
            @for step in steps {
                li class=(format!("timeline-step {}", step.status)) data-state=(step.status) {
                    span class="marker" aria-hidden="true" { (marker(step.status)) }
                    div class="step-body" {
                        strong { (step.name) }
                        @if !step.date.is_empty() {
                            time { (step.date) }
                        }
                    }
                }
            }
        }
    }
}
