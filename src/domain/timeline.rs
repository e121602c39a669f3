// src/domain/timeline.rs

use crate::domain::history::resolve_step_dates;
use crate::domain::progress::progress_percentage;
use crate::domain::referral::ReferralRecord;
use crate::domain::status::{canonical_index, normalize_status, ACCEPTED, CANONICAL_STEPS, REJECTED};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Completed,
    Current,
    Pending,
    Failed,
}

impl StepState {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepState::Completed => "completed",
            StepState::Current => "current",
            StepState::Pending => "pending",
            StepState::Failed => "failed",
        }
    }
}

impl fmt::Display for StepState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedStep {
    pub name: String,
    pub status: StepState,
    pub date: String,
}

/// Everything the tracking page needs for one referral.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineView {
    pub steps: Vec<DerivedStep>,
    pub progress: u8,
    pub status_label: String,
    pub failed: bool,
}

/// Classifies each canonical step against the furthest status reached.
///
/// `dates` may be shorter than the pipeline; missing entries render blank.
/// An unrecognised status sits at index -1: nothing is completed, and in the
/// non-failed case the first step becomes current.
pub fn classify_steps(current_completed_status: &str, failed: bool, dates: &[String]) -> Vec<DerivedStep> {
    let failed_index: i64 = canonical_index(current_completed_status)
        .map(|i| i as i64)
        .unwrap_or(-1);
    let accepted = current_completed_status == ACCEPTED;
    let last = CANONICAL_STEPS.len() - 1;

    CANONICAL_STEPS
        .iter()
        .enumerate()
        .map(|(i, &step)| {
            let idx = i as i64;
            let date = dates.get(i).cloned().unwrap_or_default();

            let (status, name) = if accepted {
                let name = if i == last { "Selected" } else { step };
                (StepState::Completed, name)
            } else if failed {
                if idx < failed_index {
                    (StepState::Completed, step)
                } else {
                    let name = if i == last { REJECTED } else { step };
                    (StepState::Failed, name)
                }
            } else if idx <= failed_index {
                (StepState::Completed, step)
            } else if idx == failed_index + 1 {
                (StepState::Current, step)
            } else {
                (StepState::Pending, step)
            };

            DerivedStep {
                name: name.to_string(),
                status,
                date,
            }
        })
        .collect()
}

/// Derives the full timeline for a referral. Pure: same record, same view.
pub fn derive_timeline(record: &ReferralRecord) -> TimelineView {
    let current = record.current_status.as_str();
    let failed_at = record.failed_at.as_deref();

    let failed = current != ACCEPTED && (failed_at.is_some() || current == REJECTED);
    let completed_status = match failed_at {
        Some(raw) if failed => raw,
        _ => current,
    };

    let dates = resolve_step_dates(&record.histories, failed_at);

    TimelineView {
        steps: classify_steps(completed_status, failed, &dates),
        progress: progress_percentage(completed_status, failed),
        status_label: normalize_status(current).to_string(),
        failed,
    }
}
