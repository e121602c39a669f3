// src/domain/progress.rs

use crate::domain::status::{canonical_index, ACCEPTED, REJECTED, TOTAL_STEPS};

/// Percentage of the pipeline a referral has cleared, 0..=100.
///
/// Always reports at least one completed step, so even an unrecognised
/// status shows 17% rather than 0%.
pub fn progress_percentage(status: &str, failed: bool) -> u8 {
    let total = TOTAL_STEPS as i64;

    let current_index: i64 = if status == ACCEPTED || status == REJECTED {
        total - 1
    } else {
        canonical_index(status).map(|i| i as i64).unwrap_or(-1)
    };

    let completed = if status == ACCEPTED {
        total
    } else if failed {
        current_index
    } else {
        current_index + 1
    };

    let completed = completed.clamp(1, total);
    ((100 * completed) as f64 / total as f64).round() as u8
}
