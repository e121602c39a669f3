// src/domain/history.rs

use crate::domain::referral::StatusHistoryEntry;
use crate::domain::status::{canonical_index, raw_statuses_for, ACCEPTED, CANONICAL_STEPS};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::collections::HashMap;

/// Display format for timeline dates, e.g. "Jan 20, 2024".
pub const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

/// Parses the timestamp shapes the backend has been seen to send.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Formats a backend timestamp for display. Unparseable input gives "".
pub fn format_display_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format(DISPLAY_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Returns the histories ordered by `created_at`, oldest first.
/// If any timestamp fails to parse the backend order is kept as-is.
fn chronological(histories: &[StatusHistoryEntry]) -> Vec<&StatusHistoryEntry> {
    let parsed: Option<Vec<(NaiveDateTime, &StatusHistoryEntry)>> = histories
        .iter()
        .map(|h| parse_timestamp(&h.created_at).map(|ts| (ts, h)))
        .collect();

    match parsed {
        Some(mut entries) => {
            entries.sort_by_key(|(ts, _)| *ts);
            entries.into_iter().map(|(_, h)| h).collect()
        }
        None => histories.iter().collect(),
    }
}

/// One display date per canonical step, in pipeline order.
///
/// A rejected referral (`failed_at` set and never accepted) stops producing
/// dates after the step it failed at, so the result can be shorter than the
/// pipeline. Steps without their own history entry fall back to the
/// acceptance date when the referral was accepted, otherwise "".
pub fn resolve_step_dates(histories: &[StatusHistoryEntry], failed_at: Option<&str>) -> Vec<String> {
    let ordered = chronological(histories);

    let mut first_seen: HashMap<&str, String> = HashMap::new();
    for entry in &ordered {
        first_seen
            .entry(entry.status.as_str())
            .or_insert_with(|| format_display_date(&entry.created_at));
    }

    let accepted_date = first_seen.get(ACCEPTED).cloned();
    let is_accepted = accepted_date.is_some();

    // None means the failure point is not a pipeline step; nothing gets a date.
    let stop_index = match failed_at {
        Some(raw) if !is_accepted => Some(canonical_index(raw)),
        _ => None,
    };

    let mut dates = Vec::with_capacity(CANONICAL_STEPS.len());
    for (i, step) in CANONICAL_STEPS.iter().enumerate() {
        if let Some(stop) = stop_index {
            match stop {
                Some(stop) if i <= stop => {}
                _ => return dates,
            }
        }

        let own_date = raw_statuses_for(step).find_map(|raw| first_seen.get(raw));
        let date = match (own_date, &accepted_date) {
            (Some(d), _) => d.clone(),
            (None, Some(accepted)) => accepted.clone(),
            (None, None) => String::new(),
        };
        dates.push(date);
    }

    dates
}
