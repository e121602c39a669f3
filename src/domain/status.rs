// src/domain/status.rs

/// The fixed referral pipeline, in order. A step's position here is its index
/// for every completed/current/pending comparison.
pub const CANONICAL_STEPS: [&str; 6] = [
    "Referral Submitted",
    "Referral Under Review",
    "Referral Accepted",
    "Interview Round 1",
    "Interview Round 2",
    "Final Result",
];

pub const TOTAL_STEPS: usize = CANONICAL_STEPS.len();

pub const ACCEPTED: &str = "Accepted";
pub const REJECTED: &str = "Rejected";

/// Backend status string -> label shown to the user.
/// Lookups that go label -> raw walk this table in order, so the first raw
/// status carrying a label wins.
pub const STATUS_MAP: [(&str, &str); 8] = [
    ("Referral Submitted", "Referral Submitted"),
    ("Referral Under Review", "Referral Under Review"),
    ("Referral Accepted", "Referral Accepted"),
    ("Interview Round 1", "Interview Round 1"),
    ("Interview Round 2", "Interview Round 2"),
    ("Final Result", "Final Result"),
    (ACCEPTED, "Selected"),
    (REJECTED, "Rejected"),
];

/// Display label for a raw status. Unknown statuses come back unchanged.
pub fn normalize_status(raw: &str) -> &str {
    STATUS_MAP
        .iter()
        .find(|(key, _)| *key == raw)
        .map(|(_, label)| *label)
        .unwrap_or(raw)
}

/// Position of the raw status's label in the pipeline, or `None` when the
/// label is not one of the canonical steps.
pub fn canonical_index(raw: &str) -> Option<usize> {
    let label = normalize_status(raw);
    CANONICAL_STEPS.iter().position(|step| *step == label)
}

/// Raw statuses whose label is `step`, in table order.
pub fn raw_statuses_for(step: &str) -> impl Iterator<Item = &'static str> + '_ {
    STATUS_MAP
        .iter()
        .filter(move |(_, label)| *label == step)
        .map(|(key, _)| *key)
}
