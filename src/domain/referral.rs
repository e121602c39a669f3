// src/domain/referral.rs

use serde::{Deserialize, Serialize};

/// A referral as returned by the backend's `referrals/{id}` resource.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralRecord {
    pub id: i64,
    pub candidate_name: String,
    pub position: String,
    pub referred_by: String,
    #[serde(default)]
    pub submitted_date: String,
    pub current_status: String,
    /// Raw status at which the referral was rejected, if it was.
    #[serde(default)]
    pub failed_at: Option<String>,
    #[serde(default)]
    pub histories: Vec<StatusHistoryEntry>,
}

/// One status change. Extra backend fields (ids, notes) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusHistoryEntry {
    pub status: String,
    #[serde(default)]
    pub created_at: String,
}

#[cfg(test)]
impl StatusHistoryEntry {
    pub fn new(status: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            created_at: created_at.into(),
        }
    }
}
