use serde::{Deserialize, Serialize};

// Wire shapes of the backend resources, camelCase on the wire.
// Referrals themselves live in `domain::referral`.

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub bonus_amount: Option<f64>,
    /// "open" or "closed".
    #[serde(default = "default_job_status")]
    pub status: String,
    #[serde(default)]
    pub posted_at: String,
}

fn default_job_status() -> String {
    "open".to_string()
}

impl Job {
    pub fn is_open(&self) -> bool {
        self.status.eq_ignore_ascii_case("open")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    pub department: Option<String>,
    pub location: Option<String>,
    pub description: String,
    pub bonus_amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReferral {
    pub job_id: i64,
    pub candidate_name: String,
    pub candidate_email: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bonus {
    pub id: i64,
    pub referral_id: i64,
    #[serde(default)]
    pub candidate_name: String,
    #[serde(default)]
    pub referred_by: String,
    pub amount: f64,
    /// "pending" or "paid".
    pub status: String,
    #[serde(default)]
    pub paid_at: Option<String>,
}

impl Bonus {
    pub fn is_paid(&self) -> bool {
        self.status.eq_ignore_ascii_case("paid")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub created_at: String,
    /// Referral the notification is about, when there is one.
    #[serde(default)]
    pub referral_id: Option<i64>,
}
