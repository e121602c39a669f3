use crate::api::models::{Bonus, Job, NewJob, NewReferral, Notification};
use crate::api::{ApiError, ReferralApi};
use crate::auth::Credentials;
use crate::domain::referral::StatusHistoryEntry;
use crate::domain::ReferralRecord;
use astra::Response;
use base64::Engine;
use std::io::Read;
use std::sync::Mutex;

/// In-memory stand-in for the backend. Records every write it receives.
#[derive(Default)]
pub struct FakeApi {
    pub referrals: Vec<ReferralRecord>,
    pub jobs: Vec<Job>,
    pub bonuses: Vec<Bonus>,
    pub notifications: Vec<Notification>,
    pub fail_notifications: bool,
    pub writes: Mutex<Vec<String>>,
}

impl FakeApi {
    fn record(&self, what: String) {
        self.writes.lock().unwrap().push(what);
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

impl ReferralApi for FakeApi {
    fn list_jobs(&self, _creds: &Credentials) -> Result<Vec<Job>, ApiError> {
        Ok(self.jobs.clone())
    }

    fn create_job(&self, _creds: &Credentials, job: &NewJob) -> Result<Job, ApiError> {
        self.record(format!("create_job:{}", job.title));
        Ok(Job {
            id: 100,
            title: job.title.clone(),
            department: job.department.clone(),
            location: job.location.clone(),
            description: job.description.clone(),
            bonus_amount: job.bonus_amount,
            status: "open".into(),
            posted_at: String::new(),
        })
    }

    fn refer_candidate(
        &self,
        _creds: &Credentials,
        referral: &NewReferral,
    ) -> Result<ReferralRecord, ApiError> {
        self.record(format!(
            "refer:{}:{}",
            referral.job_id, referral.candidate_email
        ));
        Ok(referral_record(
            55,
            &referral.candidate_name,
            "Referral Submitted",
            None,
            vec![],
        ))
    }

    fn my_referrals(&self, _creds: &Credentials) -> Result<Vec<ReferralRecord>, ApiError> {
        Ok(self.referrals.clone())
    }

    fn get_referral(&self, _creds: &Credentials, id: i64) -> Result<ReferralRecord, ApiError> {
        self.referrals
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    fn list_bonuses(&self, _creds: &Credentials) -> Result<Vec<Bonus>, ApiError> {
        Ok(self.bonuses.clone())
    }

    fn mark_bonus_paid(&self, _creds: &Credentials, id: i64) -> Result<(), ApiError> {
        self.record(format!("bonus_paid:{id}"));
        Ok(())
    }

    fn notifications(&self, _creds: &Credentials) -> Result<Vec<Notification>, ApiError> {
        if self.fail_notifications {
            return Err(ApiError::Network("connection reset".into()));
        }
        Ok(self.notifications.clone())
    }

    fn mark_notification_read(&self, _creds: &Credentials, id: i64) -> Result<(), ApiError> {
        self.record(format!("notification_read:{id}"));
        Ok(())
    }
}

pub fn referral_record(
    id: i64,
    candidate: &str,
    status: &str,
    failed_at: Option<&str>,
    histories: Vec<StatusHistoryEntry>,
) -> ReferralRecord {
    ReferralRecord {
        id,
        candidate_name: candidate.to_string(),
        position: "Platform Engineer".to_string(),
        referred_by: "Grace Hopper".to_string(),
        submitted_date: "2024-01-10T09:00:00Z".to_string(),
        current_status: status.to_string(),
        failed_at: failed_at.map(str::to_string),
        histories,
    }
}

/// Unsigned JWT carrying `role`; the dashboard only reads the payload.
pub fn token_with_role(role: &str) -> String {
    let enc = base64::engine::general_purpose::URL_SAFE_NO_PAD;
    format!(
        "{}.{}.sig",
        enc.encode(r#"{"alg":"none"}"#),
        enc.encode(format!(
            r#"{{"sub":"1","email":"{role}@example.com","role":"{role}"}}"#
        ))
    )
}

pub fn read_body(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
