mod api_error;
mod client;
pub mod models;

pub use api_error::ApiError;
pub use client::ApiClient;

use crate::auth::Credentials;
use crate::domain::ReferralRecord;
use models::{Bonus, Job, NewJob, NewReferral, Notification};

/// The backend operations the dashboard pages need.
/// `ApiClient` is the real implementation; router tests plug in a fake.
pub trait ReferralApi: Send + Sync {
    fn list_jobs(&self, creds: &Credentials) -> Result<Vec<Job>, ApiError>;
    fn create_job(&self, creds: &Credentials, job: &NewJob) -> Result<Job, ApiError>;
    fn refer_candidate(
        &self,
        creds: &Credentials,
        referral: &NewReferral,
    ) -> Result<ReferralRecord, ApiError>;
    fn my_referrals(&self, creds: &Credentials) -> Result<Vec<ReferralRecord>, ApiError>;
    fn get_referral(&self, creds: &Credentials, id: i64) -> Result<ReferralRecord, ApiError>;
    fn list_bonuses(&self, creds: &Credentials) -> Result<Vec<Bonus>, ApiError>;
    fn mark_bonus_paid(&self, creds: &Credentials, id: i64) -> Result<(), ApiError>;
    fn notifications(&self, creds: &Credentials) -> Result<Vec<Notification>, ApiError>;
    fn mark_notification_read(&self, creds: &Credentials, id: i64) -> Result<(), ApiError>;
}
