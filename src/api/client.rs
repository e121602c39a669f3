// client.rs
use crate::api::models::{Bonus, Job, NewJob, NewReferral, Notification};
use crate::api::{ApiError, ReferralApi};
use crate::auth::Credentials;
use crate::db::cache;
use crate::db::Database;
use crate::domain::ReferralRecord;
use rand::Rng;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use url::Url;

const USER_AGENT: &str = concat!("referral-tracker/", env!("CARGO_PKG_VERSION"));

const MAX_ATTEMPTS: u32 = 3;
const BACKOFF_STEP_MS: u64 = 250;
const MAX_BACKOFF_MS: u64 = 2_000;
const JITTER_MAX_MS: u64 = 250;

/// Groups of cached responses that a write invalidates together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheTag {
    Job,
    Referral,
    Bonus,
    Notification,
}

impl CacheTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheTag::Job => "Job",
            CacheTag::Referral => "Referral",
            CacheTag::Bonus => "Bonus",
            CacheTag::Notification => "Notification",
        }
    }
}

struct ResponseCache {
    db: Database,
    ttl_secs: i64,
}

/// Blocking REST client for the referral backend.
/// Credentials are supplied per call; the client itself holds none.
pub struct ApiClient {
    client: Client,
    base_url: Url,
    cache: Option<ResponseCache>,
}

impl ApiClient {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ApiError> {
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Config(format!("{base_url} cannot be a base URL")));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            cache: None,
        })
    }

    /// Serve GETs from `db` while they are younger than `ttl_secs`.
    pub fn with_cache(mut self, db: Database, ttl_secs: i64) -> Self {
        self.cache = Some(ResponseCache { db, ttl_secs });
        self
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::Config(format!("bad endpoint {path}: {e}")))
    }

    fn authorized(&self, creds: &Credentials, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(AUTHORIZATION, format!("Bearer {}", creds.token()))
            .header(ACCEPT, "application/json")
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        creds: &Credentials,
        path: &str,
        tag: CacheTag,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let key = cache::cache_key(creds.token(), url.as_str());
        let now = now_unix();

        if let Some(body) = self.cached(&key, now) {
            debug!(%url, "cache hit");
            return decode(&body);
        }

        let body = self.fetch_with_retry(creds, &url)?;
        let parsed = decode(&body)?;

        if let Some(c) = &self.cache {
            let stored = c
                .db
                .with_conn(|conn| cache::put(conn, &key, tag.as_str(), url.as_str(), &body, now));
            if let Err(e) = stored {
                warn!(%url, "could not cache response: {e}");
            }
        }

        Ok(parsed)
    }

    fn cached(&self, key: &[u8; 32], now: i64) -> Option<String> {
        let c = self.cache.as_ref()?;
        match c.db.with_conn(|conn| cache::get_fresh(conn, key, now, c.ttl_secs)) {
            Ok(hit) => hit,
            Err(e) => {
                warn!("cache lookup failed, going to backend: {e}");
                None
            }
        }
    }

    fn fetch_with_retry(&self, creds: &Credentials, url: &Url) -> Result<String, ApiError> {
        let mut last_err = None;

        for attempt in 1..=MAX_ATTEMPTS {
            let start = Instant::now();

            match execute(self.authorized(creds, Method::GET, url.clone())) {
                Ok(body) => {
                    debug!(%url, attempt, elapsed = ?start.elapsed(), "fetched");
                    return Ok(body);
                }
                Err(e) if e.is_transient() && attempt < MAX_ATTEMPTS => {
                    warn!(%url, attempt, elapsed = ?start.elapsed(), "fetch failed, retrying: {e}");
                    last_err = Some(e);

                    let base = std::cmp::min(BACKOFF_STEP_MS * attempt as u64, MAX_BACKOFF_MS);
                    let jitter = rand::thread_rng().gen_range(0..=JITTER_MAX_MS);
                    std::thread::sleep(Duration::from_millis(base + jitter));
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_err.unwrap_or_else(|| ApiError::Network("retry loop exhausted".into())))
    }

    /// Writes are sent once; a retry could duplicate a referral.
    fn send<B: Serialize>(
        &self,
        creds: &Credentials,
        method: Method,
        path: &str,
        body: Option<&B>,
        invalidates: &[CacheTag],
    ) -> Result<String, ApiError> {
        let url = self.endpoint(path)?;
        let mut req = self.authorized(creds, method.clone(), url.clone());
        if let Some(b) = body {
            req = req.json(b);
        }

        let text = execute(req)?;
        info!(%method, %url, "backend write ok");

        self.invalidate(invalidates);
        Ok(text)
    }

    fn invalidate(&self, tags: &[CacheTag]) {
        let Some(c) = &self.cache else { return };

        for tag in tags {
            match c.db.with_conn(|conn| cache::invalidate_tag(conn, tag.as_str())) {
                Ok(n) => debug!(tag = tag.as_str(), removed = n, "cache invalidated"),
                Err(e) => warn!(tag = tag.as_str(), "cache invalidation failed: {e}"),
            }
        }
    }
}

impl ReferralApi for ApiClient {
    fn list_jobs(&self, creds: &Credentials) -> Result<Vec<Job>, ApiError> {
        self.get_json(creds, "jobs", CacheTag::Job)
    }

    fn create_job(&self, creds: &Credentials, job: &NewJob) -> Result<Job, ApiError> {
        let body = self.send(creds, Method::POST, "jobs", Some(job), &[CacheTag::Job])?;
        decode(&body)
    }

    fn refer_candidate(
        &self,
        creds: &Credentials,
        referral: &NewReferral,
    ) -> Result<ReferralRecord, ApiError> {
        let body = self.send(
            creds,
            Method::POST,
            "referrals",
            Some(referral),
            &[CacheTag::Referral, CacheTag::Notification],
        )?;
        decode(&body)
    }

    fn my_referrals(&self, creds: &Credentials) -> Result<Vec<ReferralRecord>, ApiError> {
        self.get_json(creds, "referrals", CacheTag::Referral)
    }

    fn get_referral(&self, creds: &Credentials, id: i64) -> Result<ReferralRecord, ApiError> {
        self.get_json(creds, &format!("referrals/{id}"), CacheTag::Referral)
    }

    fn list_bonuses(&self, creds: &Credentials) -> Result<Vec<Bonus>, ApiError> {
        self.get_json(creds, "bonuses", CacheTag::Bonus)
    }

    fn mark_bonus_paid(&self, creds: &Credentials, id: i64) -> Result<(), ApiError> {
        self.send::<()>(
            creds,
            Method::PATCH,
            &format!("bonuses/{id}/paid"),
            None,
            &[CacheTag::Bonus, CacheTag::Referral],
        )?;
        Ok(())
    }

    fn notifications(&self, creds: &Credentials) -> Result<Vec<Notification>, ApiError> {
        self.get_json(creds, "notifications", CacheTag::Notification)
    }

    fn mark_notification_read(&self, creds: &Credentials, id: i64) -> Result<(), ApiError> {
        self.send::<()>(
            creds,
            Method::PATCH,
            &format!("notifications/{id}/read"),
            None,
            &[CacheTag::Notification],
        )?;
        Ok(())
    }
}

fn execute(req: RequestBuilder) -> Result<String, ApiError> {
    let resp = req.send().map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let text = resp
        .text()
        .map_err(|e| ApiError::Network(e.to_string()))?;

    check_status(status, text)
}

fn check_status(status: StatusCode, text: String) -> Result<String, ApiError> {
    match status {
        s if s.is_success() => Ok(text),
        StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
        StatusCode::NOT_FOUND => Err(ApiError::NotFound),
        s => Err(ApiError::Status(s.as_u16(), text)),
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn now_unix() -> i64 {
    chrono::Utc::now().timestamp()
}
