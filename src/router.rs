use crate::api::models::{NewJob, NewReferral};
use crate::api::ReferralApi;
use crate::auth::Credentials;
use crate::domain::derive_timeline;
use crate::errors::ServerError;
use crate::responses::{html_fragment, html_response, see_other, ResultResp};
use crate::templates::{pages, Viewer};
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use tracing::{debug, info, warn};

const MAX_FORM_BYTES: u64 = 64 * 1024;

pub fn handle(mut req: Request, api: &dyn ReferralApi) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    debug!(%method, %path, "request");

    let creds = credentials(&req);

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => {
            let creds = require(creds)?;
            let referrals = api.my_referrals(&creds)?;
            let notifications = api.notifications(&creds).unwrap_or_else(|e| {
                warn!("notifications unavailable: {e}");
                Vec::new()
            });
            html_response(pages::referrals_page(
                &Viewer::from_credentials(&creds),
                &referrals,
                &notifications,
            ))
        }

        ("GET", ["referrals", id]) => {
            let creds = require(creds)?;
            let record = api.get_referral(&creds, parse_id(id)?)?;
            let view = derive_timeline(&record);
            html_response(pages::track_page(
                &Viewer::from_credentials(&creds),
                &record,
                &view,
            ))
        }

        ("GET", ["jobs"]) => {
            let creds = require(creds)?;
            let jobs = api.list_jobs(&creds)?;
            html_response(pages::jobs_page(&Viewer::from_credentials(&creds), &jobs))
        }

        ("POST", ["jobs"]) => {
            let creds = require_admin(creds)?;
            let form = read_form(&mut req)?;
            let job = new_job_from_form(&form)?;
            let created = api.create_job(&creds, &job)?;
            info!(job_id = created.id, title = %created.title, "job posted");
            see_other("/jobs")
        }

        ("POST", ["jobs", id, "refer"]) => {
            let creds = require(creds)?;
            let job_id = parse_id(id)?;
            let form = read_form(&mut req)?;
            let referral = new_referral_from_form(job_id, &form)?;
            let created = api.refer_candidate(&creds, &referral)?;
            info!(referral_id = created.id, job_id, "referral submitted");
            see_other(&format!("/referrals/{}", created.id))
        }

        ("GET", ["bonuses"]) => {
            let creds = require(creds)?;
            let bonuses = api.list_bonuses(&creds)?;
            html_response(pages::bonuses_page(
                &Viewer::from_credentials(&creds),
                &bonuses,
            ))
        }

        ("POST", ["bonuses", id, "paid"]) => {
            let creds = require_admin(creds)?;
            let bonus_id = parse_id(id)?;
            api.mark_bonus_paid(&creds, bonus_id)?;
            info!(bonus_id, "bonus marked paid");
            see_other("/bonuses")
        }

        ("GET", ["notifications", "badge"]) => {
            let creds = require(creds)?;
            // Polled every 30s; a backend hiccup should just hide the badge.
            let unread = match api.notifications(&creds) {
                Ok(list) => list.iter().filter(|n| !n.read).count(),
                Err(e) => {
                    warn!("notification poll failed: {e}");
                    0
                }
            };
            html_fragment(pages::notification_badge(unread))
        }

        ("POST", ["notifications", id, "read"]) => {
            let creds = require(creds)?;
            api.mark_notification_read(&creds, parse_id(id)?)?;
            see_other("/")
        }

        _ => Err(ServerError::NotFound),
    }
}

fn credentials(req: &Request) -> Option<Credentials> {
    let header = |name: &str| req.headers().get(name).and_then(|v| v.to_str().ok());
    Credentials::from_headers(header("cookie"), header("authorization"))
}

fn require(creds: Option<Credentials>) -> Result<Credentials, ServerError> {
    let creds = creds.ok_or_else(|| ServerError::Unauthorized("sign in required".into()))?;

    if creds.is_expired(chrono::Utc::now().timestamp()) {
        return Err(ServerError::Unauthorized("session expired".into()));
    }
    Ok(creds)
}

fn require_admin(creds: Option<Credentials>) -> Result<Credentials, ServerError> {
    let creds = require(creds)?;
    if !creds.is_admin() {
        return Err(ServerError::Forbidden("admin access required".into()));
    }
    Ok(creds)
}

fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse::<i64>()
        .map_err(|_| ServerError::BadRequest(format!("invalid id: {raw}")))
}

fn read_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = String::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES)
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    Ok(parse_form(&body))
}

fn parse_form(body: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(body.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.trim().to_string()))
        .collect()
}

fn required_field(form: &HashMap<String, String>, name: &str) -> Result<String, ServerError> {
    form.get(name)
        .filter(|v| !v.is_empty())
        .cloned()
        .ok_or_else(|| ServerError::BadRequest(format!("missing field: {name}")))
}

fn optional_field(form: &HashMap<String, String>, name: &str) -> Option<String> {
    form.get(name).filter(|v| !v.is_empty()).cloned()
}

fn new_job_from_form(form: &HashMap<String, String>) -> Result<NewJob, ServerError> {
    let bonus_amount = optional_field(form, "bonus_amount")
        .map(|v| {
            v.parse::<f64>()
                .ok()
                .filter(|n| n.is_finite() && *n >= 0.0)
                .ok_or_else(|| ServerError::BadRequest(format!("invalid bonus amount: {v}")))
        })
        .transpose()?;

    Ok(NewJob {
        title: required_field(form, "title")?,
        department: optional_field(form, "department"),
        location: optional_field(form, "location"),
        description: required_field(form, "description")?,
        bonus_amount,
    })
}

fn new_referral_from_form(
    job_id: i64,
    form: &HashMap<String, String>,
) -> Result<NewReferral, ServerError> {
    Ok(NewReferral {
        job_id,
        candidate_name: required_field(form, "candidate_name")?,
        candidate_email: required_field(form, "candidate_email")?,
        note: optional_field(form, "note"),
    })
}
