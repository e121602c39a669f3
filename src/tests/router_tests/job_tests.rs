use crate::api::models::Job;
use crate::router::handle;
use crate::tests::utils::{read_body, token_with_role, FakeApi};
use astra::Body;
use http::{Method, Request};

fn job(id: i64, title: &str, status: &str) -> Job {
    Job {
        id,
        title: title.to_string(),
        department: Some("Infrastructure".to_string()),
        location: Some("Remote".to_string()),
        description: "Keep the lights on.".to_string(),
        bonus_amount: Some(1500.0),
        status: status.to_string(),
        posted_at: "2024-01-01".to_string(),
    }
}

fn form_post(uri: &str, token: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Cookie", format!("token={token}"))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.as_bytes().to_vec()))
        .unwrap()
}

#[test]
fn job_board_lists_only_open_jobs() {
    let api = FakeApi {
        jobs: vec![job(1, "Site Reliability Engineer", "open"), job(2, "Archivist", "closed")],
        ..FakeApi::default()
    };
    let req = Request::builder()
        .method(Method::GET)
        .uri("/jobs")
        .header("Cookie", format!("token={}", token_with_role("employee")))
        .body(Body::empty())
        .unwrap();

    let body = read_body(handle(req, &api).unwrap());
    assert!(body.contains("Site Reliability Engineer"));
    assert!(!body.contains("Archivist"));
    assert!(body.contains("$1500.00"));
    assert!(body.contains(r#"action="/jobs/1/refer""#));
    // Employees don't get the posting form.
    assert!(!body.contains("Post a job"));
}

#[test]
fn referring_a_candidate_redirects_to_tracking() {
    let api = FakeApi::default();
    let token = token_with_role("employee");

    let resp = handle(
        form_post(
            "/jobs/1/refer",
            &token,
            "candidate_name=Ada+Lovelace&candidate_email=ada%40example.com",
        ),
        &api,
    )
    .unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers()["Location"], "/referrals/55");
    assert_eq!(api.writes(), vec!["refer:1:ada@example.com".to_string()]);
}

#[test]
fn incomplete_referral_is_rejected() {
    let api = FakeApi::default();
    let token = token_with_role("employee");

    let err = handle(form_post("/jobs/1/refer", &token, "candidate_name=Ada"), &api).unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert!(api.writes().is_empty());
}

#[test]
fn posting_a_job_requires_admin() {
    let api = FakeApi::default();
    let form = "title=SRE&description=Pager+duty";

    let err = handle(form_post("/jobs", &token_with_role("employee"), form), &api).unwrap_err();
    assert_eq!(err.status_code(), 403);

    let resp = handle(form_post("/jobs", &token_with_role("admin"), form), &api).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(api.writes(), vec!["create_job:SRE".to_string()]);
}
