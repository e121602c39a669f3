use crate::domain::referral::StatusHistoryEntry;
use crate::router::handle;
use crate::tests::utils::{read_body, referral_record, token_with_role, FakeApi};
use astra::Body;
use http::{Method, Request};

fn fake_with_referrals() -> FakeApi {
    FakeApi {
        referrals: vec![
            referral_record(
                7,
                "Ada Lovelace",
                "Rejected",
                Some("Referral Accepted"),
                vec![
                    StatusHistoryEntry::new("Referral Submitted", "2024-01-10T09:00:00Z"),
                    StatusHistoryEntry::new("Referral Under Review", "2024-01-12T09:00:00Z"),
                    StatusHistoryEntry::new("Referral Accepted", "2024-01-14T09:00:00Z"),
                    StatusHistoryEntry::new("Rejected", "2024-01-16T09:00:00Z"),
                ],
            ),
            referral_record(
                8,
                "Alan Turing",
                "Accepted",
                None,
                vec![
                    StatusHistoryEntry::new("Referral Submitted", "2024-01-10T09:00:00Z"),
                    StatusHistoryEntry::new("Accepted", "2024-02-01T09:00:00Z"),
                ],
            ),
        ],
        ..FakeApi::default()
    }
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(t) = token {
        builder = builder.header("Cookie", format!("token={t}"));
    }
    builder.body(Body::empty()).unwrap()
}

#[test]
fn tracking_page_renders_rejected_timeline() {
    let api = fake_with_referrals();
    let token = token_with_role("employee");

    let resp = handle(get("/referrals/7", Some(&token)), &api).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("Ada Lovelace"));
    assert_eq!(body.matches(r#"data-state="completed""#).count(), 2);
    assert_eq!(body.matches(r#"data-state="failed""#).count(), 4);
    assert!(body.contains("33%"));
    assert!(body.contains("Jan 14, 2024"));
    assert!(body.contains("<strong>Rejected</strong>"));
}

#[test]
fn tracking_page_renders_accepted_timeline() {
    let api = fake_with_referrals();
    let token = token_with_role("employee");

    let resp = handle(get("/referrals/8", Some(&token)), &api).unwrap();
    let body = read_body(resp);

    assert_eq!(body.matches(r#"data-state="completed""#).count(), 6);
    assert!(body.contains("100%"));
    assert!(body.contains("<strong>Selected</strong>"));
    assert!(body.contains("Feb 1, 2024"));
}

#[test]
fn bearer_header_is_accepted() {
    let api = fake_with_referrals();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/referrals/8")
        .header("Authorization", format!("Bearer {}", token_with_role("employee")))
        .body(Body::empty())
        .unwrap();

    assert_eq!(handle(req, &api).unwrap().status(), 200);
}

#[test]
fn unknown_referral_is_not_found() {
    let api = fake_with_referrals();
    let token = token_with_role("employee");

    let err = handle(get("/referrals/999", Some(&token)), &api).unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[test]
fn non_numeric_referral_id_is_bad_request() {
    let api = fake_with_referrals();
    let token = token_with_role("employee");

    let err = handle(get("/referrals/abc", Some(&token)), &api).unwrap_err();
    assert_eq!(err.status_code(), 400);
}

#[test]
fn missing_credentials_are_unauthorized() {
    let api = fake_with_referrals();

    let err = handle(get("/referrals/7", None), &api).unwrap_err();
    assert_eq!(err.status_code(), 401);
}

#[test]
fn unknown_path_is_not_found() {
    let api = fake_with_referrals();

    let err = handle(get("/nowhere", None), &api).unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[test]
fn referral_list_shows_badges_and_progress() {
    let api = fake_with_referrals();
    let token = token_with_role("employee");

    let resp = handle(get("/", Some(&token)), &api).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("Ada Lovelace"));
    assert!(body.contains("Alan Turing"));
    assert!(body.contains("badge-danger"));
    assert!(body.contains("Selected"));
    assert!(body.contains(r#"href="/referrals/7""#));
    assert!(body.contains("Nothing new."));
}

#[test]
fn referral_list_survives_notification_outage() {
    let api = FakeApi {
        fail_notifications: true,
        ..fake_with_referrals()
    };
    let token = token_with_role("employee");

    let resp = handle(get("/", Some(&token)), &api).unwrap();
    assert_eq!(resp.status(), 200);
}
