use crate::api::models::Bonus;
use crate::router::handle;
use crate::tests::utils::{read_body, token_with_role, FakeApi};
use astra::Body;
use http::{Method, Request};

fn bonuses() -> Vec<Bonus> {
    vec![
        Bonus {
            id: 1,
            referral_id: 7,
            candidate_name: "Ada Lovelace".into(),
            referred_by: "Grace Hopper".into(),
            amount: 1000.0,
            status: "pending".into(),
            paid_at: None,
        },
        Bonus {
            id: 2,
            referral_id: 8,
            candidate_name: "Alan Turing".into(),
            referred_by: "Grace Hopper".into(),
            amount: 500.0,
            status: "paid".into(),
            paid_at: Some("2024-03-01T10:00:00Z".into()),
        },
    ]
}

fn request(method: Method, uri: &str, role: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Cookie", format!("token={}", token_with_role(role)))
        .body(Body::empty())
        .unwrap()
}

#[test]
fn bonus_table_shows_totals() {
    let api = FakeApi {
        bonuses: bonuses(),
        ..FakeApi::default()
    };

    let body = read_body(handle(request(Method::GET, "/bonuses", "employee"), &api).unwrap());
    assert!(body.contains("Pending: <strong>$1000.00</strong>"));
    assert!(body.contains("Paid: <strong>$500.00</strong>"));
    assert!(body.contains("Mar 1, 2024"));
    assert!(!body.contains("Mark paid"));
}

#[test]
fn admin_sees_mark_paid_for_pending_only() {
    let api = FakeApi {
        bonuses: bonuses(),
        ..FakeApi::default()
    };

    let body = read_body(handle(request(Method::GET, "/bonuses", "admin"), &api).unwrap());
    assert_eq!(body.matches("Mark paid").count(), 1);
    assert!(body.contains(r#"action="/bonuses/1/paid""#));
}

#[test]
fn marking_paid_requires_admin() {
    let api = FakeApi::default();

    let err = handle(request(Method::POST, "/bonuses/1/paid", "employee"), &api).unwrap_err();
    assert_eq!(err.status_code(), 403);
    assert!(api.writes().is_empty());

    let resp = handle(request(Method::POST, "/bonuses/1/paid", "recruiter"), &api).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers()["Location"], "/bonuses");
    assert_eq!(api.writes(), vec!["bonus_paid:1".to_string()]);
}
