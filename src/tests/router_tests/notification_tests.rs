use crate::api::models::Notification;
use crate::router::handle;
use crate::tests::utils::{read_body, token_with_role, FakeApi};
use astra::Body;
use http::{Method, Request};

fn notification(id: i64, read: bool) -> Notification {
    Notification {
        id,
        message: format!("Referral update #{id}"),
        read,
        created_at: "2024-01-20T09:00:00Z".into(),
        referral_id: Some(7),
    }
}

fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Cookie", format!("token={}", token_with_role("employee")))
        .body(Body::empty())
        .unwrap()
}

#[test]
fn badge_counts_unread() {
    let api = FakeApi {
        notifications: vec![notification(1, false), notification(2, true), notification(3, false)],
        ..FakeApi::default()
    };

    let resp = handle(request(Method::GET, "/notifications/badge"), &api).unwrap();
    assert_eq!(resp.headers()["Cache-Control"], "no-store");

    let body = read_body(resp);
    assert!(body.contains(">2</a>"));
}

#[test]
fn badge_is_empty_when_backend_fails() {
    let api = FakeApi {
        fail_notifications: true,
        ..FakeApi::default()
    };

    let resp = handle(request(Method::GET, "/notifications/badge"), &api).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(read_body(resp), "");
}

#[test]
fn marking_read_redirects_home() {
    let api = FakeApi::default();

    let resp = handle(request(Method::POST, "/notifications/4/read"), &api).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(api.writes(), vec!["notification_read:4".to_string()]);
}
