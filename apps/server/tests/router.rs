use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use wichtel::domain::config::AppConfig;
use wichtel::domain::constants::TOKEN_LENGTH;
use wichtel::kernel::prelude::AppState;

fn app() -> Router {
    let cfg = AppConfig::default();
    let slices = wichtel::init(&cfg).expect("feature slices initialize");
    let state = AppState::builder()
        .config(cfg)
        .register_slices(slices)
        .build()
        .expect("state builds");
    wichtel_server::router::init(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = body.map_or_else(
        || Request::builder().method(method).uri(uri).body(Body::empty()).unwrap(),
        |payload| {
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        },
    );

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value: Value =
        if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, value)
}

async fn add(app: &Router, name: &str, email: &str) -> (StatusCode, Value) {
    send(app, "POST", "/participants", Some(json!({ "name": name, "email": email }))).await
}

#[tokio::test]
async fn health_reports_up() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "up");
}

#[tokio::test]
async fn first_participant_becomes_administrator() {
    let app = app();
    let (status, body) = add(&app, "Alice", "alice@example.com").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Successfully added Alice (Administrator)!");

    let (_, body) = add(&app, "Bob", "bob@example.com").await;
    assert_eq!(body["message"], "Successfully added Bob!");
}

#[tokio::test]
async fn duplicate_names_are_rejected() {
    let app = app();
    add(&app, "Alice", "alice@example.com").await;

    let (status, body) = add(&app, "Alice", "other@example.com").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "A participant with the name 'Alice' was already added.");
}

#[tokio::test]
async fn malformed_email_is_rejected() {
    let app = app();
    let (status, body) = add(&app, "Alice", "not-an-address").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Please enter a valid email address.");
}

#[tokio::test]
async fn status_never_exposes_emails_or_mapping() {
    let app = app();
    add(&app, "Alice", "alice@example.com").await;
    add(&app, "Bob", "bob@example.com").await;

    let (status, body) = send(&app, "GET", "/status", None).await;
    assert_eq!(status, StatusCode::OK);

    let participants = body["participants"].as_array().unwrap();
    assert_eq!(participants.len(), 2);
    assert_eq!(participants[0]["name"], "Alice");
    assert_eq!(participants[0]["is_admin"], true);
    assert!(participants[0].get("email").is_none());
    assert_eq!(body["assignments_made"], false);
    assert_eq!(body["pending_confirmations"], 0);
}

#[tokio::test]
async fn administrator_removal_is_blocked_by_default() {
    let app = app();
    add(&app, "Alice", "alice@example.com").await;
    add(&app, "Bob", "bob@example.com").await;

    let (status, body) =
        send(&app, "POST", "/participants/remove", Some(json!({ "name": "Alice" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "The administrator cannot be removed.");

    let (status, body) =
        send(&app, "POST", "/participants/remove", Some(json!({ "name": "Bob" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Successfully removed Bob!");
}

#[tokio::test]
async fn removing_unknown_participant_fails() {
    let app = app();
    add(&app, "Alice", "alice@example.com").await;

    let (status, body) =
        send(&app, "POST", "/participants/remove", Some(json!({ "name": "Nobody" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Participant 'Nobody' not found.");
}

#[tokio::test]
async fn assignment_needs_enough_participants() {
    let app = app();
    add(&app, "Alice", "alice@example.com").await;

    let (status, body) = send(&app, "POST", "/assign", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Need at least 2 participants to assign Secret Santas.");
}

#[tokio::test]
async fn malformed_confirmation_token_is_rejected() {
    let app = app();
    let (status, body) = send(&app, "GET", "/confirm/short", None).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Invalid confirmation token format.");
}

#[tokio::test]
async fn full_confirmation_flow_distributes_assignments() {
    let app = app();
    add(&app, "Alice", "alice@example.com").await;
    add(&app, "Bob", "bob@example.com").await;
    add(&app, "Carol", "carol@example.com").await;

    // Organizer starts the workflow; only a confirmation mail goes out.
    let (status, body) = send(&app, "POST", "/assign", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        body["message"].as_str().unwrap().starts_with("Confirmation email sent to alice@example.com")
    );

    let (_, outbox) = send(&app, "GET", "/outbox", None).await;
    let outbox = outbox.as_array().unwrap().clone();
    assert_eq!(outbox.len(), 1);
    assert_eq!(outbox[0]["recipient"], "alice@example.com");
    assert_eq!(outbox[0]["subject"], "Confirm Secret Santa Assignments");

    let (_, state) = send(&app, "GET", "/status", None).await;
    assert_eq!(state["pending_confirmations"], 1);
    assert_eq!(state["assignments_made"], false);

    // The confirmation link carries the single-use token.
    let mail_body = outbox[0]["body"].as_str().unwrap();
    let start = mail_body.find("/confirm/").unwrap() + "/confirm/".len();
    let token = &mail_body[start..start + TOKEN_LENGTH];

    let (status, body) = send(&app, "GET", &format!("/confirm/{token}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Secret Santa assignments have been sent!");

    // One assignment mail per giver, on top of the confirmation mail.
    let (_, outbox) = send(&app, "GET", "/outbox", None).await;
    let outbox = outbox.as_array().unwrap().clone();
    assert_eq!(outbox.len(), 4);
    let recipients: Vec<&str> =
        outbox[1..].iter().map(|m| m["recipient"].as_str().unwrap()).collect();
    for address in ["alice@example.com", "bob@example.com", "carol@example.com"] {
        assert!(recipients.contains(&address), "missing assignment mail for {address}");
    }

    // Identities are gone, the mapping is committed, the token is spent.
    let (_, state) = send(&app, "GET", "/status", None).await;
    assert_eq!(state["participants"].as_array().unwrap().len(), 0);
    assert_eq!(state["assignments_made"], true);
    assert_eq!(state["pending_confirmations"], 0);

    let (status, _) = send(&app, "GET", &format!("/confirm/{token}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn reset_restores_initial_state() {
    let app = app();
    add(&app, "Alice", "alice@example.com").await;
    add(&app, "Bob", "bob@example.com").await;
    send(&app, "POST", "/assign", None).await;

    let (status, body) = send(&app, "POST", "/reset", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Game has been reset.");

    let (_, state) = send(&app, "GET", "/status", None).await;
    assert_eq!(state["participants"].as_array().unwrap().len(), 0);
    assert_eq!(state["assignments_made"], false);
    assert_eq!(state["pending_confirmations"], 0);

    // The admin role restarts with the next registration.
    let (_, body) = add(&app, "Dave", "dave@example.com").await;
    assert_eq!(body["message"], "Successfully added Dave (Administrator)!");
}
