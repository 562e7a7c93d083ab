use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use notelab::api::{self, AppState};
use notelab::db;
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot`

// Helper to build the app over an in-memory database
async fn setup_app() -> Router {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    api::api_router(AppState::new(db))
}

fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().uri(uri).method(method);
    match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&v).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn create_user(app: &Router, email: &str, name: &str) {
    let (status, _) = send(
        app,
        request(
            Method::POST,
            "/users",
            Some(json!({ "email": email, "name": name })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

async fn create_note(app: &Router, email: &str, title: &str, content: &str) {
    let (status, _) = send(
        app,
        request(
            Method::POST,
            &format!("/users/{}/notes", email),
            Some(json!({ "title": title, "content": content })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_create_and_list_users() {
    let app = setup_app().await;

    create_user(&app, "alice@example.com", "Alice").await;
    create_user(&app, "bob@example.com", "Bob").await;

    let (status, body) = send(&app, request(Method::GET, "/users", None)).await;
    assert_eq!(status, StatusCode::OK);

    let users: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(users.len(), 2);
    let emails: Vec<&str> = users.iter().map(|u| u["email"].as_str().unwrap()).collect();
    assert!(emails.contains(&"alice@example.com"));
    assert!(emails.contains(&"bob@example.com"));
}

#[tokio::test]
async fn test_get_user_by_email() {
    let app = setup_app().await;
    create_user(&app, "alice@example.com", "Alice").await;

    let (status, body) = send(&app, request(Method::GET, "/users/alice@example.com", None)).await;
    assert_eq!(status, StatusCode::OK);

    let user: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(user["email"], "alice@example.com");
    assert_eq!(user["name"], "Alice");
}

#[tokio::test]
async fn test_created_note_appears_in_owned_notes() {
    let app = setup_app().await;
    create_user(&app, "alice@example.com", "Alice").await;
    create_note(&app, "alice@example.com", "groceries", "milk, eggs").await;

    let (status, body) = send(
        &app,
        request(Method::GET, "/users/alice@example.com/ownedNotes", None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let notes: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["title"], "groceries");
    assert_eq!(notes[0]["content"], "milk, eggs");
}

#[tokio::test]
async fn test_deleted_note_disappears_from_owned_notes() {
    let app = setup_app().await;
    create_user(&app, "alice@example.com", "Alice").await;
    create_note(&app, "alice@example.com", "groceries", "milk").await;
    create_note(&app, "alice@example.com", "todo", "call bank").await;

    let (status, _) = send(
        &app,
        request(
            Method::DELETE,
            "/users/alice@example.com/notes/groceries",
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        request(Method::GET, "/users/alice@example.com/ownedNotes", None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let notes: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["title"], "todo");
}

#[tokio::test]
async fn test_edit_note_replaces_content() {
    let app = setup_app().await;
    create_user(&app, "alice@example.com", "Alice").await;
    create_note(&app, "alice@example.com", "draft", "v1").await;

    let (status, _) = send(
        &app,
        request(
            Method::PUT,
            "/users/alice@example.com/notes",
            Some(json!({ "title": "draft", "content": "v2" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(
        &app,
        request(Method::GET, "/users/alice@example.com/ownedNotes", None),
    )
    .await;
    let notes: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(notes[0]["content"], "v2");
}

#[tokio::test]
async fn test_grant_edit_shows_note_to_grantee() {
    let app = setup_app().await;
    create_user(&app, "alice@example.com", "Alice").await;
    create_user(&app, "bob@example.com", "Bob").await;
    create_note(&app, "alice@example.com", "shared", "draft").await;

    // Before the grant, Bob sees nothing
    let (status, body) = send(
        &app,
        request(
            Method::GET,
            "/users/bob@example.com/allowedEditNotes",
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let notes: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert!(notes.is_empty());

    let (status, _) = send(
        &app,
        request(
            Method::PUT,
            "/users/alice@example.com/allowed/bob@example.com/shared",
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        request(
            Method::GET,
            "/users/bob@example.com/allowedEditNotes",
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let notes: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["title"], "shared");

    // The note does not show up among Bob's owned notes
    let (_, body) = send(
        &app,
        request(Method::GET, "/users/bob@example.com/ownedNotes", None),
    )
    .await;
    let owned: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert!(owned.is_empty());
}

#[tokio::test]
async fn test_grantee_can_edit_shared_note() {
    let app = setup_app().await;
    create_user(&app, "alice@example.com", "Alice").await;
    create_user(&app, "bob@example.com", "Bob").await;
    create_note(&app, "alice@example.com", "shared", "draft").await;

    let (status, _) = send(
        &app,
        request(
            Method::PUT,
            "/users/alice@example.com/allowed/bob@example.com/shared",
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Bob edits through his own email
    let (status, _) = send(
        &app,
        request(
            Method::PUT,
            "/users/bob@example.com/notes",
            Some(json!({ "title": "shared", "content": "bob was here" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Alice sees the new content
    let (_, body) = send(
        &app,
        request(Method::GET, "/users/alice@example.com/ownedNotes", None),
    )
    .await;
    let notes: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(notes[0]["content"], "bob was here");
}

#[tokio::test]
async fn test_repeat_grant_is_idempotent() {
    let app = setup_app().await;
    create_user(&app, "alice@example.com", "Alice").await;
    create_user(&app, "bob@example.com", "Bob").await;
    create_note(&app, "alice@example.com", "shared", "draft").await;

    for _ in 0..2 {
        let (status, _) = send(
            &app,
            request(
                Method::PUT,
                "/users/alice@example.com/allowed/bob@example.com/shared",
                None,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = send(
        &app,
        request(
            Method::GET,
            "/users/bob@example.com/allowedEditNotes",
            None,
        ),
    )
    .await;
    let notes: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(notes.len(), 1);
}

#[tokio::test]
async fn test_validate_body_returns_literal_valid() {
    let app = setup_app().await;

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/validateBody",
            Some(json!({ "email": "alice@example.com", "name": "Alice" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "valid");
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_app().await;

    let (status, body) = send(&app, request(Method::GET, "/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    let v: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["status"], "ok");
    assert_eq!(v["service"], "notelab");
}
