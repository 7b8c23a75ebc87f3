use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// These tests exercise a running instance end to end. Start the server and a
// provisioned database, then run `cargo test -- --ignored`. The target can be
// overridden with SERVER_URL.

#[derive(Debug, Serialize, Deserialize)]
struct User {
    id: Uuid,
    name: String,
    email: String,
    date_of_birth: DateTime<Utc>,
}

fn server_url() -> String {
    std::env::var("SERVER_URL").unwrap_or_else(|_| "http://localhost:8080".into())
}

fn jane(id: Uuid) -> User {
    User {
        id,
        name: "Jane Doe".into(),
        email: "j_d@example.com".into(),
        date_of_birth: Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap(),
    }
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn save_and_retrieve_round_trip() {
    let server = server_url();
    let client = reqwest::Client::new();
    let user = jane(Uuid::new_v4());

    // a fresh random id must not exist yet
    let resp = client
        .get(format!("{}/{}", server, user.id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    assert_eq!(resp.text().await.unwrap(), "User not found");

    let resp = client
        .post(format!("{}/save", server))
        .json(&user)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
    let saved: User = resp.json().await.unwrap();
    assert_eq!(saved.id, user.id);

    let resp = client
        .get(format!("{}/{}", server, user.id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let fetched: User = resp.json().await.unwrap();
    assert_eq!(fetched.id, user.id);
    assert_eq!(fetched.name, user.name);
    assert_eq!(fetched.email, user.email);
    assert_eq!(fetched.date_of_birth, user.date_of_birth);
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn save_without_an_id_assigns_one() {
    let server = server_url();
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/save", server))
        .json(&serde_json::json!({
            "name": "Jane Doe",
            "email": "j_d@example.com",
            "date_of_birth": "1990-01-01T00:00:00Z"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);

    let saved: User = resp.json().await.unwrap();
    assert!(!saved.id.is_nil());

    let resp = client
        .get(format!("{}/{}", server, saved.id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn malformed_payload_is_rejected() {
    let server = server_url();
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/save", server))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
}
