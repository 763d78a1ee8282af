use std::path::PathBuf;

use rocket::{
    http::{ContentType, Status},
    local::asynchronous::{Client, LocalResponse},
};

use crate::{
    database::{requests::SubmitResponse, ScoreStore, ScoreSubmission},
    leaderboard::{Leaderboard, LeaderboardEntry},
    Config,
};

const LEADERBOARD_URI: &str = "/api/leaderboard";
const SCORE_URI: &str = "/api/score";

fn test_config(static_dir: &str) -> Config {
    Config {
        database_url: "sqlite::memory:".to_owned(),
        static_dir: PathBuf::from(static_dir),
    }
}

async fn spawn_client_with(config: Config) -> Client {
    let store = ScoreStore::in_memory().await.expect("in-memory store");
    spawn_client_on(store, config).await
}

async fn spawn_client_on(store: ScoreStore, config: Config) -> Client {
    Client::tracked(super::build(store, config))
        .await
        .expect("valid rocket instance")
}

async fn spawn_client() -> Client {
    spawn_client_with(test_config("static")).await
}

async fn deserialize_response<'a, T: rocket::serde::DeserializeOwned>(
    response: LocalResponse<'a>,
) -> rocket::serde::json::serde_json::Result<T> {
    let string = response.into_string().await.unwrap_or_default();
    rocket::serde::json::serde_json::from_str(&string)
}

/// Submits a score and returns the decoded success body.
async fn submit<'a>(
    client: &'a Client,
    submission: &ScoreSubmission,
) -> Result<SubmitResponse, LocalResponse<'a>> {
    let response = client.post(SCORE_URI).json(submission).dispatch().await;
    if response.status() != Status::Ok {
        return Err(response);
    }

    Ok(deserialize_response(response).await.unwrap())
}

/// Submits a raw body and returns the response status with its text.
async fn submit_raw(client: &Client, body: &'static str) -> (Status, String) {
    let response = client
        .post(SCORE_URI)
        .header(ContentType::JSON)
        .body(body)
        .dispatch()
        .await;
    let status = response.status();
    (status, response.into_string().await.unwrap_or_default())
}

async fn get_leaderboard(client: &Client) -> Leaderboard {
    let response = client.get(LEADERBOARD_URI).dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    deserialize_response(response).await.unwrap()
}

fn scores(leaderboard: &Leaderboard) -> Vec<(String, i64)> {
    leaderboard
        .iter()
        .map(|entry| (entry.name.clone(), entry.score))
        .collect()
}

#[rocket::async_test]
async fn empty_leaderboard() {
    let client = spawn_client().await;

    let response = client.get(LEADERBOARD_URI).dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.into_string().await.unwrap(), "[]");
}

#[rocket::async_test]
async fn best_score_replaces_previous() {
    let client = spawn_client().await;

    for score in [50, 80] {
        let response = submit(&client, &ScoreSubmission::new("A", score)).await;
        assert_eq!(response.unwrap(), SubmitResponse { success: true });
    }

    let leaderboard = get_leaderboard(&client).await;
    assert_eq!(scores(&leaderboard), vec![("A".to_owned(), 80)]);
}

/// A lower score is accepted but does not change the record
#[rocket::async_test]
async fn worse_score_is_ignored() {
    let client = spawn_client().await;

    submit(&client, &ScoreSubmission::new("A", 10)).await.unwrap();
    let before: Vec<LeaderboardEntry> = get_leaderboard(&client).await.iter().cloned().collect();

    submit(&client, &ScoreSubmission::new("B", 20)).await.unwrap();
    let response = submit(&client, &ScoreSubmission::new("A", 5)).await;
    assert_eq!(response.unwrap(), SubmitResponse { success: true });
    let response = submit(&client, &ScoreSubmission::new("A", 10)).await;
    assert!(response.is_ok());

    let leaderboard = get_leaderboard(&client).await;
    assert_eq!(
        scores(&leaderboard),
        vec![("B".to_owned(), 20), ("A".to_owned(), 10)]
    );

    let entry_a = leaderboard.iter().find(|entry| entry.name == "A").unwrap();
    assert_eq!(entry_a, &before[0]);
}

#[rocket::async_test]
async fn leaderboard_is_capped_and_sorted() {
    let client = spawn_client().await;

    for i in 0..14 {
        let name = format!("player{}", i);
        let score = (i * 37) % 23 - 5;
        submit(&client, &ScoreSubmission::new(name, score)).await.unwrap();
    }

    let leaderboard = get_leaderboard(&client).await;
    assert_eq!(leaderboard.len(), 10);
    let entries: Vec<_> = leaderboard.iter().collect();
    assert!(entries.windows(2).all(|pair| pair[0].score >= pair[1].score));
}

#[rocket::async_test]
async fn missing_fields_are_rejected() {
    let client = spawn_client().await;

    let missing_name = ScoreSubmission {
        name: None,
        score: Some(10),
    };
    let missing_score = ScoreSubmission {
        name: Some("A".to_owned()),
        score: None,
    };
    let empty_name = ScoreSubmission::new("", 10);

    for submission in [missing_name, missing_score, empty_name] {
        let response = submit(&client, &submission).await.unwrap_err();
        assert_eq!(response.status(), Status::BadRequest);
        assert_eq!(
            response.into_string().await.unwrap(),
            r#"{"error":"Invalid data"}"#
        );
    }

    assert!(get_leaderboard(&client).await.is_empty());
}

#[rocket::async_test]
async fn malformed_bodies_are_rejected() {
    let client = spawn_client().await;

    for body in [
        r#"{"score": 10}"#,
        r#"{"name": "A"}"#,
        r#"{"name": "A", "score": "ten"}"#,
        "not json",
        "",
    ] {
        let (status, text) = submit_raw(&client, body).await;
        assert_eq!(status, Status::BadRequest, "body: {}", body);
        assert_eq!(text, r#"{"error":"Invalid data"}"#);
    }

    assert!(get_leaderboard(&client).await.is_empty());
}

#[rocket::async_test]
async fn entries_carry_name_score_and_date() {
    let client = spawn_client().await;
    submit(&client, &ScoreSubmission::new("A", 10)).await.unwrap();

    let response = client.get(LEADERBOARD_URI).dispatch().await;
    let value: rocket::serde::json::Value = deserialize_response(response).await.unwrap();
    let entry = &value[0];
    assert_eq!(entry["name"], "A");
    assert_eq!(entry["score"], 10);
    assert!(entry["date"].as_i64().unwrap() > 0);
}

#[rocket::async_test]
async fn index_page_is_served() {
    let client = spawn_client().await;

    let response = client.get("/").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.content_type(), Some(ContentType::HTML));
}

#[rocket::async_test]
async fn missing_index_page_is_not_found() {
    let client = spawn_client_with(test_config("no_such_static_dir")).await;

    let response = client.get("/").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
}

/// Requests made after the database goes away fail cleanly and the server keeps answering
#[rocket::async_test]
async fn storage_failure_is_internal_error() {
    let store = ScoreStore::in_memory().await.expect("in-memory store");
    let client = spawn_client_on(store.clone(), test_config("static")).await;
    store.close().await;

    const INTERNAL_ERROR: &str = r#"{"error":"Internal server error"}"#;
    for _ in 0..2 {
        let response = client.get(LEADERBOARD_URI).dispatch().await;
        assert_eq!(response.status(), Status::InternalServerError);
        assert_eq!(response.into_string().await.unwrap(), INTERNAL_ERROR);

        let response = submit(&client, &ScoreSubmission::new("A", 10))
            .await
            .unwrap_err();
        assert_eq!(response.status(), Status::InternalServerError);
        assert_eq!(response.into_string().await.unwrap(), INTERNAL_ERROR);
    }

    let response = submit(&client, &ScoreSubmission::new("", 10)).await.unwrap_err();
    assert_eq!(response.status(), Status::BadRequest);
}
