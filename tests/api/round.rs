use std::sync::Arc;

use lyric_match_back::{
    dao::text_generator::{GenerationError, TextGenerator},
    state::catalog::Song,
};
use reqwest::{StatusCode, header};
use serde_json::{Value, json};

use crate::helpers::{ALLOWED_ORIGIN, PanickingGenerator, ScriptedGenerator, TestApp};

async fn get_json(app: &TestApp, path: &str) -> (StatusCode, Value) {
    let response = reqwest::get(app.url(path))
        .await
        .expect("Failed to execute request.");
    let status = response.status();
    (status, response.json().await.expect("Failed to parse body."))
}

async fn post_check(app: &TestApp, body: Value) -> (StatusCode, Value) {
    let response = reqwest::Client::new()
        .post(app.url("/check"))
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request.");
    let status = response.status();
    (status, response.json().await.expect("Failed to parse body."))
}

#[tokio::test]
async fn lyrics_start_round_with_song_details() {
    let generator = ScriptedGenerator::new(vec![Ok("Hello from the other side".into())]);
    let app = TestApp::spawn(Song::new("Hello", "Adele"), Some(generator)).await;

    let (status, body) = get_json(&app, "/lyrics").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "snippet": "Hello from the other side", "title": "Hello", "artist": "Adele" })
    );
}

#[tokio::test]
async fn lyrics_failure_is_encoded_in_payload() {
    let generator = ScriptedGenerator::new(vec![Err(GenerationError::Timeout)]);
    let app = TestApp::spawn(Song::new("Hello", "Adele"), Some(generator)).await;

    let (status, body) = get_json(&app, "/lyrics").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "snippet": "Error fetching lyrics.", "title": null, "artist": null })
    );
}

#[tokio::test]
async fn hint_before_round_is_informative() {
    let app = TestApp::spawn(Song::new("Hello", "Adele"), Some(ScriptedGenerator::new(Vec::new()))).await;

    let (status, body) = get_json(&app, "/hint").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "hint": "No song has been generated yet! Please generate a lyric first." })
    );
}

#[tokio::test]
async fn hints_follow_round_progress() {
    let generator = ScriptedGenerator::new(vec![
        Ok("snippet".into()),
        Ok("Pop, Dancing & Nightlife".into()),
    ]);
    let app = TestApp::spawn(Song::new("Uptown Funk", "Mark Ronson ft. Bruno Mars"), Some(generator.clone())).await;
    get_json(&app, "/lyrics").await;

    let mut hints = Vec::new();
    for _ in 0..5 {
        let (status, body) = get_json(&app, "/hint").await;
        assert_eq!(status, StatusCode::OK);
        hints.push(body["hint"].as_str().unwrap().to_string());
    }

    assert_eq!(
        hints,
        vec![
            "First word: \"Uptown\"",
            "Artist: \"Mark Ronson ft. Bruno Mars\"",
            "Genre & Theme: Pop, Dancing & Nightlife",
            "No more hints available!",
            "No more hints available!",
        ]
    );
    assert_eq!(generator.calls(), 2);
}

#[tokio::test]
async fn genre_hint_failure_uses_fallback() {
    let generator = ScriptedGenerator::new(vec![
        Ok("snippet".into()),
        Err(GenerationError::EmptyResponse),
    ]);
    let app = TestApp::spawn(Song::new("Halo", "Beyoncé"), Some(generator)).await;
    get_json(&app, "/lyrics").await;

    let hints: Vec<Value> = {
        let mut hints = Vec::new();
        for _ in 0..3 {
            hints.push(get_json(&app, "/hint").await.1);
        }
        hints
    };

    assert_eq!(hints[0], json!({ "hint": "First letter: \"H\"" }));
    assert_eq!(hints[1], json!({ "hint": "Artist: \"Beyoncé\"" }));
    assert_eq!(hints[2], json!({ "hint": "Could not generate genre & theme." }));
}

#[tokio::test]
async fn check_before_round_is_bad_request() {
    let app = TestApp::spawn(Song::new("Halo", "Beyoncé"), Some(ScriptedGenerator::new(Vec::new()))).await;

    let (status, body) = post_check(&app, json!({ "userGuess": "Halo" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "No song has been generated yet. Please generate a lyric first!" })
    );
}

#[tokio::test]
async fn check_with_missing_or_blank_guess_is_bad_request() {
    let app = TestApp::spawn(Song::new("Halo", "Beyoncé"), Some(ScriptedGenerator::new(Vec::new()))).await;
    get_json(&app, "/lyrics").await;

    for body in [json!({}), json!({ "userGuess": "" }), json!({ "userGuess": "  " }), json!({ "userGuess": null })] {
        let (status, body) = post_check(&app, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid input. Please enter a guess." }));
    }
}

#[tokio::test]
async fn check_without_json_body_is_bad_request() {
    let app = TestApp::spawn(Song::new("Halo", "Beyoncé"), Some(ScriptedGenerator::new(Vec::new()))).await;
    get_json(&app, "/lyrics").await;

    let response = reqwest::Client::new()
        .post(app.url("/check"))
        .body("Halo")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn check_compares_titles_loosely_and_always_returns_title() {
    let app = TestApp::spawn(
        Song::new("The Correct Title", "Someone"),
        Some(ScriptedGenerator::new(Vec::new())),
    )
    .await;
    get_json(&app, "/lyrics").await;

    for guess in ["The Correct Title", "the correct title", "  The Correct Title  "] {
        let (status, body) = post_check(&app, json!({ "userGuess": guess })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "correct": true, "correctTitle": "The Correct Title" }));
    }

    let (status, body) = post_check(&app, json!({ "userGuess": "Wrong" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "correct": false, "correctTitle": "The Correct Title" }));
}

#[tokio::test]
async fn full_round_ends_with_correct_guess() {
    let app = TestApp::spawn(Song::new("Bad Guy", "Billie Eilish"), Some(ScriptedGenerator::new(Vec::new()))).await;

    let (_, lyrics) = get_json(&app, "/lyrics").await;
    let title = lyrics["title"].as_str().unwrap().to_string();
    for _ in 0..3 {
        get_json(&app, "/hint").await;
    }
    let (status, body) = post_check(&app, json!({ "userGuess": title })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "correct": true, "correctTitle": "Bad Guy" }));
}

#[tokio::test]
async fn routes_are_also_served_under_api_prefix() {
    let app = TestApp::spawn(Song::new("Halo", "Beyoncé"), Some(ScriptedGenerator::new(Vec::new()))).await;

    let (status, _) = get_json(&app, "/api/lyrics").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get_json(&app, "/api/hint").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "hint": "First letter: \"H\"" }));
}

#[tokio::test]
async fn cors_allows_only_configured_origin() {
    let app = TestApp::spawn(Song::new("Halo", "Beyoncé"), Some(ScriptedGenerator::new(Vec::new()))).await;
    let client = reqwest::Client::new();

    let allowed = client
        .get(app.url("/hint"))
        .header(header::ORIGIN, ALLOWED_ORIGIN)
        .send()
        .await
        .unwrap();
    assert_eq!(
        allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        ALLOWED_ORIGIN
    );

    let other = client
        .get(app.url("/hint"))
        .header(header::ORIGIN, "http://elsewhere.test")
        .send()
        .await
        .unwrap();
    assert!(other.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn panicking_snippet_generation_is_internal_error() {
    let generator: Arc<dyn TextGenerator> = PanickingGenerator::after(0);
    let app = TestApp::spawn_with(Song::new("Halo", "Beyoncé"), Some(generator)).await;

    let (status, body) = get_json(&app, "/lyrics").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch lyrics." }));
}

#[tokio::test]
async fn panicking_genre_hint_is_internal_error_and_server_keeps_serving() {
    let generator: Arc<dyn TextGenerator> = PanickingGenerator::after(1);
    let app = TestApp::spawn_with(Song::new("Halo", "Beyoncé"), Some(generator)).await;
    get_json(&app, "/lyrics").await;
    get_json(&app, "/hint").await;
    get_json(&app, "/hint").await;

    let (status, body) = get_json(&app, "/hint").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch hint." }));

    let (status, body) = get_json(&app, "/hint").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "hint": "No more hints available!" }));
}
