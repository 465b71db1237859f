use lyric_match_back::{
    client::{ClientView, HttpRoundApi, view::MAX_ATTEMPTS},
    state::catalog::Song,
};

use crate::helpers::{ScriptedGenerator, TestApp};

#[tokio::test]
async fn three_wrong_guesses_end_the_game_with_title_revealed() {
    let generator = ScriptedGenerator::new(vec![Ok("I'm the bad type".into())]);
    let app = TestApp::spawn(Song::new("Bad Guy", "Billie Eilish"), Some(generator)).await;
    let api = HttpRoundApi::new(&app.base_url);
    let mut view = ClientView::new();

    view.fetch_snippet(&api).await;
    assert_eq!(view.snippet(), Some("I'm the bad type"));
    assert_eq!(view.attempts_left(), MAX_ATTEMPTS);

    for guess in ["Bad Girl", "Good Guy", "Guy"] {
        view.submit_guess(&api, guess).await;
    }

    assert!(view.is_game_over());
    assert_eq!(view.attempts_left(), 0);
    assert_eq!(
        view.result(),
        Some("Out of chances! The correct song was: \"Bad Guy\".")
    );
    assert_eq!(view.error(), None);
}

#[tokio::test]
async fn hints_then_correct_guess_wins() {
    let app = TestApp::spawn(Song::new("Bad Guy", "Billie Eilish"), Some(ScriptedGenerator::new(Vec::new()))).await;
    let api = HttpRoundApi::new(&app.base_url);
    let mut view = ClientView::new();

    view.fetch_snippet(&api).await;
    for _ in 0..4 {
        view.request_hint(&api).await;
    }
    view.submit_guess(&api, "bad guy").await;

    assert_eq!(
        view.hints(),
        &[
            "First word: \"Bad\"",
            "Artist: \"Billie Eilish\"",
            "Genre & Theme: generated text",
        ]
    );
    assert_eq!(view.error(), Some("No more hints available!"));
    assert_eq!(view.result(), Some("Correct Answer!"));
    assert!(view.is_game_over());
}

#[tokio::test]
async fn unreachable_server_sets_error() {
    let api = HttpRoundApi::new("http://127.0.0.1:9");
    let mut view = ClientView::new();

    view.fetch_snippet(&api).await;

    assert_eq!(
        view.error(),
        Some("Failed to fetch lyrics. Check your connection.")
    );
    assert_eq!(view.snippet(), None);
}
