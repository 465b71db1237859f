use std::any::Any;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::catch_panic::CatchPanicLayer;
use tracing::{debug, error};

use crate::{
    dto::round::{CheckGuessRequest, CheckGuessResponse, HintResponse, LyricsResponse},
    error::{AppError, ErrorBody},
    services::round_service,
    state::SharedState,
};

/// Routes driving the current round.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route(
            "/lyrics",
            get(get_lyrics).layer(recover_panics("Failed to fetch lyrics.")),
        )
        .route(
            "/hint",
            get(get_hint).layer(recover_panics("Failed to fetch hint.")),
        )
        .route(
            "/check",
            post(check_guess).layer(recover_panics("Failed to check guess.")),
        )
}

/// Turn a panicking handler into a 500 carrying `message`.
fn recover_panics(
    message: &'static str,
) -> CatchPanicLayer<impl Fn(Box<dyn Any + Send + 'static>) -> Response + Clone + Send + Sync + 'static>
{
    CatchPanicLayer::custom(move |_panic: Box<dyn Any + Send + 'static>| {
        error!(response = message, "request handler panicked");
        AppError::Internal(message.into()).into_response()
    })
}

#[utoipa::path(
    get,
    path = "/lyrics",
    tag = "round",
    responses(
        (status = 200, description = "New round started; snippet or fallback", body = LyricsResponse),
        (status = 500, description = "Unexpected server fault", body = ErrorBody)
    )
)]
/// Start a new round and return its lyric snippet.
pub async fn get_lyrics(State(state): State<SharedState>) -> Json<LyricsResponse> {
    let opening = round_service::start_round(&state).await;
    Json(opening.into())
}

#[utoipa::path(
    get,
    path = "/hint",
    tag = "round",
    responses(
        (status = 200, description = "Next hint of the current round", body = HintResponse),
        (status = 500, description = "Unexpected server fault", body = ErrorBody)
    )
)]
/// Grant the next hint of the current round.
pub async fn get_hint(State(state): State<SharedState>) -> Json<HintResponse> {
    let hint = round_service::advance_hint(&state).await;
    Json(hint.into())
}

#[utoipa::path(
    post,
    path = "/check",
    tag = "round",
    request_body = CheckGuessRequest,
    responses(
        (status = 200, description = "Guess checked", body = CheckGuessResponse),
        (status = 400, description = "No active round or missing guess", body = ErrorBody)
    )
)]
/// Check a guess against the title of the current round.
///
/// A body that is not valid JSON is handled like a missing guess.
pub async fn check_guess(
    State(state): State<SharedState>,
    payload: Result<Json<CheckGuessRequest>, JsonRejection>,
) -> Result<Json<CheckGuessResponse>, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!(error = %rejection, "unreadable guess payload");
            CheckGuessRequest::default()
        }
    };

    let outcome = round_service::check_guess(&state, request).await?;
    Ok(Json(outcome.into()))
}
