use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Lyric Match Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::round::get_lyrics,
        crate::routes::round::get_hint,
        crate::routes::round::check_guess,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::health::HealthStatus,
            crate::dto::round::LyricsResponse,
            crate::dto::round::HintResponse,
            crate::dto::round::CheckGuessRequest,
            crate::dto::round::CheckGuessResponse,
            crate::error::ErrorBody,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "round", description = "Snippet, hint and guess operations on the current round"),
    )
)]
pub struct ApiDoc;
