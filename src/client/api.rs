use std::sync::Arc;

use futures::future::BoxFuture;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::dto::round::{CheckGuessRequest, CheckGuessResponse, HintResponse, LyricsResponse};

/// Failures talking to the round API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the response not received.
    #[error("failed to reach `{path}`")]
    Transport {
        /// Route that was requested.
        path: &'static str,
        /// Underlying reqwest failure.
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("unexpected response status {status} for `{path}`")]
    Status {
        /// Route that was requested.
        path: &'static str,
        /// Status returned by the server.
        status: StatusCode,
    },
    /// The response payload could not be decoded.
    #[error("failed to decode response for `{path}`")]
    Decode {
        /// Route that was requested.
        path: &'static str,
        /// Underlying reqwest failure.
        #[source]
        source: reqwest::Error,
    },
}

/// The three round operations as seen from a client.
pub trait RoundApi: Send + Sync {
    /// `GET /lyrics`: start a round and fetch its snippet.
    fn fetch_lyrics(&self) -> BoxFuture<'static, Result<LyricsResponse, ClientError>>;
    /// `GET /hint`: fetch the next hint.
    fn fetch_hint(&self) -> BoxFuture<'static, Result<HintResponse, ClientError>>;
    /// `POST /check`: check a guess against the current title.
    fn check_guess(
        &self,
        request: CheckGuessRequest,
    ) -> BoxFuture<'static, Result<CheckGuessResponse, ClientError>>;
}

/// [`RoundApi`] over HTTP against a running server.
#[derive(Clone)]
pub struct HttpRoundApi {
    client: Client,
    base_url: Arc<str>,
}

impl HttpRoundApi {
    /// Target the server rooted at `base_url` (e.g. `http://localhost:8000`).
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            client: Client::new(),
            base_url: Arc::from(base_url.as_ref().trim_end_matches('/')),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T>(path: &'static str, response: reqwest::Response) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { path, status });
        }
        response
            .json::<T>()
            .await
            .map_err(|source| ClientError::Decode { path, source })
    }

    async fn get<T>(&self, path: &'static str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|source| ClientError::Transport { path, source })?;
        Self::decode(path, response).await
    }

    async fn post_check(&self, request: CheckGuessRequest) -> Result<CheckGuessResponse, ClientError> {
        const PATH: &str = "/check";
        let response = self
            .client
            .post(self.url(PATH))
            .json(&request)
            .send()
            .await
            .map_err(|source| ClientError::Transport { path: PATH, source })?;
        Self::decode(PATH, response).await
    }
}

impl RoundApi for HttpRoundApi {
    fn fetch_lyrics(&self) -> BoxFuture<'static, Result<LyricsResponse, ClientError>> {
        let api = self.clone();
        Box::pin(async move { api.get("/lyrics").await })
    }

    fn fetch_hint(&self) -> BoxFuture<'static, Result<HintResponse, ClientError>> {
        let api = self.clone();
        Box::pin(async move { api.get("/hint").await })
    }

    fn check_guess(
        &self,
        request: CheckGuessRequest,
    ) -> BoxFuture<'static, Result<CheckGuessResponse, ClientError>> {
        let api = self.clone();
        Box::pin(async move { api.post_check(request).await })
    }
}
