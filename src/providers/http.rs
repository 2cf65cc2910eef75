//! Request dispatch and status handling shared by every adapter.

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::Error;

/// Error envelope used by OpenAI, Anthropic and Gemini alike.
#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Send `request` once and decode a successful JSON body into `T`.
pub(crate) async fn send_json<T: DeserializeOwned>(
    provider: &'static str,
    request: RequestBuilder,
) -> Result<T, Error> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(status_error(provider, status, &body));
    }

    serde_json::from_str(&body)
        .map_err(|e| Error::provider(provider, format!("Malformed response body: {e}")))
}

fn status_error(provider: &'static str, status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<ApiErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Error::auth(format!("{provider} rejected the credentials: {message}"))
        }
        StatusCode::TOO_MANY_REQUESTS => Error::RateLimit,
        _ => Error::provider(provider, format!("API error ({status}): {message}")),
    }
}
