//! Thin JSON client over gloo-net.
//!
//! Every call sends the session cookie, speaks JSON and reports failures as
//! [`ApiError`]; nothing here panics or throws.

use super::api_utils::api_url;
use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

const NO_CONTENT: u16 = 204;

fn prepare(builder: RequestBuilder) -> RequestBuilder {
    builder
        .credentials(RequestCredentials::Include)
        .header("Accept", "application/json")
}

async fn send(method: &str, path: &str, request: Result<Request, ApiError>) -> Result<Response, ApiError> {
    let response = request?
        .send()
        .await
        .map_err(|e| {
            log::warn!("{} {} failed: {}", method, path, e);
            ApiError::Network(e.to_string())
        })?;

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let content_type = response.headers().get("content-type");
    let body = response.text().await.unwrap_or_default();
    let error = ApiError::from_response(status, content_type.as_deref(), &body);
    log::warn!("{} {} -> HTTP {}: {}", method, path, status, error);
    Err(error)
}

/// GET `path` and decode the JSON body. An empty body (`204 No Content`)
/// yields `T::default()`.
pub async fn get_json<T>(path: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    let url = api_url(path);
    let request = prepare(Request::get(&url))
        .build()
        .map_err(|e| ApiError::Network(e.to_string()));
    let response = send("GET", path, request).await?;

    if response.status() == NO_CONTENT {
        return Ok(T::default());
    }

    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if body.trim().is_empty() {
        return Ok(T::default());
    }

    serde_json::from_str::<T>(&body).map_err(|e| {
        log::warn!("GET {}: cannot decode body: {}", path, e);
        ApiError::Decode(e.to_string())
    })
}

/// POST `body` as JSON to `path`
pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let url = api_url(path);
    let request = prepare(Request::post(&url))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()));
    send("POST", path, request).await?;
    Ok(())
}

/// DELETE `path`
pub async fn delete(path: &str) -> Result<(), ApiError> {
    let url = api_url(path);
    let request = prepare(Request::delete(&url))
        .build()
        .map_err(|e| ApiError::Network(e.to_string()));
    send("DELETE", path, request).await?;
    Ok(())
}
