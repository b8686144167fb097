//! HTTP API client.
//!
//! Thin wrappers over `gloo-net` for the three invitation endpoints. Every
//! failure below the JSON body level (network, HTTP status, decode) collapses
//! into `ApiError`; API-level `status: "error"` is returned as data.

use gloo_net::http::{Request, Response};
use iv_api_types::{SubmitResponse, WishesResponse};
use serde::de::DeserializeOwned;
use thiserror::Error;
use web_sys::{FormData, HtmlFormElement};

use crate::dom;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("{status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("form serialization failed: {0}")]
    Form(String),
}

pub async fn get_wishes(url: &str) -> Result<WishesResponse, ApiError> {
    let resp = Request::get(url).send().await?;
    decode(resp).await
}

/// POST the form's fields as multipart form data.
pub async fn submit_form(url: &str, form: &HtmlFormElement) -> Result<SubmitResponse, ApiError> {
    let body = FormData::new_with_form(form).map_err(|e| ApiError::Form(dom::describe(&e)))?;
    let resp = Request::post(url).body(body)?.send().await?;
    decode(resp).await
}

/// Endpoint for a form: its `action` attribute when set, else `fallback`.
pub fn form_endpoint(form: &HtmlFormElement, fallback: String) -> String {
    match form.get_attribute("action") {
        Some(action) if !action.trim().is_empty() => action,
        _ => fallback,
    }
}

/// Error statuses that still carry a JSON body (e.g. a 422 with
/// `{"status": "error", "message": ...}`) decode normally so the server's
/// message reaches the user.
async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    match resp.json::<T>().await {
        Ok(body) => Ok(body),
        Err(_) if !resp.ok() => Err(ApiError::Status {
            status: resp.status(),
            status_text: resp.status_text(),
        }),
        Err(e) => Err(e.into()),
    }
}
