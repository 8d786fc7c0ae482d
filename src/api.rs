//! Server Endpoints
//!
//! Frontend bindings to the blog's AJAX endpoints. Every call is a POST
//! carrying the CSRF token and the AJAX marker headers.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, UiError};
use crate::models::{
    CreateResponse, DeleteResponse, EditCommentBody, EditResponse, LikeResponse, NewCommentBody,
};

const CSRF_HEADER: &str = "X-CSRFToken";
const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
const REQUESTED_WITH: &str = "XMLHttpRequest";

// ========================
// Request helpers
// ========================

fn post(url: &str, csrf_token: &str) -> RequestBuilder {
    Request::post(url)
        .header(CSRF_HEADER, csrf_token)
        .header("Content-Type", "application/json")
        .header(REQUESTED_WITH_HEADER, REQUESTED_WITH)
}

async fn post_json<B: Serialize>(url: &str, csrf_token: &str, body: &B) -> Result<Response> {
    let body = serde_json::to_string(body)?;
    let response = post(url, csrf_token).body(body)?.send().await?;
    Ok(response)
}

/// Non-2xx responses fail before the body is read
async fn decode_strict<T: DeserializeOwned>(response: Response) -> Result<T> {
    if !response.ok() {
        return Err(UiError::Status(response.status()));
    }
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}

/// Error payloads often come with 4xx statuses, so the body wins when it parses
async fn decode_lenient<T: DeserializeOwned>(response: Response) -> Result<T> {
    let ok = response.ok();
    let status = response.status();
    let text = response.text().await?;
    decode_body(ok, status, &text)
}

pub(crate) fn decode_body<T: DeserializeOwned>(ok: bool, status: u16, text: &str) -> Result<T> {
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(_) if !ok => Err(UiError::Status(status)),
        Err(e) => Err(e.into()),
    }
}

// ========================
// Endpoints
// ========================

/// Create a top-level comment or a reply
pub async fn create_comment(url: &str, csrf_token: &str, body: &NewCommentBody<'_>) -> Result<CreateResponse> {
    let response = post_json(url, csrf_token, body).await?;
    decode_lenient(response).await
}

pub async fn edit_comment(url: &str, csrf_token: &str, content: &str) -> Result<EditResponse> {
    let response = post_json(url, csrf_token, &EditCommentBody { content }).await?;
    decode_lenient(response).await
}

/// Toggle a like on the article or a comment; the URL identifies the target
pub async fn toggle_like(url: &str, csrf_token: &str) -> Result<LikeResponse> {
    let response = post(url, csrf_token).send().await?;
    decode_strict(response).await
}

pub async fn delete_comment(url: &str, csrf_token: &str) -> Result<DeleteResponse> {
    let response = post(url, csrf_token).send().await?;
    decode_strict(response).await
}
