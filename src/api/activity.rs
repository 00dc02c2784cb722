//! Create Activity Endpoint
//!
//! `POST {create_endpoint}` with a JSON body and CSRF header.

use wasm_bindgen::JsValue;
use web_sys::{Request, RequestInit};

use super::{network_error, read_json, send, AJAX_HEADER};
use crate::error::ApiError;
use crate::models::{ActivityDraft, CreateActivityResponse};

/// CSRF header to attach to the request
pub struct CsrfToken<'a> {
    pub header: &'a str,
    pub value: &'a str,
}

pub async fn create_activity(
    endpoint: &str,
    draft: &ActivityDraft,
    csrf: Option<CsrfToken<'_>>,
) -> Result<CreateActivityResponse, ApiError> {
    let body = serde_json::to_string(draft).map_err(|e| ApiError::Encode(e.to_string()))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(endpoint, &init).map_err(network_error)?;
    let headers = request.headers();
    headers.set("Content-Type", "application/json").map_err(network_error)?;
    headers.set(AJAX_HEADER.0, AJAX_HEADER.1).map_err(network_error)?;
    if let Some(token) = csrf {
        headers.set(token.header, token.value).map_err(network_error)?;
    }

    let response = send(&request).await?;
    let status = response.status();
    if !response.ok() {
        // Error bodies are optional; a missing message falls back later
        let body: CreateActivityResponse = read_json(&response).await.unwrap_or_default();
        return Err(ApiError::Server { status, message: body.message });
    }

    let body: CreateActivityResponse = read_json(&response).await?;
    if body.is_error() {
        return Err(ApiError::Server { status, message: body.message });
    }
    Ok(body)
}
