//! HTTP Endpoint Wrappers
//!
//! Frontend bindings to the activity endpoints, organized by resource.

mod activity;
mod favorites;

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, Response};

use crate::error::ApiError;

// Re-export all public items
pub use activity::*;
pub use favorites::*;

/// Header marking the request as AJAX for the server
const AJAX_HEADER: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

/// Best-effort text of a thrown js value
fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn network_error(value: JsValue) -> ApiError {
    ApiError::Network(js_message(&value))
}

async fn send(request: &Request) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or(ApiError::Unavailable)?;
    let response = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(network_error)?;
    response.dyn_into::<Response>().map_err(network_error)
}

async fn read_json<T: DeserializeOwned>(response: &Response) -> Result<T, ApiError> {
    let promise = response
        .json()
        .map_err(|e| ApiError::Decode(js_message(&e)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Decode(js_message(&e)))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
