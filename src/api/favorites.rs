//! Favorites Endpoint
//!
//! `GET {favorites_endpoint}{category}/`

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use web_sys::Request;

use super::{network_error, read_json, send, AJAX_HEADER};
use crate::error::ApiError;
use crate::models::FavoriteOption;

/// Characters escaped in a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub fn favorites_url(endpoint: &str, category: &str) -> String {
    let encoded = utf8_percent_encode(category, PATH_SEGMENT);
    if endpoint.ends_with('/') {
        format!("{}{}/", endpoint, encoded)
    } else {
        format!("{}/{}/", endpoint, encoded)
    }
}

pub async fn fetch_favorites(endpoint: &str, category: &str) -> Result<Vec<FavoriteOption>, ApiError> {
    let request = Request::new_with_str(&favorites_url(endpoint, category)).map_err(network_error)?;
    request
        .headers()
        .set(AJAX_HEADER.0, AJAX_HEADER.1)
        .map_err(network_error)?;

    let response = send(&request).await?;
    if !response.ok() {
        return Err(ApiError::Server { status: response.status(), message: None });
    }
    read_json(&response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorites_url() {
        assert_eq!(favorites_url("/activities/favorites/", "consume"), "/activities/favorites/consume/");
        assert_eq!(favorites_url("/activities/favorites", "consume"), "/activities/favorites/consume/");
    }

    #[test]
    fn test_category_is_escaped_as_segment() {
        assert_eq!(favorites_url("/f/", "a b/c"), "/f/a%20b%2Fc/");
        assert_eq!(favorites_url("/f/", "snack-time_2"), "/f/snack-time_2/");
    }
}
