//! Document Fetch Client
//!
//! Loads the pre-aggregated interaction document over HTTP.

use gloo_net::http::Request;
use thiserror::Error;

use crate::state::global::InteractionDocument;

/// Default location of the interaction document
pub const DEFAULT_DATA_URL: &str = "output.json";

/// Errors that can occur while loading the interaction document
#[derive(Error, Debug)]
pub enum LoadError {
    /// Request could not be sent
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("HTTP error: status {0}")]
    Status(u16),

    /// Response body was not a valid interaction document
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Get the document URL from local storage or use the default
pub fn get_data_url() -> String {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("classpulse_data_url") {
                if !url.trim().is_empty() {
                    return url.trim().to_string();
                }
            }
        }
    }
    DEFAULT_DATA_URL.to_string()
}

/// Set the document URL in local storage
pub fn set_data_url(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("classpulse_data_url", url);
        }
    }
}

/// Fetch and decode the interaction document.
///
/// The fetch and its decode are the only asynchronous steps in the app;
/// everything downstream renders synchronously from the typed document.
pub async fn fetch_interaction_document() -> Result<InteractionDocument, LoadError> {
    let response = Request::get(&get_data_url())
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    response
        .json::<InteractionDocument>()
        .await
        .map_err(|e| LoadError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoadError::Status(404);
        assert_eq!(err.to_string(), "HTTP error: status 404");

        let err = LoadError::Decode("missing field".to_string());
        assert_eq!(err.to_string(), "Decode error: missing field");
    }
}
