//! HTTP API
//!
//! Client for fetching the interaction document.

pub mod client;

pub use client::{fetch_interaction_document, get_data_url, set_data_url, LoadError};
