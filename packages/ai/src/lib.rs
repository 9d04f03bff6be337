#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! AI situational advisory with LLM provider abstraction.
//!
//! Turns one incident's category, description, and location into a
//! short radio-operator briefing (severity tier, equipment to prepare,
//! cautions). Supports Anthropic Claude and `OpenAI` via a common
//! trait, selected by environment credentials. The advisory entry
//! point never fails: a missing credential or provider error degrades
//! to a fixed placeholder string that callers store as ordinary data.

pub mod advisory;
pub mod providers;

use thiserror::Error;

/// Errors that can occur during AI operations.
#[derive(Debug, Error)]
pub enum AiError {
    /// HTTP request to the LLM provider failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Provider-specific error.
    #[error("Provider error: {message}")]
    Provider {
        /// Description of what went wrong.
        message: String,
    },

    /// Configuration error (missing or unknown credential).
    #[error("Configuration error: {message}")]
    Config {
        /// Description.
        message: String,
    },
}
