//! Error types for the cloudbet-sports crate.
//!
//! This module defines the errors that can occur when talking to the
//! Cloudbet Sports API: transport failures, undecodable bodies, unparseable
//! amounts and rejected bets.

use reqwest::StatusCode;
use thiserror::Error;

use crate::types::PlaceBetResponse;

/// The main error type for this crate
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Base URL or endpoint path could not be parsed
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// API key cannot be sent as an HTTP header value
    #[error("invalid API key header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Balance amount was not a decimal number
    #[error("invalid balance amount {amount:?}: {source}")]
    ParseAmount {
        /// Amount string as returned by the server
        amount: String,
        /// Underlying parse error
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Bet placement returned a non-success status
    ///
    /// The decoded response body is kept so callers can read the
    /// server-supplied [`PlaceBetResponse::error`] message.
    #[error("failed to place bet: {status}")]
    BetRejected {
        /// HTTP status of the placement response
        status: StatusCode,
        /// Decoded placement response body
        response: Box<PlaceBetResponse>,
    },
}

impl Error {
    /// The decoded placement response, if this is a rejected bet
    pub fn bet_response(&self) -> Option<&PlaceBetResponse> {
        match self {
            Error::BetRejected { response, .. } => Some(response),
            _ => None,
        }
    }

    /// The HTTP status, if this error came from a response status or transport error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::BetRejected { status, .. } => Some(*status),
            Error::Http(e) => e.status(),
            _ => None,
        }
    }
}
