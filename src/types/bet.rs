//! Bet placement types.
//!
//! Price and stake travel as decimal strings, never as floats, so the amount
//! the caller typed is the amount the server sees.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How the server should treat a price that moved since the bet was priced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AcceptPriceChange {
    /// Reject the bet on any price change
    None,
    /// Accept any price change
    #[default]
    All,
    /// Accept only changes in the bettor's favour
    Better,
}

/// Request body for `POST /pub/v3/bets/place`
///
/// No field is validated client-side. Stake limits, price sanity and currency
/// codes are checked by the server only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceBetRequest {
    /// Price change policy
    pub accept_price_change: AcceptPriceChange,

    /// Currency code (e.g. "EUR", "PLAY_EUR")
    pub currency: String,

    /// Event the market belongs to
    pub event_id: String,

    /// Market locator (e.g. "soccer.match_odds/home")
    pub market_url: String,

    /// Requested price as a decimal string
    pub price: String,

    /// Unique identifier for this placement attempt
    pub reference_id: String,

    /// Stake as a decimal string
    pub stake: String,
}

impl PlaceBetRequest {
    /// Create a new placement request with a random reference ID
    ///
    /// The price change policy defaults to [`AcceptPriceChange::All`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use cloudbet_sports::types::{AcceptPriceChange, PlaceBetRequest};
    ///
    /// let bet = PlaceBetRequest::new("24055338", "soccer.match_odds/away", "1.50", "1", "PLAY_EUR")
    ///     .with_accept_price_change(AcceptPriceChange::Better);
    /// assert_eq!(bet.price, "1.50");
    /// ```
    pub fn new(
        event_id: impl Into<String>,
        market_url: impl Into<String>,
        price: impl Into<String>,
        stake: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            accept_price_change: AcceptPriceChange::default(),
            currency: currency.into(),
            event_id: event_id.into(),
            market_url: market_url.into(),
            price: price.into(),
            reference_id: Uuid::new_v4().to_string(),
            stake: stake.into(),
        }
    }

    /// Set the price change policy
    #[must_use]
    pub fn with_accept_price_change(mut self, policy: AcceptPriceChange) -> Self {
        self.accept_price_change = policy;
        self
    }

    /// Replace the generated reference ID (e.g. to retry the same attempt)
    #[must_use]
    pub fn with_reference_id(mut self, reference_id: impl Into<String>) -> Self {
        self.reference_id = reference_id.into();
        self
    }
}

/// Response body of a bet placement
///
/// Every field defaults when absent. A rejection body may carry nothing but
/// [`error`](Self::error).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaceBetResponse {
    /// Reference ID echoed from the request
    pub reference_id: String,

    /// Price at which the bet was placed
    pub price: String,

    /// Event ID
    pub event_id: String,

    /// Market locator
    pub market_url: String,

    /// Side of the bet
    pub side: String,

    /// Currency of the stake
    pub currency: String,

    /// Stake amount
    pub stake: String,

    /// Creation time as sent by the server
    pub create_time: String,

    /// Bet status (e.g. "ACCEPTED", "PENDING_ACCEPTANCE", "REJECTED")
    pub status: String,

    /// Potential return amount
    pub return_amount: String,

    /// Event name
    pub event_name: String,

    /// Sport key
    pub sports_key: String,

    /// Competition ID
    pub competition_id: String,

    /// Category key
    pub category_key: String,

    /// Customer reference
    pub customer_reference: String,

    /// Server-supplied error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PlaceBetResponse {
    /// Check if the server attached an error message
    pub fn is_error(&self) -> bool {
        self.error.as_deref().is_some_and(|e| !e.is_empty())
    }
}
