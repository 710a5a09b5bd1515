//! HTTP REST client for the Cloudbet Sports API.
//!
//! This module provides the [`RestClient`] for making authenticated HTTP
//! requests to the Cloudbet endpoints. Every operation is a single request and
//! a single response: no retries, no caching, no shared mutable state.
//!
//! # Example
//!
//! ```rust,no_run
//! use cloudbet_sports::{CloudbetClient, Config};
//!
//! # async fn example() -> cloudbet_sports::Result<()> {
//! let client = CloudbetClient::new(Config::new("api-key"))?;
//!
//! // REST client is accessed through the main client
//! let rest = client.rest();
//! let balance = rest.account_balance("PLAY_EUR").await?;
//! # Ok(())
//! # }
//! ```

use std::fmt;

use chrono::{Local, NaiveDate};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Response};
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::error::Error;
use crate::types::{Balance, Event, Fixtures, PlaceBetRequest, PlaceBetResponse};

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-API-Key";

const PLACE_BET_PATH: &str = "/pub/v3/bets/place";
const FIXTURES_PATH: &str = "/pub/v2/odds/fixtures";

/// HTTP client for the Cloudbet REST API
///
/// Share it between tasks by reference or `Arc`. Nothing is mutated after
/// construction.
pub struct RestClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestClient {
    /// Create a new REST client
    ///
    /// # Arguments
    ///
    /// * `config` - Client configuration with the API key
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            api_key: config.api_key().to_string(),
        })
    }

    /// Build authentication headers for a request
    ///
    /// The key is only checked here, when it is first used on the wire.
    fn auth_headers(&self) -> Result<HeaderMap, Error> {
        let mut key = HeaderValue::from_str(&self.api_key)?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(headers)
    }

    /// Resolve an API path against the base URL
    fn endpoint(&self, path: &str) -> Result<Url, Error> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    /// Send a GET request and return the body as text, whatever the status
    async fn get_text(&self, url: Url) -> Result<String, Error> {
        debug!(method = "GET", path = url.path(), "sending request");

        let response = self
            .client
            .get(url)
            .headers(self.auth_headers()?)
            .send()
            .await?;

        read_body(response).await
    }

    /// Send a GET request and decode the JSON body
    async fn get<T>(&self, url: Url) -> Result<T, Error>
    where
        T: serde::de::DeserializeOwned,
    {
        let body = self.get_text(url).await?;
        serde_json::from_str(&body).map_err(Error::from)
    }

    /// Place a bet
    ///
    /// The response body is decoded whatever the HTTP status. On a
    /// non-success status the decoded body is returned inside
    /// [`Error::BetRejected`] so the server's error message is not lost.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use cloudbet_sports::{CloudbetClient, Config, Error};
    /// # use cloudbet_sports::types::PlaceBetRequest;
    /// # async fn example(client: CloudbetClient) {
    /// let bet = PlaceBetRequest::new("24055338", "soccer.match_odds/away", "1.50", "1", "PLAY_EUR");
    ///
    /// match client.rest().place_bet(&bet).await {
    ///     Ok(placed) => println!("{} {}", placed.reference_id, placed.status),
    ///     Err(Error::BetRejected { status, response }) => {
    ///         println!("{}: {:?}", status, response.error);
    ///     }
    ///     Err(e) => println!("{}", e),
    /// }
    /// # }
    /// ```
    pub async fn place_bet(&self, request: &PlaceBetRequest) -> Result<PlaceBetResponse, Error> {
        let url = self.endpoint(PLACE_BET_PATH)?;
        debug!(
            method = "POST",
            path = url.path(),
            reference_id = %request.reference_id,
            event_id = %request.event_id,
            "sending request"
        );

        let response = self
            .client
            .post(url)
            .headers(self.auth_headers()?)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = read_body(response).await?;
        let placed: PlaceBetResponse = serde_json::from_str(&body)?;

        if !status.is_success() {
            warn!(
                %status,
                reference_id = %request.reference_id,
                error = placed.error.as_deref().unwrap_or_default(),
                "bet rejected"
            );
            return Err(Error::BetRejected {
                status,
                response: Box::new(placed),
            });
        }

        Ok(placed)
    }

    /// Get the account balance for a currency
    ///
    /// The currency code goes into the path as given.
    pub async fn account_balance(&self, currency: &str) -> Result<f64, Error> {
        let url = self.endpoint(&format!("/pub/v1/account/currencies/{}/balance", currency))?;
        let balance: Balance = self.get(url).await?;
        balance.amount_f64()
    }

    /// Get today's fixtures for a sport as the raw response body
    ///
    /// "Today" is the calendar date of the local clock at call time.
    pub async fn today_fixtures_raw(&self, sport: &str, limit: u32) -> Result<String, Error> {
        let url = self.fixtures_url(sport, Local::now().date_naive(), limit)?;
        self.get_text(url).await
    }

    /// Get today's fixtures for a sport
    pub async fn today_fixtures(&self, sport: &str, limit: u32) -> Result<Fixtures, Error> {
        let body = self.today_fixtures_raw(sport, limit).await?;
        serde_json::from_str(&body).map_err(Error::from)
    }

    /// Get an event by ID as the raw response body
    pub async fn event_raw(&self, id: &str) -> Result<String, Error> {
        let url = self.endpoint(&format!("/pub/v2/odds/events/{}", id))?;
        self.get_text(url).await
    }

    /// Get an event by ID
    pub async fn event(&self, id: &str) -> Result<Event, Error> {
        let body = self.event_raw(id).await?;
        serde_json::from_str(&body).map_err(Error::from)
    }

    fn fixtures_url(&self, sport: &str, date: NaiveDate, limit: u32) -> Result<Url, Error> {
        let mut url = self.endpoint(FIXTURES_PATH)?;
        url.query_pairs_mut()
            .append_pair("sport", sport)
            .append_pair("date", &date.format("%Y-%m-%d").to_string())
            .append_pair("players", "false")
            .append_pair("limit", &limit.to_string());
        Ok(url)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for RestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Read the whole body, logging the status
async fn read_body(response: Response) -> Result<String, Error> {
    let status = response.status();
    let body = response.text().await?;
    debug!(%status, bytes = body.len(), "received response");
    Ok(body)
}
