//! # cloudbet-sports
//!
//! An async Rust client for the [Cloudbet](https://www.cloudbet.com) Sports API.
//!
//! ## Features
//!
//! - **Bet placement** - with the decoded server response kept on rejection
//! - **Account balance** - per currency
//! - **Fixtures and events** - typed or as raw JSON text
//! - **Async/Await** - Built on Tokio and reqwest
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cloudbet_sports::{CloudbetClient, Config};
//! use cloudbet_sports::types::PlaceBetRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), cloudbet_sports::Error> {
//!     let client = CloudbetClient::new(Config::new("api-key"))?;
//!
//!     // Today's soccer fixtures
//!     let fixtures = client.rest().today_fixtures("soccer", 10).await?;
//!     let event = &fixtures.competitions[0].events[0];
//!
//!     // Back the home side at 1.50 for 1 PLAY_EUR
//!     let bet = PlaceBetRequest::new(
//!         event.id.to_string(),
//!         "soccer.match_odds/home",
//!         "1.50",
//!         "1",
//!         "PLAY_EUR",
//!     );
//!     let placed = client.rest().place_bet(&bet).await?;
//!     println!("{} {}", placed.reference_id, placed.status);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Amounts
//!
//! Prices and stakes are sent as decimal strings (`"1.50"`), never as floats,
//! so the amount typed is the amount the server receives. The client does not
//! validate them; the server is the only judge of stake limits and prices.
//!
//! ## Architecture
//!
//! - [`client`] - REST client for API communication
//! - [`types`] - Request/response types matching the Cloudbet API
//! - [`config`] - API key and client settings
//! - [`error`] - Error types for the crate

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod types;

// Re-export main types at crate root for convenience
pub use config::Config;
pub use error::Error;

/// Result type alias using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// The main Cloudbet API client
///
/// # Example
///
/// ```rust,no_run
/// use cloudbet_sports::{CloudbetClient, Config};
///
/// # async fn example() -> cloudbet_sports::Result<()> {
/// let client = CloudbetClient::new(Config::new("api-key"))?;
///
/// let balance = client.rest().account_balance("PLAY_EUR").await?;
/// println!("Balance: {:.2}", balance);
///
/// let event = client.rest().event("24055338").await?;
/// println!("{} ({} markets)", event.name, event.markets.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CloudbetClient {
    config: Config,
    rest_client: client::rest::RestClient,
}

impl CloudbetClient {
    /// Create a new Cloudbet client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: Config) -> Result<Self> {
        let rest_client = client::rest::RestClient::new(&config)?;
        Ok(Self {
            config,
            rest_client,
        })
    }

    /// Get a reference to the REST client
    pub fn rest(&self) -> &client::rest::RestClient {
        &self.rest_client
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
