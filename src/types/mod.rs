//! API types for Cloudbet requests and responses.
//!
//! This module contains Rust types that correspond to the Cloudbet Sports
//! API's JSON request and response bodies.
//!
//! - [`bet`] - Bet placement request and response
//! - [`account`] - Account balance
//! - [`fixture`] - Fixture tree returned by the fixtures endpoint
//! - [`event`] - Full event record with markets and settlement

pub mod account;
pub mod bet;
pub mod event;
pub mod fixture;

pub use account::Balance;
pub use bet::{AcceptPriceChange, PlaceBetRequest, PlaceBetResponse};
pub use event::{Event, EventCompetition, MarketBook, Metadata, Opinion, Selection, Submarket};
pub use fixture::{Category, Competition, FixtureEvent, Fixtures, Markets, Players, Sport, Team};

use serde::{Deserialize, Deserializer};

/// Deserialize helper that treats `null` the same as a missing field
///
/// The API sends `null` for empty sub-objects and lists. Those decode to the
/// type's default instead of failing the whole body.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
