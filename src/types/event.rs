//! Full event record returned by `GET /pub/v2/odds/events/{id}`.
//!
//! Markets and settlement are maps keyed by market key (e.g.
//! "soccer.match_odds"). The keys are dynamic, so they are modelled as maps
//! rather than named fields.

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::fixture::{Category, Sport, Team};
use super::null_as_default;

/// Competition descriptor embedded in an event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventCompetition {
    /// Category of the competition
    #[serde(deserialize_with = "null_as_default")]
    pub category: Category,
    /// Competition key
    pub key: String,
    /// Competition name
    pub name: String,
}

/// One outcome within a market
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Selection {
    /// Maximum accepted stake
    pub max_stake: f64,
    /// Minimum accepted stake
    pub min_stake: f64,
    /// Outcome label (e.g. "home", "draw", "over")
    pub outcome: String,
    /// Market parameters (e.g. "total=2.5")
    pub params: String,
    /// Decimal price
    pub price: f64,
    /// Probability implied by the book
    pub probability: f64,
    /// Side (e.g. "BACK")
    pub side: String,
    /// Selection status (e.g. "SELECTION_ENABLED")
    pub status: String,
}

/// Selections of one submarket (e.g. one period of a match)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Submarket {
    /// Selections, in API order
    #[serde(deserialize_with = "null_as_default")]
    pub selections: Vec<Selection>,
    /// Update sequence counter
    pub sequence: i64,
}

/// A market or settlement entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketBook {
    /// Selections, in API order
    #[serde(deserialize_with = "null_as_default")]
    pub selections: Vec<Selection>,

    /// Update sequence counter
    pub sequence: i64,

    /// Submarkets keyed by submarket key (e.g. "period=ft")
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "std::collections::HashMap::is_empty"
    )]
    pub submarkets: FxHashMap<String, Submarket>,
}

impl MarketBook {
    /// Iterate over the top-level selections followed by every submarket's
    pub fn all_selections(&self) -> impl Iterator<Item = &Selection> {
        self.selections
            .iter()
            .chain(self.submarkets.values().flat_map(|s| s.selections.iter()))
    }
}

/// A market opinion (crowd or model view on an outcome)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Opinion {
    /// Market key
    pub market_key: String,
    /// Outcome label
    pub outcome: String,
    /// Market parameters
    pub params: String,
    /// Probability assigned to the outcome
    pub probability: f64,
}

/// Event metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    /// Opinions on the event
    #[serde(deserialize_with = "null_as_default")]
    pub opinion: Vec<Opinion>,
    /// Opinion lists keyed by market key
    #[serde(deserialize_with = "null_as_default")]
    pub opinions: FxHashMap<String, Vec<Opinion>>,
}

/// Full event record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    /// Away team (absent for outright events)
    pub away: Option<Team>,

    /// Competition the event belongs to
    #[serde(deserialize_with = "null_as_default")]
    pub competition: EventCompetition,

    /// Time after which bets are no longer accepted
    pub cutoff_time: Option<DateTime<Utc>>,

    /// Time the event ended
    pub end_time: Option<DateTime<Utc>>,

    /// Grading duration
    pub grading_duration: i64,

    /// Home team (absent for outright events)
    pub home: Option<Team>,

    /// Event ID
    pub id: u64,

    /// Event key
    pub key: String,

    /// Markets keyed by market key
    #[serde(deserialize_with = "null_as_default")]
    pub markets: FxHashMap<String, MarketBook>,

    /// Opinions and other metadata
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: Metadata,

    /// Event name
    pub name: String,

    /// Time the result was recorded
    pub resulted_time: Option<DateTime<Utc>>,

    /// Update sequence counter
    pub sequence: i64,

    /// Settlement keyed by market key, same shape as markets
    #[serde(deserialize_with = "null_as_default")]
    pub settlement: FxHashMap<String, MarketBook>,

    /// Sport of the event
    #[serde(deserialize_with = "null_as_default")]
    pub sport: Sport,

    /// Event status
    pub status: String,

    /// Event type tag
    #[serde(rename = "type")]
    pub event_type: String,
}

impl Event {
    /// Look up a market by key
    pub fn market(&self, key: &str) -> Option<&MarketBook> {
        self.markets.get(key)
    }

    /// Check if the event has been settled
    pub fn is_settled(&self) -> bool {
        self.resulted_time.is_some() || !self.settlement.is_empty()
    }
}
