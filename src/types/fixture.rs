//! Fixture tree types.
//!
//! `GET /pub/v2/odds/fixtures` returns competitions, each embedding its sport,
//! category and an ordered list of events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Response from the fixtures endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fixtures {
    /// Competitions with events on the requested date
    #[serde(deserialize_with = "null_as_default")]
    pub competitions: Vec<Competition>,
}

impl Fixtures {
    /// Iterate over every event of every competition, in order
    pub fn events(&self) -> impl Iterator<Item = &FixtureEvent> {
        self.competitions.iter().flat_map(|c| c.events.iter())
    }

    /// Total number of events across all competitions
    pub fn event_count(&self) -> usize {
        self.competitions.iter().map(|c| c.events.len()).sum()
    }
}

/// Sport descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sport {
    /// Display name (e.g. "Soccer")
    pub name: String,
    /// Sport key (e.g. "soccer")
    pub key: String,
}

/// Category descriptor (usually a country or region)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    /// Display name
    pub name: String,
    /// Category key
    pub key: String,
}

/// Home or away competitor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Team {
    /// Team name
    pub name: String,
    /// Team key
    pub key: String,
    /// Short name
    pub abbreviation: String,
    /// Nationality code
    pub nationality: String,
    /// Research ID (fixtures endpoint only)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub research_id: String,
}

/// Player details. Not populated by the API yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {}

/// Market details on a fixture. Not populated by the API yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markets {}

/// An event inside a fixture competition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FixtureEvent {
    /// Event ID
    pub id: u64,

    /// Home team (absent for outright events)
    pub home: Option<Team>,

    /// Away team (absent for outright events)
    pub away: Option<Team>,

    /// Players placeholder
    #[serde(deserialize_with = "null_as_default")]
    pub players: Players,

    /// Event status (e.g. "TRADING", "TRADING_LIVE", "RESULTED")
    pub status: String,

    /// Markets placeholder
    #[serde(deserialize_with = "null_as_default")]
    pub markets: Markets,

    /// Event name
    pub name: String,

    /// Event key
    pub key: String,

    /// Time after which bets are no longer accepted
    pub cutoff_time: Option<DateTime<Utc>>,

    /// Event type tag
    #[serde(rename = "type")]
    pub event_type: String,
}

impl FixtureEvent {
    /// Check if the event is open for betting (pre-match or live)
    pub fn is_trading(&self) -> bool {
        matches!(self.status.as_str(), "TRADING" | "TRADING_LIVE")
    }
}

/// A competition and its events
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Competition {
    /// Competition name
    pub name: String,

    /// Competition key
    pub key: String,

    /// Sport the competition belongs to
    #[serde(deserialize_with = "null_as_default")]
    pub sport: Sport,

    /// Events, in the order the API returned them
    #[serde(deserialize_with = "null_as_default")]
    pub events: Vec<FixtureEvent>,

    /// Category the competition belongs to
    #[serde(deserialize_with = "null_as_default")]
    pub category: Category,
}
