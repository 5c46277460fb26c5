use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Opaque ID types for type safety
pub type RoomCode = String;
pub type ScenarioId = String;
pub type SessionId = String;
pub type SlideId = String;

/// A named, code-addressable play session container.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Short shareable join code, immutable once created
    pub code: RoomCode,
    pub title: String,
    pub created_at: String,
}

/// A single yes/no prompt card shown to participants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: ScenarioId,
    pub text: String,
    /// Inactive cards are excluded from the served deck
    pub active: bool,
    pub created_at: String,
}

/// One session's response to one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerValue {
    Yes,
    No,
}

impl FromStr for AnswerValue {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            _ => Err(()),
        }
    }
}

/// Yes/no tally for a single scenario.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioTally {
    pub yes: u32,
    pub no: u32,
}

/// Derived tallies across all sessions. Computed on demand, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerAggregates {
    /// Per-scenario counts; scenarios with no stored answers are omitted
    pub scenarios: HashMap<ScenarioId, ScenarioTally>,
    /// Number of distinct sessions holding at least one answer
    pub total_participants: u64,
}

/// A narrative slide shown during the reveal phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealSlide {
    pub id: SlideId,
    pub title: String,
    /// Markdown body, rendered by the front end
    pub body: Option<String>,
    pub image_url: Option<String>,
    pub quote: Option<String>,
    pub quote_author: Option<String>,
}
