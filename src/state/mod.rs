mod aggregate;
mod answer;
mod room;
mod scenario;
mod seed;
mod slide;

use crate::types::*;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state.
///
/// All gameplay data lives in these maps for the lifetime of the process;
/// nothing is persisted across restarts. Each operation takes a single lock
/// guard, so the at-most-one-answer-per-(session, scenario) invariant holds
/// under concurrent requests.
#[derive(Clone)]
pub struct AppState {
    pub rooms: Arc<RwLock<HashMap<RoomCode, Room>>>,
    /// Prompt catalog; Vec keeps insertion order stable for the served deck
    pub scenarios: Arc<RwLock<Vec<Scenario>>>,
    /// sessionId -> scenarioId -> answer. Sessions exist only as keys here.
    pub answers: Arc<RwLock<HashMap<SessionId, HashMap<ScenarioId, AnswerValue>>>>,
    pub slides: Arc<RwLock<Vec<RevealSlide>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            rooms: Arc::new(RwLock::new(HashMap::new())),
            scenarios: Arc::new(RwLock::new(Vec::new())),
            answers: Arc::new(RwLock::new(HashMap::new())),
            slides: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
