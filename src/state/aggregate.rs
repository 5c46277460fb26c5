use super::AppState;
use crate::types::{AnswerAggregates, AnswerValue, ScenarioId, ScenarioTally};
use std::collections::HashMap;

impl AppState {
    /// Tally yes/no answers per scenario across all sessions.
    ///
    /// Recomputed from the answer store on every call; there is no cached
    /// aggregate state to drift. Scenarios nobody has answered are omitted
    /// from the map. `total_participants` counts distinct sessions with at
    /// least one stored answer.
    pub async fn aggregates(&self) -> AnswerAggregates {
        let answers = self.answers.read().await;

        let mut scenarios: HashMap<ScenarioId, ScenarioTally> = HashMap::new();
        for session in answers.values() {
            for (scenario_id, value) in session {
                let tally = scenarios.entry(scenario_id.clone()).or_default();
                match value {
                    AnswerValue::Yes => tally.yes += 1,
                    AnswerValue::No => tally.no += 1,
                }
            }
        }

        AnswerAggregates {
            scenarios,
            total_participants: answers.len() as u64,
        }
    }
}
