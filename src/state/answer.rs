use super::AppState;
use crate::error::AppError;
use crate::types::{AnswerValue, ScenarioId};
use std::collections::HashMap;

fn require_pair(session_id: &str, scenario_id: &str) -> Result<(), AppError> {
    if session_id.is_empty() || scenario_id.is_empty() {
        return Err(AppError::validation("Session ID and Scenario ID required"));
    }
    Ok(())
}

impl AppState {
    /// Record one session's answer to one scenario.
    ///
    /// Idempotent upsert: at most one answer exists per (session, scenario)
    /// pair, and setting again overwrites the previous value.
    pub async fn set_answer(
        &self,
        session_id: &str,
        scenario_id: &str,
        value: AnswerValue,
    ) -> Result<(), AppError> {
        require_pair(session_id, scenario_id)?;

        self.answers
            .write()
            .await
            .entry(session_id.to_string())
            .or_default()
            .insert(scenario_id.to_string(), value);
        Ok(())
    }

    /// Undo an answer. Deleting an absent pair is a no-op, not an error, so
    /// redundant undos are harmless.
    pub async fn remove_answer(&self, session_id: &str, scenario_id: &str) -> Result<(), AppError> {
        require_pair(session_id, scenario_id)?;

        let mut answers = self.answers.write().await;
        if let Some(session) = answers.get_mut(session_id) {
            session.remove(scenario_id);
            // Invariant: every session in the outer map holds at least one
            // answer, so the map's size is the participant count.
            if session.is_empty() {
                answers.remove(session_id);
            }
        }
        Ok(())
    }

    /// All answers for one session. Unknown sessions get an empty map, never
    /// an error.
    pub async fn session_answers(&self, session_id: &str) -> HashMap<ScenarioId, AnswerValue> {
        self.answers
            .read()
            .await
            .get(session_id)
            .cloned()
            .unwrap_or_default()
    }
}
