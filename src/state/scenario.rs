use super::AppState;
use crate::error::AppError;
use crate::types::Scenario;

impl AppState {
    /// Active scenarios in insertion order. This is the deck served to
    /// participants; the client shuffles it.
    pub async fn active_scenarios(&self) -> Vec<Scenario> {
        self.scenarios
            .read()
            .await
            .iter()
            .filter(|s| s.active)
            .cloned()
            .collect()
    }

    /// Add a prompt card to the catalog (admin only). New cards start active.
    pub async fn add_scenario(&self, text: &str) -> Result<Scenario, AppError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::validation("Text required"));
        }

        let scenario = Scenario {
            id: ulid::Ulid::new().to_string(),
            text: text.to_string(),
            active: true,
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        self.scenarios.write().await.push(scenario.clone());
        Ok(scenario)
    }

    /// Edit a card's text and/or active flag (admin only).
    pub async fn update_scenario(
        &self,
        id: &str,
        text: Option<&str>,
        active: Option<bool>,
    ) -> Result<Scenario, AppError> {
        let mut scenarios = self.scenarios.write().await;
        let scenario = scenarios
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::not_found("Scenario not found"))?;

        if let Some(text) = text {
            let text = text.trim();
            if text.is_empty() {
                return Err(AppError::validation("Text required"));
            }
            scenario.text = text.to_string();
        }
        if let Some(active) = active {
            scenario.active = active;
        }

        Ok(scenario.clone())
    }
}
