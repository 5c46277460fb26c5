//! Starter content for a fresh process.
//!
//! The store is in-memory only, so every boot starts from this deck until an
//! admin edits the catalog.

use super::AppState;
use crate::types::{RevealSlide, Scenario};

const STARTER_SCENARIOS: &[&str] = &[
    "Have you ever pretended to know a song and mumbled through the lyrics?",
    "Have you ever laughed at a joke you didn't get?",
    "Have you ever re-gifted a present?",
    "Have you ever texted the person sitting next to you?",
    "Have you ever snoozed an alarm more than three times in a row?",
    "Have you ever eaten dessert before dinner and told no one?",
    "Have you ever waved back at someone who wasn't waving at you?",
    "Have you ever practiced an argument in the shower?",
    "Have you ever said 'almost there' while still at home?",
    "Have you ever clapped when the plane landed?",
];

impl AppState {
    /// Install the starter deck and reveal slides if the catalog is empty.
    /// Safe to call more than once.
    pub async fn seed_starter_content(&self) {
        {
            let mut scenarios = self.scenarios.write().await;
            if scenarios.is_empty() {
                let created_at = chrono::Utc::now().to_rfc3339();
                for text in STARTER_SCENARIOS {
                    scenarios.push(Scenario {
                        id: ulid::Ulid::new().to_string(),
                        text: (*text).to_string(),
                        active: true,
                        created_at: created_at.clone(),
                    });
                }
                tracing::info!("Seeded {} starter scenarios", scenarios.len());
            }
        }

        let mut slides = self.slides.write().await;
        if slides.is_empty() {
            *slides = starter_slides();
            tracing::info!("Seeded {} reveal slides", slides.len());
        }
    }
}

fn starter_slides() -> Vec<RevealSlide> {
    let slide = |title: &str, body: Option<&str>, quote: Option<&str>, author: Option<&str>| {
        RevealSlide {
            id: ulid::Ulid::new().to_string(),
            title: title.to_string(),
            body: body.map(str::to_string),
            image_url: None,
            quote: quote.map(str::to_string),
            quote_author: author.map(str::to_string),
        }
    };

    vec![
        slide(
            "The Numbers Are In",
            Some("Everyone has swiped. Time to find out how the room *really* answered."),
            None,
            None,
        ),
        slide(
            "Nobody Is Innocent",
            Some(
                "Every single card got at least one **yes** tonight.\n\nSome of them got a lot more than one.",
            ),
            None,
            None,
        ),
        slide(
            "A Word From the Wise",
            None,
            Some("The best parties are the ones where everyone has something to confess."),
            Some("Anonymous partygoer"),
        ),
        slide(
            "Thanks for Playing",
            Some("Your secrets are safe with us. They only live in memory, after all."),
            None,
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_fills_empty_catalog() {
        let state = AppState::new();
        state.seed_starter_content().await;

        assert_eq!(
            state.active_scenarios().await.len(),
            STARTER_SCENARIOS.len()
        );
        assert!(!state.all_slides().await.is_empty());
    }

    #[tokio::test]
    async fn test_seed_does_not_duplicate() {
        let state = AppState::new();
        state.seed_starter_content().await;
        state.seed_starter_content().await;

        assert_eq!(
            state.active_scenarios().await.len(),
            STARTER_SCENARIOS.len()
        );
    }

    #[tokio::test]
    async fn test_seed_preserves_admin_edits() {
        let state = AppState::new();
        let custom = state.add_scenario("Custom card").await.unwrap();

        state.seed_starter_content().await;

        let deck = state.active_scenarios().await;
        assert_eq!(deck.len(), 1);
        assert_eq!(deck[0].id, custom.id);
    }
}
