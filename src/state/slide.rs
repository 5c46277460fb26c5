use super::AppState;
use crate::types::RevealSlide;

impl AppState {
    /// Reveal slides in authored order.
    pub async fn all_slides(&self) -> Vec<RevealSlide> {
        self.slides.read().await.clone()
    }
}
