use super::AppState;
use crate::error::AppError;
use crate::types::Room;
use rand::Rng;

/// Safe character set for room codes (excludes 0/O, 1/I/L to avoid confusion)
const CODE_CHARS: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";
const CODE_LENGTH: usize = 5;

/// Generate a random short room code (5 characters)
fn generate_room_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LENGTH)
        .map(|_| CODE_CHARS[rng.random_range(0..CODE_CHARS.len())] as char)
        .collect()
}

impl AppState {
    /// Create a room with a fresh unique code.
    pub async fn create_room(&self, title: &str) -> Result<Room, AppError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::validation("Title required"));
        }

        let mut rooms = self.rooms.write().await;

        // Generated and inserted under the same write guard, so the code is
        // unique even under concurrent creates. Collisions are extremely
        // rare with 28M combinations; just roll again.
        let code = loop {
            let code = generate_room_code();
            if !rooms.contains_key(&code) {
                break code;
            }
        };

        let room = Room {
            code: code.clone(),
            title: title.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        rooms.insert(code, room.clone());

        tracing::info!("Created room {} ({})", room.code, room.title);
        Ok(room)
    }

    /// Look up a room by its join code.
    ///
    /// Codes are generated uppercase; lookups are normalized so the write
    /// and read paths agree on case.
    pub async fn room_by_code(&self, code: &str) -> Option<Room> {
        let code = code.trim().to_uppercase();
        self.rooms.read().await.get(&code).cloned()
    }

    /// Snapshot of every room, in no particular order.
    pub async fn all_rooms(&self) -> Vec<Room> {
        self.rooms.read().await.values().cloned().collect()
    }

    /// Rename a room (admin only).
    pub async fn set_room_title(&self, code: &str, title: &str) -> Result<Room, AppError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::validation("Title required"));
        }

        let code = code.trim().to_uppercase();
        let mut rooms = self.rooms.write().await;
        let room = rooms
            .get_mut(&code)
            .ok_or_else(|| AppError::not_found("Room not found"))?;

        room.title = title.to_string();
        Ok(room.clone())
    }
}
