//! UseCase: a client announces its display name.

use std::sync::Arc;

use podium_shared::time::Clock;

use crate::domain::{ClientId, DisplayName, RoomError, RoomId, RoomRepository, Timestamp};

pub struct AnnounceUseCase {
    repository: Arc<dyn RoomRepository>,
    clock: Arc<dyn Clock>,
}

impl AnnounceUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Create or update the client. Its admin flag follows whether a valid
    /// token came with the announcement.
    ///
    /// Clients re-announce periodically, which is also what keeps them from
    /// being evicted.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - name or admin flag changed
    /// * `Ok(false)` - nothing changed (the client was still marked as seen)
    /// * `Err(RoomError::Unauthorized)` - a token was given but does not match
    pub async fn execute(
        &self,
        room_id: RoomId,
        client_id: ClientId,
        name: DisplayName,
        admin_token: Option<String>,
    ) -> Result<bool, RoomError> {
        let now = Timestamp::new(self.clock.now_millis());
        let mut registry = self.repository.lock().await;
        let room = registry.get_or_create_room(&room_id, now);

        let is_admin = match admin_token.as_deref() {
            Some(token) => {
                room.authorize(Some(token))?;
                true
            }
            None => false,
        };

        let changed = room.announce(&client_id, name, is_admin, now);
        if changed {
            tracing::info!(
                "Client '{}' in room '{}' announced (admin={})",
                client_id,
                room_id,
                is_admin
            );
        }
        Ok(changed)
    }
}
