//! UseCase: restart the room's shared timer.

use std::sync::Arc;

use podium_shared::time::Clock;

use crate::domain::{RoomError, RoomId, RoomRepository, Timestamp};

pub struct ResetTimerUseCase {
    repository: Arc<dyn RoomRepository>,
    clock: Arc<dyn Clock>,
}

impl ResetTimerUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// # Errors
    ///
    /// * `RoomError::Unauthorized` - token missing or wrong
    pub async fn execute(
        &self,
        room_id: RoomId,
        admin_token: Option<String>,
    ) -> Result<(), RoomError> {
        let now = Timestamp::new(self.clock.now_millis());
        let mut registry = self.repository.lock().await;
        let room = registry.get_or_create_room(&room_id, now);
        room.authorize(admin_token.as_deref())?;
        room.reset_timer(now);
        tracing::info!("Timer of room '{}' reset", room_id);
        Ok(())
    }
}
