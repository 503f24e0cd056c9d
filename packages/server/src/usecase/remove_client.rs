//! UseCase: a client leaves the room.

use std::sync::Arc;

use podium_shared::time::Clock;

use crate::domain::{ClientId, RoomId, RoomRepository, Timestamp};

pub struct RemoveClientUseCase {
    repository: Arc<dyn RoomRepository>,
    clock: Arc<dyn Clock>,
}

impl RemoveClientUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Remove the client and close its stream. Unknown clients are ignored.
    ///
    /// Returns whether a client was removed.
    pub async fn execute(&self, room_id: RoomId, client_id: ClientId) -> bool {
        let now = Timestamp::new(self.clock.now_millis());
        let mut registry = self.repository.lock().await;
        registry
            .get_or_create_room(&room_id, now)
            .remove_client(&client_id)
            .is_some()
    }
}
