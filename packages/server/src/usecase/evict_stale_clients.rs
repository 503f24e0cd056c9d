//! UseCase: evict clients that have not been seen within the grace window.

use std::{sync::Arc, time::Duration};

use podium_shared::time::{Clock, timestamp_to_rfc3339};

use crate::domain::{ClientId, RoomId, RoomRepository, Timestamp};

pub struct EvictStaleClientsUseCase {
    repository: Arc<dyn RoomRepository>,
    clock: Arc<dyn Clock>,
    grace: Duration,
}

impl EvictStaleClientsUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        clock: Arc<dyn Clock>,
        grace: Duration,
    ) -> Self {
        Self {
            repository,
            clock,
            grace,
        }
    }

    /// Remove every client whose last sighting is older than the grace window.
    ///
    /// Goes through the same removal path as an explicit leave, so admins
    /// receive a `removed` roster event for each evicted client.
    pub async fn execute(&self) -> Vec<(RoomId, ClientId)> {
        let now = self.clock.now_millis();
        let grace_millis = i64::try_from(self.grace.as_millis()).unwrap_or(i64::MAX);
        let cutoff = Timestamp::new(now.saturating_sub(grace_millis));

        let evicted = self.repository.lock().await.evict_seen_before(cutoff);
        for (room_id, client_id) in &evicted {
            tracing::info!(
                "Evicted client '{}' from room '{}' (not seen since before {})",
                client_id,
                room_id,
                timestamp_to_rfc3339(cutoff.value())
            );
        }
        evicted
    }
}
