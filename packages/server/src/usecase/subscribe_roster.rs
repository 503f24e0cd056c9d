//! UseCase: open and close a client's roster/state session.

use std::sync::Arc;

use podium_shared::time::Clock;
use tokio::sync::mpsc;

use crate::domain::{
    ClientId, Event, Outbox, RoomError, RoomId, RoomRepository, SubscriptionId, Timestamp,
};

/// Receiving end of a live roster/state session.
#[derive(Debug)]
pub struct RosterSubscription {
    pub room_id: RoomId,
    pub client_id: ClientId,
    pub subscription_id: SubscriptionId,
    pub is_admin: bool,
    pub receiver: mpsc::Receiver<Event>,
}

pub struct SubscribeRosterUseCase {
    repository: Arc<dyn RoomRepository>,
    clock: Arc<dyn Clock>,
    queue_capacity: usize,
}

impl SubscribeRosterUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        clock: Arc<dyn Clock>,
        queue_capacity: usize,
    ) -> Self {
        Self {
            repository,
            clock,
            queue_capacity,
        }
    }

    /// Install a fresh queue for the client, replacing any previous session.
    ///
    /// The queue already holds the client's own state and, for admin
    /// sessions, one roster event per client in the room.
    ///
    /// # Errors
    ///
    /// * `RoomError::Unauthorized` - a token was given but does not match
    pub async fn subscribe(
        &self,
        room_id: RoomId,
        client_id: ClientId,
        admin_token: Option<String>,
    ) -> Result<RosterSubscription, RoomError> {
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

        // Room for the client's own state plus one snapshot entry per client.
        let capacity = self.queue_capacity.max(room.client_count() + 2);
        let (outbox, receiver) = Outbox::bounded(capacity);
        let subscription_id = room.attach_session(&client_id, outbox, is_admin, now);
        tracing::info!(
            "Roster session opened for client '{}' in room '{}' (admin={})",
            client_id,
            room_id,
            is_admin
        );

        Ok(RosterSubscription {
            room_id,
            client_id,
            subscription_id,
            is_admin,
            receiver,
        })
    }

    /// Detach the session's queue unless a newer session already replaced it.
    pub async fn unsubscribe(
        &self,
        room_id: &RoomId,
        client_id: &ClientId,
        subscription_id: SubscriptionId,
    ) -> bool {
        let now = Timestamp::new(self.clock.now_millis());
        let mut registry = self.repository.lock().await;
        let detached = registry
            .get_or_create_room(room_id, now)
            .detach_session(client_id, subscription_id);
        tracing::info!(
            "Roster session closed for client '{}' in room '{}' (detached={})",
            client_id,
            room_id,
            detached
        );
        detached
    }
}
