//! UseCase: open and close a presentation viewer session.

use std::sync::Arc;

use podium_shared::time::Clock;
use tokio::sync::mpsc;

use crate::domain::{ControlEvent, Outbox, RoomId, RoomRepository, SubscriptionId, Timestamp};

/// Receiving end of a live presentation viewer session.
#[derive(Debug)]
pub struct ControlSubscription {
    pub room_id: RoomId,
    pub subscription_id: SubscriptionId,
    pub receiver: mpsc::Receiver<ControlEvent>,
}

pub struct SubscribeControlUseCase {
    repository: Arc<dyn RoomRepository>,
    clock: Arc<dyn Clock>,
    queue_capacity: usize,
}

impl SubscribeControlUseCase {
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

    /// Register a new viewer on the room. No snapshot is queued.
    pub async fn subscribe(&self, room_id: RoomId) -> ControlSubscription {
        let now = Timestamp::new(self.clock.now_millis());
        let (outbox, receiver) = Outbox::bounded(self.queue_capacity);
        let mut registry = self.repository.lock().await;
        let room = registry.get_or_create_room(&room_id, now);
        let subscription_id = room.add_viewer(outbox);
        tracing::info!(
            "Viewer session opened in room '{}' ({} viewer(s))",
            room_id,
            room.viewer_count()
        );
        ControlSubscription {
            room_id,
            subscription_id,
            receiver,
        }
    }

    pub async fn unsubscribe(&self, room_id: &RoomId, subscription_id: SubscriptionId) -> bool {
        let now = Timestamp::new(self.clock.now_millis());
        let mut registry = self.repository.lock().await;
        let room = registry.get_or_create_room(room_id, now);
        let removed = room.remove_viewer(subscription_id);
        tracing::info!(
            "Viewer session closed in room '{}' ({} viewer(s) left)",
            room_id,
            room.viewer_count()
        );
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AdminTokenIssuer;
    use crate::infrastructure::repository::InMemoryRoomRepository;
    use podium_shared::time::FixedClock;

    #[tokio::test]
    async fn test_subscribe_and_unsubscribe_viewer() {
        // テスト項目: ビューアの登録・解除がルームに反映され、初期メッセージは無い
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::new(AdminTokenIssuer::new("k")));
        let usecase =
            SubscribeControlUseCase::new(repository.clone(), Arc::new(FixedClock::new(0)), 8);
        let room_id = RoomId::new("room".to_string());

        // when (操作):
        let mut sub = usecase.subscribe(room_id.clone()).await;

        // then (期待する結果):
        assert!(sub.receiver.try_recv().is_err());
        assert_eq!(repository.lock().await.room(&room_id).unwrap().viewer_count(), 1);

        assert!(usecase.unsubscribe(&room_id, sub.subscription_id).await);
        assert_eq!(repository.lock().await.room(&room_id).unwrap().viewer_count(), 0);
        // the queue is discarded with the registration
        assert!(sub.receiver.recv().await.is_none());
    }
}
