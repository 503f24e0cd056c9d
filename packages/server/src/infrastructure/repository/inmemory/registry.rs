//! In-memory room repository.
//!
//! Holds the [`RoomRegistry`] behind the single process-wide lock. Every
//! action takes the lock for one read-modify-write and releases it before
//! any network I/O; queue pushes made under the lock never wait.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{AdminTokenIssuer, RegistryGuard, RoomRegistry, RoomRepository};

/// In-memory repository owning all room state.
#[derive(Debug)]
pub struct InMemoryRoomRepository {
    registry: Mutex<RoomRegistry>,
}

impl InMemoryRoomRepository {
    pub fn new(issuer: AdminTokenIssuer) -> Self {
        Self {
            registry: Mutex::new(RoomRegistry::new(issuer)),
        }
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn lock<'a>(&'a self) -> RegistryGuard<'a> {
        Box::new(self.registry.lock().await)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{ClientId, RoomId, Timestamp};

    fn create_test_repository() -> Arc<InMemoryRoomRepository> {
        Arc::new(InMemoryRoomRepository::new(AdminTokenIssuer::new("secret")))
    }

    #[tokio::test]
    async fn test_state_is_shared_between_lock_holders() {
        // テスト項目: ロックを取り直しても同じ状態が見える
        // given (前提条件):
        let repo = create_test_repository();
        let room_id = RoomId::new("room-1".to_string());
        let now = Timestamp::new(1_000);

        // when (操作):
        repo.lock()
            .await
            .get_or_create_room(&room_id, now)
            .touch_client(&ClientId::from("alice"), now);

        // then (期待する結果):
        let registry = repo.lock().await;
        assert_eq!(registry.room(&room_id).unwrap().client_count(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_mutations_are_serialized() {
        // テスト項目: 並行するタスクからの変更が失われない
        // given (前提条件):
        let repo = create_test_repository();
        let room_id = RoomId::new("room-1".to_string());

        // when (操作):
        let mut handles = Vec::new();
        for i in 0..32 {
            let repo = repo.clone();
            let room_id = room_id.clone();
            handles.push(tokio::spawn(async move {
                let now = Timestamp::new(1_000);
                repo.lock()
                    .await
                    .get_or_create_room(&room_id, now)
                    .touch_client(&ClientId::new(format!("client-{i}")), now);
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        // then (期待する結果):
        let registry = repo.lock().await;
        assert_eq!(registry.room(&room_id).unwrap().client_count(), 32);
    }
}
