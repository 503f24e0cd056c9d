//! UseCase: allocate a new room.

use std::sync::Arc;

use podium_shared::time::Clock;

use crate::domain::{AdminToken, RoomId, RoomRepository, Timestamp};

/// A freshly allocated room and the token that administers it.
#[derive(Debug, Clone)]
pub struct CreatedRoom {
    pub room_id: RoomId,
    pub admin_token: AdminToken,
}

pub struct CreateRoomUseCase {
    repository: Arc<dyn RoomRepository>,
    clock: Arc<dyn Clock>,
}

impl CreateRoomUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn execute(&self) -> CreatedRoom {
        let now = Timestamp::new(self.clock.now_millis());
        let mut registry = self.repository.lock().await;
        let room_id = registry.create_room(now);
        let admin_token = registry.admin_token(&room_id);
        CreatedRoom {
            room_id,
            admin_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::domain::{AdminTokenIssuer, RegistryGuard};
    use crate::infrastructure::repository::InMemoryRoomRepository;
    use async_trait::async_trait;
    use podium_shared::time::FixedClock;

    /// Delegates to the in-memory repository and counts lock acquisitions.
    struct CountingRepository {
        inner: InMemoryRoomRepository,
        locks: AtomicUsize,
    }

    #[async_trait]
    impl RoomRepository for CountingRepository {
        async fn lock<'a>(&'a self) -> RegistryGuard<'a> {
            self.locks.fetch_add(1, Ordering::SeqCst);
            self.inner.lock().await
        }
    }

    #[tokio::test]
    async fn test_create_room_returns_matching_token() {
        // テスト項目: 作成されたルームの管理トークンで認可できる
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::new(AdminTokenIssuer::new("k")));
        let usecase = CreateRoomUseCase::new(repository.clone(), Arc::new(FixedClock::new(1_000)));

        // when (操作):
        let created = usecase.execute().await;

        // then (期待する結果):
        let registry = repository.lock().await;
        let room = registry.room(&created.room_id).unwrap();
        assert_eq!(room.authorize(Some(created.admin_token.as_str())), Ok(()));
        assert_eq!(room.timer_start(), Timestamp::new(1_000));
    }

    #[tokio::test]
    async fn test_create_room_takes_the_lock_once() {
        // テスト項目: ルーム作成はリポジトリのロックを 1 回だけ取得する
        // given (前提条件):
        let repository = Arc::new(CountingRepository {
            inner: InMemoryRoomRepository::new(AdminTokenIssuer::new("k")),
            locks: AtomicUsize::new(0),
        });
        let usecase = CreateRoomUseCase::new(repository.clone(), Arc::new(FixedClock::new(1_000)));

        // when (操作):
        let created = usecase.execute().await;

        // then (期待する結果):
        assert_eq!(repository.locks.load(Ordering::SeqCst), 1);
        assert!(repository.lock().await.room(&created.room_id).is_some());
    }
}
