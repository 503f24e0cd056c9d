//! UseCase: give or take the floor.

use std::sync::Arc;

use podium_shared::time::Clock;

use crate::domain::{ClientId, RoomError, RoomId, RoomRepository, Timestamp};

pub struct SetActiveUseCase {
    repository: Arc<dyn RoomRepository>,
    clock: Arc<dyn Clock>,
}

impl SetActiveUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Set the active flag of an existing client. Requires the room's admin token.
    ///
    /// # Errors
    ///
    /// * `RoomError::Unauthorized` - token missing or wrong
    /// * `RoomError::InvalidClient` - the client is not in the roster
    pub async fn execute(
        &self,
        room_id: RoomId,
        admin_token: Option<String>,
        client_id: ClientId,
        active: bool,
        solo: bool,
    ) -> Result<(), RoomError> {
        let now = Timestamp::new(self.clock.now_millis());
        let mut registry = self.repository.lock().await;
        let room = registry.get_or_create_room(&room_id, now);
        room.authorize(admin_token.as_deref())?;
        room.set_active(&client_id, active, solo, now)?;
        tracing::info!(
            "Client '{}' in room '{}' set active={} (solo={})",
            client_id,
            room_id,
            active,
            solo
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AdminTokenIssuer;
    use crate::infrastructure::repository::InMemoryRoomRepository;
    use podium_shared::time::FixedClock;

    struct Fixture {
        repository: Arc<InMemoryRoomRepository>,
        usecase: SetActiveUseCase,
        room_id: RoomId,
        token: String,
    }

    async fn setup() -> Fixture {
        let issuer = AdminTokenIssuer::new("k");
        let room_id = RoomId::new("room".to_string());
        let token = issuer.issue(&room_id).as_str().to_string();
        let repository = Arc::new(InMemoryRoomRepository::new(issuer));
        repository
            .lock()
            .await
            .get_or_create_room(&room_id, Timestamp::new(0))
            .touch_client(&ClientId::from("alice"), Timestamp::new(0));
        let usecase = SetActiveUseCase::new(repository.clone(), Arc::new(FixedClock::new(5_000)));
        Fixture {
            repository,
            usecase,
            room_id,
            token,
        }
    }

    #[tokio::test]
    async fn test_set_active_success() {
        // テスト項目: 正しいトークンでクライアントをアクティブにできる
        // given (前提条件):
        let f = setup().await;

        // when (操作):
        let result = f
            .usecase
            .execute(f.room_id.clone(), Some(f.token.clone()), ClientId::from("alice"), true, false)
            .await;

        // then (期待する結果):
        assert_eq!(result, Ok(()));
        let registry = f.repository.lock().await;
        let alice = registry
            .room(&f.room_id)
            .unwrap()
            .client(&ClientId::from("alice"))
            .unwrap();
        assert_eq!(alice.active_start(), Some(Timestamp::new(5_000)));
    }

    #[tokio::test]
    async fn test_set_active_wrong_token_does_not_mutate() {
        // テスト項目: トークンが不正な場合は Unauthorized で状態は変わらない
        let f = setup().await;

        let result = f
            .usecase
            .execute(f.room_id.clone(), Some("nope".to_string()), ClientId::from("alice"), true, false)
            .await;

        assert_eq!(result, Err(RoomError::Unauthorized));
        let registry = f.repository.lock().await;
        let alice = registry
            .room(&f.room_id)
            .unwrap()
            .client(&ClientId::from("alice"))
            .unwrap();
        assert!(!alice.is_active());
    }

    #[tokio::test]
    async fn test_set_active_missing_token() {
        // テスト項目: トークンが無い場合は Unauthorized
        let f = setup().await;

        let result = f
            .usecase
            .execute(f.room_id.clone(), None, ClientId::from("alice"), true, false)
            .await;

        assert_eq!(result, Err(RoomError::Unauthorized));
    }

    #[tokio::test]
    async fn test_set_active_unknown_client() {
        // テスト項目: 存在しないクライアントは InvalidClient で作成もされない
        let f = setup().await;

        let result = f
            .usecase
            .execute(f.room_id.clone(), Some(f.token.clone()), ClientId::from("ghost"), true, false)
            .await;

        assert_eq!(result, Err(RoomError::InvalidClient(ClientId::from("ghost"))));
        let registry = f.repository.lock().await;
        assert!(registry.room(&f.room_id).unwrap().client(&ClientId::from("ghost")).is_none());
    }
}
