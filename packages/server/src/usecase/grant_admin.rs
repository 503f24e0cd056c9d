//! UseCase: promote a client to admin.

use std::sync::Arc;

use podium_shared::time::Clock;

use crate::domain::{ClientId, RoomError, RoomId, RoomRepository, Timestamp};

pub struct GrantAdminUseCase {
    repository: Arc<dyn RoomRepository>,
    clock: Arc<dyn Clock>,
}

impl GrantAdminUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// # Errors
    ///
    /// * `RoomError::Unauthorized` - token missing or wrong
    /// * `RoomError::InvalidClient` - the client is not in the roster
    pub async fn execute(
        &self,
        room_id: RoomId,
        admin_token: Option<String>,
        client_id: ClientId,
    ) -> Result<(), RoomError> {
        let now = Timestamp::new(self.clock.now_millis());
        let mut registry = self.repository.lock().await;
        let room = registry.get_or_create_room(&room_id, now);
        room.authorize(admin_token.as_deref())?;
        room.grant_admin(&client_id)?;
        tracing::info!("Client '{}' in room '{}' granted admin", client_id, room_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AdminTokenIssuer, Event, Outbox};
    use crate::infrastructure::repository::InMemoryRoomRepository;
    use podium_shared::time::FixedClock;

    #[tokio::test]
    async fn test_grant_admin_delivers_token_to_client() {
        // テスト項目: 管理者に昇格したクライアントに管理トークン付きの状態が届く
        // given (前提条件):
        let issuer = AdminTokenIssuer::new("k");
        let room_id = RoomId::new("room".to_string());
        let token = issuer.issue(&room_id);
        let repository = Arc::new(InMemoryRoomRepository::new(issuer));
        let (outbox, mut rx) = Outbox::bounded(8);
        repository
            .lock()
            .await
            .get_or_create_room(&room_id, Timestamp::new(0))
            .attach_session(&ClientId::from("bob"), outbox, false, Timestamp::new(0));
        let _initial = rx.recv().await;
        let usecase = GrantAdminUseCase::new(repository.clone(), Arc::new(FixedClock::new(0)));

        // when (操作):
        let result = usecase
            .execute(room_id.clone(), Some(token.as_str().to_string()), ClientId::from("bob"))
            .await;

        // then (期待する結果):
        assert_eq!(result, Ok(()));
        match rx.recv().await {
            Some(Event::State(state)) => assert_eq!(state.admin_token, Some(token)),
            other => panic!("expected state event, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_grant_admin_unknown_client() {
        // テスト項目: 存在しないクライアントは InvalidClient
        let issuer = AdminTokenIssuer::new("k");
        let room_id = RoomId::new("room".to_string());
        let token = issuer.issue(&room_id).as_str().to_string();
        let repository = Arc::new(InMemoryRoomRepository::new(issuer));
        let usecase = GrantAdminUseCase::new(repository, Arc::new(FixedClock::new(0)));

        let result = usecase
            .execute(room_id, Some(token), ClientId::from("ghost"))
            .await;

        assert_eq!(result, Err(RoomError::InvalidClient(ClientId::from("ghost"))));
    }
}
