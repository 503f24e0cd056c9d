//! UseCase: the active client sends a control signal to presentation viewers.

use std::sync::Arc;

use podium_shared::time::Clock;

use crate::domain::{ClientId, ControlSignal, RoomError, RoomId, RoomRepository, Timestamp};

pub struct SendControlUseCase {
    repository: Arc<dyn RoomRepository>,
    clock: Arc<dyn Clock>,
}

impl SendControlUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// # Returns
    ///
    /// * `Ok(usize)` - number of viewers the signal was queued for
    /// * `Err(RoomError::NotActive)` - the sender does not hold the floor
    pub async fn execute(
        &self,
        room_id: RoomId,
        client_id: ClientId,
        control: ControlSignal,
    ) -> Result<usize, RoomError> {
        let now = Timestamp::new(self.clock.now_millis());
        let mut registry = self.repository.lock().await;
        let room = registry.get_or_create_room(&room_id, now);
        let control_str = control.as_str().to_string();
        let delivered = room.send_control(&client_id, control, now)?;
        tracing::info!(
            "Client '{}' sent control '{}' to {} viewer(s) in room '{}'",
            client_id,
            control_str,
            delivered,
            room_id
        );
        Ok(delivered)
    }
}
