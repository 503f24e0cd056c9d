//! Shared application state.

use std::sync::Arc;

use podium_shared::time::Clock;
use tokio::sync::watch;

use crate::{
    config::ServerConfig,
    domain::RoomRepository,
    usecase::{
        AnnounceUseCase, CreateRoomUseCase, EvictStaleClientsUseCase, GrantAdminUseCase,
        RemoveClientUseCase, ResetTimerUseCase, SendControlUseCase, SetActiveUseCase,
        SubscribeControlUseCase, SubscribeRosterUseCase,
    },
};

/// Everything the handlers need, shared behind an `Arc`.
pub struct AppState {
    pub create_room_usecase: Arc<CreateRoomUseCase>,
    pub set_active_usecase: Arc<SetActiveUseCase>,
    pub grant_admin_usecase: Arc<GrantAdminUseCase>,
    pub announce_usecase: Arc<AnnounceUseCase>,
    pub send_control_usecase: Arc<SendControlUseCase>,
    pub remove_client_usecase: Arc<RemoveClientUseCase>,
    pub reset_timer_usecase: Arc<ResetTimerUseCase>,
    pub subscribe_roster_usecase: Arc<SubscribeRosterUseCase>,
    pub subscribe_control_usecase: Arc<SubscribeControlUseCase>,
    pub evict_stale_clients_usecase: Arc<EvictStaleClientsUseCase>,
    pub config: ServerConfig,
    /// Flipped to `true` once; open sessions and the sweeper end on the change.
    pub shutdown: watch::Sender<bool>,
}

impl AppState {
    /// Wire every use case to the same repository and clock.
    pub fn build(
        repository: Arc<dyn RoomRepository>,
        clock: Arc<dyn Clock>,
        config: ServerConfig,
    ) -> Self {
        let (shutdown, _) = watch::channel(false);
        Self {
            create_room_usecase: Arc::new(CreateRoomUseCase::new(
                repository.clone(),
                clock.clone(),
            )),
            set_active_usecase: Arc::new(SetActiveUseCase::new(repository.clone(), clock.clone())),
            grant_admin_usecase: Arc::new(GrantAdminUseCase::new(
                repository.clone(),
                clock.clone(),
            )),
            announce_usecase: Arc::new(AnnounceUseCase::new(repository.clone(), clock.clone())),
            send_control_usecase: Arc::new(SendControlUseCase::new(
                repository.clone(),
                clock.clone(),
            )),
            remove_client_usecase: Arc::new(RemoveClientUseCase::new(
                repository.clone(),
                clock.clone(),
            )),
            reset_timer_usecase: Arc::new(ResetTimerUseCase::new(
                repository.clone(),
                clock.clone(),
            )),
            subscribe_roster_usecase: Arc::new(SubscribeRosterUseCase::new(
                repository.clone(),
                clock.clone(),
                config.queue_capacity,
            )),
            subscribe_control_usecase: Arc::new(SubscribeControlUseCase::new(
                repository.clone(),
                clock.clone(),
                config.queue_capacity,
            )),
            evict_stale_clients_usecase: Arc::new(EvictStaleClientsUseCase::new(
                repository,
                clock,
                config.grace,
            )),
            config,
            shutdown,
        }
    }
}
