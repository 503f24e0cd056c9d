//! Background liveness sweeper.

use std::{sync::Arc, time::Duration};

use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};

use crate::usecase::EvictStaleClientsUseCase;

/// Spawn the periodic eviction loop.
///
/// Passes run strictly one after another; a slow pass delays the next tick
/// instead of queueing a burst. The loop ends as soon as `shutdown` flips.
pub fn spawn_sweeper(
    usecase: Arc<EvictStaleClientsUseCase>,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tracing::info!("Sweeper started (interval: {:?})", interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let evicted = usecase.execute().await;
                    if !evicted.is_empty() {
                        tracing::debug!("Sweep pass evicted {} client(s)", evicted.len());
                    }
                }
                _ = shutdown.changed() => break,
            }
        }

        tracing::info!("Sweeper stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{AdminTokenIssuer, ClientId, RoomId, RoomRepository, Timestamp},
        infrastructure::repository::InMemoryRoomRepository,
    };
    use podium_shared::time::ManualClock;

    #[tokio::test]
    async fn test_sweeper_evicts_and_stops_on_shutdown() {
        // テスト項目: スイーパーが古いクライアントを退去し、シャットダウンで停止する
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::new(AdminTokenIssuer::new("k")));
        let room_id = RoomId::new("room".to_string());
        repository
            .lock()
            .await
            .get_or_create_room(&room_id, Timestamp::new(0))
            .touch_client(&ClientId::from("c1"), Timestamp::new(0));
        let clock = Arc::new(ManualClock::new(60_000));
        let usecase = Arc::new(EvictStaleClientsUseCase::new(
            repository.clone(),
            clock,
            Duration::from_secs(30),
        ));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        // when (操作):
        let handle = spawn_sweeper(usecase, Duration::from_millis(10), shutdown_rx);
        for _ in 0..100 {
            if repository.lock().await.room(&room_id).unwrap().client_count() == 0 {
                break;
            }
            time::sleep(Duration::from_millis(10)).await;
        }
        shutdown_tx.send(true).unwrap();

        // then (期待する結果):
        assert_eq!(repository.lock().await.room(&room_id).unwrap().client_count(), 0);
        time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("sweeper should stop")
            .unwrap();
    }
}
