//! Bounded per-subscriber queues.
//!
//! An [`Outbox`] is the sending half of a session's queue. The domain keeps
//! it while the session is live; dropping it closes the channel, which ends
//! the session's stream once the receiver has drained what was already
//! queued.
//!
//! Pushing never waits. Producers run while the registry lock is held, so a
//! full queue drops the event instead of stalling every other request.

use thiserror::Error;
use tokio::sync::{
    Semaphore,
    mpsc::{self, error::TrySendError},
};
use uuid::Uuid;

/// Identity of one subscription, used to tell a live session from a
/// superseded one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PushError {
    #[error("subscriber queue is full")]
    Full,

    #[error("subscriber queue is closed")]
    Closed,
}

/// Sending half of a bounded subscriber queue.
#[derive(Debug)]
pub struct Outbox<T> {
    id: SubscriptionId,
    sender: mpsc::Sender<T>,
}

impl<T> Outbox<T> {
    /// Create a queue holding at most `capacity` pending items.
    ///
    /// `capacity` is clamped to `1..=Semaphore::MAX_PERMITS`, the range
    /// `mpsc::channel` accepts.
    pub fn bounded(capacity: usize) -> (Self, mpsc::Receiver<T>) {
        let (sender, receiver) = mpsc::channel(capacity.clamp(1, Semaphore::MAX_PERMITS));
        let outbox = Self {
            id: SubscriptionId::generate(),
            sender,
        };
        (outbox, receiver)
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Enqueue without waiting.
    pub fn push(&self, item: T) -> Result<(), PushError> {
        self.sender.try_send(item).map_err(|e| match e {
            TrySendError::Full(_) => PushError::Full,
            TrySendError::Closed(_) => PushError::Closed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_push_preserves_fifo_order() {
        // テスト項目: キューに入れた順に取り出される
        // given (前提条件):
        let (outbox, mut rx) = Outbox::bounded(4);

        // when (操作):
        outbox.push(1).unwrap();
        outbox.push(2).unwrap();
        outbox.push(3).unwrap();

        // then (期待する結果):
        assert_eq!(rx.recv().await, Some(1));
        assert_eq!(rx.recv().await, Some(2));
        assert_eq!(rx.recv().await, Some(3));
    }

    #[tokio::test]
    async fn test_push_to_full_queue_drops_instead_of_waiting() {
        // テスト項目: 満杯のキューへの push は待たずに Full を返す
        // given (前提条件):
        let (outbox, mut rx) = Outbox::bounded(1);
        outbox.push("first").unwrap();

        // when (操作):
        let result = outbox.push("second");

        // then (期待する結果):
        assert_eq!(result, Err(PushError::Full));
        assert_eq!(rx.recv().await, Some("first"));
    }

    #[tokio::test]
    async fn test_push_after_receiver_dropped_is_closed() {
        // テスト項目: 受信側が破棄された後の push は Closed を返す
        let (outbox, rx) = Outbox::bounded(1);
        drop(rx);

        assert_eq!(outbox.push(()), Err(PushError::Closed));
    }

    #[tokio::test]
    async fn test_dropping_outbox_ends_receiver_after_drain() {
        // テスト項目: Outbox を破棄すると、残りを受け取った後に受信側が終了する
        // given (前提条件):
        let (outbox, mut rx) = Outbox::bounded(2);
        outbox.push("pending").unwrap();

        // when (操作):
        drop(outbox);

        // then (期待する結果):
        assert_eq!(rx.recv().await, Some("pending"));
        assert_eq!(rx.recv().await, None);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        // テスト項目: 容量 0 を指定してもパニックせず 1 件は入る
        let (outbox, _rx) = Outbox::bounded(0);
        assert!(outbox.push(()).is_ok());
    }

    #[tokio::test]
    async fn test_oversized_capacity_is_clamped() {
        // テスト項目: チャネルの上限を超える容量を指定してもパニックせずキューが使える
        // given (前提条件):
        let (outbox, mut rx) = Outbox::bounded(usize::MAX);

        // when (操作):
        let result = outbox.push("event");

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(rx.recv().await, Some("event"));
    }

    #[test]
    fn test_each_outbox_has_its_own_id() {
        // テスト項目: Outbox ごとに異なる ID が割り当てられる
        let (a, _rx_a) = Outbox::<()>::bounded(1);
        let (b, _rx_b) = Outbox::<()>::bounded(1);
        assert_ne!(a.id(), b.id());
    }
}
