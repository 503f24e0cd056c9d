//! Server-sent event session handlers.
//!
//! Each session multiplexes its queue, a heartbeat timer and the shutdown
//! signal. The room lock is only taken when the session opens and when it
//! is torn down.

use std::{convert::Infallible, sync::Arc, time::Duration};

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderMap, header},
    response::sse::{self, Sse},
};
use futures_util::{Stream, future::BoxFuture};
use tokio::{
    sync::{mpsc, watch},
    time::{self, Instant, MissedTickBehavior},
};

use crate::{
    domain::{ClientId, ControlEvent, Event, RoomId},
    infrastructure::dto::{
        http::{PresentQuery, WatchQuery, non_empty},
        sse::{ControlMessage, EventMessage},
    },
    ui::{error::ApiError, state::AppState},
    usecase::{ControlSubscription, RosterSubscription},
};

/// `GET /api/watch`: the client's roster/state stream.
pub async fn watch_stream(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    query: Result<Query<WatchQuery>, QueryRejection>,
) -> Result<Sse<impl Stream<Item = Result<sse::Event, Infallible>>>, ApiError> {
    ensure_event_stream(&headers)?;
    let Query(query) = query?;

    let RosterSubscription {
        room_id,
        client_id,
        subscription_id,
        receiver,
        ..
    } = state
        .subscribe_roster_usecase
        .subscribe(
            RoomId::new(query.room_id),
            ClientId::new(query.client_id),
            non_empty(query.admin_secret),
        )
        .await?;

    let usecase = state.subscribe_roster_usecase.clone();
    let guard = SessionGuard::new(Box::pin(async move {
        usecase
            .unsubscribe(&room_id, &client_id, subscription_id)
            .await;
    }));

    Ok(Sse::new(session_stream(
        receiver,
        state.config.heartbeat,
        state.shutdown.subscribe(),
        guard,
        encode_event,
    )))
}

/// `GET /api/present`: the room's presentation control stream.
pub async fn present_stream(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    query: Result<Query<PresentQuery>, QueryRejection>,
) -> Result<Sse<impl Stream<Item = Result<sse::Event, Infallible>>>, ApiError> {
    ensure_event_stream(&headers)?;
    let Query(query) = query?;

    let ControlSubscription {
        room_id,
        subscription_id,
        receiver,
    } = state
        .subscribe_control_usecase
        .subscribe(RoomId::new(query.room_id))
        .await;

    let usecase = state.subscribe_control_usecase.clone();
    let guard = SessionGuard::new(Box::pin(async move {
        usecase.unsubscribe(&room_id, subscription_id).await;
    }));

    Ok(Sse::new(session_stream(
        receiver,
        state.config.heartbeat,
        state.shutdown.subscribe(),
        guard,
        encode_control,
    )))
}

/// Reject clients that cannot take an event stream.
///
/// A missing `Accept` header is treated as accepting anything.
fn ensure_event_stream(headers: &HeaderMap) -> Result<(), ApiError> {
    let Some(accept) = headers.get(header::ACCEPT) else {
        return Ok(());
    };
    let accept = accept.to_str().unwrap_or_default();
    let accepted = accept
        .split(',')
        .filter_map(|part| part.split(';').next())
        .map(str::trim)
        .any(|media| matches!(media, "text/event-stream" | "text/*" | "*/*"));
    if accepted {
        Ok(())
    } else {
        Err(ApiError::StreamingUnsupported)
    }
}

/// Runs the teardown future when the response stream is dropped.
///
/// axum drops the stream when the peer goes away, so this is where a
/// disconnect is observed.
struct SessionGuard {
    teardown: Option<BoxFuture<'static, ()>>,
}

impl SessionGuard {
    fn new(teardown: BoxFuture<'static, ()>) -> Self {
        Self {
            teardown: Some(teardown),
        }
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        let Some(teardown) = self.teardown.take() else {
            return;
        };
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(teardown);
            }
            Err(_) => tracing::warn!("Session dropped outside the runtime, teardown skipped"),
        }
    }
}

enum Step<T> {
    Deliver(T),
    Heartbeat,
    Close,
}

fn session_stream<T, F>(
    mut receiver: mpsc::Receiver<T>,
    heartbeat: Duration,
    mut shutdown: watch::Receiver<bool>,
    guard: SessionGuard,
    encode: F,
) -> impl Stream<Item = Result<sse::Event, Infallible>> + Send + 'static
where
    T: Send + 'static,
    F: Fn(T) -> Result<sse::Event, axum::Error> + Send + 'static,
{
    async_stream::stream! {
        let _guard = guard;
        let mut ticker = time::interval_at(Instant::now() + heartbeat, heartbeat);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            // Branches are polled in random order, so a busy queue cannot
            // starve the heartbeat or the shutdown signal.
            let step = tokio::select! {
                item = receiver.recv() => item.map_or(Step::Close, Step::Deliver),
                _ = ticker.tick() => Step::Heartbeat,
                _ = shutdown.changed() => Step::Close,
            };

            match step {
                Step::Deliver(item) => match encode(item) {
                    Ok(event) => {
                        yield Ok::<_, Infallible>(event);
                    }
                    Err(e) => {
                        tracing::error!("Failed to serialize event, closing session: {}", e);
                        break;
                    }
                },
                Step::Heartbeat => {
                    yield Ok::<_, Infallible>(heartbeat_event());
                }
                Step::Close => break,
            }
        }
    }
}

fn heartbeat_event() -> sse::Event {
    sse::Event::default().comment("")
}

fn encode_event(event: Event) -> Result<sse::Event, axum::Error> {
    match event {
        Event::Roster(roster) => sse::Event::default().json_data(EventMessage::from(roster)),
        Event::State(state) => sse::Event::default().json_data(EventMessage::from(state)),
    }
}

fn encode_control(event: ControlEvent) -> Result<sse::Event, axum::Error> {
    sse::Event::default().json_data(ControlMessage::from(event))
}
