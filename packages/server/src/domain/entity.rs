//! Room and client entities.

use std::collections::HashMap;

use super::{
    error::RoomError,
    event::{ClientSnapshot, ControlEvent, Event, RosterEvent},
    pusher::{Outbox, SubscriptionId},
    value_object::{AdminToken, ClientId, ControlSignal, DisplayName, RoomId, Timestamp},
};

/// A participant within a room.
#[derive(Debug)]
pub struct Client {
    pub(super) id: ClientId,
    pub(super) name: DisplayName,
    pub(super) is_admin: bool,
    pub(super) active_start: Option<Timestamp>,
    pub(super) last_seen: Timestamp,
    /// Present only while a roster/state session is live.
    pub(super) outbox: Option<Outbox<Event>>,
}

impl Client {
    fn new(id: ClientId, now: Timestamp) -> Self {
        Self {
            id,
            name: DisplayName::default(),
            is_admin: false,
            active_start: None,
            last_seen: now,
            outbox: None,
        }
    }

    pub fn id(&self) -> &ClientId {
        &self.id
    }

    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn is_active(&self) -> bool {
        self.active_start.is_some()
    }

    pub fn active_start(&self) -> Option<Timestamp> {
        self.active_start
    }

    pub fn last_seen(&self) -> Timestamp {
        self.last_seen
    }

    pub fn is_subscribed(&self) -> bool {
        self.outbox.is_some()
    }

    pub fn snapshot(&self) -> ClientSnapshot {
        ClientSnapshot {
            client_id: self.id.clone(),
            name: self.name.clone(),
            is_admin: self.is_admin,
            active_start: self.active_start,
        }
    }

    fn set_active(&mut self, active: bool, now: Timestamp) {
        self.active_start = active.then_some(now);
    }
}

/// An isolated namespace of clients sharing a session clock.
///
/// Rooms are created on first reference and never deleted; only their
/// clients come and go.
#[derive(Debug)]
pub struct Room {
    pub(super) id: RoomId,
    pub(super) admin_token: AdminToken,
    pub(super) timer_start: Timestamp,
    pub(super) clients: HashMap<ClientId, Client>,
    pub(super) viewers: HashMap<SubscriptionId, Outbox<ControlEvent>>,
}

impl Room {
    pub fn new(id: RoomId, admin_token: AdminToken, now: Timestamp) -> Self {
        Self {
            id,
            admin_token,
            timer_start: now,
            clients: HashMap::new(),
            viewers: HashMap::new(),
        }
    }

    pub fn id(&self) -> &RoomId {
        &self.id
    }

    pub fn admin_token(&self) -> &AdminToken {
        &self.admin_token
    }

    pub fn timer_start(&self) -> Timestamp {
        self.timer_start
    }

    pub fn client(&self, client_id: &ClientId) -> Option<&Client> {
        self.clients.get(client_id)
    }

    pub fn clients(&self) -> impl Iterator<Item = &Client> {
        self.clients.values()
    }

    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    pub fn viewer_count(&self) -> usize {
        self.viewers.len()
    }

    /// Check a presented admin token. Missing and mismatched tokens are both rejected.
    pub fn authorize(&self, candidate: Option<&str>) -> Result<(), RoomError> {
        match candidate {
            Some(token) if self.admin_token.matches(token) => Ok(()),
            _ => Err(RoomError::Unauthorized),
        }
    }

    /// Resolve a client, creating it if unknown, and mark it as seen.
    ///
    /// Creation is announced to admin subscribers. Returns whether the
    /// client was created.
    pub fn touch_client(&mut self, client_id: &ClientId, now: Timestamp) -> bool {
        let created = !self.clients.contains_key(client_id);
        let client = self
            .clients
            .entry(client_id.clone())
            .or_insert_with(|| Client::new(client_id.clone(), now));
        client.last_seen = now;

        if created {
            let snapshot = client.snapshot();
            tracing::info!("Client '{}' joined room '{}'", client_id, self.id);
            self.broadcast_roster(RosterEvent {
                client: snapshot,
                removed: false,
            });
        }
        created
    }

    fn existing_client_mut(&mut self, client_id: &ClientId) -> Result<&mut Client, RoomError> {
        self.clients
            .get_mut(client_id)
            .ok_or_else(|| RoomError::InvalidClient(client_id.clone()))
    }

    /// Give or take the floor from an existing client.
    ///
    /// With `solo`, every other active client is deactivated first. Each
    /// affected client gets a state event and admins get a roster event per
    /// affected client.
    pub fn set_active(
        &mut self,
        client_id: &ClientId,
        active: bool,
        solo: bool,
        now: Timestamp,
    ) -> Result<(), RoomError> {
        self.existing_client_mut(client_id)?;

        if solo {
            let others: Vec<ClientId> = self
                .clients
                .values()
                .filter(|c| c.is_active() && &c.id != client_id)
                .map(|c| c.id.clone())
                .collect();
            for other in others {
                if let Some(client) = self.clients.get_mut(&other) {
                    client.set_active(false, now);
                }
                self.notify_client_changed(&other);
            }
        }

        self.existing_client_mut(client_id)?.set_active(active, now);
        self.notify_client_changed(client_id);
        Ok(())
    }

    /// Make an existing client an admin.
    pub fn grant_admin(&mut self, client_id: &ClientId) -> Result<(), RoomError> {
        self.existing_client_mut(client_id)?.is_admin = true;
        self.notify_client_changed(client_id);
        Ok(())
    }

    /// Create or update a client's name and admin flag.
    ///
    /// Admins hear about it only if something actually changed. Returns
    /// whether it did.
    pub fn announce(
        &mut self,
        client_id: &ClientId,
        name: DisplayName,
        is_admin: bool,
        now: Timestamp,
    ) -> bool {
        self.touch_client(client_id, now);
        let Some(client) = self.clients.get_mut(client_id) else {
            return false;
        };

        let mut changed = false;
        if client.name != name {
            client.name = name;
            changed = true;
        }
        if client.is_admin != is_admin {
            client.is_admin = is_admin;
            changed = true;
        }

        if changed {
            let snapshot = client.snapshot();
            self.broadcast_roster(RosterEvent {
                client: snapshot,
                removed: false,
            });
        }
        changed
    }

    /// Forward a control signal from the active client to every viewer.
    ///
    /// Returns how many viewers accepted it.
    pub fn send_control(
        &mut self,
        client_id: &ClientId,
        control: ControlSignal,
        now: Timestamp,
    ) -> Result<usize, RoomError> {
        self.touch_client(client_id, now);
        let is_active = self
            .clients
            .get(client_id)
            .is_some_and(|client| client.is_active());
        if !is_active {
            return Err(RoomError::NotActive(client_id.clone()));
        }
        Ok(self.broadcast_control(ControlEvent { control }))
    }

    /// Delete a client from the roster and close its queue.
    ///
    /// Both explicit removal and eviction go through here.
    pub fn remove_client(&mut self, client_id: &ClientId) -> Option<Client> {
        let mut client = self.clients.remove(client_id)?;
        // Dropping the outbox ends the client's stream once it drains.
        client.outbox = None;

        self.broadcast_roster(RosterEvent {
            client: client.snapshot(),
            removed: true,
        });
        tracing::info!("Client '{}' removed from room '{}'", client_id, self.id);
        Some(client)
    }

    /// Restart the shared timer and tell every client.
    pub fn reset_timer(&mut self, now: Timestamp) {
        self.timer_start = now;
        let ids: Vec<ClientId> = self.clients.keys().cloned().collect();
        for id in ids {
            self.send_state(&id);
        }
    }

    /// Install `outbox` as the client's live queue, replacing any previous one.
    ///
    /// The client is created if needed. With `admin`, the client is elevated
    /// and the new queue is seeded with a roster snapshot of the whole room
    /// after the client's own state.
    pub fn attach_session(
        &mut self,
        client_id: &ClientId,
        outbox: Outbox<Event>,
        admin: bool,
        now: Timestamp,
    ) -> SubscriptionId {
        self.touch_client(client_id, now);
        let subscription_id = outbox.id();

        // Elevate before installing the queue; the snapshot below covers it.
        let elevated = match self.clients.get_mut(client_id) {
            Some(client) if admin && !client.is_admin => {
                client.is_admin = true;
                Some(client.snapshot())
            }
            _ => None,
        };
        if let Some(snapshot) = elevated {
            self.broadcast_roster(RosterEvent {
                client: snapshot,
                removed: false,
            });
        }

        if let Some(client) = self.clients.get_mut(client_id) {
            if client.outbox.replace(outbox).is_some() {
                tracing::info!(
                    "Client '{}' in room '{}' re-subscribed, previous session severed",
                    client_id,
                    self.id
                );
            }
        }

        self.send_state(client_id);
        if admin {
            self.send_roster_snapshot(client_id);
        }
        subscription_id
    }

    /// Detach the client's queue, but only if it still belongs to `subscription_id`.
    pub fn detach_session(&mut self, client_id: &ClientId, subscription_id: SubscriptionId) -> bool {
        let Some(client) = self.clients.get_mut(client_id) else {
            return false;
        };
        let owns_queue = client
            .outbox
            .as_ref()
            .is_some_and(|outbox| outbox.id() == subscription_id);
        if owns_queue {
            client.outbox = None;
        }
        owns_queue
    }

    /// Register a presentation viewer queue.
    pub fn add_viewer(&mut self, outbox: Outbox<ControlEvent>) -> SubscriptionId {
        let id = outbox.id();
        self.viewers.insert(id, outbox);
        id
    }

    pub fn remove_viewer(&mut self, subscription_id: SubscriptionId) -> bool {
        self.viewers.remove(&subscription_id).is_some()
    }

    /// Remove every client last seen before `cutoff`. Returns the evicted ids.
    pub fn evict_seen_before(&mut self, cutoff: Timestamp) -> Vec<ClientId> {
        let stale: Vec<ClientId> = self
            .clients
            .values()
            .filter(|c| c.last_seen < cutoff)
            .map(|c| c.id.clone())
            .collect();
        for id in &stale {
            self.remove_client(id);
        }
        stale
    }
}
