//! Process-wide room registry.

use std::collections::HashMap;

use super::{
    admin_token::AdminTokenIssuer,
    entity::Room,
    value_object::{AdminToken, ClientId, RoomId, Timestamp},
};

/// Every room known to the process, keyed by id.
///
/// The registry is the whole shared state; it lives behind one lock.
#[derive(Debug)]
pub struct RoomRegistry {
    issuer: AdminTokenIssuer,
    rooms: HashMap<RoomId, Room>,
}

impl RoomRegistry {
    pub fn new(issuer: AdminTokenIssuer) -> Self {
        Self {
            issuer,
            rooms: HashMap::new(),
        }
    }

    /// Return the room, creating an empty one on first reference.
    pub fn get_or_create_room(&mut self, room_id: &RoomId, now: Timestamp) -> &mut Room {
        let issuer = &self.issuer;
        self.rooms.entry(room_id.clone()).or_insert_with(|| {
            tracing::info!("Room '{}' created", room_id);
            Room::new(room_id.clone(), issuer.issue(room_id), now)
        })
    }

    /// Allocate a fresh room and return its id.
    pub fn create_room(&mut self, now: Timestamp) -> RoomId {
        let room_id = loop {
            let candidate = RoomId::generate();
            if !self.rooms.contains_key(&candidate) {
                break candidate;
            }
        };
        self.get_or_create_room(&room_id, now);
        room_id
    }

    pub fn room(&self, room_id: &RoomId) -> Option<&Room> {
        self.rooms.get(room_id)
    }

    pub fn admin_token(&self, room_id: &RoomId) -> AdminToken {
        self.issuer.issue(room_id)
    }

    /// Evict every client across all rooms last seen before `cutoff`.
    pub fn evict_seen_before(&mut self, cutoff: Timestamp) -> Vec<(RoomId, ClientId)> {
        self.rooms
            .values_mut()
            .flat_map(|room| {
                let room_id = room.id().clone();
                room.evict_seen_before(cutoff)
                    .into_iter()
                    .map(move |client_id| (room_id.clone(), client_id))
            })
            .collect()
    }
}
