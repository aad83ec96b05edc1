// Room catalog: the fixed set of rooms known for the lifetime of a session

use std::collections::HashSet;

use thiserror::Error;

use crate::room::Room;

#[derive(Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("Duplicate room id: {0}")]
    DuplicateRoom(u32),

    #[error("Room {0} has an invalid nightly price")]
    InvalidPrice(u32),

    #[error("Room {0} must hold at least one guest")]
    InvalidCapacity(u32),

    #[error("Unknown room id: {0}")]
    UnknownRoom(u32),
}

#[derive(Debug, Clone)]
pub struct RoomCatalog {
    rooms: Vec<Room>,
}

impl RoomCatalog {
    // The six rooms every session starts with.
    pub fn seeded() -> Self {
        Self {
            rooms: seed_rooms(),
        }
    }

    pub fn from_rooms(rooms: Vec<Room>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(rooms.len());

        for room in &rooms {
            if !seen.insert(room.room_id()) {
                return Err(CatalogError::DuplicateRoom(room.room_id()));
            }
            if !room.price_per_night().is_finite() || room.price_per_night() < 0.0 {
                return Err(CatalogError::InvalidPrice(room.room_id()));
            }
            if room.capacity() == 0 {
                return Err(CatalogError::InvalidCapacity(room.room_id()));
            }
        }

        Ok(Self { rooms })
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn get(&self, room_id: u32) -> Option<&Room> {
        self.rooms.iter().find(|room| room.room_id() == room_id)
    }

    // Available rooms that hold at least `required_capacity` guests, in
    // catalog order. Calling again restarts the scan over the current state.
    pub fn find_available(&self, required_capacity: i64) -> impl Iterator<Item = &Room> + Clone + '_ {
        self.rooms
            .iter()
            .filter(move |room| room.is_available() && room.fits(required_capacity))
    }

    // A room matching both the id and the availability flag.
    pub fn select_available(&self, room_id: u32) -> Option<&Room> {
        self.rooms
            .iter()
            .find(|room| room.room_id() == room_id && room.is_available())
    }

    // Flips the room to booked. Eligibility is the caller's concern.
    pub fn mark_booked(&mut self, room_id: u32) -> Result<(), CatalogError> {
        let room = self
            .rooms
            .iter_mut()
            .find(|room| room.room_id() == room_id)
            .ok_or(CatalogError::UnknownRoom(room_id))?;

        room.mark_booked();
        Ok(())
    }
}

impl Default for RoomCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

pub(crate) fn seed_rooms() -> Vec<Room> {
    vec![
        Room::new(101, "Single", 100.0, 1),
        Room::new(102, "Double", 150.0, 2),
        Room::new(103, "Suite", 250.0, 4),
        Room::new(104, "Single", 100.0, 1),
        Room::new(105, "Double", 150.0, 2),
        Room::new(106, "Suite", 250.0, 4),
    ]
}
