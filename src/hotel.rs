// Session state: the catalog and the ledger, owned together and passed by reference

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    catalog::{CatalogError, RoomCatalog},
    reservation::{Reservation, ReservationLedger},
    room::Room,
};

#[derive(Error, Debug, PartialEq)]
pub enum BookingError {
    #[error("Room {0} is not available")]
    RoomUnavailable(u32),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone)]
pub struct SearchCriteria {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub required_capacity: i64,
}

#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub guest_name: String,
    pub room_id: u32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

#[derive(Debug, Default)]
pub struct Hotel {
    catalog: RoomCatalog,
    ledger: ReservationLedger,
}

impl Hotel {
    pub fn new(catalog: RoomCatalog) -> Self {
        Self {
            catalog,
            ledger: ReservationLedger::new(),
        }
    }

    pub fn catalog(&self) -> &RoomCatalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &ReservationLedger {
        &self.ledger
    }

    // Dates are accepted but availability is a single flag per room, not a calendar
    pub fn search(&self, criteria: &SearchCriteria) -> impl Iterator<Item = &Room> + Clone + '_ {
        debug!(
            check_in = %criteria.check_in,
            check_out = %criteria.check_out,
            required_capacity = criteria.required_capacity,
            "searching available rooms"
        );
        self.catalog.find_available(criteria.required_capacity)
    }

    // Commits a reservation: appended to the ledger and the room marked
    // booked. Nothing is mutated when the room is unknown or already taken.
    pub fn book(&mut self, request: BookingRequest) -> Result<&Reservation, BookingError> {
        let room = self
            .catalog
            .select_available(request.room_id)
            .ok_or(BookingError::RoomUnavailable(request.room_id))?;

        let reservation = Reservation::new(request.guest_name, room, request.check_in, request.check_out);
        self.catalog.mark_booked(request.room_id)?;

        info!(
            room_id = reservation.room_id(),
            nights = reservation.nights(),
            total_cost = reservation.total_cost(),
            "reservation committed"
        );

        Ok(self.ledger.append(reservation))
    }

    // Category of the room a reservation points at.
    pub fn category_of(&self, reservation: &Reservation) -> &str {
        self.catalog
            .get(reservation.room_id())
            .map(Room::category)
            .unwrap_or("unknown")
    }
}
