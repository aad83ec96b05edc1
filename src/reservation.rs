// Reservations and the append-only ledger that records them

use std::fmt;

use chrono::NaiveDate;

use crate::room::{format_amount, Room};

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    guest_name: String,
    room_id: u32,
    check_in: NaiveDate,
    check_out: NaiveDate,
    total_cost: f64,
}

impl Reservation {
    // The cost is fixed here from the room's current nightly price. A
    // check-out on or before check-in yields a zero or negative cost.
    pub fn new(guest_name: impl Into<String>, room: &Room, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        let nights = (check_out - check_in).num_days();

        Self {
            guest_name: guest_name.into(),
            room_id: room.room_id(),
            check_in,
            check_out,
            total_cost: nights as f64 * room.price_per_night(),
        }
    }

    pub fn guest_name(&self) -> &str {
        &self.guest_name
    }

    pub fn room_id(&self) -> u32 {
        self.room_id
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    // Display form; the category comes from the catalog entry for `room_id`.
    pub fn line<'a>(&'a self, category: &'a str) -> ReservationLine<'a> {
        ReservationLine {
            reservation: self,
            category,
        }
    }
}

pub struct ReservationLine<'a> {
    reservation: &'a Reservation,
    category: &'a str,
}

impl fmt::Display for ReservationLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.reservation;
        write!(
            f,
            "Reservation for {}: Room {} ({}), Check-in: {}, Check-out: {}, Total Cost: ${}",
            r.guest_name,
            r.room_id,
            self.category,
            r.check_in.format("%Y-%m-%d"),
            r.check_out.format("%Y-%m-%d"),
            format_amount(r.total_cost)
        )
    }
}

#[derive(Debug, Default)]
pub struct ReservationLedger {
    entries: Vec<Reservation>,
}

impl ReservationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    // No uniqueness or overlap check
    pub fn append(&mut self, reservation: Reservation) -> &Reservation {
        self.entries.push(reservation);
        &self.entries[self.entries.len() - 1]
    }

    pub fn list_all(&self) -> impl Iterator<Item = &Reservation> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
