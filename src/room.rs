// Room records held by the catalog

use std::fmt;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Room {
    room_id: u32,
    category: String,
    price_per_night: f64,
    capacity: u32,
    #[serde(skip, default = "default_available")]
    available: bool,
}

fn default_available() -> bool {
    true
}

impl Room {
    // All rooms are available when created
    pub fn new(room_id: u32, category: impl Into<String>, price_per_night: f64, capacity: u32) -> Self {
        Self {
            room_id,
            category: category.into(),
            price_per_night,
            capacity,
            available: true,
        }
    }

    pub fn room_id(&self) -> u32 {
        self.room_id
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price_per_night(&self) -> f64 {
        self.price_per_night
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn fits(&self, required_capacity: i64) -> bool {
        i64::from(self.capacity) >= required_capacity
    }

    pub fn mark_booked(&mut self) {
        self.available = false;
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room {} ({}): ${}/night, Capacity: {} people",
            self.room_id,
            self.category,
            format_amount(self.price_per_night),
            self.capacity
        )
    }
}

// Renders a monetary amount the way the console has always shown it:
// whole values keep a single decimal (`150.0`), anything else prints as is.
pub fn format_amount(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 {
        format!("{:.1}", amount)
    } else {
        format!("{}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_room_is_available() {
        let room = Room::new(101, "Single", 100.0, 1);
        assert!(room.is_available());
        assert_eq!(room.room_id(), 101);
        assert_eq!(room.category(), "Single");
    }

    #[test]
    fn test_mark_booked_is_sticky() {
        let mut room = Room::new(102, "Double", 150.0, 2);
        room.mark_booked();
        assert!(!room.is_available());
        room.mark_booked();
        assert!(!room.is_available());
    }

    #[test]
    fn test_fits_compares_against_capacity() {
        let room = Room::new(103, "Suite", 250.0, 4);
        assert!(room.fits(4));
        assert!(room.fits(0));
        assert!(room.fits(-3));
        assert!(!room.fits(5));
    }

    #[test]
    fn test_display() {
        let room = Room::new(102, "Double", 150.0, 2);
        assert_eq!(
            room.to_string(),
            "Room 102 (Double): $150.0/night, Capacity: 2 people"
        );
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(300.0), "300.0");
        assert_eq!(format_amount(0.0), "0.0");
        assert_eq!(format_amount(-150.0), "-150.0");
        assert_eq!(format_amount(99.5), "99.5");
    }
}
