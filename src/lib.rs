// Hotel reservation console: room catalog, reservation ledger and the interactive session

pub mod catalog;
pub mod config;
pub mod hotel;
pub mod input;
pub mod payment;
pub mod reservation;
pub mod room;
pub mod session;

// Re-export key types for convenience
pub use catalog::{CatalogError, RoomCatalog};
pub use config::{ConfigError, HotelConfig};
pub use hotel::{BookingError, BookingRequest, Hotel, SearchCriteria};
pub use input::{InputError, MenuChoice};
pub use payment::{PaymentError, PaymentMethod, PaymentProcessor, PaymentReceipt, SimulatedPayment};
pub use reservation::{Reservation, ReservationLedger};
pub use room::Room;
pub use session::{Session, SessionError};
