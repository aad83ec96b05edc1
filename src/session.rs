// Interactive controller: the menu loop and the booking, payment and view flows.
// All input is read line by line from one stream; all output goes to one writer.

use std::{
    io::{self, BufRead, Write},
    ops::ControlFlow,
};

use thiserror::Error;
use tracing::{debug, info};

use crate::{
    hotel::{BookingError, BookingRequest, Hotel, SearchCriteria},
    input::{parse_capacity, parse_date, parse_menu_choice, parse_room_id, InputError, MenuChoice},
    payment::{PaymentProcessor, SimulatedPayment},
    reservation::Reservation,
    room::format_amount,
};

pub const MENU: &str = "\n===== Hotel Reservation System =====\n\
                        1. Make a reservation\n\
                        2. View all reservations\n\
                        3. Exit\n";

// The Display of each recoverable variant is the exact line shown to the user
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid choice, please try again.")]
    InvalidChoice,

    #[error("Invalid check-in date format. Please try again.")]
    InvalidCheckIn(#[source] InputError),

    #[error("Invalid check-out date format. Please try again.")]
    InvalidCheckOut(#[source] InputError),

    #[error("Invalid capacity. Please try again.")]
    InvalidCapacity(#[source] InputError),

    #[error("Invalid room selection or room not available.")]
    InvalidRoomId(#[source] InputError),

    #[error("Invalid room selection or room not available.")]
    RoomUnavailable(#[source] BookingError),

    #[error("Input closed")]
    InputClosed,

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

impl SessionError {
    // Recoverable errors are reported and the session returns to the menu.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, SessionError::InputClosed | SessionError::IoError(_))
    }
}

pub struct Session<R, W, P = SimulatedPayment> {
    hotel: Hotel,
    payment: P,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W, SimulatedPayment> {
    pub fn new(hotel: Hotel, input: R, output: W) -> Self {
        Self::with_payment(hotel, SimulatedPayment, input, output)
    }
}

impl<R: BufRead, W: Write, P: PaymentProcessor> Session<R, W, P> {
    pub fn with_payment(hotel: Hotel, payment: P, input: R, output: W) -> Self {
        Self {
            hotel,
            payment,
            input,
            output,
        }
    }

    pub fn hotel(&self) -> &Hotel {
        &self.hotel
    }

    pub fn into_parts(self) -> (Hotel, W) {
        (self.hotel, self.output)
    }

    // Runs until the user picks "Exit" or the input is exhausted.
    pub fn run(&mut self) -> Result<(), SessionError> {
        loop {
            match self.step() {
                Ok(ControlFlow::Continue(())) => {}
                Ok(ControlFlow::Break(())) => return Ok(()),
                Err(SessionError::InputClosed) => {
                    debug!("input closed, leaving the menu loop");
                    return Ok(());
                }
                Err(err) if err.is_recoverable() => {
                    debug!(error = ?err, "flow aborted");
                    writeln!(self.output, "{err}")?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn step(&mut self) -> Result<ControlFlow<()>, SessionError> {
        write!(self.output, "{MENU}")?;
        let raw = self.prompt("Enter your choice: ")?;

        let choice = parse_menu_choice(&raw)
            .ok()
            .flatten()
            .ok_or(SessionError::InvalidChoice)?;

        match choice {
            MenuChoice::MakeReservation => self.make_reservation()?,
            MenuChoice::ViewReservations => self.view_reservations()?,
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting the system...")?;
                return Ok(ControlFlow::Break(()));
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    fn make_reservation(&mut self) -> Result<(), SessionError> {
        let guest_name = self.prompt("Enter your name: ")?;

        let check_in = parse_date(&self.prompt("Enter check-in date (YYYY-MM-DD): ")?)
            .map_err(SessionError::InvalidCheckIn)?;
        let check_out = parse_date(&self.prompt("Enter check-out date (YYYY-MM-DD): ")?)
            .map_err(SessionError::InvalidCheckOut)?;
        let required_capacity = parse_capacity(&self.prompt("Enter the required capacity (number of people): ")?)
            .map_err(SessionError::InvalidCapacity)?;

        let criteria = SearchCriteria {
            check_in,
            check_out,
            required_capacity,
        };

        writeln!(self.output, "Available rooms:")?;
        for room in self.hotel.search(&criteria) {
            writeln!(self.output, "{room}")?;
        }

        let room_id = parse_room_id(&self.prompt("Select a room by entering the room ID: ")?)
            .map_err(SessionError::InvalidRoomId)?;

        let reservation = self
            .hotel
            .book(BookingRequest {
                guest_name,
                room_id,
                check_in,
                check_out,
            })
            .map_err(SessionError::RoomUnavailable)?
            .clone();

        writeln!(self.output, "Reservation successful!")?;
        writeln!(self.output, "{}", reservation.line(self.hotel.category_of(&reservation)))?;

        self.process_payment(&reservation)
    }

    // Runs after the reservation is committed; a rejected method leaves it in place
    fn process_payment(&mut self, reservation: &Reservation) -> Result<(), SessionError> {
        writeln!(
            self.output,
            "Total amount to be paid: ${}",
            format_amount(reservation.total_cost())
        )?;
        let method = self.prompt("Enter your payment method (Credit/Debit): ")?;

        match self.payment.process(reservation, &method) {
            Ok(receipt) => {
                info!(
                    room_id = reservation.room_id(),
                    method = %receipt.method,
                    amount = receipt.amount,
                    "payment processed"
                );
                writeln!(self.output, "Payment processed successfully!")?;
                writeln!(
                    self.output,
                    "Thank you, {}. Your reservation is confirmed.",
                    receipt.guest_name
                )?;
            }
            Err(err) => {
                info!(room_id = reservation.room_id(), error = %err, "payment rejected, reservation kept");
                writeln!(self.output, "Invalid payment method. Please try again.")?;
            }
        }

        Ok(())
    }

    fn view_reservations(&mut self) -> Result<(), SessionError> {
        if self.hotel.ledger().is_empty() {
            writeln!(self.output, "No reservations made yet.")?;
            return Ok(());
        }

        for reservation in self.hotel.ledger().list_all() {
            writeln!(self.output, "{}", reservation.line(self.hotel.category_of(reservation)))?;
        }

        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<String, SessionError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        // Undecodable bytes are replaced rather than failing the session
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(SessionError::InputClosed);
        }

        let line = String::from_utf8_lossy(&raw);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{payment::PaymentError, room::Room};

    fn run_session(input: &str) -> (Hotel, String) {
        let mut session = Session::new(Hotel::default(), input.as_bytes(), Vec::new());
        session.run().unwrap();
        let (hotel, output) = session.into_parts();
        (hotel, String::from_utf8(output).unwrap())
    }

    const ALICE_BOOKS_102: &str = "1\nAlice\n2024-01-10\n2024-01-12\n2\n102\nCredit\n";

    #[test]
    fn test_exit_immediately() {
        let (hotel, output) = run_session("3\n");
        assert_eq!(output, format!("{MENU}Enter your choice: Exiting the system...\n"));
        assert!(hotel.ledger().is_empty());
    }

    #[test]
    fn test_view_on_fresh_session() {
        let (hotel, output) = run_session("2\n3\n");
        assert!(output.contains("No reservations made yet.\n"));
        assert!(!output.contains("Reservation for"));
        assert!(hotel.ledger().is_empty());
    }

    #[test]
    fn test_invalid_menu_choice_reprompts() {
        let (_, output) = run_session("9\nabc\n3\n");
        assert_eq!(output.matches("Invalid choice, please try again.").count(), 2);
        assert_eq!(output.matches("Enter your choice: ").count(), 3);
        assert!(output.ends_with("Exiting the system...\n"));
    }

    #[test]
    fn test_booking_scenario() {
        let (hotel, output) = run_session(&format!("{ALICE_BOOKS_102}3\n"));

        assert!(output.contains(
            "Available rooms:\n\
             Room 102 (Double): $150.0/night, Capacity: 2 people\n\
             Room 103 (Suite): $250.0/night, Capacity: 4 people\n\
             Room 105 (Double): $150.0/night, Capacity: 2 people\n\
             Room 106 (Suite): $250.0/night, Capacity: 4 people\n"
        ));
        assert!(output.contains("Reservation successful!\n"));
        assert!(output.contains("Total amount to be paid: $300.0\n"));
        assert!(output.contains("Thank you, Alice. Your reservation is confirmed.\n"));

        let reservations: Vec<_> = hotel.ledger().list_all().collect();
        assert_eq!(reservations.len(), 1);
        assert_eq!(reservations[0].total_cost(), 300.0);

        let ids: Vec<u32> = hotel.catalog().find_available(2).map(Room::room_id).collect();
        assert_eq!(ids, vec![103, 105, 106]);
    }

    #[test]
    fn test_rebooking_same_room_aborts() {
        let input = format!("{ALICE_BOOKS_102}1\nBob\n2024-02-01\n2024-02-03\n2\n102\n3\n");
        let (hotel, output) = run_session(&input);

        assert!(output.contains("Invalid room selection or room not available.\n"));
        assert_eq!(hotel.ledger().len(), 1);
        assert_eq!(output.matches("Reservation successful!").count(), 1);
    }

    #[test]
    fn test_invalid_check_in_creates_nothing() {
        let (hotel, output) = run_session("1\nAlice\n2024/13/40\n3\n");

        assert!(output.contains("Invalid check-in date format. Please try again.\n"));
        assert!(!output.contains("Enter check-out date"));
        assert!(hotel.ledger().is_empty());
        assert!(hotel.catalog().rooms().iter().all(Room::is_available));
    }

    #[test]
    fn test_invalid_check_out_and_capacity() {
        let (hotel, output) = run_session("1\nAlice\n2024-01-10\nsoon\n1\nBob\n2024-01-10\n2024-01-11\nmany\n3\n");

        assert!(output.contains("Invalid check-out date format. Please try again.\n"));
        assert!(output.contains("Invalid capacity. Please try again.\n"));
        assert!(hotel.ledger().is_empty());
    }

    #[test]
    fn test_non_numeric_room_id() {
        let (hotel, output) = run_session("1\nAlice\n2024-01-10\n2024-01-11\n1\nsuite\n3\n");
        assert!(output.contains("Invalid room selection or room not available.\n"));
        assert!(hotel.ledger().is_empty());
    }

    #[test]
    fn test_room_too_small_is_still_bookable_by_id() {
        // Selection checks the id and the flag, not the requested capacity
        let (hotel, _) = run_session("1\nAlice\n2024-01-10\n2024-01-11\n4\n101\ndebit\n3\n");
        assert_eq!(hotel.ledger().len(), 1);
        assert!(!hotel.catalog().get(101).unwrap().is_available());
    }

    #[test]
    fn test_rejected_payment_keeps_reservation() {
        let (hotel, output) = run_session("1\nAlice\n2024-01-10\n2024-01-12\n2\n102\nCash\n2\n3\n");

        assert!(output.contains("Invalid payment method. Please try again.\n"));
        assert!(!output.contains("Payment processed successfully!"));
        assert_eq!(hotel.ledger().len(), 1);
        assert!(!hotel.catalog().get(102).unwrap().is_available());
        assert!(output.contains(
            "Reservation for Alice: Room 102 (Double), Check-in: 2024-01-10, Check-out: 2024-01-12, Total Cost: $300.0\n"
        ));
    }

    #[test]
    fn test_reversed_dates_are_accepted() {
        let (hotel, output) = run_session("1\nZed\n2024-01-12\n2024-01-10\n1\n101\ncredit\n3\n");
        assert!(output.contains("Total amount to be paid: $-200.0\n"));
        assert_eq!(hotel.ledger().list_all().next().unwrap().total_cost(), -200.0);
    }

    #[test]
    fn test_view_lists_in_creation_order() {
        let input = "1\nAlice\n2024-01-10\n2024-01-12\n1\n103\ncredit\n\
                     1\nBob\n2024-01-10\n2024-01-11\n1\n101\ndebit\n2\n3\n";
        let (_, output) = run_session(input);

        let listing = output.rsplit("Enter your choice: ").nth(1).unwrap();
        assert_eq!(
            listing,
            "Reservation for Alice: Room 103 (Suite), Check-in: 2024-01-10, Check-out: 2024-01-12, Total Cost: $500.0\n\
             Reservation for Bob: Room 101 (Single), Check-in: 2024-01-10, Check-out: 2024-01-11, Total Cost: $100.0\n\
             \n===== Hotel Reservation System =====\n\
             1. Make a reservation\n\
             2. View all reservations\n\
             3. Exit\n"
        );
    }

    #[test]
    fn test_input_closed_mid_booking() {
        let (hotel, output) = run_session("1\nAlice\n2024-01-10\n");
        assert!(output.ends_with("Enter check-out date (YYYY-MM-DD): "));
        assert!(hotel.ledger().is_empty());
    }

    #[test]
    fn test_crlf_input() {
        let (hotel, output) = run_session("1\r\nAlice\r\n2024-01-10\r\n2024-01-12\r\n2\r\n105\r\nDEBIT\r\n3\r\n");
        assert!(output.contains("Thank you, Alice. Your reservation is confirmed.\n"));
        assert_eq!(hotel.ledger().list_all().next().unwrap().guest_name(), "Alice");
    }

    #[test]
    fn test_invalid_utf8_input_is_not_fatal() {
        let input: &[u8] = b"1\nAl\xffce\n2024-01-10\n2024-01-12\n2\n102\ncredit\n\xfe\n2\n3\n";
        let mut session = Session::new(Hotel::default(), input, Vec::new());
        session.run().unwrap();

        let (hotel, output) = session.into_parts();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(hotel.ledger().len(), 1);
        assert_eq!(hotel.ledger().list_all().next().unwrap().guest_name(), "Al\u{fffd}ce");
        assert!(output.contains("Thank you, Al\u{fffd}ce. Your reservation is confirmed.\n"));
        assert!(output.contains("Invalid choice, please try again.\n"));
        assert!(output.ends_with("Exiting the system...\n"));
    }

    struct DecliningPayment;

    impl PaymentProcessor for DecliningPayment {
        fn process(&self, _: &Reservation, method: &str) -> Result<crate::payment::PaymentReceipt, PaymentError> {
            Err(PaymentError::InvalidMethod(method.to_string()))
        }
    }

    #[test]
    fn test_custom_payment_processor() {
        let mut session = Session::with_payment(
            Hotel::default(),
            DecliningPayment,
            ALICE_BOOKS_102.as_bytes(),
            Vec::new(),
        );
        session.run().unwrap();
        assert_eq!(session.hotel().ledger().len(), 1);

        let (_, output) = session.into_parts();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Invalid payment method. Please try again.\n"));
    }
}
