// Parsing of the values typed at the console prompts

use chrono::NaiveDate;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),

    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    MakeReservation,
    ViewReservations,
    Exit,
}

// Accepts exactly `YYYY-MM-DD`.
pub fn parse_date(raw: &str) -> Result<NaiveDate, InputError> {
    let raw = raw.trim();

    // chrono tolerates unpadded fields and longer years, the console does not
    let shaped = raw.len() == 10
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !shaped {
        return Err(InputError::InvalidDate(raw.to_string()));
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| InputError::InvalidDate(raw.to_string()))
}

// `None` means a well-formed number outside the menu.
pub fn parse_menu_choice(raw: &str) -> Result<Option<MenuChoice>, InputError> {
    let choice = parse_integer(raw)?;

    Ok(match choice {
        1 => Some(MenuChoice::MakeReservation),
        2 => Some(MenuChoice::ViewReservations),
        3 => Some(MenuChoice::Exit),
        _ => None,
    })
}

// No bounds check: zero or negative capacity simply matches every room
pub fn parse_capacity(raw: &str) -> Result<i64, InputError> {
    parse_integer(raw)
}

pub fn parse_room_id(raw: &str) -> Result<u32, InputError> {
    let raw = raw.trim();
    raw.parse::<u32>()
        .map_err(|_| InputError::InvalidNumber(raw.to_string()))
}

fn parse_integer(raw: &str) -> Result<i64, InputError> {
    let raw = raw.trim();
    raw.parse::<i64>()
        .map_err(|_| InputError::InvalidNumber(raw.to_string()))
}
