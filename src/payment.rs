// Simulated payment confirmation

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::reservation::Reservation;

#[derive(Error, Debug, PartialEq)]
pub enum PaymentError {
    #[error("Invalid payment method: {0:?}")]
    InvalidMethod(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Credit,
    Debit,
}

impl FromStr for PaymentMethod {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("credit") {
            Ok(PaymentMethod::Credit)
        } else if s.eq_ignore_ascii_case("debit") {
            Ok(PaymentMethod::Debit)
        } else {
            Err(PaymentError::InvalidMethod(s.to_string()))
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Credit => f.write_str("Credit"),
            PaymentMethod::Debit => f.write_str("Debit"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentReceipt {
    pub guest_name: String,
    pub method: PaymentMethod,
    pub amount: f64,
}

// Payment trait, kept separate so the console does not depend on how a charge is settled
pub trait PaymentProcessor {
    fn process(&self, reservation: &Reservation, method: &str) -> Result<PaymentReceipt, PaymentError>;
}

// Accepts any supported method without contacting a gateway.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedPayment;

impl PaymentProcessor for SimulatedPayment {
    fn process(&self, reservation: &Reservation, method: &str) -> Result<PaymentReceipt, PaymentError> {
        let method = method.parse::<PaymentMethod>()?;

        Ok(PaymentReceipt {
            guest_name: reservation.guest_name().to_string(),
            method,
            amount: reservation.total_cost(),
        })
    }
}
