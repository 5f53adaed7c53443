//! Parsing of typed menu input

use chrono::NaiveDate;
use rental_domain::parse_date;
use rental_types::Error;
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// Malformed console input. The current operation is abandoned; nothing is mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid input. Please enter a valid number.")]
    NotANumber,

    #[error("Invalid date format. Please enter the date in MM/DD/YYYY format.")]
    InvalidDate,

    #[error("Invalid schedule format. Please enter dates in MM/DD/YYYY format.")]
    InvalidScheduleRange,

    #[error("Invalid daily rental price. Please enter a valid decimal value.")]
    InvalidPrice,

    #[error("Please enter a file name for the report.")]
    EmptyFileName,
}

impl From<InputError> for Error {
    fn from(err: InputError) -> Self {
        Error::InvalidInput(err.to_string())
    }
}

/// Menu choice such as "2"
pub fn parse_choice(input: &str) -> Result<u32, InputError> {
    input.trim().parse().map_err(|_| InputError::NotANumber)
}

/// Single MM/DD/YYYY date
pub fn parse_date_input(input: &str) -> Result<NaiveDate, InputError> {
    parse_date(input).map_err(|_| InputError::InvalidDate)
}

/// Two dates separated by a dash: "MM/DD/YYYY - MM/DD/YYYY"
pub fn parse_date_range(input: &str) -> Result<(NaiveDate, NaiveDate), InputError> {
    let (pickup, dropoff) = input
        .split_once('-')
        .ok_or(InputError::InvalidScheduleRange)?;
    let pickup = parse_date(pickup).map_err(|_| InputError::InvalidScheduleRange)?;
    let dropoff = parse_date(dropoff).map_err(|_| InputError::InvalidScheduleRange)?;
    Ok((pickup, dropoff))
}

/// Daily rental price such as "49.99"
pub fn parse_price(input: &str) -> Result<Decimal, InputError> {
    Decimal::from_str(input.trim()).map_err(|_| InputError::InvalidPrice)
}
