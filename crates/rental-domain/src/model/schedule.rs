//! Pickup/dropoff intervals and the overlap predicate

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rental_types::LedgerError;
use rust_decimal::Decimal;
use serde::Serialize;

/// Date format used for every date the user types or reads (MM/DD/YYYY)
pub const DATE_FORMAT: &str = "%m/%d/%Y";

const SECONDS_PER_DAY: i64 = 86_400;

/// Parse a calendar date in MM/DD/YYYY form
pub fn parse_date(input: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
}

/// Render a calendar date as MM/DD/YYYY
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Render a timestamp as MM/DD/YYYY, adding HH:MM only when it is not midnight
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    if ts.time() == NaiveTime::MIN {
        format_date(ts.date())
    } else {
        ts.format("%m/%d/%Y %H:%M").to_string()
    }
}

/// A rental interval, half-open: `[pickup, dropoff)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Schedule {
    pickup: NaiveDateTime,
    dropoff: NaiveDateTime,
}

impl Schedule {
    /// Build a schedule; pickup must be strictly before dropoff
    pub fn new(pickup: NaiveDateTime, dropoff: NaiveDateTime) -> Result<Self, LedgerError> {
        if pickup >= dropoff {
            return Err(LedgerError::InvalidSchedule {
                pickup: format_timestamp(pickup),
                dropoff: format_timestamp(dropoff),
            });
        }
        Ok(Self { pickup, dropoff })
    }

    /// Build a schedule from two calendar dates, both at midnight
    pub fn from_dates(pickup: NaiveDate, dropoff: NaiveDate) -> Result<Self, LedgerError> {
        Self::new(
            pickup.and_time(NaiveTime::MIN),
            dropoff.and_time(NaiveTime::MIN),
        )
    }

    pub fn pickup(&self) -> NaiveDateTime {
        self.pickup
    }

    pub fn dropoff(&self) -> NaiveDateTime {
        self.dropoff
    }

    /// True when the two intervals share any instant.
    ///
    /// Touching endpoints (one dropoff equal to the other's pickup) do not overlap.
    pub fn overlaps(&self, other: &Schedule) -> bool {
        self.pickup < other.dropoff && self.dropoff > other.pickup
    }

    /// Length of the rental in (possibly fractional) days
    pub fn days(&self) -> Decimal {
        let seconds = (self.dropoff - self.pickup).num_seconds();
        Decimal::from(seconds) / Decimal::from(SECONDS_PER_DAY)
    }
}

impl std::fmt::Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}",
            format_timestamp(self.pickup),
            format_timestamp(self.dropoff)
        )
    }
}
