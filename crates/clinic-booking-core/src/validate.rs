//! Booking date validation.
//!
//! Compares calendar days only: the input date against the clock's local
//! "today". No timezone normalization is attempted.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::ClinicResult;
use crate::view::Surface;

pub const PAST_DATE_MESSAGE: &str = "❌ Date must be today or a future date.";

/// Value format of date inputs.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of the current local date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Result of checking a date field's value.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum DateCheck {
    /// Empty or not a calendar date; left to the input's own constraints
    NoDate,
    /// Today or later
    Valid(NaiveDate),
    /// Strictly before today
    Past(NaiveDate),
}

impl DateCheck {
    pub fn is_ok(&self) -> bool {
        !matches!(self, Self::Past(_))
    }

    /// Inline error text, if the check failed.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Past(_) => Some(PAST_DATE_MESSAGE),
            Self::NoDate | Self::Valid(_) => None,
        }
    }
}

/// Check a date input value against `today`. Same day passes, and only a
/// parsed date strictly before `today` fails.
pub fn check_date(value: &str, today: NaiveDate) -> DateCheck {
    match NaiveDate::parse_from_str(value.trim(), DATE_FORMAT) {
        Ok(date) if date < today => DateCheck::Past(date),
        Ok(date) => DateCheck::Valid(date),
        Err(_) => DateCheck::NoDate,
    }
}

/// Check a date field and show or clear its inline error.
pub fn validate_date_field<S: Surface>(
    surface: &mut S,
    field: &str,
    today: NaiveDate,
) -> ClinicResult<DateCheck> {
    let check = check_date(&surface.value(field)?, today);
    surface.set_field_error(field, check.message())?;
    if !check.is_ok() {
        log::debug!("#{} rejected: {:?}", field, check);
    }
    Ok(check)
}

/// `min` attribute value for date inputs.
pub fn min_date(today: NaiveDate) -> String {
    today.format(DATE_FORMAT).to_string()
}
