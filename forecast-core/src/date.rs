use chrono::NaiveDate;

use crate::error::{ForecastError, Result};

/// Strict format accepted for CLI dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Separator between the two endpoints of a date range argument.
const RANGE_SEPARATOR: char = ':';

/// An inclusive range of calendar days with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateInterval {
    /// Build an interval, rejecting ranges whose start falls after their end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(ForecastError::DateOrder { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

/// Parse `YYYY-MM-DD` or `YYYY-MM-DD:YYYY-MM-DD` into a validated interval.
///
/// A single date yields an interval with equal endpoints. Both failure modes
/// come back as values; the caller decides whether to report and exit.
pub fn parse_date_range(input: &str) -> Result<DateInterval> {
    match input.split_once(RANGE_SEPARATOR) {
        Some((start, end)) => DateInterval::new(parse_date(start)?, parse_date(end)?),
        None => {
            let day = parse_date(input)?;
            DateInterval::new(day, day)
        }
    }
}

fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| ForecastError::DateFormat { input: text.to_string() })
}
