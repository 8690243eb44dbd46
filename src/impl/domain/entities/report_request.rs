use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::errors::{InvertedTravelRange, MissingTravelDates};

use super::expense_record::ExpenseRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRequest {
    pub school: String,
    pub period_ending: NaiveDate,
    pub trip_purpose: String,
    pub employee_department: String,
    pub travel: bool,
    pub travel_start_date: Option<NaiveDate>,
    pub travel_end_date: Option<NaiveDate>,
    pub expense_records: Vec<ExpenseRecord>,
}

/// Inclusive travel date range. Only constructed through
/// `ReportRequest::travel_period`, so `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

// --

impl ReportRequest {
    /// Validates the travel fields. Returns `None` when the request is not for
    /// travel, in which case any supplied travel dates are ignored.
    pub fn travel_period(&self) -> Result<Option<TravelPeriod>, ServerError> {
        if !self.travel {
            return Ok(None);
        }
        match (self.travel_start_date, self.travel_end_date) {
            (Some(start), Some(end)) => TravelPeriod::new(start, end).map(Some),
            _ => Err(MissingTravelDates::new()),
        }
    }
}

impl TravelPeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ServerError> {
        if start > end {
            return Err(InvertedTravelRange::new(&start, &end));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
