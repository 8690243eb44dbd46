use chrono::{Days, NaiveDate};
use fractic_server_error::ServerError;

use crate::{entities::DateWindow, errors::DateWindowOutOfRange};

pub(crate) struct DateGridBuilder {
    period_ending: NaiveDate,
}

impl DateGridBuilder {
    pub(crate) fn new(period_ending: NaiveDate) -> Self {
        Self { period_ending }
    }

    pub(crate) fn build(&self) -> Result<DateWindow, ServerError> {
        let start = self
            .period_ending
            .checked_sub_days(Days::new(6))
            .ok_or_else(|| DateWindowOutOfRange::new(&self.period_ending))?;
        let mut dates = [start; 7];
        for (offset, date) in dates.iter_mut().enumerate() {
            // Cannot overflow: the last entry is `period_ending` itself.
            *date = start + Days::new(offset as u64);
        }
        Ok(DateWindow::from_dates(dates))
    }
}
