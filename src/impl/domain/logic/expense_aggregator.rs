use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::entities::{DateWindow, ExpenseRecord};

pub(crate) struct ExpenseAggregator<'w> {
    window: &'w DateWindow,
}

/// Records grouped by date, restricted to the window. Input order is kept
/// within each date so later records overwrite earlier ones when written.
#[derive(Debug, Default)]
pub(crate) struct ExpensesByDate<'r> {
    by_date: BTreeMap<NaiveDate, Vec<&'r ExpenseRecord>>,
}

impl<'w> ExpenseAggregator<'w> {
    pub(crate) fn new(window: &'w DateWindow) -> Self {
        Self { window }
    }

    pub(crate) fn aggregate<'r>(&self, records: &'r [ExpenseRecord]) -> ExpensesByDate<'r> {
        let by_date = records.iter().fold(
            BTreeMap::<NaiveDate, Vec<&'r ExpenseRecord>>::new(),
            |mut acc, record| {
                if self.window.contains(record.date) {
                    acc.entry(record.date).or_default().push(record);
                } else {
                    debug!(
                        date = %record.date,
                        category = %record.category,
                        "expense record outside report window, skipping"
                    );
                }
                acc
            },
        );
        ExpensesByDate { by_date }
    }
}

impl<'r> ExpensesByDate<'r> {
    pub(crate) fn on(&self, date: NaiveDate) -> &[&'r ExpenseRecord] {
        self.by_date.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.by_date.keys().copied()
    }

    pub(crate) fn placed_count(&self) -> usize {
        self.by_date.values().map(Vec::len).sum()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}
