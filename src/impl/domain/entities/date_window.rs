use chrono::NaiveDate;

/// Column labels of the report, assigned by position. The first column is
/// always labelled "Sunday", whatever weekday its date actually falls on.
pub const DAY_LABELS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Seven consecutive dates, oldest first, ending on the period-ending date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    dates: [NaiveDate; 7],
}

/// One column of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateColumn {
    /// 0 for the oldest date, 6 for the period-ending date.
    pub position: usize,
    pub label: &'static str,
    pub date: NaiveDate,
}

// --

impl DateWindow {
    pub(crate) fn from_dates(dates: [NaiveDate; 7]) -> Self {
        Self { dates }
    }

    pub fn dates(&self) -> &[NaiveDate; 7] {
        &self.dates
    }

    pub fn period_ending(&self) -> NaiveDate {
        self.dates[6]
    }

    pub fn period_start(&self) -> NaiveDate {
        self.dates[0]
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.period_start() <= date && date <= self.period_ending()
    }

    pub fn position_of(&self, date: NaiveDate) -> Option<usize> {
        self.dates.iter().position(|d| *d == date)
    }

    pub fn columns(&self) -> impl Iterator<Item = DateColumn> + '_ {
        self.dates
            .iter()
            .zip(DAY_LABELS)
            .enumerate()
            .map(|(position, (date, label))| DateColumn {
                position,
                label,
                date: *date,
            })
    }
}
