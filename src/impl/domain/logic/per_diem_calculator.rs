use crate::entities::{
    DateWindow, PerDiemAllowance, TravelPeriod, BREAKFAST_ALLOWANCE, DINNER_ALLOWANCE,
};

pub(crate) struct PerDiemCalculator {
    period: TravelPeriod,
}

impl PerDiemCalculator {
    pub(crate) fn new(period: TravelPeriod) -> Self {
        Self { period }
    }

    /// Allowances for the window dates that fall inside the travel period.
    ///
    /// Departure day gets dinner only, return day breakfast only, and days
    /// in between both. A trip that starts and ends on the same day is
    /// treated as a departure day (dinner only).
    pub(crate) fn calculate(&self, window: &DateWindow) -> Vec<PerDiemAllowance> {
        let start = self.period.start();
        let end = self.period.end();
        window
            .dates()
            .iter()
            .copied()
            .filter(|date| self.period.contains(*date))
            .map(|date| {
                if date == start {
                    PerDiemAllowance {
                        date,
                        breakfast: None,
                        dinner: Some(DINNER_ALLOWANCE),
                    }
                } else if date == end {
                    PerDiemAllowance {
                        date,
                        breakfast: Some(BREAKFAST_ALLOWANCE),
                        dinner: None,
                    }
                } else {
                    PerDiemAllowance {
                        date,
                        breakfast: Some(BREAKFAST_ALLOWANCE),
                        dinner: Some(DINNER_ALLOWANCE),
                    }
                }
            })
            .collect()
    }
}
