use chrono::NaiveDate;
use rust_decimal::Decimal;

/// 5.00
pub const BREAKFAST_ALLOWANCE: Decimal = Decimal::from_parts(500, 0, 0, false, 2);
/// 30.00
pub const DINNER_ALLOWANCE: Decimal = Decimal::from_parts(3000, 0, 0, false, 2);

/// Meal allowance granted for one travel day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerDiemAllowance {
    pub date: NaiveDate,
    pub breakfast: Option<Decimal>,
    pub dinner: Option<Decimal>,
}
