use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A single priced receipt, as produced by ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRecord {
    pub date: NaiveDate,
    pub amount: Decimal,
    /// Free-text label, matched exactly against `ExpenseCategory::label`.
    pub category: String,
}

// --

impl ExpenseRecord {
    pub fn new(date: NaiveDate, amount: Decimal, category: impl Into<String>) -> Self {
        Self {
            date,
            amount,
            category: category.into(),
        }
    }
}
