/// The fixed set of expense categories printed on the report, in row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    Airfare,
    CarRental,
    LocalTransportation,
    TollsParking,
    CarExpense,
    Gas,
    Hotel,
    Telephone,
    BusinessMeals,
    Entertainment,
    OfficeSupplies,
    Postage,
    Tips,
    Other,
}

/// Where an expense lands on the report. Labels outside the fixed table are
/// kept on a catch-all row instead of being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryRow {
    Known(ExpenseCategory),
    Unmatched,
}

pub const FIRST_CATEGORY_ROW: u32 = 10;
pub const UNMATCHED_CATEGORY_ROW: u32 = 24;

// --

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 14] = [
        ExpenseCategory::Airfare,
        ExpenseCategory::CarRental,
        ExpenseCategory::LocalTransportation,
        ExpenseCategory::TollsParking,
        ExpenseCategory::CarExpense,
        ExpenseCategory::Gas,
        ExpenseCategory::Hotel,
        ExpenseCategory::Telephone,
        ExpenseCategory::BusinessMeals,
        ExpenseCategory::Entertainment,
        ExpenseCategory::OfficeSupplies,
        ExpenseCategory::Postage,
        ExpenseCategory::Tips,
        ExpenseCategory::Other,
    ];

    /// Exact label as submitted by the client. Matching is case-sensitive.
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Airfare => "Airfare",
            ExpenseCategory::CarRental => "Car Rental",
            ExpenseCategory::LocalTransportation => "Local Transportation",
            ExpenseCategory::TollsParking => "Tolls/Parking",
            ExpenseCategory::CarExpense => "Car Expense",
            ExpenseCategory::Gas => "Gas",
            ExpenseCategory::Hotel => "Hotel",
            ExpenseCategory::Telephone => "Telephone",
            ExpenseCategory::BusinessMeals => "Business Meals",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::OfficeSupplies => "Office Supplies",
            ExpenseCategory::Postage => "Postage",
            ExpenseCategory::Tips => "Tips",
            ExpenseCategory::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    pub fn row(&self) -> u32 {
        FIRST_CATEGORY_ROW + *self as u32
    }
}

impl CategoryRow {
    pub fn row(&self) -> u32 {
        match self {
            CategoryRow::Known(category) => category.row(),
            CategoryRow::Unmatched => UNMATCHED_CATEGORY_ROW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_table_order() {
        let rows: Vec<u32> = ExpenseCategory::ALL.iter().map(|c| c.row()).collect();
        assert_eq!(rows, (10..=23).collect::<Vec<_>>());
        assert_eq!(ExpenseCategory::Hotel.row(), 16);
        assert_eq!(CategoryRow::Unmatched.row(), 24);
    }

    #[test]
    fn labels_round_trip() {
        for category in ExpenseCategory::ALL {
            assert_eq!(ExpenseCategory::from_label(category.label()), Some(category));
        }
    }
}
