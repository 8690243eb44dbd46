use tracing::debug;

use crate::entities::{CategoryRow, ExpenseCategory};

pub(crate) struct CategoryClassifier;

impl CategoryClassifier {
    /// Exact, case-sensitive lookup. Never fails: unknown labels go to the
    /// unmatched row.
    pub(crate) fn classify(label: &str) -> CategoryRow {
        match ExpenseCategory::from_label(label) {
            Some(category) => CategoryRow::Known(category),
            None => {
                debug!(label, "expense category not in table, using unmatched row");
                CategoryRow::Unmatched
            }
        }
    }
}
