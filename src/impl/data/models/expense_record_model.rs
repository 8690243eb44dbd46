use crate::entities::ExpenseRecord;

use super::{currency_amount_model::CurrencyAmountModel, iso_date_model::ISODateModel};

/// One uploaded receipt as described by the client. The amount is sent as
/// `price` by the mobile app.
#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct ExpenseRecordModel {
    pub date: ISODateModel,
    #[serde(alias = "price")]
    pub amount: CurrencyAmountModel,
    pub category: String,
}

impl From<ExpenseRecordModel> for ExpenseRecord {
    fn from(model: ExpenseRecordModel) -> Self {
        ExpenseRecord {
            date: model.date.into(),
            amount: model.amount.into(),
            category: model.category,
        }
    }
}
