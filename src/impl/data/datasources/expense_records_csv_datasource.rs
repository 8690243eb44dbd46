use std::{fs, str::FromStr as _};

use fractic_server_error::ServerError;

use crate::{
    data::models::{currency_amount_model::CurrencyAmountModel, iso_date_model::ISODateModel},
    entities::ExpenseRecord,
    errors::{InvalidCsv, ReadError},
};

/// Reads `date,amount,category` rows (header row required).
pub(crate) trait ExpenseRecordsCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<ExpenseRecord>, ServerError>;

    fn from_file<P>(&self, path: P) -> Result<Vec<ExpenseRecord>, ServerError>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct ExpenseRecordsCsvDatasourceImpl;

impl ExpenseRecordsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl ExpenseRecordsCsvDatasource for ExpenseRecordsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<ExpenseRecord>, ServerError> {
        csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_date = r.get(0).unwrap_or("");
                    let raw_amount = r.get(1).unwrap_or("");
                    let raw_category = r.get(2).unwrap_or("");

                    // Parse.
                    let date = ISODateModel::from_str(raw_date)?;
                    let amount = CurrencyAmountModel::from_str(raw_amount)?;

                    // Build.
                    Ok(ExpenseRecord {
                        date: date.into(),
                        amount: amount.into(),
                        category: raw_category.into(),
                    })
                })
            })
            .collect()
    }

    fn from_file<P>(&self, path: P) -> Result<Vec<ExpenseRecord>, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.from_string(&fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
    }
}
