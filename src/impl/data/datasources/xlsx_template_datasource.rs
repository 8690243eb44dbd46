use std::io::Cursor;

use async_trait::async_trait;
use calamine::{open_workbook_auto_from_rs, Data, DataType as _, Reader as _};
use fractic_server_error::ServerError;
use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    entities::{CellRef, CellValue, Worksheet},
    errors::{InvalidTemplate, ReadError},
};

/// Loads the first sheet of an XLSX template as cell values and formulas.
/// Styling in the template file is not carried over.
#[async_trait]
pub(crate) trait XlsxTemplateDatasource: Send + Sync {
    async fn from_file<P>(&self, path: P) -> Result<Worksheet, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    fn from_bytes(&self, bytes: Vec<u8>) -> Result<Worksheet, ServerError>;
}

pub(crate) struct XlsxTemplateDatasourceImpl;

impl XlsxTemplateDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }

    fn cell_value(data: &Data) -> Option<CellValue> {
        match data {
            Data::Empty => None,
            Data::String(s) => Some(CellValue::Text(s.clone())),
            Data::Int(i) => Some(CellValue::Number(Decimal::from(*i))),
            Data::Float(f) => Some(
                Decimal::try_from(*f)
                    .map(CellValue::Number)
                    .unwrap_or_else(|_| CellValue::Text(f.to_string())),
            ),
            Data::DateTime(_) | Data::DateTimeIso(_) => Some(
                data.as_date()
                    .map(CellValue::Date)
                    .unwrap_or_else(|| CellValue::Text(data.to_string())),
            ),
            other => Some(CellValue::Text(other.to_string())),
        }
    }

    /// Range-relative, 0-based offsets to a 1-based `CellRef`.
    fn cell_ref(start: (u32, u32), row: usize, col: usize) -> Result<CellRef, ServerError> {
        let row = start.0 as usize + row + 1;
        let col = start.1 as usize + col + 1;
        match (u32::try_from(row), u16::try_from(col)) {
            (Ok(row), Ok(col)) => Ok(CellRef::new(row, col)),
            _ => Err(InvalidTemplate::new("cell outside addressable range")),
        }
    }
}

#[async_trait]
impl XlsxTemplateDatasource for XlsxTemplateDatasourceImpl {
    async fn from_file<P>(&self, path: P) -> Result<Worksheet, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let bytes = tokio::fs::read(path.as_ref())
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_bytes(bytes)
    }

    fn from_bytes(&self, bytes: Vec<u8>) -> Result<Worksheet, ServerError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
            .map_err(|e| InvalidTemplate::with_debug("not a readable workbook", &e))?;
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| InvalidTemplate::new("workbook has no sheets"))?;
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| InvalidTemplate::with_debug("first sheet could not be read", &e))?;
        let formulas = workbook
            .worksheet_formula(&sheet_name)
            .map_err(|e| InvalidTemplate::with_debug("formulas could not be read", &e))?;

        let mut sheet = Worksheet::named(sheet_name.as_str());
        let start = range.start().unwrap_or((0, 0));
        for (row, col, data) in range.used_cells() {
            let Some(value) = Self::cell_value(data) else {
                continue;
            };
            sheet.set_value(Self::cell_ref(start, row, col)?, value);
        }
        // Formula cells replace their cached result.
        let start = formulas.start().unwrap_or((0, 0));
        for (row, col, formula) in formulas.used_cells() {
            let formula = formula.trim();
            if formula.is_empty() {
                continue;
            }
            sheet.set_value(Self::cell_ref(start, row, col)?, CellValue::formula(formula));
        }
        debug!(
            sheet = sheet_name.as_str(),
            cells = sheet.cells().count(),
            "loaded report template"
        );
        Ok(sheet)
    }
}
