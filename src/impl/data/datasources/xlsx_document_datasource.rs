use async_trait::async_trait;
use fractic_server_error::ServerError;
use rust_decimal::prelude::ToPrimitive as _;
use rust_xlsxwriter::{ExcelDateTime, Format, FormatAlign, Image, Workbook};

use crate::{
    entities::{Cell, CellRef, CellStyle, CellValue, HorizontalAlignment, Worksheet},
    errors::{WriteError, XlsxSerializationFailed},
};

const DATE_NUM_FORMAT: &str = "yyyy-mm-dd";

#[async_trait]
pub(crate) trait XlsxDocumentDatasource: Send + Sync {
    fn render(&self, sheet: &Worksheet) -> Result<Vec<u8>, ServerError>;

    async fn write<P>(&self, path: P, bytes: Vec<u8>) -> Result<(), ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct XlsxDocumentDatasourceImpl;

impl XlsxDocumentDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }

    fn format_for(style: &CellStyle) -> Format {
        let mut format = Format::new();
        if style.horizontal == HorizontalAlignment::Center {
            format = format.set_align(FormatAlign::Center);
        }
        if style.wrap_text {
            format = format.set_text_wrap();
        }
        format
    }

    /// Cell coordinates are 1-based; the writer is 0-based.
    fn position(at: &CellRef) -> Result<(u32, u16), ServerError> {
        match (at.row.checked_sub(1), at.column.checked_sub(1)) {
            (Some(row), Some(col)) => Ok((row, col)),
            _ => Err(XlsxSerializationFailed::new(&format!(
                "invalid cell position row {} column {}",
                at.row, at.column
            ))),
        }
    }

    fn write_cell(
        sheet: &mut rust_xlsxwriter::Worksheet,
        at: &CellRef,
        cell: &Cell,
    ) -> Result<(), ServerError> {
        let (row, col) = Self::position(at)?;
        let styled = cell.style != CellStyle::default();
        let format = Self::format_for(&cell.style);
        let result = match &cell.value {
            CellValue::Text(s) if styled => {
                sheet.write_string_with_format(row, col, s.as_str(), &format)
            }
            CellValue::Text(s) => sheet.write_string(row, col, s.as_str()),
            CellValue::Number(n) => {
                let n = n.to_f64().ok_or_else(|| {
                    XlsxSerializationFailed::new(&format!("amount {n} at {at} is not representable"))
                })?;
                if styled {
                    sheet.write_number_with_format(row, col, n, &format)
                } else {
                    sheet.write_number(row, col, n)
                }
            }
            CellValue::Date(d) => {
                let datetime = ExcelDateTime::parse_from_str(&d.format("%Y-%m-%d").to_string())
                    .map_err(|e| XlsxSerializationFailed::with_debug(&at.to_string(), &e))?;
                sheet.write_datetime_with_format(
                    row,
                    col,
                    &datetime,
                    &format.set_num_format(DATE_NUM_FORMAT),
                )
            }
            CellValue::Formula(f) if styled => {
                sheet.write_formula_with_format(row, col, f.as_str(), &format)
            }
            CellValue::Formula(f) => sheet.write_formula(row, col, f.as_str()),
        };
        result
            .map(|_| ())
            .map_err(|e| XlsxSerializationFailed::with_debug(&at.to_string(), &e))
    }
}

#[async_trait]
impl XlsxDocumentDatasource for XlsxDocumentDatasourceImpl {
    fn render(&self, sheet: &Worksheet) -> Result<Vec<u8>, ServerError> {
        let mut workbook = Workbook::new();
        let out = workbook.add_worksheet();
        if let Some(name) = sheet.name() {
            out.set_name(name)
                .map_err(|e| XlsxSerializationFailed::with_debug("sheet name", &e))?;
        }
        for (at, cell) in sheet.cells() {
            Self::write_cell(out, at, cell)?;
        }
        for embedded in sheet.images() {
            let (row, col) = Self::position(&embedded.anchor)?;
            let image = Image::new_from_buffer(&embedded.image.data)
                .map_err(|e| XlsxSerializationFailed::with_debug("header image", &e))?
                .set_scale_width(embedded.image.scale_width)
                .set_scale_height(embedded.image.scale_height);
            out.insert_image(row, col, &image)
                .map_err(|e| XlsxSerializationFailed::with_debug("header image", &e))?;
        }
        workbook
            .save_to_buffer()
            .map_err(|e| XlsxSerializationFailed::with_debug("workbook", &e))
    }

    async fn write<P>(&self, path: P, bytes: Vec<u8>) -> Result<(), ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| WriteError::with_debug(&parent.to_string_lossy(), &e))?;
        }
        tokio::fs::write(path, bytes)
            .await
            .map_err(|e| WriteError::with_debug(&path.to_string_lossy(), &e))
    }
}
