use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// 1-based cell coordinate, same convention as the spreadsheet UI (`A1` is
/// row 1, column 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellRef {
    pub row: u32,
    pub column: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(Decimal),
    Date(NaiveDate),
    /// Formula text including the leading `=`, e.g. `=SUM(D16:J16)`.
    Formula(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlignment {
    #[default]
    General,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub horizontal: HorizontalAlignment,
    pub wrap_text: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub value: CellValue,
    pub style: CellStyle,
}

/// Raw image bytes (PNG/JPEG) plus the scale applied when embedding.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderImage {
    pub data: Vec<u8>,
    pub scale_width: f64,
    pub scale_height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedImage {
    pub anchor: CellRef,
    pub image: HeaderImage,
}

/// In-memory, position-addressed sheet. Loading and serializing it is the
/// job of the data layer; the domain only reads and writes cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Worksheet {
    name: Option<String>,
    cells: BTreeMap<CellRef, Cell>,
    images: Vec<EmbeddedImage>,
}

/// A fully assembled report. Not `Clone`: it is moved to the sink once built.
#[derive(Debug, PartialEq)]
pub struct PopulatedReport {
    worksheet: Worksheet,
}

// --

impl CellRef {
    pub const fn new(row: u32, column: u16) -> Self {
        Self { row, column }
    }
}

impl std::fmt::Display for CellRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut letters = Vec::new();
        let mut n = self.column as u32;
        while n > 0 {
            let rem = (n - 1) % 26;
            letters.push((b'A' + rem as u8) as char);
            n = (n - 1) / 26;
        }
        let column: String = letters.into_iter().rev().collect();
        write!(f, "{}{}", column, self.row)
    }
}

impl CellStyle {
    pub const CENTERED_WRAP: CellStyle = CellStyle {
        horizontal: HorizontalAlignment::Center,
        wrap_text: true,
    };
}

impl CellValue {
    pub fn formula(text: &str) -> Self {
        let text = text.trim();
        if text.starts_with('=') {
            CellValue::Formula(text.to_string())
        } else {
            CellValue::Formula(format!("={text}"))
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<Decimal> for CellValue {
    fn from(d: Decimal) -> Self {
        CellValue::Number(d)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

impl Worksheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn cell(&self, at: CellRef) -> Option<&Cell> {
        self.cells.get(&at)
    }

    pub fn value(&self, at: CellRef) -> Option<&CellValue> {
        self.cells.get(&at).map(|c| &c.value)
    }

    /// Overwrites the value, keeping whatever style the cell already had.
    pub fn set_value(&mut self, at: CellRef, value: impl Into<CellValue>) {
        let value = value.into();
        match self.cells.get_mut(&at) {
            Some(cell) => cell.value = value,
            None => {
                self.cells.insert(
                    at,
                    Cell {
                        value,
                        style: CellStyle::default(),
                    },
                );
            }
        }
    }

    pub fn set_styled(&mut self, at: CellRef, value: impl Into<CellValue>, style: CellStyle) {
        self.cells.insert(
            at,
            Cell {
                value: value.into(),
                style,
            },
        );
    }

    pub fn cells(&self) -> impl Iterator<Item = (&CellRef, &Cell)> {
        self.cells.iter()
    }

    pub fn add_image(&mut self, anchor: CellRef, image: HeaderImage) {
        self.images.push(EmbeddedImage { anchor, image });
    }

    pub fn images(&self) -> &[EmbeddedImage] {
        &self.images
    }
}

impl PopulatedReport {
    pub(crate) fn new(worksheet: Worksheet) -> Self {
        Self { worksheet }
    }

    pub fn worksheet(&self) -> &Worksheet {
        &self.worksheet
    }

    pub fn into_worksheet(self) -> Worksheet {
        self.worksheet
    }
}
