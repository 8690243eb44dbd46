//! Fixed cell coordinates of the expense report template. These are part of
//! the output format and must not move.

use super::worksheet::CellRef;

pub const HEADER_IMAGE_ANCHOR: CellRef = CellRef::new(1, 1); // A1
pub const EMPLOYEE_DEPARTMENT_CELL: CellRef = CellRef::new(4, 2); // B4
pub const SCHOOL_CELL: CellRef = CellRef::new(5, 2); // B5
pub const PERIOD_ENDING_CELL: CellRef = CellRef::new(4, 8); // H4
pub const TRIP_PURPOSE_CELL: CellRef = CellRef::new(5, 8); // H5

pub const DAY_NAME_ROW: u32 = 7;
pub const DATE_ROW: u32 = 8;
/// Column D; the window occupies D..=J.
pub const FIRST_DATE_COLUMN: u16 = 4;

pub const PER_DIEM_BREAKFAST_ROW: u32 = 19;
pub const PER_DIEM_DINNER_ROW: u32 = 21;
