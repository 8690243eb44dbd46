use std::{str::FromStr, sync::LazyLock};

use fractic_server_error::ServerError;
use regex::Regex;
use serde::Deserialize;

use crate::{entities::CellRef, errors::InvalidCellReference};

static A1_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\$?([A-Za-z]{1,3})\$?([1-9][0-9]*)$").expect("hardcoded regex should be valid")
});

/// A1-notation reference such as `"B5"` or `"$H$4"`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CellReferenceModel(CellRef);
impl FromStr for CellReferenceModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = A1_PATTERN
            .captures(s.trim())
            .ok_or_else(|| InvalidCellReference::new(s))?;
        let column = caps[1]
            .to_ascii_uppercase()
            .bytes()
            .try_fold(0u32, |acc, b| acc.checked_mul(26)?.checked_add((b - b'A' + 1) as u32))
            .and_then(|c| u16::try_from(c).ok())
            .ok_or_else(|| InvalidCellReference::new(s))?;
        let row = caps[2]
            .parse::<u32>()
            .map_err(|e| InvalidCellReference::with_debug(s, &e))?;
        Ok(CellReferenceModel(CellRef::new(row, column)))
    }
}
impl<'de> Deserialize<'de> for CellReferenceModel {
    fn deserialize<D>(deserializer: D) -> Result<CellReferenceModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CellReferenceModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl From<CellReferenceModel> for CellRef {
    fn from(model: CellReferenceModel) -> Self {
        model.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> CellRef {
        CellReferenceModel::from_str(s).unwrap().into()
    }

    #[test]
    fn parses_a1_references() {
        assert_eq!(parse("A1"), CellRef::new(1, 1));
        assert_eq!(parse("B5"), CellRef::new(5, 2));
        assert_eq!(parse("$H$4"), CellRef::new(4, 8));
        assert_eq!(parse("ab3"), CellRef::new(3, 28));
    }

    #[test]
    fn display_round_trips() {
        for s in ["A1", "B4", "H5", "J8", "AB30"] {
            assert_eq!(parse(s).to_string(), s);
        }
    }

    #[test]
    fn rejects_malformed_references() {
        for s in ["", "5B", "B0", "B", "12", "B5:C6"] {
            assert!(CellReferenceModel::from_str(s).is_err(), "{s}");
        }
    }
}
