use std::str::FromStr;

use chrono::NaiveDate;
use fractic_server_error::ServerError;
use serde::Deserialize;

use crate::errors::InvalidIsoDate;

#[derive(Debug)]
pub(crate) struct ISODateModel(NaiveDate);
impl FromStr for ISODateModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let d = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| InvalidIsoDate::with_debug(s, &e))?;
        Ok(ISODateModel(d))
    }
}
impl<'de> Deserialize<'de> for ISODateModel {
    fn deserialize<D>(deserializer: D) -> Result<ISODateModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ISODateModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// For optional request fields: absent, `null` and blank strings are all
/// treated as "not provided".
pub(crate) fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<ISODateModel>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !s.trim().is_empty() => ISODateModel::from_str(&s)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

impl From<ISODateModel> for NaiveDate {
    fn from(model: ISODateModel) -> Self {
        model.0
    }
}
