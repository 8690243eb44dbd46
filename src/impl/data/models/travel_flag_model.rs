use serde::Deserialize;

/// `travel` arrives either as a JSON boolean or as the form's "Yes"/"No"
/// string. Anything other than a case-insensitive "yes" means no travel.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct TravelFlagModel(bool);

#[derive(serde_derive::Deserialize)]
#[serde(untagged)]
enum RawTravelFlag {
    Bool(bool),
    Text(String),
}

impl<'de> Deserialize<'de> for TravelFlagModel {
    fn deserialize<D>(deserializer: D) -> Result<TravelFlagModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(TravelFlagModel(match RawTravelFlag::deserialize(deserializer)? {
            RawTravelFlag::Bool(b) => b,
            RawTravelFlag::Text(s) => s.trim().eq_ignore_ascii_case("yes"),
        }))
    }
}

impl From<TravelFlagModel> for bool {
    fn from(model: TravelFlagModel) -> Self {
        model.0
    }
}
