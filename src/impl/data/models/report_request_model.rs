use fractic_server_error::ServerError;

use crate::{entities::ReportRequest, errors::MissingPeriodEnding};

use super::{
    expense_record_model::ExpenseRecordModel,
    iso_date_model::{deserialize_optional, ISODateModel},
    travel_flag_model::TravelFlagModel,
};

const DEFAULT_SCHOOL: &str = "Default School";
const DEFAULT_TRIP_PURPOSE: &str = "Default Purpose";
const DEFAULT_EMPLOYEE_DEPARTMENT: &str = "Default Department";

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReportRequestModel {
    school: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional")]
    period_ending: Option<ISODateModel>,
    trip_purpose: Option<String>,
    employee_department: Option<String>,
    #[serde(default)]
    travel: TravelFlagModel,
    #[serde(default, deserialize_with = "deserialize_optional")]
    travel_start_date: Option<ISODateModel>,
    #[serde(default, deserialize_with = "deserialize_optional")]
    travel_end_date: Option<ISODateModel>,
    #[serde(default, alias = "filesData", alias = "files_data")]
    expense_records: Vec<ExpenseRecordModel>,
}

/// The HTTP gateway wraps the request as a stringified `body`; direct
/// invocations send the request object itself.
#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct RequestEnvelopeModel {
    pub body: String,
}

impl TryFrom<ReportRequestModel> for ReportRequest {
    type Error = ServerError;

    fn try_from(model: ReportRequestModel) -> Result<Self, Self::Error> {
        let period_ending = model
            .period_ending
            .ok_or_else(|| MissingPeriodEnding::new())?;
        Ok(ReportRequest {
            school: model.school.unwrap_or_else(|| DEFAULT_SCHOOL.into()),
            period_ending: period_ending.into(),
            trip_purpose: model
                .trip_purpose
                .unwrap_or_else(|| DEFAULT_TRIP_PURPOSE.into()),
            employee_department: model
                .employee_department
                .unwrap_or_else(|| DEFAULT_EMPLOYEE_DEPARTMENT.into()),
            travel: model.travel.into(),
            travel_start_date: model.travel_start_date.map(Into::into),
            travel_end_date: model.travel_end_date.map(Into::into),
            expense_records: model.expense_records.into_iter().map(Into::into).collect(),
        })
    }
}
