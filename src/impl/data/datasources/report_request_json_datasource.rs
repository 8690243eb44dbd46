use fractic_server_error::ServerError;

use crate::{
    data::models::report_request_model::{ReportRequestModel, RequestEnvelopeModel},
    entities::ReportRequest,
    errors::InvalidRequestJson,
};

pub(crate) trait ReportRequestJsonDatasource {
    fn from_string(&self, s: &str) -> Result<ReportRequest, ServerError>;
}

pub(crate) struct ReportRequestJsonDatasourceImpl;

impl ReportRequestJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl ReportRequestJsonDatasource for ReportRequestJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<ReportRequest, ServerError> {
        let value: serde_json::Value =
            serde_json::from_str(s).map_err(|e| InvalidRequestJson::with_debug(&e))?;
        let model: ReportRequestModel = match value.get("body").and_then(|b| b.as_str()) {
            Some(_) => {
                let envelope: RequestEnvelopeModel = serde_json::from_value(value)
                    .map_err(|e| InvalidRequestJson::with_debug(&e))?;
                serde_json::from_str(&envelope.body)
                    .map_err(|e| InvalidRequestJson::with_debug(&e))?
            }
            None => serde_json::from_value(value).map_err(|e| InvalidRequestJson::with_debug(&e))?,
        };
        model.try_into()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::entities::ExpenseRecord;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 1, day).unwrap()
    }

    #[test]
    fn parses_full_request() {
        let json = r#"{
            "school": "Lincoln Elementary",
            "periodEnding": "2022-01-08",
            "tripPurpose": "Science fair",
            "employeeDepartment": "A. Rivera / Science",
            "travel": "Yes",
            "travelStartDate": "2022-01-02",
            "travelEndDate": "2022-01-04",
            "filesData": [
                { "date": "2022-01-05", "price": 42.5, "category": "Hotel" },
                { "date": "2022-01-03", "price": "18.00", "category": "Gas" }
            ]
        }"#;
        let request = ReportRequestJsonDatasourceImpl::new().from_string(json).unwrap();
        assert_eq!(
            request,
            ReportRequest {
                school: "Lincoln Elementary".into(),
                period_ending: d(8),
                trip_purpose: "Science fair".into(),
                employee_department: "A. Rivera / Science".into(),
                travel: true,
                travel_start_date: Some(d(2)),
                travel_end_date: Some(d(4)),
                expense_records: vec![
                    ExpenseRecord::new(d(5), dec!(42.5), "Hotel"),
                    ExpenseRecord::new(d(3), dec!(18.00), "Gas"),
                ],
            }
        );
    }

    #[test]
    fn missing_text_fields_fall_back_to_defaults() {
        let request = ReportRequestJsonDatasourceImpl::new()
            .from_string(r#"{ "periodEnding": "2022-01-08" }"#)
            .unwrap();
        assert_eq!(request.school, "Default School");
        assert_eq!(request.trip_purpose, "Default Purpose");
        assert_eq!(request.employee_department, "Default Department");
        assert!(!request.travel);
        assert!(request.expense_records.is_empty());
    }

    #[test]
    fn travel_flag_variants() {
        let datasource = ReportRequestJsonDatasourceImpl::new();
        let travel = |flag: &str| {
            datasource
                .from_string(&format!(
                    r#"{{ "periodEnding": "2022-01-08", "travel": {flag} }}"#
                ))
                .unwrap()
                .travel
        };
        assert!(travel("true"));
        assert!(travel(r#""yes""#));
        assert!(travel(r#""YES""#));
        assert!(!travel("false"));
        assert!(!travel(r#""no""#));
        assert!(!travel(r#""Default Travel""#));
    }

    #[test]
    fn blank_travel_dates_are_absent() {
        let request = ReportRequestJsonDatasourceImpl::new()
            .from_string(
                r#"{ "periodEnding": "2022-01-08", "travel": "no",
                     "travelStartDate": "", "travelEndDate": null }"#,
            )
            .unwrap();
        assert_eq!(request.travel_start_date, None);
        assert_eq!(request.travel_end_date, None);
    }

    #[test]
    fn unwraps_gateway_envelope() {
        let inner = r#"{"school":"Eastside","periodEnding":"2022-01-08"}"#;
        let envelope = serde_json::json!({ "body": inner }).to_string();
        let request = ReportRequestJsonDatasourceImpl::new()
            .from_string(&envelope)
            .unwrap();
        assert_eq!(request.school, "Eastside");
    }

    #[test]
    fn rejects_invalid_input() {
        let datasource = ReportRequestJsonDatasourceImpl::new();
        assert!(datasource.from_string("not json").is_err());
        assert!(datasource.from_string(r#"{ "school": "x" }"#).is_err());
        assert!(datasource
            .from_string(r#"{ "periodEnding": "01/08/2022" }"#)
            .is_err());
        assert!(datasource
            .from_string(
                r#"{ "periodEnding": "2022-01-08",
                     "filesData": [{ "date": "2022-01-05", "price": "n/a", "category": "Gas" }] }"#
            )
            .is_err());
    }
}
