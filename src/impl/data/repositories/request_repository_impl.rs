use fractic_server_error::ServerError;

use crate::{
    data::datasources::{
        expense_records_csv_datasource::{
            ExpenseRecordsCsvDatasource, ExpenseRecordsCsvDatasourceImpl,
        },
        report_request_json_datasource::{
            ReportRequestJsonDatasource, ReportRequestJsonDatasourceImpl,
        },
    },
    domain::repositories::request_repository::RequestRepository,
    entities::{ExpenseRecord, ReportRequest},
};

pub(crate) struct RequestRepositoryImpl<
    DS1 = ReportRequestJsonDatasourceImpl, // Default.
    DS2 = ExpenseRecordsCsvDatasourceImpl, // Default.
> where
    DS1: ReportRequestJsonDatasource,
    DS2: ExpenseRecordsCsvDatasource,
{
    request_datasource: DS1,
    records_datasource: DS2,
}

impl<DS1, DS2> RequestRepository for RequestRepositoryImpl<DS1, DS2>
where
    DS1: ReportRequestJsonDatasource + Send + Sync,
    DS2: ExpenseRecordsCsvDatasource + Send + Sync,
{
    fn request_from_json(&self, json: &str) -> Result<ReportRequest, ServerError> {
        self.request_datasource.from_string(json)
    }

    fn records_from_csv(&self, csv: &str) -> Result<Vec<ExpenseRecord>, ServerError> {
        self.records_datasource.from_string(csv)
    }

    fn records_from_csv_file<P>(&self, path: P) -> Result<Vec<ExpenseRecord>, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.records_datasource.from_file(path)
    }
}

impl RequestRepositoryImpl {
    pub(crate) fn new() -> Self {
        RequestRepositoryImpl {
            request_datasource: ReportRequestJsonDatasourceImpl::new(),
            records_datasource: ExpenseRecordsCsvDatasourceImpl::new(),
        }
    }
}
