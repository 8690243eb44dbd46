use fractic_server_error::ServerError;

use crate::entities::{ExpenseRecord, ReportRequest};

pub trait RequestRepository: Send + Sync {
    fn request_from_json(&self, json: &str) -> Result<ReportRequest, ServerError>;

    fn records_from_csv(&self, csv: &str) -> Result<Vec<ExpenseRecord>, ServerError>;

    fn records_from_csv_file<P>(&self, path: P) -> Result<Vec<ExpenseRecord>, ServerError>
    where
        P: AsRef<std::path::Path>;
}
