use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{HeaderImage, PopulatedReport, Worksheet};

/// Boundary around the template store and the document sink.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn load_template(&self) -> Result<Worksheet, ServerError>;

    async fn load_header_image(&self) -> Result<Option<HeaderImage>, ServerError>;

    fn render(&self, report: &PopulatedReport) -> Result<Vec<u8>, ServerError>;

    /// Consumes the report; returns where it was written.
    async fn save(
        &self,
        report: PopulatedReport,
        destination: &str,
    ) -> Result<std::path::PathBuf, ServerError>;
}
