use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    config::ReportConfig,
    data::repositories::report_repository_impl::ReportRepositoryImpl,
    domain::{
        logic::report_assembler::ReportAssembler,
        repositories::report_repository::ReportRepository,
    },
    entities::{PopulatedReport, ReportRequest},
};

#[async_trait]
pub trait AssembleReportUsecase: Send + Sync {
    async fn assemble(&self, request: &ReportRequest) -> Result<PopulatedReport, ServerError>;

    async fn render(&self, request: &ReportRequest) -> Result<Vec<u8>, ServerError>;

    async fn generate(
        &self,
        request: &ReportRequest,
        destination: &str,
    ) -> Result<std::path::PathBuf, ServerError>;
}

pub(crate) struct AssembleReportUsecaseImpl<
    R1 = ReportRepositoryImpl, // Default.
> where
    R1: ReportRepository,
{
    report_repository: R1,
}

#[async_trait]
impl<R1> AssembleReportUsecase for AssembleReportUsecaseImpl<R1>
where
    R1: ReportRepository,
{
    async fn assemble(&self, request: &ReportRequest) -> Result<PopulatedReport, ServerError> {
        let (template, header_image) = futures::try_join!(
            self.report_repository.load_template(),
            self.report_repository.load_header_image()
        )?;
        ReportAssembler::new(&template, header_image.as_ref()).assemble(request)
    }

    async fn render(&self, request: &ReportRequest) -> Result<Vec<u8>, ServerError> {
        let report = self.assemble(request).await?;
        self.report_repository.render(&report)
    }

    async fn generate(
        &self,
        request: &ReportRequest,
        destination: &str,
    ) -> Result<std::path::PathBuf, ServerError> {
        // Nothing reaches the sink unless assembly fully succeeded.
        let report = self.assemble(request).await?;
        self.report_repository.save(report, destination).await
    }
}

impl AssembleReportUsecaseImpl {
    pub(crate) fn new(config: ReportConfig) -> Self {
        AssembleReportUsecaseImpl {
            report_repository: ReportRepositoryImpl::new(config),
        }
    }
}
