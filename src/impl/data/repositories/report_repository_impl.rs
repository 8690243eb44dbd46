use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::info;

use crate::{
    config::ReportConfig,
    data::datasources::{
        xlsx_document_datasource::{XlsxDocumentDatasource, XlsxDocumentDatasourceImpl},
        xlsx_template_datasource::{XlsxTemplateDatasource, XlsxTemplateDatasourceImpl},
    },
    domain::repositories::report_repository::ReportRepository,
    entities::{HeaderImage, PopulatedReport, Worksheet},
    errors::{InvalidDestination, ReadError},
};

pub(crate) struct ReportRepositoryImpl<
    DS1 = XlsxTemplateDatasourceImpl, // Default.
    DS2 = XlsxDocumentDatasourceImpl, // Default.
> where
    DS1: XlsxTemplateDatasource,
    DS2: XlsxDocumentDatasource,
{
    config: ReportConfig,
    template_datasource: DS1,
    document_datasource: DS2,
}

#[async_trait]
impl<DS1, DS2> ReportRepository for ReportRepositoryImpl<DS1, DS2>
where
    DS1: XlsxTemplateDatasource,
    DS2: XlsxDocumentDatasource,
{
    async fn load_template(&self) -> Result<Worksheet, ServerError> {
        self.template_datasource
            .from_file(&self.config.template_path)
            .await
    }

    async fn load_header_image(&self) -> Result<Option<HeaderImage>, ServerError> {
        let Some(path) = &self.config.header_image_path else {
            return Ok(None);
        };
        let data = tokio::fs::read(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        let (scale_width, scale_height) = self.config.header_image_scale;
        Ok(Some(HeaderImage {
            data,
            scale_width,
            scale_height,
        }))
    }

    fn render(&self, report: &PopulatedReport) -> Result<Vec<u8>, ServerError> {
        self.document_datasource.render(report.worksheet())
    }

    async fn save(
        &self,
        report: PopulatedReport,
        destination: &str,
    ) -> Result<PathBuf, ServerError> {
        let relative = Path::new(destination);
        if destination.is_empty()
            || !relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)))
        {
            return Err(InvalidDestination::new(destination));
        }
        let path = self.config.output_dir.join(relative);
        let bytes = self.render(&report)?;
        let size = bytes.len();
        self.document_datasource.write(&path, bytes).await?;
        info!(path = %path.display(), bytes = size, "expense report saved");
        Ok(path)
    }
}

impl ReportRepositoryImpl {
    pub(crate) fn new(config: ReportConfig) -> Self {
        ReportRepositoryImpl {
            config,
            template_datasource: XlsxTemplateDatasourceImpl::new(),
            document_datasource: XlsxDocumentDatasourceImpl::new(),
        }
    }
}
