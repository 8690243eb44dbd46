use std::{path::PathBuf, str::FromStr as _};

use fractic_server_error::ServerError;

use crate::{
    config::ReportConfig,
    data::{
        models::cell_reference_model::CellReferenceModel,
        repositories::request_repository_impl::RequestRepositoryImpl,
    },
    domain::{
        repositories::request_repository::RequestRepository as _,
        usecases::assemble_report_usecase::{AssembleReportUsecase as _, AssembleReportUsecaseImpl},
    },
    entities::{CellRef, CellValue, ExpenseRecord, PopulatedReport, ReportRequest},
};

/// Entry point for building weekly expense reports.
///
/// Parsing helpers turn client input into a `ReportRequest`; `generate`
/// assembles it against the configured template and writes the XLSX file.
pub struct ExpenseReportUtil {
    request_repository: RequestRepositoryImpl,
    assemble_usecase: AssembleReportUsecaseImpl,
    default_destination: String,
}

impl ExpenseReportUtil {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            request_repository: RequestRepositoryImpl::new(),
            default_destination: config.default_destination.clone(),
            assemble_usecase: AssembleReportUsecaseImpl::new(config),
        }
    }

    pub async fn from_config_file<P>(path: P) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        Ok(Self::new(ReportConfig::from_file(path).await?))
    }

    pub fn request_from_json(&self, json: &str) -> Result<ReportRequest, ServerError> {
        self.request_repository.request_from_json(json)
    }

    pub fn records_from_csv(&self, csv: &str) -> Result<Vec<ExpenseRecord>, ServerError> {
        self.request_repository.records_from_csv(csv)
    }

    pub fn records_from_csv_file<P>(&self, path: P) -> Result<Vec<ExpenseRecord>, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.request_repository.records_from_csv_file(path)
    }

    pub async fn assemble(&self, request: &ReportRequest) -> Result<PopulatedReport, ServerError> {
        self.assemble_usecase.assemble(request).await
    }

    /// Assembled report as XLSX bytes, without writing anything.
    pub async fn render(&self, request: &ReportRequest) -> Result<Vec<u8>, ServerError> {
        self.assemble_usecase.render(request).await
    }

    /// Writes the report under the configured output directory, to
    /// `destination` or the configured default file name.
    pub async fn generate(
        &self,
        request: &ReportRequest,
        destination: Option<&str>,
    ) -> Result<PathBuf, ServerError> {
        let destination = destination.unwrap_or(self.default_destination.as_str());
        self.assemble_usecase.generate(request, destination).await
    }

    pub async fn generate_from_json(&self, json: &str) -> Result<PathBuf, ServerError> {
        let request = self.request_from_json(json)?;
        self.generate(&request, None).await
    }

    /// Reads back a cell by A1 reference, e.g. `read_cell(&report, "B5")`.
    pub fn read_cell<'r>(
        report: &'r PopulatedReport,
        reference: &str,
    ) -> Result<Option<&'r CellValue>, ServerError> {
        let at: CellRef = CellReferenceModel::from_str(reference)?.into();
        Ok(report.worksheet().value(at))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{
        data::datasources::{
            xlsx_document_datasource::{XlsxDocumentDatasource as _, XlsxDocumentDatasourceImpl},
            xlsx_template_datasource::{XlsxTemplateDatasource as _, XlsxTemplateDatasourceImpl},
        },
        entities::{ExpenseCategory, Worksheet},
    };

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 1, day).unwrap()
    }

    async fn write_template(dir: &std::path::Path) -> PathBuf {
        let mut template = Worksheet::named("Expense Report");
        template.set_value(CellRef::new(4, 1), "Employee/Department");
        template.set_value(CellRef::new(5, 1), "School");
        for category in ExpenseCategory::ALL {
            template.set_value(CellRef::new(category.row(), 1), category.label());
        }
        template.set_value(CellRef::new(16, 11), CellValue::formula("SUM(D16:J16)"));
        let documents = XlsxDocumentDatasourceImpl::new();
        let template_path = dir.join("expense_report.xlsx");
        documents
            .write(&template_path, documents.render(&template).unwrap())
            .await
            .unwrap();
        template_path
    }

    async fn setup() -> (tempfile::TempDir, ExpenseReportUtil) {
        let dir = tempfile::tempdir().unwrap();
        let template_path = write_template(dir.path()).await;
        let config = ReportConfig::new(template_path, dir.path().join("out"));
        (dir, ExpenseReportUtil::new(config))
    }

    // 1x1 transparent PNG.
    const LOGO_PNG: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
        0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
        0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
        0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    const REQUEST: &str = r#"{
        "school": "Lincoln Elementary",
        "periodEnding": "2022-01-08",
        "tripPurpose": "Regional science fair",
        "employeeDepartment": "A. Rivera / Science",
        "travel": "yes",
        "travelStartDate": "2022-01-02",
        "travelEndDate": "2022-01-04",
        "filesData": [
            { "date": "2022-01-05", "price": 42.50, "category": "Hotel" },
            { "date": "2022-01-06", "price": 10.00, "category": "Gas" },
            { "date": "2022-01-06", "price": 20.00, "category": "Gas" },
            { "date": "2021-12-31", "price": 99.00, "category": "Hotel" }
        ]
    }"#;

    #[tokio::test]
    async fn header_fields_round_trip() {
        let (_dir, util) = setup().await;
        let request = util.request_from_json(REQUEST).unwrap();
        let report = util.assemble(&request).await.unwrap();
        let text = |r: &str| match ExpenseReportUtil::read_cell(&report, r).unwrap() {
            Some(CellValue::Text(s)) => s.clone(),
            other => panic!("expected text at {r}, got {other:?}"),
        };
        assert_eq!(text("B5"), request.school);
        assert_eq!(text("H5"), request.trip_purpose);
        assert_eq!(text("B4"), request.employee_department);
        assert_eq!(
            ExpenseReportUtil::read_cell(&report, "H4").unwrap(),
            Some(&CellValue::Date(request.period_ending))
        );
        // Template labels are still there.
        assert_eq!(text("A16"), "Hotel");
    }

    #[tokio::test]
    async fn generate_writes_readable_xlsx() {
        let (dir, util) = setup().await;
        let path = util.generate_from_json(REQUEST).await.unwrap();
        assert_eq!(path, dir.path().join("out").join("output.xlsx"));

        let sheet = XlsxTemplateDatasourceImpl::new().from_file(&path).await.unwrap();
        let number = |row: u32, col: u16| match sheet.value(CellRef::new(row, col)) {
            Some(CellValue::Number(n)) => Some(*n),
            _ => None,
        };
        assert_eq!(
            sheet.value(CellRef::new(5, 2)),
            Some(&CellValue::Text("Lincoln Elementary".into()))
        );
        assert_eq!(sheet.value(CellRef::new(8, 4)), Some(&CellValue::Date(d(2))));
        assert_eq!(sheet.value(CellRef::new(8, 10)), Some(&CellValue::Date(d(8))));
        // Hotel on 01-05 (column G), last Gas on 01-06 (column H).
        assert_eq!(number(16, 7), Some(dec!(42.5)));
        assert_eq!(number(15, 8), Some(dec!(20)));
        // Per-diem: dinner on departure, both mid-trip, breakfast on return.
        assert_eq!(number(21, 4), Some(dec!(30)));
        assert_eq!(number(19, 4), None);
        assert_eq!(number(19, 5), Some(dec!(5)));
        assert_eq!(number(21, 5), Some(dec!(30)));
        assert_eq!(number(19, 6), Some(dec!(5)));
        assert_eq!(number(21, 6), None);
    }

    #[tokio::test]
    async fn template_formulas_are_kept_in_output() {
        let (_dir, util) = setup().await;
        let path = util.generate_from_json(REQUEST).await.unwrap();
        let sheet = XlsxTemplateDatasourceImpl::new().from_file(&path).await.unwrap();
        assert_eq!(
            sheet.value(CellRef::new(16, 11)),
            Some(&CellValue::Formula("=SUM(D16:J16)".into()))
        );
    }

    #[tokio::test]
    async fn header_image_is_embedded_in_output() {
        let dir = tempfile::tempdir().unwrap();
        let template_path = write_template(dir.path()).await;
        let logo_path = dir.path().join("logo.png");
        tokio::fs::write(&logo_path, LOGO_PNG).await.unwrap();
        let util = ExpenseReportUtil::new(
            ReportConfig::new(template_path, dir.path().join("out")).with_header_image(&logo_path),
        );
        let request = util.request_from_json(REQUEST).unwrap();

        let report = util.assemble(&request).await.unwrap();
        let images = report.worksheet().images();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].anchor, CellRef::new(1, 1));
        assert_eq!(images[0].image.data, LOGO_PNG);
        assert_eq!(
            (images[0].image.scale_width, images[0].image.scale_height),
            (0.43, 0.60)
        );

        let path = util.generate(&request, None).await.unwrap();
        let bytes = tokio::fs::read(&path).await.unwrap();
        assert!(contains(&bytes, b"xl/media/image1.png"));
        let sheet = XlsxTemplateDatasourceImpl::new().from_bytes(bytes).unwrap();
        assert_eq!(
            sheet.value(CellRef::new(5, 2)),
            Some(&CellValue::Text("Lincoln Elementary".into()))
        );
    }

    #[tokio::test]
    async fn missing_header_image_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let template_path = write_template(dir.path()).await;
        let util = ExpenseReportUtil::new(
            ReportConfig::new(template_path, dir.path().join("out"))
                .with_header_image(dir.path().join("missing.png")),
        );
        let request = util.request_from_json(REQUEST).unwrap();
        assert!(util.generate(&request, None).await.is_err());
        assert!(!dir.path().join("out").join("output.xlsx").exists());
    }

    #[tokio::test]
    async fn invalid_request_writes_nothing() {
        let (dir, util) = setup().await;
        let request = util
            .request_from_json(
                r#"{ "periodEnding": "2022-01-08", "travel": true,
                     "travelStartDate": "2022-01-06", "travelEndDate": "2022-01-03" }"#,
            )
            .unwrap();
        assert!(util.generate(&request, Some("bad.xlsx")).await.is_err());
        assert!(!dir.path().join("out").join("bad.xlsx").exists());
    }

    #[tokio::test]
    async fn destination_must_stay_inside_output_dir() {
        let (_dir, util) = setup().await;
        let request = util.request_from_json(REQUEST).unwrap();
        assert!(util.generate(&request, Some("../escape.xlsx")).await.is_err());
        assert!(util.generate(&request, Some("/tmp/escape.xlsx")).await.is_err());
        assert!(util.generate(&request, Some("")).await.is_err());
        assert!(util.generate(&request, Some("weekly/2022-01-08.xlsx")).await.is_ok());
    }

    #[tokio::test]
    async fn render_produces_xlsx_bytes() {
        let (_dir, util) = setup().await;
        let request = util.request_from_json(REQUEST).unwrap();
        let bytes = util.render(&request).await.unwrap();
        // XLSX is a zip container.
        assert_eq!(&bytes[..2], b"PK");
    }

    #[tokio::test]
    async fn missing_template_fails() {
        let dir = tempfile::tempdir().unwrap();
        let util = ExpenseReportUtil::new(ReportConfig::new(
            dir.path().join("missing.xlsx"),
            dir.path().join("out"),
        ));
        let request = util.request_from_json(REQUEST).unwrap();
        assert!(util.assemble(&request).await.is_err());
    }

    #[test]
    fn records_from_csv() {
        let dir = tempfile::tempdir().unwrap();
        let util = ExpenseReportUtil::new(ReportConfig::new(
            dir.path().join("t.xlsx"),
            dir.path().join("out"),
        ));
        let records = util
            .records_from_csv("date,amount,category\n2022-01-05,42.50,Hotel\n")
            .unwrap();
        assert_eq!(records, vec![ExpenseRecord::new(d(5), dec!(42.50), "Hotel")]);
    }
}
