use std::path::{Path, PathBuf};

use fractic_server_error::ServerError;

use crate::errors::{InvalidRon, ReadError};

/// Where templates come from and where finished reports go.
///
/// ```ron
/// (
///     template_path: "templates/expense_report.xlsx",
///     output_dir: "/tmp/reports",
///     header_image_path: Some("templates/eahead.jpg"),
/// )
/// ```
#[derive(Debug, Clone, serde_derive::Deserialize)]
pub struct ReportConfig {
    pub template_path: PathBuf,
    pub output_dir: PathBuf,
    /// Logo embedded at A1, if any.
    #[serde(default)]
    pub header_image_path: Option<PathBuf>,
    /// (width, height) scale factors for the header image.
    #[serde(default = "default_header_image_scale")]
    pub header_image_scale: (f64, f64),
    #[serde(default = "default_destination")]
    pub default_destination: String,
}

fn default_header_image_scale() -> (f64, f64) {
    (0.43, 0.60)
}

fn default_destination() -> String {
    "output.xlsx".into()
}

impl ReportConfig {
    pub fn new(template_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
            output_dir: output_dir.into(),
            header_image_path: None,
            header_image_scale: default_header_image_scale(),
            default_destination: default_destination(),
        }
    }

    pub fn with_header_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.header_image_path = Some(path.into());
        self
    }

    pub fn from_ron(s: &str) -> Result<Self, ServerError> {
        ron::from_str(s).map_err(|e| InvalidRon::with_debug("ReportConfig", &e))
    }

    pub async fn from_file<P>(path: P) -> Result<Self, ServerError>
    where
        P: AsRef<Path>,
    {
        let s = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        Self::from_ron(&s)
    }
}
