#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::core::ConfigProvider;
use crate::domain::model::ExportFormat;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, Validate,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CATALOG_PATH: &str = "data/travel_catalog.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_OUTPUT_FILENAME: &str = "travel_recommendations";

/// 解析完成的執行設定 (預設值 → TOML → 命令列)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub catalog_path: String,
    pub output_path: String,
    pub output_filename: String,
    pub export_format: ExportFormat,
    pub seed: Option<u64>,
    pub monitoring: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: DEFAULT_CATALOG_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            output_filename: DEFAULT_OUTPUT_FILENAME.to_string(),
            export_format: ExportFormat::default(),
            seed: None,
            monitoring: false,
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("catalog.path", &self.catalog_path)?;
        validate_file_extension("catalog.path", &self.catalog_path, &["csv"])?;
        validate_path("output.path", &self.output_path)?;
        validate_non_empty_string("output.filename", &self.output_filename)?;
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn catalog_path(&self) -> &str {
        &self.catalog_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_filename(&self) -> &str {
        &self.output_filename
    }

    fn export_format(&self) -> ExportFormat {
        self.export_format
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitoring
    }
}
