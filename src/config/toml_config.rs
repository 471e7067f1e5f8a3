use crate::config::Settings;
use crate::domain::model::ExportFormat;
use crate::utils::error::{RecommenderError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub catalog: CatalogConfig,
    pub output: OutputConfig,
    pub itinerary: ItineraryConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub format: Option<ExportFormat>,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItineraryConfig {
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RecommenderError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RecommenderError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CATALOG_PATH})；未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 以檔案內容覆蓋預設值
    pub fn settings(&self) -> Settings {
        let defaults = Settings::default();
        Settings {
            catalog_path: self.catalog.path.clone().unwrap_or(defaults.catalog_path),
            output_path: self.output.path.clone().unwrap_or(defaults.output_path),
            output_filename: self
                .output
                .filename
                .clone()
                .unwrap_or(defaults.output_filename),
            export_format: self.output.format.unwrap_or(defaults.export_format),
            seed: self.itinerary.seed.or(defaults.seed),
            monitoring: self.monitoring.enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[catalog]
path = "data/catalog.csv"

[output]
path = "./exports"
format = "zip"
filename = "my_trip"

[itinerary]
seed = 42

[monitoring]
enabled = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let settings = config.settings();

        assert_eq!(settings.catalog_path, "data/catalog.csv");
        assert_eq!(settings.output_path, "./exports");
        assert_eq!(settings.output_filename, "my_trip");
        assert_eq!(settings.export_format, ExportFormat::Zip);
        assert_eq!(settings.seed, Some(42));
        assert!(settings.monitoring);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = TomlConfig::from_toml_str("[output]\nformat = \"json\"\n").unwrap();
        let settings = config.settings();
        let defaults = Settings::default();

        assert_eq!(settings.catalog_path, defaults.catalog_path);
        assert_eq!(settings.export_format, ExportFormat::Json);
        assert_eq!(settings.seed, None);
        assert!(!settings.monitoring);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TRIP_TEST_CATALOG", "/srv/data/destinations.csv");

        let toml_content = r#"
[catalog]
path = "${TRIP_TEST_CATALOG}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.catalog.path.as_deref(),
            Some("/srv/data/destinations.csv")
        );

        std::env::remove_var("TRIP_TEST_CATALOG");
    }

    #[test]
    fn test_invalid_format_is_config_error() {
        let err = TomlConfig::from_toml_str("[output]\nformat = \"xlsx\"\n").unwrap_err();
        assert!(matches!(err, RecommenderError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[catalog]\npath = \"catalog.txt\"\n").unwrap();
        assert!(config.settings().validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\npath = \"./from-file\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.settings().output_path, "./from-file");
    }
}
