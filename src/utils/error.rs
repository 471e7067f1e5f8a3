use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecommenderError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Catalog is missing required column '{column}'")]
    MissingColumnError { column: String },

    #[error("Catalog error: {message}")]
    CatalogError { message: String },

    #[error("Export error: {message}")]
    ExportError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Catalog,
    Configuration,
    Input,
    Export,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RecommenderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::Io,
            Self::CsvError(_) | Self::MissingColumnError { .. } | Self::CatalogError { .. } => {
                ErrorCategory::Catalog
            }
            Self::ConfigValidationError { .. } => ErrorCategory::Configuration,
            Self::InvalidValueError { .. } => ErrorCategory::Input,
            Self::ZipError(_) | Self::SerializationError(_) | Self::ExportError { .. } => {
                ErrorCategory::Export
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Catalog => ErrorSeverity::High,
            // 輸出失敗可重試
            ErrorCategory::Export => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidValueError { field, reason, .. } => {
                format!("Please check '{}': {}", field, reason)
            }
            Self::MissingColumnError { column } => format!(
                "The destination catalog does not have a '{}' column",
                column
            ),
            Self::CatalogError { message } => {
                format!("The destination catalog could not be used: {}", message)
            }
            Self::IoError(e) => format!("A file could not be read or written: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Adjust the highlighted form value and submit again",
            ErrorCategory::Configuration => "Review the settings file and command line overrides",
            ErrorCategory::Catalog => {
                "Make sure the catalog is a CSV file with DestinationID, State, Type, PreferredClimate, Budget and BestTimeToVisit columns"
            }
            ErrorCategory::Export => "Check the output directory and try a different export format",
            ErrorCategory::Io => "Verify that the paths exist and are accessible",
        }
    }
}

pub type Result<T> = std::result::Result<T, RecommenderError>;
