use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Dataset error at row {row}: {message}")]
    DatasetError { row: usize, message: String },

    #[error("Unknown component: {id}")]
    UnknownComponentError { id: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Dataset,
    Io,
    Request,
    Server,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    High,
    Critical,
}

impl DashError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DashError::ConfigError { .. }
            | DashError::InvalidConfigValueError { .. }
            | DashError::MissingConfigError { .. }
            | DashError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            DashError::CsvError(_) | DashError::DatasetError { .. } => ErrorCategory::Dataset,
            DashError::IoError(_) => ErrorCategory::Io,
            DashError::UnknownComponentError { .. } => ErrorCategory::Request,
            DashError::SerializationError(_) | DashError::ServerError { .. } => ErrorCategory::Server,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Request => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Dataset | ErrorCategory::Io => ErrorSeverity::High,
            ErrorCategory::Server => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DashError::CsvError(e) => format!("The launch dataset could not be read as CSV: {}", e),
            DashError::IoError(e) => format!("File access failed: {}", e),
            DashError::DatasetError { row, message } => {
                format!("The launch dataset is invalid (row {}): {}", row, message)
            }
            DashError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            DashError::MissingConfigError { field } => {
                format!("Setting '{}' is required but was not provided", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the command line flags or the TOML config file",
            ErrorCategory::Dataset => {
                "Make sure the CSV has the columns 'Launch Site', 'Payload Mass (kg)', 'Booster Version Category' and 'class'"
            }
            ErrorCategory::Io => "Check that the dataset path exists and is readable",
            ErrorCategory::Request => "Check the request payload sent by the page",
            ErrorCategory::Server => "Check that the port is free and the host address is valid",
        }
    }

    /// Process exit code for fatal startup errors.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, DashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_errors_are_fatal() {
        let err = DashError::DatasetError {
            row: 3,
            message: "class must be 0 or 1".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Dataset);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("row 3"));
    }

    #[test]
    fn test_unknown_component_is_request_error() {
        let err = DashError::UnknownComponentError {
            id: "nope".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Request);
        assert_eq!(err.to_string(), "Unknown component: nope");
    }

    #[test]
    fn test_serialization_error_is_server_error() {
        let err: DashError = serde_json::from_str::<u8>("x").unwrap_err().into();
        assert!(matches!(err, DashError::SerializationError(_)));
        assert_eq!(err.category(), ErrorCategory::Server);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 2);
    }
}
