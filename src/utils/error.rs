use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid config value for '{field}' = '{value}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required config field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid input for '{field}' = '{value}': {reason}")]
    InvalidInputError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{kind} not found: {id}")]
    NotFoundError { kind: String, id: String },

    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Network,
    Data,
    Config,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EngineError {
    pub fn invalid_input(field: &str, value: impl ToString, reason: &str) -> Self {
        EngineError::InvalidInputError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn not_found(kind: &str, id: &str) -> Self {
        EngineError::NotFoundError {
            kind: kind.to_string(),
            id: id.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            EngineError::IoError(_) => ErrorCategory::Io,
            EngineError::ApiError(_) => ErrorCategory::Network,
            EngineError::SerializationError(_) | EngineError::CsvError(_) => ErrorCategory::Data,
            EngineError::InvalidConfigValueError { .. } | EngineError::MissingConfigError { .. } => {
                ErrorCategory::Config
            }
            EngineError::InvalidInputError { .. } | EngineError::NotFoundError { .. } => {
                ErrorCategory::Input
            }
            EngineError::ProcessingError { .. } => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EngineError::IoError(_) => ErrorSeverity::Critical,
            EngineError::ApiError(_) => ErrorSeverity::Medium,
            EngineError::SerializationError(_) | EngineError::CsvError(_) => ErrorSeverity::High,
            EngineError::InvalidConfigValueError { .. } | EngineError::MissingConfigError { .. } => {
                ErrorSeverity::High
            }
            EngineError::InvalidInputError { .. } => ErrorSeverity::High,
            EngineError::NotFoundError { .. } => ErrorSeverity::Medium,
            EngineError::ProcessingError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EngineError::IoError(_) => "Check file permissions and that the output path exists",
            EngineError::ApiError(_) => {
                "Check that the catalog/preference service is reachable and retry"
            }
            EngineError::SerializationError(_) => {
                "Check that the catalog and preference payloads are valid JSON"
            }
            EngineError::CsvError(_) => "Check the output path and available disk space",
            EngineError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again"
            }
            EngineError::MissingConfigError { .. } => {
                "Add the missing field to the configuration and run again"
            }
            EngineError::InvalidInputError { .. } => {
                "Fix the menu/preference data in the upstream store"
            }
            EngineError::NotFoundError { .. } => {
                "Check the restaurant/user id against the configured store"
            }
            EngineError::ProcessingError { .. } => "Re-run with --verbose for details",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EngineError::IoError(_) => "Could not read or write local files".to_string(),
            EngineError::ApiError(_) => "Could not reach the menu/preference service".to_string(),
            EngineError::SerializationError(_) => {
                "Received data in an unexpected format".to_string()
            }
            EngineError::CsvError(_) => "Could not write the menu snapshot".to_string(),
            EngineError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem in '{}': {}", field, reason)
            }
            EngineError::MissingConfigError { field } => {
                format!("Configuration is missing '{}'", field)
            }
            EngineError::InvalidInputError { field, reason, .. } => {
                format!("Bad data in '{}': {}", field, reason)
            }
            EngineError::NotFoundError { kind, id } => format!("{} '{}' was not found", kind, id),
            EngineError::ProcessingError { message } => message.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
