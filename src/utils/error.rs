use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Serialization,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ProbeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProbeError::IoError(_) => ErrorCategory::Io,
            ProbeError::SerializationError(_) => ErrorCategory::Serialization,
            ProbeError::ConfigError { .. }
            | ProbeError::ConfigValidationError { .. }
            | ProbeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 問候行寫不出去就沒有任何恢復手段，視為最嚴重等級
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ProbeError::IoError(_) => ErrorSeverity::Critical,
            ProbeError::SerializationError(_) => ErrorSeverity::High,
            ProbeError::ConfigError { .. }
            | ProbeError::ConfigValidationError { .. }
            | ProbeError::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ProbeError::IoError(e) => {
                format!("Failed to write output: {}", e)
            }
            ProbeError::SerializationError(e) => {
                format!("Failed to serialize the probe report: {}", e)
            }
            ProbeError::ConfigError { message } => {
                format!("Configuration problem: {}", message)
            }
            ProbeError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            ProbeError::InvalidConfigValueError { field, value, reason } => {
                format!("Value '{}' for '{}' is not usable: {}", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Io => {
                "Check that the output stream and output directory are writable".to_string()
            }
            ErrorCategory::Serialization => {
                "This indicates a bug in the report model; please file an issue".to_string()
            }
            ErrorCategory::Configuration => {
                "Review the CLI flags or the TOML configuration file and retry".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;
