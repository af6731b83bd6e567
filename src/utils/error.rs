use crate::domain::model::NumberBase;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RandomizerError {
    #[error("Invalid parameter '{field}' = '{value}': {reason}")]
    InvalidParameter {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{digit_width} {base} digits overflow the 64-bit range (max {max_digit_width})")]
    OutOfRange {
        base: NumberBase,
        digit_width: u32,
        max_digit_width: u32,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RandomizerError {
    pub fn invalid_parameter(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidParameter { .. } | Self::OutOfRange { .. } => ErrorCategory::Input,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::SerializationError(_) | Self::CsvError(_) => ErrorCategory::Output,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidParameter { field, value, .. } => {
                format!("'{}' is not a valid value for {}", value, field)
            }
            Self::OutOfRange {
                base,
                digit_width,
                max_digit_width,
            } => format!(
                "Cannot generate {} {} digits; at most {} are supported",
                digit_width, base, max_digit_width
            ),
            Self::IoError(e) => format!("Could not read or write data: {}", e),
            Self::SerializationError(_) | Self::CsvError(_) => {
                "Could not render the output".to_string()
            }
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            Self::InvalidConfigValueError { field, value, reason } => {
                format!("Configuration value '{}' for '{}' rejected: {}", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidParameter { field, .. } => {
                format!("Pass a positive integer for {}", field)
            }
            Self::OutOfRange {
                max_digit_width, ..
            } => format!("Use a digit width between 1 and {}", max_digit_width),
            Self::IoError(_) => "Check that the file exists and is readable".to_string(),
            Self::SerializationError(_) | Self::CsvError(_) => {
                "Try the plain text output format".to_string()
            }
            Self::ConfigError { .. } | Self::ConfigValidationError { .. } => {
                "Make sure the config file is valid TOML".to_string()
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the config file", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RandomizerError>;
