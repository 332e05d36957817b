use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("Conversion request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Conversion service returned {status}: {body}")]
    ServiceError { status: u16, body: String },

    #[error("Malformed conversion response: {message}")]
    MalformedResponse { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid Roman numeral: '{input}'")]
    InvalidRomanNumeral { input: String },

    #[error("Invalid integer: '{input}'")]
    InvalidInteger { input: String },

    #[error("Integer {value} is outside the convertible range 1..=3999")]
    IntegerOutOfRange { value: u64 },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Service,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ConverterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConverterError::ApiError(_) => ErrorCategory::Network,
            ConverterError::ServiceError { .. } | ConverterError::MalformedResponse { .. } => {
                ErrorCategory::Service
            }
            ConverterError::InvalidRomanNumeral { .. }
            | ConverterError::InvalidInteger { .. }
            | ConverterError::IntegerOutOfRange { .. } => ErrorCategory::Input,
            ConverterError::ConfigValidationError { .. }
            | ConverterError::InvalidConfigValueError { .. }
            | ConverterError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ConverterError::IoError(_) | ConverterError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network | ErrorCategory::Service => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 請求失敗：表單會重新啟用，欄位值保持不變
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Network | ErrorCategory::Service
        )
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ConverterError::ApiError(e) if e.is_timeout() => {
                "The service did not answer in time; retry or raise --timeout-seconds".to_string()
            }
            ConverterError::ApiError(_) => {
                "Check that the conversion service is running and --base-url points to it"
                    .to_string()
            }
            ConverterError::ServiceError { status, .. } if *status >= 500 => {
                "The conversion service failed internally; retry later".to_string()
            }
            ConverterError::ServiceError { .. } => {
                "The service rejected the value; check the input and try again".to_string()
            }
            ConverterError::MalformedResponse { .. } => {
                "The service answered without both 'roman' and 'integer'; check the service version"
                    .to_string()
            }
            ConverterError::InvalidRomanNumeral { .. } => {
                "Use the symbols I, V, X, L, C, D, M in standard subtractive form (e.g. XIV)"
                    .to_string()
            }
            ConverterError::InvalidInteger { .. } | ConverterError::IntegerOutOfRange { .. } => {
                "Enter a whole number between 1 and 3999".to_string()
            }
            ConverterError::ConfigValidationError { field, .. }
            | ConverterError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting in your config file or flags", field)
            }
            ConverterError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            ConverterError::IoError(_) => "Check file paths and permissions".to_string(),
            ConverterError::SerializationError(_) => {
                "Check that the payload is valid JSON".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the conversion service ({})", self),
            ErrorCategory::Service => format!("The conversion service misbehaved ({})", self),
            ErrorCategory::Input => self.to_string(),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConverterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_low_severity() {
        let err = ConverterError::InvalidRomanNumeral {
            input: "IIII".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(!err.is_request_failure());
        assert!(err.user_friendly_message().contains("IIII"));
    }

    #[test]
    fn test_service_errors_are_request_failures() {
        let err = ConverterError::ServiceError {
            status: 503,
            body: "unavailable".to_string(),
        };
        assert!(err.is_request_failure());
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.recovery_suggestion().contains("retry"));

        let malformed = ConverterError::MalformedResponse {
            message: "missing field `roman`".to_string(),
        };
        assert!(malformed.is_request_failure());
    }

    #[test]
    fn test_config_errors_name_the_field() {
        let err = ConverterError::InvalidConfigValueError {
            field: "service.base_url".to_string(),
            value: "ftp://x".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("service.base_url"));
    }
}
