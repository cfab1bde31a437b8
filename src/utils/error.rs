use thiserror::Error;

#[derive(Error, Debug)]
pub enum CourseError {
    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("Invalid input '{value}' for {field}: {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Codec error: {message}")]
    Codec { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Input,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CourseError {
    pub fn invalid_input(field: &str, value: &str, reason: impl Into<String>) -> Self {
        CourseError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn codec(message: impl Into<String>) -> Self {
        CourseError::Codec {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CourseError::Http(_) | CourseError::UnexpectedStatus { .. } => ErrorCategory::Network,
            CourseError::Config { .. }
            | CourseError::InvalidConfigValue { .. }
            | CourseError::MissingConfig { .. }
            | CourseError::Url(_) => ErrorCategory::Configuration,
            CourseError::InvalidInput { .. } => ErrorCategory::Input,
            CourseError::Serialization(_) | CourseError::Codec { .. } => ErrorCategory::Data,
            CourseError::Io(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Exit code used by the binaries for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 3,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CourseError::Http(_) | CourseError::UnexpectedStatus { .. } => {
                "Could not reach the photo service".to_string()
            }
            CourseError::Config { message } => format!("Configuration problem: {}", message),
            CourseError::InvalidConfigValue { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            CourseError::MissingConfig { field } => format!("Setting '{}' is required", field),
            CourseError::Url(e) => format!("The configured URL is not valid: {}", e),
            CourseError::InvalidInput { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            CourseError::Serialization(_) | CourseError::Codec { .. } => {
                "Received data could not be decoded".to_string()
            }
            CourseError::Io(e) => format!("File system error: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check the network connection and the API key, then retry",
            ErrorCategory::Configuration => "Review the configuration file and command-line flags",
            ErrorCategory::Input => "Correct the input value and try again",
            ErrorCategory::Data => "The remote data format may have changed; try another rover or sol",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, CourseError>;
