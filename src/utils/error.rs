use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown band: {name}")]
    UnknownBandError { name: String },

    #[error("Rendering error: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::IoError(_) => ErrorCategory::Io,
            CalcError::TomlError(_) | CalcError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            CalcError::UnknownBandError { .. } => ErrorCategory::Input,
            CalcError::SerializationError(_)
            | CalcError::CsvError(_)
            | CalcError::RenderError { .. } => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CalcError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            CalcError::TomlError(_) => {
                "Make sure the configuration file is valid TOML".to_string()
            }
            CalcError::UnknownBandError { .. } => format!(
                "Use one of the known bands: {}",
                crate::core::registry::all_names().collect::<Vec<_>>().join(", ")
            ),
            CalcError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' and try again", field)
            }
            CalcError::SerializationError(_)
            | CalcError::CsvError(_)
            | CalcError::RenderError { .. } => {
                "Try a different output format (text, json or csv)".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::IoError(e) => format!("Could not read or write a file: {}", e),
            CalcError::UnknownBandError { name } => {
                format!("'{}' is not a supported amateur band", name)
            }
            CalcError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
