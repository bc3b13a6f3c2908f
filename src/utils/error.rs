use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Input unavailable: {path}: {source}")]
    InputUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Output unwritable: {path}: {source}")]
    OutputUnwritable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
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

impl ConvertError {
    pub fn input_unavailable(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::InputUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn output_unwritable(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::OutputUnwritable {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InputUnavailable { .. } => ErrorCategory::Input,
            Self::OutputUnwritable { .. } => ErrorCategory::Output,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 程序結束碼：設定錯誤 2，轉換失敗 1，系統錯誤 3
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InputUnavailable { path, .. } => format!(
                "Check that '{}' exists, is readable and contains UTF-8 text",
                path
            ),
            Self::OutputUnwritable { path, .. } => format!(
                "Check that the directory of '{}' exists and is writable, and that the disk is not full",
                path
            ),
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Run with --help to see the accepted options".to_string()
            }
            Self::IoError(_) => "Retry the conversion; if it keeps failing, check the file system".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InputUnavailable { path, source } => {
                format!("Cannot read console log '{}': {}", path, source)
            }
            Self::OutputUnwritable { path, source } => {
                format!("Cannot write CSV file '{}': {}", path, source)
            }
            Self::ConfigError { message } => format!("Invalid configuration: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid --{}: {}", field.replace('_', "-"), reason)
            }
            Self::IoError(e) => format!("Unexpected I/O failure: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
