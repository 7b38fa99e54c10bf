//! Error types and exit codes for algotrace
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, serialization, broken invariants, interrupted playback)
//! - 2: Usage error (bad flags, malformed values, unknown algorithm names)
//! - 3: Data error (unknown vertex, duplicate vertex/edge/key)

mod macros;

use thiserror::Error;

/// Exit codes for the algotrace binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - input refers to missing or duplicate entities (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building inputs or running an engine
#[derive(Error, Debug)]
pub enum TraceError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("invariant violated: {0}")]
    Invariant(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("playback interrupted")]
    Interrupted,
}

impl TraceError {
    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        TraceError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        TraceError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        TraceError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        TraceError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TraceError::UnknownFormat(_)
            | TraceError::UsageError(_)
            | TraceError::InvalidValue { .. }
            | TraceError::Unsupported { .. } => ExitCode::Usage,

            TraceError::AlreadyExists { .. } | TraceError::NotFound { .. } => ExitCode::Data,

            TraceError::Invariant(_)
            | TraceError::Io(_)
            | TraceError::Json(_)
            | TraceError::Toml(_)
            | TraceError::Interrupted => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            TraceError::UnknownFormat(_) => "unknown_format",
            TraceError::UsageError(_) => "usage_error",
            TraceError::InvalidValue { .. } => "invalid_value",
            TraceError::Unsupported { .. } => "unsupported",
            TraceError::AlreadyExists { .. } => "already_exists",
            TraceError::NotFound { .. } => "not_found",
            TraceError::Invariant(_) => "invariant",
            TraceError::Io(_) => "io_error",
            TraceError::Json(_) => "json_error",
            TraceError::Toml(_) => "toml_error",
            TraceError::Interrupted => "interrupted",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for algotrace operations
pub type Result<T> = std::result::Result<T, TraceError>;
