use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for dockctx operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure with no specific path attached.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// File read/write/delete failure for a specific path.
    #[error("Failed to {operation} {}: {source}", path.display())]
    FileIo {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Template name is not in the catalog.
    #[error("Unknown template '{name}'. Available: {available}")]
    UnknownTemplate { name: String, available: String },

    /// Filename is empty, reserved, or contains a reserved character.
    #[error(
        "Invalid filename '{0}': must be non-empty, must not be '.', '..' or 'Dockerfile', and must not contain any of < > : \" / \\ | ? *"
    )]
    InvalidFilename(String),

    /// Target name is already taken by another file in the build context.
    #[error("File '{0}' already exists in the build context")]
    FileExists(String),

    /// File is not part of the build context.
    #[error("File '{0}' is not part of the build context")]
    FileNotFound(String),

    /// No auxiliary file is selected for editing.
    #[error("No file is selected for editing")]
    NoActiveFile,

    /// Dockerfile lacks required instructions.
    #[error("Dockerfile is missing required instructions: {}", missing.join(", "))]
    ValidationFailed { missing: Vec<String> },

    /// Rejected user input.
    #[error("{0}")]
    Validation(String),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error in dockctx.toml.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// External tool exited unsuccessfully or could not be started.
    #[error("Command '{command}' failed: {details}")]
    ToolFailed { command: String, details: String },

    /// Container runtime reports no container under that name.
    #[error("Container '{0}' not found")]
    ContainerNotFound(String),

    /// Tool output could not be decoded.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn file_io(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: io::Error,
    ) -> Self {
        AppError::FileIo { operation, path: path.into(), source }
    }

    /// Whether the failure is a missing file or directory.
    pub fn is_not_found(&self) -> bool {
        self.kind() == io::ErrorKind::NotFound
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::FileIo { source, .. } => source.kind(),
            AppError::InvalidFilename(_)
            | AppError::ValidationFailed { .. }
            | AppError::Validation(_)
            | AppError::Configuration(_)
            | AppError::ConfigParse(_)
            | AppError::NoActiveFile => io::ErrorKind::InvalidInput,
            AppError::UnknownTemplate { .. }
            | AppError::FileNotFound(_)
            | AppError::ContainerNotFound(_) => io::ErrorKind::NotFound,
            AppError::ParseError { .. } => io::ErrorKind::InvalidData,
            AppError::FileExists(_) => io::ErrorKind::AlreadyExists,
            AppError::ToolFailed { .. } => io::ErrorKind::Other,
        }
    }
}
