//! Error types and handling infrastructure for CSV to JSON conversion

use std::path::PathBuf;

/// Core error types for the conversion process
#[derive(Debug, thiserror::Error)]
pub enum ConversionErrorKind {
    #[error("CSV document is empty")]
    EmptyDocument,

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Input too large: {size} bytes (limit: {limit} bytes)")]
    InputTooLarge { size: u64, limit: usize },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error("JSON serialization error: {message}")]
    Serialization { message: String },

    #[error("Conversion failed: {message}")]
    ConversionFailed { message: String },
}

impl ConversionErrorKind {
    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    pub fn serialization(message: String) -> Self {
        Self::Serialization { message }
    }
}

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("{kind}")]
    Conversion {
        kind: ConversionErrorKind,
        source: Option<anyhow::Error>,
    },
}

impl ConversionError {
    pub fn empty_document() -> Self {
        Self::conversion(ConversionErrorKind::EmptyDocument)
    }

    pub fn conversion(kind: ConversionErrorKind) -> Self {
        Self::Conversion { kind, source: None }
    }

    pub fn conversion_with_source(kind: ConversionErrorKind, source: anyhow::Error) -> Self {
        Self::Conversion {
            kind,
            source: Some(source),
        }
    }

    /// The error kind
    pub fn kind(&self) -> &ConversionErrorKind {
        match self {
            Self::Conversion { kind, .. } => kind,
        }
    }

    /// True when the document had no usable lines
    pub fn is_empty_document(&self) -> bool {
        matches!(self.kind(), ConversionErrorKind::EmptyDocument)
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Conversion { kind, source } => match kind {
                ConversionErrorKind::EmptyDocument => {
                    "CSV file is empty: no non-blank lines to convert".to_string()
                }
                ConversionErrorKind::InputTooLarge { size, limit } => {
                    format!(
                        "CSV file too large: {} bytes (limit: {} bytes)",
                        size, limit
                    )
                }
                ConversionErrorKind::Io {
                    message,
                    path: Some(path),
                } => {
                    format!("Failed to access {}: {}", path.display(), message)
                }
                ConversionErrorKind::ConversionFailed { message } => match source {
                    Some(cause) => format!("{}: {}", message, cause),
                    None => message.clone(),
                },
                _ => self.to_string(),
            },
        }
    }
}

impl From<std::io::Error> for ConversionError {
    fn from(error: std::io::Error) -> Self {
        Self::conversion(ConversionErrorKind::io(error.to_string(), None))
    }
}

impl From<serde_json::Error> for ConversionError {
    fn from(error: serde_json::Error) -> Self {
        Self::conversion(ConversionErrorKind::serialization(error.to_string()))
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
