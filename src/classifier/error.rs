use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassificationError {
    #[error("filename {filename} does not begin with \"vertica\" (missing vertica prefix)")]
    InvalidPrefix { filename: String },

    #[error("file name {filename} is neither RPM nor .deb (unrecognized format)")]
    UnrecognizedFormat { filename: String },
}

/// Payload-free discriminant of [`ClassificationError`], used where only the
/// failure category matters (self-test expectations, case files).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidPrefix,
    UnrecognizedFormat,
}

impl ClassificationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClassificationError::InvalidPrefix { .. } => ErrorKind::InvalidPrefix,
            ClassificationError::UnrecognizedFormat { .. } => ErrorKind::UnrecognizedFormat,
        }
    }

    pub fn reason(&self) -> &'static str {
        self.kind().reason()
    }

    /// Base filename that was rejected.
    pub fn filename(&self) -> &str {
        match self {
            ClassificationError::InvalidPrefix { filename }
            | ClassificationError::UnrecognizedFormat { filename } => filename,
        }
    }
}

impl ErrorKind {
    pub fn reason(&self) -> &'static str {
        match self {
            ErrorKind::InvalidPrefix => "missing vertica prefix",
            ErrorKind::UnrecognizedFormat => "neither RPM nor .deb / unrecognized format",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "error({})", self.reason())
    }
}
