use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum AttestError {
    #[error("invalid attestation #{index}: `{field}` {reason}: {record}")]
    InvalidRecord {
        index: usize,
        field: &'static str,
        reason: String,
        record: String,
    },
    #[error("cannot read attestations file {path}: {message}")]
    Source { path: String, message: String },
    #[error("invalid config {path}: {message}")]
    Config { path: String, message: String },
    #[error("invalid report {path}: {message}")]
    Report { path: String, message: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl AttestError {
    /// Stable code used in the `--json` error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidRecord { .. } => "ATTESTATION_INVALID",
            Self::Source { .. } => "SOURCE_UNREADABLE",
            Self::Config { .. } => "CONFIG_INVALID",
            Self::Report { .. } => "REPORT_INVALID",
            Self::Io(_) => "IO",
            Self::Json(_) => "JSON",
        }
    }

    pub fn invalid_record(
        index: usize,
        field: &'static str,
        reason: impl Into<String>,
        record: &serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self::InvalidRecord {
            index,
            field,
            reason: reason.into(),
            record: serde_json::to_string(record).unwrap_or_default(),
        }
    }

    pub fn tabular(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Source {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    pub fn config(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Config {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    pub fn report(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Report {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}
