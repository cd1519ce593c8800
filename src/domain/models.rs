use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// An attestation as it arrives from config or a spreadsheet row, before validation.
pub type RawAttestation = serde_json::Map<String, serde_json::Value>;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttestationStatus {
    Passed,
    Failed,
}

impl AttestationStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "passed" => Some(Self::Passed),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for AttestationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often a control must be re-attested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Annually,
    Semiannually,
    Quarterly,
    Monthly,
    Every2weeks,
    Weekly,
    Every3days,
    Daily,
}

impl Frequency {
    pub const ALL: [Frequency; 8] = [
        Self::Annually,
        Self::Semiannually,
        Self::Quarterly,
        Self::Monthly,
        Self::Every2weeks,
        Self::Weekly,
        Self::Every3days,
        Self::Daily,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.to_ascii_lowercase();
        Self::ALL.into_iter().find(|f| f.as_str() == raw)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Annually => "annually",
            Self::Semiannually => "semiannually",
            Self::Quarterly => "quarterly",
            Self::Monthly => "monthly",
            Self::Every2weeks => "every2weeks",
            Self::Weekly => "weekly",
            Self::Every3days => "every3days",
            Self::Daily => "daily",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated manual sign-off for one control.
///
/// Only `services::validator` can build one, so every instance in the
/// process has passed the field checks. It serializes into the report's
/// `attestation` field but is never deserialized back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attestation {
    control_id: String,
    explanation: String,
    frequency: Frequency,
    status: AttestationStatus,
    updated: NaiveDate,
    updated_by: String,
}

impl Attestation {
    pub(crate) fn new(
        control_id: String,
        explanation: String,
        frequency: Frequency,
        status: AttestationStatus,
        updated: NaiveDate,
        updated_by: String,
    ) -> Self {
        Self {
            control_id,
            explanation,
            frequency,
            status,
            updated,
            updated_by,
        }
    }

    pub fn control_id(&self) -> &str {
        &self.control_id
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    pub fn status(&self) -> AttestationStatus {
        self.status
    }

    pub fn updated(&self) -> NaiveDate {
        self.updated
    }

    pub fn updated_by(&self) -> &str {
        &self.updated_by
    }
}

/// Attestation options, either top-level or under `plugins.inspec-reporter-json-hdf`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttestationConfig {
    #[serde(default)]
    pub attestations: Vec<RawAttestation>,
    #[serde(default, rename = "include-attestations-file")]
    pub include_attestations_file: Option<TabularFileConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TabularFileConfig {
    pub path: PathBuf,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct AttestationReview {
    pub control_id: String,
    pub status: AttestationStatus,
    pub frequency: Frequency,
    pub updated: NaiveDate,
    pub updated_by: String,
    pub expires_on: NaiveDate,
    pub expired: bool,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub controls: usize,
    pub matched: usize,
    pub applied: usize,
    pub expired: usize,
    pub unmatched: Vec<String>,
}
