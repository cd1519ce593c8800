use crate::domain::errors::AttestError;
use crate::domain::models::{Attestation, AttestationConfig, RawAttestation, TabularFileConfig};
use crate::services::sources::{source_for, TabularRow, TabularSource};
use crate::services::validator::validate;
use chrono::NaiveDateTime;
use serde_json::Value;
use tracing::{debug, warn};

/// Gather spreadsheet rows then inline attestations, drop the ones without
/// a status, and validate what is left.
pub fn load(
    config: &AttestationConfig,
    now: NaiveDateTime,
) -> Result<Vec<Attestation>, AttestError> {
    load_with(config, now, source_for)
}

/// [`load`] with the spreadsheet adapter lookup swapped out.
pub fn load_with<F>(
    config: &AttestationConfig,
    now: NaiveDateTime,
    resolve: F,
) -> Result<Vec<Attestation>, AttestError>
where
    F: Fn(&str) -> Option<Box<dyn TabularSource>>,
{
    let mut raw = match &config.include_attestations_file {
        Some(file) => load_tabular(file, resolve)?,
        None => Vec::new(),
    };
    raw.extend(config.attestations.iter().cloned());

    let before = raw.len();
    raw.retain(has_status);
    if before != raw.len() {
        debug!(
            dropped = before - raw.len(),
            "skipping attestations without a status"
        );
    }

    if raw.is_empty() {
        warn!("no attestations provided");
        return Ok(Vec::new());
    }
    validate(&raw, now)
}

fn load_tabular<F>(file: &TabularFileConfig, resolve: F) -> Result<Vec<RawAttestation>, AttestError>
where
    F: Fn(&str) -> Option<Box<dyn TabularSource>>,
{
    if !file.path.exists() {
        warn!(
            path = %file.path.display(),
            "attestations file not found, continuing without it"
        );
        return Ok(vec![]);
    }
    let Some(source) = resolve(&file.kind) else {
        warn!(
            path = %file.path.display(),
            kind = %file.kind,
            "unsupported attestations file type, expected csv or xlsx"
        );
        return Ok(vec![]);
    };

    let rows = source.load_rows(&file.path)?;
    debug!(path = %file.path.display(), rows = rows.len(), "read attestations file");
    Ok(rows.into_iter().map(row_to_raw).collect())
}

fn row_to_raw(row: TabularRow) -> RawAttestation {
    row.into_iter().map(|(k, v)| (k, Value::String(v))).collect()
}

/// Missing, null and empty statuses mean "not provided" rather than invalid.
fn has_status(record: &RawAttestation) -> bool {
    match record.get("status") {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}
