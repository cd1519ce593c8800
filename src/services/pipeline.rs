use crate::domain::errors::AttestError;
use crate::domain::models::{AttestationConfig, ReconcileSummary};
use crate::domain::report::Report;
use crate::services::loader::load;
use crate::services::reconcile::reconcile;
use chrono::NaiveDateTime;
use tracing::info;

pub struct BuildOutcome {
    pub report: Report,
    pub summary: ReconcileSummary,
    pub attestations: usize,
}

/// Load attestations for `config` and merge them into `base`.
///
/// A validation failure aborts before the report is touched.
pub fn build_report(
    mut base: Report,
    config: &AttestationConfig,
    now: NaiveDateTime,
) -> Result<BuildOutcome, AttestError> {
    let attestations = load(config, now)?;
    let summary = reconcile(&mut base, &attestations, now);
    info!(
        attestations = attestations.len(),
        matched = summary.matched,
        applied = summary.applied,
        expired = summary.expired,
        "attestations merged"
    );
    Ok(BuildOutcome {
        report: base,
        summary,
        attestations: attestations.len(),
    })
}
