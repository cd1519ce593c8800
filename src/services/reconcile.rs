use crate::domain::constants::AUTOMATED_PASS_MESSAGE;
use crate::domain::models::{Attestation, ReconcileSummary};
use crate::domain::report::{Control, ControlResult, Report};
use crate::services::freshness::{attestation_expired, expires_on};
use chrono::{Local, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// Control id to attestation, keeping the first record seen for each id.
pub struct AttestationIndex<'a> {
    by_control: HashMap<&'a str, &'a Attestation>,
}

impl<'a> AttestationIndex<'a> {
    pub fn new(attestations: &'a [Attestation]) -> Self {
        let mut by_control = HashMap::with_capacity(attestations.len());
        for a in attestations {
            by_control.entry(a.control_id()).or_insert(a);
        }
        Self { by_control }
    }

    pub fn get(&self, control_id: &str) -> Option<&'a Attestation> {
        self.by_control.get(control_id).copied()
    }
}

/// Merge attestations into the report in place.
///
/// Every matched control gets its `attestation` field. Results are only
/// rewritten when the attestation is still fresh at `now`.
pub fn reconcile(
    report: &mut Report,
    attestations: &[Attestation],
    now: NaiveDateTime,
) -> ReconcileSummary {
    let index = AttestationIndex::new(attestations);
    let mut summary = ReconcileSummary::default();
    let mut seen = HashSet::new();

    for control in report.profiles.iter_mut().flat_map(|p| p.controls.iter_mut()) {
        summary.controls += 1;
        let Some(attestation) = index.get(&control.id) else {
            continue;
        };
        seen.insert(attestation.control_id());
        summary.matched += 1;
        control.attach(attestation);

        if attestation_expired(attestation, now) {
            warn!(
                control_id = %control.id,
                expired_on = %expires_on(attestation.updated(), attestation.frequency()),
                "attestation expired, results left unchanged"
            );
            summary.expired += 1;
            continue;
        }
        apply_attestation(control, attestation, now);
        summary.applied += 1;
        debug!(control_id = %control.id, status = %attestation.status(), "attestation applied");
    }

    let mut reported = HashSet::new();
    for a in attestations {
        let id = a.control_id();
        if !seen.contains(id) && reported.insert(id) {
            info!(control_id = id, "attestation did not match any control");
            summary.unmatched.push(id.to_string());
        }
    }
    summary
}

fn apply_attestation(control: &mut Control, attestation: &Attestation, now: NaiveDateTime) {
    let block = attestation_message(attestation);

    if control.results.is_empty() {
        control.results.push(ControlResult::synthetic(
            attestation.status(),
            block,
            timestamp(now),
        ));
        return;
    }

    for result in &mut control.results {
        let base = match result.status() {
            Some("passed") => Some(AUTOMATED_PASS_MESSAGE),
            Some("skipped") => result.skip_message(),
            _ => result.message(),
        };
        let mut message = match base {
            Some(base) if !base.is_empty() => format!("{base}\n\n{block}"),
            _ => block.clone(),
        };
        if let Some(backtrace) = result.take_backtrace() {
            message.push_str("\n\nbacktrace: ");
            message.push_str(&render_backtrace(&backtrace));
        }
        result.set_status(attestation.status().as_str());
        result.set_message(message);
    }
}

/// RFC 3339 with the local offset, e.g. `2024-01-20T08:30:00+01:00`.
/// A wall-clock time skipped by a DST jump is stamped as UTC.
fn timestamp(now: NaiveDateTime) -> String {
    match Local.from_local_datetime(&now).earliest() {
        Some(local) => local.to_rfc3339_opts(SecondsFormat::Secs, false),
        None => Utc
            .from_utc_datetime(&now)
            .to_rfc3339_opts(SecondsFormat::Secs, false),
    }
}

/// The text block appended to every result an attestation touches.
pub fn attestation_message(attestation: &Attestation) -> String {
    format!(
        "Attestation:\nStatus: {}\nExplanation: {}\n\nUpdated: {}\nUpdated By: {}\nFrequency: {}",
        attestation.status(),
        attestation.explanation(),
        attestation.updated(),
        attestation.updated_by(),
        attestation.frequency(),
    )
}

fn render_backtrace(backtrace: &Value) -> String {
    match backtrace {
        Value::String(s) => s.clone(),
        Value::Array(frames) => frames
            .iter()
            .map(|f| match f {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        other => other.to_string(),
    }
}
