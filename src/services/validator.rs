use crate::domain::constants::DATE_FORMAT;
use crate::domain::errors::AttestError;
use crate::domain::models::{Attestation, AttestationStatus, Frequency, RawAttestation};
use crate::services::freshness::{attestation_expired, expires_on};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::warn;

/// Validate a whole batch. The first bad record rejects everything.
///
/// Expired attestations are kept; they only produce a warning here and are
/// re-checked when merged.
pub fn validate(
    records: &[RawAttestation],
    now: NaiveDateTime,
) -> Result<Vec<Attestation>, AttestError> {
    let attestations = records
        .iter()
        .enumerate()
        .map(|(index, record)| validate_record(index, record, now.date()))
        .collect::<Result<Vec<_>, _>>()?;

    for a in &attestations {
        if attestation_expired(a, now) {
            warn!(
                control_id = a.control_id(),
                updated = %a.updated(),
                frequency = %a.frequency(),
                expired_on = %expires_on(a.updated(), a.frequency()),
                "attestation has expired and will not change results"
            );
        }
    }
    Ok(attestations)
}

fn validate_record(
    index: usize,
    record: &RawAttestation,
    today: NaiveDate,
) -> Result<Attestation, AttestError> {
    let invalid =
        |field: &'static str, reason: String| AttestError::invalid_record(index, field, reason, record);

    let control_id = string_field(record, "control_id")
        .filter(|s| !s.is_empty())
        .ok_or_else(|| invalid("control_id", "must be a non-empty string".to_string()))?;

    let raw_status = string_field(record, "status")
        .ok_or_else(|| invalid("status", "must be a string".to_string()))?;
    let status = AttestationStatus::parse(raw_status).ok_or_else(|| {
        invalid(
            "status",
            format!("must be one of passed, failed (got {raw_status:?})"),
        )
    })?;

    let updated_by = string_field(record, "updated_by")
        .filter(|s| !s.is_empty())
        .ok_or_else(|| invalid("updated_by", "must be a non-empty string".to_string()))?;

    let explanation = string_field(record, "explanation")
        .ok_or_else(|| invalid("explanation", "must be a string".to_string()))?;

    let raw_frequency = string_field(record, "frequency")
        .ok_or_else(|| invalid("frequency", "must be a string".to_string()))?;
    let frequency = Frequency::parse(raw_frequency).ok_or_else(|| {
        let known: Vec<&str> = Frequency::ALL.iter().map(|f| f.as_str()).collect();
        invalid(
            "frequency",
            format!("must be one of {} (got {raw_frequency:?})", known.join(", ")),
        )
    })?;

    let raw_updated = string_field(record, "updated")
        .ok_or_else(|| invalid("updated", "must be a string".to_string()))?;
    let updated = parse_date(raw_updated).ok_or_else(|| {
        invalid(
            "updated",
            format!("must be a YYYY-MM-DD date (got {raw_updated:?})"),
        )
    })?;
    if updated > today {
        return Err(invalid(
            "updated",
            format!("must not be in the future (got {updated}, today is {today})"),
        ));
    }

    Ok(Attestation::new(
        control_id.to_string(),
        explanation.to_string(),
        frequency,
        status,
        updated,
        updated_by.to_string(),
    ))
}

fn string_field<'a>(record: &'a RawAttestation, field: &str) -> Option<&'a str> {
    record.get(field).and_then(serde_json::Value::as_str)
}

/// Strict `YYYY-MM-DD`; chrono alone would also take `2024-1-5`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::{parse_date, validate};
    use crate::domain::errors::AttestError;
    use crate::domain::models::{AttestationStatus, Frequency, RawAttestation};
    use chrono::{NaiveDate, NaiveDateTime};
    use serde_json::json;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .expect("now")
    }

    fn raw(v: serde_json::Value) -> RawAttestation {
        v.as_object().cloned().expect("object")
    }

    fn good(control_id: &str) -> RawAttestation {
        raw(json!({
            "control_id": control_id,
            "status": "passed",
            "updated_by": "Jane Doe, ISSO",
            "explanation": "Reviewed the firewall ruleset by hand.",
            "frequency": "monthly",
            "updated": "2024-05-20"
        }))
    }

    fn failed_field(records: &[RawAttestation]) -> &'static str {
        match validate(records, now()) {
            Err(AttestError::InvalidRecord { field, .. }) => field,
            other => panic!("expected invalid record, got {other:?}"),
        }
    }

    #[test]
    fn accepts_well_formed_records_and_normalizes_case() {
        let mut r = good("V-1");
        r.insert("status".into(), json!("FAILED"));
        r.insert("frequency".into(), json!("Every2Weeks"));
        let out = validate(&[r], now()).expect("valid");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].status(), AttestationStatus::Failed);
        assert_eq!(out[0].frequency(), Frequency::Every2weeks);
        assert_eq!(out[0].control_id(), "V-1");
    }

    #[test]
    fn one_bad_record_rejects_the_whole_batch() {
        let mut bad = good("V-2");
        bad.remove("updated_by");
        let err = validate(&[good("V-1"), bad, good("V-3")], now()).expect_err("must fail");
        match err {
            AttestError::InvalidRecord {
                index,
                field,
                record,
                ..
            } => {
                assert_eq!(index, 1);
                assert_eq!(field, "updated_by");
                assert!(record.contains("V-2"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn fields_are_checked_in_order() {
        let r = raw(json!({"control_id": 7, "status": "maybe"}));
        assert_eq!(failed_field(&[r]), "control_id");

        let r = raw(json!({"control_id": "V-1", "status": "maybe"}));
        assert_eq!(failed_field(&[r]), "status");

        let r = raw(json!({"control_id": "V-1", "status": "passed", "frequency": "never"}));
        assert_eq!(failed_field(&[r]), "updated_by");

        let mut r = good("V-1");
        r.insert("explanation".into(), json!(null));
        r.insert("frequency".into(), json!("never"));
        assert_eq!(failed_field(&[r]), "explanation");
    }

    #[test]
    fn rejects_unknown_frequency() {
        let mut r = good("V-1");
        r.insert("frequency".into(), json!("biweekly"));
        assert_eq!(failed_field(&[r]), "frequency");
    }

    #[test]
    fn rejects_malformed_and_future_dates() {
        for bad in ["2024/05/20", "2024-5-20", "yesterday", "2024-02-30"] {
            let mut r = good("V-1");
            r.insert("updated".into(), json!(bad));
            assert_eq!(failed_field(&[r]), "updated", "{bad} accepted");
        }

        let mut r = good("V-1");
        r.insert("updated".into(), json!("2024-06-02"));
        assert_eq!(failed_field(&[r]), "updated");
    }

    #[test]
    fn updated_today_is_not_future() {
        let mut r = good("V-1");
        r.insert("updated".into(), json!("2024-06-01"));
        assert!(validate(&[r], now()).is_ok());
    }

    #[test]
    fn empty_explanation_is_allowed() {
        let mut r = good("V-1");
        r.insert("explanation".into(), json!(""));
        assert!(validate(&[r], now()).is_ok());
    }

    #[test]
    fn expired_attestations_are_still_returned() {
        let mut r = good("V-1");
        r.insert("updated".into(), json!("2022-01-02"));
        r.insert("frequency".into(), json!("annually"));
        let out = validate(&[r], now()).expect("valid");
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn error_message_names_field_and_record() {
        let mut r = good("V-9");
        r.insert("status".into(), json!(true));
        let msg = validate(&[r], now()).expect_err("invalid").to_string();
        assert!(msg.contains("`status` must be a string"));
        assert!(msg.contains("\"control_id\":\"V-9\""));
    }

    #[test]
    fn strict_date_parsing() {
        assert!(parse_date("2024-01-05").is_some());
        assert!(parse_date("2024-1-5").is_none());
        assert!(parse_date(" 2024-01-05").is_none());
    }
}
