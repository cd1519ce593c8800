use crate::domain::models::{Attestation, Frequency};
use chrono::{Days, Months, NaiveDate, NaiveDateTime, NaiveTime};

/// Date after which a fresh re-attestation is required.
///
/// Month steps clamp to the end of the target month, so Jan 31 monthly
/// becomes Feb 28 (or 29).
pub fn expires_on(updated: NaiveDate, frequency: Frequency) -> NaiveDate {
    let advanced = match frequency {
        Frequency::Annually => updated.checked_add_months(Months::new(12)),
        Frequency::Semiannually => updated.checked_add_months(Months::new(6)),
        Frequency::Quarterly => updated.checked_add_months(Months::new(3)),
        Frequency::Monthly => updated.checked_add_months(Months::new(1)),
        Frequency::Every2weeks => updated.checked_add_days(Days::new(14)),
        Frequency::Weekly => updated.checked_add_days(Days::new(7)),
        Frequency::Every3days => updated.checked_add_days(Days::new(3)),
        Frequency::Daily => updated.checked_add_days(Days::new(1)),
    };
    advanced.unwrap_or(NaiveDate::MAX)
}

/// Like [`expires_on`] for an unparsed frequency. Unknown cadences return
/// `date` unchanged, which reads as already expired.
pub fn advance(date: NaiveDate, frequency: &str) -> NaiveDate {
    match Frequency::parse(frequency) {
        Some(f) => expires_on(date, f),
        None => date,
    }
}

pub fn is_expired(date: NaiveDate, frequency: &str, now: NaiveDateTime) -> bool {
    advance(date, frequency).and_time(NaiveTime::MIN) < now
}

pub fn attestation_expired(attestation: &Attestation, now: NaiveDateTime) -> bool {
    expires_on(attestation.updated(), attestation.frequency()).and_time(NaiveTime::MIN) < now
}
