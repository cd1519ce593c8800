//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep attestation, report and output structs in one place.
//! - Avoid cyclic imports between services.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs`: attestation record, config, review/summary outputs.
//! - `report.rs`: the profile/control/result tree produced by the test runner.
//! - `constants.rs`: stable message strings and config keys.
//! - `errors.rs`: the crate error enum and its machine codes.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs and the enriched report.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod errors;
pub mod models;
pub mod report;
