//! Service layer containing the attestation logic and side-effect helpers.
//!
//! ## Service map
//! - `freshness.rs`: review cadence math and expiry checks.
//! - `validator.rs`: raw record checks, builds `Attestation`s.
//! - `sources.rs`: CSV/XLSX adapters behind `TabularSource`.
//! - `loader.rs`: merges spreadsheet and inline attestations, then validates.
//! - `reconcile.rs`: applies attestations to report controls.
//! - `pipeline.rs`: loader + reconciler in one call.
//! - `config.rs`: explicit config file loading (JSON/TOML).
//! - `storage.rs`: report read/write.
//! - `output.rs`: JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible; `now` is always passed in.
//! - Side effects should be explicit and localized.
//! - Warnings go through `tracing`, never stdout.

pub mod config;
pub mod freshness;
pub mod loader;
pub mod output;
pub mod pipeline;
pub mod reconcile;
pub mod sources;
pub mod storage;
pub mod validator;
