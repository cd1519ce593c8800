//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `report.rs`: `apply`: merge attestations into a report.
//! - `review.rs`: `validate`/`status`: inspect attestations on their own.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod report;
pub mod review;

pub use report::handle_apply_command;
pub use review::handle_review_commands;
