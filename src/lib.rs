//! Post-processing for compliance test reports: merges manual control
//! attestations into the runner's results.
//!
//! The entry point is [`services::pipeline::build_report`].

pub mod cli;
pub mod commands;
pub mod domain;
pub mod services;
