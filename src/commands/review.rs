use crate::cli::{Cli, Commands};
use crate::domain::models::{Attestation, AttestationReview};
use crate::services::config::load_config;
use crate::services::freshness::{attestation_expired, expires_on};
use crate::services::loader::load;
use crate::services::output::print_out;
use chrono::NaiveDateTime;

pub fn handle_review_commands(cli: &Cli, now: NaiveDateTime) -> anyhow::Result<bool> {
    let (config, only_expired) = match &cli.command {
        Commands::Validate { config } => (config, false),
        Commands::Status { config } => (config, true),
        _ => return Ok(false),
    };

    let attestations = load(&load_config(config)?, now)?;
    let reviews: Vec<AttestationReview> = attestations
        .iter()
        .map(|a| review(a, now))
        .filter(|r| !only_expired || r.expired)
        .collect();

    print_out(cli.json, &reviews, |r| {
        format!(
            "{}\t{}\t{}\t{}",
            r.control_id,
            r.status,
            r.expires_on,
            if r.expired { "expired" } else { "fresh" }
        )
    })?;
    Ok(true)
}

fn review(a: &Attestation, now: NaiveDateTime) -> AttestationReview {
    AttestationReview {
        control_id: a.control_id().to_string(),
        status: a.status(),
        frequency: a.frequency(),
        updated: a.updated(),
        updated_by: a.updated_by().to_string(),
        expires_on: expires_on(a.updated(), a.frequency()),
        expired: attestation_expired(a, now),
    }
}
