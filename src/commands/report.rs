use crate::cli::{Cli, Commands};
use crate::domain::models::JsonOut;
use crate::services::config::load_config;
use crate::services::output::print_one;
use crate::services::pipeline::build_report;
use crate::services::storage::{load_report, save_report};
use chrono::NaiveDateTime;

pub fn handle_apply_command(cli: &Cli, now: NaiveDateTime) -> anyhow::Result<bool> {
    let Commands::Apply {
        report,
        config,
        output,
    } = &cli.command
    else {
        return Ok(false);
    };

    let base = load_report(report)?;
    let config = load_config(config)?;
    let outcome = build_report(base, &config, now)?;

    match output {
        Some(path) => {
            save_report(path, &outcome.report)?;
            print_one(cli.json, outcome.summary, |s| {
                format!(
                    "wrote {}: {} controls, {} attested, {} applied, {} expired",
                    path.display(),
                    s.controls,
                    s.matched,
                    s.applied,
                    s.expired
                )
            })?;
        }
        None if cli.json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&JsonOut {
                    ok: true,
                    data: &outcome.report
                })?
            );
        }
        None => println!("{}", serde_json::to_string_pretty(&outcome.report)?),
    }

    Ok(true)
}
