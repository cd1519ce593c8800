use chrono::{Local, NaiveDateTime, NaiveTime};
use clap::Parser;
use hdf_attest::cli::Cli;
use hdf_attest::commands::{handle_apply_command, handle_review_commands};
use hdf_attest::services::output::print_error;

fn init_tracing(verbose: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(if verbose {
            "hdf_attest=info"
        } else {
            "hdf_attest=warn"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let now: NaiveDateTime = match cli.now {
        Some(day) => day.and_time(NaiveTime::MIN),
        None => Local::now().naive_local(),
    };

    if handle_apply_command(cli, now)? {
        return Ok(());
    }
    handle_review_commands(cli, now)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        if cli.json {
            print_error(&err);
        } else {
            eprintln!("error: {err:#}");
        }
        std::process::exit(1);
    }
}
