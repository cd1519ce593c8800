use crate::domain::errors::AttestError;
use crate::domain::models::{ErrorBody, ErrorOut, JsonOut};
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Error envelope for `--json` runs. Falls back to a generic code for
/// errors that did not come from the library.
pub fn print_error(err: &anyhow::Error) {
    let code = err
        .downcast_ref::<AttestError>()
        .map(AttestError::code)
        .unwrap_or("ERROR");
    let out = ErrorOut {
        ok: false,
        error: ErrorBody {
            code: code.to_string(),
            message: format!("{err:#}"),
        },
    };
    match serde_json::to_string_pretty(&out) {
        Ok(s) => println!("{s}"),
        Err(_) => eprintln!("error: {err:#}"),
    }
}
