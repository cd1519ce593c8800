use crate::domain::errors::AttestError;
use crate::domain::report::Report;
use std::path::Path;

pub fn load_report(path: &Path) -> Result<Report, AttestError> {
    let raw = std::fs::read_to_string(path).map_err(|e| AttestError::report(path, e))?;
    serde_json::from_str(&raw).map_err(|e| AttestError::report(path, e))
}

pub fn save_report(path: &Path, report: &Report) -> Result<(), AttestError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(report)?)?;
    Ok(())
}
