use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Freshness date every test runs at, so results do not depend on the clock.
pub const NOW: &str = "2024-06-01";

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    pub report: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        let report = root.join("report.json");
        fs::write(
            &report,
            serde_json::to_string_pretty(&fixture_report()).expect("serialize report"),
        )
        .expect("write report");
        Self {
            _tmp: tmp,
            root,
            report,
        }
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.root.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture dir");
        }
        fs::write(&path, contents).expect("write fixture");
        path
    }

    pub fn write_config(&self, config: &Value) -> PathBuf {
        self.write(
            "attestations.json",
            &serde_json::to_string_pretty(config).expect("serialize config"),
        )
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("hdf-attest");
        cmd.current_dir(&self.root).env("RUST_LOG", "hdf_attest=warn");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .args(["--json", "--now", NOW])
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_failure(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .args(["--json", "--now", NOW])
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("error json output")
    }

    pub fn report_arg(&self) -> &str {
        self.report.to_str().expect("report path utf8")
    }
}

pub fn attestation(control_id: &str, status: &str, updated: &str, frequency: &str) -> Value {
    serde_json::json!({
        "control_id": control_id,
        "status": status,
        "explanation": format!("{control_id} reviewed by hand"),
        "updated": updated,
        "updated_by": "Jane Doe, ISSO",
        "frequency": frequency
    })
}

pub fn fixture_report() -> Value {
    serde_json::json!({
        "platform": {"name": "ubuntu", "release": "22.04"},
        "version": "5.22.3",
        "statistics": {"duration": 0.42},
        "profiles": [{
            "name": "fixture-baseline",
            "version": "1.0.0",
            "controls": [
                {"id": "V-0001", "title": "Manual review only", "impact": 0.5, "results": []},
                {"id": "V-0002", "title": "SSH hardening", "impact": 0.7, "results": [
                    {"status": "passed", "code_desc": "sshd_config PermitRootLogin is no",
                     "run_time": 0.01, "start_time": "2024-06-01T10:00:00+00:00"}
                ]},
                {"id": "V-0003", "title": "Container only", "impact": 0.3, "results": [
                    {"status": "skipped", "code_desc": "No-op",
                     "skip_message": "Skipped control due to only_if condition."}
                ]},
                {"id": "V-0004", "title": "Audit rules", "impact": 0.5, "results": [
                    {"status": "failed", "code_desc": "auditd rules",
                     "message": "expected [] to include \"-w /etc/passwd\"",
                     "backtrace": ["auditd.rb:12", "runner.rb:88"]}
                ]},
                {"id": "V-0005", "title": "Untouched", "impact": 0.5, "results": [
                    {"status": "passed", "code_desc": "untouched"}
                ]}
            ]
        }]
    })
}
