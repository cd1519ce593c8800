//! The report tree consumed from the test runner.
//!
//! Only the tree shape and control ids are typed. Everything else is kept
//! as JSON so the enriched report carries the generator's output through
//! untouched.

use crate::domain::constants::SYNTHETIC_CODE_DESC;
use crate::domain::models::{Attestation, AttestationStatus};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub profiles: Vec<Profile>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub controls: Vec<Control>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Control {
    pub id: String,
    #[serde(default)]
    pub results: Vec<ControlResult>,
    /// Set by the reconciler. An `attestation` already present in the input
    /// lands in `extra` and is dropped when a new one is attached.
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub attestation: Option<Attestation>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One test outcome, held as the runner's JSON object.
///
/// Keys the reconciler never rewrites keep their exact values, including
/// `null`s and integer `run_time`s.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlResult {
    fields: Map<String, Value>,
}

impl ControlResult {
    /// The stand-in result for a control the runner produced no results for.
    pub fn synthetic(status: AttestationStatus, message: String, start_time: String) -> Self {
        let mut fields = Map::new();
        fields.insert("status".into(), Value::from(status.as_str()));
        fields.insert("code_desc".into(), Value::from(SYNTHETIC_CODE_DESC));
        fields.insert("run_time".into(), Value::from(0.0));
        fields.insert("start_time".into(), Value::from(start_time));
        fields.insert("message".into(), Value::from(message));
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn status(&self) -> Option<&str> {
        self.text("status")
    }

    pub fn message(&self) -> Option<&str> {
        self.text("message")
    }

    pub fn skip_message(&self) -> Option<&str> {
        self.text("skip_message")
    }

    pub fn set_status(&mut self, status: &str) {
        self.fields.insert("status".into(), Value::from(status));
    }

    pub fn set_message(&mut self, message: String) {
        self.fields.insert("message".into(), Value::from(message));
    }

    /// Remove the backtrace and hand it back. A `null` backtrace stays put.
    pub fn take_backtrace(&mut self) -> Option<Value> {
        match self.fields.get("backtrace") {
            None | Some(Value::Null) => None,
            Some(_) => self.fields.remove("backtrace"),
        }
    }
}

impl Control {
    pub fn attach(&mut self, attestation: &Attestation) {
        self.extra.remove("attestation");
        self.attestation = Some(attestation.clone());
    }
}
