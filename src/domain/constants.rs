/// `code_desc` of the result synthesized for a control that had no results.
pub const SYNTHETIC_CODE_DESC: &str = "Manually verified Status provided through attestation";

/// Base message for a result that passed before the attestation overrode it.
pub const AUTOMATED_PASS_MESSAGE: &str = "Automated test returned as passed.";

/// The only accepted format for `updated`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Plugin section name when the config file is a full runner config.
pub const PLUGIN_CONFIG_KEY: &str = "inspec-reporter-json-hdf";

/// Attestation field names, in the order they appear in tabular headers.
pub const ATTESTATION_FIELDS: [&str; 6] = [
    "control_id",
    "explanation",
    "frequency",
    "status",
    "updated",
    "updated_by",
];
