//! Command string generation
//!
//! Turns a validated set of form fields into the two command strings the
//! operator pastes onto the device and the monitoring host. The templates
//! are fixed; values are inserted verbatim with no escaping beyond the
//! literal single quotes in the test command.

use crate::form::FormFields;
use crate::validation::{validate_fields, FieldError};

/// SNMPv3 user credentials, validated upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub auth_password: String,
    pub privacy_password: String,
}

/// Where the test command points: monitoring zone and IP range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkTarget {
    pub zone: String,
    pub ip_range: String,
}

/// The two generated command strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPair {
    /// Device-side configuration: `snmp-server user ...`
    pub config_command: String,
    /// Monitoring-side check: `test_snmp ...`
    pub test_command: String,
}

/// Format the two commands from validated values.
///
/// Pure and deterministic; must only be called once all five inputs have
/// passed [`validate_fields`]. The output strings are compatibility
/// surface: downstream tooling parses them, so the templates are exact.
pub fn generate_commands(credentials: &Credentials, target: &NetworkTarget) -> CommandPair {
    let config_command = format!(
        "snmp-server user {} v3 sha1 plain {} {}",
        credentials.username, credentials.auth_password, credentials.privacy_password
    );
    let test_command = format!(
        "test_snmp --snmpv3user {} --snmpv3pwd '{}' --snmpv3privauth '{}' --zone {} --iprange {}",
        credentials.username,
        credentials.auth_password,
        credentials.privacy_password,
        target.zone,
        target.ip_range
    );
    CommandPair {
        config_command,
        test_command,
    }
}

/// Validate the five fields and, if they all pass, generate the commands.
///
/// On failure returns the complete error list in field order (the
/// validator never short-circuits).
pub fn validate_and_generate(fields: &FormFields) -> Result<CommandPair, Vec<FieldError>> {
    let errors = validate_fields(fields);
    if !errors.is_empty() {
        return Err(errors);
    }

    let credentials = Credentials {
        username: fields.username.clone(),
        auth_password: fields.auth_password.clone(),
        privacy_password: fields.privacy_password.clone(),
    };
    let target = NetworkTarget {
        zone: fields.zone.clone(),
        ip_range: fields.ip_range.clone(),
    };
    Ok(generate_commands(&credentials, &target))
}
