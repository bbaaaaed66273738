//! Integration tests for command generation
//!
//! The two output strings are compatibility surface: downstream tooling
//! pastes them verbatim, so the expected values here are exact.

use snmptester::commands::{generate_commands, validate_and_generate, Credentials, NetworkTarget};
use snmptester::form::FormFields;
use snmptester::validation::FieldError;

fn example_credentials() -> Credentials {
    Credentials {
        username: "snmp4ise".to_string(),
        auth_password: "Auth-PW".to_string(),
        privacy_password: "Priv-PW".to_string(),
    }
}

fn example_target() -> NetworkTarget {
    NetworkTarget {
        zone: "XXX".to_string(),
        ip_range: "100.100.100.100".to_string(),
    }
}

#[test]
fn test_config_command_exact() {
    let pair = generate_commands(&example_credentials(), &example_target());
    assert_eq!(
        pair.config_command,
        "snmp-server user snmp4ise v3 sha1 plain Auth-PW Priv-PW"
    );
}

#[test]
fn test_test_command_exact() {
    let pair = generate_commands(&example_credentials(), &example_target());
    assert_eq!(
        pair.test_command,
        "test_snmp --snmpv3user snmp4ise --snmpv3pwd 'Auth-PW' --snmpv3privauth 'Priv-PW' --zone XXX --iprange 100.100.100.100"
    );
}

#[test]
fn test_values_inserted_verbatim() {
    // No escaping is applied; whatever passed validation goes in as-is
    let credentials = Credentials {
        username: "user name".to_string(),
        auth_password: "pa'ss".to_string(),
        privacy_password: "p$w".to_string(),
    };
    let target = NetworkTarget {
        zone: "zone-1".to_string(),
        ip_range: "10.0.0.0".to_string(),
    };
    let pair = generate_commands(&credentials, &target);
    assert!(pair.config_command.contains("plain pa'ss p$w"));
    assert!(pair.test_command.contains("--snmpv3pwd 'pa'ss'"));
    assert!(pair.test_command.contains("--zone zone-1"));
}

#[test]
fn test_generation_is_idempotent() {
    let first = generate_commands(&example_credentials(), &example_target());
    let second = generate_commands(&example_credentials(), &example_target());
    assert_eq!(first, second);
}

#[test]
fn test_validate_and_generate_happy_path() {
    let pair = validate_and_generate(&FormFields::example()).expect("example fields are valid");
    assert_eq!(
        pair.config_command,
        "snmp-server user snmp4ise v3 sha1 plain Auth-PW Priv-PW"
    );
    assert_eq!(
        pair.test_command,
        "test_snmp --snmpv3user snmp4ise --snmpv3pwd 'Auth-PW' --snmpv3privauth 'Priv-PW' --zone XXX --iprange 100.100.100.100"
    );
}

#[test]
fn test_validate_and_generate_empty_form() {
    let errors = validate_and_generate(&FormFields::default()).unwrap_err();
    assert_eq!(errors.len(), 5);
    assert!(errors
        .iter()
        .all(|e| matches!(e, FieldError::RequiredFieldMissing { .. })));
}

#[test]
fn test_validate_and_generate_single_ip_error() {
    let mut fields = FormFields::example();
    fields.ip_range = "999.1.1.1".to_string();
    let errors = validate_and_generate(&fields).unwrap_err();
    assert_eq!(
        errors,
        vec![FieldError::InvalidIpFormat {
            value: "999.1.1.1".to_string()
        }]
    );
}

#[test]
fn test_forbidden_password_blocks_generation() {
    let mut fields = FormFields::example();
    fields.privacy_password = "oops&pw".to_string();
    let errors = validate_and_generate(&fields).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "Privacy Password contains forbidden character: '&'"
    );
}
