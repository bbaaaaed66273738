//! Input validation for the tester form
//!
//! Two low-level checks (IP address shape, forbidden password characters)
//! plus the field-set validator that runs every check and collects the
//! complete error list for display.

use thiserror::Error;

use crate::form::{FormField, FormFields};

/// Characters that must not appear in SNMPv3 passwords.
///
/// The generated commands embed the passwords with only literal single
/// quotes around them, so these characters would break shell parsing on
/// the target device.
pub const FORBIDDEN_PASSWORD_CHARS: &[char] = &['+', '!', '/', '"', '?', '&'];

/// Validation errors for a single form field.
///
/// Every failure is data returned to the caller; nothing here is fatal.
/// Display output is what the UI and the headless CLI print verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A required field was left empty.
    #[error("{} is required", .field.label())]
    RequiredFieldMissing { field: FormField },

    /// A password field contains a character from the forbidden set.
    #[error("{} contains forbidden character: '{ch}'", .field.label())]
    ForbiddenCharacter { field: FormField, ch: char },

    /// The IP range does not parse as a dotted-quad address.
    #[error("Invalid IP address format")]
    InvalidIpFormat { value: String },
}

impl FieldError {
    /// The field this error refers to.
    pub fn field(&self) -> FormField {
        match self {
            Self::RequiredFieldMissing { field } => *field,
            Self::ForbiddenCharacter { field, .. } => *field,
            Self::InvalidIpFormat { .. } => FormField::IpRange,
        }
    }
}

/// Check whether a string is a dotted-quad IPv4 address.
///
/// Lenient on purpose: exactly four dot-separated groups of 1-3 ASCII
/// digits, each in 0..=255. Leading zeros are accepted ("001.2.3.4" is
/// valid), matching the behavior operators already rely on.
pub fn is_valid_ipv4(s: &str) -> bool {
    let mut groups = 0;
    for part in s.split('.') {
        groups += 1;
        if groups > 4 {
            return false;
        }
        if part.is_empty() || part.len() > 3 || !part.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        // 1-3 digits always fit in u16
        let octet: u16 = match part.parse() {
            Ok(n) => n,
            Err(_) => return false,
        };
        if octet > 255 {
            return false;
        }
    }
    groups == 4
}

/// Scan a password for forbidden characters.
///
/// Returns the first offending character in left-to-right order, so the
/// error message points at what the user typed first. The empty string
/// passes; required-field checking is the caller's job.
pub fn validate_password(s: &str) -> Result<(), char> {
    match s.chars().find(|c| FORBIDDEN_PASSWORD_CHARS.contains(c)) {
        Some(ch) => Err(ch),
        None => Ok(()),
    }
}

/// Validate all five fields and collect every error.
///
/// Checks run in declared field order and never short-circuit: the UI
/// renders the complete list in one pass, so a user fixing a form sees
/// everything that is wrong at once.
pub fn validate_fields(fields: &FormFields) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if fields.username.is_empty() {
        errors.push(FieldError::RequiredFieldMissing {
            field: FormField::Username,
        });
    }

    if fields.auth_password.is_empty() {
        errors.push(FieldError::RequiredFieldMissing {
            field: FormField::AuthPassword,
        });
    } else if let Err(ch) = validate_password(&fields.auth_password) {
        errors.push(FieldError::ForbiddenCharacter {
            field: FormField::AuthPassword,
            ch,
        });
    }

    if fields.privacy_password.is_empty() {
        errors.push(FieldError::RequiredFieldMissing {
            field: FormField::PrivacyPassword,
        });
    } else if let Err(ch) = validate_password(&fields.privacy_password) {
        errors.push(FieldError::ForbiddenCharacter {
            field: FormField::PrivacyPassword,
            ch,
        });
    }

    if fields.zone.is_empty() {
        errors.push(FieldError::RequiredFieldMissing {
            field: FormField::Zone,
        });
    }

    if fields.ip_range.is_empty() {
        errors.push(FieldError::RequiredFieldMissing {
            field: FormField::IpRange,
        });
    } else if !is_valid_ipv4(&fields.ip_range) {
        errors.push(FieldError::InvalidIpFormat {
            value: fields.ip_range.clone(),
        });
    }

    errors
}
