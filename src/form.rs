//! Form field definitions and editing state
//!
//! The form is an explicit value owned by the application: the UI renders
//! it, key handling mutates it through its methods, and the validator
//! reads it. Nothing global, nothing hidden.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// The five tester fields, in validation and display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum FormField {
    Username,
    AuthPassword,
    PrivacyPassword,
    Zone,
    IpRange,
}

impl FormField {
    /// All fields in order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Username,
            Self::AuthPassword,
            Self::PrivacyPassword,
            Self::Zone,
            Self::IpRange,
        ]
    }

    /// Get field label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Username => "SNMPv3 Username",
            Self::AuthPassword => "Auth Password",
            Self::PrivacyPassword => "Privacy Password",
            Self::Zone => "Zone",
            Self::IpRange => "IP Range",
        }
    }

    /// Placeholder shown while the field is empty.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Username => "e.g., snmp4ise",
            Self::AuthPassword => "e.g., Auth-PW",
            Self::PrivacyPassword => "e.g., Priv-PW",
            Self::Zone => "e.g., XXX",
            Self::IpRange => "e.g., 100.100.100.100",
        }
    }

    /// Help line for the focused field.
    pub fn help(&self) -> &'static str {
        match self {
            Self::Username => "Enter the SNMPv3 username",
            Self::AuthPassword => "Authentication password (no +, !, /, \", ?, & allowed)",
            Self::PrivacyPassword => "Privacy password (no +, !, /, \", ?, & allowed)",
            Self::Zone => "Zone identifier",
            Self::IpRange => "IP address or range",
        }
    }

    /// Check if field should be masked in the form view.
    pub fn is_password(&self) -> bool {
        matches!(self, Self::AuthPassword | Self::PrivacyPassword)
    }
}

/// The raw field values, exactly as typed.
///
/// Serializable so a filled form can be saved to and loaded from a
/// JSON config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub username: String,
    pub auth_password: String,
    pub privacy_password: String,
    pub zone: String,
    pub ip_range: String,
}

impl FormFields {
    /// The example data set behind the "Load Example" action.
    pub fn example() -> Self {
        Self {
            username: "snmp4ise".to_string(),
            auth_password: "Auth-PW".to_string(),
            privacy_password: "Priv-PW".to_string(),
            zone: "XXX".to_string(),
            ip_range: "100.100.100.100".to_string(),
        }
    }

    /// Get a field value by field.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Username => &self.username,
            FormField::AuthPassword => &self.auth_password,
            FormField::PrivacyPassword => &self.privacy_password,
            FormField::Zone => &self.zone,
            FormField::IpRange => &self.ip_range,
        }
    }

    /// Get a mutable reference to a field value.
    pub fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Username => &mut self.username,
            FormField::AuthPassword => &mut self.auth_password,
            FormField::PrivacyPassword => &mut self.privacy_password,
            FormField::Zone => &mut self.zone,
            FormField::IpRange => &mut self.ip_range,
        }
    }
}

/// Editing state for the tester form: the values plus focus position.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    /// Field values.
    pub fields: FormFields,
    /// Index into [`FormField::all`] of the focused field.
    pub focus: usize,
}

impl FormState {
    /// Create an empty form focused on the first field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a form prefilled with the given values.
    pub fn with_fields(fields: FormFields) -> Self {
        Self { fields, focus: 0 }
    }

    /// Get the focused field.
    pub fn current(&self) -> FormField {
        FormField::all()[self.focus]
    }

    /// Move focus to the next field, wrapping at the end.
    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % FormField::all().len();
    }

    /// Move focus to the previous field, wrapping at the start.
    pub fn previous_field(&mut self) {
        let len = FormField::all().len();
        self.focus = (self.focus + len - 1) % len;
    }

    /// Append a character to the focused field.
    pub fn insert_char(&mut self, c: char) {
        // Control characters would corrupt the generated command line
        if !c.is_control() {
            self.fields.value_mut(self.current()).push(c);
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        self.fields.value_mut(self.current()).pop();
    }

    /// Reset all fields (the "Clear" action).
    pub fn clear(&mut self) {
        self.fields = FormFields::default();
        self.focus = 0;
    }

    /// Fill the form with the example data set (the "Load Example" action).
    pub fn load_example(&mut self) {
        self.fields = FormFields::example();
    }
}
