//! Configuration file handling for saving and loading tester field sets.
//!
//! A filled form can be saved as JSON and reloaded later, either into the
//! TUI (`snmptester form --config`) or for headless generation
//! (`snmptester generate --config`). Validation reuses the same field-set
//! validator the form uses, so a file that loads and validates here will
//! always generate.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::form::FormFields;
use crate::validation::validate_fields;

/// Tester configuration that can be saved/loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TesterConfig {
    pub snmpv3_username: String,
    pub auth_password: String,
    pub privacy_password: String,
    pub zone: String,
    pub ip_range: String,
}

impl TesterConfig {
    /// Load a configuration from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save the configuration to a JSON file.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents =
            serde_json::to_string_pretty(self).context("Failed to serialize configuration")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Validate all fields, reporting every problem in one error.
    pub fn validate(&self) -> Result<()> {
        let errors = validate_fields(&self.to_fields());
        if errors.is_empty() {
            return Ok(());
        }
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        anyhow::bail!("Invalid configuration:\n  - {}", messages.join("\n  - "));
    }

    /// Convert into form field values.
    pub fn to_fields(&self) -> FormFields {
        FormFields {
            username: self.snmpv3_username.clone(),
            auth_password: self.auth_password.clone(),
            privacy_password: self.privacy_password.clone(),
            zone: self.zone.clone(),
            ip_range: self.ip_range.clone(),
        }
    }

    /// Build a configuration from form field values.
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            snmpv3_username: fields.username.clone(),
            auth_password: fields.auth_password.clone(),
            privacy_password: fields.privacy_password.clone(),
            zone: fields.zone.clone(),
            ip_range: fields.ip_range.clone(),
        }
    }
}
