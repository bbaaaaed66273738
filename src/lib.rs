//! SNMP Monitoring Tester Library
//!
//! Core validation and command generation for the SNMP monitoring tester,
//! plus the TUI form shell around it.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config_file;
pub mod error;
pub mod form;
pub mod theme;
pub mod ui;
pub mod validation;

// Re-export main types for convenience
pub use commands::{generate_commands, validate_and_generate, CommandPair, Credentials, NetworkTarget};
pub use config_file::TesterConfig;
pub use error::SnmpTesterError;
pub use form::{FormField, FormFields, FormState};
pub use validation::{is_valid_ipv4, validate_fields, validate_password, FieldError};
