use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SNMP Monitoring Tester - generate SNMPv3 config and test commands
#[derive(Parser)]
#[command(name = "snmptester")]
#[command(about = "Generate SNMP configuration and test commands from validated inputs")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive form (default when no command is given)
    Form {
        /// Prefill the form from a saved configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Save the field values to this file when commands are generated
        #[arg(long)]
        save_config: Option<PathBuf>,
    },
    /// Generate the commands without the TUI
    Generate {
        /// SNMPv3 username
        #[arg(short, long)]
        user: Option<String>,

        /// Authentication password (no +, !, /, ", ?, & allowed)
        #[arg(short, long)]
        auth_password: Option<String>,

        /// Privacy password (no +, !, /, ", ?, & allowed)
        #[arg(short, long)]
        privacy_password: Option<String>,

        /// Zone identifier
        #[arg(short, long)]
        zone: Option<String>,

        /// IP address or range (dotted quad)
        #[arg(short, long)]
        ip_range: Option<String>,

        /// Read the field values from a saved configuration file instead
        #[arg(short, long, conflicts_with_all = ["user", "auth_password", "privacy_password", "zone", "ip_range"])]
        config: Option<PathBuf>,
    },
    /// Validate a saved configuration file
    Validate {
        /// Path to configuration file to validate
        config: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
