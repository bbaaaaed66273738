//! SNMP Monitoring Tester - Main entry point
//!
//! Launches the interactive form by default; `generate` and `validate`
//! subcommands cover headless use.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::path::Path;
use tracing::{debug, error, info};

use snmptester::app::App;
use snmptester::cli::{Cli, Commands};
use snmptester::commands::validate_and_generate;
use snmptester::config_file::TesterConfig;
use snmptester::error::general_error;
use snmptester::form::{FormFields, FormState};

/// Initialize the logger with appropriate settings
fn init_logger() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            // RUST_LOG overrides; default keeps the TUI quiet
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    info!("SNMP Monitoring Tester starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    match cli.command {
        Some(Commands::Validate { config }) => {
            info!("Validating configuration file: {:?}", config);
            match TesterConfig::load_from_file(&config) {
                Ok(loaded) => match loaded.validate() {
                    Ok(()) => {
                        info!("Configuration validation successful");
                        println!("✓ Configuration file is valid: {}", config.display());
                    }
                    Err(e) => {
                        error!("Configuration validation failed: {:#}", e);
                        eprintln!("✗ {}", e);
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    error!("Failed to load configuration file: {:#}", e);
                    eprintln!("✗ {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Generate {
            user,
            auth_password,
            privacy_password,
            zone,
            ip_range,
            config,
        }) => {
            let fields = if let Some(ref config_path) = config {
                info!("Generating from config file: {:?}", config_path);
                match TesterConfig::load_from_file(config_path) {
                    Ok(loaded) => loaded.to_fields(),
                    Err(e) => {
                        error!("Failed to load configuration file: {:#}", e);
                        eprintln!("✗ {:#}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                // Missing flags become empty fields so the validator
                // reports every one of them at once
                FormFields {
                    username: user.unwrap_or_default(),
                    auth_password: auth_password.unwrap_or_default(),
                    privacy_password: privacy_password.unwrap_or_default(),
                    zone: zone.unwrap_or_default(),
                    ip_range: ip_range.unwrap_or_default(),
                }
            };
            run_headless_generate(&fields);
        }
        Some(Commands::Form {
            config,
            save_config,
        }) => {
            let form = match config {
                Some(ref path) => {
                    info!("Prefilling form from config file: {:?}", path);
                    match TesterConfig::load_from_file(path) {
                        Ok(loaded) => FormState::with_fields(loaded.to_fields()),
                        Err(e) => {
                            error!("Failed to load configuration file: {:#}", e);
                            eprintln!("✗ {:#}", e);
                            std::process::exit(1);
                        }
                    }
                }
                None => FormState::new(),
            };
            run_tui(form, save_config.as_deref())?;
        }
        None => {
            info!("No command specified, launching interactive form");
            run_tui(FormState::new(), None)?;
        }
    }

    Ok(())
}

/// Validate the fields and print the commands (or every error) without a TUI
fn run_headless_generate(fields: &FormFields) {
    match validate_and_generate(fields) {
        Ok(pair) => {
            info!("Commands generated successfully");
            println!("{}", pair.config_command);
            println!("{}", pair.test_command);
        }
        Err(errors) => {
            error!("Validation failed with {} error(s)", errors.len());
            for e in &errors {
                eprintln!("✗ {}", e);
            }
            std::process::exit(1);
        }
    }
}

/// Run the interactive form
fn run_tui(form: FormState, save_config: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    debug!("Initializing terminal for TUI mode");

    // Initialize terminal
    enable_raw_mode().map_err(|e| general_error(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .map_err(|e| general_error(format!("Failed to enter alternate screen: {}", e)))?;

    // Create terminal backend
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| general_error(format!("Failed to create terminal: {}", e)))?;

    // Create and run application
    let mut app = App::with_form(form, save_config.map(Path::to_path_buf));
    let result = app.run(&mut terminal);

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result.map_err(Into::into)
}
