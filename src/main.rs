//! Alerta Temprana - map-based early alert board
//!
//! Pick an alert category, move the cursor over the map and place a marker.
//!
//! ## Usage
//!
//! ```bash
//! # Start the terminal map
//! alerta
//!
//! # With verbose logging
//! alerta -v
//!
//! # With a custom config file and log directory
//! alerta --config ./alerta.yaml --log-dir /tmp/alerta-logs/
//!
//! # Show the effective configuration
//! alerta --print-config
//! ```

use std::panic;
use std::path::PathBuf;
use std::process::ExitCode;

use alerta_config::AlertaConfig;
use alerta_core::logging::{current_log_file, default_log_dir};
use alerta_core::{init_logging, AlertaError, LogGuard};
use alerta_tui::App;
use clap::Parser;
use tracing::{error, info};

/// Alerta Temprana
///
/// Place and resolve weather alerts on a terminal map.
#[derive(Parser, Debug)]
#[command(name = "alerta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging (increases log level)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Directory for log files (defaults to ~/.alerta/logs/)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Configuration file (defaults to ~/.alerta/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AlertaConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            report(&e);
            return ExitCode::from(exit_status(&e));
        }
    };

    if cli.print_config {
        return match config.to_yaml() {
            Ok(yaml) => {
                print!("{yaml}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                report(&e);
                ExitCode::from(exit_status(&e))
            }
        };
    }

    let _guard = match setup_logging(&cli) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            return ExitCode::from(exit_status(&e));
        }
    };

    install_panic_hook();

    info!(layer = %config.map.layer, "Starting Alerta Temprana");

    match App::new(config).run() {
        Ok(()) => {
            info!("Alerta Temprana exited normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Alerta Temprana error: {:#}", e);
            let status = match e.downcast_ref::<AlertaError>() {
                Some(err) => {
                    report(err);
                    exit_status(err)
                }
                None => {
                    eprintln!("Error: {:#}", e);
                    1
                }
            };
            if let Some(log_file) = log_file(&cli) {
                eprintln!("  log: {}", log_file.display());
            }
            ExitCode::from(status)
        }
    }
}

/// Process exit status for an error: 2 for configuration, 3 for fatal
/// terminal or internal failures, 1 otherwise.
fn exit_status(err: &AlertaError) -> u8 {
    if err.is_config_error() {
        2
    } else if err.is_fatal() {
        3
    } else {
        1
    }
}

/// Today's log file for this invocation.
fn log_file(cli: &Cli) -> Option<PathBuf> {
    let dir = match &cli.log_dir {
        Some(dir) => dir.clone(),
        None => default_log_dir().ok()?,
    };
    Some(current_log_file(&dir))
}

/// Print an error with its guidance line, if any.
fn report(err: &AlertaError) {
    eprintln!("Error: {}", err);
    if let Some(hint) = err.guidance() {
        eprintln!("  hint: {}", hint);
    }
}

/// Install a panic hook that restores the terminal before printing the panic message.
fn install_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = alerta_tui::restore_terminal();
        original_hook(panic_info);
    }));
}

/// Set up logging based on CLI arguments.
fn setup_logging(cli: &Cli) -> alerta_core::Result<LogGuard> {
    init_logging(cli.log_dir.clone(), cli.verbose > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_exit_status_by_error_kind() {
        assert_eq!(exit_status(&AlertaError::config_validation("bad delta")), 2);
        assert_eq!(exit_status(&AlertaError::config_not_found("/nope.yaml")), 2);
        assert_eq!(exit_status(&AlertaError::TerminalInit { message: "no tty".into() }), 3);
        assert_eq!(exit_status(&AlertaError::internal("bug")), 3);
        assert_eq!(exit_status(&AlertaError::TerminalRestore { message: "closed".into() }), 1);
    }

    #[test]
    fn test_log_file_uses_log_dir_flag() {
        let cli = Cli::parse_from(["alerta", "--log-dir", "/tmp/alerta-logs"]);
        let file = log_file(&cli).unwrap();
        assert_eq!(file.parent(), Some(std::path::Path::new("/tmp/alerta-logs")));
        assert!(file.to_string_lossy().contains("alerta.log."));
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from(["alerta", "-vv", "--config", "a.yaml", "--print-config"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("a.yaml")));
        assert!(cli.print_config);
        assert!(cli.log_dir.is_none());
    }
}
