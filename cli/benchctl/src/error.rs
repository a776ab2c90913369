//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid GUID: {0}")]
    Guid(#[from] money_guid::GuidError),

    #[error("All {0} iterations failed to reach the target")]
    TargetUnreachable(usize),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::Network(_) | CliError::TargetUnreachable(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: Check that the target API is running and MB_API_URL points at it."
                        .yellow()
                );
            }
            CliError::Guid(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: GUIDs are five hyphenated hex groups, e.g. 3fa85f64-5717-4562-b3fc-2c963f66afa6."
                        .yellow()
                );
            }
            _ => {}
        }
    }
}
