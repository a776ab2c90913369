//! GUID utility commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;

use money_guid::Guid;

use crate::output::print_success;

/// GUID commands.
#[derive(Debug, Args)]
pub struct GuidCommand {
    #[command(subcommand)]
    command: GuidSubcommand,
}

#[derive(Debug, Subcommand)]
enum GuidSubcommand {
    /// Mint fresh random GUIDs.
    New(NewArgs),

    /// Validate a GUID string.
    Check(CheckArgs),
}

#[derive(Debug, Args)]
struct NewArgs {
    /// Number of GUIDs to mint.
    #[arg(long, default_value_t = 1)]
    count: usize,
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// The value to validate.
    value: String,

    /// Normalize instead of failing: malformed input prints the empty
    /// sentinel, matching the lenient constructor policy.
    #[arg(long)]
    lenient: bool,
}

impl GuidCommand {
    pub fn run(self) -> Result<()> {
        match self.command {
            GuidSubcommand::New(args) => {
                for _ in 0..args.count {
                    println!("{}", Guid::raw_random());
                }
                Ok(())
            }
            GuidSubcommand::Check(args) => check(args),
        }
    }
}

fn check(args: CheckArgs) -> Result<()> {
    if args.lenient {
        let guid = Guid::parse_lenient(&args.value);
        println!("{guid}");
        if guid.is_empty() && args.value != Guid::EMPTY {
            eprintln!("{}", "Note: input was malformed; fell back to the empty sentinel.".yellow());
        }
        return Ok(());
    }

    let guid = Guid::parse(&args.value).map_err(crate::error::CliError::Guid)?;
    if guid.is_empty() {
        print_success("valid (empty sentinel)");
    } else {
        print_success("valid");
    }
    Ok(())
}
