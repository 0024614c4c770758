//! Command-line parsing.
//!
//! Everything required comes from the environment; running with no
//! arguments performs one full sync pass.

use clap::Parser;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "estimate-sync",
    version,
    about = "Sync the \"Estimation Hack\" field of a GitHub project from its Size and Risk fields"
)]
pub struct Cli {
    /// Compute and log every decision without writing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Log debug output (request paging, cursors).
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Default log filter when `ESTIMATE_SYNC_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_is_a_plain_run() {
        let cli = Cli::try_parse_from(["estimate-sync"]).unwrap();
        assert!(!cli.dry_run);
        assert_eq!(cli.log_level(), "info");
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from(["estimate-sync", "--dry-run", "-v"]).unwrap();
        assert!(cli.dry_run);
        assert_eq!(cli.log_level(), "debug");

        let cli = Cli::try_parse_from(["estimate-sync", "--quiet"]).unwrap();
        assert_eq!(cli.log_level(), "warn");

        assert!(Cli::try_parse_from(["estimate-sync", "-v", "-q"]).is_err());
    }
}
