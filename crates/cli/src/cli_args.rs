//! Command-line argument parsing.
//!
//! This module defines the command-line interface of the `wp` binary using
//! the `clap` crate. Everything else is asked interactively.

use clap::Parser;

/// Command-line arguments for the `wp` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use walrus_prompt_cli::cli_args::Args;
///
/// let args = Args::parse_from(["wp", "--dry-run", "store"]);
/// assert!(args.dry_run);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path or name of the walrus binary to run.
    ///
    /// If not provided, `walrus` is looked up on `PATH`.
    #[arg(long, short = 'b')]
    pub binary: Option<String>,

    /// Print the assembled command but do not execute it.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,

    /// The subcommand to build, skipping the menu.
    ///
    /// Its arguments are still asked for interactively.
    #[arg(num_args(1))]
    pub command: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["wp"]);

        assert!(args.binary.is_none());
        assert!(!args.dry_run);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from(["wp", "-b", "/opt/walrus", "-d"]);

        assert_eq!(args.binary, Some("/opt/walrus".to_string()));
        assert!(args.dry_run);
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from(["wp", "--binary", "~/bin/walrus", "--dry-run"]);

        assert_eq!(args.binary, Some("~/bin/walrus".to_string()));
        assert!(args.dry_run);
    }

    #[test]
    fn test_args_command() {
        let args = Args::parse_from(["wp", "blob-status"]);
        assert_eq!(args.command, Some("blob-status".to_string()));
    }

    #[test]
    fn test_args_reject_extra_positionals() {
        let result = Args::try_parse_from(["wp", "store", "a.txt"]);
        assert!(result.is_err());
    }
}
