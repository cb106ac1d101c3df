//! Walrus Prompt CLI Library
//!
//! This crate provides the terminal front-end for `wp`, which walks the user
//! through building a `walrus` client invocation. It handles the command menu,
//! raw-mode answer input and command-line options; the catalog, prompts and
//! argument collection live in `walrus-prompt-core`.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`command_selection`]: The command menu and terminal line input
//!
//! # Examples
//!
//! ```bash
//! # Pick a command from the menu
//! wp
//!
//! # Go straight to the prompts for one command
//! wp store
//!
//! # Use a specific binary and only print the result
//! wp --binary ~/bin/walrus --dry-run
//! ```

pub mod cli_args;
pub mod command_selection;
