//! Walrus Prompt Core Library
//!
//! This crate holds the argument-collection engine behind `wp`, an
//! interactive front-end that builds `walrus` client invocations one question
//! at a time instead of making the user remember every flag.
//!
//! # Key Features
//!
//! - **Command Catalog**: A compiled-in, validated table of subcommands and global flags
//! - **Prompt Primitives**: Required, optional, yes/no and numbered-choice questions
//! - **Guided Plans**: Declarative question sequences for commands with exclusive or
//!   conditional flags
//! - **Execution**: Assembling the final argument vector and running the target tool
//!
//! # Examples
//!
//! Collecting the arguments for a command from scripted answers:
//!
//! ```
//! use std::io::Cursor;
//! use walrus_prompt_core::catalog::Catalog;
//! use walrus_prompt_core::collector::collect_command_args;
//! use walrus_prompt_core::prompt::{Prompter, ReaderLines};
//!
//! let catalog = Catalog::builtin()?;
//! let answers = Cursor::new("1\nxyz\n");
//! let mut prompter = Prompter::new(ReaderLines::new(answers), Vec::new());
//!
//! let args = collect_command_args(&mut prompter, catalog.get("blob-status").unwrap())?;
//! assert_eq!(args.into_vec(), vec!["--blob-id", "xyz"]);
//! # Ok::<(), walrus_prompt_core::error::Error>(())
//! ```

pub mod catalog;
pub mod collector;
pub mod config;
pub mod error;
pub mod execution;
pub mod plan;
pub mod prompt;
