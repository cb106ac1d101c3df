//! Turns answers into argument vectors.
//!
//! [`collect_command_args`] gathers the arguments that follow the subcommand
//! name, either through the generic option loop or a guided [`Plan`].
//! [`collect_global_options`] gathers the flags shared by every subcommand.

use std::fmt::{Display, Formatter};
use std::io::Write;

use log::debug;

use crate::catalog::{Catalog, CommandSpec, Strategy};
use crate::error::Result;
use crate::plan::{Plan, Step};
use crate::prompt::{LineInput, Prompter};

/// Append-only list of argument tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentVector {
    args: Vec<String>,
}

impl ArgumentVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_positional(&mut self, value: String) {
        self.args.push(value);
    }

    pub fn push_flag(&mut self, flag: &str) {
        self.args.push(flag.to_string());
    }

    pub fn push_flag_value(&mut self, flag: &str, value: String) {
        self.args.push(flag.to_string());
        self.args.push(value);
    }

    pub fn as_slice(&self) -> &[String] {
        &self.args
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.args
    }
}

impl Display for ArgumentVector {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.args.join(" "))
    }
}

/// Collects the arguments for `command` using its strategy.
///
/// # Errors
///
/// Returns [`crate::error::Error::Cancelled`] if the user interrupts, or an
/// I/O error from the prompts.
pub fn collect_command_args<I: LineInput, W: Write>(
    prompter: &mut Prompter<I, W>,
    command: &CommandSpec,
) -> Result<ArgumentVector> {
    let args = match command.strategy {
        Strategy::Generic => collect_generic(prompter, command)?,
        Strategy::Guided(plan) => collect_guided(prompter, plan)?,
    };

    debug!("Collected arguments for `{}`: {:?}", command.name, args);
    Ok(args)
}

fn collect_generic<I: LineInput, W: Write>(
    prompter: &mut Prompter<I, W>,
    command: &CommandSpec,
) -> Result<ArgumentVector> {
    let mut args = ArgumentVector::new();

    for label in &command.required_positionals {
        args.push_positional(prompter.required(&format!("Enter {label}"))?);
    }

    if command.flags.is_empty() {
        return Ok(args);
    }

    prompter.say(&format!("\nAvailable options for '{}':", command.name))?;
    for flag in command.flags.values() {
        prompter.say(&format!("  {flag}"))?;
    }

    while let Some(token) = prompter.optional("\nEnter an option (press Enter when done)")? {
        match command.flag(&token) {
            Some(flag) if flag.bare => args.push_flag(&flag.token),
            Some(flag) => {
                let value = prompter.required(&format!("Enter value for {}", flag.token))?;
                args.push_flag_value(&flag.token, value);
            }
            None => prompter.say(&format!("Invalid option: {token}"))?,
        }
    }

    Ok(args)
}

fn collect_guided<I: LineInput, W: Write>(
    prompter: &mut Prompter<I, W>,
    plan: &Plan,
) -> Result<ArgumentVector> {
    let mut args = ArgumentVector::new();
    run_steps(prompter, plan.steps, &mut args)?;
    Ok(args)
}

fn run_steps<I: LineInput, W: Write>(
    prompter: &mut Prompter<I, W>,
    steps: &[Step],
    args: &mut ArgumentVector,
) -> Result<()> {
    for step in steps {
        match step {
            Step::Positional { prompt } => {
                args.push_positional(prompter.required(prompt)?);
            }
            Step::Valued { flag, prompt } => {
                let value = prompter.required(prompt)?;
                args.push_flag_value(flag, value);
            }
            Step::Elidable { flag, prompt } => {
                if let Some(value) = prompter.optional(prompt)? {
                    args.push_flag_value(flag, value);
                }
            }
            Step::Toggle {
                question,
                flag,
                then,
            } => {
                if prompter.yes_no(question)? {
                    if let Some(flag) = flag {
                        args.push_flag(flag);
                    }
                    run_steps(prompter, then, args)?;
                }
            }
            Step::Exclusive { title, branches } => {
                prompter.say(&format!("\n{title}"))?;
                for (number, branch) in branches.iter().enumerate() {
                    prompter.say(&format!("{}. {}", number + 1, branch.label))?;
                }

                let numbers: Vec<String> = (1..=branches.len()).map(|n| n.to_string()).collect();
                let tokens: Vec<&str> = numbers.iter().map(String::as_str).collect();
                let label = format!("\nEnter your choice (1-{})", branches.len());

                let branch = &branches[prompter.choice(&label, &tokens)?];
                let value = prompter.required(branch.prompt)?;
                args.push_flag_value(branch.flag, value);
            }
        }
    }

    Ok(())
}

/// Asks about every global flag, in catalog order.
///
/// # Errors
///
/// Returns [`crate::error::Error::Cancelled`] if the user interrupts, or an
/// I/O error from the prompts.
pub fn collect_global_options<I: LineInput, W: Write>(
    prompter: &mut Prompter<I, W>,
    catalog: &Catalog,
) -> Result<ArgumentVector> {
    let mut args = ArgumentVector::new();

    for flag in catalog.global_flags() {
        if !prompter.yes_no(&format!("Do you want to set {}?", flag.token))? {
            continue;
        }

        if flag.bare {
            args.push_flag(&flag.token);
        } else {
            let value = prompter.required(&flag.description)?;
            args.push_flag_value(&flag.token, value);
        }
    }

    debug!("Collected global options: {:?}", args);
    Ok(args)
}
