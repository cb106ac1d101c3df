use std::io::stdout;
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use walrus_prompt_cli::cli_args::Args;
use walrus_prompt_cli::command_selection::{
    console_input, prompt_for_command_choice, CommandChoice, CrosstermScreen,
};
use walrus_prompt_core::catalog::{Catalog, EXIT_COMMAND};
use walrus_prompt_core::collector::{collect_command_args, collect_global_options};
use walrus_prompt_core::config;
use walrus_prompt_core::error::Error::UnknownCommand;
use walrus_prompt_core::error::Result;
use walrus_prompt_core::execution::{execute_command, Invocation};
use walrus_prompt_core::prompt::Prompter;

/// Exit code for a session the user cancelled (128 + SIGINT).
const CANCELLED_EXIT_CODE: u8 = 130;

/// Determine which command to build, from the arguments or the menu
fn select_command<'c>(args: &Args, catalog: &'c Catalog) -> Result<CommandChoice<'c>> {
    match &args.command {
        Some(name) if name == EXIT_COMMAND => Ok(CommandChoice::Exit),
        Some(name) => catalog
            .get(name)
            .map(CommandChoice::Command)
            .ok_or_else(|| UnknownCommand(name.clone())),
        None => {
            // The screen restores the terminal when it goes out of scope
            let mut screen = CrosstermScreen::new()?;
            prompt_for_command_choice(&mut screen, catalog)
        }
    }
}

fn execute() -> Result<()> {
    let args = Args::parse();

    let catalog = Catalog::builtin()?;
    let target_tool = config::get_target_tool(&args.binary);
    debug!("Target tool: `{}`", target_tool);

    let command = match select_command(&args, &catalog)? {
        CommandChoice::Exit => {
            println!("Goodbye!");
            return Ok(());
        }
        CommandChoice::Command(command) => command,
    };

    let mut prompter = Prompter::new(console_input(), stdout());

    let command_args = collect_command_args(&mut prompter, command)?;
    let global_args = collect_global_options(&mut prompter, &catalog)?;

    let invocation = Invocation::new(
        target_tool,
        command.name.clone(),
        command_args,
        global_args,
    );

    println!("\nExecuting: {invocation}\n");

    if args.dry_run {
        println!("Dry run is specified, exiting without executing.");
        return Ok(());
    }

    // The target tool reports its own failures on the inherited streams
    let _exit_status = execute_command(&invocation)?;

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_cancellation() => {
            println!("\nOperation cancelled by user. Goodbye!");
            ExitCode::from(CANCELLED_EXIT_CODE)
        }
        Err(e) => {
            eprintln!("\nAn error occurred: {e}");
            ExitCode::FAILURE
        }
    }
}
