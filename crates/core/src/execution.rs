use std::fmt::{Display, Formatter};
use std::process::{Command, ExitStatus, Stdio};

use log::info;

use crate::collector::ArgumentVector;
use crate::error::{Error, Result};

/// A fully assembled call of the target tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    subcommand: String,
    command_args: ArgumentVector,
    global_args: ArgumentVector,
}

impl Invocation {
    pub fn new(
        program: String,
        subcommand: String,
        command_args: ArgumentVector,
        global_args: ArgumentVector,
    ) -> Self {
        Self {
            program,
            subcommand,
            command_args,
            global_args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Every token after the program name.
    pub fn args(&self) -> Vec<&str> {
        std::iter::once(self.subcommand.as_str())
            .chain(self.command_args.as_slice().iter().map(String::as_str))
            .chain(self.global_args.as_slice().iter().map(String::as_str))
            .collect()
    }

    /// The program name followed by every argument.
    pub fn argv(&self) -> Vec<&str> {
        let mut argv = vec![self.program.as_str()];
        argv.extend(self.args());
        argv
    }

    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(self.args());
        command
    }
}

impl Display for Invocation {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.argv().join(" "))
    }
}

/// Runs the invocation with the parent's standard streams and waits for it.
///
/// The exit status is returned as-is; a failing target tool is not an error
/// here, it has already reported itself on the inherited streams.
///
/// # Errors
///
/// Returns [`Error::SubProcess`] if the program cannot be started, or
/// [`Error::Stdio`] if waiting on it fails.
pub fn execute_command(invocation: &Invocation) -> Result<ExitStatus> {
    info!("Executing {:?}", invocation.argv());

    let mut child = invocation
        .to_command()
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| Error::sub_process(invocation.program().to_string(), e))?;

    let status = child.wait()?;
    info!("`{}` finished with {}", invocation.program(), status);

    Ok(status)
}
